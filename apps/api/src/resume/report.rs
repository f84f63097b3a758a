//! Resume analysis report: skills, inferred roles, per-role job sections and user notices.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info};
use uuid::Uuid;

use crate::jobs::client::JobSearch;
use crate::jobs::recommend::{recommend_jobs, RoleSection};
use crate::skills::extractor::{extract_skills, ExtractedSkills};
use crate::skills::roles::infer_roles;

pub const NO_SKILLS_NOTICE: &str = "No matching skills found from the known categories.";
pub const NO_ROLES_NOTICE: &str =
    "Try uploading a resume with more tech-oriented skills to get role-based recommendations.";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeLevel {
    Info,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub analysis_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub location: String,
    pub skills: ExtractedSkills,
    pub roles: Vec<&'static str>,
    pub sections: Vec<RoleSection>,
    pub notices: Vec<Notice>,
}

/// Full pipeline after text extraction: skills → roles → one job search per role.
/// Job-service failures are confined to their role section; this never fails.
pub async fn analyze_resume_text(
    text: &str,
    location: &str,
    search: &dyn JobSearch,
) -> AnalysisReport {
    let analysis_id = Uuid::new_v4();
    let skills = extract_skills(text);
    let roles = infer_roles(&skills);

    info!(
        "Analysis {analysis_id}: {} skill categories, {} roles, location={location}",
        skills.len(),
        roles.len()
    );

    debug!(
        "Analysis {analysis_id}: matched {:?}",
        skills
            .categories()
            .map(|c| format!("{}={}", c.category, c.skills.join("|")))
            .collect::<Vec<_>>()
    );

    let mut notices = Vec::new();
    if skills.is_empty() {
        notices.push(Notice {
            level: NoticeLevel::Warning,
            message: NO_SKILLS_NOTICE.to_string(),
        });
    }

    let sections = if roles.is_empty() {
        notices.push(Notice {
            level: NoticeLevel::Info,
            message: NO_ROLES_NOTICE.to_string(),
        });
        Vec::new()
    } else {
        recommend_jobs(search, &roles, location).await
    };

    AnalysisReport {
        analysis_id,
        generated_at: Utc::now(),
        location: location.to_string(),
        skills,
        roles,
        sections,
        notices,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jobs::client::JobSearchError;
    use crate::jobs::models::JobRecord;
    use crate::jobs::recommend::RoleOutcome;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Returns one listing per call and counts calls.
    #[derive(Default)]
    struct CountingSearch {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl JobSearch for CountingSearch {
        async fn search(
            &self,
            role: &str,
            location: &str,
        ) -> Result<Vec<JobRecord>, JobSearchError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(vec![JobRecord {
                title: role.to_string(),
                company: "Acme".to_string(),
                location: format!("{location}, India"),
                apply_link: "https://acme.example/apply".to_string(),
            }])
        }
    }

    #[tokio::test]
    async fn test_non_tech_resume_warns_and_skips_queries() {
        let search = CountingSearch::default();
        let report = analyze_resume_text("Pastry chef and barista", "Pune", &search).await;

        assert!(report.skills.is_empty());
        assert!(report.roles.is_empty());
        assert!(report.sections.is_empty());
        assert_eq!(search.calls.load(Ordering::SeqCst), 0);
        assert_eq!(
            report.notices,
            vec![
                Notice {
                    level: NoticeLevel::Warning,
                    message: NO_SKILLS_NOTICE.to_string()
                },
                Notice {
                    level: NoticeLevel::Info,
                    message: NO_ROLES_NOTICE.to_string()
                },
            ]
        );
    }

    #[tokio::test]
    async fn test_skills_without_roles_only_suggests() {
        let search = CountingSearch::default();
        let report = analyze_resume_text("Docker and MySQL administration", "Delhi", &search).await;

        assert!(!report.skills.is_empty());
        assert!(report.roles.is_empty());
        assert_eq!(search.calls.load(Ordering::SeqCst), 0);
        assert_eq!(report.notices.len(), 1);
        assert_eq!(report.notices[0].level, NoticeLevel::Info);
    }

    #[tokio::test]
    async fn test_mern_resume_queries_each_role() {
        let search = CountingSearch::default();
        let text = "Full-stack work in React, Node.js and MongoDB. Scripting in Python.";
        let report = analyze_resume_text(text, "Hyderabad", &search).await;

        assert_eq!(
            report.roles,
            vec![
                "Frontend Developer",
                "Backend Developer",
                "MERN Stack Developer",
                "Full Stack Developer"
            ]
        );
        assert_eq!(search.calls.load(Ordering::SeqCst), 4);
        assert_eq!(report.sections.len(), 4);
        assert!(report
            .sections
            .iter()
            .all(|s| matches!(s.outcome, RoleOutcome::Jobs { .. }) && s.location == "Hyderabad"));
        assert!(report.notices.is_empty());
    }
}
