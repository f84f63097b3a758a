//! Role Inference — an ordered table of (predicate, label) rules over extracted skills.
//!
//! Every rule is evaluated independently; output order is table order and
//! labels are not de-duplicated.

use serde::Serialize;

use crate::skills::extractor::ExtractedSkills;
use crate::skills::taxonomy::{FRAMEWORKS, LANGUAGES};

pub const FRONTEND_DEVELOPER: &str = "Frontend Developer";
pub const BACKEND_DEVELOPER: &str = "Backend Developer";
pub const MERN_STACK_DEVELOPER: &str = "MERN Stack Developer";
pub const FULL_STACK_DEVELOPER: &str = "Full Stack Developer";

const MERN_STACK: &[&str] = &["react", "node.js", "mongodb"];
const GENERAL_PURPOSE_LANGUAGES: &[&str] = &["python", "java", "c++"];

/// A single inference rule.
#[derive(Clone, Copy, Serialize)]
pub struct RoleRule {
    pub label: &'static str,
    pub description: &'static str,
    #[serde(skip)]
    pub matches: fn(&ExtractedSkills) -> bool,
}

impl std::fmt::Debug for RoleRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RoleRule")
            .field("label", &self.label)
            .field("description", &self.description)
            .finish()
    }
}

pub static ROLE_RULES: &[RoleRule] = &[
    RoleRule {
        label: FRONTEND_DEVELOPER,
        description: "Frameworks contains react",
        matches: |s| s.contains(FRAMEWORKS, "react"),
    },
    RoleRule {
        label: BACKEND_DEVELOPER,
        description: "Frameworks contains node.js",
        matches: |s| s.contains(FRAMEWORKS, "node.js"),
    },
    RoleRule {
        label: MERN_STACK_DEVELOPER,
        description: "all skills include react, node.js and mongodb",
        matches: |s| {
            let all = s.all_skills();
            MERN_STACK.iter().all(|skill| all.contains(skill))
        },
    },
    RoleRule {
        label: FULL_STACK_DEVELOPER,
        description: "Languages contains any of python, java, c++",
        matches: |s| {
            s.get(LANGUAGES)
                .iter()
                .any(|lang| GENERAL_PURPOSE_LANGUAGES.contains(&lang.as_str()))
        },
    },
];

/// Infers role labels from the built-in rule table.
pub fn infer_roles(skills: &ExtractedSkills) -> Vec<&'static str> {
    infer_roles_with(skills, ROLE_RULES)
}

pub fn infer_roles_with(skills: &ExtractedSkills, rules: &[RoleRule]) -> Vec<&'static str> {
    rules
        .iter()
        .filter(|rule| (rule.matches)(skills))
        .map(|rule| rule.label)
        .collect()
}
