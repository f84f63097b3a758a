//! Fixed skill taxonomy and the set of selectable job locations.

use serde::Serialize;

/// One taxonomy category and its keywords, in match order.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SkillCategory {
    pub name: &'static str,
    pub keywords: &'static [&'static str],
}

/// Ordered category → keyword table. Keywords are lowercase; category names are unique.
pub type SkillTaxonomy = [SkillCategory];

pub const LANGUAGES: &str = "Languages";
pub const FRAMEWORKS: &str = "Frameworks";
pub const DATABASES: &str = "Databases";
pub const TOOLS: &str = "Tools";

pub static SKILL_TAXONOMY: &SkillTaxonomy = &[
    SkillCategory {
        name: LANGUAGES,
        keywords: &["python", "java", "c++", "c", "javascript", "typescript"],
    },
    SkillCategory {
        name: FRAMEWORKS,
        keywords: &["react", "node.js", "express", "django", "flask"],
    },
    SkillCategory {
        name: DATABASES,
        keywords: &["mongodb", "mysql", "postgresql", "oracle"],
    },
    SkillCategory {
        name: TOOLS,
        keywords: &["git", "docker", "aws", "gcp", "azure"],
    },
];

/// Cities offered for the job search. The first entry is the default choice.
pub static LOCATIONS: &[&str] = &[
    "Bengaluru",
    "Hyderabad",
    "Pune",
    "Chennai",
    "Mumbai",
    "Delhi",
    "Gurgaon",
    "Kolkata",
    "Coimbatore",
];

pub fn default_location() -> &'static str {
    LOCATIONS[0]
}

/// Resolves a user-supplied location to its canonical entry.
/// Matching ignores case and surrounding whitespace.
pub fn resolve_location(input: &str) -> Option<&'static str> {
    let input = input.trim();
    LOCATIONS
        .iter()
        .copied()
        .find(|loc| loc.eq_ignore_ascii_case(input))
}
