//! Skill Extractor — exact-token matching of the taxonomy against resume text.

use std::collections::HashSet;
use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::skills::taxonomy::{SkillTaxonomy, SKILL_TAXONOMY};
use crate::skills::tokenizer::tokenize;

/// Matched keywords for a single category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryMatch {
    pub category: String,
    pub skills: Vec<String>,
}

/// Category → matched keywords, in taxonomy order.
/// Only categories with at least one match are present.
/// Serialized as a JSON object whose key order follows the taxonomy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedSkills {
    categories: Vec<CategoryMatch>,
}

impl ExtractedSkills {
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Matched keywords for `category`; an absent category reads as empty.
    pub fn get(&self, category: &str) -> &[String] {
        self.categories
            .iter()
            .find(|c| c.category == category)
            .map(|c| c.skills.as_slice())
            .unwrap_or(&[])
    }

    pub fn contains(&self, category: &str, skill: &str) -> bool {
        self.get(category).iter().any(|s| s == skill)
    }

    pub fn categories(&self) -> impl Iterator<Item = &CategoryMatch> {
        self.categories.iter()
    }

    /// Union of matched keywords across all categories.
    pub fn all_skills(&self) -> HashSet<&str> {
        self.categories
            .iter()
            .flat_map(|c| c.skills.iter().map(String::as_str))
            .collect()
    }

    /// Appends `skills` under `category`, merging with an existing entry.
    /// Empty lists are ignored so no empty-valued entry can exist.
    pub fn insert(&mut self, category: impl Into<String>, skills: Vec<String>) {
        if skills.is_empty() {
            return;
        }
        let category = category.into();
        match self.categories.iter_mut().find(|c| c.category == category) {
            Some(existing) => existing.skills.extend(skills),
            None => self.categories.push(CategoryMatch { category, skills }),
        }
    }
}

impl<C: Into<String>, S: Into<String>> FromIterator<(C, Vec<S>)> for ExtractedSkills {
    fn from_iter<I: IntoIterator<Item = (C, Vec<S>)>>(iter: I) -> Self {
        let mut out = ExtractedSkills::default();
        for (category, skills) in iter {
            out.insert(category, skills.into_iter().map(Into::into).collect());
        }
        out
    }
}

impl Serialize for ExtractedSkills {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.categories.len()))?;
        for c in &self.categories {
            map.serialize_entry(&c.category, &c.skills)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ExtractedSkills {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct SkillsVisitor;

        impl<'de> Visitor<'de> for SkillsVisitor {
            type Value = ExtractedSkills;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of category name to a list of skills")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut skills = ExtractedSkills::default();
                while let Some((category, list)) = access.next_entry::<String, Vec<String>>()? {
                    skills.insert(category, list);
                }
                Ok(skills)
            }
        }

        deserializer.deserialize_map(SkillsVisitor)
    }
}

/// Extracts taxonomy skills from free-form text using the built-in taxonomy.
pub fn extract_skills(text: &str) -> ExtractedSkills {
    extract_skills_with(text, SKILL_TAXONOMY)
}

/// Lower-cases and tokenizes `text`, then keeps every keyword that equals a token exactly.
/// Output preserves taxonomy order; categories without matches are omitted.
pub fn extract_skills_with(text: &str, taxonomy: &SkillTaxonomy) -> ExtractedSkills {
    let lowered = text.to_lowercase();
    let tokens: HashSet<String> = tokenize(&lowered).into_iter().collect();

    taxonomy
        .iter()
        .map(|category| {
            let matched: Vec<String> = category
                .keywords
                .iter()
                .filter(|kw| tokens.contains(**kw))
                .map(|kw| kw.to_string())
                .collect();
            (category.name, matched)
        })
        .collect()
}
