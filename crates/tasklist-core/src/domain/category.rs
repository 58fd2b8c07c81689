//! Task Category
//!
//! Closed set of classifications. Adding a variant means adding its
//! code and its label below in lockstep.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::entity::{DomainError, DomainResult};

/// Classification tag for a task, drives both badge style and label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    Work,
    Personal,
    Study,
}

/// Display labels, keyed by category
pub const CATEGORY_LABELS: &[(Category, &str)] = &[
    (Category::Work, "Work"),
    (Category::Personal, "Personal"),
    (Category::Study, "Study"),
];

impl Category {
    /// All categories in selector order
    pub const ALL: [Category; 3] = [Category::Work, Category::Personal, Category::Study];

    /// Stable code, as stored and as used in CSS class names
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Work => "work",
            Category::Personal => "personal",
            Category::Study => "study",
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        CATEGORY_LABELS
            .iter()
            .find(|(category, _)| category == self)
            .map(|(_, label)| *label)
            .unwrap_or_else(|| self.as_str())
    }
}

impl FromStr for Category {
    type Err = DomainError;

    fn from_str(s: &str) -> DomainResult<Self> {
        match s {
            "work" => Ok(Category::Work),
            "personal" => Ok(Category::Personal),
            "study" => Ok(Category::Study),
            other => Err(DomainError::InvalidInput(format!("unknown category '{}'", other))),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
