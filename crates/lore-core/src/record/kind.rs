use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::LoreError;

/// The closed set of knowledge record kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KnowledgeKind {
    Decision,
    Error,
    Solution,
    Pattern,
    Insight,
}

impl KnowledgeKind {
    /// All variants for iteration.
    pub const ALL: [KnowledgeKind; 5] = [
        Self::Decision,
        Self::Error,
        Self::Solution,
        Self::Pattern,
        Self::Insight,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Decision => "decision",
            Self::Error => "error",
            Self::Solution => "solution",
            Self::Pattern => "pattern",
            Self::Insight => "insight",
        }
    }
}

impl fmt::Display for KnowledgeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for KnowledgeKind {
    type Err = LoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| LoreError::InvalidKind { kind: s.to_string() })
    }
}
