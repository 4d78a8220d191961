use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Task priority.
///
/// The backend has stored the medium level under several spellings
/// ("Med", "medium", "Medium"); all of them parse to [`Priority::Medium`].
/// Outbound values always use the canonical labels `High`, `Medium`, `Low`.
/// Labels that match none of the known levels are kept verbatim and rank
/// below [`Priority::Low`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "String")]
pub enum Priority {
    High,
    Medium,
    Low,
    Unrecognized(String),
}

impl Priority {
    /// Levels a user can pick in a form, highest first
    pub const SELECTABLE: [Priority; 3] = [Priority::High, Priority::Medium, Priority::Low];

    /// Sort rank: High=3, Medium=2, Low=1, anything else 0
    pub fn rank(&self) -> u8 {
        match self {
            Priority::High => 3,
            Priority::Medium => 2,
            Priority::Low => 1,
            Priority::Unrecognized(_) => 0,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
            Priority::Unrecognized(label) => label,
        }
    }

    /// Next selectable level, wrapping from Low back to High
    pub fn next(&self) -> Priority {
        match self {
            Priority::High => Priority::Medium,
            Priority::Medium => Priority::Low,
            Priority::Low | Priority::Unrecognized(_) => Priority::High,
        }
    }

    /// Previous selectable level, wrapping from High back to Low
    pub fn previous(&self) -> Priority {
        match self {
            Priority::High | Priority::Unrecognized(_) => Priority::Low,
            Priority::Medium => Priority::High,
            Priority::Low => Priority::Medium,
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, Priority::Unrecognized(_))
    }
}

impl Default for Priority {
    /// A task with no priority label at all
    fn default() -> Self {
        Priority::Unrecognized(String::new())
    }
}

impl From<&str> for Priority {
    fn from(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "high" => Priority::High,
            "med" | "medium" => Priority::Medium,
            "low" => Priority::Low,
            _ => Priority::Unrecognized(value.to_string()),
        }
    }
}

impl From<String> for Priority {
    fn from(value: String) -> Self {
        Priority::from(value.as_str())
    }
}

/// `null` on the wire means no priority
impl From<Option<String>> for Priority {
    fn from(value: Option<String>) -> Self {
        value.map(Priority::from).unwrap_or_default()
    }
}

impl From<Priority> for String {
    fn from(value: Priority) -> Self {
        match value {
            Priority::Unrecognized(label) => label,
            known => known.label().to_string(),
        }
    }
}

impl FromStr for Priority {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Priority::from(s))
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Priority::Unrecognized(label) if label.is_empty() => write!(f, "None"),
            other => write!(f, "{}", other.label()),
        }
    }
}
