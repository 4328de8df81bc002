//! Tag vocabularies used to classify and query activities
//!
//! The wire strings are the Swedish tags the persisted data has always used
//! ("2-4", "inomhus", "kväll", ...). They are part of the storage format and
//! must not be translated.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

// =============================================================================
// Age group
// =============================================================================

/// Age band an activity is suitable for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgeGroup {
    #[serde(rename = "2-4")]
    TwoToFour,
    #[serde(rename = "5-7")]
    FiveToSeven,
    #[serde(rename = "8-10")]
    EightToTen,
}

impl AgeGroup {
    pub fn as_str(&self) -> &'static str {
        match self {
            AgeGroup::TwoToFour => "2-4",
            AgeGroup::FiveToSeven => "5-7",
            AgeGroup::EightToTen => "8-10",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AgeGroup::TwoToFour => "2–4 år",
            AgeGroup::FiveToSeven => "5–7 år",
            AgeGroup::EightToTen => "8–10 år",
        }
    }

    /// Returns all age groups, youngest first.
    pub fn all() -> [AgeGroup; 3] {
        [
            AgeGroup::TwoToFour,
            AgeGroup::FiveToSeven,
            AgeGroup::EightToTen,
        ]
    }
}

impl fmt::Display for AgeGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AgeGroup {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "2-4" => Ok(AgeGroup::TwoToFour),
            "5-7" => Ok(AgeGroup::FiveToSeven),
            "8-10" => Ok(AgeGroup::EightToTen),
            _ => Err(DomainError::parse(format!(
                "Invalid age group '{}'. Valid age groups: 2-4, 5-7, 8-10",
                s
            ))),
        }
    }
}

// =============================================================================
// Setting
// =============================================================================

/// Where an activity can take place. Stored under the `weather` key.
///
/// `Any` is a real selection, not missing data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Setting {
    #[serde(rename = "inomhus")]
    Indoor,
    #[serde(rename = "utomhus")]
    Outdoor,
    #[serde(rename = "valfritt")]
    Any,
}

impl Setting {
    pub fn as_str(&self) -> &'static str {
        match self {
            Setting::Indoor => "inomhus",
            Setting::Outdoor => "utomhus",
            Setting::Any => "valfritt",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Setting::Indoor => "Inomhus",
            Setting::Outdoor => "Utomhus",
            Setting::Any => "Valfritt",
        }
    }

    pub fn all() -> [Setting; 3] {
        [Setting::Indoor, Setting::Outdoor, Setting::Any]
    }
}

impl fmt::Display for Setting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Setting {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "inomhus" => Ok(Setting::Indoor),
            "utomhus" => Ok(Setting::Outdoor),
            "valfritt" => Ok(Setting::Any),
            _ => Err(DomainError::parse(format!(
                "Invalid setting '{}'. Valid settings: inomhus, utomhus, valfritt",
                s
            ))),
        }
    }
}

// =============================================================================
// Time of day (activity vocabulary)
// =============================================================================

/// When an activity suits. Finer grained than [`QueryTime`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeOfDay {
    #[serde(rename = "morgon")]
    Morning,
    #[serde(rename = "eftermiddag")]
    Afternoon,
    #[serde(rename = "kväll")]
    Evening,
    #[serde(rename = "valfritt")]
    Any,
}

impl TimeOfDay {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeOfDay::Morning => "morgon",
            TimeOfDay::Afternoon => "eftermiddag",
            TimeOfDay::Evening => "kväll",
            TimeOfDay::Any => "valfritt",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TimeOfDay::Morning => "Morgon",
            TimeOfDay::Afternoon => "Eftermiddag",
            TimeOfDay::Evening => "Kväll",
            TimeOfDay::Any => "Valfritt",
        }
    }

    pub fn all() -> [TimeOfDay; 4] {
        [
            TimeOfDay::Morning,
            TimeOfDay::Afternoon,
            TimeOfDay::Evening,
            TimeOfDay::Any,
        ]
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TimeOfDay {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "morgon" => Ok(TimeOfDay::Morning),
            "eftermiddag" => Ok(TimeOfDay::Afternoon),
            "kväll" => Ok(TimeOfDay::Evening),
            "valfritt" => Ok(TimeOfDay::Any),
            _ => Err(DomainError::parse(format!(
                "Invalid time of day '{}'. Valid values: morgon, eftermiddag, kväll, valfritt",
                s
            ))),
        }
    }
}

// =============================================================================
// Time of day (query vocabulary)
// =============================================================================

/// The coarse time choice offered to the child: day or evening.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QueryTime {
    #[serde(rename = "dag")]
    Day,
    #[serde(rename = "kväll")]
    Evening,
}

impl QueryTime {
    pub fn as_str(&self) -> &'static str {
        match self {
            QueryTime::Day => "dag",
            QueryTime::Evening => "kväll",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            QueryTime::Day => "Dag",
            QueryTime::Evening => "Kväll",
        }
    }

    /// Whether an activity tagged `time` suits this query choice.
    ///
    /// `valfritt` always matches. "dag" covers morning and afternoon,
    /// "kväll" covers evening only.
    pub fn accepts(&self, time: TimeOfDay) -> bool {
        match (self, time) {
            (_, TimeOfDay::Any) => true,
            (QueryTime::Day, TimeOfDay::Morning | TimeOfDay::Afternoon) => true,
            (QueryTime::Evening, TimeOfDay::Evening) => true,
            _ => false,
        }
    }
}

impl fmt::Display for QueryTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for QueryTime {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "dag" => Ok(QueryTime::Day),
            "kväll" => Ok(QueryTime::Evening),
            _ => Err(DomainError::parse(format!(
                "Invalid time choice '{}'. Valid choices: dag, kväll",
                s
            ))),
        }
    }
}
