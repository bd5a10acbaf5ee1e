//
// Copyright (c) 2025 Tudor Caloian
//
use anyhow::{anyhow, Error};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

///
/// The `ConsentDecision` is the top-level outcome of the cookie banner, either
/// a choice the visitor made or `Undecided` when no recognized value has been
/// persisted yet.
///
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ConsentDecision {
    /// Visitor accepted every category.
    Accepted,
    /// Visitor rejected everything but the necessary category.
    Rejected,
    /// Visitor saved an explicit per-category selection.
    Custom,
    /// No recognized decision has been persisted.
    Undecided,
}

impl ConsentDecision {
    /// Return `true` if a decision has been made, one way or another.
    pub fn is_decided(&self) -> bool {
        !matches!(*self, ConsentDecision::Undecided)
    }
}

impl Default for ConsentDecision {
    fn default() -> Self {
        ConsentDecision::Undecided
    }
}

impl fmt::Display for ConsentDecision {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ConsentDecision::Accepted => write!(f, "accepted"),
            ConsentDecision::Rejected => write!(f, "rejected"),
            ConsentDecision::Custom => write!(f, "custom"),
            ConsentDecision::Undecided => write!(f, "undecided"),
        }
    }
}

impl FromStr for ConsentDecision {
    type Err = Error;

    /// Parse one of the persisted wire values. `Undecided` has no stored form,
    /// it is the absence of a recognized value.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "accepted" => Ok(ConsentDecision::Accepted),
            "rejected" => Ok(ConsentDecision::Rejected),
            "custom" => Ok(ConsentDecision::Custom),
            _ => Err(anyhow!(format!("not a recognized consent value: {}", s))),
        }
    }
}

///
/// One class of non-essential data use that the visitor can toggle, plus the
/// `Necessary` category which is structural and never editable.
///
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ConsentCategory {
    Necessary,
    Analytics,
    Marketing,
    Preferences,
}

fn necessary_default() -> bool {
    true
}

// The stored flag is read for shape only; `necessary` is structurally true no
// matter what the payload claims.
fn deserialize_necessary<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let _ = bool::deserialize(deserializer)?;
    Ok(true)
}

///
/// The per-category cookie preferences. The fields are private so that no
/// code path can clear the `necessary` flag; everything else defaults to
/// `false` until the visitor opts in.
///
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct CategoryPreferences {
    #[serde(
        default = "necessary_default",
        deserialize_with = "deserialize_necessary"
    )]
    necessary: bool,
    #[serde(default)]
    analytics: bool,
    #[serde(default)]
    marketing: bool,
    #[serde(default)]
    preferences: bool,
}

impl Default for CategoryPreferences {
    fn default() -> Self {
        Self {
            necessary: true,
            analytics: false,
            marketing: false,
            preferences: false,
        }
    }
}

impl CategoryPreferences {
    /// Construct preferences with every category granted.
    pub fn accept_all() -> Self {
        Self {
            necessary: true,
            analytics: true,
            marketing: true,
            preferences: true,
        }
    }

    /// Return the state of the named category flag.
    pub fn allows(&self, category: ConsentCategory) -> bool {
        match category {
            ConsentCategory::Necessary => self.necessary,
            ConsentCategory::Analytics => self.analytics,
            ConsentCategory::Marketing => self.marketing,
            ConsentCategory::Preferences => self.preferences,
        }
    }

    /// Set the named category flag, returning `true` if the change was
    /// applied. The `Necessary` category is immutable and is left alone.
    pub fn set(&mut self, category: ConsentCategory, value: bool) -> bool {
        match category {
            ConsentCategory::Necessary => false,
            ConsentCategory::Analytics => {
                self.analytics = value;
                true
            }
            ConsentCategory::Marketing => {
                self.marketing = value;
                true
            }
            ConsentCategory::Preferences => {
                self.preferences = value;
                true
            }
        }
    }

    /// Return `true` if every category, necessary included, is granted.
    pub fn all_granted(&self) -> bool {
        self.necessary && self.analytics && self.marketing && self.preferences
    }

    /// Return `true` if only the necessary category is granted.
    pub fn essential_only(&self) -> bool {
        self.necessary && !self.analytics && !self.marketing && !self.preferences
    }
}
