//
// Copyright (c) 2025 Tudor Caloian
//
use crate::domain::entities::{CategoryPreferences, ConsentDecision};
use anyhow::Error;
#[cfg(test)]
use mockall::{automock, predicate::*};

///
/// Repository for the visitor's consent records.
///
/// The decision and the category preferences occupy independent storage
/// slots, but `put_consent` writes both in one call so that a resumed
/// session never observes one slot updated without the other.
///
#[cfg_attr(test, automock)]
pub trait ConsentRepository: Send + Sync {
    /// Retrieve the persisted decision, returning `None` if nothing
    /// recognizable has been stored.
    fn get_decision(&self) -> Result<Option<ConsentDecision>, Error>;

    /// Retrieve the persisted category preferences, returning `None` if
    /// nothing has been stored.
    fn get_preferences(&self) -> Result<Option<CategoryPreferences>, Error>;

    /// Persist the decision and the preferences together.
    fn put_consent(
        &self,
        decision: ConsentDecision,
        preferences: &CategoryPreferences,
    ) -> Result<(), Error>;
}
