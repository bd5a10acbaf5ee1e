//
// Copyright (c) 2025 Tudor Caloian
//

//! Binds the consent entities to their durable storage slots.

use crate::data::sources::KeyValueSource;
use crate::domain::entities::{CategoryPreferences, ConsentDecision};
use crate::domain::repositories::ConsentRepository;
use anyhow::Error;
use std::sync::Arc;

// Slot for the decision, one of the bare wire strings.
static DECISION_KEY: &str = "dashexecs_cookie_consent";

// Slot for the category preferences, a JSON record.
static PREFERENCES_KEY: &str = "dashexecs_cookie_categories";

///
/// Implementation of `ConsentRepository` over an abstract key/value source.
///
pub struct ConsentRepositoryImpl {
    source: Arc<dyn KeyValueSource>,
}

impl ConsentRepositoryImpl {
    pub fn new(source: Arc<dyn KeyValueSource>) -> Self {
        Self { source }
    }
}

impl ConsentRepository for ConsentRepositoryImpl {
    fn get_decision(&self) -> Result<Option<ConsentDecision>, Error> {
        let option = self.source.get_value(DECISION_KEY)?;
        match option {
            // absence and any unrecognized value both mean undecided
            Some(value) => Ok(value.parse().ok()),
            None => Ok(None),
        }
    }

    fn get_preferences(&self) -> Result<Option<CategoryPreferences>, Error> {
        let option = self.source.get_value(PREFERENCES_KEY)?;
        match option {
            Some(value) => {
                let preferences: CategoryPreferences = serde_json::from_str(&value)?;
                Ok(Some(preferences))
            }
            None => Ok(None),
        }
    }

    fn put_consent(
        &self,
        decision: ConsentDecision,
        preferences: &CategoryPreferences,
    ) -> Result<(), Error> {
        let as_json = serde_json::to_string(preferences)?;
        // write the preferences before the decision; the decision is the
        // gate, so a partial failure leaves the visitor undecided rather
        // than decided with stale preferences
        self.source.put_value(PREFERENCES_KEY, &as_json)?;
        self.source
            .put_value(DECISION_KEY, &decision.to_string())?;
        Ok(())
    }
}
