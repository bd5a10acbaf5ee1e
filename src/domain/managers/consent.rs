//
// Copyright (c) 2025 Tudor Caloian
//

//! The `consent` module manages the cookie banner state: the persisted
//! decision, the per-category preferences, and the customize-panel draft.
//!
//! Storage access may fail at any time (quota, private browsing, blocked
//! access) and every such failure is swallowed here. A failed read behaves
//! like an undecided visitor, and a failed write only means the banner will
//! be shown again next session.

use crate::domain::entities::{CategoryPreferences, ConsentCategory, ConsentDecision};
use crate::domain::repositories::ConsentRepository;
use log::warn;
use std::sync::Arc;

///
/// A `ConsentManager` owns the in-memory consent state and keeps it in step
/// with the durable storage slots behind the injected repository. All
/// transitions are synchronous and none of them can fail from the caller's
/// point of view.
///
pub struct ConsentManager {
    repo: Arc<dyn ConsentRepository>,
    decision: ConsentDecision,
    preferences: CategoryPreferences,
    // working copy shown in the customize panel
    draft: CategoryPreferences,
    customizing: bool,
}

impl ConsentManager {
    /// Construct a manager, adopting whatever decision the repository holds.
    /// A read failure or an unrecognized value behaves like a fresh visitor.
    pub fn new(repo: Arc<dyn ConsentRepository>) -> Self {
        let decision = match repo.get_decision() {
            Ok(Some(value)) => value,
            Ok(None) => ConsentDecision::Undecided,
            Err(err) => {
                warn!("unable to read consent decision: {}", err);
                ConsentDecision::Undecided
            }
        };
        let preferences = load_preferences(repo.as_ref(), decision);
        let draft = preferences.clone();
        Self {
            repo,
            decision,
            preferences,
            draft,
            customizing: false,
        }
    }

    /// Return the current decision.
    pub fn decision(&self) -> ConsentDecision {
        self.decision
    }

    /// Return the effective category preferences.
    pub fn preferences(&self) -> &CategoryPreferences {
        &self.preferences
    }

    /// Return the customize-panel working copy.
    pub fn draft(&self) -> &CategoryPreferences {
        &self.draft
    }

    /// Return `true` if the detailed-options panel is open.
    pub fn is_customizing(&self) -> bool {
        self.customizing
    }

    /// The banner is shown if and only if no decision has been made.
    pub fn banner_visible(&self) -> bool {
        !self.decision.is_decided()
    }

    /// Grant every category, persist both slots, and hide the banner.
    pub fn accept_all(&mut self) {
        self.apply(ConsentDecision::Accepted, CategoryPreferences::accept_all());
    }

    /// Clear every non-necessary category, persist both slots, and hide the
    /// banner.
    pub fn reject_all(&mut self) {
        self.apply(ConsentDecision::Rejected, CategoryPreferences::default());
    }

    /// Open the detailed-options panel with a fresh working copy. Neither the
    /// decision nor the persisted state changes.
    pub fn open_customize(&mut self) {
        self.draft = self.preferences.clone();
        self.customizing = true;
    }

    /// Toggle one category in the working copy. Does nothing unless the
    /// panel is open, and the `Necessary` category is never editable.
    pub fn update_draft(&mut self, category: ConsentCategory, value: bool) {
        if self.customizing {
            self.draft.set(category, value);
        }
    }

    /// Persist the working copy as an explicit selection, hide the banner,
    /// and close the panel.
    pub fn save_preferences(&mut self) {
        let preferences = self.draft.clone();
        self.apply(ConsentDecision::Custom, preferences);
    }

    /// Discard any changes made since `open_customize` and close the panel.
    /// Persisted state is untouched.
    pub fn cancel_customize(&mut self) {
        self.draft = self.preferences.clone();
        self.customizing = false;
    }

    /// While the banner is still visible, re-read the decision slot and adopt
    /// a recognized value written by another browsing context. Read-only and
    /// best-effort; last write wins. Skipped while the customize panel is
    /// open so a foreign decision cannot discard an in-progress draft.
    pub fn resync(&mut self) {
        if self.decision.is_decided() || self.customizing {
            return;
        }
        match self.repo.get_decision() {
            Ok(Some(decision)) => {
                self.decision = decision;
                self.preferences = load_preferences(self.repo.as_ref(), decision);
                self.draft = self.preferences.clone();
            }
            Ok(None) => (),
            Err(err) => warn!("unable to re-check consent decision: {}", err),
        }
    }

    // Persist both slots best-effort, then commit the transition in memory.
    // The in-memory state moves regardless of the write outcome; a lost write
    // only means the question is asked again next session.
    fn apply(&mut self, decision: ConsentDecision, preferences: CategoryPreferences) {
        if let Err(err) = self.repo.put_consent(decision, &preferences) {
            warn!("unable to persist consent choice: {}", err);
        }
        self.decision = decision;
        self.preferences = preferences;
        self.draft = self.preferences.clone();
        self.customizing = false;
    }
}

// An accepted or rejected decision fully determines the flags; only an
// explicit custom selection needs the stored record, and a missing or
// malformed payload falls back to the defaults.
fn load_preferences(
    repo: &dyn ConsentRepository,
    decision: ConsentDecision,
) -> CategoryPreferences {
    match decision {
        ConsentDecision::Accepted => CategoryPreferences::accept_all(),
        ConsentDecision::Custom => match repo.get_preferences() {
            Ok(Some(preferences)) => preferences,
            Ok(None) => CategoryPreferences::default(),
            Err(err) => {
                warn!("unable to read consent preferences: {}", err);
                CategoryPreferences::default()
            }
        },
        _ => CategoryPreferences::default(),
    }
}
