//
// Copyright (c) 2026 Tudor Caloian
//
use crate::data::repositories::ConsentRepositoryImpl;
use crate::data::sources::{KeyValueSource, WebStorageSource};
use crate::domain::entities::ConsentCategory;
use crate::domain::managers::consent::ConsentManager;
use crate::domain::repositories::ConsentRepository;
use leptos::prelude::*;
use std::sync::Arc;

#[component]
pub fn CookieBanner() -> impl IntoView {
    let source: Arc<dyn KeyValueSource> = Arc::new(WebStorageSource::new());
    let repo: Arc<dyn ConsentRepository> = Arc::new(ConsentRepositoryImpl::new(source));
    let manager = RwSignal::new(ConsentManager::new(repo));

    // While the banner remains visible, re-check storage in case another tab
    // has meanwhile recorded a decision. The update stays untracked so that a
    // fruitless re-check does not schedule this effect again.
    Effect::new(move |_| {
        let open = manager.with(|m| m.banner_visible());
        if open {
            manager.update_untracked(|m| m.resync());
            if manager.with_untracked(|m| !m.banner_visible()) {
                manager.notify();
            }
        }
    });

    let choices = move || {
        view! {
            <div class="buttons is-right">
                <button
                    class="button"
                    on:click=move |_| manager.update(|m| m.open_customize())
                >
                    Customize
                </button>
                <button
                    class="button"
                    on:click=move |_| manager.update(|m| m.reject_all())
                >
                    Reject
                </button>
                <button
                    class="button is-primary"
                    on:click=move |_| manager.update(|m| m.accept_all())
                >
                    Accept
                </button>
            </div>
        }
    };

    let customize = move || {
        view! {
            <div class="field">
                <label class="checkbox">
                    <input type="checkbox" checked=true disabled=true />
                    " Necessary"
                </label>
            </div>
            <div class="field">
                <label class="checkbox">
                    <input
                        type="checkbox"
                        prop:checked=move || {
                            manager.with(|m| m.draft().allows(ConsentCategory::Analytics))
                        }
                        on:change=move |ev| {
                            let value = event_target_checked(&ev);
                            manager.update(|m| m.update_draft(ConsentCategory::Analytics, value))
                        }
                    />
                    " Analytics"
                </label>
            </div>
            <div class="field">
                <label class="checkbox">
                    <input
                        type="checkbox"
                        prop:checked=move || {
                            manager.with(|m| m.draft().allows(ConsentCategory::Marketing))
                        }
                        on:change=move |ev| {
                            let value = event_target_checked(&ev);
                            manager.update(|m| m.update_draft(ConsentCategory::Marketing, value))
                        }
                    />
                    " Marketing"
                </label>
            </div>
            <div class="field">
                <label class="checkbox">
                    <input
                        type="checkbox"
                        prop:checked=move || {
                            manager.with(|m| m.draft().allows(ConsentCategory::Preferences))
                        }
                        on:change=move |ev| {
                            let value = event_target_checked(&ev);
                            manager.update(|m| m.update_draft(ConsentCategory::Preferences, value))
                        }
                    />
                    " Preferences"
                </label>
            </div>
            <div class="buttons is-right">
                <button
                    class="button"
                    on:click=move |_| manager.update(|m| m.cancel_customize())
                >
                    Cancel
                </button>
                <button
                    class="button is-primary"
                    on:click=move |_| manager.update(|m| m.save_preferences())
                >
                    Save
                </button>
            </div>
        }
    };

    view! {
        <Show when=move || manager.with(|m| m.banner_visible())>
            <div class="cookie-banner box">
                <p class="title is-5">We value your privacy</p>
                <p class="content">
                    "We use cookies to improve your experience. You can accept or reject
                    non-essential cookies."
                </p>
                {move || {
                    if manager.with(|m| m.is_customizing()) {
                        customize().into_any()
                    } else {
                        choices().into_any()
                    }
                }}
            </div>
        </Show>
    }
}
