//
// Copyright (c) 2025 Tudor Caloian
//
use crate::preso::leptos::{nav, BOOK_A_CALL_URL};
use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <nav::NavBar />
        <section class="hero is-large">
            <div class="hero-body has-text-centered">
                <h1 class="title is-1">Track ROI of AI in Your Organization</h1>
                <p class="subtitle is-4">
                    "Customized for your frameworks. Measure and monitor the return on
                    investment of every AI use case across your organization."
                </p>
                <div class="buttons is-centered">
                    <a class="button is-primary is-large" href=BOOK_A_CALL_URL target="_blank">
                        Book a Call
                    </a>
                </div>
            </div>
        </section>
        <section class="section has-text-centered">
            <h2 class="title is-2">Ready to Get Started?</h2>
            <p class="subtitle">
                "Start tracking the ROI of AI in your organization today with DashExecs."
            </p>
            <a class="button is-primary is-large" href=BOOK_A_CALL_URL target="_blank">
                Book a Call
            </a>
        </section>
    }
}
