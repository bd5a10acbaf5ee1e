//
// Copyright (c) 2025 Tudor Caloian
//
use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;

mod consent;
mod home;
mod nav;
mod solutions;

static BOOK_A_CALL_URL: &str = "https://calendly.com/tudor-caloian/30min";

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/dashexecs.css" />
        <Title text="DashExecs" />
        <Router>
            <main>
                <Routes fallback=NotFound>
                    <Route path=path!("") view=home::HomePage />
                    <Route path=path!("/solutions/:id") view=solutions::SolutionPage />
                </Routes>
            </main>
            <consent::CookieBanner />
        </Router>
    }
}

/// 404 - Not Found
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <nav::NavBar />
        <section class="section">
            <h1 class="title">Page not found</h1>
            <h2 class="subtitle">This is not the page you are looking for.</h2>
            <div class="content">
                <p>Try using the navigation options above.</p>
            </div>
        </section>
    }
}
