//
// Copyright (c) 2025 Tudor Caloian
//
use crate::preso::leptos::BOOK_A_CALL_URL;
use leptos::html::Nav;
use leptos::prelude::*;
use leptos_use::on_click_outside;

#[component]
pub fn NavBar() -> impl IntoView {
    let menu_open = RwSignal::new(false);
    // the burger lives inside this element, so toggling it does not count
    // as a click outside
    let nav_ref: NodeRef<Nav> = NodeRef::new();
    let _ = on_click_outside(nav_ref, move |_| menu_open.set(false));

    view! {
        <nav
            class="navbar"
            role="navigation"
            aria-label="main navigation"
            node_ref=nav_ref
        >
            <div class="navbar-brand">
                <a class="navbar-item" href="/">
                    <img src="/assets/dashexecs.png" width="32" height="32" />
                    <strong>DashExecs</strong>
                </a>
                <a
                    role="button"
                    class="navbar-burger"
                    class:is-active=move || menu_open.get()
                    aria-label="menu"
                    aria-expanded="false"
                    data-target="navbarMain"
                    on:click=move |_| { menu_open.update(|v| { *v = !*v }) }
                >
                    <span aria-hidden="true"></span>
                    <span aria-hidden="true"></span>
                    <span aria-hidden="true"></span>
                </a>
            </div>

            <div
                id="navbarMain"
                class="navbar-menu"
                class:is-active=move || menu_open.get()
            >
                <div class="navbar-start">
                    <a class="navbar-item" href="/">
                        Home
                    </a>

                    <div class="navbar-item has-dropdown is-hoverable">
                        <a class="navbar-link">Solutions</a>
                        <div class="navbar-dropdown">
                            <a class="navbar-item" href="/solutions/ceo-dashboard">
                                CEO Dashboard
                            </a>
                            <a class="navbar-item" href="/solutions/marketplace">
                                Use Cases Marketplace
                            </a>
                            <a class="navbar-item" href="/solutions/kpi-management">
                                KPI Management
                            </a>
                            <a class="navbar-item" href="/solutions/financial-tracking">
                                Financial Tracking
                            </a>
                        </div>
                    </div>
                </div>

                <div class="navbar-end">
                    <div class="navbar-item">
                        <div class="buttons">
                            <a class="button is-primary" href=BOOK_A_CALL_URL target="_blank">
                                <strong>Book a Call</strong>
                            </a>
                        </div>
                    </div>
                </div>
            </div>
        </nav>
    }
}
