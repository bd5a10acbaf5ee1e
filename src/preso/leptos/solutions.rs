//
// Copyright (c) 2025 Tudor Caloian
//
use crate::preso::leptos::{nav, BOOK_A_CALL_URL};
use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

// Fixed catalog of the solutions described on the site; nothing here is
// editable at runtime.
struct Solution {
    id: &'static str,
    title: &'static str,
    subtitle: &'static str,
    description: &'static str,
    features: &'static [&'static str],
    benefits: &'static [&'static str],
}

static SOLUTIONS: &[Solution] = &[
    Solution {
        id: "ceo-dashboard",
        title: "CEO Dashboard",
        subtitle: "Track quarterly performance at a glance",
        description: "The CEO Dashboard provides executives with a comprehensive view of \
            AI initiative performance across the organization. Visual comparisons of actual \
            vs. ambition metrics help leaders quickly identify which initiatives are on \
            track and which need attention.",
        features: &[
            "Quarterly performance tracking with visual donut charts",
            "Actual vs. Ambition comparisons for every metric",
            "Percentage-based progress indicators",
            "Color-coded status (green for exceeding, red for behind)",
        ],
        benefits: &[
            "Make data-driven decisions faster",
            "Identify underperforming initiatives early",
            "Communicate AI ROI to stakeholders",
            "Align teams around shared goals",
        ],
    },
    Solution {
        id: "marketplace",
        title: "Use Cases Marketplace",
        subtitle: "Discover and deploy AI solutions",
        description: "The Use Cases Marketplace is your central hub for discovering, \
            evaluating, and deploying AI solutions tailored to your business needs. Browse \
            through categories, search by tags, and find the right AI use case for your \
            organization.",
        features: &[
            "Searchable catalog of AI use cases",
            "Filter by category and tags",
            "Detailed descriptions and implementation guides",
            "Technology stack information",
            "Business impact assessments",
            "One-click deployment to your environment",
        ],
        benefits: &[
            "Accelerate AI adoption across the organization",
            "Reduce time spent evaluating solutions",
            "Standardize AI implementation practices",
            "Share successful use cases across teams",
        ],
    },
    Solution {
        id: "kpi-management",
        title: "KPI Management",
        subtitle: "Manage and visualize your KPIs",
        description: "KPI Management empowers business leaders to input, track, and \
            visualize their key performance indicators on a quarterly basis. Half-donut \
            charts provide instant visual feedback on progress against ambition.",
        features: &[
            "Quarterly KPI input for business leaders",
            "Visual half-donut progress charts",
            "Ambition vs. Actual tracking",
            "Filter by area, entity, and business leader",
            "Edit and update KPIs in real-time",
            "Historical data comparison",
        ],
        benefits: &[
            "Empower business leaders to own their metrics",
            "Visualize progress at a glance",
            "Identify gaps between ambition and reality",
            "Drive accountability across the organization",
        ],
    },
    Solution {
        id: "financial-tracking",
        title: "Financial Tracking",
        subtitle: "Track ROI with detailed metrics",
        description: "Financial Tracking provides granular control over the financial \
            metrics that matter most. Input quarterly data for Direct Margin, Revenue \
            Uplifted, Capex, Opex, and more, with separate fields for Program Manager \
            ambitions and Financial Controller actuals.",
        features: &[
            "Comprehensive financial metrics (Direct Margin, Revenue, Capex, Opex)",
            "Quarterly breakdown (Q1-Q4) with totals",
            "Ambition values from Program Managers",
            "Actual values verified by Financial Controllers",
            "Capex Savings, Opex Savings, Cost Savings tracking",
            "ROI (%), Time to Value, Efficiency Gain metrics",
        ],
        benefits: &[
            "Full transparency into AI financial impact",
            "Separate ambition and actual tracking",
            "Built-in verification workflow",
            "Comprehensive ROI measurement",
        ],
    },
];

fn find_solution(id: &str) -> Option<&'static Solution> {
    SOLUTIONS.iter().find(|solution| solution.id == id)
}

#[component]
pub fn SolutionPage() -> impl IntoView {
    let params = use_params_map();

    let body = move || {
        let id = params.with(|p| p.get("id")).unwrap_or_default();
        match find_solution(&id) {
            Some(solution) => view! { <SolutionDetail solution /> }.into_any(),
            None => view! {
                <section class="section has-text-centered">
                    <h1 class="title">Solution not found</h1>
                    <a href="/">Go back home</a>
                </section>
            }
            .into_any(),
        }
    };

    view! {
        <nav::NavBar />
        {body}
    }
}

#[component]
fn SolutionDetail(solution: &'static Solution) -> impl IntoView {
    view! {
        <section class="section">
            <a href="/">"Back to Solutions"</a>
            <h1 class="title is-2">{solution.title}</h1>
            <h2 class="subtitle is-4">{solution.subtitle}</h2>
            <div class="content">
                <p>{solution.description}</p>
            </div>
            <a class="button is-primary" href=BOOK_A_CALL_URL target="_blank">
                Book a Call
            </a>
        </section>
        <section class="section">
            <h2 class="title is-3">Features</h2>
            <div class="content">
                <ul>
                    {solution.features.iter().map(|feature| view! { <li>{*feature}</li> }).collect_view()}
                </ul>
            </div>
        </section>
        <section class="section">
            <h2 class="title is-3">Benefits</h2>
            <div class="content">
                <ul>
                    {solution.benefits.iter().map(|benefit| view! { <li>{*benefit}</li> }).collect_view()}
                </ul>
            </div>
        </section>
        <section class="section has-text-centered">
            <h2 class="title is-3">{format!("Ready to implement {}?", solution.title)}</h2>
            <p class="subtitle">
                "Let's discuss how this solution can be customized for your organization."
            </p>
            <a class="button is-primary" href=BOOK_A_CALL_URL target="_blank">
                Book a Call
            </a>
        </section>
    }
}
