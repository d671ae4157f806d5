//! PageFrame: root wrapper for a dashboard page.
//!
//! Sets two metadata attributes on the root DOM element:
//!   - `id`: `"{entity}--{category}"`, e.g. `"d410_campaign_report--dashboard"`
//!   - `data-page-category`: always `"dashboard"` here

use leptos::prelude::*;

/// Category of every page in this app
pub const PAGE_CAT_DASHBOARD: &str = "dashboard";

#[component]
pub fn PageFrame(
    /// HTML id in format `{entity}--{category}`
    page_id: &'static str,
    /// Additional CSS classes appended after the base class.
    #[prop(optional)]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    let full_class = if class.is_empty() {
        "page page--dashboard".to_string()
    } else {
        format!("page page--dashboard {class}")
    };

    view! {
        <div
            id=page_id
            class=full_class
            data-page-category=PAGE_CAT_DASHBOARD
        >
            {children()}
        </div>
    }
}
