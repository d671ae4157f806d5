use crate::shared::icons::icon;
use leptos::prelude::*;

/// Single metric tile: icon, formatted value, caption
#[component]
pub fn StatCard(
    /// Caption below the value
    label: String,
    /// Icon name from the icon() helper
    icon_name: String,
    /// Already formatted value
    #[prop(into)]
    value: Signal<String>,
) -> impl IntoView {
    view! {
        <div class="stat-card">
            <div class="stat-card__icon">
                {icon(&icon_name)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__value">{move || value.get()}</div>
                <div class="stat-card__label">{label}</div>
            </div>
        </div>
    }
}
