use leptos::prelude::*;

/// Checkbox row of a multi-select list
#[component]
pub fn Checkbox(
    /// Label text
    #[prop(into)]
    label: String,
    /// Checked state
    #[prop(into)]
    checked: Signal<bool>,
    /// Fired on every click, with the new checked state
    on_change: Callback<bool>,
    /// ID for the checkbox element
    #[prop(into)]
    id: String,
) -> impl IntoView {
    let input_id = id.clone();

    view! {
        <div class="form__checkbox-wrapper">
            <input
                id=input_id
                type="checkbox"
                class="form__checkbox"
                prop:checked=move || checked.get()
                on:change=move |ev| on_change.run(event_target_checked(&ev))
            />
            <label class="form__checkbox-label" for=id>
                {label}
            </label>
        </div>
    }
}
