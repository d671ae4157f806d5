use leptos::prelude::*;

/// Labelled `<select>` with a field error slot
#[component]
pub fn Select(
    /// Label text
    #[prop(into)]
    label: String,
    /// Current value
    #[prop(into)]
    value: Signal<String>,
    /// Change event handler
    on_change: Callback<String>,
    /// Options: Vec of (value, label) tuples
    #[prop(into)]
    options: Signal<Vec<(String, String)>>,
    /// Validation message shown under the field
    #[prop(optional, into)]
    error: Signal<Option<String>>,
    /// Disabled state
    #[prop(optional, into)]
    disabled: Signal<bool>,
    /// ID for the select element
    #[prop(into)]
    id: String,
) -> impl IntoView {
    let select_id = id.clone();

    view! {
        <div class="form__group">
            <label class="form__label" for=id>
                {label}
            </label>
            <select
                id=select_id
                class=move || {
                    if error.get().is_some() {
                        "form__select form__select--error"
                    } else {
                        "form__select"
                    }
                }
                disabled=move || disabled.get()
                on:change=move |ev| on_change.run(event_target_value(&ev))
            >
                // Placeholder keeps "nothing selected" representable
                <option value="" selected=move || value.get().is_empty()>"—"</option>
                <For
                    each=move || options.get()
                    key=|(val, _)| val.clone()
                    children=move |(val, label)| {
                        let val_clone = val.clone();
                        let is_selected = move || value.get() == val_clone;
                        view! {
                            <option value=val selected=is_selected>
                                {label}
                            </option>
                        }
                    }
                />
            </select>
            {move || error.get().map(|msg| view! {
                <div class="form__error">{msg}</div>
            })}
        </div>
    }
}
