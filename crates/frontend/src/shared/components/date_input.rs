use leptos::prelude::*;

/// Native date picker bound to a `YYYY-MM-DD` value.
///
/// The browser displays the date in the user's locale; the value passed to
/// `on_change` is always `YYYY-MM-DD` (or empty when the field is cleared).
#[component]
pub fn DateInput(
    /// Element id, used by the accompanying `<label for=..>`
    #[prop(into)]
    id: String,
    /// The date value in yyyy-mm-dd format
    #[prop(into)]
    value: Signal<String>,
    /// Callback when the date changes (receives yyyy-mm-dd format)
    on_change: impl Fn(String) + 'static,
    #[prop(optional)] style: Option<String>,
) -> impl IntoView {
    let default_style = "padding: 6px 8px; border: 1px solid #d0d5dd; border-radius: 6px; font-size: 0.875rem; background: #fff; width: 150px;";
    let final_style = style.unwrap_or_else(|| default_style.to_string());

    view! {
        <input
            id=id
            type="date"
            prop:value=value
            on:change=move |ev| {
                on_change(event_target_value(&ev));
            }
            style=final_style
        />
    }
}
