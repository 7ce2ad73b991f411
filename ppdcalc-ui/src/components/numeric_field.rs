//! Labeled numeric input.

use leptos::*;
use ppdcalc_core::parse_field;

/// Number input with a caption above it.
///
/// The input is uncontrolled after mount so partially typed values like
/// `"1."` are left alone; every edit is parsed and reported.
#[component]
pub fn NumericField(
    /// Label text displayed above the input
    label: &'static str,
    /// Value shown when the field is first rendered
    initial: Option<f64>,
    /// Called with the parsed value (`None` when empty) on every edit
    on_change: Callback<Option<f64>>,
) -> impl IntoView {
    let initial_text = initial.map(|v| v.to_string()).unwrap_or_default();

    view! {
        <label class="flex flex-col gap-1 text-sm">
            <span>{label}</span>
            <input
                type="number"
                class="w-40 px-2 py-1 border border-gray-300 rounded"
                prop:value=initial_text
                on:input=move |ev| on_change.call(parse_field(&event_target_value(&ev)))
            />
        </label>
    }
}
