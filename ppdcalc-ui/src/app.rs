use crate::components::{NumericField, ResultsTable, ViewingDiagram};
use crate::config::{
    diagram_canvas, APP_TITLE, EYE_ICON_SRC, RESOLUTION_CAPTION, RESULTS_CAPTION,
    SCREEN_SIZE_CAPTION,
};
use crate::hooks::{use_display_metrics, use_image};
use leptos::*;
use ppdcalc_core::{DisplayInputs, InputField};

#[component]
pub fn App() -> impl IntoView {
    view! { <PpdCalculator /> }
}

/// Full calculator page.
///
/// With `show_diagram = false` the canvas is not rendered and the eye
/// icon is never requested.
#[component]
pub fn PpdCalculator(#[prop(default = true)] show_diagram: bool) -> impl IntoView {
    // ========== Raw inputs (the only mutable state) ==========
    let inputs = create_rw_signal(DisplayInputs::default());

    // ========== Derived values ==========
    let metrics = use_display_metrics(inputs);

    let field = move |input: InputField| {
        let on_change = Callback::new(move |value: Option<f64>| {
            inputs.update(|i| i.set(input, value));
        });
        view! {
            <NumericField
                label=input.label()
                initial=inputs.with_untracked(|i| i.get(input))
                on_change=on_change
            />
        }
    };

    // ========== Optional diagram ==========
    let diagram = show_diagram.then(|| {
        let icon = use_image(EYE_ICON_SRC);
        view! {
            <div id="canvas-wrap" class="p-4">
                <ViewingDiagram
                    distance_cm=metrics.distance_cm.into()
                    diagonal_screen_size=metrics.diagonal_screen_size.into()
                    icon=icon.into()
                    canvas=diagram_canvas()
                />
            </div>
        }
    });

    view! {
        <div id="base-container" class="flex flex-col w-full h-full">
            <header class="w-full bg-black p-2 pl-4">
                <h1 class="text-white text-2xl">{APP_TITLE}</h1>
            </header>
            <div class="flex w-full items-start">
                <section id="setting-area" class="flex flex-col flex-grow items-center gap-4 pt-6">
                    <p>{RESOLUTION_CAPTION}</p>
                    <div class="flex gap-4">
                        {field(InputField::HeightPx)}
                        {field(InputField::WidthPx)}
                    </div>
                    <p>{SCREEN_SIZE_CAPTION}</p>
                    <div class="flex gap-4">
                        {field(InputField::ScreenHeightCm)}
                        {field(InputField::ScreenWidthCm)}
                    </div>
                    {field(InputField::DistanceCm)}
                </section>
                <section id="result-area" class="flex flex-col flex-grow items-center gap-4 pt-6">
                    <p>{RESULTS_CAPTION}</p>
                    <ResultsTable metrics=metrics />
                </section>
                {diagram}
            </div>
        </div>
    }
}
