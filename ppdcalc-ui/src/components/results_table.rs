use crate::config::RESULTS_HEADERS;
use crate::hooks::DisplayMetricsMemos;
use leptos::*;
use ppdcalc_core::{format_metric, MetricKind};

#[component]
pub fn ResultsTable(metrics: DisplayMetricsMemos) -> impl IntoView {
    let rows = MetricKind::ALL
        .into_iter()
        .map(|kind| {
            let value = metrics.get(kind);
            view! {
                <tr class="border-t border-gray-200">
                    <td class="px-4 py-2">{kind.label()}</td>
                    <td class="px-4 py-2 text-right tabular-nums">
                        {move || format_metric(value.get())}
                    </td>
                </tr>
            }
        })
        .collect_view();

    view! {
        <table class="w-4/5 text-sm">
            <thead>
                <tr class="text-left text-gray-500 uppercase">
                    <th class="px-4 py-2">{RESULTS_HEADERS.0}</th>
                    <th class="px-4 py-2 text-right">{RESULTS_HEADERS.1}</th>
                </tr>
            </thead>
            <tbody>{rows}</tbody>
        </table>
    }
}
