mod card;

use crate::projections::p909_daily_sales_report::api::SalesApi;
use crate::projections::p909_daily_sales_report::print::{print_report, REPORT_ANCHOR_ID};
use crate::projections::p909_daily_sales_report::state::{create_state, next_selection};
use crate::shared::api_utils::api_base;
use crate::shared::components::date_input::DateInput;
use card::ReportCard;
use contracts::projections::p909_daily_sales_report::ReportDay;
use leptos::ev;
use leptos::html::Div;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

const DATE_INPUT_ID: &str = "p909-report-date";

#[component]
pub fn DailySalesReport() -> impl IntoView {
    let api = StoredValue::new(
        use_context::<SalesApi>().unwrap_or_else(|| SalesApi::new(api_base())),
    );

    let day = RwSignal::new(ReportDay::today());
    let state = create_state();
    let (print_error, set_print_error) = signal(None::<String>);
    let card_ref = NodeRef::<Div>::new();

    let load = move |selected: ReportDay| {
        let Some(ticket) = state.try_update(|s| s.begin_local_load(selected)) else {
            return;
        };
        log::debug!("P909: loading sales for {} (#{})", selected, ticket.seq);

        let api = api.get_value();
        spawn_local(async move {
            let result = api.fetch_day(&ticket.interval).await;
            // The component may be gone by now; try_update is a no-op then
            let _ = state.try_update(|s| s.finish_load(&ticket, result));
        });
    };

    // Reload whenever the selected day changes (and once on mount)
    Effect::new(move |_| {
        load(day.get());
    });

    let on_date_change = move |value: String| {
        if let Some(selected) = next_selection(day.get_untracked(), &value) {
            day.set(selected);
        }
    };

    let is_loading = Signal::derive(move || state.with(|s| s.is_loading()));

    let on_print = move |_: ev::MouseEvent| match print_report(REPORT_ANCHOR_ID) {
        Ok(()) => set_print_error.set(None),
        Err(e) => {
            log::warn!("P909: {}", e);
            set_print_error.set(Some(e.to_string()));
        }
    };

    view! {
        <div class="p909">
            <div class="p909-title">"Sales Report"</div>
            <div class="p909-toolbar">
                <div class="p909-filter">
                    <label for=DATE_INPUT_ID>"Date"</label>
                    <DateInput
                        id=DATE_INPUT_ID
                        value=Signal::derive(move || day.get().as_input_value())
                        on_change=on_date_change
                    />
                    {move || is_loading.get().then(|| view! { <Spinner /> })}
                </div>
                <div class="p909-actions">
                    <Button
                        on_click=move |_| load(day.get_untracked())
                        disabled=is_loading
                    >
                        "Refresh"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=on_print
                        disabled=Signal::derive(move || {
                            !state.with(|s| s.shows_day(day.get())) || card_ref.get().is_none()
                        })
                    >
                        "🖨️ Print"
                    </Button>
                </div>
            </div>

            {move || {
                state
                    .with(|s| s.error().map(str::to_string))
                    .or_else(|| print_error.get())
                    .map(|message| view! { <div class="p909-error">{message}</div> })
            }}

            <ReportCard day=day state=state anchor_ref=card_ref />
        </div>
    }
}
