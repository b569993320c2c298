use crate::projections::p909_daily_sales_report::api::SalesApi;
use crate::projections::p909_daily_sales_report::ui::report::DailySalesReport;
use crate::shared::api_utils::api_base;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // One client for the whole app, handed down through context
    provide_context(SalesApi::new(api_base()));

    view! {
        <DailySalesReport />
    }
}
