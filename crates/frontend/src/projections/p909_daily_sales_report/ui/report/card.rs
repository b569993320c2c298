use crate::projections::p909_daily_sales_report::print::REPORT_ANCHOR_ID;
use crate::projections::p909_daily_sales_report::state::{DailySalesState, LoadStatus};
use crate::shared::date_utils::{format_time_of_day, generated_now};
use contracts::projections::p909_daily_sales_report::dto::PLACEHOLDER;
use contracts::projections::p909_daily_sales_report::{ReportDay, SaleRecordDto};
use contracts::shared::format::{format_count, format_peso, format_peso_opt};
use leptos::html::Div;
use leptos::prelude::*;

pub const COMPANY_NAME: &str = "NVA PRINTING SERVICES";
pub const COMPANY_ADDRESS: &str = "Pabayo - Chavez St. Plaza Divisoria CDO • 0917 717 4889";
pub const GENERATED_BY: &str = "NVAGo";

/// Text shown instead of table rows, if any
fn body_message(state: &DailySalesState) -> Option<String> {
    match &state.status {
        LoadStatus::Idle | LoadStatus::Loading => Some("Loading…".to_string()),
        LoadStatus::Failed(e) => Some(format!("Could not load sales: {}", e)),
        LoadStatus::Loaded if state.rows.is_empty() => {
            Some("No sales found for this date.".to_string())
        }
        LoadStatus::Loaded => None,
    }
}

fn sale_row(row: &SaleRecordDto) -> impl IntoView {
    view! {
        <tr>
            <td>{format_time_of_day(&row.sale_date)}</td>
            <td>{row.order_id_short()}</td>
            <td>{row.customer_name.clone()}</td>
            <td>{row.product_name.clone()}</td>
            <td>{row.variant_display().to_string()}</td>
            <td class="num">{row.quantity_display()}</td>
            <td class="num">{format_peso_opt(row.unit_price)}</td>
            <td class="num">{format_peso_opt(row.subtotal)}</td>
            <td class="num">{format_peso_opt(row.layout_fee)}</td>
            <td class="num total">{format_peso_opt(row.total_amount)}</td>
            <td>{row.order_source_display().to_string()}</td>
            <td>{row.employee_display().to_string()}</td>
        </tr>
    }
}

/// The printable report card: header, summary, sales table and footer
#[component]
pub fn ReportCard(
    #[prop(into)] day: Signal<ReportDay>,
    state: RwSignal<DailySalesState>,
    anchor_ref: NodeRef<Div>,
) -> impl IntoView {
    let totals = Memo::new(move |_| state.with(|s| s.totals()));
    let transactions = Memo::new(move |_| state.with(|s| s.rows.len()));

    view! {
        <div id=REPORT_ANCHOR_ID class="p909-card" node_ref=anchor_ref>
            <div class="p909-header">
                <div class="p909-company">
                    <div class="name">{COMPANY_NAME}</div>
                    <div class="addr">{COMPANY_ADDRESS}</div>
                </div>
                <div class="p909-meta">
                    <div class="report">"Daily Sales Report"</div>
                    <div class="date">{move || day.get().display_long()}</div>
                </div>
            </div>

            <div class="p909-summary">
                <div>"Transactions: "<b>{move || format_count(transactions.get() as i64)}</b></div>
                <div>"Total Qty: "<b>{move || format_count(totals.get().total_qty)}</b></div>
                <div>"Grand Total: "<b>{move || format_peso(totals.get().grand)}</b></div>
            </div>

            <table class="p909-table">
                <thead>
                    <tr>
                        <th style="width: 110px;">"Time"</th>
                        <th style="width: 110px;">"Order ID"</th>
                        <th>"Customer"</th>
                        <th>"Product"</th>
                        <th>"Variant"</th>
                        <th class="num">"Qty"</th>
                        <th class="num">"Unit"</th>
                        <th class="num">"Subtotal"</th>
                        <th class="num">"Layout"</th>
                        <th class="num">"Total"</th>
                        <th>"Source"</th>
                        <th>"Employee"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        state.with(|s| match body_message(s) {
                            Some(message) => view! {
                                <tr>
                                    <td class="muted" colspan="12">{message}</td>
                                </tr>
                            }
                            .into_any(),
                            None => s.rows.iter().map(sale_row).collect_view().into_any(),
                        })
                    }}
                </tbody>
                <tfoot>
                    <tr>
                        <td colspan="5" class="right"><b>"Totals"</b></td>
                        <td class="num"><b>{move || format_count(totals.get().total_qty)}</b></td>
                        <td class="num">{PLACEHOLDER}</td>
                        <td class="num"><b>{move || format_peso(totals.get().subtotal)}</b></td>
                        <td class="num"><b>{move || format_peso(totals.get().layout)}</b></td>
                        <td class="num"><b>{move || format_peso(totals.get().grand)}</b></td>
                        <td colspan="2"></td>
                    </tr>
                </tfoot>
            </table>

            <div class="p909-footer">
                {move || {
                    // Re-stamped on every load
                    state.track();
                    format!("Generated by {} • {}", GENERATED_BY, generated_now())
                }}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loaded(rows: Vec<SaleRecordDto>) -> DailySalesState {
        DailySalesState {
            rows,
            status: LoadStatus::Loaded,
            ..Default::default()
        }
    }

    #[test]
    fn test_body_message_per_status() {
        let mut state = DailySalesState::default();
        assert_eq!(body_message(&state).as_deref(), Some("Loading…"));

        state.status = LoadStatus::Loading;
        assert_eq!(body_message(&state).as_deref(), Some("Loading…"));

        assert_eq!(
            body_message(&loaded(Vec::new())).as_deref(),
            Some("No sales found for this date.")
        );

        state.status = LoadStatus::Failed("HTTP 500: db down".to_string());
        assert_eq!(
            body_message(&state).as_deref(),
            Some("Could not load sales: HTTP 500: db down")
        );
    }

    #[test]
    fn test_rows_replace_message() {
        let row: SaleRecordDto = serde_json::from_str(
            r#"{"id": "s-1", "sale_date": "2026-10-16T01:00:00Z", "total_amount": 10}"#,
        )
        .unwrap();
        assert_eq!(body_message(&loaded(vec![row])), None);
    }
}
