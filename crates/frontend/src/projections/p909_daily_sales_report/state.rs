use contracts::projections::p909_daily_sales_report::{
    DayInterval, ReportDay, SaleRecordDto, SalesTotals,
};
use leptos::prelude::*;

#[derive(Clone, Debug, Default, PartialEq)]
pub enum LoadStatus {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed(String),
}

/// Identifies one load request; only the latest ticket may publish its result
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadTicket {
    pub seq: u64,
    pub day: ReportDay,
    pub interval: DayInterval,
}

#[derive(Clone, Debug, Default)]
pub struct DailySalesState {
    pub rows: Vec<SaleRecordDto>,
    pub status: LoadStatus,
    pub latest_request: u64,
    /// Day the current rows belong to
    pub loaded_day: Option<ReportDay>,
}

impl DailySalesState {
    /// Marks a new load as in flight and supersedes every earlier one
    pub fn begin_load(&mut self, day: ReportDay, interval: DayInterval) -> LoadTicket {
        self.latest_request += 1;
        self.status = LoadStatus::Loading;
        LoadTicket {
            seq: self.latest_request,
            day,
            interval,
        }
    }

    /// Applies a finished load. Returns `false` when the ticket is stale and
    /// the result was dropped.
    pub fn finish_load(
        &mut self,
        ticket: &LoadTicket,
        result: Result<Vec<SaleRecordDto>, String>,
    ) -> bool {
        if ticket.seq != self.latest_request {
            log::debug!(
                "P909: dropping stale response #{} for {} (latest #{})",
                ticket.seq,
                ticket.day,
                self.latest_request
            );
            return false;
        }

        match result {
            Ok(rows) => {
                self.rows = keep_inside(rows, &ticket.interval);
                self.status = LoadStatus::Loaded;
            }
            Err(e) => {
                log::error!("P909: failed to load sales for {}: {}", ticket.day, e);
                self.rows.clear();
                self.status = LoadStatus::Failed(e);
            }
        }
        self.loaded_day = Some(ticket.day);
        true
    }

    /// Starts a load of `day` bounded by the browser's local midnights
    pub fn begin_local_load(&mut self, day: ReportDay) -> LoadTicket {
        self.begin_load(day, day.local_interval())
    }

    pub fn is_loading(&self) -> bool {
        self.status == LoadStatus::Loading
    }

    /// The card holds the finished result for `day`, so it is safe to print
    pub fn shows_day(&self, day: ReportDay) -> bool {
        !self.is_loading() && self.loaded_day == Some(day)
    }

    pub fn error(&self) -> Option<&str> {
        match &self.status {
            LoadStatus::Failed(e) => Some(e),
            _ => None,
        }
    }

    pub fn totals(&self) -> SalesTotals {
        SalesTotals::from_rows(&self.rows)
    }
}

/// Rows whose sale time lies inside the interval; unparsable timestamps are dropped
fn keep_inside(rows: Vec<SaleRecordDto>, interval: &DayInterval) -> Vec<SaleRecordDto> {
    rows.into_iter()
        .filter(|row| match row.sale_instant() {
            Some(instant) => interval.contains(&instant),
            None => {
                log::warn!(
                    "P909: skipping sale {} with bad timestamp '{}'",
                    row.id,
                    row.sale_date
                );
                false
            }
        })
        .collect()
}

/// Day to switch to after the date input reports `raw`.
///
/// `None` keeps the current selection: the value is empty, malformed or the
/// same day, so no reload is needed.
pub fn next_selection(current: ReportDay, raw: &str) -> Option<ReportDay> {
    match ReportDay::parse(raw) {
        Ok(selected) if selected != current => Some(selected),
        Ok(_) => None,
        Err(e) => {
            log::warn!("P909: ignoring date input: {}", e);
            None
        }
    }
}

// Created per component so the state is disposed with it
pub fn create_state() -> RwSignal<DailySalesState> {
    RwSignal::new(DailySalesState::default())
}
