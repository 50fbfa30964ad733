//! Read-only snapshot types.
//!
//! The registry answers queries with these instead of exposing its
//! entities for rendering. None of them borrow from the registry, so
//! the front end can hold them across further commands.

use domus_common::billing::ResidentId;
use domus_common::billing::service::Service;
use domus_common::billing::tariff::TariffTable;

/// One priced consumption entry inside a [`ResidentReport`].
#[derive(Debug, Clone, PartialEq)]
pub struct ReportLine {
    pub service: Service,
    pub amount: f64,
    /// `rate * amount` at the tariffs current when the report was built.
    pub cost: f64,
}

/// Everything the front end needs to describe a single resident.
#[derive(Debug, Clone, PartialEq)]
pub struct ResidentReport {
    pub id: ResidentId,
    pub name: String,
    pub address: String,
    pub lines: Vec<ReportLine>,
    /// Sum of all line costs.
    pub total: f64,
}

/// Identity row in listings and statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct ResidentSummary {
    pub id: ResidentId,
    pub name: String,
    pub address: String,
}

/// Aggregate snapshot of the whole office at one point in time.
#[derive(Debug, Clone, PartialEq)]
pub struct StatsSnapshot {
    pub resident_count: usize,
    /// Copy of the tariff table as of the snapshot.
    pub tariffs: TariffTable,
    /// Revenue accrued so far, at the rates in effect when each
    /// consumption entry was recorded.
    pub revenue: f64,
    pub residents: Vec<ResidentSummary>,
}
