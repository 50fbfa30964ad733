//! # The Housing Office Registry
//!
//! The aggregate root of the billing domain. Owns the resident
//! collection, the single shared tariff table, and the cumulative
//! revenue counter, and exposes every operation the command loop calls.
//!
//! Revenue is accrued at the moment consumption is recorded, at the
//! rate in effect at that moment. Per-resident totals are instead
//! recomputed live against the current table on every query, so a
//! tariff change moves future queries but never moves revenue already
//! accrued.

use tracing::debug;

use domus_common::billing::ResidentId;
use domus_common::billing::service::Service;
use domus_common::billing::tariff::TariffTable;
use domus_common::error::BillingError;

use crate::report::{ResidentReport, ResidentSummary, StatsSnapshot};
use crate::resident::Resident;

/// The housing office ledger.
///
/// A plain value: construct one with [`Registry::new`] and pass it by
/// reference into whatever drives it. Nothing here is global.
#[derive(Debug)]
pub struct Registry {
    /// Insertion order equals id order; ids are never reused.
    residents: Vec<Resident>,
    tariffs: TariffTable,
    revenue: f64,
}

impl Registry {
    /// An empty office: no residents, all tariffs at 0.0, no revenue.
    pub fn new() -> Self {
        Self {
            residents: Vec::new(),
            tariffs: TariffTable::new(),
            revenue: 0.0,
        }
    }

    /// Registers a new resident and returns the assigned id.
    ///
    /// Ids start at 1 and grow by one per registration. Duplicate names
    /// are permitted; lookup by name is a substring search over the
    /// whole collection.
    pub fn add_resident(&mut self, name: &str, address: &str) -> ResidentId {
        let id = self.residents.last().map_or(1, |last| last.id() + 1);
        self.residents
            .push(Resident::new(id, name.to_string(), address.to_string()));
        debug!(id, name, "resident registered");
        id
    }

    /// Records `amount` units of `service` for resident `id` and
    /// accrues revenue at the rate in effect right now.
    ///
    /// Fails with [`BillingError::ResidentNotFound`] for an unknown id
    /// and [`BillingError::InvalidAmount`] for a bad amount; on any
    /// failure neither the resident nor the revenue counter changes.
    pub fn add_consumption(
        &mut self,
        id: ResidentId,
        service: Service,
        amount: f64,
    ) -> Result<(), BillingError> {
        let resident = self
            .residents
            .iter_mut()
            .find(|resident| resident.id() == id)
            .ok_or(BillingError::ResidentNotFound(id))?;

        resident.record_consumption(service, amount)?;

        let accrued = self.tariffs.rate(service).unwrap_or(0.0) * amount;
        self.revenue += accrued;
        debug!(id, %service, amount, accrued, "consumption recorded");
        Ok(())
    }

    /// Overwrites the rate for `service`.
    ///
    /// Future cost queries and future revenue accrual use the new rate;
    /// revenue already accrued stays as it was.
    pub fn set_tariff(&mut self, service: Service, rate: f64) -> Result<(), BillingError> {
        if !rate.is_finite() || rate < 0.0 {
            return Err(BillingError::InvalidRate(rate));
        }
        self.tariffs.set(service, rate);
        debug!(%service, rate, "tariff updated");
        Ok(())
    }

    /// Live-computed total for the first resident, in id order, whose
    /// name contains `fragment` as a case-sensitive substring.
    ///
    /// The match runs over the combined name string, not a separate
    /// surname field: "Ivanov Petrovich" matches "anov" and "Petro".
    pub fn total_cost_for_name(&self, fragment: &str) -> Result<f64, BillingError> {
        self.residents
            .iter()
            .find(|resident| resident.name().contains(fragment))
            .map(|resident| resident.total_cost(&self.tariffs))
            .ok_or_else(|| BillingError::NoNameMatch(fragment.to_string()))
    }

    /// Structured description of one resident, priced at current rates.
    /// Pure query.
    pub fn resident_report(&self, id: ResidentId) -> Result<ResidentReport, BillingError> {
        self.residents
            .iter()
            .find(|resident| resident.id() == id)
            .map(|resident| resident.report(&self.tariffs))
            .ok_or(BillingError::ResidentNotFound(id))
    }

    /// Identity rows for every resident, in id order. Pure query.
    pub fn list_residents(&self) -> Vec<ResidentSummary> {
        self.residents
            .iter()
            .map(|resident| ResidentSummary {
                id: resident.id(),
                name: resident.name().to_string(),
                address: resident.address().to_string(),
            })
            .collect()
    }

    /// Aggregate snapshot for the statistics report. Pure query.
    pub fn stats(&self) -> StatsSnapshot {
        StatsSnapshot {
            resident_count: self.residents.len(),
            tariffs: self.tariffs.clone(),
            revenue: self.revenue,
            residents: self.list_residents(),
        }
    }

    /// All residents, in id order. Read-only view.
    pub fn residents(&self) -> &[Resident] {
        &self.residents
    }

    /// The shared tariff table. Read-only view.
    pub fn tariffs(&self) -> &TariffTable {
        &self.tariffs
    }

    /// Revenue accrued since the office opened.
    pub fn revenue(&self) -> f64 {
        self.revenue
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
