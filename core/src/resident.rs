use domus_common::billing::ResidentId;
use domus_common::billing::service::Service;
use domus_common::billing::tariff::TariffTable;
use domus_common::error::BillingError;

use crate::report::{ReportLine, ResidentReport};

/// A single recorded (service, amount) pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConsumptionEntry {
    pub service: Service,
    /// Units consumed, in the service's own unit. Finite and >= 0.
    pub amount: f64,
}

/// A billed occupant.
///
/// Identity is fixed at creation; the entry list is append-only and
/// keeps insertion order. Residents are never removed.
#[derive(Debug, Clone)]
pub struct Resident {
    id: ResidentId,
    name: String,
    address: String,
    entries: Vec<ConsumptionEntry>,
}

impl Resident {
    /// Ids are assigned by the registry, which is why construction is
    /// crate-private.
    pub(crate) fn new(id: ResidentId, name: String, address: String) -> Self {
        Self {
            id,
            name,
            address,
            entries: Vec::new(),
        }
    }

    pub fn id(&self) -> ResidentId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    /// Recorded entries, oldest first.
    pub fn entries(&self) -> &[ConsumptionEntry] {
        &self.entries
    }

    /// Appends one consumption entry.
    ///
    /// Fails with [`BillingError::InvalidAmount`] when `amount` is
    /// negative or not finite, leaving the entry list unchanged. The
    /// prompt layer already guarantees valid amounts; this check covers
    /// direct callers of the core.
    pub(crate) fn record_consumption(
        &mut self,
        service: Service,
        amount: f64,
    ) -> Result<(), BillingError> {
        if !amount.is_finite() || amount < 0.0 {
            return Err(BillingError::InvalidAmount(amount));
        }
        self.entries.push(ConsumptionEntry { service, amount });
        Ok(())
    }

    /// Total cost of everything recorded so far, priced at the rates in
    /// `tariffs` right now.
    ///
    /// A service missing from the table contributes 0, never an error.
    pub fn total_cost(&self, tariffs: &TariffTable) -> f64 {
        self.entries
            .iter()
            .map(|entry| tariffs.rate(entry.service).unwrap_or(0.0) * entry.amount)
            .sum()
    }

    /// Read-only description of this resident with every entry priced
    /// at the current tariffs. Pure query.
    pub fn report(&self, tariffs: &TariffTable) -> ResidentReport {
        let lines: Vec<ReportLine> = self
            .entries
            .iter()
            .map(|entry| ReportLine {
                service: entry.service,
                amount: entry.amount,
                cost: tariffs.rate(entry.service).unwrap_or(0.0) * entry.amount,
            })
            .collect();

        ResidentReport {
            id: self.id,
            name: self.name.clone(),
            address: self.address.clone(),
            total: self.total_cost(tariffs),
            lines,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resident() -> Resident {
        Resident::new(1, "Ivanov Petrovich".to_string(), "Lenina 5".to_string())
    }

    #[test]
    fn total_cost_sums_rate_times_amount() {
        let mut ivanov = resident();
        ivanov.record_consumption(Service::Electricity, 10.0).unwrap();
        ivanov.record_consumption(Service::Water, 4.0).unwrap();

        let tariffs =
            TariffTable::from_rates([(Service::Electricity, 5.0), (Service::Water, 3.0)]);

        assert_eq!(ivanov.total_cost(&tariffs), 62.0);
    }

    #[test]
    fn missing_tariff_entry_costs_nothing() {
        let mut ivanov = resident();
        ivanov.record_consumption(Service::Heating, 2.0).unwrap();
        ivanov.record_consumption(Service::Gas, 5.0).unwrap();

        // Only gas is priced; heating has no entry at all.
        let tariffs = TariffTable::from_rates([(Service::Gas, 2.0)]);

        assert_eq!(ivanov.total_cost(&tariffs), 10.0);
    }

    #[test]
    fn rejects_invalid_amounts() {
        let mut ivanov = resident();

        assert!(matches!(
            ivanov.record_consumption(Service::Water, -1.0),
            Err(BillingError::InvalidAmount(_))
        ));
        assert!(matches!(
            ivanov.record_consumption(Service::Water, f64::NAN),
            Err(BillingError::InvalidAmount(_))
        ));
        assert!(ivanov.entries().is_empty());
    }

    #[test]
    fn zero_amount_is_a_valid_entry() {
        let mut ivanov = resident();
        ivanov.record_consumption(Service::Maintenance, 0.0).unwrap();
        assert_eq!(ivanov.entries().len(), 1);
    }

    #[test]
    fn report_prices_every_line_and_totals() {
        let mut ivanov = resident();
        ivanov.record_consumption(Service::Electricity, 10.0).unwrap();
        ivanov.record_consumption(Service::Electricity, 2.0).unwrap();

        let tariffs = TariffTable::from_rates([(Service::Electricity, 5.0)]);
        let report = ivanov.report(&tariffs);

        assert_eq!(report.id, 1);
        assert_eq!(report.name, "Ivanov Petrovich");
        assert_eq!(report.address, "Lenina 5");
        assert_eq!(report.lines.len(), 2);
        assert_eq!(report.lines[0].cost, 50.0);
        assert_eq!(report.lines[1].cost, 10.0);
        assert_eq!(report.total, 60.0);
    }

    #[test]
    fn entries_keep_insertion_order() {
        let mut ivanov = resident();
        ivanov.record_consumption(Service::Water, 1.0).unwrap();
        ivanov.record_consumption(Service::Gas, 2.0).unwrap();
        ivanov.record_consumption(Service::Water, 3.0).unwrap();

        let services: Vec<Service> =
            ivanov.entries().iter().map(|entry| entry.service).collect();
        assert_eq!(services, [Service::Water, Service::Gas, Service::Water]);
    }
}
