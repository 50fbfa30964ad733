use std::collections::BTreeMap;

use crate::billing::service::Service;

/// The office's single table of rates, in currency per consumption unit.
///
/// Owned exclusively by the registry; every cost computation prices
/// against the one shared instance. [`TariffTable::new`] seeds all five
/// services at 0.0, so a freshly opened office bills nothing until the
/// operator sets rates.
#[derive(Debug, Clone, PartialEq)]
pub struct TariffTable {
    rates: BTreeMap<Service, f64>,
}

impl TariffTable {
    /// A fresh table with every service present at rate 0.0.
    pub fn new() -> Self {
        let mut rates = BTreeMap::new();
        for service in Service::ALL {
            rates.insert(service, 0.0);
        }
        Self { rates }
    }

    /// Builds a table from explicit (service, rate) pairs.
    ///
    /// Services absent from `pairs` are absent from the table; cost
    /// computations treat them as rate 0.
    pub fn from_rates<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (Service, f64)>,
    {
        Self {
            rates: pairs.into_iter().collect(),
        }
    }

    /// Overwrites the rate for `service`. The previous rate is not kept.
    pub fn set(&mut self, service: Service, rate: f64) {
        self.rates.insert(service, rate);
    }

    /// Current rate for `service`, if the table holds one.
    pub fn rate(&self, service: Service) -> Option<f64> {
        self.rates.get(&service).copied()
    }

    /// Rates in service declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (Service, f64)> + '_ {
        self.rates.iter().map(|(service, rate)| (*service, *rate))
    }
}

impl Default for TariffTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_table_holds_all_services_at_zero() {
        let tariffs = TariffTable::new();
        for service in Service::ALL {
            assert_eq!(tariffs.rate(service), Some(0.0));
        }
        assert_eq!(tariffs.iter().count(), Service::ALL.len());
    }

    #[test]
    fn set_overwrites_unconditionally() {
        let mut tariffs = TariffTable::new();
        tariffs.set(Service::Gas, 4.5);
        tariffs.set(Service::Gas, 2.0);
        assert_eq!(tariffs.rate(Service::Gas), Some(2.0));
    }

    #[test]
    fn missing_service_yields_no_rate() {
        let tariffs = TariffTable::from_rates([(Service::Water, 3.0)]);
        assert_eq!(tariffs.rate(Service::Water), Some(3.0));
        assert_eq!(tariffs.rate(Service::Heating), None);
    }

    #[test]
    fn iter_follows_declaration_order() {
        let tariffs = TariffTable::new();
        let services: Vec<Service> = tariffs.iter().map(|(service, _)| service).collect();
        assert_eq!(services, Service::ALL);
    }
}
