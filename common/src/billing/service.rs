use std::fmt;

/// A category of utility consumption billed by the office.
///
/// The set is closed: services are fixed for the lifetime of the
/// process and double as the lookup key into the tariff table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Service {
    Electricity,
    Water,
    Gas,
    Heating,
    Maintenance,
}

/// Display names, indexed by discriminant.
const LABELS: [&str; 5] = ["Electricity", "Water", "Gas", "Heating", "Maintenance"];

/// Consumption units, indexed by discriminant.
const UNITS: [&str; 5] = ["kWh", "m3", "m3", "Gcal", "month"];

impl Service {
    /// Every service, in declaration order.
    pub const ALL: [Service; 5] = [
        Service::Electricity,
        Service::Water,
        Service::Gas,
        Service::Heating,
        Service::Maintenance,
    ];

    /// Human-readable name.
    pub fn label(self) -> &'static str {
        LABELS[self as usize]
    }

    /// Unit the consumption amount is measured in.
    pub fn unit(self) -> &'static str {
        UNITS[self as usize]
    }
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_service_has_a_label_and_a_unit() {
        for service in Service::ALL {
            assert!(!service.label().is_empty());
            assert!(!service.unit().is_empty());
        }
    }

    #[test]
    fn all_is_in_declaration_order() {
        assert_eq!(Service::ALL[0], Service::Electricity);
        assert_eq!(Service::ALL[4], Service::Maintenance);
        assert_eq!(Service::ALL.len(), 5);
    }

    #[test]
    fn display_matches_label() {
        assert_eq!(Service::Heating.to_string(), "Heating");
        assert_eq!(Service::Water.label(), "Water");
        assert_eq!(Service::Maintenance.unit(), "month");
    }
}
