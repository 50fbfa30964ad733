use colored::*;

use domus_common::billing::service::Service;
use domus_core::report::ReportLine;

use crate::terminal::colors;

/// The office bills in a single fixed currency unit.
pub const CURRENCY: &str = "rub";

pub type Detail = (String, ColoredString);

/// "123.45 rub", always two fractional digits.
pub fn money(value: f64) -> String {
    format!("{:.2} {}", value, CURRENCY)
}

/// "10.00 kWh" style consumption amount.
pub fn amount(service: Service, value: f64) -> String {
    format!("{:.2} {}", value, service.unit())
}

/// "5.00 rub/kWh" tariff rate.
pub fn rate(service: Service, value: f64) -> String {
    format!("{:.2} {}/{}", value, CURRENCY, service.unit())
}

/// "1. Electricity (rub/kWh)" row for the tariff menu.
pub fn service_row_with_unit(idx: usize, service: Service) -> String {
    format!("{}. {} ({}/{})", idx, service.label(), CURRENCY, service.unit())
}

/// "1. Electricity" row for the consumption menu.
pub fn service_row(idx: usize, service: Service) -> String {
    format!("{}. {}", idx, service.label())
}

/// Detail line for one priced report entry: the service label keyed to
/// amount and cost.
pub fn line_to_detail(line: &ReportLine) -> Detail {
    let value: String = format!(
        "{} = {}",
        amount(line.service, line.amount),
        money(line.cost).color(colors::ACCENT)
    );
    (line.service.label().to_string(), value.normal())
}
