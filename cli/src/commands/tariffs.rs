use anyhow::Result;

use domus_common::billing::service::Service;
use domus_common::config::Config;
use domus_common::{success, warn};
use domus_core::registry::Registry;

use crate::terminal::{format, print, prompt};

/// Prompts for a service and its new rate, then applies it.
///
/// The rate prompt only accepts finite values >= 0, so the registry's
/// own rate check cannot fire from here.
pub fn set(office: &mut Registry, cfg: &Config) -> Result<()> {
    print::header("Set a tariff", cfg.quiet);
    for (idx, service) in Service::ALL.iter().enumerate() {
        print::print_status(format::service_row_with_unit(idx + 1, *service));
    }

    let service = prompt::read_service()?;
    let prompt_text = format!("New rate ({}/{}):", format::CURRENCY, service.unit());
    let rate = prompt::read_amount(&prompt_text)?;

    match office.set_tariff(service, rate) {
        Ok(()) => success!(
            "Tariff for {} set to {}.",
            service.label(),
            format::rate(service, rate)
        ),
        Err(err) => warn!("{err}"),
    }
    Ok(())
}
