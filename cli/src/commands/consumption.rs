use anyhow::Result;

use domus_common::billing::service::Service;
use domus_common::config::Config;
use domus_common::{success, warn};
use domus_core::registry::Registry;

use crate::terminal::{format, print, prompt};

/// Prompts for a resident, a service, and an amount, then records it.
pub fn add(office: &mut Registry, cfg: &Config) -> Result<()> {
    if office.residents().is_empty() {
        warn!("Add residents first.");
        return Ok(());
    }

    let id = prompt::read_id("Resident id:")?;

    print::header("Services", cfg.quiet);
    for (idx, service) in Service::ALL.iter().enumerate() {
        print::print_status(format::service_row(idx + 1, *service));
    }
    let service = prompt::read_service()?;

    let prompt_text = format!("Units consumed ({}):", service.unit());
    let amount = prompt::read_amount(&prompt_text)?;

    match office.add_consumption(id, service, amount) {
        Ok(()) => success!(
            "Recorded {} of {} for resident {id}.",
            format::amount(service, amount),
            service.label()
        ),
        Err(err) => warn!("{err}"),
    }
    Ok(())
}
