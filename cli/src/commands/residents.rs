use anyhow::Result;
use colored::*;

use domus_common::config::Config;
use domus_common::{success, warn};
use domus_core::registry::Registry;
use domus_core::report::ResidentReport;

use crate::terminal::{colors, format, print, prompt};

/// Registers a new resident from a prompted name and address.
pub fn add(office: &mut Registry) -> Result<()> {
    let name = prompt::read_text("Resident name:")?;
    let address = prompt::read_text("Address:")?;

    let id = office.add_resident(&name, &address);
    success!("Resident registered with id {id}.");
    Ok(())
}

/// Lists every resident, then shows the full report for a chosen id.
pub fn detail(office: &Registry, cfg: &Config) -> Result<()> {
    if office.residents().is_empty() {
        warn!("No residents registered yet.");
        return Ok(());
    }

    print::header("Residents", cfg.quiet);
    for summary in office.list_residents() {
        print::print_status(format!(
            "[{}] {}",
            summary.id.to_string().color(colors::ACCENT),
            summary.name
        ));
    }

    let id = prompt::read_id("Resident id:")?;
    match office.resident_report(id) {
        Ok(report) => print_report(&report, cfg),
        Err(err) => warn!("{err}"),
    }
    Ok(())
}

fn print_report(report: &ResidentReport, cfg: &Config) {
    print::header("Resident report", cfg.quiet);
    print::tree_head(report.id as usize, &report.name);

    let mut details: Vec<format::Detail> =
        vec![("Address".to_string(), report.address.as_str().normal())];

    if report.lines.is_empty() {
        details.push(("Services".to_string(), "none consumed yet".dimmed()));
    } else {
        for line in &report.lines {
            details.push(format::line_to_detail(line));
        }
        details.push((
            "Total".to_string(),
            format::money(report.total).bold().bright_yellow(),
        ));
    }

    print::as_tree_one_level(details);
}
