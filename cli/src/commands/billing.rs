use anyhow::Result;
use colored::*;

use domus_common::config::Config;
use domus_common::{success, warn};
use domus_core::registry::Registry;

use crate::mprint;
use crate::terminal::{colors, format, print, prompt};

/// Live total for the first resident whose name contains the fragment.
///
/// The match is case-sensitive and runs over the whole name string.
pub fn cost_by_name(office: &Registry) -> Result<()> {
    let fragment = prompt::read_text("Resident name (or part of it):")?;

    match office.total_cost_for_name(&fragment) {
        Ok(total) => success!(
            "Total for the first name containing \"{fragment}\": {}.",
            format::money(total)
        ),
        Err(err) => warn!("{err}"),
    }
    Ok(())
}

/// Office-wide statistics report.
pub fn stats(office: &Registry, cfg: &Config) {
    let snapshot = office.stats();

    print::header("Office statistics", cfg.quiet);
    print::print_status(format!("Residents registered: {}", snapshot.resident_count));
    mprint!();

    print::print_status("Current tariffs:");
    let key_width: usize = snapshot
        .tariffs
        .iter()
        .map(|(service, _)| service.label().len())
        .max()
        .unwrap_or(0);
    print::set_key_width(key_width);
    for (service, rate) in snapshot.tariffs.iter() {
        print::aligned_line(service.label(), format::rate(service, rate));
    }

    if !snapshot.residents.is_empty() && cfg.quiet < 2 {
        mprint!();
        print::header("Residents", cfg.quiet);
        for (idx, summary) in snapshot.residents.iter().enumerate() {
            print::tree_head(summary.id as usize, &summary.name);
            print::as_tree_one_level(vec![(
                "Address".to_string(),
                summary.address.as_str().normal(),
            )]);
            if idx + 1 != snapshot.residents.len() {
                mprint!();
            }
        }
    }

    print::fat_separator();
    print::centerln(
        &format!("Revenue to date: {}", format::money(snapshot.revenue).bold().bright_yellow())
            .color(colors::TEXT_DEFAULT),
    );
}
