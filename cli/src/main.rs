mod commands;
mod terminal;

use commands::{CommandLine, MenuAction};
use domus_common::config::Config;
use domus_common::{info, warn};
use domus_core::registry::Registry;
use terminal::{logging, print, prompt};

fn main() -> anyhow::Result<()> {
    let command_line = CommandLine::parse_args();

    logging::init();

    let cfg = Config {
        no_banner: command_line.no_banner,
        quiet: command_line.quiet,
    };

    print::banner(cfg.no_banner, cfg.quiet);
    info!("Add residents and set tariffs to get started.");

    // One office per process, owned right here. Everything below
    // borrows it.
    let mut office = Registry::new();

    if let Err(err) = run(&mut office, &cfg) {
        // A closed input stream is the only way out of the prompt
        // loops; report it and leave normally.
        warn!("{err}");
    }

    print::end_of_program();
    Ok(())
}

fn run(office: &mut Registry, cfg: &Config) -> anyhow::Result<()> {
    loop {
        commands::print_menu(cfg);

        match prompt::read_menu_action()? {
            MenuAction::AddResident => commands::residents::add(office)?,
            MenuAction::SetTariff => commands::tariffs::set(office, cfg)?,
            MenuAction::AddConsumption => commands::consumption::add(office, cfg)?,
            MenuAction::CostByName => commands::billing::cost_by_name(office)?,
            MenuAction::Stats => commands::billing::stats(office, cfg),
            MenuAction::ResidentDetail => commands::residents::detail(office, cfg)?,
            MenuAction::Quit => return Ok(()),
        }
    }
}
