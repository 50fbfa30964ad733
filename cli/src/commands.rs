pub mod billing;
pub mod consumption;
pub mod residents;
pub mod tariffs;

use clap::Parser;
use domus_common::config::Config;

use crate::mprint;
use crate::terminal::print;

#[derive(Parser)]
#[command(name = "domus")]
#[command(about = "A utility billing console for a housing office.")]
pub struct CommandLine {
    /// Skip the startup banner
    #[arg(long)]
    pub no_banner: bool,

    /// Reduce report output (repeat for less)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub quiet: u8,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// One entry of the interactive menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    AddResident,
    SetTariff,
    AddConsumption,
    CostByName,
    Stats,
    ResidentDetail,
    Quit,
}

impl MenuAction {
    /// Menu entries in display order.
    pub const ALL: [MenuAction; 7] = [
        MenuAction::AddResident,
        MenuAction::SetTariff,
        MenuAction::AddConsumption,
        MenuAction::CostByName,
        MenuAction::Stats,
        MenuAction::ResidentDetail,
        MenuAction::Quit,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MenuAction::AddResident => "Add a resident",
            MenuAction::SetTariff => "Set a tariff",
            MenuAction::AddConsumption => "Record service consumption",
            MenuAction::CostByName => "Total cost by resident name",
            MenuAction::Stats => "Show office statistics",
            MenuAction::ResidentDetail => "Show resident details",
            MenuAction::Quit => "Quit",
        }
    }
}

/// Renders the numbered menu.
pub fn print_menu(cfg: &Config) {
    mprint!();
    print::header("Menu", cfg.quiet);
    for (idx, action) in MenuAction::ALL.iter().enumerate() {
        print::print_status(format!("{}. {}", idx + 1, action.label()));
    }
}
