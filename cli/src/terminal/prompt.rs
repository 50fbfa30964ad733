//! Validated operator input.
//!
//! Every reader loops until it gets a usable value, warning on each
//! rejected line. End of input is the one thing a retry cannot fix, so
//! it surfaces as an error and ends the program.

use std::io::{self, BufRead, Write};

use anyhow::{Result, bail};
use colored::*;

use domus_common::billing::service::Service;
use domus_common::warn;

use crate::commands::MenuAction;
use crate::terminal::colors;

/// Prints `prompt` and reads one trimmed line. `None` means the input
/// stream is closed.
fn read_line(prompt: &str) -> Result<Option<String>> {
    let mut stdout = io::stdout().lock();
    write!(stdout, "{} ", prompt.color(colors::PRIMARY))?;
    stdout.flush()?;

    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        return Ok(None); // EOF
    }
    Ok(Some(line.trim().to_string()))
}

/// Reads a whole number within `min..=max`, retrying until valid.
pub fn read_index(prompt: &str, min: u32, max: u32) -> Result<u32> {
    loop {
        let Some(line) = read_line(prompt)? else {
            bail!("input stream closed");
        };
        match line.parse::<u32>() {
            Ok(value) if (min..=max).contains(&value) => return Ok(value),
            _ => warn!("Enter a whole number between {min} and {max}."),
        }
    }
}

/// Reads a resident id: any whole number >= 1.
pub fn read_id(prompt: &str) -> Result<u32> {
    loop {
        let Some(line) = read_line(prompt)? else {
            bail!("input stream closed");
        };
        match line.parse::<u32>() {
            Ok(value) if value >= 1 => return Ok(value),
            _ => warn!("Enter a positive whole number."),
        }
    }
}

/// Reads a finite number >= 0, retrying until valid.
pub fn read_amount(prompt: &str) -> Result<f64> {
    loop {
        let Some(line) = read_line(prompt)? else {
            bail!("input stream closed");
        };
        match line.parse::<f64>() {
            Ok(value) if value.is_finite() && value >= 0.0 => return Ok(value),
            _ => warn!("Enter a number greater than or equal to 0."),
        }
    }
}

/// Reads a non-empty free-text line, retrying until valid.
pub fn read_text(prompt: &str) -> Result<String> {
    loop {
        let Some(line) = read_line(prompt)? else {
            bail!("input stream closed");
        };
        if line.is_empty() {
            warn!("Enter at least one character.");
            continue;
        }
        return Ok(line);
    }
}

/// Menu selection mapped to its action.
pub fn read_menu_action() -> Result<MenuAction> {
    let index = read_index("Select an option:", 1, MenuAction::ALL.len() as u32)?;
    Ok(MenuAction::ALL[(index - 1) as usize])
}

/// Service selection from a numbered listing the caller has printed.
pub fn read_service() -> Result<Service> {
    let index = read_index("Select a service (1-5):", 1, Service::ALL.len() as u32)?;
    Ok(Service::ALL[(index - 1) as usize])
}
