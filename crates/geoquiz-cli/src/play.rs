//! Line-driven quiz loop.
//!
//! Each input line is one command; country names and guesses may contain
//! spaces:
//!
//! ```text
//! click Italy
//! type ital
//! tab
//! enter
//! verify
//! ```

use std::io::{BufRead, Write};

use anyhow::{Context, Result, bail};
use geoquiz_core::{EventOutcome, MapEvent, MapSession, Renderer, VerifyReport};

use crate::summary::write_status;

pub const HELP: &str = "\
commands:
  hover <country>    pointer enters a country
  leave <country>    pointer leaves a country
  click <country>    select an open country
  dclick <country>   select a country, withdrawing its guess
  type <text>        replace the entry text
  tab / shift-tab    cycle through suggestions
  enter              guess the displayed text for the selection
  verify             check every pending guess
  status             show the map and score
  help               show this list
  quit               leave the game";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayCommand {
    Event(MapEvent),
    Status,
    Help,
    Quit,
}

/// Parse one input line. Blank lines and `#` comments yield `None`.
pub fn parse_command(line: &str) -> Result<Option<PlayCommand>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }
    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };
    let name = |verb: &str| -> Result<String> {
        if rest.is_empty() {
            bail!("`{verb}` needs a country name");
        }
        Ok(rest.to_string())
    };

    let command = match verb.to_lowercase().as_str() {
        "hover" => PlayCommand::Event(MapEvent::PointerEnter(name(verb)?)),
        "leave" => PlayCommand::Event(MapEvent::PointerLeave(name(verb)?)),
        "click" => PlayCommand::Event(MapEvent::Click(name(verb)?)),
        "dclick" => PlayCommand::Event(MapEvent::DoubleClick(name(verb)?)),
        "type" => PlayCommand::Event(MapEvent::TextChanged(rest.to_string())),
        "tab" => PlayCommand::Event(MapEvent::Cycle(1)),
        "shift-tab" => PlayCommand::Event(MapEvent::Cycle(-1)),
        "enter" => PlayCommand::Event(MapEvent::Submit),
        "verify" => PlayCommand::Event(MapEvent::Verify),
        "status" => PlayCommand::Status,
        "help" => PlayCommand::Help,
        "quit" | "exit" => PlayCommand::Quit,
        other => bail!("unknown command `{other}` (try `help`)"),
    };
    Ok(Some(command))
}

/// Run commands from `input` until `quit` or end of input.
///
/// Bad commands and unknown countries are reported on `output` and the
/// game continues.
pub fn run_play<R, I, O>(session: &mut MapSession<R>, input: I, output: &mut O) -> Result<()>
where
    R: Renderer,
    I: BufRead,
    O: Write,
{
    for line in input.lines() {
        let line = line.context("failed to read command")?;
        let command = match parse_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(error) => {
                tracing::warn!(line = %line, %error, "rejected command");
                writeln!(output, "error: {error}")?;
                continue;
            }
        };
        match command {
            PlayCommand::Quit => break,
            PlayCommand::Help => writeln!(output, "{HELP}")?,
            PlayCommand::Status => write_status(session, output)?,
            PlayCommand::Event(event) => handle_event(session, event, output)?,
        }
    }
    output.flush()?;
    Ok(())
}

fn handle_event<R: Renderer, O: Write>(
    session: &mut MapSession<R>,
    event: MapEvent,
    output: &mut O,
) -> Result<()> {
    let target = match &event {
        MapEvent::PointerEnter(name)
        | MapEvent::PointerLeave(name)
        | MapEvent::Click(name)
        | MapEvent::DoubleClick(name) => Some(name.clone()),
        MapEvent::Submit => session.selected().map(|c| c.name().to_string()),
        _ => None,
    };
    let shows_suggestion = matches!(event, MapEvent::TextChanged(_) | MapEvent::Cycle(_));
    let is_submit = event == MapEvent::Submit;

    let outcome = match session.dispatch(event) {
        Ok(outcome) => outcome,
        Err(error) => {
            writeln!(output, "error: {error}")?;
            return Ok(());
        }
    };

    match outcome {
        EventOutcome::Verified(report) => write_report(session, &report, output)?,
        EventOutcome::Unchanged if is_submit => {
            if target.is_none() {
                writeln!(output, "{}", geoquiz_core::MAKE_SELECTION)?;
            }
        }
        EventOutcome::Unchanged if shows_suggestion => {
            writeln!(output, "suggest: {}", session.autocomplete().displayed())?;
        }
        EventOutcome::Unchanged => {}
        EventOutcome::Changed if shows_suggestion => {
            writeln!(output, "suggest: {}", session.autocomplete().displayed())?;
        }
        EventOutcome::Changed => {
            if let Some(name) = target {
                match session.guess_for(&name) {
                    Some(guess) if is_submit => writeln!(output, "{name}: guessed {guess}")?,
                    _ => {
                        let state = session.country(&name)?.state();
                        writeln!(output, "{name}: {state}")?;
                    }
                }
            }
        }
    }
    Ok(())
}

fn write_report<R: Renderer, O: Write>(
    session: &MapSession<R>,
    report: &VerifyReport,
    output: &mut O,
) -> Result<()> {
    writeln!(
        output,
        "You got {} correct and {} incorrect",
        report.correct.len(),
        report.incorrect.len()
    )?;
    for (country, guess) in &report.incorrect {
        writeln!(output, "  {country} is not {guess}")?;
    }
    if report.complete {
        writeln!(output, "Every country found! Final score: {}", session.score())?;
    }
    Ok(())
}
