//! Drives the typed terminal with real delays.

use crate::config::HeroConfig;
use crate::typer::{Typer, TyperStep};
use anyhow::Result;
use std::io::Write;
use tracing::{info, instrument};

const CLEAR: &str = "\x1b[2J\x1b[H";

/// Plays the intro animation to `out`, redrawing after every step.
///
/// With `clear` unset, frames are appended instead of drawn in place.
#[instrument(skip(config, out))]
pub async fn run_intro<W: Write>(config: &HeroConfig, out: &mut W, clear: bool) -> Result<Typer> {
    let mut typer = Typer::new(config.script().clone(), *config.history_limit());
    draw(&typer, out, clear)?;

    while let Some(next) = typer.peek() {
        let delay = match next {
            TyperStep::Keystroke => config.keystroke_delay(),
            TyperStep::Commit => config.line_pause(),
        };
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        typer.step();
        draw(&typer, out, clear)?;
    }

    info!("Intro finished");
    Ok(typer)
}

fn draw<W: Write>(typer: &Typer, out: &mut W, clear: bool) -> Result<()> {
    if clear {
        write!(out, "{}", CLEAR)?;
    }
    write!(out, "{}", typer.render())?;
    out.flush()?;
    Ok(())
}
