// Author: Dustin Pilgrim
// License: MIT

use std::io::Read;
use std::path::Path;

use eyre::{Result, WrapErr};

use playskin::{
    core::config::Config,
    sim::{Simulation, Transition},
};

use super::script::{ScriptCommand, ScriptLine, parse_script};

pub fn run(cfg: Config, script: &Path, json: bool) -> Result<()> {
    let source = read_script(script)?;
    let lines = parse_script(&source)?;

    tracing::info!("replay: {} events from {}", lines.len(), script.display());

    let mut out = String::new();
    replay(cfg, lines, json, &mut out)?;
    print!("{out}");
    Ok(())
}

fn read_script(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .wrap_err("failed to read script from stdin")?;
        return Ok(buf);
    }

    std::fs::read_to_string(path).wrap_err_with(|| format!("failed to read {}", path.display()))
}

/// Mounts at 0 ms, feeds every line, then appends the final snapshot.
pub fn replay(cfg: Config, lines: Vec<ScriptLine>, json: bool, out: &mut String) -> Result<()> {
    let mut sim = Simulation::mounted(cfg, 0);
    flush(&mut sim, json, out)?;

    for ScriptLine { at_ms, command } in lines {
        match command {
            ScriptCommand::Wait => sim.advance_to(at_ms),

            ScriptCommand::Info => {
                sim.advance_to(at_ms);
                flush(&mut sim, json, out)?;
                write_snapshot(&sim, json, out)?;
                continue;
            }

            other => {
                if let Some(event) = other.into_event(at_ms) {
                    if let Err(e) = sim.dispatch(event) {
                        tracing::debug!("replay: {at_ms}ms rejected: {e}");
                    }
                }
            }
        }

        flush(&mut sim, json, out)?;
    }

    write_snapshot(&sim, json, out)
}

fn flush(sim: &mut Simulation, json: bool, out: &mut String) -> Result<()> {
    for t in sim.take_transitions() {
        if json {
            out.push_str(&serde_json::to_string(&t)?);
        } else {
            out.push_str(&describe(&t));
        }
        out.push('\n');
    }
    Ok(())
}

fn write_snapshot(sim: &Simulation, json: bool, out: &mut String) -> Result<()> {
    let snap = sim.snapshot();
    if json {
        out.push_str(&serde_json::to_string(&snap)?);
        out.push('\n');
    } else {
        out.push_str(&format!("--- at {}ms\n", sim.now_ms()));
        out.push_str(&snap.pretty_text);
        if !snap.pretty_text.ends_with('\n') {
            out.push('\n');
        }
    }
    Ok(())
}

fn describe(t: &Transition) -> String {
    match t {
        Transition::Visibility { at_ms, visible } => format!(
            "[{at_ms:>7}ms] overlay {}",
            if *visible { "shown" } else { "hidden" }
        ),
        Transition::Menu { at_ms, open } => format!(
            "[{at_ms:>7}ms] rate menu {}",
            if *open { "opened" } else { "closed" }
        ),
        Transition::Listener { at_ms, attached } => format!(
            "[{at_ms:>7}ms] outside-click listener {}",
            if *attached { "attached" } else { "released" }
        ),
        Transition::Playback { at_ms, intent } => format!("[{at_ms:>7}ms] playback {intent:?}"),
        Transition::Rejected { at_ms, reason } => format!("[{at_ms:>7}ms] rejected: {reason}"),
    }
}
