// Author: Dustin Pilgrim
// License: MIT

use eyre::{Result, WrapErr, bail, eyre};
use once_cell::sync::Lazy;
use regex::Regex;

use playskin::core::{
    events::Event,
    playback::{Intent, PlaybackSnapshot},
};

static TIMED_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*(\d+)\s+(\S.*?)\s*$").expect("valid timed-line regex"));

static COMMAND: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*([a-z][a-z-]*)(?:\s+(\S.*?))?\s*$").expect("valid command regex")
});

#[derive(Debug, Clone, PartialEq)]
pub enum ScriptCommand {
    Move,
    HoverEnter,
    HoverLeave,
    DragStart,
    DragEnd,
    Trigger,
    /// Click on the document outside the trigger and the menu.
    Click,
    /// Raw rate; membership is checked by the surface, not here.
    Select(f64),
    Intent(Intent),
    Snapshot(PlaybackSnapshot),
    Wait,
    Info,
    Unmount,
}

impl ScriptCommand {
    /// The surface event this command produces, if any.
    pub fn into_event(self, now_ms: u64) -> Option<Event> {
        let ev = match self {
            ScriptCommand::Move => Event::PointerMove { now_ms },
            ScriptCommand::HoverEnter => Event::HoverEnter { now_ms },
            ScriptCommand::HoverLeave => Event::HoverLeave { now_ms },
            ScriptCommand::DragStart => Event::DragStart { now_ms },
            ScriptCommand::DragEnd => Event::DragEnd { now_ms },
            ScriptCommand::Trigger => Event::TriggerClick { now_ms },
            ScriptCommand::Click => Event::OutsideClick { now_ms },
            ScriptCommand::Select(rate) => Event::ItemSelect { rate, now_ms },
            ScriptCommand::Intent(intent) => Event::Intent { intent, now_ms },
            ScriptCommand::Snapshot(snapshot) => Event::PlaybackChanged { snapshot, now_ms },
            ScriptCommand::Unmount => Event::Unmounted { now_ms },
            ScriptCommand::Wait | ScriptCommand::Info => return None,
        };
        Some(ev)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScriptLine {
    pub at_ms: u64,
    pub command: ScriptCommand,
}

fn is_blank(line: &str) -> bool {
    let line = line.trim();
    line.is_empty() || line.starts_with('#')
}

/// Parses `<command> [arg]`. Blank lines and `#` comments yield `None`.
pub fn parse_command(line: &str) -> Result<Option<ScriptCommand>> {
    if is_blank(line) {
        return Ok(None);
    }

    let caps = COMMAND
        .captures(line)
        .ok_or_else(|| eyre!("malformed command: {:?}", line.trim()))?;
    let name = &caps[1];
    let arg = caps.get(2).map(|m| m.as_str());

    let no_arg = |cmd: ScriptCommand| -> Result<ScriptCommand> {
        match arg {
            None => Ok(cmd),
            Some(a) => bail!("{name} takes no argument (got {a:?})"),
        }
    };
    let number = || -> Result<f64> {
        let raw = arg.ok_or_else(|| eyre!("{name} needs a numeric argument"))?;
        let raw = raw.strip_suffix('x').unwrap_or(raw);
        raw.parse::<f64>()
            .wrap_err_with(|| format!("{name}: invalid number {raw:?}"))
    };

    let cmd = match name {
        "move" => no_arg(ScriptCommand::Move)?,
        "hover-enter" => no_arg(ScriptCommand::HoverEnter)?,
        "hover-leave" => no_arg(ScriptCommand::HoverLeave)?,
        "drag-start" => no_arg(ScriptCommand::DragStart)?,
        "drag-end" => no_arg(ScriptCommand::DragEnd)?,
        "trigger" => no_arg(ScriptCommand::Trigger)?,
        "click" => no_arg(ScriptCommand::Click)?,
        "select" => ScriptCommand::Select(number()?),

        "play" => no_arg(ScriptCommand::Intent(Intent::Play))?,
        "pause" => no_arg(ScriptCommand::Intent(Intent::Pause))?,
        "seek" => ScriptCommand::Intent(Intent::SeekTo { seconds: number()? }),
        "volume" => ScriptCommand::Intent(Intent::SetVolume { level: number()? }),
        "mute" => no_arg(ScriptCommand::Intent(Intent::ToggleMute))?,
        "fullscreen" => no_arg(ScriptCommand::Intent(Intent::EnterFullscreen))?,
        "exit-fullscreen" => no_arg(ScriptCommand::Intent(Intent::ExitFullscreen))?,
        "pip" => no_arg(ScriptCommand::Intent(Intent::EnterPictureInPicture))?,
        "exit-pip" => no_arg(ScriptCommand::Intent(Intent::ExitPictureInPicture))?,

        "snapshot" => {
            let raw = arg.ok_or_else(|| eyre!("snapshot needs a JSON object"))?;
            let snap: PlaybackSnapshot =
                serde_json::from_str(raw).wrap_err("snapshot: invalid JSON")?;
            ScriptCommand::Snapshot(snap)
        }

        "wait" => no_arg(ScriptCommand::Wait)?,
        "info" => no_arg(ScriptCommand::Info)?,
        "unmount" => no_arg(ScriptCommand::Unmount)?,

        other => bail!("unknown command: {other}"),
    };

    Ok(Some(cmd))
}

/// Parses `<ms> <command> [arg]`.
pub fn parse_line(line: &str) -> Result<Option<ScriptLine>> {
    if is_blank(line) {
        return Ok(None);
    }

    let caps = TIMED_LINE
        .captures(line)
        .ok_or_else(|| eyre!("expected `<ms> <command>`, got {:?}", line.trim()))?;
    let at_ms: u64 = caps[1].parse().wrap_err("timestamp out of range")?;

    match parse_command(&caps[2])? {
        Some(command) => Ok(Some(ScriptLine { at_ms, command })),
        None => bail!("missing command after timestamp {at_ms}"),
    }
}

/// Parses a whole script; timestamps must not decrease.
pub fn parse_script(source: &str) -> Result<Vec<ScriptLine>> {
    let mut out = Vec::new();
    let mut last = 0u64;

    for (idx, line) in source.lines().enumerate() {
        let lineno = idx + 1;
        let Some(parsed) = parse_line(line).wrap_err_with(|| format!("line {lineno}"))? else {
            continue;
        };

        if parsed.at_ms < last {
            bail!("line {lineno}: timestamp {} goes back before {last}", parsed.at_ms);
        }
        last = parsed.at_ms;
        out.push(parsed);
    }

    Ok(out)
}
