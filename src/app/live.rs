// Author: Dustin Pilgrim
// License: MIT

use chrono::Local;
use eyre::{Result, eyre};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::{broadcast, mpsc, oneshot, watch};

use playskin::{
    core::{
        config::Config,
        info::OverlayView,
        manager_msg::SurfaceMsg,
        playback::PlaybackControl,
        rate::PlaybackRate,
    },
    services::{
        clock::Clock,
        listener::{ClickTarget, DocumentClick},
    },
    surface::Surface,
};

use super::script::{ScriptCommand, parse_command};

/// Stand-in player that prints every forwarded intent.
struct ConsolePlayback;

impl ConsolePlayback {
    fn say(&self, what: std::fmt::Arguments) {
        println!("{} -> {}", Local::now().format("%H:%M:%S%.3f"), what);
    }
}

impl PlaybackControl for ConsolePlayback {
    fn play(&mut self) {
        self.say(format_args!("play"));
    }
    fn pause(&mut self) {
        self.say(format_args!("pause"));
    }
    fn seek_to(&mut self, seconds: f64) {
        self.say(format_args!("seek to {seconds:.2}s"));
    }
    fn set_volume(&mut self, level: f64) {
        self.say(format_args!("volume {:.0}%", level * 100.0));
    }
    fn toggle_mute(&mut self) {
        self.say(format_args!("toggle mute"));
    }
    fn set_playback_rate(&mut self, rate: PlaybackRate) {
        self.say(format_args!("rate {rate}x"));
    }
    fn enter_fullscreen(&mut self) {
        self.say(format_args!("enter fullscreen"));
    }
    fn exit_fullscreen(&mut self) {
        self.say(format_args!("exit fullscreen"));
    }
    fn enter_picture_in_picture(&mut self) {
        self.say(format_args!("enter picture-in-picture"));
    }
    fn exit_picture_in_picture(&mut self) {
        self.say(format_args!("exit picture-in-picture"));
    }
}

fn print_view(view: &OverlayView) {
    println!(
        "{} overlay {} | menu {} | rate {}x",
        Local::now().format("%H:%M:%S%.3f"),
        if view.visible { "shown" } else { "hidden" },
        if view.menu_open { "open" } else { "closed" },
        view.selected_rate,
    );
}

pub async fn run(cfg: Config) -> Result<()> {
    let clock = Clock::start();
    let (tx, rx) = mpsc::channel::<SurfaceMsg>(64);
    let (document, _) = broadcast::channel::<DocumentClick>(16);
    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    let (mut surface, mut view_rx) = Surface::new(
        cfg,
        clock,
        tx.clone(),
        document.clone(),
        Box::new(ConsolePlayback),
    );

    let mut surface_task = tokio::spawn(async move { surface.run(rx, shutdown_rx).await });

    let printer = tokio::spawn(async move {
        print_view(&view_rx.borrow_and_update());
        while view_rx.changed().await.is_ok() {
            print_view(&view_rx.borrow_and_update());
        }
    });

    tracing::info!("live: reading commands from stdin (ctrl-c to quit)");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            res = &mut surface_task => {
                printer.abort();
                return match res {
                    Ok(Ok(())) => Ok(()),
                    Ok(Err(e)) => Err(eyre!("surface failed: {e}")),
                    Err(join_err) => Err(eyre!("surface task panicked: {join_err}")),
                };
            }

            _ = tokio::signal::ctrl_c() => {
                tracing::info!("live: interrupted");
                break;
            }

            line = lines.next_line() => {
                let Some(line) = line? else {
                    tracing::info!("live: stdin closed");
                    break;
                };

                let cmd = match parse_command(&line) {
                    Ok(Some(cmd)) => cmd,
                    Ok(None) => continue,
                    Err(e) => {
                        tracing::warn!("live: {e:#}");
                        continue;
                    }
                };

                if !forward(cmd, &clock, &tx, &document).await? {
                    break;
                }
            }
        }
    }

    let (reply, done) = oneshot::channel();
    if tx.send(SurfaceMsg::Teardown { reply }).await.is_ok() {
        let _ = done.await;
    }
    let _ = shutdown_tx.send(true);

    match surface_task.await {
        Ok(Ok(())) => {}
        Ok(Err(e)) => tracing::error!("surface failed: {e}"),
        Err(join_err) => tracing::error!("surface task panicked: {join_err}"),
    }

    printer.abort();
    tracing::info!("live: stopped");
    Ok(())
}

/// Routes one stdin command; false once the surface is gone.
async fn forward(
    cmd: ScriptCommand,
    clock: &Clock,
    tx: &mpsc::Sender<SurfaceMsg>,
    document: &broadcast::Sender<DocumentClick>,
) -> Result<bool> {
    // no receivers just means the menu is closed
    let publish = |target| {
        let _ = document.send(DocumentClick { target });
    };

    match cmd {
        ScriptCommand::Wait => {
            tracing::warn!("live: `wait` only applies to replay");
            return Ok(true);
        }

        ScriptCommand::Info => {
            let (reply, rx) = oneshot::channel();
            if tx.send(SurfaceMsg::GetInfo { reply }).await.is_err() {
                return Ok(false);
            }
            let snap = rx.await?;
            println!("{}", serde_json::to_string_pretty(&snap)?);
            return Ok(true);
        }

        // clicks bubble to the document root as well
        ScriptCommand::Trigger => publish(ClickTarget::Trigger),
        ScriptCommand::Select(_) => publish(ClickTarget::MenuItem),
        ScriptCommand::Click => {
            let click = DocumentClick {
                target: ClickTarget::Elsewhere,
            };
            // the open menu's listener forwards it; otherwise deliver it directly
            if document.send(click).is_ok() {
                return Ok(true);
            }
        }

        _ => {}
    }

    let Some(event) = cmd.into_event(clock.now_ms()) else {
        return Ok(true);
    };

    Ok(tx.send(SurfaceMsg::Event(event)).await.is_ok())
}
