//! Blockfall terminal runner (default binary).
//!
//! Polls crossterm for input between frames of `FRAME_MS`, feeds intents to the
//! game state and presents each rendered scene through the diffing terminal
//! renderer.

use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind, MouseButton, MouseEventKind};
use tracing::{info, warn};

use blockfall::cli::{init_logging, Cli};
use blockfall::core::{FrameControl, GameState};
use blockfall::input::{map_key, Command, DragGesture};
use blockfall::term::{Scene, TerminalRenderer, Viewport};
use blockfall::types::FRAME_MS;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli)?;
    let mut game = GameState::from_config(cli.game_config()?)?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut game);

    // Always try to restore terminal state.
    if let Err(err) = term.exit() {
        warn!(error = %err, "failed to restore terminal");
    }
    info!(score = game.score(), lines = game.lines(), "exiting");
    result
}

fn run(term: &mut TerminalRenderer, game: &mut GameState) -> Result<()> {
    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    let mut scene = Scene::new(Viewport::new(w, h));
    let mut gesture = DragGesture::new();

    let frame_len = Duration::from_millis(FRAME_MS as u64);
    let mut last_frame = Instant::now();
    let mut control = FrameControl::Continue;

    // Draw the title screen right away.
    game.render(&mut scene);
    term.present_swap(scene.framebuffer_mut())?;

    loop {
        let timeout = frame_len.saturating_sub(last_frame.elapsed());

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => match map_key(key) {
                    Some(Command::Quit) => return Ok(()),
                    Some(Command::Play) => {
                        if game.play() {
                            control = FrameControl::Continue;
                        }
                    }
                    Some(Command::Intent(intent)) => {
                        game.apply_intent(intent);
                    }
                    None => {}
                },
                Event::Mouse(mouse) => {
                    let clicked = matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left));
                    if clicked
                        && scene.play_button_contains(mouse.column, mouse.row)
                        && game.play()
                    {
                        control = FrameControl::Continue;
                    } else if let Some(intent) = gesture.handle_mouse(mouse) {
                        game.apply_intent(intent);
                    }
                }
                Event::Resize(w, h) => {
                    scene.resize(Viewport::new(w, h));
                    term.invalidate();
                    if control == FrameControl::Stop {
                        game.render(&mut scene);
                        term.present_swap(scene.framebuffer_mut())?;
                    }
                }
                _ => {}
            }
        }

        let elapsed = last_frame.elapsed();
        if elapsed < frame_len {
            continue;
        }
        last_frame = Instant::now();

        // After game over nothing moves until the player starts again.
        if control == FrameControl::Continue {
            let elapsed_ms = u32::try_from(elapsed.as_millis()).unwrap_or(u32::MAX);
            control = game.frame(elapsed_ms, &mut scene);
            term.present_swap(scene.framebuffer_mut())?;
        }
    }
}
