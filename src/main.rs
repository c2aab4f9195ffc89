mod display;

use std::collections::HashMap;
use std::io::{stdout, BufWriter, Write};
use std::sync::mpsc;
use std::thread;

use crossterm::{
    cursor,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, KeyboardEnhancementFlags, MouseButton, MouseEvent, MouseEventKind,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    terminal, ExecutableCommand,
};
use glam::Vec2;
use rand::thread_rng;

use sky_barrage::compute::TickInput;
use sky_barrage::scheduler::{FixedRateClock, FrameClock, FrameOutcome, Ticker};

const FPS: u32 = 60;

/// Log file written only when `RUST_LOG` is set; stderr belongs to the game screen.
const LOG_FILE: &str = "sky_barrage.log";

// ── Keyboard steering ─────────────────────────────────────────────────────────

/// Arena pixels the pointer moves per frame while a direction key is held.
const KEY_STEER: f32 = 6.0;

/// A key is considered "held" if its last press/repeat event arrived within
/// this many frames. Covers terminals that don't emit key-release events.
const HOLD_WINDOW: u64 = 8;

/// Returns true if `key` was seen within the last `HOLD_WINDOW` frames.
fn is_held(key_frame: &HashMap<KeyCode, u64>, key: &KeyCode, frame: u64) -> bool {
    key_frame
        .get(key)
        .map(|&last| frame.saturating_sub(last) <= HOLD_WINDOW)
        .unwrap_or(false)
}

fn any_held(key_frame: &HashMap<KeyCode, u64>, keys: &[KeyCode], frame: u64) -> bool {
    keys.iter().any(|k| is_held(key_frame, k, frame))
}

/// Direction of travel from whichever steering keys are held.
fn steer_direction(key_frame: &HashMap<KeyCode, u64>, frame: u64) -> Vec2 {
    let left = any_held(key_frame, &[KeyCode::Left, KeyCode::Char('a'), KeyCode::Char('A')], frame);
    let right = any_held(key_frame, &[KeyCode::Right, KeyCode::Char('d'), KeyCode::Char('D')], frame);
    let up = any_held(key_frame, &[KeyCode::Up, KeyCode::Char('w'), KeyCode::Char('W')], frame);
    let down = any_held(key_frame, &[KeyCode::Down, KeyCode::Char('s'), KeyCode::Char('S')], frame);

    let axis = |neg: bool, pos: bool| match (neg, pos) {
        (true, false) => -1.0,
        (false, true) => 1.0,
        _ => 0.0,
    };
    Vec2::new(axis(left, right), axis(up, down))
}

// ── Game loop ─────────────────────────────────────────────────────────────────

fn current_arena() -> std::io::Result<sky_barrage::entities::Arena> {
    let (cols, rows) = terminal::size()?;
    Ok(display::arena_for(cols, rows))
}

/// Runs until the player quits.
///
/// Pointer input comes from mouse motion (when the terminal reports it) or
/// from held steering keys, which nudge a virtual pointer each frame. The
/// simulation only ever sees the resulting target position.
fn game_loop<W: Write>(out: &mut W, rx: &mpsc::Receiver<Event>) -> std::io::Result<()> {
    let mut ticker = Ticker::new(current_arena()?, thread_rng());
    let mut clock = FixedRateClock::per_second(FPS);

    // Maps each held key → the frame it was last seen (press or repeat).
    let mut key_frame: HashMap<KeyCode, u64> = HashMap::new();
    let mut pointer: Option<Vec2> = None;
    let mut frame: u64 = 0;

    loop {
        frame += 1;
        let mut start_requested = false;

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(ev) = rx.try_recv() {
            match ev {
                Event::Key(KeyEvent { code, kind, modifiers, .. }) => match kind {
                    KeyEventKind::Press => {
                        key_frame.insert(code, frame);
                        match code {
                            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                                return Ok(());
                            }
                            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                                return Ok(());
                            }
                            KeyCode::Enter | KeyCode::Char(' ') => start_requested = true,
                            _ => {}
                        }
                    }
                    KeyEventKind::Repeat => {
                        key_frame.insert(code, frame);
                    }
                    KeyEventKind::Release => {
                        key_frame.remove(&code);
                    }
                },
                Event::Mouse(MouseEvent { kind, column, row, .. }) => match kind {
                    MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                        pointer = Some(display::cell_to_world(column, row));
                    }
                    MouseEventKind::Down(MouseButton::Left) => {
                        pointer = Some(display::cell_to_world(column, row));
                        start_requested = true;
                    }
                    _ => {}
                },
                _ => {}
            }
        }

        if start_requested && !ticker.state().is_running() {
            key_frame.clear();
            ticker.press_start(current_arena()?);
        }

        // ── Keyboard steering moves the virtual pointer ───────────────────────
        let dir = steer_direction(&key_frame, frame);
        if dir != Vec2::ZERO {
            let state = ticker.state();
            let arena = state.arena;
            let base = pointer.unwrap_or(state.player.pos);
            let moved = base + dir * KEY_STEER;
            pointer = Some(moved.clamp(Vec2::ZERO, Vec2::new(arena.width, arena.height)));
        }

        if ticker.frame(&TickInput { pointer }) == FrameOutcome::GameOver {
            pointer = None;
        }

        display::render(out, ticker.state())?;
        clock.wait_for_next_frame();
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn init_logging() {
    let env = env_logger::Env::default();
    let mut builder = env_logger::Builder::from_env(env.default_filter_or("off"));
    if std::env::var_os("RUST_LOG").is_some() {
        match std::fs::File::create(LOG_FILE) {
            Ok(file) => {
                builder.target(env_logger::Target::Pipe(Box::new(file)));
            }
            Err(_) => {
                builder.filter_level(log::LevelFilter::Off);
            }
        }
    }
    builder.init();
}

fn main() -> std::io::Result<()> {
    init_logging();
    log::info!("sky_barrage starting");

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;
    out.execute(EnableMouseCapture)?;

    // Request key-release (and key-repeat) events from the terminal.
    // Kitty-protocol terminals support this; others fall back gracefully.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || loop {
        match event::read() {
            Ok(ev) => {
                if tx.send(ev).is_err() {
                    break; // receiver dropped → program exiting
                }
            }
            Err(_) => break,
        }
    });

    let result = game_loop(&mut out, &rx);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(DisableMouseCapture);
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    if let Err(e) = &result {
        log::error!("terminal error: {e}");
    }
    result
}
