//! CLI `widget` command: the floating widget rendered as a status line.
//!
//! Reads gestures from stdin, one per line:
//!
//! - `tap`: toggle expanded/minimized
//! - `hold`: toggle countdown/quote
//! - `drag X Y`: drag to `(X, Y)` and release
//! - `quit`

use std::sync::Arc;

use anyhow::Result;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::time::Instant;

use momento::api::Backend;
use momento::config::MomentoConfig;
use momento::widget::{self, FloatingWidget, WidgetFrame, WidgetMode, WidgetSize};

enum Gesture {
    Tap,
    Hold,
    Drag(f64, f64),
    Quit,
}

fn parse_gesture(line: &str) -> Option<Gesture> {
    let mut words = line.split_whitespace();
    match words.next()? {
        "tap" => Some(Gesture::Tap),
        "hold" => Some(Gesture::Hold),
        "drag" => {
            let x = words.next()?.parse().ok()?;
            let y = words.next()?.parse().ok()?;
            Some(Gesture::Drag(x, y))
        }
        "quit" | "q" => Some(Gesture::Quit),
        _ => None,
    }
}

pub async fn run(config: &MomentoConfig, mode: WidgetMode) -> Result<()> {
    let (_conn, ctx) = super::open_session(config)?;
    let profile_id = super::require_profile(&ctx)?;
    let backend: Arc<dyn Backend> = Arc::new(super::client(config)?);

    let mut state = FloatingWidget::new(&config.widget);
    state.set_mode(mode);

    let mounted_at = Instant::now();
    let handle = widget::mount(backend, profile_id, &config.widget);
    let mut frames = handle.frames();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    println!("tap | hold | drag X Y | quit");

    loop {
        tokio::select! {
            changed = frames.changed() => {
                if changed.is_err() {
                    break;
                }
                let frame = frames.borrow_and_update().clone();
                println!("{}", render(&state, &frame, mounted_at.elapsed()));
            }
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                let now = mounted_at.elapsed();
                match parse_gesture(&line) {
                    Some(Gesture::Quit) => break,
                    Some(Gesture::Tap) => {
                        state.tap(now);
                    }
                    Some(Gesture::Hold) => {
                        state.long_press();
                    }
                    Some(Gesture::Drag(x, y)) => {
                        state.drag_start(now);
                        let origin = state.position(now);
                        state.drag_move(x - origin.x, y - origin.y);
                        state.drag_end(now);
                    }
                    None => {
                        eprintln!("unknown gesture: {}", line.trim());
                        continue;
                    }
                }
                println!("{}", render(&state, &handle.current(), now));
            }
        }
    }

    handle.unmount().await;
    Ok(())
}

fn render(state: &FloatingWidget, frame: &WidgetFrame, now: std::time::Duration) -> String {
    let p = state.position(now);
    let rest = state.resting_position();
    let body = match (state.size(), state.mode()) {
        (WidgetSize::Expanded, WidgetMode::Countdown) => match frame.countdown {
            Some(c) if c.is_expired() => "time's up: every day is a bonus".to_string(),
            Some(c) => format!("{c} left"),
            None => "loading...".to_string(),
        },
        (WidgetSize::Minimized, WidgetMode::Countdown) => match frame.countdown {
            Some(c) => format!("{}d", c.days()),
            None => "...".to_string(),
        },
        (WidgetSize::Expanded, WidgetMode::Quote) => match &frame.quote {
            Some(q) => q.attributed(),
            None => "loading...".to_string(),
        },
        (WidgetSize::Minimized, WidgetMode::Quote) => match frame.life_percentage {
            Some(pct) => format!("{pct:.1}%"),
            None => "...".to_string(),
        },
    };
    let moving = if state.is_animating(now) {
        format!(" -> ({:.0}, {:.0})", rest.x, rest.y)
    } else {
        String::new()
    };
    format!(
        "[{:.0}, {:.0}{moving} x{:.2}] {body}",
        p.x, p.y, p.scale
    )
}
