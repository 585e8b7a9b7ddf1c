//! Floating countdown/quote widget.
//!
//! - [`state`]: gesture state machine (tap, long-press, drag with snap).
//! - [`motion`]: per-axis tweens and the edge/clamp layout rules.
//! - [`countdown`]: the live countdown to the snapshot's expected date.
//! - [`runner`]: the poll and tick tasks behind a mounted widget.

pub mod countdown;
pub mod motion;
pub mod runner;
pub mod state;

pub use countdown::Countdown;
pub use runner::{mount, mount_with_clock, WallClock, WidgetData, WidgetFrame, WidgetHandle};
pub use state::{FloatingWidget, WidgetMode, WidgetPosition, WidgetSize};
