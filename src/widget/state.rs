//! Gesture state machine for the floating widget.
//!
//! Observable state is `size × mode`. Tap toggles size, long-press toggles
//! mode, drag moves the widget 1:1 with the pointer and snaps to the nearest
//! horizontal edge on release. Once a drag has passed the threshold, taps and
//! long-presses are ignored until the drag ends.

use std::time::Duration;

use serde::Serialize;

use super::motion::{Axis, Easing, Layout};
use crate::config::WidgetConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WidgetSize {
    Expanded,
    Minimized,
}

impl WidgetSize {
    pub fn toggled(self) -> Self {
        match self {
            Self::Expanded => Self::Minimized,
            Self::Minimized => Self::Expanded,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WidgetMode {
    Countdown,
    Quote,
}

impl WidgetMode {
    pub fn toggled(self) -> Self {
        match self {
            Self::Countdown => Self::Quote,
            Self::Quote => Self::Countdown,
        }
    }
}

impl std::str::FromStr for WidgetMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "countdown" => Ok(Self::Countdown),
            "quote" => Ok(Self::Quote),
            _ => Err(format!("unknown widget mode: {s}")),
        }
    }
}

/// Sampled on-screen placement. Transient; never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WidgetPosition {
    pub x: f64,
    pub y: f64,
    pub scale: f64,
    pub opacity: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Drag {
    origin_x: f64,
    origin_y: f64,
    committed: bool,
}

#[derive(Debug, Clone)]
pub struct FloatingWidget {
    size: WidgetSize,
    mode: WidgetMode,
    layout: Layout,
    x: Axis,
    y: Axis,
    scale: Axis,
    opacity: Axis,
    drag: Option<Drag>,
    drag_threshold: f64,
    animation: Duration,
    minimized_scale: f64,
    minimized_opacity: f64,
}

impl FloatingWidget {
    /// Expanded countdown resting at the right edge, just below the top bound.
    pub fn new(config: &WidgetConfig) -> Self {
        let layout = Layout::from_config(config);
        Self {
            size: WidgetSize::Expanded,
            mode: WidgetMode::Countdown,
            x: Axis::new(layout.right_x()),
            y: Axis::new(layout.top_bound),
            scale: Axis::new(1.0),
            opacity: Axis::new(1.0),
            layout,
            drag: None,
            drag_threshold: config.drag_threshold.max(0.0),
            animation: config.animation_duration(),
            minimized_scale: config.minimized_scale,
            minimized_opacity: config.minimized_opacity,
        }
    }

    pub fn size(&self) -> WidgetSize {
        self.size
    }

    pub fn mode(&self) -> WidgetMode {
        self.mode
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn set_mode(&mut self, mode: WidgetMode) {
        self.mode = mode;
    }

    /// `true` once the current drag has passed the threshold.
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some_and(|d| d.committed)
    }

    pub fn position(&self, now: Duration) -> WidgetPosition {
        WidgetPosition {
            x: self.x.value_at(now),
            y: self.y.value_at(now),
            scale: self.scale.value_at(now),
            opacity: self.opacity.value_at(now),
        }
    }

    /// Where the widget will rest once every animation has finished.
    pub fn resting_position(&self) -> WidgetPosition {
        WidgetPosition {
            x: self.x.target(),
            y: self.y.target(),
            scale: self.scale.target(),
            opacity: self.opacity.target(),
        }
    }

    pub fn is_animating(&self, now: Duration) -> bool {
        [&self.x, &self.y, &self.scale, &self.opacity]
            .iter()
            .any(|axis| axis.is_animating(now))
    }

    /// Toggle size. Returns `false` when swallowed by a committed drag.
    pub fn tap(&mut self, now: Duration) -> bool {
        if self.is_dragging() {
            return false;
        }
        self.size = self.size.toggled();
        let (scale, opacity) = match self.size {
            WidgetSize::Expanded => (1.0, 1.0),
            WidgetSize::Minimized => (self.minimized_scale, self.minimized_opacity),
        };
        self.scale
            .animate_to(scale, now, self.animation, Easing::EaseOutCubic);
        self.opacity
            .animate_to(opacity, now, self.animation, Easing::EaseOutCubic);
        tracing::debug!(size = ?self.size, "widget size toggled");
        true
    }

    /// Toggle mode. Returns `false` when swallowed by a committed drag.
    pub fn long_press(&mut self) -> bool {
        if self.is_dragging() {
            return false;
        }
        self.mode = self.mode.toggled();
        tracing::debug!(mode = ?self.mode, "widget mode toggled");
        true
    }

    /// Pointer went down on the widget. The origin is wherever the widget is
    /// at `now`, even mid-animation.
    pub fn drag_start(&mut self, now: Duration) {
        self.drag = Some(Drag {
            origin_x: self.x.value_at(now),
            origin_y: self.y.value_at(now),
            committed: false,
        });
    }

    /// Pointer moved by `(dx, dy)` in total since [`drag_start`](Self::drag_start).
    pub fn drag_move(&mut self, dx: f64, dy: f64) {
        let Some(drag) = self.drag.as_mut() else {
            return;
        };
        if !drag.committed && dx.hypot(dy) < self.drag_threshold {
            return;
        }
        drag.committed = true;
        let (x, y) = (drag.origin_x + dx, drag.origin_y + dy);
        self.x.set(x);
        self.y.set(y);
    }

    /// Pointer released. A committed drag snaps to the nearest edge and returns
    /// the resting `(x, y)`; an uncommitted one changes nothing.
    pub fn drag_end(&mut self, now: Duration) -> Option<(f64, f64)> {
        let drag = self.drag.take()?;
        if !drag.committed {
            return None;
        }

        let release_x = self.x.value_at(now);
        let release_y = self.y.value_at(now);
        let target_x = self.layout.snap_x(release_x);
        let target_y = self.layout.clamp_y(release_y);

        self.x
            .animate_to(target_x, now, self.animation, Easing::Spring);
        self.y
            .animate_to(target_y, now, self.animation, Easing::EaseOutCubic);

        tracing::debug!(release_x, release_y, target_x, target_y, "widget snapped");
        Some((target_x, target_y))
    }

    /// The host cancelled the gesture; settle a committed drag back inside bounds.
    pub fn drag_cancel(&mut self, now: Duration) {
        if self.drag.take().is_some_and(|d| d.committed) {
            let x = self.layout.snap_x(self.x.value_at(now));
            let y = self.layout.clamp_y(self.y.value_at(now));
            self.x.animate_to(x, now, self.animation, Easing::Spring);
            self.y.animate_to(y, now, self.animation, Easing::EaseOutCubic);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn config() -> WidgetConfig {
        WidgetConfig {
            screen_width: 400.0,
            screen_height: 800.0,
            widget_width: 160.0,
            widget_height: 80.0,
            edge_margin: 16.0,
            top_bound: 100.0,
            bottom_margin: 100.0,
            drag_threshold: 8.0,
            animation_ms: 300,
            ..WidgetConfig::default()
        }
    }

    /// Drag from the resting position to absolute `(x, y)` through `path`.
    fn drag_to(w: &mut FloatingWidget, now: Duration, path: &[(f64, f64)], end: (f64, f64)) {
        w.drag_start(now);
        let origin = w.position(now);
        for &(x, y) in path.iter().chain(std::iter::once(&end)) {
            w.drag_move(x - origin.x, y - origin.y);
        }
    }

    #[test]
    fn starts_expanded_countdown_at_right_edge() {
        let w = FloatingWidget::new(&config());
        assert_eq!(w.size(), WidgetSize::Expanded);
        assert_eq!(w.mode(), WidgetMode::Countdown);
        let p = w.position(ms(0));
        assert_eq!((p.x, p.y, p.scale, p.opacity), (224.0, 100.0, 1.0, 1.0));
    }

    #[test]
    fn tap_toggles_size_without_moving() {
        let mut w = FloatingWidget::new(&config());
        let before = w.position(ms(0));

        assert!(w.tap(ms(0)));
        assert_eq!(w.size(), WidgetSize::Minimized);
        assert_eq!(w.mode(), WidgetMode::Countdown);
        assert!(w.is_animating(ms(100)));

        let after = w.position(ms(1000));
        assert_eq!((after.x, after.y), (before.x, before.y));
        assert_eq!(after.scale, config().minimized_scale);
        assert_eq!(after.opacity, config().minimized_opacity);

        w.tap(ms(1000));
        assert_eq!(w.size(), WidgetSize::Expanded);
        assert_eq!(w.position(ms(2000)).scale, 1.0);
    }

    #[test]
    fn long_press_toggles_mode_only() {
        let mut w = FloatingWidget::new(&config());
        assert!(w.long_press());
        assert_eq!(w.mode(), WidgetMode::Quote);
        assert_eq!(w.size(), WidgetSize::Expanded);
        w.long_press();
        assert_eq!(w.mode(), WidgetMode::Countdown);
    }

    #[test]
    fn drag_tracks_pointer_one_to_one() {
        let mut w = FloatingWidget::new(&config());
        w.drag_start(ms(0));
        w.drag_move(-50.0, 30.0);
        assert!(w.is_dragging());
        let p = w.position(ms(0));
        assert_eq!((p.x, p.y), (174.0, 130.0));
        assert!(!w.is_animating(ms(0)));
    }

    #[test]
    fn movement_below_threshold_is_not_a_drag() {
        let mut w = FloatingWidget::new(&config());
        w.drag_start(ms(0));
        w.drag_move(3.0, 4.0);
        assert!(!w.is_dragging());
        assert_eq!(w.position(ms(0)).x, 224.0);
        assert_eq!(w.drag_end(ms(0)), None);
        assert!(w.tap(ms(0)));
    }

    #[test]
    fn tap_is_ignored_during_committed_drag() {
        let mut w = FloatingWidget::new(&config());
        w.drag_start(ms(0));
        w.drag_move(-100.0, 0.0);
        assert!(!w.tap(ms(0)));
        assert!(!w.long_press());
        assert_eq!(w.size(), WidgetSize::Expanded);
        assert_eq!(w.mode(), WidgetMode::Countdown);
    }

    #[test]
    fn release_left_of_midpoint_snaps_left_regardless_of_path() {
        let paths: [&[(f64, f64)]; 3] = [
            &[],
            &[(390.0, 700.0), (300.0, 120.0)],
            &[(5.0, 5.0), (399.0, 400.0), (250.0, 300.0)],
        ];
        for path in paths {
            let mut w = FloatingWidget::new(&config());
            drag_to(&mut w, ms(0), path, (10.0, 300.0));
            assert_eq!(w.drag_end(ms(0)), Some((16.0, 300.0)));
            let p = w.position(ms(1000));
            assert_eq!((p.x, p.y), (16.0, 300.0));
        }
    }

    #[test]
    fn release_right_of_midpoint_snaps_right() {
        let mut w = FloatingWidget::new(&config());
        drag_to(&mut w, ms(0), &[(20.0, 200.0)], (400.0 - 10.0, 300.0));
        assert_eq!(w.drag_end(ms(0)), Some((224.0, 300.0)));
    }

    #[test]
    fn release_y_is_clamped_and_eased() {
        let mut w = FloatingWidget::new(&config());
        drag_to(&mut w, ms(0), &[], (50.0, 790.0));
        let (_, y) = w.drag_end(ms(0)).unwrap();
        assert_eq!(y, 620.0);

        // Not a teleport: mid-animation it is between release and target.
        let mid = w.position(ms(100)).y;
        assert!(mid < 790.0 && mid > 620.0, "mid = {mid}");
        assert_eq!(w.position(ms(300)).y, 620.0);
    }

    #[test]
    fn second_drag_supersedes_snap_animation() {
        let mut w = FloatingWidget::new(&config());
        drag_to(&mut w, ms(0), &[], (10.0, 300.0));
        w.drag_end(ms(0));

        // Grab it again mid-snap and throw it right.
        let now = ms(100);
        let grabbed_at = w.position(now);
        w.drag_start(now);
        w.drag_move(300.0, 0.0);
        assert_eq!(w.position(now).x, grabbed_at.x + 300.0);
        assert_eq!(w.drag_end(now), Some((224.0, 300.0)));
        assert_eq!(w.resting_position().x, 224.0);
        assert_eq!(w.position(ms(1000)).x, 224.0);
    }

    #[test]
    fn size_and_position_animate_concurrently() {
        let mut w = FloatingWidget::new(&config());
        drag_to(&mut w, ms(0), &[], (150.0, 300.0));
        w.drag_end(ms(0));
        assert!(w.tap(ms(50)));

        let p = w.position(ms(150));
        assert!(p.x > 16.0 && p.x < 150.0);
        assert!(p.scale < 1.0 && p.scale > config().minimized_scale);

        let rest = w.position(ms(1000));
        assert_eq!((rest.x, rest.scale), (16.0, config().minimized_scale));
    }

    #[test]
    fn cancelled_drag_still_settles_inside_bounds() {
        let mut w = FloatingWidget::new(&config());
        drag_to(&mut w, ms(0), &[], (10.0, 5.0));
        w.drag_cancel(ms(0));
        assert!(!w.is_dragging());
        let p = w.position(ms(1000));
        assert_eq!((p.x, p.y), (16.0, 100.0));
    }
}
