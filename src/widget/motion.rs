//! Per-axis animation and the snap-to-edge layout rules.
//!
//! Each animated dimension is an independent [`Axis`]. Retargeting an axis
//! replaces its in-flight tween, starting from the value it has at that
//! instant, so two animations never compete on the same axis. Time is a
//! [`Duration`] since the widget was mounted, which keeps everything here
//! deterministic.

use std::time::Duration;

use crate::config::WidgetConfig;

/// Progress curve for a tween, mapping `t ∈ [0, 1]` to `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    Linear,
    EaseOutCubic,
    /// Critically damped spring, normalized to land exactly at `t = 1`.
    Spring,
}

const SPRING_OMEGA: f64 = 8.0;

impl Easing {
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseOutCubic => 1.0 - (1.0 - t).powi(3),
            Self::Spring => spring(t) / spring(1.0),
        }
    }
}

fn spring(t: f64) -> f64 {
    let wt = SPRING_OMEGA * t;
    1.0 - (1.0 + wt) * (-wt).exp()
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Tween {
    from: f64,
    to: f64,
    start: Duration,
    duration: Duration,
    easing: Easing,
}

impl Tween {
    fn sample(&self, now: Duration) -> f64 {
        if self.duration.is_zero() || now >= self.start + self.duration {
            return self.to;
        }
        let elapsed = now.saturating_sub(self.start).as_secs_f64();
        let t = elapsed / self.duration.as_secs_f64();
        self.from + (self.to - self.from) * self.easing.apply(t)
    }
}

/// One animated scalar.
#[derive(Debug, Clone, PartialEq)]
pub struct Axis {
    value: f64,
    tween: Option<Tween>,
}

impl Axis {
    pub fn new(value: f64) -> Self {
        Self { value, tween: None }
    }

    /// Value at `now`, following the in-flight tween if any.
    pub fn value_at(&self, now: Duration) -> f64 {
        match &self.tween {
            Some(tween) => tween.sample(now),
            None => self.value,
        }
    }

    /// Where the axis will come to rest.
    pub fn target(&self) -> f64 {
        self.tween.map_or(self.value, |t| t.to)
    }

    pub fn is_animating(&self, now: Duration) -> bool {
        self.tween
            .is_some_and(|t| !t.duration.is_zero() && now < t.start + t.duration)
    }

    /// Jump to `value`, cancelling any tween. Used for direct pointer tracking.
    pub fn set(&mut self, value: f64) {
        self.value = value;
        self.tween = None;
    }

    /// Ease toward `target`, superseding the current tween.
    pub fn animate_to(&mut self, target: f64, now: Duration, duration: Duration, easing: Easing) {
        let from = self.value_at(now);
        self.value = target;
        self.tween = Some(Tween {
            from,
            to: target,
            start: now,
            duration,
            easing,
        });
    }
}

/// Screen and widget geometry used for snapping and clamping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    pub screen_width: f64,
    pub screen_height: f64,
    pub widget_width: f64,
    pub widget_height: f64,
    pub edge_margin: f64,
    pub top_bound: f64,
    pub bottom_margin: f64,
}

impl Layout {
    pub fn from_config(config: &WidgetConfig) -> Self {
        Self {
            screen_width: config.screen_width,
            screen_height: config.screen_height,
            widget_width: config.widget_width,
            widget_height: config.widget_height,
            edge_margin: config.edge_margin,
            top_bound: config.top_bound,
            bottom_margin: config.bottom_margin,
        }
    }

    pub fn left_x(&self) -> f64 {
        self.edge_margin
    }

    pub fn right_x(&self) -> f64 {
        (self.screen_width - self.widget_width - self.edge_margin).max(self.left_x())
    }

    pub fn bottom_bound(&self) -> f64 {
        (self.screen_height - self.widget_height - self.bottom_margin).max(self.top_bound)
    }

    /// Left margin when released left of mid-screen, right margin otherwise.
    pub fn snap_x(&self, release_x: f64) -> f64 {
        if release_x < self.screen_width / 2.0 {
            self.left_x()
        } else {
            self.right_x()
        }
    }

    /// Clamp into `[top_bound, bottom_bound]`; no vertical snapping.
    pub fn clamp_y(&self, release_y: f64) -> f64 {
        release_y.clamp(self.top_bound, self.bottom_bound())
    }
}
