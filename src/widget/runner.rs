//! Refresh runner for a mounted widget.
//!
//! Two producers feed one consumer:
//!
//! - the **poller** fetches stats and the daily quote on mount and then every
//!   poll interval, publishing the latest good values into a `watch` channel;
//! - the **ticker** fires every tick interval and, together with snapshot
//!   changes, drives the consumer that derives a [`WidgetFrame`] from the last
//!   snapshot and the current wall-clock time.
//!
//! The tick never calls the backend. A failed fetch keeps the previous value
//! in memory. Dropping or unmounting the [`WidgetHandle`] aborts both tasks.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use super::countdown::Countdown;
use crate::api::Backend;
use crate::config::WidgetConfig;
use crate::model::Quote;
use crate::mortality::MortalityStats;

/// Wall-clock source the countdown is derived from.
pub type WallClock = Arc<dyn Fn() -> DateTime<Utc> + Send + Sync>;

/// Last good backend values, as held by the poller.
#[derive(Debug, Clone, Default)]
pub struct WidgetData {
    pub stats: Option<MortalityStats>,
    pub quote: Option<Quote>,
    /// Successful stats fetches since mount.
    pub refreshes: u64,
}

/// What the widget renders on one tick.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WidgetFrame {
    pub countdown: Option<Countdown>,
    pub life_percentage: Option<f64>,
    pub quote: Option<Quote>,
}

impl WidgetFrame {
    pub fn derive(data: &WidgetData, now: DateTime<Utc>) -> Self {
        Self {
            countdown: data
                .stats
                .as_ref()
                .map(|stats| Countdown::until(stats.expected_death_date, now)),
            life_percentage: data.stats.as_ref().map(MortalityStats::display_percentage),
            quote: data.quote.clone(),
        }
    }
}

/// Running widget. Tasks stop when this is dropped.
pub struct WidgetHandle {
    frames: watch::Receiver<WidgetFrame>,
    data: watch::Receiver<WidgetData>,
    poller: Option<JoinHandle<()>>,
    ticker: Option<JoinHandle<()>>,
}

impl WidgetHandle {
    /// Subscribe to derived frames.
    pub fn frames(&self) -> watch::Receiver<WidgetFrame> {
        self.frames.clone()
    }

    /// The most recent frame.
    pub fn current(&self) -> WidgetFrame {
        self.frames.borrow().clone()
    }

    /// The most recent backend values.
    pub fn data(&self) -> WidgetData {
        self.data.borrow().clone()
    }

    /// Stop both tasks and wait until they are gone.
    pub async fn unmount(mut self) {
        for task in [self.poller.take(), self.ticker.take()].into_iter().flatten() {
            task.abort();
            let _ = task.await;
        }
        tracing::debug!("widget unmounted");
    }
}

impl Drop for WidgetHandle {
    fn drop(&mut self) {
        for task in [self.poller.take(), self.ticker.take()].into_iter().flatten() {
            task.abort();
        }
    }
}

/// Start the poller and ticker for `profile_id`. Must be called inside a
/// tokio runtime.
pub fn mount(backend: Arc<dyn Backend>, profile_id: String, config: &WidgetConfig) -> WidgetHandle {
    mount_with_clock(backend, profile_id, config, Arc::new(Utc::now))
}

/// [`mount`] with an explicit wall clock.
pub fn mount_with_clock(
    backend: Arc<dyn Backend>,
    profile_id: String,
    config: &WidgetConfig,
    clock: WallClock,
) -> WidgetHandle {
    let (data_tx, data_rx) = watch::channel(WidgetData::default());
    let (frame_tx, frame_rx) = watch::channel(WidgetFrame::default());

    let poll_interval = config.poll_interval();
    let tick_interval = config.tick_interval();

    tracing::info!(
        profile_id = %profile_id,
        poll_secs = poll_interval.as_secs(),
        tick_ms = tick_interval.as_millis() as u64,
        "mounting widget"
    );

    let poller = tokio::spawn(async move {
        let mut interval = tokio::time::interval(poll_interval);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            // First tick completes immediately: fetch on mount.
            interval.tick().await;
            poll_once(backend.as_ref(), &profile_id, &data_tx).await;
        }
    });

    let consumer_rx = data_rx.clone();
    let ticker = tokio::spawn(async move {
        let mut data_rx = consumer_rx;
        let mut interval = tokio::time::interval(tick_interval);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
        loop {
            tokio::select! {
                _ = interval.tick() => {}
                changed = data_rx.changed() => {
                    if changed.is_err() {
                        break;
                    }
                }
            }
            let frame = WidgetFrame::derive(&data_rx.borrow_and_update(), clock());
            frame_tx.send_replace(frame);
        }
    });

    WidgetHandle {
        frames: frame_rx,
        data: data_rx,
        poller: Some(poller),
        ticker: Some(ticker),
    }
}

/// One refresh. Failures keep the previous values and are logged at debug
/// level only.
async fn poll_once(backend: &dyn Backend, profile_id: &str, data_tx: &watch::Sender<WidgetData>) {
    let (stats, quote) = tokio::join!(backend.mortality_stats(profile_id), backend.daily_quote());

    match stats {
        Ok(stats) => data_tx.send_modify(|data| {
            data.stats = Some(stats);
            data.refreshes += 1;
        }),
        Err(e) => tracing::debug!(error = %e, "widget stats refresh failed, keeping last snapshot"),
    }

    match quote {
        Ok(quote) => data_tx.send_modify(|data| data.quote = Some(quote)),
        Err(e) => tracing::debug!(error = %e, "widget quote refresh failed, keeping last quote"),
    }
}
