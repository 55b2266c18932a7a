//! # Tick Loop
//!
//! Drives a shared session at a fixed interval until the tick limit is
//! reached or shutdown is signalled.

use crate::container::RuntimeConfig;
use crate::session::SharedSession;
use shared_types::Tick;
use std::time::Duration;
use tokio::sync::watch;
use tracing::{debug, info};

/// Why the loop stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StopReason {
    TickLimit,
    Shutdown,
}

/// Summary of a finished run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunSummary {
    pub ticks: u64,
    pub last_tick: Option<Tick>,
    pub reason: StopReason,
}

/// Tick loop over a shared session.
pub struct Runtime {
    session: SharedSession,
    tick_interval: Duration,
    max_ticks: Option<u64>,
    shutdown_tx: watch::Sender<bool>,
    shutdown_rx: watch::Receiver<bool>,
}

impl Runtime {
    pub fn new(session: SharedSession, config: &RuntimeConfig) -> Self {
        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        Self {
            session,
            tick_interval: Duration::from_millis(config.tick_interval_ms.max(1)),
            max_ticks: config.max_ticks,
            shutdown_tx,
            shutdown_rx,
        }
    }

    /// Run until the tick limit or shutdown.
    pub async fn run(&self) -> RunSummary {
        let mut ticker = tokio::time::interval(self.tick_interval);
        let mut shutdown = self.shutdown_rx.clone();
        let mut ticks = 0u64;
        let mut last_tick = None;

        info!(interval_ms = self.tick_interval.as_millis() as u64, max_ticks = ?self.max_ticks, "Tick loop started");

        let reason = loop {
            if *shutdown.borrow() {
                break StopReason::Shutdown;
            }
            if self.max_ticks.is_some_and(|max| ticks >= max) {
                break StopReason::TickLimit;
            }

            tokio::select! {
                _ = ticker.tick() => {
                    let report = self.session.lock().tick();
                    ticks += 1;
                    last_tick = Some(report.tick);
                    if report.tasks_run > 0 {
                        debug!(tick = %report.tick, tasks = report.tasks_run, "Deferred tasks executed");
                    }
                }
                changed = shutdown.changed() => {
                    if changed.is_err() || *shutdown.borrow() {
                        break StopReason::Shutdown;
                    }
                }
            }
        };

        info!(ticks, ?reason, "Tick loop stopped");
        RunSummary {
            ticks,
            last_tick,
            reason,
        }
    }

    /// Signal the loop to stop after the current tick.
    pub fn shutdown(&self) {
        let _ = self.shutdown_tx.send(true);
    }

    pub fn session(&self) -> &SharedSession {
        &self.session
    }
}
