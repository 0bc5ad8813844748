//! Interval refresh for dashboard pages.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

fn period_ms(interval_secs: u32) -> u32 {
    interval_secs.max(1).saturating_mul(1000)
}

/// Call `tick` every `interval_secs` while the owning component is mounted.
///
/// The first tick happens one full period after mount; pages load their
/// initial data themselves.
pub fn use_interval_refresh(interval_secs: u32, tick: impl Fn() + 'static) {
    let active = Arc::new(AtomicBool::new(true));
    let active_for_cleanup = Arc::clone(&active);
    on_cleanup(move || active_for_cleanup.store(false, Ordering::Relaxed));

    let period = period_ms(interval_secs);
    spawn_local(async move {
        loop {
            TimeoutFuture::new(period).await;
            if !active.load(Ordering::Relaxed) {
                log::debug!("Interval refresh stopped");
                break;
            }
            tick();
        }
    });
}
