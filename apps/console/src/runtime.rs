//! Effect seams for wall-clock time and deferred work.
//!
//! Everything that waits or spawns goes through [`Scheduler`] so controller
//! tests can drive time by hand.

use std::time::Duration;

use futures::future::{FutureExt, LocalBoxFuture};
use time::{OffsetDateTime, UtcOffset};

pub trait Clock {
    /// Current time, expressed in the viewer's UTC offset.
    fn now(&self) -> OffsetDateTime;
}

pub trait Scheduler {
    /// Runs `task` to completion on the event loop. Tasks are never cancelled.
    fn spawn(&self, task: LocalBoxFuture<'static, ()>);

    fn sleep(&self, duration: Duration) -> LocalBoxFuture<'static, ()>;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserRuntime;

impl Clock for BrowserRuntime {
    fn now(&self) -> OffsetDateTime {
        OffsetDateTime::now_utc().to_offset(viewer_offset())
    }
}

impl Scheduler for BrowserRuntime {
    fn spawn(&self, task: LocalBoxFuture<'static, ()>) {
        #[cfg(target_arch = "wasm32")]
        wasm_bindgen_futures::spawn_local(task);

        #[cfg(not(target_arch = "wasm32"))]
        {
            drop(task);
            tracing::warn!("no browser event loop, background task dropped");
        }
    }

    fn sleep(&self, duration: Duration) -> LocalBoxFuture<'static, ()> {
        let millis = u32::try_from(duration.as_millis()).unwrap_or(u32::MAX);
        gloo_timers::future::TimeoutFuture::new(millis).boxed_local()
    }
}

#[cfg(target_arch = "wasm32")]
fn viewer_offset() -> UtcOffset {
    // getTimezoneOffset() is minutes behind UTC, so the sign flips.
    let minutes = js_sys::Date::new_0().get_timezone_offset();
    UtcOffset::from_whole_seconds((-minutes * 60.0) as i32).unwrap_or(UtcOffset::UTC)
}

#[cfg(not(target_arch = "wasm32"))]
fn viewer_offset() -> UtcOffset {
    UtcOffset::UTC
}
