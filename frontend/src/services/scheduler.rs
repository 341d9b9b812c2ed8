//! One-shot timer capability used by stores that need delayed transitions.

use gloo::timers::callback::Timeout;

/// Schedules callbacks on the UI event loop.
///
/// Implementations must never run a callback synchronously from inside
/// `schedule_once`; the callback always runs on a later turn of the loop.
pub trait Scheduler {
    type Handle;

    /// Run `callback` once after `delay_ms` unless the handle is cancelled first
    fn schedule_once(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Self::Handle;

    /// Cancel a scheduled callback. Cancelling one that already ran is a no-op.
    fn cancel(&self, handle: Self::Handle);
}

/// Browser timers (`setTimeout`/`clearTimeout`) through gloo
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GlooScheduler;

impl Scheduler for GlooScheduler {
    type Handle = Timeout;

    fn schedule_once(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Timeout {
        Timeout::new(delay_ms, callback)
    }

    fn cancel(&self, handle: Timeout) {
        let _ = handle.cancel();
    }
}
