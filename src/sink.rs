//! Retry notifications.
//!
//! A generator reports every collision-triggered re-draw to its sink. The
//! notice is diagnostic only and has no effect on generation.

/// Receives one call per collision-triggered re-draw.
pub trait RetrySink {
    /// `remaining` is the active retry budget before it is decremented, or
    /// `None` when retries are unlimited.
    fn retrying(&mut self, remaining: Option<u32>);
}

/// Discards every notice. The default sink.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl RetrySink for NoopSink {
    #[inline]
    fn retrying(&mut self, _remaining: Option<u32>) {}
}

/// Forwards notices to the `log` facade at debug level.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl RetrySink for LogSink {
    fn retrying(&mut self, remaining: Option<u32>) {
        match remaining {
            Some(retry) => log::debug!(target: "randomness", "retrying... retry={}", retry),
            None => log::debug!(target: "randomness", "retrying... retry=unlimited"),
        }
    }
}

impl<F: FnMut(Option<u32>)> RetrySink for F {
    fn retrying(&mut self, remaining: Option<u32>) {
        self(remaining)
    }
}
