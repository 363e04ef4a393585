use super::SleepProvider;
use core::time::Duration;

/// A [`SleepProvider`] backed by `tokio::time::sleep`.
pub struct TokioSleep;

impl SleepProvider for TokioSleep {
    type Sleep = tokio::time::Sleep;

    fn sleep_for(dur: Duration) -> Self::Sleep {
        tokio::time::sleep(dur)
    }
}
