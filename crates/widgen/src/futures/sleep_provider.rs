use core::time::Duration;

/// Abstracts how to sleep for a [`Duration`] in async contexts, so paced
/// emission stays generic over the runtime that drives it.
pub trait SleepProvider {
    /// `Send` so the future can be moved across task boundaries.
    type Sleep: Future<Output = ()> + Send;

    fn sleep_for(dur: Duration) -> Self::Sleep;
}
