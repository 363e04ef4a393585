use super::SleepProvider;
use crate::{IdGenerator, PacedStream, StreamPoll};
use std::time::Instant;

/// Extension trait that drives a [`PacedStream`] from async contexts,
/// sleeping through pacing delays instead of spinning.
pub trait PacedStreamAsyncExt {
    /// Resolves to the next identifier once the stream is due, or `None`
    /// when the stream has emitted its configured count.
    fn next_id_async<S: SleepProvider>(&mut self) -> impl Future<Output = Option<String>>;

    /// Drains the stream into a vector.
    ///
    /// Unbounded streams (`count = 0`) never finish; only call this on
    /// finite streams.
    fn collect_ids<S: SleepProvider>(&mut self) -> impl Future<Output = Vec<String>>;
}

impl<G: IdGenerator> PacedStreamAsyncExt for PacedStream<G> {
    async fn next_id_async<S: SleepProvider>(&mut self) -> Option<String> {
        loop {
            match self.poll() {
                Ok(StreamPoll::Ready { id }) => return Some(id),
                Ok(StreamPoll::Pending { due }) => {
                    let now = Instant::now();
                    if due > now {
                        S::sleep_for(due - now).await;
                    }
                }
                Err(_) => return None,
            }
        }
    }

    async fn collect_ids<S: SleepProvider>(&mut self) -> Vec<String> {
        let mut ids = Vec::new();
        while let Some(id) = self.next_id_async::<S>().await {
            ids.push(id);
        }
        ids
    }
}
