use crate::{Error, IdGenerator, Result};
use std::time::{Duration, Instant};

/// The outcome of polling a [`PacedStream`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StreamPoll {
    /// An identifier was emitted; the stream's deadline moved forward.
    Ready {
        id: String,
    },
    /// The pacing interval has not elapsed yet. Poll again at or after
    /// `due`; nothing was emitted.
    Pending {
        due: Instant,
    },
}

/// Emits identifiers from a generator no faster than a fixed interval.
///
/// The stream is poll-driven: the caller chooses when to retry after a
/// [`StreamPoll::Pending`], so it composes with blocking drivers, async
/// runtimes, and plain loops alike. Deadlines come from the monotonic
/// clock and are never embedded in the IDs themselves.
///
/// The very first poll always fires immediately.
///
/// # Example
///
/// ```
/// use widgen::{PacedStream, StreamPoll, WidGenerator};
///
/// let generator = WidGenerator::new();
/// let mut stream = PacedStream::new(generator, 2, 0).unwrap();
///
/// assert!(matches!(stream.poll(), Ok(StreamPoll::Ready { .. })));
/// assert!(matches!(stream.poll(), Ok(StreamPoll::Ready { .. })));
/// assert!(stream.done());
/// ```
pub struct PacedStream<G> {
    generator: G,
    /// -1 encodes an unbounded stream.
    remaining: i64,
    interval: Duration,
    next_due: Option<Instant>,
}

impl<G: IdGenerator> PacedStream<G> {
    /// Creates a paced stream emitting `count` identifiers at least
    /// `interval_ms` apart. `count = 0` means unbounded.
    ///
    /// Fails with [`Error::InvalidParameter`] when `count` or `interval_ms`
    /// is negative.
    pub fn new(generator: G, count: i64, interval_ms: i64) -> Result<Self> {
        if count < 0 {
            return Err(Error::InvalidParameter("count must be non-negative"));
        }
        if interval_ms < 0 {
            return Err(Error::InvalidParameter("interval must be non-negative"));
        }
        Ok(Self {
            generator,
            remaining: if count == 0 { -1 } else { count },
            interval: Duration::from_millis(interval_ms as u64),
            next_due: None,
        })
    }

    /// True once the configured count has been emitted. Unbounded streams
    /// are never done.
    pub fn done(&self) -> bool {
        self.remaining == 0
    }

    /// Number of identifiers still owed, or `None` when unbounded.
    pub fn remaining(&self) -> Option<u64> {
        (self.remaining >= 0).then_some(self.remaining as u64)
    }

    /// Attempts to emit the next identifier.
    ///
    /// Fails with [`Error::Exhausted`] once the stream is [`done`]; returns
    /// [`StreamPoll::Pending`] without emitting when polled before the
    /// interval has elapsed.
    ///
    /// [`done`]: PacedStream::done
    pub fn poll(&mut self) -> Result<StreamPoll> {
        if self.done() {
            return Err(Error::Exhausted);
        }

        let now = Instant::now();
        if let Some(due) = self.next_due {
            if now < due {
                return Ok(StreamPoll::Pending { due });
            }
        }

        let id = self.generator.next_id();
        if self.remaining > 0 {
            self.remaining -= 1;
        }
        self.next_due = Some(now + self.interval);
        Ok(StreamPoll::Ready { id })
    }

    /// Consumes the stream, returning the generator and its clock state.
    pub fn into_inner(self) -> G {
        self.generator
    }
}
