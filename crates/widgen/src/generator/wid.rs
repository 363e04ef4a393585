use crate::params::{check_widths, pow10, DEFAULT_W, DEFAULT_WID_Z};
use crate::rand::random_hex;
use crate::{
    format_tick, IdGenerator, RandSource, Result, ThreadRandom, TimeSource, TimeUnit, WallClock,
};

/// Monotonic single-node WID generator over `(tick, sequence)`.
///
/// Each emit takes the later of the wall clock and the last emitted tick,
/// increments the sequence within a tick, and resets it when the tick
/// advances. When the sequence overflows its `W` decimal digits the
/// generator *borrows* the next tick (`tick + 1`, sequence 0) rather than
/// blocking or dropping, so the `(tick, sequence)` pair strictly increases
/// between emits even under bursty load or a backward-stepping clock. The
/// cost is a synthetic, slightly future timestamp during saturation.
///
/// The generator holds its state exclusively and provides no internal
/// locking; callers sharing one across tasks must serialize access.
///
/// # Example
///
/// ```
/// use widgen::WidGenerator;
///
/// let mut generator = WidGenerator::new();
/// let a = generator.next_id();
/// let b = generator.next_id();
/// assert!(a < b);
/// ```
pub struct WidGenerator<C = WallClock, R = ThreadRandom>
where
    C: TimeSource,
    R: RandSource,
{
    w: usize,
    z: usize,
    unit: TimeUnit,
    max_seq: i64,
    last_tick: i64,
    last_seq: i64,
    clock: C,
    rng: R,
}

impl WidGenerator {
    /// Creates a generator with default parameters (W=4, Z=6, `sec`).
    pub fn new() -> Self {
        Self::with_params(DEFAULT_W, DEFAULT_WID_Z, TimeUnit::Sec)
            .expect("default widths are in range")
    }

    /// Creates a generator with explicit widths over the system clock.
    ///
    /// Fails with [`Error::InvalidParameter`] when `w` is outside `[1, 18]`
    /// or `z` is outside `[0, 64]`.
    ///
    /// [`Error::InvalidParameter`]: crate::Error::InvalidParameter
    pub fn with_params(w: usize, z: usize, unit: TimeUnit) -> Result<Self> {
        Self::from_parts(w, z, unit, WallClock, ThreadRandom)
    }
}

impl Default for WidGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl<C, R> WidGenerator<C, R>
where
    C: TimeSource,
    R: RandSource,
{
    /// Creates a generator with injected clock and random sources.
    pub fn from_parts(w: usize, z: usize, unit: TimeUnit, clock: C, rng: R) -> Result<Self> {
        check_widths(w, z)?;
        Ok(Self {
            w,
            z,
            unit,
            max_seq: pow10(w) - 1,
            last_tick: 0,
            last_seq: -1,
            clock,
            rng,
        })
    }

    fn generate(&mut self) -> String {
        let now = self.clock.now_tick(self.unit);
        let mut tick = now.max(self.last_tick);
        let mut seq = if tick == self.last_tick {
            self.last_seq + 1
        } else {
            0
        };
        if seq > self.max_seq {
            // sequence exhausted within this tick: borrow the next one
            tick += 1;
            seq = 0;
        }

        self.last_tick = tick;
        self.last_seq = seq;

        let mut id = format!(
            "{}.{:0width$}Z",
            format_tick(tick, self.unit),
            seq,
            width = self.w
        );
        if self.z > 0 {
            id.push('-');
            id.push_str(&random_hex(&mut self.rng, self.z));
        }
        id
    }

    /// Emits the next WID.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub fn next_id(&mut self) -> String {
        self.generate()
    }

    /// Emits `n` WIDs in order.
    pub fn next_ids(&mut self, n: usize) -> Vec<String> {
        (0..n).map(|_| self.generate()).collect()
    }

    /// Current `(last_tick, last_seq)` state, e.g. for persistence.
    pub fn state(&self) -> (i64, i64) {
        (self.last_tick, self.last_seq)
    }

    /// Restores `(last_tick, last_seq)` from persisted state.
    pub fn restore(&mut self, last_tick: i64, last_seq: i64) {
        self.last_tick = last_tick;
        self.last_seq = last_seq;
    }

    pub fn time_unit(&self) -> TimeUnit {
        self.unit
    }
}

impl<C, R> IdGenerator for WidGenerator<C, R>
where
    C: TimeSource,
    R: RandSource,
{
    fn next_id(&mut self) -> String {
        self.generate()
    }
}
