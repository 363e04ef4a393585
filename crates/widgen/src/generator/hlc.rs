use crate::params::{check_widths, is_valid_node, pow10, DEFAULT_HLC_Z, DEFAULT_NODE, DEFAULT_W};
use crate::rand::random_hex;
use crate::{
    format_tick, Error, IdGenerator, RandSource, Result, ThreadRandom, TimeSource, TimeUnit,
    WallClock,
};

/// Hybrid logical clock state: physical time and logical counter.
///
/// Ordered lexicographically, which is exactly the causal order the clock
/// guarantees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HlcState {
    pub pt: i64,
    pub lc: i64,
}

/// Multi-node HLC-WID generator.
///
/// The counter field carries a hybrid logical clock: physical time `pt`
/// advances with the wall clock, and the logical counter `lc` breaks ties
/// and captures causality across nodes. If event A happens-before event B
/// and B [observes] A, then A's `(pt, lc)` is lexicographically less than
/// B's — and so are the emitted strings, node names aside.
///
/// Because `lc` is rendered in exactly `W` decimal digits, an overflowing
/// counter cannot be encoded; the generator bumps `pt` by one tick and
/// resets `lc` instead, keeping the textual schema stable at the cost of a
/// small timestamp inflation under saturated local concurrency.
///
/// [observes]: HlcGenerator::observe
///
/// # Example
///
/// ```
/// use widgen::HlcGenerator;
///
/// let mut generator = HlcGenerator::new("node01").unwrap();
/// let id = generator.next_id();
/// assert!(id.contains("-node01"));
/// ```
pub struct HlcGenerator<C = WallClock, R = ThreadRandom>
where
    C: TimeSource,
    R: RandSource,
{
    w: usize,
    z: usize,
    unit: TimeUnit,
    node: String,
    max_lc: i64,
    pt: i64,
    lc: i64,
    clock: C,
    rng: R,
}

impl HlcGenerator {
    /// Creates a generator for `node` with default widths (W=4, Z=0, `sec`).
    pub fn new(node: &str) -> Result<Self> {
        Self::with_params(node, DEFAULT_W, DEFAULT_HLC_Z, TimeUnit::Sec)
    }

    /// Creates a generator with explicit widths over the system clock.
    ///
    /// Fails with [`Error::InvalidParameter`] when the widths are out of
    /// range or `node` does not match `[A-Za-z0-9_]+`.
    pub fn with_params(node: &str, w: usize, z: usize, unit: TimeUnit) -> Result<Self> {
        Self::from_parts(node, w, z, unit, WallClock, ThreadRandom)
    }
}

impl Default for HlcGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_NODE).expect("default node name is valid")
    }
}

impl<C, R> HlcGenerator<C, R>
where
    C: TimeSource,
    R: RandSource,
{
    /// Creates a generator with injected clock and random sources.
    pub fn from_parts(
        node: &str,
        w: usize,
        z: usize,
        unit: TimeUnit,
        clock: C,
        rng: R,
    ) -> Result<Self> {
        check_widths(w, z)?;
        if !is_valid_node(node) {
            return Err(Error::InvalidParameter("node must match [A-Za-z0-9_]+"));
        }
        Ok(Self {
            w,
            z,
            unit,
            node: node.to_string(),
            max_lc: pow10(w) - 1,
            pt: 0,
            lc: 0,
            clock,
            rng,
        })
    }

    fn rollover_if_needed(&mut self) {
        if self.lc > self.max_lc {
            self.pt += 1;
            self.lc = 0;
        }
    }

    /// Merges a remote HLC observation into local state.
    ///
    /// After a successful call, the local `(pt, lc)` is lexicographically
    /// greater than both its previous value and `(remote_pt, remote_lc)`.
    /// Negative remote values fail with [`Error::InvalidParameter`] and
    /// leave the state untouched.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub fn observe(&mut self, remote_pt: i64, remote_lc: i64) -> Result<()> {
        if remote_pt < 0 || remote_lc < 0 {
            return Err(Error::InvalidParameter(
                "remote clock values must be non-negative",
            ));
        }

        let now = self.clock.now_tick(self.unit);
        let new_pt = now.max(self.pt).max(remote_pt);

        if new_pt == self.pt && new_pt == remote_pt {
            self.lc = self.lc.max(remote_lc) + 1;
        } else if new_pt == self.pt {
            self.lc += 1;
        } else if new_pt == remote_pt {
            self.lc = remote_lc + 1;
        } else {
            // the wall clock alone moved us forward
            self.lc = 0;
        }

        self.pt = new_pt;
        self.rollover_if_needed();
        Ok(())
    }

    fn generate(&mut self) -> String {
        let now = self.clock.now_tick(self.unit);
        if now > self.pt {
            self.pt = now;
            self.lc = 0;
        } else {
            self.lc += 1;
        }
        self.rollover_if_needed();

        let mut id = format!(
            "{}.{:0width$}Z-{}",
            format_tick(self.pt, self.unit),
            self.lc,
            self.node,
            width = self.w
        );
        if self.z > 0 {
            id.push('-');
            id.push_str(&random_hex(&mut self.rng, self.z));
        }
        id
    }

    /// Emits the next HLC-WID.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub fn next_id(&mut self) -> String {
        self.generate()
    }

    /// Emits `n` HLC-WIDs in order.
    pub fn next_ids(&mut self, n: usize) -> Vec<String> {
        (0..n).map(|_| self.generate()).collect()
    }

    /// Current clock state, e.g. for persistence or gossip.
    pub fn state(&self) -> HlcState {
        HlcState {
            pt: self.pt,
            lc: self.lc,
        }
    }

    /// Restores `(pt, lc)` from persisted state. Rejects negative values.
    pub fn restore(&mut self, pt: i64, lc: i64) -> Result<()> {
        if pt < 0 || lc < 0 {
            return Err(Error::InvalidParameter(
                "clock state values must be non-negative",
            ));
        }
        self.pt = pt;
        self.lc = lc;
        Ok(())
    }

    pub fn node(&self) -> &str {
        &self.node
    }

    pub fn time_unit(&self) -> TimeUnit {
        self.unit
    }
}

impl<C, R> IdGenerator for HlcGenerator<C, R>
where
    C: TimeSource,
    R: RandSource,
{
    fn next_id(&mut self) -> String {
        self.generate()
    }
}
