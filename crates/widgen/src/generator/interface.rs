/// A minimal interface over both identifier generators.
///
/// Pacing, bulk emission, and diagnostics are written against this trait so
/// they can drive either variant without caring which one they hold.
pub trait IdGenerator {
    /// Emits the next identifier, advancing the generator's clock state.
    ///
    /// Never fails once the generator is constructed; under a stalled clock
    /// or counter overflow the generator borrows future ticks instead.
    fn next_id(&mut self) -> String;

    /// Emits `n` identifiers in order.
    fn next_ids(&mut self, n: usize) -> Vec<String> {
        (0..n).map(|_| self.next_id()).collect()
    }
}
