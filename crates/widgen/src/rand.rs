use crate::params::MAX_Z;
use rand::RngCore;

/// A trait for random sources that fill byte buffers.
///
/// This abstraction keeps the RNG out of the generator logic, so tests can
/// inject deterministic bytes and the library can be built in environments
/// without an OS random device.
///
/// # Example
///
/// ```
/// use widgen::RandSource;
///
/// struct FixedBytes;
/// impl RandSource for FixedBytes {
///     fn fill_bytes(&mut self, buf: &mut [u8]) {
///         buf.fill(0xab);
///     }
/// }
///
/// let mut rng = FixedBytes;
/// let mut buf = [0u8; 4];
/// rng.fill_bytes(&mut buf);
/// assert_eq!(buf, [0xab; 4]);
/// ```
pub trait RandSource {
    /// Fills `buf` with random bytes.
    fn fill_bytes(&mut self, buf: &mut [u8]);
}

/// A [`RandSource`] over the thread-local RNG (`rand::rng()`).
///
/// Padding is a collision-avoidance measure, not an authentication token;
/// any uniformly distributed source satisfies the trait.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl RandSource for ThreadRandom {
    fn fill_bytes(&mut self, buf: &mut [u8]) {
        rand::rng().fill_bytes(buf);
    }
}

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Renders `z` lowercase hex digits drawn from `rng`.
///
/// One digit per random byte; only the low nibble is used, which keeps the
/// digit distribution unbiased.
pub(crate) fn random_hex<R: RandSource>(rng: &mut R, z: usize) -> String {
    debug_assert!(z <= MAX_Z);
    let mut raw = [0u8; MAX_Z];
    let raw = &mut raw[..z];
    rng.fill_bytes(raw);
    raw.iter()
        .map(|b| HEX_DIGITS[(b & 0x0f) as usize] as char)
        .collect()
}
