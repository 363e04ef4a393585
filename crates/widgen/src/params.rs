use crate::{Error, Result};

/// Default sequence / logical-counter width.
pub const DEFAULT_W: usize = 4;

/// Default padding width for plain WIDs.
pub const DEFAULT_WID_Z: usize = 6;

/// Default padding width for HLC-WIDs.
pub const DEFAULT_HLC_Z: usize = 0;

/// Default HLC node name.
pub const DEFAULT_NODE: &str = "c";

/// Maximum counter width. `10^18 - 1` still fits in an `i64`; 19 digits
/// would overflow it.
pub const MAX_W: usize = 18;

/// Maximum padding width.
pub const MAX_Z: usize = 64;

pub(crate) fn widths_in_range(w: usize, z: usize) -> bool {
    (1..=MAX_W).contains(&w) && z <= MAX_Z
}

pub(crate) fn check_widths(w: usize, z: usize) -> Result<()> {
    if !(1..=MAX_W).contains(&w) {
        return Err(Error::InvalidParameter("W must be in [1, 18]"));
    }
    if z > MAX_Z {
        return Err(Error::InvalidParameter("Z must be in [0, 64]"));
    }
    Ok(())
}

/// Returns true if `node` is a valid HLC node name: one or more characters
/// from `[A-Za-z0-9_]`.
pub fn is_valid_node(node: &str) -> bool {
    !node.is_empty()
        && node
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'_')
}

/// `10^w`, valid for `w <= 18`.
pub(crate) fn pow10(w: usize) -> i64 {
    debug_assert!(w <= MAX_W);
    10_i64.pow(w as u32)
}
