use crate::params::widths_in_range;
use crate::timestamp::parse_timestamp_bytes;
use crate::TimeUnit;

fn is_lower_hex(b: u8) -> bool {
    b.is_ascii_digit() || (b'a'..=b'f').contains(&b)
}

fn is_node_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// Checks a trailing padding segment: `-` followed by exactly `z` lowercase
/// hex digits, permitted only when `z > 0`. An empty suffix is accepted; the
/// padding segment is optional even at `z > 0`.
fn valid_suffix(suffix: &[u8], z: usize) -> bool {
    let Some((&dash, pad)) = suffix.split_first() else {
        return true;
    };
    if dash != b'-' || z == 0 {
        return false;
    }
    pad.len() == z && pad.iter().all(|&b| is_lower_hex(b))
}

/// Checks the shared `TS "." <counter:W> "Z"` prefix. Returns the prefix
/// length on success.
fn valid_prefix(b: &[u8], w: usize, unit: TimeUnit) -> Option<usize> {
    let ts_len = unit.timestamp_len();
    let prefix_len = ts_len + 1 + w + 1;
    if b.len() < prefix_len {
        return None;
    }
    parse_timestamp_bytes(&b[..ts_len], unit)?;
    if b[ts_len] != b'.' {
        return None;
    }
    if !b[ts_len + 1..ts_len + 1 + w].iter().all(|c| c.is_ascii_digit()) {
        return None;
    }
    if b[ts_len + 1 + w] != b'Z' {
        return None;
    }
    Some(prefix_len)
}

/// Returns true iff `s` is a well-formed WID for the given widths and unit.
///
/// Requires `w` in `[1, 18]` and `z` in `[0, 64]`; anything else is false,
/// never an error.
///
/// # Example
///
/// ```
/// use widgen::{TimeUnit, validate_wid};
///
/// assert!(validate_wid("20260212T091530.0042Z-a3f91c", 4, 6, TimeUnit::Sec));
/// assert!(!validate_wid("20260212T091530.0000Z-node01", 4, 0, TimeUnit::Sec));
/// ```
pub fn validate_wid(s: &str, w: usize, z: usize, unit: TimeUnit) -> bool {
    if !widths_in_range(w, z) {
        return false;
    }
    let b = s.as_bytes();
    let Some(prefix_len) = valid_prefix(b, w, unit) else {
        return false;
    };
    valid_suffix(&b[prefix_len..], z)
}

/// Returns true iff `s` is a well-formed HLC-WID for the given widths and
/// unit.
///
/// Unlike a plain WID, the node segment is mandatory: `-` followed by one or
/// more characters from `[A-Za-z0-9_]`. A second `-` introduces the optional
/// padding segment.
///
/// # Example
///
/// ```
/// use widgen::{TimeUnit, validate_hlc};
///
/// assert!(validate_hlc("20260212T091530.0042Z-my_node", 4, 0, TimeUnit::Sec));
/// assert!(!validate_hlc("20260212T091530.0000Z-node-01", 4, 0, TimeUnit::Sec));
/// ```
pub fn validate_hlc(s: &str, w: usize, z: usize, unit: TimeUnit) -> bool {
    if !widths_in_range(w, z) {
        return false;
    }
    let b = s.as_bytes();
    let Some(prefix_len) = valid_prefix(b, w, unit) else {
        return false;
    };
    if b.len() < prefix_len + 2 || b[prefix_len] != b'-' {
        return false;
    }

    let rest = &b[prefix_len + 1..];
    let node_len = rest
        .iter()
        .position(|&c| c == b'-')
        .unwrap_or(rest.len());
    if node_len == 0 || !rest[..node_len].iter().all(|&c| is_node_byte(c)) {
        return false;
    }
    valid_suffix(&rest[node_len..], z)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEC: TimeUnit = TimeUnit::Sec;
    const MS: TimeUnit = TimeUnit::Ms;

    #[test]
    fn accepts_valid_wids() {
        assert!(validate_wid("20260212T091530.0000Z", 4, 0, SEC));
        assert!(validate_wid("20260212T091530.0042Z-a3f91c", 4, 6, SEC));
        // padding is optional even when z > 0
        assert!(validate_wid("20260212T091530.0042Z", 4, 6, SEC));
        assert!(validate_wid("20260212T091530123.0042Z-a3f91c", 4, 6, MS));
        assert!(validate_wid("20260212T091530.0Z", 1, 0, SEC));
        assert!(validate_wid(
            "20260212T091530.000000000000000042Z",
            18,
            0,
            SEC
        ));
    }

    #[test]
    fn rejects_malformed_wids() {
        assert!(!validate_wid("", 4, 0, SEC));
        assert!(!validate_wid("garbage", 4, 6, SEC));
        assert!(!validate_wid("20260212T091530.0000", 4, 0, SEC));
        assert!(!validate_wid("20260212T091530,0000Z", 4, 0, SEC));
        assert!(!validate_wid("20260212T091530.000xZ", 4, 0, SEC));
        // wrong sequence width
        assert!(!validate_wid("20260212T091530.00042Z", 4, 0, SEC));
        // invalid calendar date
        assert!(!validate_wid("20261312T091530.0000Z", 4, 0, SEC));
        assert!(!validate_wid("20230229T091530.0000Z", 4, 0, SEC));
        // sec-width timestamp under ms unit and vice versa
        assert!(!validate_wid("20260212T091530.0000Z", 4, 0, MS));
        assert!(!validate_wid("20260212T091530123.0000Z", 4, 0, SEC));
    }

    #[test]
    fn rejects_bad_padding() {
        // suffix present while z = 0
        assert!(!validate_wid("20260212T091530.0000Z-node01", 4, 0, SEC));
        assert!(!validate_wid("20260212T091530.0000Z-a3f91c", 4, 0, SEC));
        // uppercase hex
        assert!(!validate_wid("20260212T091530.0000Z-A3F91C", 4, 6, SEC));
        // non-hex text is not absorbed by z > 0
        assert!(!validate_wid("20260212T091530.0000Z-node01", 4, 6, SEC));
        // wrong padding width
        assert!(!validate_wid("20260212T091530.0000Z-a3f9", 4, 6, SEC));
        // bare dash
        assert!(!validate_wid("20260212T091530.0000Z-", 4, 6, SEC));
    }

    #[test]
    fn rejects_out_of_range_widths() {
        assert!(!validate_wid("20260212T091530.0000Z", 0, 0, SEC));
        assert!(!validate_wid("20260212T091530.0000Z", 19, 0, SEC));
        assert!(!validate_wid("20260212T091530.0000Z", 4, 65, SEC));
        assert!(!validate_hlc("20260212T091530.0000Z-n", 0, 0, SEC));
        assert!(!validate_hlc("20260212T091530.0000Z-n", 4, 65, SEC));
    }

    #[test]
    fn accepts_valid_hlc_wids() {
        assert!(validate_hlc("20260212T091530.0042Z-my_node", 4, 0, SEC));
        assert!(validate_hlc("20260212T091530.0000Z-c", 4, 0, SEC));
        assert!(validate_hlc("20260212T091530.0042Z-node01-a3f91c", 4, 6, SEC));
        // padding optional at z > 0
        assert!(validate_hlc("20260212T091530.0042Z-node01", 4, 6, SEC));
        assert!(validate_hlc(
            "20260212T091530123.0042Z-node01-a3f91c",
            4,
            6,
            MS
        ));
    }

    #[test]
    fn rejects_malformed_hlc_wids() {
        // node segment is mandatory
        assert!(!validate_hlc("20260212T091530.0042Z", 4, 0, SEC));
        assert!(!validate_hlc("20260212T091530.0042Z-", 4, 0, SEC));
        // hyphen inside node splits it into node + (bad) padding
        assert!(!validate_hlc("20260212T091530.0000Z-node-01", 4, 0, SEC));
        // node with non-node characters
        assert!(!validate_hlc("20260212T091530.0000Z-node.01", 4, 0, SEC));
        // uppercase padding
        assert!(!validate_hlc("20260212T091530.0000Z-node01-ABCDEF", 4, 6, SEC));
        // padding present while z = 0
        assert!(!validate_hlc("20260212T091530.0000Z-node01-a3f91c", 4, 0, SEC));
    }

    #[test]
    fn non_ascii_input_is_rejected_not_panicked_on() {
        assert!(!validate_wid("2026\u{30c6}12T091530.0000Z", 4, 0, SEC));
        assert!(!validate_hlc("20260212T091530.0000Z-n\u{f6}de", 4, 0, SEC));
    }
}
