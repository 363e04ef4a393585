use crate::timestamp::{digits_i64, parse_timestamp_bytes};
use crate::{validate_hlc, validate_wid, Error, Result, TimeUnit, Timestamp};

/// Structured view of a WID accepted by the validator.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParsedWid {
    pub raw: String,
    pub timestamp: Timestamp,
    pub sequence: i64,
    pub padding: Option<String>,
}

impl ParsedWid {
    pub fn has_padding(&self) -> bool {
        self.padding.is_some()
    }
}

/// Structured view of an HLC-WID accepted by the validator.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParsedHlcWid {
    pub raw: String,
    pub timestamp: Timestamp,
    pub logical_counter: i64,
    pub node: String,
    pub padding: Option<String>,
}

impl ParsedHlcWid {
    pub fn has_padding(&self) -> bool {
        self.padding.is_some()
    }
}

/// Parses a WID string into its components.
///
/// Succeeds iff [`validate_wid`] accepts the string under the same
/// parameters; the failure carries no detail and leaves no partial state.
///
/// # Example
///
/// ```
/// use widgen::{TimeUnit, parse_wid};
///
/// let p = parse_wid("20260212T091530.0042Z-a3f91c", 4, 6, TimeUnit::Sec).unwrap();
/// assert_eq!(p.sequence, 42);
/// assert_eq!(p.padding.as_deref(), Some("a3f91c"));
/// ```
pub fn parse_wid(s: &str, w: usize, z: usize, unit: TimeUnit) -> Result<ParsedWid> {
    if !validate_wid(s, w, z, unit) {
        return Err(Error::InvalidInput);
    }

    let b = s.as_bytes();
    let ts_len = unit.timestamp_len();
    let base_len = ts_len + 1 + w + 1;

    // Validation already accepted the string; these cannot fail.
    let timestamp = parse_timestamp_bytes(&b[..ts_len], unit).ok_or(Error::InvalidInput)?;
    let sequence = digits_i64(&b[ts_len + 1..ts_len + 1 + w]).ok_or(Error::InvalidInput)?;

    let padding = (b.len() > base_len).then(|| s[base_len + 1..].to_string());

    Ok(ParsedWid {
        raw: s.to_string(),
        timestamp,
        sequence,
        padding,
    })
}

/// Parses an HLC-WID string into its components.
///
/// Succeeds iff [`validate_hlc`] accepts the string under the same
/// parameters.
///
/// # Example
///
/// ```
/// use widgen::{TimeUnit, parse_hlc};
///
/// let p = parse_hlc("20260212T091530.0042Z-my_node", 4, 0, TimeUnit::Sec).unwrap();
/// assert_eq!(p.node, "my_node");
/// assert_eq!(p.logical_counter, 42);
/// assert!(p.padding.is_none());
/// ```
pub fn parse_hlc(s: &str, w: usize, z: usize, unit: TimeUnit) -> Result<ParsedHlcWid> {
    if !validate_hlc(s, w, z, unit) {
        return Err(Error::InvalidInput);
    }

    let b = s.as_bytes();
    let ts_len = unit.timestamp_len();
    let prefix_len = ts_len + 1 + w + 1;

    let timestamp = parse_timestamp_bytes(&b[..ts_len], unit).ok_or(Error::InvalidInput)?;
    let logical_counter = digits_i64(&b[ts_len + 1..ts_len + 1 + w]).ok_or(Error::InvalidInput)?;

    let rest = &s[prefix_len + 1..];
    let (node, padding) = match rest.find('-') {
        Some(i) => (rest[..i].to_string(), Some(rest[i + 1..].to_string())),
        None => (rest.to_string(), None),
    };

    Ok(ParsedHlcWid {
        raw: s.to_string(),
        timestamp,
        logical_counter,
        node,
        padding,
    })
}
