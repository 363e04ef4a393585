//! Time-ordered WID and HLC-WID string identifiers.
//!
//! Two families of lexicographically sortable, human-readable IDs share one
//! textual grammar:
//!
//! ```text
//! WID:      YYYYMMDDTHHMMSS[mmm].<seqW>Z[-<padZ>]
//! HLC-WID:  YYYYMMDDTHHMMSS[mmm].<lcW>Z-<node>[-<padZ>]
//! ```
//!
//! A plain WID combines a UTC calendar timestamp with a per-tick sequence
//! counter and optional random lowercase-hex padding. The HLC variant
//! replaces the sequence with a hybrid logical clock counter and appends a
//! node name, so IDs minted by concurrent nodes stay distinguishable and
//! causally orderable.
//!
//! Generators never emit a non-increasing `(timestamp, counter)` prefix, even
//! when the wall clock stalls or jumps backward: a saturated counter borrows
//! the next tick instead of blocking.
//!
//! # Example
//!
//! ```
//! use widgen::{TimeUnit, WidGenerator, parse_wid, validate_wid};
//!
//! let mut generator = WidGenerator::new();
//! let id = generator.next_id();
//!
//! assert!(validate_wid(&id, 4, 6, TimeUnit::Sec));
//! let parsed = parse_wid(&id, 4, 6, TimeUnit::Sec).unwrap();
//! assert!(parsed.sequence >= 0);
//! ```

mod diag;
mod error;
#[cfg(feature = "futures")]
mod futures;
mod generator;
mod params;
mod parse;
mod rand;
mod stream;
mod time;
mod timestamp;
mod validate;

pub use crate::diag::*;
pub use crate::error::*;
#[cfg(feature = "futures")]
pub use crate::futures::*;
pub use crate::generator::*;
pub use crate::params::*;
pub use crate::parse::*;
pub use crate::rand::*;
pub use crate::stream::*;
pub use crate::time::*;
pub use crate::timestamp::*;
pub use crate::validate::*;
