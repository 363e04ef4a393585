mod hlc;
mod interface;
mod wid;

pub use hlc::*;
pub use interface::*;
pub use wid::*;
