mod paced;
mod sleep_provider;
#[cfg(feature = "async-tokio")]
mod tokio_sleep;

pub use paced::*;
pub use sleep_provider::*;
#[cfg(feature = "async-tokio")]
pub use tokio_sleep::*;
