pub mod error;

pub use error::{DockpulseError, Result};
