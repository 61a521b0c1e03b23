pub mod clock;
pub mod error;
pub mod types;

pub use clock::{Clock, ManualClock, SystemClock};
pub use error::{DevLogError, Result};
pub use types::{LogRow, Severity};
