pub mod calculations;
pub mod models;
pub mod session;

pub use calculations::{WealthAggregator, WealthSummary, ZAKAT_RATE, compute_payable};
pub use models::*;
pub use session::{SessionError, ZakatSession};
