pub mod emi;
pub mod error;
pub mod format;
pub mod session;
pub mod types;

pub use error::EmiCalcError;
pub use types::*;

/// Standard result type for all emi-calc operations
pub type EmiCalcResult<T> = Result<T, EmiCalcError>;
