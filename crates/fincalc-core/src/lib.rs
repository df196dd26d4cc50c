pub mod annuity;
pub mod bounds;
pub mod error;
pub mod export;
pub mod loan;
pub mod memo;
pub mod simple_interest;
pub mod sip;
pub mod types;

pub use error::FinCalcError;
pub use types::*;

/// Standard result type for all fincalc operations
pub type FinCalcResult<T> = Result<T, FinCalcError>;
