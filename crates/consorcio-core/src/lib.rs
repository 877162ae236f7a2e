pub mod bid;
pub mod calculator;
pub mod contract;
pub mod error;
pub mod schedule;
pub mod types;

pub use bid::{BidInput, BidSimulation, BidStrategy};
pub use calculator::Calculator;
pub use contract::{ContractInput, ContractTerms};
pub use error::ConsorcioError;
pub use schedule::{InstallmentRow, Schedule};
pub use types::*;

/// Standard result type for all consórcio operations
pub type ConsorcioResult<T> = Result<T, ConsorcioError>;
