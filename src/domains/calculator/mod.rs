//! Calculator domain module.
//!
//! Four arithmetic endpoints and a health check over plain HTTP GET.
//!
//! ## Architecture
//!
//! - `operands.rs` - Query parsing and operand validation
//! - `operation.rs` - Operation identifiers and the dispatcher
//! - `error.rs` - Error taxonomy and its HTTP mapping
//! - `handlers.rs` - Request pipeline and fallback handlers
//! - `router.rs` - Route table and middleware stack

mod error;
mod handlers;
mod operands;
mod operation;
pub mod router;

pub use error::CalculatorError;
pub use handlers::{HEALTH_STATUS, evaluate};
pub use operands::{Operands, parse_operand};
pub use operation::{Calculation, Operation, dispatch};
pub use router::build_router;
