//! # Splitgate Core
//!
//! Core types and arithmetic for the Splitgate fee router:
//! - Ledger account addresses with hex encoding
//! - The four fee-allocation channels and their percentage weights
//! - Native/base-unit conversion and floor-on-multiply share math
//! - The distribution planner (breakdown + transfer instructions)
//! - Unsigned transaction structure and deterministic serialization
//!
//! This crate performs no I/O. Everything here is pure and deterministic,
//! so the split math can be tested without a ledger connection.

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod address;
pub mod channel;
pub mod distribution;
pub mod error;
pub mod serialization;
pub mod transaction;
pub mod units;

// Re-export commonly used types at crate root
pub use address::Address;
pub use channel::{AllocationSet, Channel, DestinationSet, DistributionBreakdown};
pub use distribution::plan_transfers;
pub use error::{AddressError, CoreError, DistributionError, SerializationError};
pub use transaction::{TransferInstruction, UnsignedTransaction};
pub use units::BASE_UNITS_PER_NATIVE;
