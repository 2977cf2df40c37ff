//! Synthetic memory model for the pointer topic
//!
//! - [`stack`]: address assignment for extracted declarations
//!
//! # Slot Layout
//!
//! Nothing is executed, so addresses are invented. Every declaration gets a
//! uniform 8-byte slot, regardless of its declared size:
//! ```text
//! address[i]  =  STACK_BASE_ADDRESS + SLOT_SIZE * i
//! ```
//!
//! # Type Sizes
//!
//! The size shown next to a variable follows a deliberately small table:
//! - `int`: 4 bytes
//! - pointers: 8 bytes (regardless of pointee type)
//! - anything else: 8 bytes

pub mod stack;

/// Address of the first declared variable
pub const STACK_BASE_ADDRESS: u64 = 0x7fff_5fbf_f8c0;

/// Distance between consecutive stack slots
pub const SLOT_SIZE: u64 = 8;

/// Size in bytes reported for a declared variable
pub fn sizeof_declared(declared_type: &str, is_pointer: bool) -> usize {
    if !is_pointer && declared_type == "int" {
        4
    } else {
        8
    }
}

/// Render an address the way the visualizer shows it, e.g. `0x7fff5fbff8c0`
pub fn format_address(address: u64) -> String {
    format!("0x{:x}", address)
}
