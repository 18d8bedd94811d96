// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Error Types** - *Kernel Operation Error Handling*
//!
//! Error types for arbitrary-precision kernel operations with structured error reporting.
//!
//! Two shapes of failure exist and are kept apart:
//! - **Element-local** issues (malformed literals, float domain errors, narrowing overflow)
//!   are absorbed by the vector kernels, which write a missing or `NaN` slot and continue.
//!   The scalar APIs still report them through [`KernelError::Parse`] and
//!   [`KernelError::Overflow`] so that callers working with single values can react.
//! - **Vector-level** issues (incompatible lengths, exact division by zero, resource
//!   exhaustion, bad control parameters) abort the whole call and never yield a partial result.
//!
//! All errors include contextual message space for debugging.

use core::fmt;
use std::error::Error;

/// Error type for all kernel operations.
///
/// Each variant includes a contextual message string providing specific details
/// about the error condition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KernelError {
    /// Malformed numeric literal.
    Parse(String),

    /// Exact integer division, quotient or modulo by zero.
    DivideByZero(String),

    /// Input outside a function's domain where no numeric fallback exists.
    Domain(String),

    /// Operand lengths incompatible under the recycling rule.
    Recycling(String),

    /// Value does not fit the requested fixed-size native kind.
    Overflow(String),

    /// Result magnitude too large to represent.
    AllocationFailure(String),

    /// Invalid control arguments provided to a kernel function.
    InvalidArguments(String),
}

impl fmt::Display for KernelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KernelError::Parse(msg) => write!(f, "Parse error: {}", msg),
            KernelError::DivideByZero(msg) => write!(f, "Divide by Zero error: {}", msg),
            KernelError::Domain(msg) => write!(f, "Domain error: {}", msg),
            KernelError::Recycling(msg) => write!(f, "Recycling error: {}", msg),
            KernelError::Overflow(msg) => write!(f, "Overflow on conversion: {}", msg),
            KernelError::AllocationFailure(msg) => write!(f, "Allocation failure: {}", msg),
            KernelError::InvalidArguments(msg) => write!(f, "Invalid arguments: {}", msg),
        }
    }
}

impl Error for KernelError {}

/// Creates a formatted error message for operands that cannot be recycled against each other.
///
/// # Arguments
/// * `fname` - Function name where the mismatch occurred
/// * `lhs` - Length of the left-hand side array
/// * `rhs` - Length of the right-hand side array
pub fn log_length_mismatch(fname: &str, lhs: usize, rhs: usize) -> String {
    format!(
        "{} => Incompatible lengths: LHS {} RHS {} (longer must be a multiple of shorter)",
        fname, lhs, rhs
    )
}
