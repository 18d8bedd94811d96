// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Arithmetic Kernels Module** - *Exact and Rounded Big-Number Arithmetic*
//!
//! Element-wise binary arithmetic for `BigIntegerArray` and `BigFloatArray` with recycling
//! and null-aware semantics.
//!
//! ## Modules
//! - **`dispatch`**: operator validation and the recycled element loop
//!
//! ## Operations
//! Integers: add, subtract, multiply, floored quotient and modulo (exact), plus powers
//! with native exponents. Floats: add, subtract, multiply, divide, floored modulo and
//! power, each rounded to the wider operand precision.
//!
//! ## Scope
//! **These do not leverage parallel-thread processing, as this is expected to be applied in the engine layer,
//! which is app-specific.**.

pub mod dispatch;

// Shared tests for both element kinds
