// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Numeric Scalars** - *Exact Integers and Decimal Floats*
//!
//! Scalar types underlying the array kernels:
//! - [`BigInteger`] - exact signed integer of unbounded size.
//! - [`BigFloat`] - decimal floating point with an exact mantissa, rounded per operation
//!   to the working precision of the array it belongs to.

pub mod float;
pub mod integer;

pub use float::BigFloat;
pub use integer::BigInteger;
