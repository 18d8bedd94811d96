// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under the Mozilla Public License (MPL) 2.0.
// See LICENSE for details.

//! # **Bignum Kernels** - *Null-Aware Arbitrary-Precision Vector Kernels*
//!
//! Element-wise, cumulative and aggregate kernels over vectors of exact integers
//! (`BigInteger`) and decimal floats with a per-array precision (`BigFloat`).
//!
//! Two layers are exposed:
//! - `kernels` operate on typed arrays (`BigIntegerArray`, `BigFloatArray`) with
//!   Arrow-style validity bitmasks from `minarrow`.
//! - `api` is the host-facing surface. Every entry point takes and returns vectors of
//!   canonical strings, with `None` for a missing value, so values cross the boundary
//!   without loss.

pub mod operators;

pub mod kernels {
    pub mod aggregate;
    pub mod arithmetic;
    pub mod cast;
    pub mod comparison;
    pub mod format;
    pub mod parse;
    pub mod sequence;
    pub mod sort;
    pub mod unary;
    pub mod window;
    pub mod scientific {
        pub mod constants;
        pub mod elementary;
        pub mod gamma;
    }
}

pub mod traits {
    pub mod dense_iter;
}

pub mod api;

pub mod config;

pub mod errors;

pub mod numeric;

pub mod structs;

pub mod utils;
