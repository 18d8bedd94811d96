// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! Contains the operator enums used to route the vectorised kernels.

use core::fmt;
use core::str::FromStr;

use crate::errors::KernelError;

/// Arithmetic operators for binary numeric kernels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithmeticOperator {
    /// Addition (`lhs + rhs`)
    Add,
    /// Subtraction (`lhs - rhs`)
    Subtract,
    /// Multiplication (`lhs * rhs`)
    Multiply,
    /// Division (`lhs / rhs`)
    ///
    /// Float only. Division by zero yields signed infinity, `0/0` yields NaN.
    Divide,
    /// Floored modulus (`lhs %% rhs`); the result takes the sign of the divisor.
    ///
    /// For integers a zero divisor is a `DivideByZero` error. For floats it yields NaN.
    Modulo,
    /// Floored integer quotient (`lhs %/% rhs`). Integer only.
    Quotient,
    /// Exponentiation (`lhs ^ rhs`)
    Power,
}

impl ArithmeticOperator {
    /// Operator name used in log lines and error messages.
    pub fn name(self) -> &'static str {
        match self {
            ArithmeticOperator::Add => "add",
            ArithmeticOperator::Subtract => "subtract",
            ArithmeticOperator::Multiply => "multiply",
            ArithmeticOperator::Divide => "divide",
            ArithmeticOperator::Modulo => "modulo",
            ArithmeticOperator::Quotient => "quotient",
            ArithmeticOperator::Power => "pow",
        }
    }
}

/// Running reductions supported by the cumulative kernels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CumulativeOperator {
    Sum,
    Product,
    Max,
    Min,
}

/// Element-wise float functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryFunction {
    Abs,
    Sign,
    Sqrt,
    Ceiling,
    Floor,
    Trunc,
    Exp,
    Expm1,
    Log,
    Log10,
    Log2,
    Log1p,
    Cos,
    Cosh,
    Sin,
    Sinh,
    Tan,
    Tanh,
    Acos,
    Acosh,
    Asin,
    Asinh,
    Atan,
    Atanh,
    Gamma,
    Lgamma,
    Digamma,
    Trigamma,
}

/// Output notation for the formatters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Notation {
    /// Fixed-point, e.g. `1234.5`
    #[default]
    Dec,
    /// Scientific, e.g. `1.2345e+03`
    Sci,
}

impl FromStr for Notation {
    type Err = KernelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dec" => Ok(Notation::Dec),
            "sci" => Ok(Notation::Sci),
            other => Err(KernelError::InvalidArguments(format!(
                "unknown notation '{}', expected \"dec\" or \"sci\"",
                other
            ))),
        }
    }
}

impl fmt::Display for Notation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notation::Dec => f.write_str("dec"),
            Notation::Sci => f.write_str("sci"),
        }
    }
}
