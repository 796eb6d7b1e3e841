//! Named sample functions for Riemann and density scenes.
//!
//! Scenes mostly sample a handful of closed-form curves. `SampleFn` gives them a
//! value type that can be parsed from the command line, printed back, and passed to
//! [`crate::layout::calculate_riemann_boxes`] via [`SampleFn::eval`].
//!
//! Text format (`FromStr` / `Display`):
//! - `const:<c>`
//! - `x`
//! - `poly:<c0>,<c1>,...` (lowest degree first)
//! - `sin`, `cos`
//! - `gauss:<mean>,<std_dev>`

use std::{f64::consts::TAU, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SampleFn {
    Constant(f64),
    Identity,
    /// Coefficients, lowest degree first.
    Polynomial(Vec<f64>),
    Sin,
    Cos,
    /// Normal probability density.
    Gaussian { mean: f64, std_dev: f64 },
}

impl SampleFn {
    pub fn eval(&self, x: f64) -> f64 {
        match self {
            SampleFn::Constant(c) => *c,
            SampleFn::Identity => x,
            // Horner
            SampleFn::Polynomial(coeffs) => coeffs.iter().rev().fold(0.0, |acc, &c| acc * x + c),
            SampleFn::Sin => x.sin(),
            SampleFn::Cos => x.cos(),
            SampleFn::Gaussian { mean, std_dev } => {
                let z = (x - mean) / std_dev;
                (-0.5 * z * z).exp() / (std_dev * TAU.sqrt())
            }
        }
    }
}

/// Errors produced when parsing a [`SampleFn`] from text.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ParseSampleFnError {
    #[error("unknown sample function: {0:?}")]
    UnknownFunction(String),

    #[error("invalid number {value:?} in sample function {input:?}")]
    InvalidNumber { input: String, value: String },

    #[error("sample function {name:?} expects {expected} argument(s), got {got}")]
    ArgumentCount {
        name: &'static str,
        expected: usize,
        got: usize,
    },

    #[error("polynomial needs at least one coefficient")]
    EmptyPolynomial,

    #[error("gaussian std_dev must be positive, got {0}")]
    NonPositiveStdDev(f64),
}

fn parse_args(input: &str, args: &str) -> Result<Vec<f64>, ParseSampleFnError> {
    if args.trim().is_empty() {
        return Ok(Vec::new());
    }
    args.split(',')
        .map(|v| {
            v.trim()
                .parse::<f64>()
                .map_err(|_| ParseSampleFnError::InvalidNumber {
                    input: input.to_owned(),
                    value: v.trim().to_owned(),
                })
        })
        .collect()
}

fn expect_args(
    name: &'static str,
    args: Vec<f64>,
    expected: usize,
) -> Result<Vec<f64>, ParseSampleFnError> {
    if args.len() != expected {
        return Err(ParseSampleFnError::ArgumentCount {
            name,
            expected,
            got: args.len(),
        });
    }
    Ok(args)
}

impl FromStr for SampleFn {
    type Err = ParseSampleFnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        let (name, args) = match input.split_once(':') {
            Some((n, a)) => (n.trim(), Some(a)),
            None => (input, None),
        };

        match (name.to_ascii_lowercase().as_str(), args) {
            ("x", None) => Ok(SampleFn::Identity),
            ("sin", None) => Ok(SampleFn::Sin),
            ("cos", None) => Ok(SampleFn::Cos),
            ("const", Some(a)) => {
                let v = expect_args("const", parse_args(input, a)?, 1)?;
                Ok(SampleFn::Constant(v[0]))
            }
            ("poly", Some(a)) => {
                let coeffs = parse_args(input, a)?;
                if coeffs.is_empty() {
                    return Err(ParseSampleFnError::EmptyPolynomial);
                }
                Ok(SampleFn::Polynomial(coeffs))
            }
            ("gauss", Some(a)) => {
                let v = expect_args("gauss", parse_args(input, a)?, 2)?;
                if v[1] <= 0.0 || v[1].is_nan() {
                    return Err(ParseSampleFnError::NonPositiveStdDev(v[1]));
                }
                Ok(SampleFn::Gaussian {
                    mean: v[0],
                    std_dev: v[1],
                })
            }
            _ => Err(ParseSampleFnError::UnknownFunction(input.to_owned())),
        }
    }
}

impl fmt::Display for SampleFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SampleFn::Constant(c) => write!(f, "const:{c}"),
            SampleFn::Identity => f.write_str("x"),
            SampleFn::Polynomial(coeffs) => {
                f.write_str("poly:")?;
                for (i, c) in coeffs.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{c}")?;
                }
                Ok(())
            }
            SampleFn::Sin => f.write_str("sin"),
            SampleFn::Cos => f.write_str("cos"),
            SampleFn::Gaussian { mean, std_dev } => write!(f, "gauss:{mean},{std_dev}"),
        }
    }
}
