//! Statistical primitives for the probability engine.
//!
//! This module provides the numeric infrastructure the estimator and the
//! exact evaluator are built on:
//! - Standard normal CDF and quantile function
//! - Numerically stable binomial pmf/cdf tables

mod binomial;
mod normal;

pub use binomial::Binomial;
pub use normal::{normal_cdf, normal_quantile};
