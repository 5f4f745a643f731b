//! Call-by-name evaluation of lambda expressions written with de Bruijn indices.
//!
//! Build expressions with [`Expr`] constructors or the [`lam!`] and [`app!`] macros,
//! then reduce them with an [`Evaluator`].

pub mod build;
pub mod config;
pub mod expr;
pub mod samples;

pub use config::{EvalConfig, THRESHOLD};
pub use expr::*;
