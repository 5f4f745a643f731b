//! This file contains functions to evaluate or beta reduce expressions
use std::{collections::HashSet, rc::Rc};

use thiserror::Error;
use tracing::{debug, trace};

use crate::config::EvalConfig;

use super::Expr;

/// Ways full evaluation can run away instead of converging.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Runaway {
	#[error("expression grew to size {size}, limit is {limit}")]
	SizeLimit { size: usize, limit: usize },

	#[error("visited {states} states, limit is {limit}")]
	StateLimit { states: usize, limit: usize },

	#[error("reduction revisited an earlier state after {steps} steps")]
	Cycle { steps: usize },

	#[error("variable {level} cannot be shifted under another binder")]
	LevelLimit { level: i64 },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReduceError {
	#[error("reached divergent term at head position, error code: {code}")]
	DivergentTerm { code: i64 },

	#[error("runaway computation: {0}")]
	ResourceExceeded(#[from] Runaway),
}

impl Expr {
	/// Perform one leftmost-outermost (call-by-name) reduction step.
	///
	/// Returns `Ok(None)` when no step is available. Arguments are never reduced
	/// before they are substituted.
	pub fn step(self: &Rc<Self>) -> Result<Option<Rc<Expr>>, ReduceError> {
		Ok(match self.as_ref() {
			Expr::Term { level } if *level < 0 => Err(ReduceError::DivergentTerm { code: *level })?,
			Expr::Term { .. } | Expr::Abstraction { .. } => None,
			Expr::Application { func, arg } => match func.as_ref() {
				Expr::Abstraction { body } => Some(body.subst(arg, 0)?.0),
				_ => func.step()?.map(|func| Expr::application(func, arg.clone())),
			},
		})
	}

	/// Simplify every redex whose bound variable is used at most once.
	///
	/// Such a substitution can never grow the expression, so repeating `clean`
	/// always terminates. Returns `None` when nothing changed.
	pub fn clean(self: &Rc<Self>) -> Result<Option<Rc<Expr>>, ReduceError> {
		Ok(match self.as_ref() {
			Expr::Term { .. } => None,
			Expr::Abstraction { body } => body.clean()?.map(Expr::abstraction),
			Expr::Application { func, arg } => {
				if let Expr::Abstraction { body } = func.as_ref() {
					let (reduced, uses) = body.subst(arg, 0)?;
					if uses < 2 {
						return Ok(Some(reduced));
					}
				}
				match (func.clean()?, arg.clean()?) {
					(None, None) => None,
					(new_func, new_arg) => Some(Expr::application(
						new_func.unwrap_or_else(|| func.clone()),
						new_arg.unwrap_or_else(|| arg.clone()),
					)),
				}
			}
		})
	}
}

/// Drives reduction of whole expressions within the limits of an [`EvalConfig`].
#[derive(Clone, Debug, Default)]
pub struct Evaluator {
	config: EvalConfig,
}

impl Evaluator {
	pub fn new(config: EvalConfig) -> Self {
		Self { config }
	}
	pub fn config(&self) -> &EvalConfig {
		&self.config
	}

	/// Evaluate according to the root: abstractions are only simplified, anything
	/// else is stepped to a stable form first.
	pub fn evaluate(&self, expr: &Rc<Expr>) -> Result<Rc<Expr>, ReduceError> {
		match expr.as_ref() {
			Expr::Abstraction { .. } => self.simplify(expr),
			_ => self.normalize(expr),
		}
	}

	/// Step `expr` until no step applies, then simplify the result.
	///
	/// Fails if the input or a produced state reaches `max_size`, if `max_states`
	/// states have been visited, or if a state repeats.
	pub fn normalize(&self, expr: &Rc<Expr>) -> Result<Rc<Expr>, ReduceError> {
		let EvalConfig { max_size, max_states } = self.config;
		let size = self.check_size(expr)?;
		debug!(size, "normalizing {expr}");

		let mut seen = HashSet::new();
		let mut expr = expr.clone();
		loop {
			seen.insert(expr.clone());
			if seen.len() >= max_states {
				Err(Runaway::StateLimit { states: seen.len(), limit: max_states })?
			}
			let Some(next) = expr.step()? else {
				debug!(steps = seen.len() - 1, "no step available, simplifying");
				return self.simplify(&expr);
			};

			let size = next.size();
			trace!(step = seen.len(), size, "{next}");
			if size >= max_size {
				Err(Runaway::SizeLimit { size, limit: max_size })?
			}
			if seen.contains(&next) {
				Err(Runaway::Cycle { steps: seen.len() })?
			}
			expr = next;
		}
	}

	/// Apply [`Expr::clean`] until it reports no change.
	///
	/// Fails if the input reaches `max_size`. Cleaning never grows an expression,
	/// so every later pass stays within that bound.
	pub fn simplify(&self, expr: &Rc<Expr>) -> Result<Rc<Expr>, ReduceError> {
		self.check_size(expr)?;
		let mut expr = expr.clone();
		let mut passes = 0usize;
		while let Some(cleaned) = expr.clean()? {
			expr = cleaned;
			passes += 1;
		}
		debug!(passes, size = expr.size(), "simplified to {expr}");
		Ok(expr)
	}

	/// Operations recurse on the tree, so inputs are held to `max_size` before any
	/// of them run.
	fn check_size(&self, expr: &Expr) -> Result<usize, ReduceError> {
		let (size, limit) = (expr.size(), self.config.max_size);
		if size >= limit {
			Err(Runaway::SizeLimit { size, limit })?
		}
		Ok(size)
	}
}

/// [`Evaluator::evaluate`] with the default limits.
pub fn evaluate(expr: &Rc<Expr>) -> Result<Rc<Expr>, ReduceError> {
	Evaluator::default().evaluate(expr)
}
/// [`Evaluator::normalize`] with the default limits.
pub fn normalize(expr: &Rc<Expr>) -> Result<Rc<Expr>, ReduceError> {
	Evaluator::default().normalize(expr)
}
pub fn simplify(expr: &Rc<Expr>) -> Result<Rc<Expr>, ReduceError> {
	Evaluator::default().simplify(expr)
}
