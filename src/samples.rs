//! Sample expressions, used as usage examples and fixtures
use std::rc::Rc;

use crate::{app, lam, Expr};

/// `♥0`
pub fn identity() -> Rc<Expr> {
	lam!(1; 0)
}

/// `♥♥1`, keeps its first argument and drops the second.
pub fn constant() -> Rc<Expr> {
	lam!(2; 1)
}

/// `♥(0.0)`
pub fn self_apply() -> Rc<Expr> {
	lam!(1; 0, 0)
}

/// `(♥[0.0]).(♥[0.0])`, steps to itself forever.
pub fn omega() -> Rc<Expr> {
	app!(self_apply(), self_apply())
}

pub fn x_combinator() -> Rc<Expr> {
	lam!(1; 0, lam!(3; 1, 0, app!(2, 0)), lam!(2; 1))
}

pub fn zero() -> Rc<Expr> {
	lam!(3; 0)
}

// TODO: check inc against zero once numerals have a decoding helper
pub fn inc() -> Rc<Expr> {
	lam!(1;
		lam!(4; 0, 4),
		lam!(2; 0),
		lam!(2; 1),
		lam!(4; 1, 3, 2),
		lam!(1; 0, lam!(2; 1, app!(3, 0, lam!(2; 6, 8, app!(6, 1, 0)), lam!(1; 0)), app!(4, 5, 0)), app!(2, 3, 4)),
	)
}
