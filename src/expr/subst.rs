//! Capture-avoiding substitution and free variable shifting
use std::rc::Rc;

use super::{Expr, ReduceError, Runaway};

impl Expr {
	/// Replace the variable bound at `level` with `arg`, removing that binder.
	///
	/// Variables bound outside the removed binder are decremented. Returns the new
	/// expression together with how many non-leaf copies of `arg` it now contains,
	/// leaf replacements are free to duplicate and are not counted.
	pub fn subst(self: &Rc<Self>, arg: &Rc<Expr>, level: i64) -> Result<(Rc<Expr>, usize), ReduceError> {
		Ok(match self.as_ref() {
			Expr::Term { level: own } if *own == level => {
				(arg.clone(), if arg.is_term() { 0 } else { 1 })
			}
			Expr::Term { level: own } if *own < level => (self.clone(), 0),
			Expr::Term { level: own } => (Expr::term(own - 1), 0),
			Expr::Abstraction { body } => {
				// arg moves under one more binder
				let (body, uses) = body.subst(&arg.deepen(0)?, level + 1)?;
				(Expr::abstraction(body), uses)
			}
			Expr::Application { func, arg: sub } => {
				let (func, func_uses) = func.subst(arg, level)?;
				let (sub, sub_uses) = sub.subst(arg, level)?;
				(Expr::application(func, sub), func_uses + sub_uses)
			}
		})
	}

	/// Shift every variable at or above `level` out by one, as if a new binder were
	/// introduced around this expression.
	///
	/// Fails if a variable is already at `i64::MAX` and cannot be shifted.
	pub fn deepen(self: &Rc<Self>, level: i64) -> Result<Rc<Expr>, ReduceError> {
		Ok(match self.as_ref() {
			Expr::Term { level: own } if *own < level => self.clone(),
			Expr::Term { level: own } => {
				let shifted = own.checked_add(1).ok_or(Runaway::LevelLimit { level: *own })?;
				Expr::term(shifted)
			}
			Expr::Abstraction { body } => Expr::abstraction(body.deepen(level + 1)?),
			Expr::Application { func, arg } => Expr::application(func.deepen(level)?, arg.deepen(level)?),
		})
	}
}
