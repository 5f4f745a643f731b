//! Helpers for writing nested expression literals
//!
//! `lam!(2; 1, 0)` is `♥♥1.0` and `app!(0, 1, 2)` is `0.1.2`. Integer arguments
//! become [`Expr::Term`] leaves.
use std::rc::Rc;

use crate::Expr;

/// Anything that can stand in for an expression inside [`lam!`](crate::lam) or [`app!`](crate::app).
pub trait IntoExpr {
	fn into_expr(self) -> Rc<Expr>;
}

impl IntoExpr for Rc<Expr> {
	fn into_expr(self) -> Rc<Expr> {
		self
	}
}
impl IntoExpr for Expr {
	fn into_expr(self) -> Rc<Expr> {
		Rc::new(self)
	}
}
impl IntoExpr for i64 {
	fn into_expr(self) -> Rc<Expr> {
		Expr::term(self)
	}
}
impl IntoExpr for i32 {
	fn into_expr(self) -> Rc<Expr> {
		Expr::term(self.into())
	}
}

pub fn var(level: i64) -> Rc<Expr> {
	Expr::term(level)
}

/// Wrap `body` in `binders` abstractions.
pub fn lambda(binders: usize, body: Rc<Expr>) -> Rc<Expr> {
	(0..binders).fold(body, |body, _| Expr::abstraction(body))
}

/// Left-nested application of `head` to every item of `args` in turn.
pub fn apply(head: Rc<Expr>, args: impl IntoIterator<Item = Rc<Expr>>) -> Rc<Expr> {
	args.into_iter().fold(head, Expr::application)
}

#[macro_export]
macro_rules! app {
	($head:expr $(, $arg:expr)+ $(,)?) => {
		$crate::build::apply(
			$crate::build::IntoExpr::into_expr($head),
			[$($crate::build::IntoExpr::into_expr($arg)),+],
		)
	};
}

#[macro_export]
macro_rules! lam {
	($binders:expr; $head:expr $(, $arg:expr)+ $(,)?) => {
		$crate::build::lambda($binders, $crate::app!($head $(, $arg)+))
	};
	($binders:expr; $body:expr $(,)?) => {
		$crate::build::lambda($binders, $crate::build::IntoExpr::into_expr($body))
	};
}
