use std::fmt;

use super::Expr;

/// Renders an [`Expr`] with the fewest brackets that keep it unambiguous.
///
/// Bracket shape alternates between `(` and `[` with each nested bracketed group.
pub struct ExprDisplay<'a> {
	expr: &'a Expr,
	square: bool,
	bracketed: bool,
}

impl<'a> ExprDisplay<'a> {
	fn child(&self, expr: &'a Expr, bracketed: bool) -> Self {
		Self { expr, square: self.square, bracketed }
	}
}

impl<'a> fmt::Display for ExprDisplay<'a> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if self.bracketed {
			let (open, close) = if self.square { ('[', ']') } else { ('(', ')') };
			let inner = ExprDisplay { expr: self.expr, square: !self.square, bracketed: false };
			return write!(f, "{open}{inner}{close}");
		}
		match self.expr {
			Expr::Term { level } if *level < 0 => write!(f, "∞"),
			Expr::Term { level } => write!(f, "{level}"),
			Expr::Abstraction { body } => write!(f, "♥{}", self.child(body, body.is_application())),
			Expr::Application { func, arg } => write!(
				f,
				"{}.{}",
				self.child(func, func.is_abstraction()),
				self.child(arg, !arg.is_term())
			),
		}
	}
}

impl Expr {
	pub fn display(&self) -> ExprDisplay<'_> {
		ExprDisplay { expr: self, square: false, bracketed: false }
	}
}

impl fmt::Display for Expr {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		fmt::Display::fmt(&self.display(), f)
	}
}
