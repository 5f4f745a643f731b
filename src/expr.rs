//! Types of Expressions

use std::{mem, rc::Rc};

mod display;
mod reduce;
mod subst;
pub use display::*;
pub use reduce::*;

/// A lambda expression using de Bruijn indices.
///
/// Expressions are immutable. Every transformation builds a new tree and shares
/// the unchanged subtrees through [`Rc`]. Equality and hashing are structural,
/// so two separately built trees with the same shape compare equal.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum Expr {
	/// A variable, counting enclosing binders from the innermost outward.
	/// A negative level is a sentinel that renders as `∞` and is fatal to reduce.
	Term { level: i64 },
	/// Create a function
	Abstraction { body: Rc<Expr> },
	/// Apply functions to expressions
	Application { func: Rc<Expr>, arg: Rc<Expr> },
}

impl Expr {
	pub fn term(level: i64) -> Rc<Expr> {
		Rc::new(Expr::Term { level })
	}
	pub fn abstraction(body: Rc<Expr>) -> Rc<Expr> {
		Rc::new(Expr::Abstraction { body })
	}
	pub fn application(func: Rc<Expr>, arg: Rc<Expr>) -> Rc<Expr> {
		Rc::new(Expr::Application { func, arg })
	}

	/// Number of nodes in this expression, leaves count as one.
	///
	/// Walks the tree with an explicit stack, so it is safe on any depth.
	pub fn size(&self) -> usize {
		let mut size = 0;
		let mut stack = vec![self];
		while let Some(expr) = stack.pop() {
			size += 1;
			match expr {
				Expr::Term { .. } => {}
				Expr::Abstraction { body } => stack.push(body.as_ref()),
				Expr::Application { func, arg } => {
					stack.push(func.as_ref());
					stack.push(arg.as_ref());
				}
			}
		}
		size
	}

	pub fn is_term(&self) -> bool {
		matches!(self, Expr::Term { .. })
	}
	pub fn is_abstraction(&self) -> bool {
		matches!(self, Expr::Abstraction { .. })
	}
	pub fn is_application(&self) -> bool {
		matches!(self, Expr::Application { .. })
	}

	/// Move out every child this node solely owns, leaving leaves in their place.
	fn take_owned_children(&mut self, stack: &mut Vec<Rc<Expr>>) {
		let mut take = |child: &mut Rc<Expr>| {
			if !child.is_term() && Rc::strong_count(child) == 1 {
				stack.push(mem::replace(child, Expr::term(0)));
			}
		};
		match self {
			Expr::Term { .. } => {}
			Expr::Abstraction { body } => take(body),
			Expr::Application { func, arg } => {
				take(func);
				take(arg);
			}
		}
	}
}

/// Dropping recursively would overflow the stack on deeply nested expressions,
/// so uniquely owned subtrees are unlinked onto a heap stack first.
impl Drop for Expr {
	fn drop(&mut self) {
		let mut stack = Vec::new();
		self.take_owned_children(&mut stack);
		while let Some(child) = stack.pop() {
			if let Ok(mut expr) = Rc::try_unwrap(child) {
				expr.take_owned_children(&mut stack);
			}
		}
	}
}
