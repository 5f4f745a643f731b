//! Evaluation scenarios through the public API

use anyhow::Result;
use debruijn::{
	app, lam,
	samples::{constant, identity, omega, self_apply, zero},
	evaluate, normalize, simplify, EvalConfig, Evaluator, Expr, ReduceError, Runaway,
};

#[test]
fn identity_applied_to_itself() -> Result<()> {
	let expr = app!(identity(), identity());
	assert_eq!(evaluate(&expr)?, identity());
	Ok(())
}

#[test]
fn single_steps() -> Result<()> {
	assert_eq!(app!(lam!(1; 0), 5).step()?, Some(Expr::term(5)));
	// the removed binder shifts outer variables in by one
	assert_eq!(app!(lam!(1; 1), 9).step()?, Some(Expr::term(0)));
	Ok(())
}

#[test]
fn constant_discards_divergent_argument() -> Result<()> {
	let expr = app!(constant(), identity(), omega());
	assert_eq!(normalize(&expr)?, identity());
	Ok(())
}

#[test]
fn free_variable_survives_substitution_under_binder() -> Result<()> {
	let expr = app!(constant(), 0);
	let result = evaluate(&expr)?;
	assert_eq!(result, lam!(1; 1));
	assert_eq!(result.to_string(), "♥1");
	Ok(())
}

#[test]
fn stuck_head_still_simplifies_argument() -> Result<()> {
	let expr = app!(0, app!(identity(), 1));
	assert_eq!(expr.step()?, None);
	let result = evaluate(&expr)?;
	assert_eq!(result, app!(0, 1));
	assert_eq!(result.to_string(), "0.1");
	Ok(())
}

#[test]
fn duplicating_redex_left_by_simplify() {
	// ♥((♥(0.0)).(0.0)) would duplicate 0.0 if reduced
	let expr = lam!(1; self_apply(), app!(0, 0));
	assert_eq!(evaluate(&expr).unwrap(), expr);
	assert_eq!(expr.to_string(), "♥([♥(0.0)].[0.0])");
}

#[test]
fn duplicating_redex_reduced_by_stepping() -> Result<()> {
	// (♥(0.0)).(♥0) needs a duplicating step to reach ♥0
	let expr = app!(self_apply(), identity());
	assert_eq!(simplify(&expr)?, expr);
	assert_eq!(normalize(&expr)?, identity());
	Ok(())
}

#[test]
fn omega_cycles() {
	let err = evaluate(&omega()).unwrap_err();
	assert!(matches!(err, ReduceError::ResourceExceeded(Runaway::Cycle { .. })));
	assert_eq!(err.to_string(), "runaway computation: reduction revisited an earlier state after 1 steps");
}

#[test]
fn divergent_term_code() {
	let expr = app!(app!(-7, 0), identity());
	assert_eq!(expr.to_string(), "∞.0.(♥0)");
	let err = evaluate(&expr).unwrap_err();
	assert_eq!(err, ReduceError::DivergentTerm { code: -7 });
	assert_eq!(err.to_string(), "reached divergent term at head position, error code: -7");
}

#[test]
fn leaf_roots() -> Result<()> {
	assert_eq!(evaluate(&Expr::term(3))?, Expr::term(3));
	assert_eq!(evaluate(&Expr::term(-2)), Err(ReduceError::DivergentTerm { code: -2 }));
	Ok(())
}

#[test]
fn growth_hits_size_limit() {
	let grow = lam!(1; 0, 0, 0);
	let expr = app!(grow.clone(), grow);
	let evaluator = Evaluator::new(EvalConfig::with_threshold(128));
	assert_eq!(evaluator.config().max_size, 128);
	assert!(matches!(
		evaluator.evaluate(&expr),
		Err(ReduceError::ResourceExceeded(Runaway::SizeLimit { limit: 128, .. }))
	));
	// default limits are generous enough to run into the size cap first as well
	assert!(matches!(
		evaluate(&expr),
		Err(ReduceError::ResourceExceeded(Runaway::SizeLimit { limit: 1024, .. }))
	));
}

#[test]
fn abstraction_root_is_not_stepped() -> Result<()> {
	// simplify-only evaluation never runs the duplicating step
	let expr = lam!(1; self_apply(), identity());
	assert_eq!(evaluate(&expr)?, expr);
	assert_eq!(zero().size(), 4);
	assert_eq!(evaluate(&zero())?, zero());
	Ok(())
}

#[test]
fn known_normal_forms() -> Result<()> {
	let two = lam!(2; 1, app!(1, 0));
	let substitute = lam!(3; 2, 0, app!(1, 0));
	let cases = [
		(app!(constant(), identity(), omega()), identity()),
		(app!(self_apply(), identity()), identity()),
		(app!(identity(), identity(), identity(), 5), Expr::term(5)),
		(app!(substitute, constant(), constant(), 3), Expr::term(3)),
		(app!(two, identity()), identity()),
		(app!(constant(), 0), lam!(1; 1)),
	];
	for (expr, expected) in cases {
		assert_eq!(evaluate(&expr)?, expected, "evaluating {expr}");
	}
	Ok(())
}
