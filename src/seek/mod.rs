pub mod evaluator;

pub use evaluator::evaluate_seek;
