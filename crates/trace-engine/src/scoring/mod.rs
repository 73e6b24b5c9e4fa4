pub mod evaluator;
pub mod feedback;
pub mod round;
pub mod session;
