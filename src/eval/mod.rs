pub(crate) mod curve;
pub(crate) mod evaluator;
