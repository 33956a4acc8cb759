pub(crate) mod accumulator;
pub(crate) mod profile;
pub(crate) mod quadrature;
