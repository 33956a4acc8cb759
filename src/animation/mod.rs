pub(crate) mod keyframes;
pub(crate) mod rate;
pub(crate) mod schedule;
