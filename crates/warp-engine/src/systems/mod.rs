pub mod rng;
pub mod starfield;
