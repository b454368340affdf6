pub mod combinatorial;

pub use combinatorial::*;
