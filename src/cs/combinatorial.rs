//! Combinatorial counting and enumeration.
//!
//! Counting functions are closed-form formulas. Enumeration functions
//! deduplicate their input and build results level by level, where level `k`
//! holds every valid tuple of length `k + 1`.

pub mod combinations;
pub mod counting;
pub mod distinct;
pub mod gray_code;
mod levels;
pub mod permutations;
pub mod subsets;


pub use combinations::enumerate_combinations;
pub use counting::{factorial, number_of_combinations, number_of_permutations, number_of_subsets};
pub use distinct::distinct_elements;
pub use gray_code::{gray_code_order, gray_code_order_having_ones, gray_code_values};
pub use permutations::enumerate_permutations;
pub use subsets::enumerate_subsets;
