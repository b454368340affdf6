pub mod cs;
pub mod error;

pub use cs::combinatorial;
pub use cs::combinatorial::{
    distinct_elements, enumerate_combinations, enumerate_permutations, enumerate_subsets,
    factorial, gray_code_order, gray_code_order_having_ones, gray_code_values,
    number_of_combinations, number_of_permutations, number_of_subsets,
};
pub use error::{Error, Result};
