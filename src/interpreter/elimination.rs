/// The pivoting primitive shared by every algorithm.
///
/// Runs pivoted forward elimination on a private work buffer, optionally
/// normalizing pivots and clearing above them, and records pivot columns,
/// the pivot product, the number of row swaps and every row operation.
pub mod core;
/// Echelon forms, determinant and inverse.
pub mod forms;
/// Rank, nullity and bases for column, row and span spaces.
pub mod basis;
/// Yes/no questions about systems and sets of vectors.
pub mod predicates;

pub use basis::{column_space, nullity, rank, row_space, span};
pub use forms::{determinant, ef, inverse, rref};
pub use predicates::{dimension, is_basis, is_consistent, is_independent, spans};
