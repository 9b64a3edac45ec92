/// Exact rational scalars.
///
/// Defines the `Scalar` type: an arbitrary-precision rational kept in lowest
/// terms with a positive denominator.
pub mod scalar;
/// Dense rational matrices.
///
/// Defines the immutable `Matrix` type and its value-in/value-out
/// arithmetic: elementwise addition, scalar scaling, matrix products,
/// augmentation and row/column selection.
pub mod matrix;

pub mod core;
