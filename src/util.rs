/// Numeric conversion helpers.
///
/// Safe conversions between machine integers, decimal literals and exact
/// scalars. Every function is lossless or reports failure; nothing wraps or
/// rounds silently.
pub mod num;
