use crate::{
    ast::UnaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Environment, EvalResult},
        value::core::Value,
    },
};

impl Environment {
    /// Evaluates a unary operation on a value.
    ///
    /// `Negate` flips the sign of a scalar, or of every entry of a matrix.
    /// Booleans have no sign.
    ///
    /// # Example
    /// ```
    /// use ratmat::{
    ///     ast::UnaryOperator,
    ///     interpreter::{evaluator::core::Environment, value::core::Value},
    /// };
    ///
    /// let v = Environment::eval_unary(UnaryOperator::Negate, &Value::from(5), 1).unwrap();
    /// assert_eq!(v, Value::from(-5));
    /// ```
    pub fn eval_unary(op: UnaryOperator, value: &Value, line: usize) -> EvalResult<Value> {
        match (op, value) {
            (UnaryOperator::Negate, Value::Scalar(s)) => Ok(s.neg().into()),
            (UnaryOperator::Negate, Value::Matrix(m)) => Ok(m.negate().into()),
            (UnaryOperator::Negate, Value::Boolean(_)) => {
                Err(RuntimeError::TypeMismatch { details: format!("cannot apply '{op}' to a boolean"),
                                                 line })
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::value::{matrix::Matrix, scalar::Scalar};

    #[test]
    fn negation_does_not_overflow() {
        let min = Value::from(Scalar::from(i64::MIN));
        let negated = Environment::eval_unary(UnaryOperator::Negate, &min, 4).unwrap();
        assert_eq!(negated.to_string(), "9223372036854775808");
    }

    #[test]
    fn matrices_negate_entrywise() {
        let m = Value::from(Matrix::from_integers(&[[1, -2]]).unwrap());
        assert_eq!(Environment::eval_unary(UnaryOperator::Negate, &m, 1).unwrap(),
                   Value::from(Matrix::from_integers(&[[-1, 2]]).unwrap()));
    }

    #[test]
    fn booleans_cannot_be_negated() {
        assert!(matches!(Environment::eval_unary(UnaryOperator::Negate, &Value::from(true), 2),
                         Err(RuntimeError::TypeMismatch { line: 2, .. })));
    }
}
