use crate::{
    ast::BinaryOperator,
    error::{MathResult, RuntimeError},
    interpreter::{evaluator::core::{Environment, EvalResult}, value::core::Value},
};

impl Environment {
    /// Evaluates a binary operation between two values.
    ///
    /// The operation is chosen from the operator and the kinds of both
    /// operands:
    /// - scalar with scalar: exact rational arithmetic;
    /// - matrix `+`/`-` matrix: elementwise, shapes must match;
    /// - matrix `*` matrix: matrix product;
    /// - scalar `*` matrix and matrix `*` scalar: scaling;
    /// - matrix `/` scalar: scaling by the reciprocal.
    ///
    /// Every other combination, including any boolean operand, is a
    /// `TypeMismatch`.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `line`: Line number for error reporting.
    ///
    /// # Example
    /// ```
    /// use ratmat::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Environment, value::core::Value},
    /// };
    ///
    /// let result = Environment::eval_binary(BinaryOperator::Div,
    ///                                        &Value::from(3),
    ///                                        &Value::from(6),
    ///                                        1).unwrap();
    /// assert_eq!(result.to_string(), "1/2");
    /// ```
    pub fn eval_binary(op: BinaryOperator,
                       left: &Value,
                       right: &Value,
                       line: usize)
                       -> EvalResult<Value> {
        use BinaryOperator::{Add, Div, Mul, Sub};
        use Value::{Boolean, Matrix, Scalar};

        let result: MathResult<Value> = match (op, left, right) {
            (Add, Scalar(a), Scalar(b)) => Ok(a.add(b).into()),
            (Sub, Scalar(a), Scalar(b)) => Ok(a.sub(b).into()),
            (Mul, Scalar(a), Scalar(b)) => Ok(a.mul(b).into()),
            (Div, Scalar(a), Scalar(b)) => a.div(b).map(Value::from),

            (Add, Matrix(a), Matrix(b)) => a.add(b).map(Value::from),
            (Sub, Matrix(a), Matrix(b)) => a.sub(b).map(Value::from),
            (Mul, Matrix(a), Matrix(b)) => a.mat_mul(b).map(Value::from),

            (Mul, Scalar(k), Matrix(m)) | (Mul, Matrix(m), Scalar(k)) => {
                Ok(m.scalar_mul(k).into())
            },
            (Div, Matrix(m), Scalar(k)) => m.scalar_div(k).map(Value::from),

            (Add | Sub, Scalar(_), Matrix(_))
            | (Add | Sub, Matrix(_), Scalar(_))
            | (Div, Scalar(_), Matrix(_))
            | (Div, Matrix(_), Matrix(_))
            | (_, Boolean(_), _)
            | (_, _, Boolean(_)) => {
                return Err(RuntimeError::TypeMismatch { details: format!("cannot apply '{op}' to a {} and a {}",
                                                                         left.kind(),
                                                                         right.kind()),
                                                        line });
            },
        };

        result.map_err(|e| e.at(line))
    }
}
