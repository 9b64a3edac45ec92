use std::collections::HashMap;

use tracing::debug;

use crate::{
    ast::{Expr, Statement},
    error::RuntimeError,
    interpreter::value::{core::Value, matrix::Matrix},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the state of one session.
///
/// The environment is a flat map from variable names to values. There are
/// no nested scopes: a `Block` runs on the same map, and reassignment
/// overwrites. It is passed explicitly to every evaluation call and is the
/// only mutable state in the interpreter.
///
/// ## Usage
///
/// `Environment` is created once per session and reused for every statement.
/// Assignments that completed before a failure stay bound.
#[derive(Debug, Clone, Default)]
pub struct Environment {
    variables: HashMap<String, Value>,
}

impl Environment {
    /// Creates an empty session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up a variable.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.variables.get(name)
    }

    /// Binds `name` to `value`, replacing any earlier binding.
    pub fn set(&mut self, name: impl Into<String>, value: Value) {
        self.variables.insert(name.into(), value);
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Iterates over all bindings in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.variables.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// The evaluator dispatches on the expression variant: literals,
    /// variables, unary and binary operations, function calls and matrix
    /// literals. Operands and arguments are evaluated left to right and the
    /// first failure is returned.
    ///
    /// # Errors
    /// - `UndefinedVariable` for an unbound name.
    /// - `TypeMismatch`, `DimensionMismatch`, `DivisionByZero`,
    ///   `SingularMatrix` or `ArityMismatch` from the operation that failed.
    ///
    /// # Example
    /// ```
    /// use ratmat::{
    ///     ast::{BinaryOperator, Expr},
    ///     interpreter::{evaluator::core::Environment, value::core::Value},
    /// };
    ///
    /// let env = Environment::new();
    /// let expr = Expr::BinaryOp { left:  Box::new(Expr::Literal { value: Value::from(1),
    ///                                                             line:  1, }),
    ///                             op:    BinaryOperator::Div,
    ///                             right: Box::new(Expr::Literal { value: Value::from(4),
    ///                                                             line:  1, }),
    ///                             line:  1, };
    ///
    /// assert_eq!(env.evaluate(&expr).unwrap().to_string(), "1/4");
    /// ```
    pub fn evaluate(&self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Literal { value, .. } => Ok(value.clone()),
            Expr::Variable { name, line } => self.eval_variable(name, *line),
            Expr::UnaryOp { op, expr, line } => {
                let value = self.evaluate(expr)?;
                Self::eval_unary(*op, &value, *line)
            },
            Expr::BinaryOp { left, op, right, line } => {
                let left = self.evaluate(left)?;
                let right = self.evaluate(right)?;
                Self::eval_binary(*op, &left, &right, *line)
            },
            Expr::FunctionCall { function,
                                 arguments,
                                 line, } => self.eval_function_call(*function, arguments, *line),
            Expr::MatrixLiteral { rows, line } => self.eval_matrix_literal(rows, *line),
        }
    }

    /// Executes a single statement.
    ///
    /// - `Assignment` evaluates its expression and binds the result; it
    ///   yields nothing.
    /// - `Evaluate` yields its value without binding it.
    /// - `Block` runs its statements in order and yields the result of the
    ///   last one that produced a value. The first failure aborts the rest of
    ///   the block; assignments made before it stay bound.
    ///
    /// # Errors
    /// The first error raised by any evaluated expression.
    pub fn execute(&mut self, statement: &Statement) -> EvalResult<Option<Value>> {
        match statement {
            Statement::Assignment { name, value, line } => {
                let value = self.evaluate(value)?;
                debug!(line, %name, kind = %value.kind(), "assign");
                self.set(name.clone(), value);
                Ok(None)
            },
            Statement::Evaluate { expr, .. } => self.evaluate(expr).map(Some),
            Statement::Block { statements, .. } => {
                let mut result = None;
                for statement in statements {
                    if let Some(value) = self.execute(statement)? {
                        result = Some(value);
                    }
                }
                Ok(result)
            },
        }
    }

    fn eval_variable(&self, name: &str, line: usize) -> EvalResult<Value> {
        self.get(name)
            .cloned()
            .ok_or_else(|| RuntimeError::UndefinedVariable { name: name.to_string(),
                                                             line })
    }

    /// Builds a matrix from entry expressions, row by row.
    ///
    /// Each entry must evaluate to a scalar. Row lengths are checked after
    /// all entries are evaluated.
    fn eval_matrix_literal(&self, rows: &[Vec<Expr>], line: usize) -> EvalResult<Value> {
        let mut entries = Vec::with_capacity(rows.len());
        for row in rows {
            let scalars = row.iter()
                             .map(|entry| {
                                 self.evaluate(entry)?
                                     .as_scalar("a matrix entry", entry.line_number())
                                     .cloned()
                             })
                             .collect::<EvalResult<Vec<_>>>()?;
            entries.push(scalars);
        }

        Matrix::from_rows(entries).map(Value::from)
                                  .map_err(|e| e.at(line))
    }
}
