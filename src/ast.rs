use std::fmt;

use crate::interpreter::value::core::Value;

/// An abstract syntax tree (AST) node representing an expression.
///
/// `Expr` covers every construct that produces a value: literals, variable
/// references, arithmetic, calls to the elimination functions and matrix
/// literals. Each variant records the source line it came from, which is
/// used only for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// A constant value, scalar or matrix.
    Literal {
        /// The constant value.
        value: Value,
        /// Line number in the source code.
        line:  usize,
    },
    /// Reference to a variable by name.
    Variable {
        /// Name of the variable.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// A unary operation (negation).
    UnaryOp {
        /// The unary operator to apply.
        op:   UnaryOperator,
        /// The operand expression.
        expr: Box<Self>,
        /// Line number in the source code.
        line: usize,
    },
    /// A binary arithmetic operation.
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// Call of a builtin function (e.g. `rref(A)`).
    FunctionCall {
        /// The function being called.
        function:  Function,
        /// Arguments to the function, evaluated left to right.
        arguments: Vec<Self>,
        /// Line number in the source code.
        line:      usize,
    },
    /// Matrix literal such as `[[1, 2], [3, 4]]`.
    ///
    /// Every entry must evaluate to a scalar and every row must have the
    /// same length.
    MatrixLiteral {
        /// Entry expressions, row by row.
        rows: Vec<Vec<Self>>,
        /// Line number in the source code.
        line: usize,
    },
}

impl Expr {
    /// Gets the line number from `self`.
    /// ## Example
    /// ```
    /// use ratmat::ast::Expr;
    ///
    /// let expr = Expr::Variable { name: "A".to_string(),
    ///                             line: 5, };
    ///
    /// assert_eq!(expr.line_number(), 5);
    /// ```
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Literal { line, .. }
            | Self::Variable { line, .. }
            | Self::UnaryOp { line, .. }
            | Self::BinaryOp { line, .. }
            | Self::FunctionCall { line, .. }
            | Self::MatrixLiteral { line, .. } => *line,
        }
    }
}

/// A statement: the unit of execution.
///
/// Statements run against the session environment. Only `Evaluate` (and a
/// `Block` ending in one) produces a result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// Binds a name to a value, overwriting any earlier binding.
    Assignment {
        /// Name being assigned.
        name:  String,
        /// Expression producing the value.
        value: Expr,
        /// Line number in the source code.
        line:  usize,
    },
    /// Evaluates an expression and surfaces its value without binding it.
    Evaluate {
        /// The expression to evaluate.
        expr: Expr,
        /// Line number in the source code.
        line: usize,
    },
    /// A sequence of statements run in order on the same environment.
    Block {
        /// Statements inside the block.
        statements: Vec<Self>,
        /// Line number in the source code.
        line:       usize,
    },
}

impl Statement {
    /// Gets the line number from `self`.
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Assignment { line, .. } | Self::Evaluate { line, .. } | Self::Block { line, .. } => {
                *line
            },
        }
    }
}

/// Binary arithmetic operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
}

/// Unary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOperator {
    /// `-`
    Negate,
}

/// The builtin functions callable from an expression.
///
/// Every function except `Identity` takes matrices; their names are
/// listed in the evaluator's builtin table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Function {
    /// Inverse of a square matrix.
    Inverse,
    /// Reduced row echelon form.
    Rref,
    /// Echelon form with unnormalized pivots.
    Ef,
    /// Basis of the span of one matrix's columns or several vectors.
    Span,
    /// Determinant of a square matrix.
    Determinant,
    /// Number of pivots.
    Rank,
    /// Number of free columns.
    Nullity,
    /// Column-space basis.
    Col,
    /// Row-space basis.
    Row,
    /// Rows become columns.
    Transpose,
    /// Side-by-side concatenation of two or more matrices.
    Augment,
    /// `n × n` identity matrix for a positive integer `n`.
    Identity,
    /// Whether an augmented matrix `[A | b]` describes a solvable system.
    IsConsistent,
    /// Whether the given vectors are linearly independent.
    IsIndependent,
    /// Whether the given vectors form a basis of the space they live in.
    IsBasis,
    /// Whether the columns of one matrix span every column of another.
    Spans,
    /// Dimension of the span of the given vectors.
    Dim,
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        };
        write!(f, "{s}")
    }
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Negate => write!(f, "-"),
        }
    }
}

/// Displays the canonical (first listed) name of the function.
impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Inverse => "inverse",
            Self::Rref => "rref",
            Self::Ef => "ef",
            Self::Span => "span",
            Self::Determinant => "det",
            Self::Rank => "rank",
            Self::Nullity => "nullity",
            Self::Col => "col",
            Self::Row => "row",
            Self::Transpose => "transpose",
            Self::Augment => "augment",
            Self::Identity => "identity",
            Self::IsConsistent => "is_consistent",
            Self::IsIndependent => "is_independent",
            Self::IsBasis => "is_basis",
            Self::Spans => "spans",
            Self::Dim => "dim",
        };
        write!(f, "{s}")
    }
}
