use std::fmt;

use tracing::debug;

use crate::{
    ast::{Expr, Function},
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{Environment, EvalResult},
            function::builtin,
        },
        value::core::Value,
    },
};

/// Type alias for builtin function handlers.
///
/// A builtin receives a slice of evaluated argument values and the line number.
/// The argument count has already been checked against its [`Arity`].
type BuiltinFn = fn(&[Value], usize) -> EvalResult<Value>;

/// Specifies the allowed number of arguments for a builtin.
///
/// - `Exact(n)` means the builtin must receive exactly `n` arguments.
/// - `AtLeast(n)` means the builtin accepts `n` or more arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Exact(usize),
    AtLeast(usize),
}

/// Defines builtin functions by generating a lookup table and a name list.
///
/// Each entry provides:
/// - the [`Function`] it implements,
/// - the names it may be called by, canonical name first,
/// - an arity specification,
/// - a function pointer implementing the builtin.
///
/// The macro produces:
/// - `BuiltinDef` (internal metadata),
/// - `BUILTIN_TABLE` (static table for lookup by name),
/// - `definition` (exhaustive lookup by function),
/// - `BUILTIN_FUNCTIONS` (public list of every builtin name).
macro_rules! builtin_functions {
    (
        $(
            $function:path => {
                names: [$($name:literal),+ $(,)?],
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        #[derive(Clone, Copy)]
        struct BuiltinDef {
            function: Function,
            names:    &'static [&'static str],
            arity:    Arity,
            func:     BuiltinFn,
        }
        static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { function: $function, names: &[$($name),+], arity: $arity, func: $func },
            )*
        ];
        fn definition(function: Function) -> BuiltinDef {
            match function {
                $(
                    $function => BuiltinDef { function: $function,
                                              names:    &[$($name),+],
                                              arity:    $arity,
                                              func:     $func },
                )*
            }
        }
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($($name,)+)*
        ];
    };
}

builtin_functions! {
    Function::Inverse       => { names: ["inverse", "inv"],     arity: Arity::Exact(1),   func: builtin::inverse },
    Function::Rref          => { names: ["rref"],               arity: Arity::Exact(1),   func: builtin::rref },
    Function::Ef            => { names: ["ef"],                 arity: Arity::Exact(1),   func: builtin::ef },
    Function::Span          => { names: ["span"],               arity: Arity::AtLeast(1), func: builtin::span },
    Function::Determinant   => { names: ["det", "determinant"], arity: Arity::Exact(1),   func: builtin::determinant },
    Function::Rank          => { names: ["rank"],               arity: Arity::Exact(1),   func: builtin::rank },
    Function::Nullity       => { names: ["nullity"],            arity: Arity::Exact(1),   func: builtin::nullity },
    Function::Col           => { names: ["col"],                arity: Arity::Exact(1),   func: builtin::col },
    Function::Row           => { names: ["row"],                arity: Arity::Exact(1),   func: builtin::row },
    Function::Transpose     => { names: ["transpose", "trans"], arity: Arity::Exact(1),   func: builtin::transpose },
    Function::Augment       => { names: ["augment"],            arity: Arity::AtLeast(2), func: builtin::augment },
    Function::Identity      => { names: ["identity", "eye"],    arity: Arity::Exact(1),   func: builtin::identity },
    Function::IsConsistent  => { names: ["is_consistent"],      arity: Arity::Exact(1),   func: builtin::is_consistent },
    Function::IsIndependent => { names: ["is_independent"],     arity: Arity::AtLeast(1), func: builtin::is_independent },
    Function::IsBasis       => { names: ["is_basis"],           arity: Arity::AtLeast(1), func: builtin::is_basis },
    Function::Spans         => { names: ["spans"],              arity: Arity::Exact(2),   func: builtin::spans },
    Function::Dim           => { names: ["dim", "dimension"],   arity: Arity::AtLeast(1), func: builtin::dim },
}

impl Arity {
    /// Tests whether the given argument count satisfies this arity constraint.
    ///
    /// Returns `true` if the count is permitted, `false` otherwise.
    const fn check(self, n: usize) -> bool {
        match self {
            Self::Exact(m) => n == m,
            Self::AtLeast(m) => n >= m,
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact(n) => write!(f, "{n}"),
            Self::AtLeast(n) => write!(f, "at least {n}"),
        }
    }
}

/// Resolves a name to the builtin it denotes, if any.
///
/// # Example
/// ```
/// use ratmat::{ast::Function, interpreter::evaluator::function::core::lookup_function};
///
/// assert_eq!(lookup_function("inv"), Some(Function::Inverse));
/// assert_eq!(lookup_function("det"), Some(Function::Determinant));
/// assert_eq!(lookup_function("A"), None);
/// ```
#[must_use]
pub fn lookup_function(name: &str) -> Option<Function> {
    BUILTIN_TABLE.iter()
                 .find(|def| def.names.contains(&name))
                 .map(|def| def.function)
}

/// The number of arguments `function` accepts.
#[must_use]
pub fn arity_of(function: Function) -> Arity {
    definition(function).arity
}

/// Checks if an identifier is reserved.
///
/// Every builtin function name is reserved and cannot be assigned to.
///
/// # Example
/// ```
/// use ratmat::interpreter::evaluator::function::core::is_reserved_identifier;
///
/// assert!(is_reserved_identifier("rref"));
/// assert!(!is_reserved_identifier("A"));
/// ```
#[must_use]
pub fn is_reserved_identifier(name: &str) -> bool {
    BUILTIN_FUNCTIONS.contains(&name)
}

impl Environment {
    /// Evaluates a function call.
    ///
    /// The argument count is checked before anything is evaluated. The
    /// arguments are then evaluated left to right and handed to the builtin,
    /// which checks their kinds.
    ///
    /// # Parameters
    /// - `function`: The builtin to call.
    /// - `arguments`: Unevaluated argument expressions.
    /// - `line`: Line number for error reporting.
    ///
    /// # Errors
    /// - `ArityMismatch` if the argument count is not accepted.
    /// - Any error from evaluating an argument or from the builtin itself.
    pub(crate) fn eval_function_call(&self,
                                     function: Function,
                                     arguments: &[Expr],
                                     line: usize)
                                     -> EvalResult<Value> {
        let def = definition(function);
        if !def.arity.check(arguments.len()) {
            return Err(RuntimeError::ArityMismatch { function: function.to_string(),
                                                     expected: def.arity.to_string(),
                                                     found: arguments.len(),
                                                     line });
        }

        let args = arguments.iter()
                            .map(|argument| self.evaluate(argument))
                            .collect::<EvalResult<Vec<_>>>()?;

        debug!(line, %function, args = args.len(), "call");
        (def.func)(&args, line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_name_resolves_to_its_own_entry() {
        for def in BUILTIN_TABLE {
            for name in def.names {
                assert_eq!(lookup_function(name), Some(def.function), "{name}");
            }
            assert_eq!(definition(def.function).names, def.names);
        }
    }

    #[test]
    fn canonical_name_is_listed_first() {
        for def in BUILTIN_TABLE {
            assert_eq!(def.names[0], def.function.to_string());
        }
    }

    #[test]
    fn arity_is_checked_before_arguments_are_evaluated() {
        let env = Environment::new();
        let undefined = Expr::Variable { name: "missing".to_string(),
                                         line: 2, };
        let result = env.eval_function_call(Function::Rref,
                                            &[undefined.clone(), undefined],
                                            2);

        assert_eq!(result,
                   Err(RuntimeError::ArityMismatch { function: "rref".to_string(),
                                                     expected: "1".to_string(),
                                                     found:    2,
                                                     line:     2, }));
    }

    #[test]
    fn variadic_arity() {
        assert!(arity_of(Function::Span).check(3));
        assert!(!arity_of(Function::Span).check(0));
        assert!(!arity_of(Function::Augment).check(1));
        assert_eq!(arity_of(Function::Augment).to_string(), "at least 2");
        assert!(!arity_of(Function::Spans).check(1));
        assert!(arity_of(Function::IsBasis).check(4));
    }
}
