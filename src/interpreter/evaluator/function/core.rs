use std::{
    collections::BTreeMap,
    f64::consts::{E, PI},
    sync::LazyLock,
};

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::EvalResult,
            function::{builtin, fact, fact::FACTORIAL, log, sqrt},
        },
        value::core::Value,
    },
};

/// Type alias for builtin function handlers.
///
/// A builtin receives its arguments bound to its parameter list, in parameter
/// order, with `None` for omitted optional parameters.
pub type BuiltinFn = fn(&[Option<Value>]) -> EvalResult<Value>;

/// Describes how a builtin accepts its arguments.
///
/// The first `required` parameters must be supplied, the rest are optional.
/// When `keywords` is `true` any parameter may also be passed as
/// `name=value`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Signature {
    /// Parameter names, in positional order.
    pub params:   &'static [&'static str],
    /// Number of leading parameters that must be supplied.
    pub required: usize,
    /// Whether parameters may be passed by keyword.
    pub keywords: bool,
}

/// A callable entry of the registry.
#[derive(Clone, Copy)]
pub struct Builtin {
    /// How arguments are bound.
    pub signature: Signature,
    /// The implementation.
    pub func:      BuiltinFn,
}

/// What a registry name is bound to.
#[derive(Clone)]
pub enum Capability {
    /// A name that evaluates to a value.
    Constant(Value),
    /// A name that may only be called.
    Function(Builtin),
}

/// Defines builtin functions by generating a lookup table and a name list.
///
/// Each entry provides:
/// - a name,
/// - the parameter names,
/// - the number of required parameters,
/// - whether keyword arguments are accepted,
/// - a function pointer implementing the builtin.
///
/// The macro produces:
/// - `BuiltinDef` (internal metadata),
/// - `BUILTIN_TABLE` (static table used to build the standard registry),
/// - `BUILTIN_FUNCTIONS` (public list of builtin names).
macro_rules! builtin_functions {
    (
        $(
            $name:expr => {
                params: $params:expr,
                required: $required:expr,
                keywords: $keywords:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        struct BuiltinDef {
            name:    &'static str,
            builtin: Builtin,
        }
        static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { name:    $name,
                             builtin: Builtin { signature: Signature { params:   $params,
                                                                       required: $required,
                                                                       keywords: $keywords, },
                                                func:      $func, }, },
            )*
        ];
        /// Names of every builtin function in the standard registry.
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "abs"     => { params: &["x"], required: 1, keywords: false, func: builtin::abs },
    "round"   => { params: &["number", "ndigits"], required: 1, keywords: true, func: builtin::round },
    "floor"   => { params: &["x"], required: 1, keywords: false, func: |args| builtin::unary_round("floor", args) },
    "ceil"    => { params: &["x"], required: 1, keywords: false, func: |args| builtin::unary_round("ceil", args) },
    "sqrt"    => { params: &["x"], required: 1, keywords: false, func: sqrt::sqrt },
    "sin"     => { params: &["x"], required: 1, keywords: false, func: builtin::sin },
    "cos"     => { params: &["x"], required: 1, keywords: false, func: builtin::cos },
    "tan"     => { params: &["x"], required: 1, keywords: false, func: builtin::tan },
    "log"     => { params: &["x", "b"], required: 1, keywords: true, func: log::log },
    "ln"      => { params: &["x", "base"], required: 1, keywords: false, func: log::ln },
    FACTORIAL => { params: &["n"], required: 1, keywords: true, func: fact::fact },
}

/// Names of the constants in the standard registry.
pub const BUILTIN_CONSTANTS: &[&str] = &["pi", "e"];

static STANDARD: LazyLock<Registry> = LazyLock::new(Registry::standard);

/// The set of names an expression may refer to.
///
/// A registry is immutable once it is shared. The standard one is built on
/// first use and lives for the rest of the process; tests and embedders can
/// assemble their own with [`Registry::new`] and the `with_*` methods.
///
/// # Example
/// ```
/// use sandcalc::interpreter::{
///     evaluator::function::core::{Capability, Registry},
///     value::core::Value,
/// };
///
/// let registry = Registry::new().with_constant("answer", 42);
///
/// assert!(matches!(registry.get("answer"), Some(Capability::Constant(Value::Integer(_)))));
/// assert!(registry.get("pi").is_none());
/// assert!(Registry::global().get("pi").is_some());
/// ```
#[derive(Clone, Default)]
pub struct Registry {
    entries: BTreeMap<String, Capability>,
}

impl Registry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the shared standard registry.
    pub fn global() -> &'static Self {
        &STANDARD
    }

    /// Builds the standard registry: `pi`, `e` and every builtin function.
    #[must_use]
    pub fn standard() -> Self {
        let registry = Self::new().with_constant("pi", PI).with_constant("e", E);

        BUILTIN_TABLE.iter()
                     .fold(registry, |registry, def| registry.with_function(def.name, def.builtin))
    }

    /// Binds `name` to a constant value.
    #[must_use]
    pub fn with_constant(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.entries.insert(name.into(), Capability::Constant(value.into()));
        self
    }

    /// Binds `name` to a builtin function.
    #[must_use]
    pub fn with_function(mut self, name: impl Into<String>, builtin: Builtin) -> Self {
        self.entries.insert(name.into(), Capability::Function(builtin));
        self
    }

    /// Looks up a name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Capability> {
        self.entries.get(name)
    }

    /// Returns the standard builtin bound to `name`, if there is one.
    #[must_use]
    pub fn builtin(name: &str) -> Option<Builtin> {
        BUILTIN_TABLE.iter().find(|def| def.name == name).map(|def| def.builtin)
    }

    /// Iterates over the bound names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl Signature {
    /// Describes the accepted argument counts, e.g. `"1"` or `"1 to 2"`.
    #[must_use]
    pub fn expected(&self) -> String {
        if self.required == self.params.len() {
            self.required.to_string()
        } else {
            format!("{} to {}", self.required, self.params.len())
        }
    }
}

impl Builtin {
    /// Binds the arguments of a call and executes the builtin.
    ///
    /// Positional arguments fill parameters from the left, then keyword
    /// arguments fill parameters by name.
    ///
    /// # Errors
    /// - `ArgumentCountMismatch` for too many positional arguments or a
    ///   missing required parameter.
    /// - `UnexpectedKeyword` for keywords the signature does not accept.
    /// - `DomainError` for a parameter given both positionally and by keyword.
    /// - Whatever the builtin itself returns.
    ///
    /// # Example
    /// ```
    /// use sandcalc::interpreter::{evaluator::function::core::Registry, value::core::Value};
    ///
    /// let log = Registry::builtin("log").unwrap();
    ///
    /// let r = log.call("log", vec![Value::from(1000)], vec![]).unwrap();
    /// assert!((r.as_real().unwrap() - 3.0).abs() < 1e-12);
    ///
    /// let r = log.call("log", vec![Value::from(8)], vec![("b", Value::from(2))]).unwrap();
    /// assert!((r.as_real().unwrap() - 3.0).abs() < 1e-12);
    ///
    /// assert!(log.call("log", vec![Value::from(8)], vec![("base", Value::from(2))]).is_err());
    /// ```
    pub fn call(&self,
                name: &str,
                positional: Vec<Value>,
                keywords: Vec<(&str, Value)>)
                -> EvalResult<Value> {
        let args = self.bind(name, positional, keywords)?;
        (self.func)(&args)
    }

    fn bind(&self,
            name: &str,
            positional: Vec<Value>,
            keywords: Vec<(&str, Value)>)
            -> EvalResult<Vec<Option<Value>>> {
        let signature = &self.signature;
        let found = positional.len() + keywords.len();
        let mismatch = || RuntimeError::ArgumentCountMismatch { name: name.to_string(),
                                                                expected: signature.expected(),
                                                                found };

        if positional.len() > signature.params.len() {
            return Err(mismatch());
        }

        let mut bound = vec![None; signature.params.len()];
        for (slot, value) in bound.iter_mut().zip(positional) {
            *slot = Some(value);
        }

        for (keyword, value) in keywords {
            let unexpected = || RuntimeError::UnexpectedKeyword { name:    name.to_string(),
                                                                  keyword: keyword.to_string(), };
            if !signature.keywords {
                return Err(unexpected());
            }
            let Some(index) = signature.params.iter().position(|param| *param == keyword) else {
                return Err(unexpected());
            };
            if bound[index].is_some() {
                return Err(RuntimeError::domain(format!("{name}() got multiple values for argument '{keyword}'")));
            }
            bound[index] = Some(value);
        }

        if bound[..signature.required].iter().any(Option::is_none) {
            return Err(mismatch());
        }

        Ok(bound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn round() -> Builtin {
        Registry::builtin("round").unwrap()
    }

    #[test]
    fn standard_registry_has_whitelist() {
        let names = Registry::global().names().collect::<Vec<_>>();

        for name in BUILTIN_FUNCTIONS.iter().chain(BUILTIN_CONSTANTS) {
            assert!(names.contains(name), "missing {name}");
        }
        assert_eq!(names.len(), BUILTIN_FUNCTIONS.len() + BUILTIN_CONSTANTS.len());
    }

    #[test]
    fn expected_counts() {
        assert_eq!(round().signature.expected(), "1 to 2");
        assert_eq!(Registry::builtin("abs").unwrap().signature.expected(), "1");
    }

    #[test]
    fn too_many_positional_arguments() {
        let err = round().call("round", vec![Value::from(1), Value::from(2), Value::from(3)], vec![]);
        assert!(matches!(err, Err(RuntimeError::ArgumentCountMismatch { found: 3, .. })));
    }

    #[test]
    fn missing_required_argument() {
        let err = round().call("round", vec![], vec![("ndigits", Value::from(2))]);
        assert!(matches!(err, Err(RuntimeError::ArgumentCountMismatch { found: 1, .. })));
    }

    #[test]
    fn keyword_rejected_without_keyword_support() {
        let sqrt = Registry::builtin("sqrt").unwrap();
        let err = sqrt.call("sqrt", vec![], vec![("x", Value::from(4))]);
        assert!(matches!(err, Err(RuntimeError::UnexpectedKeyword { .. })));
    }

    #[test]
    fn factorial_takes_its_argument_by_name() {
        let fact = Registry::builtin(FACTORIAL).unwrap();

        assert_eq!(fact.call(FACTORIAL, vec![], vec![("n", Value::from(5))]).unwrap(),
                   Value::from(120));
        assert!(matches!(fact.call(FACTORIAL, vec![], vec![("x", Value::from(5))]),
                         Err(RuntimeError::UnexpectedKeyword { .. })));
    }

    #[test]
    fn keyword_duplicating_positional() {
        let err = round().call("round", vec![Value::Real(1.5)], vec![("number", Value::from(2))]);
        assert!(matches!(err, Err(RuntimeError::DomainError { .. })));
    }
}
