use std::{cell::RefCell, collections::HashMap, rc::Rc};

use crate::{
    ast::{LiteralValue, Stmt},
    interpreter::{environment::Environment, evaluator::builtins::NativeDef},
    util::num::f64_to_i64_exact,
};

/// Represents a runtime value in the interpreter.
///
/// This enum models all the types a Borno program can produce. Numbers
/// arising from literals are floats; integers only arise from bitwise
/// operators and certain built-ins. Strings, numbers, booleans and `nil`
/// have value semantics; arrays and objects are reference-shared, so
/// mutations through one binding are visible through every other binding of
/// the same value.
#[derive(Debug, Clone)]
pub enum Value {
    /// The absent value, `nil`.
    Nil,
    /// A boolean value (`সত্য` or `মিথ্যা`).
    Bool(bool),
    /// A 64-bit signed integer, produced by bitwise operators.
    Integer(i64),
    /// A 64-bit floating-point number, produced by literals and arithmetic.
    Real(f64),
    /// A Unicode string.
    Str(Rc<str>),
    /// An ordered, mutable, reference-shared sequence of values.
    Array(Rc<RefCell<Vec<Self>>>),
    /// A mutable, reference-shared mapping from property name to value.
    Object(Rc<RefCell<HashMap<String, Self>>>),
    /// A user-defined function together with its captured environment.
    Function(Rc<Function>),
    /// A built-in function from the fixed global table.
    Native(&'static NativeDef),
}

/// A user-defined function: a callable together with a shared reference to
/// the environment that was active at its declaration site.
pub struct Function {
    /// The declared name, also bound inside each call frame for recursion.
    pub name:    String,
    /// Parameter names in declaration order.
    pub params:  Vec<String>,
    /// The body statements.
    pub body:    Vec<Stmt>,
    /// The environment captured at the declaration site.
    pub closure: Rc<RefCell<Environment>>,
}

impl std::fmt::Debug for Function {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Function")
         .field("name", &self.name)
         .field("params", &self.params)
         .field("body", &"...")
         .finish()
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Real(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(Rc::from(v))
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Str(Rc::from(v.as_str()))
    }
}

impl From<Vec<Self>> for Value {
    fn from(v: Vec<Self>) -> Self {
        Self::Array(Rc::new(RefCell::new(v)))
    }
}

impl From<&LiteralValue> for Value {
    fn from(lit: &LiteralValue) -> Self {
        match lit {
            LiteralValue::Number(n) => (*n).into(),
            LiteralValue::Str(s) => s.as_str().into(),
            LiteralValue::Bool(b) => (*b).into(),
            LiteralValue::Nil => Self::Nil,
        }
    }
}

impl Value {
    /// Computes the truthiness of the value.
    ///
    /// `nil` and `মিথ্যা` are falsy. Numbers are truthy iff non-zero.
    /// Strings are truthy iff non-empty. Arrays, objects and callables are
    /// always truthy.
    ///
    /// # Example
    /// ```
    /// use borno::interpreter::value::Value;
    ///
    /// assert!(!Value::Nil.is_truthy());
    /// assert!(!Value::Real(0.0).is_truthy());
    /// assert!(!Value::Str("".into()).is_truthy());
    /// assert!(Value::Integer(-1).is_truthy());
    /// assert!(Value::Str("বড়".into()).is_truthy());
    /// ```
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Nil => false,
            Self::Bool(b) => *b,
            Self::Integer(n) => *n != 0,
            Self::Real(r) => *r != 0.0,
            Self::Str(s) => !s.is_empty(),
            Self::Array(_) | Self::Object(_) | Self::Function(_) | Self::Native(_) => true,
        }
    }

    /// Converts the value to `f64` if it is numeric.
    ///
    /// # Returns
    /// - `Some(f64)`: For integers and floats.
    /// - `None`: For every other kind.
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Integer(n) => Some(*n as f64),
            Self::Real(r) => Some(*r),
            _ => None,
        }
    }

    /// Converts the value to an exact `i64`.
    ///
    /// Integers pass through; a float succeeds when its value equals an
    /// integer. This is the coercion bitwise operators and array indices
    /// use.
    ///
    /// # Returns
    /// - `Some(i64)`: For integers and zero-fraction floats in range.
    /// - `None`: For fractional floats and non-numbers.
    ///
    /// # Example
    /// ```
    /// use borno::interpreter::value::Value;
    ///
    /// assert_eq!(Value::Real(4.0).as_exact_integer(), Some(4));
    /// assert_eq!(Value::Integer(7).as_exact_integer(), Some(7));
    /// assert_eq!(Value::Real(4.5).as_exact_integer(), None);
    /// assert_eq!(Value::Bool(true).as_exact_integer(), None);
    /// ```
    #[must_use]
    pub fn as_exact_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(n) => Some(*n),
            Self::Real(r) => f64_to_i64_exact(*r),
            _ => None,
        }
    }

    /// Returns `true` if the value is [`Array`].
    ///
    /// [`Array`]: Value::Array
    #[must_use]
    pub const fn is_array(&self) -> bool {
        matches!(self, Self::Array(..))
    }
}

/// Equality follows the language rules: `nil` equals only `nil`, booleans
/// and strings compare by value, numbers compare by mathematical value
/// across the integer/float tags, and arrays, objects and callables compare
/// by identity.
impl PartialEq for Value {
    #[allow(clippy::cast_precision_loss)]
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Nil, Self::Nil) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Integer(a), Self::Integer(b)) => a == b,
            (Self::Real(a), Self::Real(b)) => a == b,
            (Self::Integer(a), Self::Real(b)) | (Self::Real(b), Self::Integer(a)) => {
                (*a as f64) == *b
            },
            (Self::Str(a), Self::Str(b)) => a == b,
            (Self::Array(a), Self::Array(b)) => Rc::ptr_eq(a, b),
            (Self::Object(a), Self::Object(b)) => Rc::ptr_eq(a, b),
            (Self::Function(a), Self::Function(b)) => Rc::ptr_eq(a, b),
            (Self::Native(a), Self::Native(b)) => std::ptr::eq(*a, *b),
            _ => false,
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Nil => write!(f, "nil"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Integer(n) => write!(f, "{n}"),
            Self::Real(r) => write!(f, "{r}"),
            Self::Str(s) => write!(f, "{s}"),
            Self::Array(elements) => {
                write!(f, "[")?;

                for (index, value) in elements.borrow().iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }

                    write!(f, "{value}")?;
                }

                write!(f, "]")
            },
            Self::Object(properties) => {
                let properties = properties.borrow();

                let mut keys: Vec<&String> = properties.keys().collect();
                keys.sort();

                write!(f, "{{")?;
                for (index, key) in keys.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{key}: {}", properties[key.as_str()])?;
                }
                write!(f, "}}")
            },
            Self::Function(function) => write!(f, "<function {}>", function.name),
            Self::Native(native) => write!(f, "<native fn {}>", native.name),
        }
    }
}
