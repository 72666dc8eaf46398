use crate::interpreter::{
    environment::Environment,
    evaluator::core::{EvalResult, Interpreter},
    value::Value,
};

/// Array built-ins (`লেন`, `এড`, `রিমুভ`).
pub mod array;
/// Host-facing built-ins (`ক্লক`, `ইনপুট`).
pub mod io;
/// Numeric built-ins (`পরমমান`, `বর্গমূল`, `ঘাত`, trigonometry, `সর্বনিম্ন`,
/// `সর্বোচ্চ`, `রাউন্ড`).
pub mod math;
/// Object built-ins (`কি_রিমুভ`, `অব্জেক্ট_কি`, `অব্জেক্ট_মান`).
pub mod object;

/// Type alias for built-in function handlers.
///
/// A built-in receives the interpreter, a slice of evaluated argument values
/// and the line of the call, and returns the produced value or a runtime
/// error. Any host-visible write a built-in makes (such as the `ইনপুট`
/// prompt) must go through the interpreter's output sink.
pub type NativeFn = fn(&mut Interpreter, &[Value], usize) -> EvalResult<Value>;

/// Specifies the allowed number of arguments for a built-in.
///
/// - `Exact(n)` means the call site enforces exactly `n` arguments.
/// - `Variadic` means the built-in validates its own argument count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// The built-in takes exactly this many arguments.
    Exact(usize),
    /// The built-in checks its own argument count.
    Variadic,
}

/// One entry of the built-in table: a name, an arity contract and the
/// host-backed handler.
#[derive(Debug)]
pub struct NativeDef {
    /// The global name the built-in is registered under.
    pub name:  &'static str,
    /// The arity contract enforced at the call site.
    pub arity: Arity,
    /// The handler implementing the built-in.
    pub func:  NativeFn,
}

/// Defines the built-in functions by generating a lookup table and a name
/// list.
///
/// Each entry provides a string name, an arity specification, and a function
/// pointer implementing the built-in. The macro produces:
/// - `NATIVE_TABLE` (the static table registered into the global scope),
/// - `BUILTIN_NAMES` (the reserved-identifier list shared with the parser).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        /// The fixed built-in table. Populated into the global environment
        /// exactly once, at interpreter construction.
        pub static NATIVE_TABLE: &[NativeDef] = &[
            $(
                NativeDef { name: $name, arity: $arity, func: $func },
            )*
        ];
        /// Every built-in name. These identifiers are reserved: the parser
        /// rejects them as variable and function declarators.
        pub const BUILTIN_NAMES: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "ক্লক"          => { arity: Arity::Exact(0), func: io::clock },
    "ইনপুট"         => { arity: Arity::Variadic, func: io::input },
    "input"        => { arity: Arity::Variadic, func: io::input },
    "লেন"          => { arity: Arity::Exact(1), func: array::len },
    "এড"           => { arity: Arity::Variadic, func: array::append },
    "রিমুভ"         => { arity: Arity::Exact(2), func: array::remove },
    "কি_রিমুভ"      => { arity: Arity::Exact(2), func: object::delete_key },
    "অব্জেক্ট_কি"    => { arity: Arity::Exact(1), func: object::keys },
    "অব্জেক্ট_মান"   => { arity: Arity::Exact(1), func: object::values },
    "পরমমান"       => { arity: Arity::Exact(1), func: |_, args, line| math::unary_math("পরমমান", args, line) },
    "বর্গমূল"        => { arity: Arity::Exact(1), func: |_, args, line| math::unary_math("বর্গমূল", args, line) },
    "ঘাত"          => { arity: Arity::Exact(2), func: math::pow },
    "সাইন"         => { arity: Arity::Exact(1), func: |_, args, line| math::unary_math("সাইন", args, line) },
    "কসাইন"        => { arity: Arity::Exact(1), func: |_, args, line| math::unary_math("কসাইন", args, line) },
    "ট্যান"         => { arity: Arity::Exact(1), func: |_, args, line| math::unary_math("ট্যান", args, line) },
    "সর্বনিম্ন"       => { arity: Arity::Variadic, func: |_, args, line| math::min_max("সর্বনিম্ন", args, line) },
    "সর্বোচ্চ"       => { arity: Arity::Variadic, func: |_, args, line| math::min_max("সর্বোচ্চ", args, line) },
    "রাউন্ড"        => { arity: Arity::Exact(1), func: |_, args, line| math::unary_math("রাউন্ড", args, line) },
}

/// Checks whether a name refers to a reserved identifier.
///
/// A reserved identifier is the name of a built-in function. Declaring a
/// variable or function under such a name is a parse error.
///
/// # Parameters
/// - `name`: Identifier to check.
///
/// # Returns
/// `true` if the name is reserved, otherwise `false`.
///
/// # Example
/// ```
/// use borno::interpreter::evaluator::builtins::is_reserved_identifier;
///
/// assert!(is_reserved_identifier("লেন"));
/// assert!(is_reserved_identifier("input"));
/// assert!(!is_reserved_identifier("যোগফল"));
/// ```
#[must_use]
pub fn is_reserved_identifier(name: &str) -> bool {
    BUILTIN_NAMES.contains(&name)
}

/// Populates the global environment with the built-in table.
pub fn register_builtins(globals: &mut Environment) {
    for def in NATIVE_TABLE {
        globals.define(def.name, Value::Native(def));
    }
}
