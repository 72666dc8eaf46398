#[derive(Debug, Clone, PartialEq)]
/// Represents all errors that can occur during evaluation.
///
/// Every variant renders as `msg` followed by `[line N]` on its own line,
/// matching the interpreter's error-output contract.
pub enum RuntimeError {
    /// Read of a variable no enclosing scope defines.
    UndefinedVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Assignment to a variable no enclosing scope defines.
    UndefinedAssignment {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A `ধরি` declaration reused a name already bound in the same scope.
    Redeclaration {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Left operand of an arithmetic or comparison operator is not numeric.
    LeftOperandNotNumber {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Right operand of an arithmetic or comparison operator is not numeric.
    RightOperandNotNumber {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Left operand of a bitwise operator has no exact integer value.
    LeftOperandNotInteger {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Right operand of a bitwise operator has no exact integer value.
    RightOperandNotInteger {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Operand of unary `-` is not numeric.
    OperandNotNumber {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Operand of unary `~` has no exact integer value.
    OperandNotInteger {
        /// The source line where the error occurred.
        line: usize,
    },
    /// `+` received operands that are neither numbers nor strings.
    OperandsNotNumbersOrStrings {
        /// The source line where the error occurred.
        line: usize,
    },
    /// String concatenation received an unusable right operand.
    RightOperandNotStringOrNumber {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Division or modulo by zero.
    DivisionByZero {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Tried to call a value that is not a function.
    NotCallable {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A call supplied the wrong number of arguments.
    ArityMismatch {
        /// The arity of the callee.
        expected: usize,
        /// The number of arguments supplied.
        found:    usize,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// Array index is not an exact integer.
    IndexNotInteger {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Array index is outside `[0, len)`.
    IndexOutOfBounds {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Indexed into a value that is not an array.
    NotAnArray {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Assigned through an index of a value that is not an array.
    NotAnArrayAssignment {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Accessed a property of a value that is not an object.
    NotAnObject {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Assigned a property of a value that is not an object.
    NotAnObjectAssignment {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Read a property the object does not have.
    PropertyMissing {
        /// The property name.
        name:   String,
        /// Rendering of the object the property was looked up on.
        object: String,
        /// The source line where the error occurred.
        line:   usize,
    },
    /// A built-in function rejected its arguments.
    NativeCallFailed {
        /// Details from the built-in.
        message: String,
        /// The source line of the call.
        line:    usize,
    },
    /// A `থামো` signal escaped every loop.
    BreakOutsideLoop {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A `চালিয়ে_যাও` signal escaped every loop.
    ContinueOutsideLoop {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A `ফেরত` signal escaped every function body.
    ReturnOutsideFunction {
        /// The source line where the error occurred.
        line: usize,
    },
}

impl RuntimeError {
    /// Gets the source line the error points at.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UndefinedVariable { line, .. }
            | Self::UndefinedAssignment { line, .. }
            | Self::Redeclaration { line, .. }
            | Self::LeftOperandNotNumber { line }
            | Self::RightOperandNotNumber { line }
            | Self::LeftOperandNotInteger { line }
            | Self::RightOperandNotInteger { line }
            | Self::OperandNotNumber { line }
            | Self::OperandNotInteger { line }
            | Self::OperandsNotNumbersOrStrings { line }
            | Self::RightOperandNotStringOrNumber { line }
            | Self::DivisionByZero { line }
            | Self::NotCallable { line }
            | Self::ArityMismatch { line, .. }
            | Self::IndexNotInteger { line }
            | Self::IndexOutOfBounds { line }
            | Self::NotAnArray { line }
            | Self::NotAnArrayAssignment { line }
            | Self::NotAnObject { line }
            | Self::NotAnObjectAssignment { line }
            | Self::PropertyMissing { line, .. }
            | Self::NativeCallFailed { line, .. }
            | Self::BreakOutsideLoop { line }
            | Self::ContinueOutsideLoop { line }
            | Self::ReturnOutsideFunction { line } => *line,
        }
    }

    /// The error text without the trailing `[line N]` marker.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::UndefinedVariable { name, .. } => format!("Variable {name} is not defined."),
            Self::UndefinedAssignment { name, .. } => format!("Undefined variable '{name}'."),
            Self::Redeclaration { name, .. } => format!("Cannot redeclare variable {name}."),
            Self::LeftOperandNotNumber { .. } => "Left operand must be a number.".to_string(),
            Self::RightOperandNotNumber { .. } => "Right operand must be a number.".to_string(),
            Self::LeftOperandNotInteger { .. } => "Left operand must be an integer.".to_string(),
            Self::RightOperandNotInteger { .. } => "Right operand must be an integer.".to_string(),
            Self::OperandNotNumber { .. } => "Operand must be a number.".to_string(),
            Self::OperandNotInteger { .. } => "Operand must be an integer.".to_string(),
            Self::OperandsNotNumbersOrStrings { .. } => {
                "Operands must be numbers or strings.".to_string()
            },
            Self::RightOperandNotStringOrNumber { .. } => {
                "Right operand must be a string or number.".to_string()
            },
            Self::DivisionByZero { .. } => "Division by zero.".to_string(),
            Self::NotCallable { .. } => "Can only call functions.".to_string(),
            Self::ArityMismatch { expected, found, .. } => {
                format!("Expected {expected} arguments but {found}.")
            },
            Self::IndexNotInteger { .. } => "Array index must be an integer.".to_string(),
            Self::IndexOutOfBounds { .. } => "Array index out of bounds.".to_string(),
            Self::NotAnArray { .. } => "Invalid array access. Not an array.".to_string(),
            Self::NotAnArrayAssignment { .. } => {
                "Invalid array assignment. Not an array.".to_string()
            },
            Self::NotAnObject { .. } => "Invalid property access. Not an object.".to_string(),
            Self::NotAnObjectAssignment { .. } => {
                "Invalid object assignment. Not an object.".to_string()
            },
            Self::PropertyMissing { name, object, .. } => {
                format!("Property '{name}' does not exist on object '{object}'.")
            },
            Self::NativeCallFailed { message, .. } => format!("Function call failed: {message}"),
            Self::BreakOutsideLoop { .. } => "Unexpected 'break' outside of loop.".to_string(),
            Self::ContinueOutsideLoop { .. } => {
                "Unexpected 'continue' outside of loop.".to_string()
            },
            Self::ReturnOutsideFunction { .. } => {
                "Unexpected 'return' outside of function.".to_string()
            },
        }
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}\n[line {}]", self.message(), self.line())
    }
}

impl std::error::Error for RuntimeError {}
