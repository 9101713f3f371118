//! Error taxonomy.
//!
//! [`CompileError`] is the leaf type: one variant per externally visible
//! code, each carrying whatever context it needs to render a message
//! without re-scanning the source. [`RuntimeError`] covers the one way
//! evaluation itself can fail. [`Error`] composes both, plus whatever an
//! orchestration layer (the transformation compiler) needs to say about
//! *which* function failed, mirroring the reference assembler's
//! `ParseError`/`AssembleError`/`Error` stack.

use std::fmt;

/// A compile-time failure, tagged with the externally visible code from
/// the error taxonomy.
#[derive(Clone, PartialEq, Debug)]
pub enum CompileError {
    /// `CONIN`: invalid numeric literal syntax.
    InvalidConstant { fragment: String },
    /// `UDVOF`: an identifier that is neither a known function nor a
    /// declared variable.
    UndefinedVariableOrFunction { fragment: String },
    /// `DELIN`: a comma outside any open argument list.
    SpuriousComma { fragment: String },
    /// `MLPAR`: a closing parenthesis with no matching opener.
    MissingLeftParen { fragment: String },
    /// `WRNFA`: wrong, or for a variadic function insufficient, argument
    /// count.
    WrongArgCount { fragment: String },
    /// `MIOPR`: an operator was expected but none matched.
    MissingOperator { fragment: String },
    /// `MIOPA`: an operand was expected but neither a literal nor a
    /// variable reference parsed.
    MissingOperand { fragment: String },
    /// `MRPAR`: unclosed parenthesis at end of input.
    MissingRightParen,
    /// `MISVN`: a function with a blank left-hand side.
    MissingVariableName { index: usize },
    /// `VARIN`: a left-hand side that is not a valid identifier.
    InvalidVariableName { index: usize, fragment: String },
    /// `DUVAR`: two functions share a left-hand side name.
    DuplicateVariableName { index: usize, name: String },
    /// `NORHS`: a right-hand side is required (because some sibling
    /// function has one) but this function's is missing.
    MissingRhs { index: usize },
}

impl CompileError {
    /// The externally visible taxonomy code for this error.
    pub fn code(&self) -> &'static str {
        match self {
            CompileError::InvalidConstant { .. } => "CONIN",
            CompileError::UndefinedVariableOrFunction { .. } => "UDVOF",
            CompileError::SpuriousComma { .. } => "DELIN",
            CompileError::MissingLeftParen { .. } => "MLPAR",
            CompileError::WrongArgCount { .. } => "WRNFA",
            CompileError::MissingOperator { .. } => "MIOPR",
            CompileError::MissingOperand { .. } => "MIOPA",
            CompileError::MissingRightParen => "MRPAR",
            CompileError::MissingVariableName { .. } => "MISVN",
            CompileError::InvalidVariableName { .. } => "VARIN",
            CompileError::DuplicateVariableName { .. } => "DUVAR",
            CompileError::MissingRhs { .. } => "NORHS",
        }
    }
}

impl fmt::Display for CompileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompileError::InvalidConstant { fragment } => {
                write!(f, "{}: invalid numeric literal near \"{}\"", self.code(), fragment)
            }
            CompileError::UndefinedVariableOrFunction { fragment } => write!(
                f,
                "{}: undefined variable or function near \"{}\"",
                self.code(),
                fragment
            ),
            CompileError::SpuriousComma { fragment } => {
                write!(f, "{}: comma outside an argument list near \"{}\"", self.code(), fragment)
            }
            CompileError::MissingLeftParen { fragment } => write!(
                f,
                "{}: closing parenthesis with no opener near \"{}\"",
                self.code(),
                fragment
            ),
            CompileError::WrongArgCount { fragment } => write!(
                f,
                "{}: wrong number of arguments near \"{}\"",
                self.code(),
                fragment
            ),
            CompileError::MissingOperator { fragment } => {
                write!(f, "{}: expected an operator near \"{}\"", self.code(), fragment)
            }
            CompileError::MissingOperand { fragment } => {
                write!(f, "{}: expected an operand near \"{}\"", self.code(), fragment)
            }
            CompileError::MissingRightParen => {
                write!(f, "{}: unclosed parenthesis at end of expression", self.code())
            }
            CompileError::MissingVariableName { index } => {
                write!(f, "{}: function {} has a blank left-hand side", self.code(), index)
            }
            CompileError::InvalidVariableName { index, fragment } => write!(
                f,
                "{}: function {} has an invalid left-hand side \"{}\"",
                self.code(),
                index,
                fragment
            ),
            CompileError::DuplicateVariableName { index, name } => write!(
                f,
                "{}: function {} duplicates left-hand side \"{}\"",
                self.code(),
                index,
                name
            ),
            CompileError::MissingRhs { index } => {
                write!(f, "{}: function {} is missing a right-hand side", self.code(), index)
            }
        }
    }
}

impl std::error::Error for CompileError {}

/// A failure during [`crate::vm::execute`].
///
/// Numeric domain errors and overflow are not represented here — they are
/// absorbed into the BAD sentinel per point. This type exists solely for
/// the one way evaluation can fail outright.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum RuntimeError {
    /// The scratch stack could not be allocated for the requested number
    /// of points.
    ScratchAllocationFailed { stacksize: usize, points: usize },
    /// The caller's input/output point counts disagree with the program's
    /// expectations.
    PointCountMismatch { expected: usize, found: usize },
}

impl fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuntimeError::ScratchAllocationFailed { stacksize, points } => write!(
                f,
                "failed to allocate a {}-slot scratch stack for {} points",
                stacksize, points
            ),
            RuntimeError::PointCountMismatch { expected, found } => {
                write!(f, "expected {} points, found {}", expected, found)
            }
        }
    }
}

impl std::error::Error for RuntimeError {}

/// The outer error type returned by [`crate::mathmap::MathMap`]
/// construction and transformation.
#[derive(Clone, PartialEq, Debug)]
pub enum Error {
    Compile(CompileError),
    Runtime(RuntimeError),
    /// The requested direction has no compiled program (§8 scenario 8).
    DirectionUndefined,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Compile(err) => write!(f, "{}", err),
            Error::Runtime(err) => write!(f, "{}", err),
            Error::DirectionUndefined => write!(f, "requested transform direction is undefined"),
        }
    }
}

impl std::error::Error for Error {}

impl From<CompileError> for Error {
    fn from(err: CompileError) -> Self {
        Error::Compile(err)
    }
}

impl From<RuntimeError> for Error {
    fn from(err: RuntimeError) -> Self {
        Error::Runtime(err)
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
