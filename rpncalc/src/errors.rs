use thiserror::Error;

/// Everything that can stop an expression early.
///
/// None of these are fatal to a session: the numeric stack is left in a
/// well defined state and the next expression can continue from it.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CalcError {
    #[error("Input exceeds maximum supported length ({0} characters)")]
    InputTooLong(usize),
    #[error("Mismatched Parentheses")]
    MismatchedParens,
    #[error("Divide By Zero Error")]
    DivideByZero,
    #[error("Reciprocal Divide By Zero Error")]
    ReciprocalDivideByZero,
    #[error("Non Integer Factorial Error")]
    NonIntegerFactorial,
    #[error("Negative Factorial Error")]
    NegativeFactorial,
}

impl CalcError {
    /// Errors raised before any operation touched the stack.
    pub fn is_input_error(&self) -> bool {
        matches!(self, CalcError::InputTooLong(_) | CalcError::MismatchedParens)
    }
}
