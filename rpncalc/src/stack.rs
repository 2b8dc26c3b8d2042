use crate::errors::CalcError;

/// Operand stack of an evaluation session plus its last error message.
///
/// Popping or peeking an empty stack yields `0.0` instead of failing, so
/// expressions like `=` or `+3=` on a fresh session are well defined.
#[derive(Debug, Default)]
pub struct NumericStack {
    values: Vec<f64>,
    last_error: String,
}

impl NumericStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, value: f64) {
        self.values.push(value);
    }

    pub fn pop(&mut self) -> f64 {
        self.values.pop().unwrap_or(0.0)
    }

    pub fn peek(&self) -> f64 {
        self.values.last().copied().unwrap_or(0.0)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn last_error(&self) -> &str {
        &self.last_error
    }

    /// Record `err` as the last error and hand it back for propagation.
    pub fn fail(&mut self, err: CalcError) -> CalcError {
        self.last_error = err.to_string();
        err
    }

    /// Empty the stack and forget the last error.
    pub fn clear(&mut self) {
        self.values.clear();
        self.last_error.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::NumericStack;
    use crate::errors::CalcError;

    #[test]
    fn safe_underflow() {
        let mut stack = NumericStack::new();
        assert_eq!(stack.peek(), 0.0);
        assert_eq!(stack.pop(), 0.0);
        assert!(stack.is_empty());
        stack.push(4.5);
        assert_eq!(stack.pop(), 4.5);
        assert_eq!(stack.pop(), 0.0);
    }

    #[test]
    fn lifo_order() {
        let mut stack = NumericStack::new();
        stack.push(1.0);
        stack.push(2.0);
        assert_eq!(stack.peek(), 2.0);
        assert_eq!(stack.len(), 2);
        assert_eq!(stack.values(), &[1.0, 2.0]);
    }

    #[test]
    fn errors_stick_until_clear() {
        let mut stack = NumericStack::new();
        stack.push(3.0);
        let err = stack.fail(CalcError::DivideByZero);
        assert_eq!(err, CalcError::DivideByZero);
        assert_eq!(stack.last_error(), "Divide By Zero Error");
        stack.push(1.0);
        assert_eq!(stack.last_error(), "Divide By Zero Error");
        stack.clear();
        assert!(stack.is_empty());
        assert_eq!(stack.last_error(), "");
    }
}
