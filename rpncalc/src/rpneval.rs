use crate::config::CalcConfig;
use crate::errors::CalcError;
use crate::operation::{dispatch, Operation};
use crate::parser::{RPNExpr, ShuntingParser};
use crate::stack::NumericStack;
use log::{debug, trace};

/// Outcome of one call to `Calculator::process`.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub success: bool,
    pub result: f64,
    pub error: String,
    /// A `Q` was executed, the caller should end the session.
    pub quit: bool,
}

/// One calculator session.
///
/// The numeric stack outlives each expression, so `5+2=` followed by `+3=`
/// yields 7 and then 10. Sessions are independent of each other.
pub struct Calculator {
    config: CalcConfig,
    stack: NumericStack,
    quit: bool,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    pub fn new() -> Calculator {
        Self::with_config(CalcConfig::default())
    }

    pub fn with_config(config: CalcConfig) -> Calculator {
        Calculator{config, stack: NumericStack::new(), quit: false}
    }

    pub fn config(&self) -> &CalcConfig {
        &self.config
    }

    /// Top of the stack, 0 when empty.
    pub fn current_value(&self) -> f64 {
        self.stack.peek()
    }

    /// Message of the last failed operation, empty after a clear-all.
    pub fn last_error(&self) -> &str {
        self.stack.last_error()
    }

    /// Whether the last expression executed a `Q`.
    pub fn quit_requested(&self) -> bool {
        self.quit
    }

    pub fn stack(&self) -> &NumericStack {
        &self.stack
    }

    /// Same as an `A` token: empty the stack and forget errors.
    pub fn reset(&mut self) {
        self.stack.clear();
        self.quit = false;
    }

    /// Convert `input` to postfix and run it against the session stack.
    pub fn evaluate(&mut self, input: &str) -> Result<f64, CalcError> {
        self.quit = false;
        let max = self.config.max_input_len;
        if input.chars().count() > max {
            debug!("rejecting input longer than {} chars", max);
            return Err(CalcError::InputTooLong(max));
        }
        let rpn = ShuntingParser::parse_str(input)?;
        self.eval_rpn(&rpn)
    }

    /// Run an already converted expression. Stops at the first failing
    /// operation, the remaining tokens are not executed.
    pub fn eval_rpn(&mut self, rpn: &RPNExpr) -> Result<f64, CalcError> {
        self.quit = false;
        for token in rpn.iter() {
            match Operation::from_token(token) {
                Some(op) => {
                    trace!("{:?} on {:?}", op, self.stack.values());
                    dispatch(&mut self.stack, op)?;
                    if op == Operation::Quit {
                        self.quit = true;
                    }
                }
                None => trace!("skipping '{}'", token),
            }
        }
        Ok(self.stack.peek())
    }

    /// `evaluate` flattened into a success flag, result and message.
    pub fn process(&mut self, input: &str) -> Evaluation {
        match self.evaluate(input) {
            Ok(result) => Evaluation{
                success: true, result, error: String::new(), quit: self.quit,
            },
            Err(e) => Evaluation{
                success: false,
                result: if e.is_input_error() { 0.0 } else { self.stack.peek() },
                error: e.to_string(),
                quit: self.quit,
            },
        }
    }
}
