use crate::errors::CalcError;
use crate::stack::NumericStack;
use lexers::CalcToken;

// n! overflows f64 past this point
const MAX_FACTORIAL_ARG: f64 = 170.0;

/// Everything the evaluator can ask of a `NumericStack`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Operation {
    Operand(f64),
    Add,
    Subtract,
    Multiply,
    Divide,
    Reciprocal,
    Factorial,
    Equals,
    ClearPrevious,
    ClearAll,
    Quit,
}

impl Operation {
    /// Map a postfix token to the operation it triggers. Parens and
    /// lexemes that aren't numbers map to nothing.
    pub fn from_token(token: &CalcToken) -> Option<Operation> {
        match *token {
            CalcToken::Number(n) => Some(Operation::Operand(n)),
            CalcToken::Op(op) | CalcToken::Control(op) => Self::from_symbol(op),
            CalcToken::OParen | CalcToken::CParen | CalcToken::Unknown(_) => None,
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Operation> {
        match symbol {
            '+' => Some(Operation::Add),
            '-' => Some(Operation::Subtract),
            '*' => Some(Operation::Multiply),
            '/' => Some(Operation::Divide),
            '=' => Some(Operation::Equals),
            'R' => Some(Operation::Reciprocal),
            '!' => Some(Operation::Factorial),
            'C' => Some(Operation::ClearPrevious),
            'A' => Some(Operation::ClearAll),
            'Q' => Some(Operation::Quit),
            _ => None,
        }
    }
}

/// Run `op` against `stack`. On failure the error is also recorded as the
/// stack's last error.
pub fn dispatch(stack: &mut NumericStack, op: Operation) -> Result<(), CalcError> {
    match op {
        Operation::Operand(value) => { stack.push(value); Ok(()) }
        Operation::Add => binary(stack, |v1, v2| v1 + v2),
        Operation::Subtract => binary(stack, |v1, v2| v2 - v1),
        Operation::Multiply => binary(stack, |v1, v2| v1 * v2),
        Operation::Divide => divide(stack),
        Operation::Reciprocal => reciprocal(stack),
        Operation::Factorial => factorial(stack),
        Operation::ClearPrevious => { stack.pop(); stack.push(0.0); Ok(()) }
        Operation::ClearAll => { stack.clear(); Ok(()) }
        Operation::Equals | Operation::Quit => Ok(()),
    }
}

// v1 is the top of the stack, v2 the value pushed before it
fn binary(stack: &mut NumericStack, f: impl Fn(f64, f64) -> f64) -> Result<(), CalcError> {
    let v1 = stack.pop();
    let v2 = stack.pop();
    stack.push(f(v1, v2));
    Ok(())
}

fn is_zero(v: f64) -> bool {
    v.abs() <= f64::EPSILON
}

// both operands are consumed even when the divisor is zero
fn divide(stack: &mut NumericStack) -> Result<(), CalcError> {
    let v1 = stack.pop();
    let v2 = stack.pop();
    if is_zero(v1) {
        return Err(stack.fail(CalcError::DivideByZero));
    }
    stack.push(v2 / v1);
    Ok(())
}

fn reciprocal(stack: &mut NumericStack) -> Result<(), CalcError> {
    let v1 = stack.pop();
    if is_zero(v1) {
        return Err(stack.fail(CalcError::ReciprocalDivideByZero));
    }
    stack.push(1.0 / v1);
    Ok(())
}

// a rejected argument goes back on the stack untouched
fn factorial(stack: &mut NumericStack) -> Result<(), CalcError> {
    let v1 = stack.pop();
    if !v1.is_finite() || (v1 % 1.0).abs() > f64::EPSILON {
        stack.push(v1);
        return Err(stack.fail(CalcError::NonIntegerFactorial));
    }
    if v1 < 0.0 {
        stack.push(v1);
        return Err(stack.fail(CalcError::NegativeFactorial));
    }
    stack.push(int_factorial(v1));
    Ok(())
}

fn int_factorial(n: f64) -> f64 {
    if n > MAX_FACTORIAL_ARG {
        return f64::INFINITY;
    }
    (2..=n as u32).rev().fold(1.0, |acc, k| acc * k as f64)
}

///////////////////////////////////////////////////////////////////////////////
