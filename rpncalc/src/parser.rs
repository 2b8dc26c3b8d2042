use crate::errors::CalcError;
use lexers::{CalcToken, CalcTokenizer};
use log::{debug, trace};

// multi char input rewritten to its single char token before tokenizing
const REPLACEMENTS: &[(&str, &str)] = &[
    ("1/X", "R"), // reciprocal
];

/// Lower numbers bind tighter. `=` sits at the very bottom so it always
/// flushes every pending operator and comes out last.
pub fn precedence(token: &CalcToken) -> Option<usize> {
    match *token {
        CalcToken::Control('!') | CalcToken::Control('R') => Some(1),
        CalcToken::Op('*') | CalcToken::Op('/') => Some(2),
        CalcToken::Op('+') | CalcToken::Op('-') => Some(3),
        CalcToken::Control('C') | CalcToken::Control('A') | CalcToken::Control('Q') => Some(3),
        CalcToken::Op('=') => Some(99),
        _ => None,
    }
}

// unary and zero-arity symbols, never dropped for a following operator
fn is_control(token: &CalcToken) -> bool {
    matches!(token, CalcToken::Control(_))
}

/// Upper-case the input and apply the replacement table.
pub fn preprocess(input: &str) -> String {
    REPLACEMENTS.iter()
        .fold(input.to_uppercase(), |s, (from, to)| s.replace(from, to))
}

#[derive(PartialEq, Debug, Clone, Default)]
pub struct RPNExpr(pub Vec<CalcToken>);

impl std::ops::Deref for RPNExpr {
    type Target = [CalcToken];
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

pub struct ShuntingParser;

impl ShuntingParser {
    pub fn parse_str(expr: &str) -> Result<RPNExpr, CalcError> {
        Self::parse(CalcTokenizer::new(preprocess(expr).chars()))
    }

    pub fn parse(lex: impl Iterator<Item = CalcToken>) -> Result<RPNExpr, CalcError> {
        let mut lex = lex.peekable();
        let mut out = Vec::new();
        let mut stack = Vec::new();

        while let Some(token) = lex.next() {
            match token {
                CalcToken::OParen => stack.push(token),
                CalcToken::CParen => {
                    while !stack.is_empty() && stack.last() != Some(&CalcToken::OParen) {
                        out.extend(stack.pop());
                    }
                    if stack.pop().is_none() {
                        debug!("unmatched ')' after {} tokens", out.len());
                        return Err(CalcError::MismatchedParens);
                    }
                }
                _ => match precedence(&token) {
                    // anything else is an operand, good number or not
                    None => out.push(token),
                    Some(_) if !is_control(&token)
                        && lex.peek().and_then(precedence).is_some() => {
                        // consecutive operators: the last one wins
                        trace!("dropping '{}', another operator follows", token);
                    }
                    Some(prec_rhs) => {
                        while let Some(prec_lhs) = stack.last().and_then(precedence) {
                            if prec_lhs > prec_rhs {
                                break;
                            }
                            out.extend(stack.pop());
                        }
                        stack.push(token);
                    }
                },
            }
        }
        while let Some(top) = stack.pop() {
            match top {
                CalcToken::OParen => trace!("dropping unclosed '('"),
                token => out.push(token),
            }
        }
        let rpn = RPNExpr(out);
        debug!("postfix: {}", rpn);
        Ok(rpn)
    }
}
