#![deny(warnings)]

use crate::scanner::Scanner;
use std::fmt;
use std::str::FromStr;

static BINARY_OPS: &[char] = &['+', '*', '/', '='];
static CONTROLS: &[char] = &['!', 'R', 'C', 'A', 'Q'];
static SYMBOLS: &[char] = &['(', ')', '!', '+', '*', '/', '=', 'R', 'C', 'A', 'Q'];

#[derive(Clone, PartialEq, Debug)]
pub enum CalcToken {
    Number(f64),
    Op(char),      // + - * / =
    Control(char), // ! R C A Q
    OParen, CParen,
    Unknown(String), // numeric looking lexeme that doesn't parse
}

impl fmt::Display for CalcToken {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CalcToken::Number(n) => write!(f, "{}", n),
            CalcToken::Op(op) | CalcToken::Control(op) => write!(f, "{}", op),
            CalcToken::OParen => write!(f, "("),
            CalcToken::CParen => write!(f, ")"),
            CalcToken::Unknown(lexeme) => write!(f, "{}", lexeme),
        }
    }
}

/// Splits calculator input into tokens.
///
/// Expects input that is already upper-cased with `1/X` rewritten to `R`.
/// Characters that don't start a token (spaces, unknown letters) are dropped.
pub struct CalcTokenizer<I: Iterator<Item=char>> {
    src: Scanner<I>,
}

impl<I: Iterator<Item=char>> CalcTokenizer<I> {
    pub fn new(source: I) -> Self {
        CalcTokenizer{src: Scanner::new(source)}
    }

    fn symbol_token(symbol: char) -> CalcToken {
        match symbol {
            '(' => CalcToken::OParen,
            ')' => CalcToken::CParen,
            c if CONTROLS.contains(&c) => CalcToken::Control(c),
            c => {
                debug_assert!(BINARY_OPS.contains(&c));
                CalcToken::Op(c)
            }
        }
    }

    fn number_token(lexeme: String) -> CalcToken {
        if lexeme == "-" {
            return CalcToken::Op('-');
        }
        match f64::from_str(&lexeme) {
            Ok(n) => CalcToken::Number(n),
            Err(_) => CalcToken::Unknown(lexeme),
        }
    }

    fn get_token(&mut self) -> Option<CalcToken> {
        loop {
            self.src.ignore_ws();
            if let Some(symbol) = self.src.scan_symbol(SYMBOLS) {
                return Some(Self::symbol_token(symbol));
            } else if let Some(lexeme) = self.src.scan_number() {
                return Some(Self::number_token(lexeme));
            }
            // nothing matches here, drop the char and keep going
            self.src.next()?;
            self.src.ignore();
        }
    }
}

impl<I: Iterator<Item=char>> Iterator for CalcTokenizer<I> {
    type Item = CalcToken;
    fn next(&mut self) -> Option<Self::Item> {
        self.get_token()
    }
}

///////////////////////////////////////////////////////////////////////////////
