#![deny(warnings)]

use crate::scanner::Scanner;

static WHITE: &[char] = &[' ', '\n', '\r', '\t'];
static DIGITS: &[char] = &['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];

impl<I: Iterator<Item=char>> Scanner<I> {
    pub fn extract_string(&mut self) -> String {
        self.extract().into_iter().collect()
    }

    pub fn skip_ws(&mut self) -> bool {
        self.skip_all(WHITE)
    }

    // discard leading whitespace so the next scan starts fresh
    pub fn ignore_ws(&mut self) {
        self.skip_ws();
        self.ignore();
    }

    /// Scan one of the single char symbols in `symbols`.
    pub fn scan_symbol(&mut self, symbols: &[char]) -> Option<char> {
        let symbol = self.accept_any(symbols)?;
        self.ignore();
        Some(symbol)
    }

    // scan calculator literals like -?[0-9]*\.*[0-9]*
    // Every part is optional so a lone '-' or '.' is also returned, the
    // caller decides whether the lexeme is a usable number.
    pub fn scan_number(&mut self) -> Option<String> {
        self.accept(&'-');
        self.skip_all(DIGITS);
        self.skip_all(&['.']);
        self.skip_all(DIGITS);
        if self.view().is_empty() {
            return None;
        }
        Some(self.extract_string())
    }
}

///////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scan_number() {
        let tests = vec![
            "987", "-543", "41.98", "-83.5", ".5", "-.5", "7.",
            "-", ".", "1..2", "-0",
        ];
        for t in tests.iter() {
            let result = Scanner::new(t.chars()).scan_number();
            assert_eq!(Some(t.to_string()), result);
        }
    }

    #[test]
    fn scan_number_stops_at_non_digits() {
        let mut s = Scanner::new("12+3".chars());
        assert_eq!(s.scan_number(), Some("12".to_string()));
        assert_eq!(s.next(), Some('+'));
        let mut s = Scanner::new("3e5".chars());
        assert_eq!(s.scan_number(), Some("3".to_string()));
        assert_eq!(Scanner::new("+4".chars()).scan_number(), None);
        assert_eq!(Scanner::new("".chars()).scan_number(), None);
    }

    #[test]
    fn scan_symbols() {
        let symbols = &['(', ')', '!'];
        let mut s = Scanner::new("()x".chars());
        assert_eq!(s.scan_symbol(symbols), Some('('));
        assert_eq!(s.scan_symbol(symbols), Some(')'));
        assert_eq!(s.scan_symbol(symbols), None);
        assert_eq!(s.next(), Some('x'));
    }

    #[test]
    fn ignore_whitespace() {
        let mut s = Scanner::new(" \t 42".chars());
        s.ignore_ws();
        assert_eq!(s.scan_number(), Some("42".to_string()));
    }
}
