mod scanner;
mod char_scanner;
mod calc_tokenizer;

pub use scanner::Scanner;
pub use calc_tokenizer::{CalcTokenizer, CalcToken};
