pub use config::CalcConfig;
pub use errors::CalcError;
pub use operation::{dispatch, Operation};
pub use parser::{precedence, preprocess, RPNExpr, ShuntingParser};
pub use rpneval::{Calculator, Evaluation};
pub use stack::NumericStack;

pub mod config;
mod errors;
mod operation;
pub mod parser;
mod stack;

mod rpnprint;
mod rpneval;
