use log::warn;

pub const DEFAULT_MAX_INPUT_LEN: usize = 1024;
pub const MAX_INPUT_ENV: &str = "RPNCALC_MAX_INPUT";

#[derive(Clone, Debug, PartialEq)]
pub struct CalcConfig {
    /// Longest input, in characters, accepted by `Calculator::evaluate`.
    pub max_input_len: usize,
}

impl Default for CalcConfig {
    fn default() -> Self {
        CalcConfig{max_input_len: DEFAULT_MAX_INPUT_LEN}
    }
}

impl CalcConfig {
    pub fn with_max_input_len(max_input_len: usize) -> Self {
        CalcConfig{max_input_len}
    }

    /// Read the input limit from `RPNCALC_MAX_INPUT`, defaults otherwise.
    pub fn from_env() -> Self {
        Self::from_var(std::env::var(MAX_INPUT_ENV).ok().as_deref())
    }

    fn from_var(var: Option<&str>) -> Self {
        let Some(raw) = var else {
            return Self::default();
        };
        match raw.trim().parse::<usize>() {
            Ok(n) if n > 0 => Self::with_max_input_len(n),
            _ => {
                warn!("ignoring {}={:?}, using {}", MAX_INPUT_ENV, raw, DEFAULT_MAX_INPUT_LEN);
                Self::default()
            }
        }
    }
}
