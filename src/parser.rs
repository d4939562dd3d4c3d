use thiserror::Error;

mod command_line;
mod flag_set;
mod interface;
mod printer;

pub use command_line::*;
pub use flag_set::*;
#[cfg(any(test, feature = "unit_test"))]
pub use interface::Transcript;

pub(crate) const HELP_NAME: &str = "help";
pub(crate) const HELP_SHORT: &str = "h";

/// An error in the configuration of the registered flags (ex: a repeated flag name).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Config error: {0}")]
pub struct ConfigError(pub(crate) String);

/// An error encountered while parsing the command line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A flag was given which has not been registered.
    #[error("flag provided but not defined: -{0}")]
    Undefined(String),
    /// A token which looks like a flag, but cannot name one (ex: `---x`, `-=x`).
    #[error("bad flag syntax: {0}")]
    BadSyntax(String),
    /// A flag which requires an argument was the final token.
    #[error("flag needs an argument: -{0}")]
    MissingArgument(String),
    /// The help flag (`-h` or `-help`) was given; the usage text has been displayed.
    #[error("help requested")]
    Help,
    /// The flags were misconfigured before parsing began.
    #[error(transparent)]
    Config(#[from] ConfigError),
}
