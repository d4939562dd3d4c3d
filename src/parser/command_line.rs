use std::cell::RefCell;
use std::env;
use std::path::Path;

use crate::api::{AliasUsage, Collector, Counter};
use crate::parser::{FlagSet, ParseError};
use crate::prelude::{FlagValue, Registrar};

thread_local! {
    static COMMAND_LINE: RefCell<FlagSet> = RefCell::new(FlagSet::new(program_name()));
}

fn program_name() -> String {
    env::args()
        .next()
        .and_then(|path| {
            Path::new(&path)
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
        })
        .unwrap_or_else(|| "program".to_string())
}

/// The program's command line registrar: a [`FlagSet`] named after the running program.
///
/// The command line is thread-local, not shared across the process.
/// Register flags and parse on the same thread (typically `main`, before the program's logic begins).
/// Any other thread sees its own, empty command line: flags registered elsewhere are undefined there.
///
/// ### Example
/// ```
/// use multiflag::{CommandLine, Counter};
///
/// let verbosity = Counter::register(&mut CommandLine, "verbose", "false", "Verbosity.", &["v"]);
/// multiflag::parse_tokens(&["-v", "-verbose"]).unwrap();
///
/// assert_eq!(verbosity.count(), 2);
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct CommandLine;

impl CommandLine {
    /// Access the process-wide flag set.
    /// Not reentrant: `f` must not call back into the command line.
    pub(crate) fn with<R>(f: impl FnOnce(&mut FlagSet) -> R) -> R {
        COMMAND_LINE.with(|command_line| f(&mut command_line.borrow_mut()))
    }
}

impl Registrar for CommandLine {
    fn register(&mut self, name: &str, value: Box<dyn FlagValue>, usage: String) {
        Self::with(|flag_set| flag_set.register(name, value, usage));
    }

    fn describe_alias(&self, canonical: &str, alias: &str) -> String {
        Self::with(|flag_set| flag_set.describe_alias(canonical, alias))
    }
}

/// Register a [`Counter`] with the process-wide command line.
pub fn counter(
    name: impl Into<String>,
    default: impl Into<String>,
    usage: impl Into<String>,
    aliases: &[&str],
) -> Counter {
    Counter::register(&mut CommandLine, name, default, usage, aliases)
}

/// Register a [`Collector`] with the process-wide command line.
pub fn collector(
    name: impl Into<String>,
    default: impl Into<String>,
    usage: impl Into<String>,
    aliases: &[&str],
) -> Collector {
    Collector::register(&mut CommandLine, name, default, usage, aliases)
}

/// Replace the alias usage of the process-wide command line.
///
/// Call this before registering any aliases: the usage text of aliases already registered is left untouched.
pub fn set_alias_usage(alias_usage: AliasUsage) {
    CommandLine::with(|flag_set| flag_set.set_alias_usage(alias_usage));
}

/// Parse the Cli [`env::args`] with the process-wide command line.
/// See [`FlagSet::parse`].
pub fn parse() {
    CommandLine::with(FlagSet::parse);
}

/// Parse the input tokens with the process-wide command line.
/// See [`FlagSet::parse_tokens`].
pub fn parse_tokens(tokens: &[&str]) -> Result<(), ParseError> {
    CommandLine::with(|flag_set| flag_set.parse_tokens(tokens))
}

/// The tokens remaining after the process-wide command line has been parsed.
pub fn args() -> Vec<String> {
    CommandLine::with(|flag_set| flag_set.args().to_vec())
}

/// The usage text of the process-wide command line.
pub fn usage() -> String {
    CommandLine::with(|flag_set| flag_set.usage())
}
