use std::collections::BTreeMap;
use std::env;

use crate::api::AliasUsage;
use crate::parser::interface::{ConsoleInterface, UserInterface};
use crate::parser::printer::{Printer, UsageLine};
use crate::parser::{ConfigError, ParseError, HELP_NAME, HELP_SHORT};
use crate::prelude::{FlagValue, Registrar};

#[cfg(any(test, feature = "unit_test"))]
use crate::parser::interface::Transcript;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

// Passed to an argument-free flag which occurs without an inline value.
const ARGUMENT_FREE_TOKEN: &str = "true";

struct Flag {
    usage: String,
    value: Box<dyn FlagValue>,
}

/// A registered flag, as described in the usage text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlagDescription {
    /// The registered name (canonical or alias).
    pub name: String,
    /// The default value, as displayed in the usage text.
    pub default: String,
    /// The usage text.
    pub usage: String,
    /// Whether the flag stands alone, without consuming a following token.
    pub argument_free: bool,
}

/// A set of flags, which tokenizes a command line and dispatches each flag occurrence to its value.
///
/// Flags may be written `-name` or `--name`.
/// A flag's argument is given either inline (`-name=value`) or as the following token (`-name value`).
/// Argument-free flags never consume the following token.
/// Parsing stops at the first non-flag token, or just after the `--` terminator.
///
/// ### Example
/// ```
/// use multiflag::{Collector, Counter, FlagSet};
///
/// let mut flags = FlagSet::new("program");
/// let verbosity = Counter::register(&mut flags, "verbose", "false", "Verbosity.", &["v"]);
/// let trace = Collector::register(&mut flags, "trace", "none", "Trace program sections.", &["t"]);
///
/// flags.parse_tokens(&["-v", "--v", "-trace=parse", "file.txt", "-v"]).unwrap();
///
/// assert_eq!(verbosity.count(), 2);
/// assert_eq!(trace.values(), vec!["parse"]);
/// assert_eq!(flags.args(), &["file.txt", "-v"]);
/// ```
pub struct FlagSet {
    program: String,
    flags: BTreeMap<String, Flag>,
    alias_usage: AliasUsage,
    args: Vec<String>,
    parsed: bool,
    deferred_error: Option<ConfigError>,
    printer: Printer,
    user_interface: Box<dyn UserInterface>,
}

impl std::fmt::Debug for FlagSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FlagSet")
            .field("program", &self.program)
            .field("flags", &self.flags.keys().collect::<Vec<_>>())
            .field("args", &self.args)
            .field("parsed", &self.parsed)
            .finish()
    }
}

enum Token<'t> {
    Terminator,
    Positional,
    Flag { name: &'t str, inline: Option<&'t str> },
}

impl<'t> Token<'t> {
    fn classify(token: &'t str) -> Result<Self, ParseError> {
        let stripped = match token.strip_prefix('-') {
            Some(stripped) if !stripped.is_empty() => stripped,
            _ => return Ok(Token::Positional),
        };
        let stripped = match stripped.strip_prefix('-') {
            Some("") => return Ok(Token::Terminator),
            Some(stripped) => stripped,
            None => stripped,
        };

        if stripped.is_empty() || stripped.starts_with('-') || stripped.starts_with('=') {
            return Err(ParseError::BadSyntax(token.to_string()));
        }

        Ok(match stripped.split_once('=') {
            Some((name, inline)) => Token::Flag {
                name,
                inline: Some(inline),
            },
            None => Token::Flag {
                name: stripped,
                inline: None,
            },
        })
    }
}

impl FlagSet {
    fn with_interface(program: impl Into<String>, user_interface: Box<dyn UserInterface>) -> Self {
        Self {
            program: program.into(),
            flags: BTreeMap::default(),
            alias_usage: AliasUsage::default(),
            args: Vec::default(),
            parsed: false,
            deferred_error: None,
            printer: Printer::terminal(),
            user_interface,
        }
    }

    /// Create an empty flag set, displaying its usage and errors on the console.
    pub fn new(program: impl Into<String>) -> Self {
        Self::with_interface(program, Box::new(ConsoleInterface::default()))
    }

    /// *Available using 'unit_test' crate feature only.*</br></br>
    /// Create an empty flag set which captures its usage and errors in a [`Transcript`].
    ///
    /// ### Example
    /// ```
    /// # #[cfg(feature = "unit_test")]
    /// # {
    /// use multiflag::FlagSet;
    ///
    /// let (mut flags, transcript) = FlagSet::in_memory("program");
    /// flags.parse_tokens(&["-unknown"]).unwrap_err();
    ///
    /// assert!(transcript.errors().starts_with("flag provided but not defined: -unknown"));
    /// # }
    /// ```
    #[cfg(any(test, feature = "unit_test"))]
    pub fn in_memory(program: impl Into<String>) -> (Self, Transcript) {
        let transcript = Transcript::default();
        let mut flag_set = Self::with_interface(program, Box::new(transcript.interface()));
        flag_set.printer = Printer::new(None);
        (flag_set, transcript)
    }

    /// Document aliases registered from here on with `alias_usage`.
    pub fn alias_usage(mut self, alias_usage: AliasUsage) -> Self {
        self.alias_usage = alias_usage;
        self
    }

    /// Replace the alias usage for aliases registered from here on.
    /// The usage text of aliases already registered is left untouched.
    pub fn set_alias_usage(&mut self, alias_usage: AliasUsage) {
        self.alias_usage = alias_usage;
    }

    /// The program name, as shown in the usage text.
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Describe the flag registered under `name`, if any.
    pub fn lookup(&self, name: &str) -> Option<FlagDescription> {
        self.flags.get(name).map(|flag| FlagDescription {
            name: name.to_string(),
            default: flag.value.display(),
            usage: flag.usage.clone(),
            argument_free: flag.value.is_argument_free(),
        })
    }

    /// The tokens remaining after the flags have been parsed.
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Whether [`FlagSet::parse_tokens`] has been called.
    pub fn parsed(&self) -> bool {
        self.parsed
    }

    /// The usage text: every registered name, sorted, with its default and usage.
    pub fn usage(&self) -> String {
        self.printer.render(
            &self.program,
            self.flags.iter().map(|(name, flag)| UsageLine {
                name,
                display: flag.value.display(),
                usage: &flag.usage,
            }),
        )
    }

    /// Run the flag set against the input tokens (not including the program name).
    ///
    /// Each flag occurrence is dispatched to its value, in order.
    /// On error, the error and the usage text are displayed.
    /// If the help flag (`-h` or `-help`) is given and not otherwise registered, the usage text is displayed and [`ParseError::Help`] is returned.
    ///
    /// ### Example
    /// ```
    /// use multiflag::FlagSet;
    ///
    /// let mut flags = FlagSet::new("program");
    /// flags.parse_tokens(&[]).unwrap();
    ///
    /// assert!(flags.parsed());
    /// assert!(flags.args().is_empty());
    /// ```
    pub fn parse_tokens(&mut self, tokens: &[&str]) -> Result<(), ParseError> {
        self.parsed = true;

        match self.consume(tokens) {
            Ok(()) => Ok(()),
            Err(ParseError::Help) => {
                self.user_interface.print(self.usage());
                Err(ParseError::Help)
            }
            Err(error) => {
                self.user_interface.print_error(error.to_string());
                self.user_interface.print_error(self.usage());
                Err(error)
            }
        }
    }

    /// Run the flag set against the Cli [`env::args`].
    ///
    /// If the help flag is encountered, exits with code `0` after displaying the usage text.
    /// On any other error, exits with code `2` (via [`std::process::exit`]).
    pub fn parse(&mut self) {
        let tokens: Vec<String> = env::args().skip(1).collect();

        match self.parse_tokens(
            tokens
                .iter()
                .map(AsRef::as_ref)
                .collect::<Vec<&str>>()
                .as_slice(),
        ) {
            Ok(()) => {}
            Err(ParseError::Help) => std::process::exit(0),
            Err(_) => std::process::exit(2),
        }
    }

    fn consume(&mut self, tokens: &[&str]) -> Result<(), ParseError> {
        if let Some(error) = &self.deferred_error {
            return Err(error.clone().into());
        }

        self.args.clear();
        let mut token_iter = tokens.iter();

        while let Some(token) = token_iter.next() {
            match Token::classify(*token)? {
                Token::Terminator => break,
                Token::Positional => {
                    self.args.push(token.to_string());
                    break;
                }
                Token::Flag { name, inline } => self.dispatch(name, inline, &mut token_iter)?,
            }
        }

        self.args.extend(token_iter.map(|token| token.to_string()));
        Ok(())
    }

    fn dispatch<'t>(
        &mut self,
        name: &str,
        inline: Option<&'t str>,
        token_iter: &mut std::slice::Iter<'_, &'t str>,
    ) -> Result<(), ParseError> {
        let flag = match self.flags.get_mut(name) {
            Some(flag) => flag,
            None if name == HELP_NAME || name == HELP_SHORT => return Err(ParseError::Help),
            None => return Err(ParseError::Undefined(name.to_string())),
        };

        let argument = match inline {
            Some(argument) => argument,
            None if flag.value.is_argument_free() => ARGUMENT_FREE_TOKEN,
            None => token_iter
                .next()
                .copied()
                .ok_or_else(|| ParseError::MissingArgument(name.to_string()))?,
        };

        #[cfg(feature = "tracing_debug")]
        {
            debug!("Dispatching '{argument}' to flag '{name}'.");
        }

        flag.value.set(argument);
        Ok(())
    }
}

impl Registrar for FlagSet {
    fn register(&mut self, name: &str, value: Box<dyn FlagValue>, usage: String) {
        #[cfg(feature = "tracing_debug")]
        {
            debug!("Registering flag '{name}' on '{}'.", self.program);
        }

        if self.flags.contains_key(name) {
            self.deferred_error
                .get_or_insert_with(|| ConfigError(format!("flag redefined: {name}")));
            return;
        }

        self.flags
            .insert(name.to_string(), Flag { usage, value });
    }

    fn describe_alias(&self, canonical: &str, alias: &str) -> String {
        self.alias_usage.describe(canonical, alias)
    }
}
