//! `multiflag` handles repeated command line flags.
//!
//! Most flag parsers overwrite a flag's value each time the flag occurs.
//! A `multiflag` [`Accumulator`] instead keeps every occurrence, in one of two modes:
//! * *Counting* ([`Counter`]): the flag takes no argument, and repeated use implies greater intensity.
//! For example, `-v -v -v` is a verbosity of `3`.
//! * *Collecting* ([`Collector`]): the flag takes an argument on each occurrence, and the arguments are collected in order.
//! For example, `-t parse -t compile` collects `["parse", "compile"]`.
//!
//! Either kind of accumulator may be registered under any number of aliases.
//! Occurrences under the canonical name and under any alias all accumulate together.
//!
//! # Usage
//! ```no_run
#![doc = include_str!("../demos/multiflag.rs")]
//! ```
//!
//! ```console
//! $ multiflag -v -v -verbose --verbose -t parse -trace compile
//! Verbosity: 4
//! Tracing: parse
//! Tracing: compile
//!
//! $ multiflag -h
//! Usage of multiflag:
//!   -t=none: Alias for trace
//!   -trace=none: Trace program sections
//!   -v=false: Alias for verbose
//!   -verbose=false: Verbosity. Repeat as necessary
//! ```
//!
//! # Registrars
//! Accumulators are registered with a [`Registrar`](prelude::Registrar).
//! `multiflag` provides two:
//! * [`CommandLine`]: the process-wide registrar, used via [`counter`], [`collector`] and [`parse`].
//! * [`FlagSet`]: a local registrar, useful for sub-commands or tests.
//!
//! ```
//! use multiflag::{Collector, Counter, FlagSet};
//!
//! let mut flags = FlagSet::new("sub-command");
//! let verbosity = Counter::register(&mut flags, "verbose", "false", "Verbosity. Repeat as necessary", &["v"]);
//! let trace = Collector::register(&mut flags, "trace", "none", "Trace program sections", &["t"]);
//!
//! flags.parse_tokens(&["-v", "-v", "-t", "parse"]).unwrap();
//!
//! assert_eq!(verbosity.count(), 2);
//! assert_eq!(trace.values(), vec!["parse"]);
//! ```
//!
//! Any other flag parser may host accumulators by implementing `Registrar`, and dispatching each occurrence via [`FlagValue::set`](prelude::FlagValue::set).
//!
//! # Alias usage
//! Each alias is documented in the usage text via an [`AliasUsage`], by default `"Alias for CANONICAL"`.
//! The alias usage is configuration of the registrar; see [`FlagSet::alias_usage`] and [`set_alias_usage`].
//! Usage text is generated at registration, so set the alias usage before registering any aliases.
//!
//! # Cli Semantics
//! [`FlagSet`] parses the Cli tokens according to the following set of rules.
//! * Flags are specified via `-NAME` or `--NAME`; both are equivalent.
//! * An argument may be given inline via `-NAME=VALUE`; only the first `=` separates.
//! For example, `-t=a=b` collects `a=b`.
//! * A [`Collector`] otherwise takes the following token, whatever it looks like.
//! For example, `-t -v` collects `-v`.
//! * A [`Counter`] never takes the following token.
//! * Flag parsing stops at the first non-flag token (including `-`), or just after the terminator `--`.
//! The remaining tokens are available via [`FlagSet::args`].
//! * `-h` and `-help` display the usage text, unless registered as flags.
//!
//! # Features
//! * `tracing_debug`: Emit `tracing` debug events during registration and parsing.
//! * `unit_test`: For features that help with unit testing.
#![deny(missing_docs)]
mod api;
mod model;
mod parser;
pub mod prelude;

pub use api::*;
pub use model::*;
pub use parser::*;

#[cfg(test)]
#[macro_use]
extern crate assert_matches;

#[cfg(test)]
pub(crate) mod test {
    macro_rules! assert_contains {
        ($base:expr, $sub:expr) => {
            assert!(
                $base.contains($sub),
                "'{b}' does not contain '{s}'",
                b = $base,
                s = $sub,
            );
        };
    }

    pub(crate) use assert_contains;
}
