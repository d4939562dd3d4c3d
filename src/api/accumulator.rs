use std::cell::RefCell;
use std::rc::Rc;

use crate::model::{Collecting, Counting, Mode, Occurrences};
use crate::prelude::{FlagValue, Registrar};

/// A flag that accumulates every occurrence instead of overwriting a single value.
///
/// The mode `M` is either [`Counting`] (see [`Counter`]) or [`Collecting`] (see [`Collector`]).
///
/// An `Accumulator` is a handle: clones share the same record of occurrences.
/// The registrar keeps one handle per registered name, so occurrences under the canonical name and under any alias all land in the same record.
pub struct Accumulator<M: Mode> {
    record: Rc<RefCell<M::Record>>,
    display: Rc<str>,
}

/// An accumulator which counts occurrences of an argument-free flag (ex: `-v -v -v`).
pub type Counter = Accumulator<Counting>;

/// An accumulator which collects the argument of every occurrence (ex: `-t parse -t compile`).
pub type Collector = Accumulator<Collecting>;

impl<M: Mode> Accumulator<M> {
    /// Create an accumulator and register it, under `name` and each of `aliases`, with the `registrar`.
    ///
    /// The `default` is only ever displayed in the usage text.
    /// Each alias is documented via the registrar's [`AliasUsage`](crate::AliasUsage).
    /// Conflicting names are reported by the registrar, not here.
    ///
    /// ### Example
    /// ```
    /// use multiflag::{Collector, Counter, FlagSet};
    ///
    /// let mut flags = FlagSet::new("program");
    /// let verbosity = Counter::register(&mut flags, "verbose", "false", "Verbosity. Repeat as necessary", &["v"]);
    /// let trace = Collector::register(&mut flags, "trace", "none", "Trace program sections", &["t"]);
    ///
    /// flags.parse_tokens(&["-v", "-t", "parse", "-verbose", "-trace", "compile"]).unwrap();
    ///
    /// assert_eq!(verbosity.count(), 2);
    /// assert_eq!(trace.values(), vec!["parse", "compile"]);
    /// ```
    pub fn register(
        registrar: &mut (impl Registrar + ?Sized),
        name: impl Into<String>,
        default: impl Into<String>,
        usage: impl Into<String>,
        aliases: &[&str],
    ) -> Self {
        let name: String = name.into();
        let default: String = default.into();
        let accumulator = Self {
            record: Rc::default(),
            display: Rc::from(default),
        };
        registrar.register(&name, Box::new(accumulator.clone()), usage.into());

        for alias in aliases {
            let alias_usage = registrar.describe_alias(&name, alias);
            registrar.register(alias, Box::new(accumulator.clone()), alias_usage);
        }

        accumulator
    }

    /// The default value, as displayed in the usage text.
    /// Never affected by occurrences of the flag.
    pub fn display_value(&self) -> &str {
        &self.display
    }

    /// Whether an occurrence of the flag stands alone (true for [`Counter`] only).
    pub fn is_argument_free(&self) -> bool {
        M::ARGUMENT_FREE
    }

    /// The arguments collected so far, in order of occurrence.
    /// A [`Counter`] always returns an empty `Vec`.
    pub fn values(&self) -> Vec<String> {
        self.record.borrow().values()
    }

    /// The number of times the flag occurred, under any of its names.
    pub fn count(&self) -> usize {
        self.record.borrow().count()
    }
}

impl<M: Mode> Clone for Accumulator<M> {
    fn clone(&self) -> Self {
        Self {
            record: Rc::clone(&self.record),
            display: Rc::clone(&self.display),
        }
    }
}

impl<M: Mode> std::fmt::Debug for Accumulator<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Accumulator")
            .field("record", &self.record.borrow())
            .field("display", &self.display)
            .finish()
    }
}

impl<M: Mode> FlagValue for Accumulator<M> {
    fn set(&mut self, argument: &str) {
        self.record.borrow_mut().add(argument);
    }

    fn display(&self) -> String {
        self.display.to_string()
    }

    fn is_argument_free(&self) -> bool {
        M::ARGUMENT_FREE
    }
}
