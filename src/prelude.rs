//! Traits which, typically, may be imported without concern: `use multiflag::prelude::*`.

use crate::api::AliasUsage;

/// Behaviour of a value bound to one or more flags.
///
/// The registrar calls [`FlagValue::set`] once for every occurrence of any of the flag's names.
// Needs to be imported in order to call `set` directly.
pub trait FlagValue {
    /// Record an occurrence of the flag with its argument text.
    ///
    /// Argument-free flags receive `"true"`, unless an inline `-name=value` was given.
    fn set(&mut self, argument: &str);

    /// The default value, as displayed in the usage text.
    fn display(&self) -> String;

    /// Whether an occurrence of the flag stands alone, without consuming a following token.
    fn is_argument_free(&self) -> bool {
        false
    }
}

/// Behaviour of a flag registration back-end.
// Needs to be imported in order to implement a custom `Registrar`.
pub trait Registrar {
    /// Bind `name` to `value`, with `usage` documenting it in the usage text.
    fn register(&mut self, name: &str, value: Box<dyn FlagValue>, usage: String);

    /// The usage text for `alias`, an alternate name of the `canonical` flag.
    fn describe_alias(&self, canonical: &str, alias: &str) -> String {
        AliasUsage::default().describe(canonical, alias)
    }
}
