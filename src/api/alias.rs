/// Generates the usage text of an alias, from the canonical flag name and the alias name.
///
/// The default describes every alias as `"Alias for CANONICAL"`.
/// Usage text is generated when the alias is registered, so replacing the `AliasUsage` of a registrar only affects later registrations.
///
/// ### Example
/// ```
/// use multiflag::{AliasUsage, Counter, FlagSet};
///
/// let mut flags = FlagSet::new("program")
///     .alias_usage(AliasUsage::new(|canonical, alias| format!("-{alias} is short for -{canonical}")));
/// let _verbosity = Counter::register(&mut flags, "verbose", "false", "Verbosity.", &["v"]);
///
/// assert_eq!(flags.lookup("v").unwrap().usage, "-v is short for -verbose");
/// ```
pub struct AliasUsage {
    describe: Box<dyn Fn(&str, &str) -> String>,
}

impl AliasUsage {
    /// Create an alias usage from a `(canonical, alias) -> usage` function.
    pub fn new(describe: impl Fn(&str, &str) -> String + 'static) -> Self {
        Self {
            describe: Box::new(describe),
        }
    }

    /// Describe `alias`, an alternate name of the `canonical` flag.
    pub fn describe(&self, canonical: &str, alias: &str) -> String {
        (self.describe)(canonical, alias)
    }
}

impl Default for AliasUsage {
    fn default() -> Self {
        Self::new(|canonical, _alias| format!("Alias for {canonical}"))
    }
}

impl std::fmt::Debug for AliasUsage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AliasUsage{..}").finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("verbose", "v", "Alias for verbose")]
    #[case("trace", "t", "Alias for trace")]
    #[case("trace", "tr", "Alias for trace")]
    fn default_describe(#[case] canonical: &str, #[case] alias: &str, #[case] expected: &str) {
        assert_eq!(AliasUsage::default().describe(canonical, alias), expected);
    }

    #[test]
    fn custom_describe() {
        let alias_usage = AliasUsage::new(|canonical, alias| format!("{alias} -> {canonical}"));
        assert_eq!(alias_usage.describe("verbose", "v"), "v -> verbose");
    }
}
