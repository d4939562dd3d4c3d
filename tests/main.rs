use multiflag::prelude::*;
use multiflag::{AliasUsage, Collector, Counter, FlagSet, ParseError};
use rand::{thread_rng, Rng};

#[test]
fn verbosity_scenario() {
    let mut flags = FlagSet::new("main");
    let verbosity = Counter::register(
        &mut flags,
        "verbose",
        "false",
        "Verbosity. Repeat as necessary",
        &["v"],
    );

    flags
        .parse_tokens(&["-v", "-v", "-verbose", "--verbose"])
        .unwrap();

    assert_eq!(verbosity.count(), 4);
    assert!(verbosity.values().is_empty());
}

#[test]
fn trace_scenario() {
    let mut flags = FlagSet::new("main");
    let trace = Collector::register(&mut flags, "trace", "none", "Trace program sections", &["t"]);

    flags
        .parse_tokens(&["-t", "parse", "-trace", "compile"])
        .unwrap();

    assert_eq!(trace.values(), vec!["parse", "compile"]);
    assert_eq!(trace.count(), 2);
}

#[test]
fn random_occurrences() {
    let mut flags = FlagSet::new("main");
    let verbosity = Counter::register(&mut flags, "verbose", "false", "", &["v"]);
    let trace = Collector::register(&mut flags, "trace", "none", "", &["t"]);
    let mut rng = thread_rng();
    let mut tokens: Vec<String> = Vec::default();
    let mut expected_count = 0;
    let mut expected_values: Vec<String> = Vec::default();

    for i in 0..rng.gen_range(0..100) {
        if rng.gen() {
            tokens.push(if rng.gen() { "-v" } else { "--verbose" }.to_string());
            expected_count += 1;
        } else {
            let value = format!("item-{i}");
            tokens.push(if rng.gen() { "-t" } else { "-trace" }.to_string());
            tokens.push(value.clone());
            expected_values.push(value);
        }
    }

    flags
        .parse_tokens(
            tokens
                .iter()
                .map(AsRef::as_ref)
                .collect::<Vec<&str>>()
                .as_slice(),
        )
        .unwrap();

    assert_eq!(verbosity.count(), expected_count);
    assert!(verbosity.values().is_empty());
    assert_eq!(trace.count(), expected_values.len());
    assert_eq!(trace.values(), expected_values);
}

#[test]
fn display_invariant() {
    let mut flags = FlagSet::new("main");
    let mut trace = Collector::register(&mut flags, "trace", "none", "", &["t"]);

    flags.parse_tokens(&["-t", "a", "-trace=b"]).unwrap();
    trace.set("c");

    assert_eq!(trace.display_value(), "none");
    assert_eq!(trace.display(), "none");
    assert_eq!(flags.lookup("t").unwrap().default, "none");
    assert_eq!(trace.values(), vec!["a", "b", "c"]);
}

#[test]
fn alias_usage_applies_to_later_registrations() {
    let mut flags = FlagSet::new("main");
    Counter::register(&mut flags, "verbose", "false", "Verbosity.", &["v"]);
    flags.set_alias_usage(AliasUsage::new(|canonical, alias| {
        format!("-{alias} means -{canonical}")
    }));
    Collector::register(&mut flags, "trace", "none", "Trace.", &["t"]);

    assert_eq!(flags.lookup("v").unwrap().usage, "Alias for verbose");
    assert_eq!(flags.lookup("t").unwrap().usage, "-t means -trace");
    assert_eq!(
        flags.usage().lines().collect::<Vec<&str>>()[1..],
        [
            "  -t=none: -t means -trace",
            "  -trace=none: Trace.",
            "  -v=false: Alias for verbose",
            "  -verbose=false: Verbosity.",
        ]
    );
}

#[test]
fn undefined_flag() {
    let mut flags = FlagSet::new("main");
    let trace = Collector::register(&mut flags, "trace", "none", "", &[]);

    let error = flags.parse_tokens(&["-trace", "a", "-t", "b"]).unwrap_err();

    assert_eq!(error, ParseError::Undefined("t".to_string()));
    assert_eq!(trace.values(), vec!["a"]);
}

struct Tokens {
    registered: Vec<(String, Box<dyn FlagValue>)>,
}

impl Registrar for Tokens {
    fn register(&mut self, name: &str, value: Box<dyn FlagValue>, _usage: String) {
        self.registered.push((name.to_string(), value));
    }
}

#[test]
fn custom_registrar() {
    let mut registrar = Tokens {
        registered: Vec::default(),
    };
    let verbosity = Counter::register(&mut registrar, "verbose", "false", "", &["v", "vv"]);

    for (name, value) in registrar.registered.iter_mut() {
        assert!(value.is_argument_free(), "{name} must be argument-free");
        value.set("");
    }

    assert_eq!(verbosity.count(), 3);
}
