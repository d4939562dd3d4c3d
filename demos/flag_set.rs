use multiflag::{AliasUsage, Collector, Counter, FlagSet};

fn main() {
    let mut flags = FlagSet::new("subcommand")
        .alias_usage(AliasUsage::new(|canonical, _alias| {
            format!("Short for -{canonical}")
        }));
    let verbosity = Counter::register(
        &mut flags,
        "verbose",
        "false",
        "Verbosity. Repeat as necessary",
        &["v"],
    );
    let trace = Collector::register(
        &mut flags,
        "trace",
        "none",
        "Trace program sections",
        &["t"],
    );

    flags.parse();

    println!("Verbosity: {}", verbosity.count());

    for item in trace.values() {
        println!("Tracing: {item}");
    }

    for arg in flags.args() {
        println!("Argument: {arg}");
    }
}
