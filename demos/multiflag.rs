fn main() {
    let verbosity = multiflag::counter(
        "verbose",
        "false",
        "Verbosity. Repeat as necessary",
        &["v"],
    );
    let trace = multiflag::collector("trace", "none", "Trace program sections", &["t"]);

    multiflag::parse();

    println!("Verbosity: {}", verbosity.count());

    for item in trace.values() {
        println!("Tracing: {item}");
    }
}
