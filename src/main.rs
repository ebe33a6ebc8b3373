mod cli;

fn main() {
    let code = cli::run().unwrap_or_else(|err| {
        eprintln!("error: {:#}", err);
        2
    });
    std::process::exit(code);
}
