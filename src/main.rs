use clap::Parser;
use simple_logger::SimpleLogger;
use txlens::cli::{run, Cli};

fn main() -> std::process::ExitCode {
    if let Err(e) = SimpleLogger::new().env().init() {
        eprintln!("warning: logger init failed: {e}");
    }
    run(Cli::parse())
}
