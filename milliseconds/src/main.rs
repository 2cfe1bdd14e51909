use clap::Parser;
use milliseconds_core::cli::analyze::{self, AnalyzeArgs};
use milliseconds_core::logging::{default_log_format, init_logging};

#[derive(Parser, Debug)]
#[command(
    name = "milliseconds",
    version,
    about = "Access log analyzer: request latency and traffic statistics as JSON"
)]
struct Cli {
    #[command(flatten)]
    args: AnalyzeArgs,
}

fn main() {
    let cli = Cli::parse();

    let format = cli.args.log_format.unwrap_or_else(default_log_format);
    init_logging(format, cli.args.debug);

    if let Err(e) = analyze::run(&cli.args) {
        eprintln!("milliseconds: {e}");
        std::process::exit(e.exit_code());
    }
}
