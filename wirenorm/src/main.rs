use clap::{Parser, Subcommand};
use std::process::ExitCode;
use wirenorm_core::cli;
use wirenorm_core::cli::conf::ConfigCmd;
use wirenorm_core::cli::headers::HeadersArgs;
use wirenorm_core::cli::target::TargetArgs;
use wirenorm_core::logging::{LogMode, default_log_mode, init_logging};

#[derive(Parser, Debug)]
#[command(
    name = "wirenorm",
    version,
    about = "Wirenorm: HTTP request-target and header normalization"
)]
struct Cli {
    /// Log format (defaults to pretty on a terminal, raw JSON otherwise)
    #[arg(long, global = true, value_enum)]
    log: Option<LogMode>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse a request target and print its canonical form
    Target(TargetArgs),

    /// Translate a header block read from stdin
    Headers(HeadersArgs),

    /// Parse a directive list such as a Cache-Control value
    Directives {
        value: String,

        #[arg(long)]
        plain: bool,
    },

    /// Configuration tooling
    Config {
        #[command(subcommand)]
        cmd: ConfigCmd,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.log.unwrap_or_else(default_log_mode));

    let result = match cli.command {
        Command::Target(args) => cli::target::run(args),
        Command::Headers(args) => cli::headers::run(args).map(|_| true),
        Command::Directives { value, plain } => cli::directives::run(&value, plain).map(|_| true),
        Command::Config { cmd } => Ok(cli::conf::run(cmd)),
    };

    match result {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("wirenorm error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
