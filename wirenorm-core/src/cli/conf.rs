use crate::conf::{ConfigError, NormalizationConfig, load_config};
use clap::Subcommand;
use owo_colors::OwoColorize;
use std::error::Error;
use std::path::PathBuf;

#[derive(Subcommand, Debug)]
pub enum ConfigCmd {
    /// Validate a configuration file and print the effective options
    Check {
        /// Path to the config file
        #[arg(default_value = "wirenorm.hcl")]
        path: PathBuf,

        /// Print errors without colour
        #[arg(short, long, default_value = "false")]
        plain: bool,
    },
}

/// Returns `false` when the configuration could not be loaded.
pub fn run(cmd: ConfigCmd) -> bool {
    match cmd {
        ConfigCmd::Check { path, plain } => check(path, plain),
    }
}

pub fn check(path: PathBuf, plain: bool) -> bool {
    match load_config(&path) {
        Ok(cfg) => {
            print!("{}", render_summary(&cfg));
            true
        }
        Err(err) => {
            eprintln!("{}", render_error(&err, plain));
            false
        }
    }
}

pub fn render_summary(cfg: &NormalizationConfig) -> String {
    format!(
        "✔ Config loaded successfully\n\
         ✔ allow_semicolon_in_path = {}\n\
         ✔ allow_double_dots_in_query = {}\n\
         ✔ http1_header_naming = {:?}\n",
        cfg.target.allow_semicolon_in_path,
        cfg.target.allow_double_dots_in_query,
        cfg.headers.http1_header_naming,
    )
}

pub fn render_error(err: &ConfigError, plain: bool) -> String {
    let mut out = if plain {
        format!("error: {err}")
    } else {
        format!("{}: {err}", "error".red().bold())
    };

    let mut source = err.source().and_then(|s| s.source());
    while let Some(cause) = source {
        out.push_str(&format!("\n  caused by: {cause}"));
        source = cause.source();
    }
    out
}
