use crate::cli::output::to_json;
use crate::conf::{NormalizationConfig, load_config};
use crate::normalization::RejectReason;
use crate::target::{RequestTarget, parse_for_client, parse_for_server_with};
use clap::Args;
use owo_colors::OwoColorize;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct TargetArgs {
    /// Raw request target, e.g. `/a/../b?c`
    pub raw: String,

    /// Parse as a client-supplied URI instead of a server request line
    #[arg(long)]
    pub client: bool,

    /// Path prefix prepended to client origin-form targets
    #[arg(long, requires = "client")]
    pub prefix: Option<String>,

    /// Keep `;` and matrix variables in server paths
    #[arg(long)]
    pub allow_semicolon: bool,

    /// Normalization config file (HCL)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Render coloured text instead of JSON
    #[arg(long)]
    pub plain: bool,
}

#[derive(Debug, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum TargetReport {
    Accept {
        canonical: String,
        target: RequestTarget,
    },
    Reject {
        reason: RejectReason,
        message: String,
    },
}

impl TargetReport {
    pub fn is_reject(&self) -> bool {
        matches!(self, TargetReport::Reject { .. })
    }
}

/// Prints the parsed target. Returns `false` when the target was rejected.
pub fn run(args: TargetArgs) -> anyhow::Result<bool> {
    let config = match &args.config {
        Some(path) => load_config(path)?,
        None => NormalizationConfig::default(),
    };

    let report = inspect(&args, &config);
    if args.plain {
        println!("{}", render_plain(&report));
    } else {
        println!("{}", to_json(&report)?);
    }
    Ok(!report.is_reject())
}

pub fn inspect(args: &TargetArgs, config: &NormalizationConfig) -> TargetReport {
    let parsed = if args.client {
        parse_for_client(&args.raw, args.prefix.as_deref())
    } else {
        let mut options = config.target;
        options.allow_semicolon_in_path |= args.allow_semicolon;
        parse_for_server_with(&args.raw, &options)
    };

    match parsed {
        Ok(target) => TargetReport::Accept {
            canonical: target.to_string(),
            target,
        },
        Err(reason) => TargetReport::Reject {
            reason,
            message: reason.to_string(),
        },
    }
}

pub fn render_plain(report: &TargetReport) -> String {
    match report {
        TargetReport::Accept { canonical, target } => {
            let mut out = format!("{} {}\n", "accept".green().bold(), canonical);
            out.push_str(&format!("  form:  {:?}\n", target.form()));
            if let Some(authority) = target.authority() {
                out.push_str(&format!("  authority: {authority}\n"));
            }
            out.push_str(&format!("  path:  {}", target.path()));
            if let Some(query) = target.query() {
                out.push_str(&format!("\n  query: {query}"));
            }
            if let Some(fragment) = target.fragment() {
                out.push_str(&format!("\n  fragment: {fragment}"));
            }
            out
        }
        TargetReport::Reject { message, .. } => {
            format!("{} {}", "reject".red().bold(), message)
        }
    }
}
