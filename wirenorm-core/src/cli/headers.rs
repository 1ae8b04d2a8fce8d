use crate::cli::output::to_json;
use crate::conf::{NormalizationConfig, load_config};
use crate::headers::{
    Direction, HeaderBlock, HeaderTranslator, Headers, HttpVersion, PseudoHeaders,
};
use clap::{Args, ValueEnum};
use owo_colors::OwoColorize;
use serde::Serialize;
use std::io::{self, Read};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum WireVersion {
    Http1,
    Http2,
}

impl From<WireVersion> for HttpVersion {
    fn from(v: WireVersion) -> Self {
        match v {
            WireVersion::Http1 => HttpVersion::Http1,
            WireVersion::Http2 => HttpVersion::Http2,
        }
    }
}

#[derive(Args, Debug)]
pub struct HeadersArgs {
    /// Input is an HTTP/2 header block (pseudo-headers allowed)
    #[arg(long)]
    pub http2: bool,

    /// Input belongs to a response stream
    #[arg(long)]
    pub response: bool,

    /// Input is a trailer section
    #[arg(long)]
    pub trailers: bool,

    /// Protocol of the outbound block
    #[arg(long, value_enum, default_value = "http2")]
    pub to: WireVersion,

    /// Normalization config file (HCL)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Render coloured text instead of JSON
    #[arg(long)]
    pub plain: bool,
}

#[derive(Debug, Serialize)]
pub struct HeadersReport {
    pub kind: &'static str,
    pub pseudo: PseudoHeaders,
    pub fields: Vec<(String, String)>,
    pub end_of_stream: bool,
    pub content_length_unknown: bool,
    pub wire: HeaderBlock,
}

/// Reads `name: value` lines from stdin and prints both translations.
pub fn run(args: HeadersArgs) -> anyhow::Result<()> {
    let config = match &args.config {
        Some(path) => load_config(path)?,
        None => NormalizationConfig::default(),
    };

    let mut input = String::new();
    io::stdin().read_to_string(&mut input)?;

    let report = inspect(&args, &config, &parse_header_lines(&input));
    if args.plain {
        println!("{}", render_plain(&report));
    } else {
        println!("{}", to_json(&report)?);
    }
    Ok(())
}

/// One field per non-blank line. The name ends at the first `:` that is not
/// the leading colon of a pseudo-header.
pub fn parse_header_lines(input: &str) -> HeaderBlock {
    input
        .lines()
        .map(str::trim_end)
        .filter(|line| !line.is_empty())
        .filter_map(|line| {
            let search_from = usize::from(line.starts_with(':'));
            let colon = line[search_from..].find(':')? + search_from;
            Some((line[..colon].trim(), line[colon + 1..].trim()))
        })
        .collect()
}

pub fn inspect(args: &HeadersArgs, config: &NormalizationConfig, block: &HeaderBlock) -> HeadersReport {
    let translator = HeaderTranslator::new(config.headers);
    let inbound = if args.http2 {
        HttpVersion::Http2
    } else {
        HttpVersion::Http1
    };
    let is_request = !args.response;

    let canonical = translator.to_canonical(block, inbound, is_request, false);
    let direction = if args.trailers {
        Direction::Trailers
    } else if is_request {
        Direction::Request
    } else {
        Direction::Response
    };
    let headers = canonical.headers();
    let wire = translator.to_wire(headers, args.to.into(), direction);

    HeadersReport {
        kind: canonical.kind(),
        pseudo: headers.pseudo().clone(),
        fields: field_pairs(headers),
        end_of_stream: headers.is_end_of_stream(),
        content_length_unknown: headers.is_content_length_unknown(),
        wire,
    }
}

fn field_pairs(headers: &Headers) -> Vec<(String, String)> {
    headers
        .fields()
        .map(|(name, value)| (name.as_str().to_string(), value.to_string()))
        .collect()
}

pub fn render_plain(report: &HeadersReport) -> String {
    let mut out = format!("{} {}\n", "canonical".green().bold(), report.kind);
    let pseudo = &report.pseudo;
    for (name, value) in [
        (":method", &pseudo.method),
        (":scheme", &pseudo.scheme),
        (":authority", &pseudo.authority),
        (":path", &pseudo.path),
        (":protocol", &pseudo.protocol),
        (":status", &pseudo.status),
    ] {
        if let Some(value) = value {
            out.push_str(&format!("  {}: {value}\n", name.magenta()));
        }
    }
    for (name, value) in &report.fields {
        out.push_str(&format!("  {}: {value}\n", name.cyan()));
    }
    if report.content_length_unknown {
        out.push_str(&format!("  {}\n", "(content length unknown)".dimmed()));
    }

    out.push_str(&format!("{}\n", "wire".green().bold()));
    for (name, value) in report.wire.iter() {
        out.push_str(&format!("  {}: {value}\n", name.cyan()));
    }
    out.trim_end().to_string()
}
