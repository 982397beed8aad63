//! locale-parse - validates locale identifiers and prints their components
//!
//! Usage:
//!   locale-parse zh_CN _CN_var           # Parse identifiers given as arguments
//!   locale-parse --lookup zh_CN_var      # Also print the lookup list for each
//!   cat locales.txt | locale-parse       # Parse one identifier per stdin line
//!
//! Optional environment variables:
//! - LOCALE_OUTPUT_FORMAT (text or json, defaults to text)
//! - LOCALE_FAIL_FAST (defaults to false)
//! - LOCALE_DEFAULT (default locale appended to lookup lists)

use anyhow::{bail, Context, Result};
use locale_parser::config::{Config, OutputFormat};
use locale_parser::{lookup_list, parse_locale, Locale, ParseReport};
use std::io::{self, BufRead, Write};
use tracing::{info, warn};

fn main() -> Result<()> {
    // Load .env file (ignored when absent)
    let _ = dotenvy::dotenv();

    // Initialize logging (stderr, so stdout stays machine readable)
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("locale_parser=info".parse()?)
                .add_directive("locale_parse=info".parse()?),
        )
        .init();

    let config = Config::from_env()?;
    info!(
        "Loaded config: format={:?}, fail_fast={}, default={}",
        config.output_format,
        config.fail_fast,
        config.default_locale.as_ref().map(Locale::to_string).unwrap_or_default()
    );

    let args: Vec<String> = std::env::args().skip(1).collect();
    let with_lookup = args.iter().any(|a| a == "--lookup");
    let mut inputs: Vec<String> = args.into_iter().filter(|a| a != "--lookup").collect();

    if inputs.is_empty() {
        info!("No identifiers given, reading from stdin");
        inputs = read_lines(io::stdin().lock())?;
    }

    info!("Parsing {} identifiers", inputs.len());
    let report = parse_inputs(&inputs, config.fail_fast);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match config.output_format {
        OutputFormat::Text => write_text(&mut out, &report, with_lookup, &config)?,
        OutputFormat::Json => write_json(&mut out, &report, with_lookup, &config)?,
    }
    out.flush().context("Failed to flush stdout")?;

    if report.has_rejections() {
        warn!(
            "{} of {} identifiers rejected",
            report.rejected.len(),
            report.len()
        );
        bail!("{} invalid locale identifier(s)", report.rejected.len());
    }

    info!("✓ All {} identifiers valid", report.len());
    Ok(())
}

/// Read one identifier per line, skipping blank lines.
fn read_lines(reader: impl BufRead) -> Result<Vec<String>> {
    let mut inputs = Vec::new();
    for line in reader.lines() {
        let line = line.context("Failed to read identifier from stdin")?;
        let line = line.trim_end_matches(['\r', '\n']);
        if !line.is_empty() {
            inputs.push(line.to_string());
        }
    }
    Ok(inputs)
}

fn parse_inputs(inputs: &[String], fail_fast: bool) -> ParseReport {
    if !fail_fast {
        return ParseReport::parse_all(inputs);
    }

    let mut report = ParseReport::new();
    for input in inputs {
        report.record(input, parse_locale(Some(input.as_str())));
        if report.has_rejections() {
            warn!("Stopping at first invalid identifier '{}'", input);
            break;
        }
    }
    report
}

fn write_text(
    out: &mut impl Write,
    report: &ParseReport,
    with_lookup: bool,
    config: &Config,
) -> Result<()> {
    for accepted in &report.accepted {
        let locale = &accepted.locale;
        writeln!(
            out,
            "ok  {} -> language={} country={} variant={}",
            accepted.input,
            locale.language(),
            locale.country(),
            locale.variant()
        )?;

        if with_lookup {
            let list: Vec<String> = lookup_list(Some(locale), config.default_locale.as_ref())
                .iter()
                .map(Locale::to_string)
                .collect();
            writeln!(out, "    lookup: {}", list.join(", "))?;
        }
    }

    for rejected in &report.rejected {
        writeln!(out, "err {} -> {}", rejected.input, rejected.error)?;
    }

    Ok(())
}

fn write_json(
    out: &mut impl Write,
    report: &ParseReport,
    with_lookup: bool,
    config: &Config,
) -> Result<()> {
    let mut value = serde_json::to_value(report).context("Failed to serialize report")?;

    if with_lookup {
        let lookups: serde_json::Map<String, serde_json::Value> = report
            .accepted
            .iter()
            .map(|accepted| {
                let list = lookup_list(Some(&accepted.locale), config.default_locale.as_ref());
                (accepted.input.clone(), serde_json::json!(list))
            })
            .collect();
        value["lookup"] = serde_json::Value::Object(lookups);
    }

    serde_json::to_writer_pretty(&mut *out, &value).context("Failed to write JSON output")?;
    writeln!(out)?;
    Ok(())
}
