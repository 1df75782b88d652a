//! CLI entry point for blockaudit.
//!
//! This module is intentionally thin: it handles argument parsing, I/O, and exit codes.
//! All business logic lives in the `blockaudit-app` crate.

use anyhow::Context;
use blockaudit_app::{
    ExplainOutput, decode_request, format_explanation, format_not_found, format_rule_list,
    render_markdown, run_audit, run_explain, serialize_result, status_exit_code,
};
use blockaudit_settings::{EffectiveSettings, Overrides};
use blockaudit_types::AuditRequest;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand, ValueEnum};
use std::io::{Read, Write};

mod logging;

#[derive(Parser, Debug)]
#[command(
    name = "blockaudit",
    version,
    about = "Accessibility and content-quality audits for CMS block content"
)]
struct Cli {
    /// Path to blockaudit config TOML (a missing file means defaults).
    #[arg(long, default_value = "blockaudit.toml")]
    config: Utf8PathBuf,

    /// Override profile (strict|accessibility|content).
    #[arg(long)]
    profile: Option<String>,

    /// Override the deepest content nesting accepted.
    #[arg(long)]
    max_depth: Option<u32>,

    /// Override the largest content (in bytes) a request may carry.
    #[arg(long)]
    max_content_bytes: Option<u64>,

    /// Log filter (e.g. `debug` or `blockaudit_domain=debug`). Defaults to $BLOCKAUDIT_LOG.
    #[arg(long)]
    log_level: Option<String>,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Audit one page and print the result.
    Audit {
        /// Request envelope JSON (`{"content": "...", "activeRules": [...]}`); `-` reads stdin.
        #[arg(long, conflicts_with = "content")]
        request: Option<Utf8PathBuf>,

        /// Raw content tree JSON; `-` reads stdin.
        #[arg(long)]
        content: Option<Utf8PathBuf>,

        /// Rule id to run against `--content` (repeatable). Defaults to the profile's rules.
        #[arg(long = "rule", value_name = "RULE_ID", requires = "content")]
        rules: Vec<String>,

        /// Run only the `--rule` ids given, even when there are none.
        #[arg(long, requires = "content")]
        no_default_rules: bool,

        /// Output format.
        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,

        /// Where to write the output (stdout if not specified).
        #[arg(long, short)]
        out: Option<Utf8PathBuf>,
    },

    /// Explain a rule id with remediation guidance.
    Explain {
        /// The rule id (e.g., "alt_text") to explain.
        identifier: String,
    },

    /// List the known rule ids.
    Rules,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Json,
    Markdown,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init_tracing(cli.log_level.as_deref());

    match cli.cmd {
        Commands::Audit {
            ref request,
            ref content,
            ref rules,
            no_default_rules,
            format,
            ref out,
        } => cmd_audit(
            &cli,
            request.as_deref(),
            content.as_deref(),
            rules.clone(),
            no_default_rules,
            format,
            out.as_deref(),
        ),
        Commands::Explain { ref identifier } => cmd_explain(identifier),
        Commands::Rules => {
            print!("{}", format_rule_list());
            Ok(())
        }
    }
}

fn cmd_audit(
    cli: &Cli,
    request_path: Option<&Utf8Path>,
    content_path: Option<&Utf8Path>,
    rules: Vec<String>,
    no_default_rules: bool,
    format: OutputFormat,
    out: Option<&Utf8Path>,
) -> anyhow::Result<()> {
    let result = (|| -> anyhow::Result<i32> {
        let settings = load_settings(cli)?;

        let request = match content_path {
            Some(path) => AuditRequest {
                content: read_input(path)?,
                active_rules: (no_default_rules || !rules.is_empty()).then_some(rules),
            },
            None => {
                let path = request_path.unwrap_or(Utf8Path::new("-"));
                let text = read_input(path)?;
                decode_request(&text).with_context(|| format!("decode request: {path}"))?
            }
        };

        let output = run_audit(&request, &settings)?;

        let bytes = match format {
            OutputFormat::Json => serialize_result(&output.result)?,
            OutputFormat::Markdown => render_markdown(&output).into_bytes(),
        };
        match out {
            Some(path) => write_file(path, &bytes)?,
            None => std::io::stdout()
                .write_all(&bytes)
                .context("write report to stdout")?,
        }

        Ok(status_exit_code(output.result.status))
    })();

    match result {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
            Ok(())
        }
        Err(err) => {
            eprintln!("blockaudit error: {err:#}");
            std::process::exit(1);
        }
    }
}

/// Load config if present; a missing file is allowed (defaults apply).
fn load_settings(cli: &Cli) -> anyhow::Result<EffectiveSettings> {
    let cfg_text = match std::fs::read_to_string(&cli.config) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(path = %cli.config, "no config file; using defaults");
            String::new()
        }
        Err(err) => {
            return Err(err).with_context(|| format!("read config: {}", cli.config));
        }
    };

    let cfg = if cfg_text.trim().is_empty() {
        blockaudit_settings::BlockauditConfigV1::default()
    } else {
        blockaudit_settings::parse_config_toml(&cfg_text)
            .with_context(|| format!("parse config: {}", cli.config))?
    };

    let overrides = Overrides {
        profile: cli.profile.clone(),
        max_depth: cli.max_depth,
        max_content_bytes: cli.max_content_bytes,
    };

    let resolved = blockaudit_settings::resolve_config(cfg, overrides).context("resolve config")?;
    Ok(resolved.effective)
}

fn read_input(path: &Utf8Path) -> anyhow::Result<String> {
    if path.as_str() == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("read stdin")?;
        return Ok(text);
    }
    std::fs::read_to_string(path).with_context(|| format!("read input: {path}"))
}

fn write_file(path: &Utf8Path, data: &[u8]) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_str().is_empty()
    {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {parent}"))?;
    }
    std::fs::write(path, data).with_context(|| format!("write output: {path}"))?;
    Ok(())
}

fn cmd_explain(identifier: &str) -> anyhow::Result<()> {
    match run_explain(identifier) {
        ExplainOutput::Found(exp) => {
            print!("{}", format_explanation(&exp));
            Ok(())
        }
        ExplainOutput::NotFound {
            identifier,
            available_rule_ids,
        } => {
            eprint!("{}", format_not_found(&identifier, available_rule_ids));
            std::process::exit(1);
        }
    }
}
