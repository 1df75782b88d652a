//! Developer tasks (schema generation, explanation coverage).
//!
//! Keeping this separate avoids bloating the end-user CLI.

use anyhow::{Context, bail};
use schemars::schema_for;
use std::fs;
use std::path::PathBuf;

/// Get the project root (parent of xtask directory).
fn project_root() -> anyhow::Result<PathBuf> {
    let manifest_dir = match std::env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => std::env::current_dir().context("Cannot determine current directory")?,
    };

    // If we're in the xtask directory, go up one level
    if manifest_dir.ends_with("xtask")
        && let Some(parent) = manifest_dir.parent()
    {
        return Ok(parent.to_path_buf());
    }
    Ok(manifest_dir)
}

/// Schema definition with its target filename.
struct SchemaSpec {
    filename: &'static str,
    generate: fn() -> schemars::Schema,
}

fn schema_specs() -> Vec<SchemaSpec> {
    vec![
        SchemaSpec {
            filename: "blockaudit.request.v1.json",
            generate: || schema_for!(blockaudit_types::AuditRequest),
        },
        SchemaSpec {
            filename: "blockaudit.result.v1.json",
            generate: || schema_for!(blockaudit_types::AuditResult),
        },
        SchemaSpec {
            filename: "blockaudit.config.v1.json",
            generate: || schema_for!(blockaudit_settings::BlockauditConfigV1),
        },
    ]
}

/// Serialize a schema to pretty-printed JSON with trailing newline.
fn serialize_schema(schema: &schemars::Schema) -> anyhow::Result<String> {
    let mut json = serde_json::to_string_pretty(schema).context("Failed to serialize schema")?;
    json.push('\n');
    Ok(json)
}

/// Emit schemas to the schemas/ directory.
fn emit_schemas() -> anyhow::Result<()> {
    let dir = project_root()?.join("schemas");
    fs::create_dir_all(&dir).context("Failed to create schemas directory")?;

    for spec in schema_specs() {
        let json = serialize_schema(&(spec.generate)())?;
        let path = dir.join(spec.filename);
        fs::write(&path, &json)
            .with_context(|| format!("Failed to write schema to {}", path.display()))?;
        println!("Wrote {}", path.display());
    }

    println!("\nSchemas emitted successfully.");
    Ok(())
}

/// Every rule id must have a complete explanation whose examples are valid JSON.
fn explain_coverage() -> anyhow::Result<()> {
    let mut errors = Vec::new();

    for rule_id in blockaudit_types::explain::all_rule_ids() {
        let Some(exp) = blockaudit_types::lookup_explanation(rule_id) else {
            errors.push(format!("{rule_id}: no explanation"));
            continue;
        };
        if exp.title.is_empty() || exp.description.is_empty() || exp.remediation.is_empty() {
            errors.push(format!("{rule_id}: incomplete explanation"));
        }
        for (label, example) in [("before", exp.examples.before), ("after", exp.examples.after)] {
            if let Err(err) = serde_json::from_str::<serde_json::Value>(example) {
                errors.push(format!("{rule_id}: {label} example is not JSON: {err}"));
            }
        }
    }

    if errors.is_empty() {
        println!("All rule ids have explanations.");
        return Ok(());
    }
    for err in &errors {
        eprintln!("  - {err}");
    }
    bail!("Explanation coverage failed")
}

fn print_help() {
    eprintln!("xtask commands:");
    eprintln!("  help              Show this message");
    eprintln!("  emit-schemas      Generate JSON schemas from Rust types to schemas/");
    eprintln!("  explain-coverage  Validate all rule ids have explanations");
}

fn main() -> anyhow::Result<()> {
    let cmd = std::env::args().nth(1).unwrap_or_else(|| "help".to_string());
    match cmd.as_str() {
        "help" | "--help" | "-h" => {
            print_help();
            Ok(())
        }
        "emit-schemas" => emit_schemas(),
        "explain-coverage" => explain_coverage(),
        other => {
            print_help();
            bail!("unknown xtask command: {other}")
        }
    }
}
