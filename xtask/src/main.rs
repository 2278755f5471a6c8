//! Developer tasks (schema generation, golden reports, explain coverage).
//!
//! Keeping this separate avoids bloating the end-user CLI.

use anyhow::{Context, bail};
use bagcheck_app::{CheckInput, error_report, load_catalog, run_check};
use bagcheck_catalog::{CatalogRecord, DEFAULT_SEARCH_WINDOW};
use bagcheck_domain::RawMeasurement;
use bagcheck_test_util::normalize_nondeterministic;
use bagcheck_types::{AirlineId, AirlineSelector, BaggageCategory};
use schemars::schema_for;
use std::fs;
use std::path::PathBuf;

/// Get the project root (parent of xtask directory).
fn project_root() -> PathBuf {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    match manifest_dir.parent() {
        Some(root) => root.to_path_buf(),
        None => manifest_dir.clone(),
    }
}

fn schemas_dir() -> PathBuf {
    project_root().join("schemas")
}

fn golden_dir() -> PathBuf {
    project_root()
        .join("crates")
        .join("bagcheck-cli")
        .join("tests")
        .join("golden")
}

/// Schema definition with its target filename.
struct SchemaSpec {
    filename: &'static str,
    generate: fn() -> schemars::Schema,
}

fn schema_specs() -> Vec<SchemaSpec> {
    vec![
        SchemaSpec {
            filename: "bagcheck.report.v1.json",
            generate: || schema_for!(bagcheck_types::CheckReport),
        },
        SchemaSpec {
            filename: "bagcheck.error.v1.json",
            generate: || schema_for!(bagcheck_types::ErrorReport),
        },
        SchemaSpec {
            filename: "bagcheck.config.v1.json",
            generate: || schema_for!(bagcheck_settings::BagcheckConfigV1),
        },
        SchemaSpec {
            filename: "bagcheck.catalog.v1.json",
            generate: || schema_for!(Vec<CatalogRecord>),
        },
    ]
}

/// Serialize JSON pretty-printed with a trailing newline.
fn to_pretty_json<T: serde::Serialize>(value: &T) -> anyhow::Result<String> {
    let mut json = serde_json::to_string_pretty(value).context("Failed to serialize JSON")?;
    json.push('\n');
    Ok(json)
}

fn emit_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir();
    fs::create_dir_all(&dir).context("Failed to create schemas directory")?;

    for spec in schema_specs() {
        let json = to_pretty_json(&(spec.generate)())?;
        let path = dir.join(spec.filename);
        fs::write(&path, &json)
            .with_context(|| format!("Failed to write schema to {}", path.display()))?;
        println!("Wrote {}", path.display());
    }

    println!("\nSchemas emitted successfully.");
    Ok(())
}

/// Validate that schemas in the repo match what would be generated.
fn validate_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir();
    let mut missing = Vec::new();
    let mut mismatched = Vec::new();

    for spec in schema_specs() {
        let path = dir.join(spec.filename);
        if !path.exists() {
            missing.push(spec.filename);
            continue;
        }

        let expected = to_pretty_json(&(spec.generate)())?;
        let actual = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        if expected != actual {
            mismatched.push(spec.filename);
        }
    }

    if missing.is_empty() && mismatched.is_empty() {
        println!("All schemas are up to date.");
        return Ok(());
    }

    if !missing.is_empty() {
        eprintln!("Missing schemas:");
        for name in &missing {
            eprintln!("  - {}", name);
        }
    }
    if !mismatched.is_empty() {
        eprintln!("Schemas out of date:");
        for name in &mismatched {
            eprintln!("  - {}", name);
        }
    }
    eprintln!("\nRun `cargo xtask emit-schemas` to regenerate.");
    bail!("Schema validation failed")
}

/// Regenerate the CLI golden reports from the built-in catalog.
fn regen_golden() -> anyhow::Result<()> {
    let catalog = load_catalog(None, DEFAULT_SEARCH_WINDOW)?;
    let air_france = AirlineSelector::Id(AirlineId::new(1));
    let dir = golden_dir();
    fs::create_dir_all(&dir).context("Failed to create golden directory")?;

    let oversized = RawMeasurement::new("60", "35", "25", "13");
    let output = run_check(CheckInput {
        catalog: &catalog,
        selector: &air_france,
        category: BaggageCategory::Cabin,
        raw: &oversized,
    })
    .context("oversized cabin scenario should produce a verdict")?;
    write_golden(&dir, "af_cabin_oversized.json", &output.report)?;

    let incomplete = RawMeasurement {
        length: Some("55".to_string()),
        height: Some("25".to_string()),
        ..RawMeasurement::default()
    };
    let refused = match run_check(CheckInput {
        catalog: &catalog,
        selector: &air_france,
        category: BaggageCategory::Cabin,
        raw: &incomplete,
    }) {
        Ok(_) => bail!("incomplete scenario unexpectedly produced a verdict"),
        Err(err) => error_report(&err),
    };
    write_golden(&dir, "incomplete_input.json", &refused)?;

    Ok(())
}

fn write_golden<T: serde::Serialize>(
    dir: &std::path::Path,
    name: &str,
    value: &T,
) -> anyhow::Result<()> {
    let value = serde_json::to_value(value).context("Failed to convert report to JSON")?;
    let json = to_pretty_json(&normalize_nondeterministic(value))?;
    let path = dir.join(name);
    fs::write(&path, json).with_context(|| format!("Failed to write {}", path.display()))?;
    println!("Wrote {}", path.display());
    Ok(())
}

/// Validate the golden reports against the schemas generated from the current types.
fn conform() -> anyhow::Result<()> {
    let dir = golden_dir();
    let cases = [
        (
            "af_cabin_oversized.json",
            schema_for!(bagcheck_types::CheckReport),
        ),
        (
            "incomplete_input.json",
            schema_for!(bagcheck_types::ErrorReport),
        ),
    ];

    let mut errors = Vec::new();
    for (filename, schema) in cases {
        let schema_value =
            serde_json::to_value(&schema).context("Failed to convert schema to JSON")?;
        let compiled = jsonschema::validator_for(&schema_value)
            .map_err(|e| anyhow::anyhow!("Failed to compile schema for {}: {}", filename, e))?;

        let path = dir.join(filename);
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let value: serde_json::Value = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse {} as JSON", filename))?;

        let before = errors.len();
        for err in compiled.iter_errors(&value) {
            errors.push(format!("{}: schema validation: {}", filename, err));
        }
        if errors.len() == before {
            println!("✓ {filename} validates");
        }
    }

    if errors.is_empty() {
        println!("\n✓ All golden reports conform!");
        Ok(())
    } else {
        for error in &errors {
            eprintln!("  - {}", error);
        }
        bail!("Conformance failed with {} errors", errors.len())
    }
}

fn explain_coverage() -> anyhow::Result<()> {
    let check_ids = bagcheck_types::explain::all_check_ids();
    let codes = bagcheck_types::explain::all_codes();

    let mut errors = Vec::new();
    for (kind, identifiers) in [("Check ID", check_ids), ("Code", codes)] {
        for id in identifiers {
            match bagcheck_types::explain::lookup_explanation(id) {
                Some(exp) => {
                    if exp.title.is_empty() {
                        errors.push(format!("{kind} '{id}' has empty title"));
                    }
                    if exp.description.is_empty() {
                        errors.push(format!("{kind} '{id}' has empty description"));
                    }
                    if exp.remediation.is_empty() {
                        errors.push(format!("{kind} '{id}' has empty remediation"));
                    }
                }
                None => errors.push(format!("{kind} '{id}' has no explanation")),
            }
        }
    }

    if errors.is_empty() {
        println!("✓ {} check IDs have explanations", check_ids.len());
        println!("✓ {} codes have explanations", codes.len());
        println!("\n✓ All explain coverage checks passed!");
        Ok(())
    } else {
        for error in &errors {
            eprintln!("  - {}", error);
        }
        bail!(
            "Explain coverage validation failed with {} errors",
            errors.len()
        )
    }
}

fn print_help() {
    eprintln!("xtask commands:");
    eprintln!("  help              Show this message");
    eprintln!("  emit-schemas      Generate JSON schemas from Rust types to schemas/");
    eprintln!("  validate-schemas  Check if schemas/ matches generated output (for CI)");
    eprintln!("  print-schema-ids  Print known schema IDs");
    eprintln!("  regen-golden      Rewrite the CLI golden reports from the built-in catalog");
    eprintln!("  conform           Validate golden reports against the generated schemas");
    eprintln!("  explain-coverage  Validate all check IDs and codes have explanations");
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let cmd = args.get(1).map(|s| s.as_str()).unwrap_or("help");

    match cmd {
        "help" | "--help" | "-h" => {
            print_help();
            Ok(())
        }
        "emit-schemas" => emit_schemas(),
        "validate-schemas" => validate_schemas(),
        "regen-golden" => regen_golden(),
        "conform" => conform(),
        "explain-coverage" => explain_coverage(),
        "print-schema-ids" => {
            for spec in schema_specs() {
                println!("{}", spec.filename.trim_end_matches(".json"));
            }
            Ok(())
        }
        other => bail!("unknown xtask command: {other}\n\nRun `cargo xtask help` for usage."),
    }
    .context("xtask failed")
}
