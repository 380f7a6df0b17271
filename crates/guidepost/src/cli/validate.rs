//! Validation command handler.

use super::ValidationOutputFormat;
use guidepost_content::{ValidationConfig, ValidationResult, validate_guide_file_with_config};
use std::path::{Path, PathBuf};

/// Exit code when any file has errors.
pub const EXIT_ERRORS: u8 = 1;
/// Exit code when warnings are present in strict mode.
pub const EXIT_WARNINGS: u8 = 2;

/// Handles the validate command, returning the process exit code.
///
/// # Arguments
///
/// * `path` - Path to a guide file or a directory of guides
/// * `format` - Output format (human or json)
/// * `strict` - Treat warnings as errors
/// * `quiet` - Only show errors, not warnings
/// * `config` - Which warnings the validator reports
#[tracing::instrument(skip_all, fields(path = %path.display()))]
pub fn handle_validate_command(
    path: PathBuf,
    format: ValidationOutputFormat,
    strict: bool,
    quiet: bool,
    config: &ValidationConfig,
) -> anyhow::Result<u8> {
    tracing::info!(?config, "Starting validation");

    let files = if path.is_file() {
        vec![path.clone()]
    } else if path.is_dir() {
        let mut files = Vec::new();
        for entry in std::fs::read_dir(&path)? {
            let entry_path = entry?.path();
            if entry_path.extension().and_then(|s| s.to_str()) == Some("toml") {
                files.push(entry_path);
            }
        }
        files.sort();
        files
    } else {
        anyhow::bail!(
            "Path '{}' is neither a file nor a directory",
            path.display()
        );
    };

    let mut has_errors = false;
    let mut has_warnings = false;
    let mut valid_files = 0;

    for file in &files {
        let result = validate_guide_file_with_config(file, config);
        if result.is_valid() && result.warnings.is_empty() {
            valid_files += 1;
        }
        has_errors = has_errors || !result.is_valid();
        has_warnings = has_warnings || !result.warnings.is_empty();

        match format {
            ValidationOutputFormat::Human => output_human(file, &result, strict, quiet),
            ValidationOutputFormat::Json => output_json(file, &result)?,
        }
    }

    if format == ValidationOutputFormat::Human && files.len() > 1 {
        println!("\n{}", "=".repeat(80));
        println!("Validation Summary:");
        println!("  Total files: {}", files.len());
        println!("  Valid files: {}", valid_files);
        println!("  Files with issues: {}", files.len() - valid_files);
    }

    let code = exit_code(has_errors, has_warnings, strict);
    if format == ValidationOutputFormat::Human {
        match code {
            0 if has_warnings => println!("\n⚠️  Validation passed with warnings"),
            0 => println!("\n✅ All guides valid"),
            EXIT_WARNINGS => println!("\n⚠️  Validation failed on warnings (strict mode)"),
            _ => println!("\n❌ Validation failed"),
        }
    }

    tracing::info!(files = files.len(), code, "Validation finished");
    Ok(code)
}

/// Maps validation findings to an exit code.
pub fn exit_code(has_errors: bool, has_warnings: bool, strict: bool) -> u8 {
    if has_errors {
        EXIT_ERRORS
    } else if strict && has_warnings {
        EXIT_WARNINGS
    } else {
        0
    }
}

/// Outputs validation result in human-readable format.
fn output_human(path: &Path, result: &ValidationResult, strict: bool, quiet: bool) {
    let status_icon = if !result.is_valid() {
        "❌"
    } else if !result.warnings.is_empty() && strict {
        "⚠️"
    } else {
        "✅"
    };

    println!("\n{} {}", status_icon, path.display());
    println!("{}", "─".repeat(80));

    if !result.errors.is_empty() {
        println!("\nErrors:");
        for (i, error) in result.errors.iter().enumerate() {
            println!("\n  {}. {}", i + 1, error.message);
            if let Some(suggestion) = &error.suggestion {
                println!("\n     💡 Suggestion:");
                for line in suggestion.lines() {
                    println!("        {}", line);
                }
            }
        }
    }

    if !quiet && !result.warnings.is_empty() {
        println!("\nWarnings:");
        for (i, warning) in result.warnings.iter().enumerate() {
            println!("\n  {}. {}", i + 1, warning.message);
        }
    }

    if result.is_valid() && result.warnings.is_empty() {
        println!("\n  No issues found");
    }
}

/// Outputs validation result in JSON format.
fn output_json(path: &Path, result: &ValidationResult) -> anyhow::Result<()> {
    let output = serde_json::json!({
        "valid": result.is_valid(),
        "file": path.display().to_string(),
        "errors": result.errors,
        "warnings": result.warnings,
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
