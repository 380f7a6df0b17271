//! The guidepost command-line tool.

use clap::Parser;
use guidepost::cli::{
    Cli, Commands, handle_outline_command, handle_validate_command, handle_view_command,
};
use guidepost::{LogTarget, Settings, init_logging};
use std::path::PathBuf;
use std::process::ExitCode;

fn main() -> anyhow::Result<ExitCode> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let settings = Settings::load(cli.config.as_deref())?;

    let target = match cli.command {
        Commands::View { .. } => LogTarget::File,
        _ => LogTarget::Stderr,
    };
    if let Some(log_path) = init_logging(&settings, target)? {
        tracing::info!(path = %log_path.display(), "Logging to file");
    }

    match cli.command {
        Commands::View {
            path,
            guide,
            section,
        } => {
            let path = guide_path(path, &settings)?;
            let section = section.or_else(|| settings.start_section().clone());
            handle_view_command(&path, guide.as_deref(), section.as_deref())?;
        }
        Commands::Validate {
            path,
            format,
            strict,
            quiet,
            warnings,
        } => {
            let strict = strict || *settings.strict_validation();
            let code =
                handle_validate_command(path, format, strict, quiet, &warnings.to_config())?;
            return Ok(ExitCode::from(code));
        }
        Commands::Outline { path } => {
            let path = guide_path(path, &settings)?;
            handle_outline_command(&path)?;
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Uses the argument, else the configured guide path.
fn guide_path(arg: Option<PathBuf>, settings: &Settings) -> anyhow::Result<PathBuf> {
    arg.or_else(|| settings.guide_path().clone()).ok_or_else(|| {
        anyhow::anyhow!("No guide given; pass a PATH or set guide_path in guidepost.toml")
    })
}
