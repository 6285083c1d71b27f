pub mod build;
pub mod cli;
pub mod config;
pub mod generate;
pub mod inject;
pub mod input;
pub mod logging;
pub mod operator;
pub mod path;
pub mod platform;
pub mod refusal;
pub mod report;
pub mod source;
pub mod write;

use std::fs;
use std::future::Future;
use std::path::Path;

use clap::Parser;
use cli::{Cli, Command, ExitCode};
use config::IconsetConfig;
use generate::ManifestGenerator;
use input::Input;
use refusal::{RefusalCode, RefusalEnvelope};
use source::{Source, SourceItem};

/// Run the iconset CLI and return an exit code.
pub fn run() -> u8 {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    // --describe short-circuits before config loading.
    if cli.describe {
        let op = operator::operator_json();
        println!(
            "{}",
            serde_json::to_string_pretty(&op).expect("operator json serialization cannot fail")
        );
        return ExitCode::Success.into();
    }

    let Some(command) = cli.command else {
        eprintln!("iconset: no command provided. Try --help.");
        return ExitCode::Refusal.into();
    };

    match dispatch(command) {
        Ok(output) => {
            if !output.is_empty() {
                println!("{output}");
            }
            ExitCode::Success.into()
        }
        Err(envelope) => {
            println!("{}", envelope.to_json());
            ExitCode::Refusal.into()
        }
    }
}

fn dispatch(command: Command) -> Result<String, Box<RefusalEnvelope>> {
    match command {
        Command::Build {
            sources,
            config,
            out,
            path,
            json,
        } => {
            let mut config = prepare_config(config.as_deref(), sources)?;
            if let Some(path) = path {
                config.path = path;
            }
            let out_root = out.unwrap_or_else(|| config.out_root());

            let result = block_on(build::execute_build(
                &ManifestGenerator,
                &config,
                &out_root,
            ))??;
            Ok(if json {
                result.report.to_json()
            } else {
                result.report.to_human()
            })
        }
        Command::Resolve { sources, config } => {
            let config = prepare_config(config.as_deref(), sources)?;
            let resolved = input::resolve_input(config.input.as_ref());
            Ok(serde_json::to_string_pretty(&resolved)
                .expect("resolved input serialization cannot fail"))
        }
        Command::Inject {
            html,
            sources,
            config,
            compact,
            expanded,
            write,
        } => {
            let config = prepare_config(config.as_deref(), sources)?;
            let compact = match (compact, expanded) {
                (true, _) => true,
                (_, true) => false,
                _ => config.compress_html,
            };
            let document = fs::read_to_string(&html).map_err(|e| io_refusal(&html, "read", e))?;

            let transformed = block_on(build::execute_inject(
                &ManifestGenerator,
                &config,
                &document,
                compact,
            ))??;

            if write {
                fs::write(&html, transformed).map_err(|e| io_refusal(&html, "write", e))?;
                Ok(format!("INJECTED {}", html.display()))
            } else {
                Ok(transformed)
            }
        }
        Command::Normalize { raw, url } => Ok(if url {
            path::normalize_location(raw.as_deref())
        } else {
            path::normalize_path(raw.as_deref())
        }),
    }
}

/// Load config and let positional sources replace its `input`.
fn prepare_config(
    explicit: Option<&Path>,
    sources: Vec<String>,
) -> Result<IconsetConfig, Box<RefusalEnvelope>> {
    let mut config = config::load_config(explicit).map_err(|e| Box::new(e.to_refusal()))?;
    if let Some(input) = input_from_sources(sources) {
        config.input = Some(input);
    }
    Ok(config)
}

/// One source stays scalar; several become a list. None when empty.
fn input_from_sources(sources: Vec<String>) -> Option<Input> {
    if sources.is_empty() {
        return None;
    }
    let items = sources.into_iter().map(SourceItem::Ref).collect();
    Some(Input::Uniform(Source::from_items(items)))
}

fn block_on<F: Future>(future: F) -> Result<F::Output, Box<RefusalEnvelope>> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| {
            Box::new(RefusalEnvelope::new(
                RefusalCode::Io,
                Some(format!("Cannot start async runtime: {e}")),
                None,
            ))
        })?;
    Ok(runtime.block_on(future))
}

fn io_refusal(path: &Path, operation: &str, e: std::io::Error) -> Box<RefusalEnvelope> {
    Box::new(RefusalEnvelope::new(
        RefusalCode::Io,
        Some(format!("Cannot {operation} {}: {e}", path.display())),
        Some(serde_json::json!({
            "path": path.display().to_string(),
            "operation": operation,
        })),
    ))
}
