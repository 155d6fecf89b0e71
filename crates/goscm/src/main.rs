//! The goscm command line.
//!
//! - `goscm emit <tree.json>` - transduce a JSON syntax tree and print the
//!   S-expression, laid out by goscm-fmt unless `--raw` is given
//! - `goscm fmt <file>` - lay out an emitted file in place
//!
//! Options shared by both:
//! - `--config` - settings file (default: `./goscm.toml` when present)
//! - `-v` - log verbosity on stderr, repeatable
//! - `--no-color` - disable colorized diagnostics
//!
//! Output is written only after the whole run has succeeded; a failed run
//! leaves stdout and the `-o` file untouched.

mod config;
mod diagnostics;

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process;

use clap::{ArgAction, Args, Parser, Subcommand};
use goscm_ast::File;
use goscm_emit::{emit_to_string, CharLiteralMode, TransduceError};
use goscm_fmt::{format_source, FormatConfig, ReadError};
use thiserror::Error;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use config::{Config, ConfigError};
use diagnostics::{json_error_span, Reporter};

#[derive(Parser)]
#[command(name = "goscm", version, about = "Transduce Go syntax trees into S-expressions")]
struct Cli {
    /// More log output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Settings file (default: ./goscm.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Disable colorized diagnostics
    #[arg(long = "no-color", global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Transduce a JSON syntax tree into an S-expression
    Emit {
        /// JSON syntax tree, or `-` for stdin
        tree: PathBuf,

        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Write the single-line stream without layout
        #[arg(long)]
        raw: bool,

        /// Fail on nodes with no rule instead of writing placeholders
        #[arg(long)]
        strict: bool,

        /// Render character literals from their first byte, like older output
        #[arg(long = "legacy-chars")]
        legacy_chars: bool,

        #[command(flatten)]
        layout: LayoutArgs,
    },
    /// Lay out an emitted S-expression file in place
    Fmt {
        /// File to format
        file: PathBuf,

        /// Only check; exit non-zero if the file is not formatted
        #[arg(long)]
        check: bool,

        #[command(flatten)]
        layout: LayoutArgs,
    },
}

#[derive(Args)]
struct LayoutArgs {
    /// Maximum line width
    #[arg(long)]
    width: Option<usize>,

    /// Spaces per nesting level
    #[arg(long)]
    indent: Option<usize>,
}

impl LayoutArgs {
    fn apply(&self, format: &mut FormatConfig) {
        if let Some(width) = self.width {
            format.max_width = width;
        }
        if let Some(indent) = self.indent {
            format.indent_size = indent;
        }
    }
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("failed to read '{}': {source}", path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to write '{}': {source}", path.display())]
    Write { path: PathBuf, source: io::Error },
    #[error("'{}' is not a valid syntax tree: {source}", path.display())]
    Tree {
        path: PathBuf,
        text: String,
        source: serde_json::Error,
    },
    #[error(transparent)]
    Transduce(#[from] TransduceError),
    #[error("emitted output cannot be laid out: {source} (use --raw to keep it as is)")]
    Layout { source: ReadError },
    #[error("'{}' cannot be read: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        text: String,
        source: ReadError,
    },
    #[error("'{}' is not formatted", path.display())]
    NotFormatted { path: PathBuf },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let reporter = Reporter {
        color: !cli.no_color,
    };

    if let Err(err) = run(&cli) {
        report(&reporter, &err);
        process::exit(1);
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

/// Input errors get a source-annotated report; everything else one line.
fn report(reporter: &Reporter, err: &CliError) {
    match err {
        CliError::Tree { path, text, source } => reporter.error(
            path,
            text,
            json_error_span(text, source),
            "not a valid syntax tree",
            &source.to_string(),
        ),
        CliError::Unreadable { path, text, source } => {
            reporter.error(path, text, source.span(), "cannot be read", &source.to_string())
        }
        _ => eprintln!("error: {err}"),
    }
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let cwd = std::env::current_dir().map_err(|source| CliError::Read {
        path: PathBuf::from("."),
        source,
    })?;
    let mut config = Config::discover(cli.config.as_deref(), &cwd)?;

    match &cli.command {
        Commands::Emit {
            tree,
            output,
            raw,
            strict,
            legacy_chars,
            layout,
        } => {
            if *strict {
                config.emit.strict = true;
            }
            if *legacy_chars {
                config.emit.char_literals = CharLiteralMode::FirstByte;
            }
            layout.apply(&mut config.format);
            let text = emit(tree, &config, *raw)?;
            write_output(output.as_deref(), &text)
        }
        Commands::Fmt {
            file,
            check,
            layout,
        } => {
            layout.apply(&mut config.format);
            format_file(file, &config.format, *check)
        }
    }
}

fn read_input(path: &Path) -> Result<String, CliError> {
    let result = if path == Path::new("-") {
        io::read_to_string(io::stdin())
    } else {
        fs::read_to_string(path)
    };
    result.map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Load, transduce and (unless `raw`) lay out one tree.
fn emit(tree: &Path, config: &Config, raw: bool) -> Result<String, CliError> {
    let text = read_input(tree)?;
    let file: File = match serde_json::from_str(&text) {
        Ok(file) => file,
        Err(source) => {
            return Err(CliError::Tree {
                path: tree.to_path_buf(),
                text,
                source,
            })
        }
    };
    info!(package = %file.package, decls = file.decls.len(), "loaded syntax tree");

    let stream = emit_to_string(&file, &config.emit)?;
    if raw {
        return Ok(stream + "\n");
    }
    format_source(&stream, &config.format).map_err(|source| CliError::Layout { source })
}

fn write_output(output: Option<&Path>, text: &str) -> Result<(), CliError> {
    match output {
        Some(path) => fs::write(path, text).map_err(|source| CliError::Write {
            path: path.to_path_buf(),
            source,
        }),
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(text.as_bytes())
                .and_then(|()| stdout.flush())
                .map_err(|source| CliError::Write {
                    path: PathBuf::from("<stdout>"),
                    source,
                })
        }
    }
}

fn format_file(path: &Path, format: &FormatConfig, check: bool) -> Result<(), CliError> {
    let text = fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let formatted = match format_source(&text, format) {
        Ok(formatted) => formatted,
        Err(source) => {
            return Err(CliError::Unreadable {
                path: path.to_path_buf(),
                text,
                source,
            })
        }
    };

    if formatted == text {
        debug!(path = %path.display(), "already formatted");
        return Ok(());
    }
    if check {
        return Err(CliError::NotFormatted {
            path: path.to_path_buf(),
        });
    }
    fs::write(path, formatted).map_err(|source| CliError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), "formatted");
    Ok(())
}
