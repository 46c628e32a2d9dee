use clap::{Parser, ValueEnum};
use clyp_highlight::rendering::{stylesheet, RenderConfig, Renderer};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::{fs, process};
use thiserror::Error;
use tracing::level_filters::LevelFilter;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Highlight Clyp source code.
#[derive(Debug, Parser)]
#[command(about, version(VERSION))]
struct Config {
    /// File to highlight. Reads standard input if absent.
    input: Option<PathBuf>,
    #[arg(long, short, help("Language of the input"), default_value("clyp"))]
    language: String,
    #[arg(long, short, value_enum, default_value_t = Format::Html)]
    format: Format,
    #[arg(long, help("Prefix for every token's CSS class"), default_value(""))]
    class_prefix: String,
    #[arg(long, value_name("LevelFilter"), default_value("warn"))]
    log: LevelFilter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// An HTML fragment.
    Html,
    /// Terminal colors.
    Ansi,
    /// One line per token: its category and text.
    Tokens,
    /// The stylesheet for the HTML output. Ignores the input.
    Css,
}

#[derive(Debug, Error)]
enum CliError {
    #[error("could not read '{}': {source}", path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("could not read standard input: {0}")]
    Stdin(#[source] io::Error),
    #[error("could not write output: {0}")]
    Write(#[from] io::Error),
}

fn main() {
    let config = Config::parse();
    tracing_subscriber::fmt()
        .with_max_level(config.log)
        .with_writer(io::stderr)
        .init();

    if let Err(err) = run(&config) {
        eprintln!("clyp-highlight: {}", err);
        process::exit(1);
    }
}

fn run(config: &Config) -> Result<(), CliError> {
    let renderer = Renderer::new(RenderConfig {
        class_prefix: config.class_prefix.clone(),
        ..RenderConfig::default()
    });
    let language = Some(config.language.as_str());
    let mut stdout = io::stdout().lock();

    match config.format {
        Format::Css => write!(stdout, "{}", stylesheet(renderer.config()))?,
        Format::Html => {
            let code = read_input(config.input.as_deref())?;
            writeln!(stdout, "{}", renderer.render_html(&code, language))?;
        }
        Format::Ansi => {
            let code = read_input(config.input.as_deref())?;
            write!(stdout, "{}", renderer.render_ansi(&code, language))?;
        }
        Format::Tokens => {
            let code = read_input(config.input.as_deref())?;
            for run in renderer.highlight(&code, language) {
                writeln!(stdout, "{}\t{:?}", run.style, run.text)?;
            }
        }
    }
    stdout.flush()?;
    Ok(())
}

fn read_input(path: Option<&Path>) -> Result<String, CliError> {
    match path {
        Some(path) => fs::read_to_string(path).map_err(|source| CliError::Read {
            path: path.to_owned(),
            source,
        }),
        None => {
            let mut code = String::new();
            io::stdin()
                .read_to_string(&mut code)
                .map_err(CliError::Stdin)?;
            Ok(code)
        }
    }
}
