use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use quillpress_config::Config;
use quillpress_engine::{
    Document, Stats, UrlValidation, calculate_stats_with, format_html_for_display,
    generate_clean_html,
};
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process;

#[derive(Parser, Debug)]
#[command(name = "quillpress", version, about, long_about = None)]
struct Cli {
    /// Config file to use instead of ~/.config/quillpress/config.toml
    #[arg(long, value_name = "PATH", global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Export an editor JSON document as clean HTML
    Export {
        /// JSON document, or `-` for stdin
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Pretty-print the HTML for reading
        #[arg(long)]
        pretty: bool,

        /// Write the HTML to this file instead of stdout
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },
    /// Show word, character and reading-time statistics
    Stats {
        /// JSON document or plain text file, or `-` for stdin
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Print the statistics as JSON
        #[arg(long)]
        json: bool,
    },
    /// Check whether a URL is allowed as a link
    CheckUrl {
        #[arg(value_name = "URL")]
        url: String,
    },
}

fn main() {
    let cli = Cli::parse();

    env_logger::Builder::from_default_env()
        .filter_level(if cli.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Warn
        })
        .init();

    match run(cli) {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("Error: {e:#}");
            process::exit(1);
        }
    }
}

fn run(cli: Cli) -> Result<i32> {
    let config = Config::load_or_default(cli.config.as_deref()).context("Failed to load config")?;
    log::debug!("Using config: {config:?}");

    match cli.command {
        Command::Export {
            file,
            pretty,
            output,
        } => {
            let source = read_input(&file)?;
            let doc = Document::from_json_str(&source)
                .with_context(|| format!("Failed to parse {}", file.display()))?;
            let html = render_html(&doc, pretty || config.export.pretty);

            match output_path(&file, output, config.export.output_dir.as_deref()) {
                Some(path) => write_output(&path, &html)?,
                None => println!("{html}"),
            }
            Ok(0)
        }
        Command::Stats { file, json } => {
            let source = read_input(&file)?;
            let text = text_for_stats(&file, source)?;
            let stats = calculate_stats_with(&text, config.stats.words_per_minute as usize);
            if json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                print!("{}", describe_stats(&stats));
            }
            Ok(0)
        }
        Command::CheckUrl { url } => {
            let validation = UrlValidation::check(&url);
            println!("{}", serde_json::to_string_pretty(&validation)?);
            Ok(if validation.valid { 0 } else { 1 })
        }
    }
}

fn is_stdin(path: &Path) -> bool {
    path == Path::new("-")
}

fn read_input(path: &Path) -> Result<String> {
    if is_stdin(path) {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read stdin")?;
        return Ok(buf);
    }
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

fn render_html(doc: &Document, pretty: bool) -> String {
    let html = generate_clean_html(doc);
    if pretty {
        format_html_for_display(&html)
    } else {
        html
    }
}

/// Where exported HTML goes: `--output`, else `<output_dir>/<stem>.html`, else stdout.
fn output_path(input: &Path, output: Option<PathBuf>, output_dir: Option<&Path>) -> Option<PathBuf> {
    if output.is_some() {
        return output;
    }
    if is_stdin(input) {
        return None;
    }
    let stem = input.file_stem()?;
    Some(output_dir?.join(format!("{}.html", stem.to_string_lossy())))
}

fn write_output(path: &Path, html: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    std::fs::write(path, format!("{html}\n"))
        .with_context(|| format!("Failed to write {}", path.display()))?;
    log::info!("Wrote {}", path.display());
    Ok(())
}

/// JSON documents are measured by their plain text, anything else as is.
fn text_for_stats(path: &Path, source: String) -> Result<String> {
    if path.extension().is_some_and(|ext| ext == "json") {
        let doc = Document::from_json_str(&source)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        return Ok(doc.plain_text());
    }
    Ok(source)
}

fn describe_stats(stats: &Stats) -> String {
    format!(
        "words: {}\ncharacters: {}\nreading time: {} min\n",
        stats.words, stats.characters, stats.reading_time_minutes
    )
}
