//! coloring - highlight source files on the terminal
//!
//! Reference host for the tagging engine: reads a document, highlights it
//! line by line carrying block state forward, and prints the result.

use std::env;
use std::fs;
use std::io::{self, BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use std::process;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use coloring::config::Config;
use coloring::error::{Error, Result};
use coloring::render::Renderer;
use coloring::syntax::{DocumentHighlight, Highlights, LanguageRegistry, RuleSet};

/// Command line options
#[derive(Debug, Default)]
struct Options {
    files: Vec<PathBuf>,
    language: Option<String>,
    theme: Option<String>,
    config: Option<PathBuf>,
    line_numbers: bool,
    width: Option<usize>,
    plain: bool,
    states: bool,
    list_languages: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();
    let Some(options) = parse_args(&args)? else {
        return Ok(());
    };

    let mut config = match &options.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(theme) = &options.theme {
        config.theme = theme.clone();
    }
    let theme = config.build_theme()?;

    let mut registry = LanguageRegistry::with_builtins()?;
    for lang in config.build_languages()? {
        registry.add(lang);
    }

    if options.list_languages {
        for name in registry.names() {
            println!("{}", name);
        }
        return Ok(());
    }

    let forced = options.language.as_deref().map(|name| registry.require(name)).transpose()?;

    let stdout = io::stdout();
    let mut renderer = Renderer::new(BufWriter::new(stdout.lock()), theme)
        .with_tab_width(config.tab_width)
        .with_width(options.width)
        .with_color(!options.plain)
        .with_line_numbers(options.line_numbers || config.line_numbers);

    let mut stderr = io::stderr();
    if options.files.is_empty() {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text)?;
        print_document(&mut renderer, &text, forced, options.states.then_some(&mut stderr))?;
    } else {
        for path in &options.files {
            let text = fs::read_to_string(path)?;
            let rule_set = forced.or_else(|| registry.detect(path));
            if rule_set.is_none() {
                warn!(file = %path.display(), "no language for file, printing plain");
            }
            print_document(&mut renderer, &text, rule_set, options.states.then_some(&mut stderr))?;
        }
    }

    renderer.flush()
}

/// Highlight and render one document
///
/// With `states`, the block state each line ends in is written there too.
/// Without a rule set the text is echoed unstyled and no states are written.
fn print_document<W: Write, S: Write>(
    renderer: &mut Renderer<W>,
    text: &str,
    rule_set: Option<&RuleSet>,
    mut states: Option<&mut S>,
) -> Result<()> {
    let lines: Vec<&str> = text.lines().collect();

    let Some(rule_set) = rule_set else {
        for (i, line) in lines.iter().enumerate() {
            renderer.render_line(i + 1, line, &Highlights::new(line.len()))?;
        }
        return Ok(());
    };

    let mut doc = DocumentHighlight::new();
    let refreshed = doc.refresh(&lines, rule_set);
    info!(language = %rule_set.name, lines = refreshed.len(), "highlighted document");

    for (i, line) in lines.iter().enumerate() {
        let Some(block) = doc.block(i) else { continue };
        renderer.render_line(i + 1, line, &block.highlights)?;
        if let Some(out) = states.as_mut() {
            writeln!(out, "{:>4}: state {}", i + 1, block.state.region_id())?;
        }
    }
    Ok(())
}

/// Parse arguments; `None` means the request was fully handled (help, version)
fn parse_args(args: &[String]) -> Result<Option<Options>> {
    let mut options = Options::default();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--help" | "-h" => {
                print_usage();
                return Ok(None);
            }
            "--version" | "-V" => {
                println!("coloring {}", env!("CARGO_PKG_VERSION"));
                return Ok(None);
            }
            "--lang" | "-l" => options.language = Some(value(&mut iter, arg)?),
            "--theme" | "-t" => options.theme = Some(value(&mut iter, arg)?),
            "--config" | "-c" => options.config = Some(PathBuf::from(value(&mut iter, arg)?)),
            "--width" | "-w" => {
                let width = value(&mut iter, arg)?;
                let width = width
                    .parse::<usize>()
                    .map_err(|_| usage_error(format!("invalid width: {}", width)))?;
                options.width = Some(width);
            }
            "--line-numbers" | "-n" => options.line_numbers = true,
            "--plain" => options.plain = true,
            "--states" => options.states = true,
            "--list-languages" => options.list_languages = true,
            _ if arg.starts_with('-') && arg != "-" => {
                return Err(usage_error(format!("unknown option: {}", arg)));
            }
            _ => options.files.push(PathBuf::from(arg)),
        }
    }

    // "-" alone means stdin
    options.files.retain(|f| f != Path::new("-"));
    Ok(Some(options))
}

fn value<'a>(iter: &mut impl Iterator<Item = &'a String>, option: &str) -> Result<String> {
    iter.next()
        .cloned()
        .ok_or_else(|| usage_error(format!("{} needs a value", option)))
}

fn usage_error(message: String) -> Error {
    Error::Message(format!("{}; try --help", message))
}

fn print_usage() {
    println!("coloring {} - incremental syntax highlighter", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Usage: coloring [OPTIONS] [FILE...]");
    println!();
    println!("Reads standard input when no file is given.");
    println!();
    println!("Options:");
    println!("  -l, --lang NAME       Use this language instead of detecting it");
    println!("  -t, --theme NAME      Style table: light or dark");
    println!("  -c, --config PATH     Read configuration from PATH");
    println!("  -n, --line-numbers    Show line numbers");
    println!("  -w, --width COLS      Clip lines to COLS columns");
    println!("      --plain           Print without styling");
    println!("      --states          Print each line's block state to stderr");
    println!("      --list-languages  List known languages and exit");
    println!("  -h, --help            Show this help message");
    println!("  -V, --version         Show version information");
}
