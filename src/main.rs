use clap::{Parser, Subcommand};
use simple_docs::render::{FsSink, JinjaEngine, MemorySink};
use simple_docs::{build, classify, config, output, scan};
use std::path::{Path, PathBuf};

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup — trivial, called exactly once
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "simple-docs")]
#[command(about = "Documentation site generator with predictable landing pages")]
#[command(long_about = "\
Documentation site generator with predictable landing pages

Your filesystem is the data source. Markdown files become pages, directories
become sections, and every directory resolves to exactly one landing page.

Content structure:

  docs/
  ├── index.md                     # Site index (synthesized when absent)
  ├── intro.md                     # Document → {base_url}/intro/
  ├── guide/
  │   ├── index.md                 # Landing page for guide/
  │   └── setup.md                 # Document → {base_url}/guide/setup/
  └── api/
      └── reference/
          └── index.md             # Landing inherited by api/ if named in
                                   # default_landings

Landing resolution (per directory, first match wins):
  1. A document in the directory whose basename is a configured candidate
     (default_landings, tried in order)
  2. A nested directory named after a candidate, via its own landing
  3. Neither → the directory root serves its compiled index

Run 'simple-docs gen-config' to print a documented config.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Site config file
    #[arg(long, default_value = "config.toml", global = true)]
    config: PathBuf,

    /// Content directory (overrides content_dir from config)
    #[arg(long, global = true)]
    source: Option<PathBuf>,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Scan the content directory and show the classified document set
    Scan,
    /// Build the site: scan, resolve landings, render, write output
    Build,
    /// Run the full pipeline without writing any output
    Check,
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Scan => {
            let (config, root) = site_setup(&cli)?;
            let files = scan::scan(&root)?;
            let classified = classify::classify(files, &config.index_filename);
            output::print_scan_output(&classified);
        }
        Command::Build => {
            let (config, root) = site_setup(&cli)?;
            println!("==> Building {}", root.display());
            let files = scan::scan(&root)?;
            let engine = JinjaEngine::new();
            let sink = FsSink::new(cli.output.clone());
            let outcome = build::build(&root, files, &config, &engine, &sink)?;
            output::print_build_output(&outcome);
            println!("==> Site built at {}", cli.output.display());
        }
        Command::Check => {
            let (config, root) = site_setup(&cli)?;
            println!("==> Checking {}", root.display());
            let files = scan::scan(&root)?;
            let classified = classify::classify(files.clone(), &config.index_filename);
            output::print_scan_output(&classified);
            // Dry run into memory: surfaces collisions and template errors
            // without touching the output directory.
            let engine = JinjaEngine::new();
            let sink = MemorySink::new();
            build::build(&root, files, &config, &engine, &sink)?;
            println!("==> Content is valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Load the site config and resolve the content root for commands that
/// operate on content.
fn site_setup(cli: &Cli) -> Result<(config::DocsConfig, PathBuf), config::ConfigError> {
    let config = load_config(&cli.config)?;
    let root = content_root(cli, &config);
    Ok((config, root))
}

/// Load config from the file the CLI points at. A missing `config.toml`
/// means stock defaults; a file under any other name must exist.
fn load_config(path: &Path) -> Result<config::DocsConfig, config::ConfigError> {
    match path.parent() {
        Some(dir) if path.file_name().is_some_and(|f| f == "config.toml") => {
            config::load_config(dir)
        }
        _ => {
            let content = std::fs::read_to_string(path)?;
            let config: config::DocsConfig = toml::from_str(&content)?;
            config.validate()?;
            Ok(config)
        }
    }
}

/// Content root: explicit `--source` wins over the configured content_dir.
fn content_root(cli: &Cli, config: &config::DocsConfig) -> PathBuf {
    cli.source
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.content_dir))
}
