use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use webjar_locator::logging::init_logging;
use webjar_locator::models::{ListingRecord, ResolutionRecord};
use webjar_locator::{AssetRef, LocatorConfig, PathIndex};

/// Resolve partial WebJar asset paths to their full, versioned locations.
#[derive(Debug, Parser)]
#[command(name = "webjar-locator", version, about)]
struct Cli {
  /// Directory holding `webjar-locator.config.json`.
  #[arg(long, global = true, default_value = ".")]
  config: PathBuf,

  /// Extra search root (directory or .jar/.zip); may be repeated.
  #[arg(long = "root", global = true)]
  roots: Vec<PathBuf>,

  /// Override the namespace prefix assets live under.
  #[arg(long, global = true)]
  namespace: Option<String>,

  /// Emit JSON instead of plain text.
  #[arg(long, global = true)]
  json: bool,

  /// Enable debug logging.
  #[arg(short, long, global = true)]
  verbose: bool,

  #[command(subcommand)]
  command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
  /// Print the full path a partial path identifies.
  Resolve { partial: String },
  /// Exit successfully only when the partial path identifies exactly one asset.
  Check { partial: String },
  /// List every asset below a folder, e.g. `/bootstrap/2.2.2`.
  List { folder: String },
  /// Resolve a path relative to another asset, e.g. `font-awesome.css ../fonts/x.eot`.
  Relative { base: String, path: String },
}

fn main() -> Result<ExitCode> {
  let cli = Cli::parse();
  init_logging(cli.verbose);

  let index = load_index(&cli)?;

  match &cli.command {
    Command::Resolve { partial } => {
      let asset = AssetRef::new(&index, partial)?;
      report(&cli, partial, asset.full_path())
    }
    Command::Check { partial } => {
      let valid = AssetRef::new(&index, partial)?.is_valid();
      if !cli.json {
        println!("{}", if valid { "valid" } else { "invalid" });
      } else {
        println!("{}", serde_json::json!({ "query": partial, "valid": valid }));
      }
      Ok(if valid { ExitCode::SUCCESS } else { ExitCode::FAILURE })
    }
    Command::List { folder } => {
      let assets: Vec<String> = index.list_assets(folder).into_iter().collect();
      if cli.json {
        let record = ListingRecord {
          folder: folder.clone(),
          assets,
        };
        println!("{}", serde_json::to_string_pretty(&record)?);
      } else {
        for asset in assets {
          println!("{asset}");
        }
      }
      Ok(ExitCode::SUCCESS)
    }
    Command::Relative { base, path } => {
      let relative = AssetRef::new(&index, base)?.relative(path)?;
      report(&cli, relative.uri(), relative.full_path())
    }
  }
}

fn load_index(cli: &Cli) -> Result<PathIndex> {
  let cwd = std::env::current_dir().context("reading current directory")?;
  configure(cli, &cwd)?
    .build_index(&cli.config)
    .context("building the asset index")
}

/// Configuration from `--config`, with `--root` entries appended and `--namespace` applied.
///
/// Extra roots are taken relative to `cwd`, not to the configuration directory.
fn configure(cli: &Cli, cwd: &Path) -> Result<LocatorConfig> {
  let mut config = LocatorConfig::discover(&cli.config)
    .with_context(|| format!("loading configuration from {}", cli.config.display()))?;

  config
    .search_roots
    .extend(cli.roots.iter().map(|root| cwd.join(root)));
  if let Some(namespace) = &cli.namespace {
    config.namespace_prefix = namespace.clone();
  }
  Ok(config)
}

fn report(
  cli: &Cli,
  query: &str,
  result: webjar_locator::LocatorResult<&str>,
) -> Result<ExitCode> {
  let ok = result.is_ok();
  let text = render(cli.json, query, result)?;
  if ok || cli.json {
    println!("{text}");
  } else {
    eprintln!("{text}");
  }
  Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}

fn render(json: bool, query: &str, result: webjar_locator::LocatorResult<&str>) -> Result<String> {
  if json {
    let record = ResolutionRecord::from_result(query, result);
    return Ok(serde_json::to_string_pretty(&record)?);
  }
  Ok(match result {
    Ok(path) => path.to_string(),
    Err(err) => err.to_string(),
  })
}
