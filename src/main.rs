use buildscope::{changeset::ChangeSet, classify, config, diff, output};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

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

/// Shared flags for commands that produce a build decision.
#[derive(clap::Args, Clone)]
struct DecideArgs {
    /// Force a Full rebuild regardless of what changed (e.g. from a
    /// scheduled trigger)
    #[arg(long)]
    force_full: bool,

    /// Emit the decision as JSON instead of text
    #[arg(long)]
    json: bool,
}

#[derive(Parser)]
#[command(name = "buildscope")]
#[command(about = "Build-scope classifier for Git-backed static content sites")]
#[command(long_about = "\
Build-scope classifier for Git-backed static content sites

Given the file paths that changed since the last successful build, buildscope
picks one of three build modes and tells the site generator which pages to
regenerate:

  full      everything (only via --force-full, e.g. a scheduled trigger)
  priority  a fixed curated list (home, category pages, recent-articles
            index) — chosen when any high-impact path changed
  minimal   exactly the pages derived from the changed paths

Content layout the stock config expects:

  content-repo/
  ├── buildscope.toml              # Policy config (optional)
  ├── high-priority/               # Always-fresh editorial → priority build
  ├── recent-articles/             # Current articles      → priority build
  ├── categories/                  # Taxonomy pages        → priority build
  ├── archive/                     # Archived content      → minimal build
  └── anything-else                # No page to rebuild    → ignored

Which roots map to which category, and which pages a priority build
regenerates, are policy: override them in buildscope.toml.

Run 'buildscope gen-config' to generate a documented buildscope.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Content repository directory
    #[arg(long, default_value = ".", global = true)]
    repo: PathBuf,

    /// Config file (default: buildscope.toml in the repository)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Diff the repository and decide the build scope
    Decide {
        /// Revision of the last successful build
        #[arg(long)]
        from: String,
        /// Revision to build
        #[arg(long, default_value = "HEAD")]
        to: String,
        #[command(flatten)]
        args: DecideArgs,
    },
    /// Decide the build scope for an explicit list of changed paths
    Classify {
        /// Changed paths, repository-relative (empty = nothing changed)
        paths: Vec<String>,
        #[command(flatten)]
        args: DecideArgs,
    },
    /// Print the categorized change set between two revisions
    Diff {
        /// Revision of the last successful build
        #[arg(long)]
        from: String,
        /// Revision to build
        #[arg(long, default_value = "HEAD")]
        to: String,
    },
    /// Print a stock buildscope.toml with all options documented
    GenConfig,
}

fn load_config(cli: &Cli) -> Result<config::ScopeConfig, config::ConfigError> {
    match &cli.config {
        Some(path) => config::load_config_file(path),
        None => config::load_config(&cli.repo),
    }
}

fn emit_decision(decision: &classify::BuildDecision, json: bool) -> serde_json::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(decision)?);
    } else {
        output::print_decision(decision);
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match &cli.command {
        Command::Decide { from, to, args } => {
            let scope_config = load_config(&cli)?;
            let paths = diff::changed_paths(&cli.repo, from, to)?;
            let changes = ChangeSet::new(paths)?;
            let decision = classify::decide(&changes, args.force_full, &scope_config);
            emit_decision(&decision, args.json)?;
        }
        Command::Classify { paths, args } => {
            let scope_config = load_config(&cli)?;
            let changes = ChangeSet::new(paths.clone())?;
            let decision = classify::decide(&changes, args.force_full, &scope_config);
            emit_decision(&decision, args.json)?;
        }
        Command::Diff { from, to } => {
            let scope_config = load_config(&cli)?;
            let paths = diff::changed_paths(&cli.repo, from, to)?;
            let changes = ChangeSet::new(paths)?;
            output::print_changeset(&changes, &scope_config.roots);
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
