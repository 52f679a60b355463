use std::path::PathBuf;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};

use pkg_version::cli::{self, AdjustArgs, CopyArgs, CreateTsArgs, ManifestArgs, Session};
use pkg_version::config;
use pkg_version::fs::OsFileStore;
use pkg_version::logging;
use pkg_version::manifest::ManifestKind;
use pkg_version::ui::{ConsoleNotifier, Notifier};
use pkg_version::{Direction, VersionPart};

#[derive(Parser)]
#[command(
    name = "pkg-version",
    version,
    about = "Bump the version in package.json and copy it into project files"
)]
struct Args {
    #[arg(long, global = true, help = "Path to the manifest file")]
    package: Option<PathBuf>,

    #[arg(
        long = "type",
        global = true,
        value_parser = clap::value_parser!(ManifestKind),
        help = "Manifest type to look for (npm, composer or deno)"
    )]
    manifest_type: Option<ManifestKind>,

    #[arg(short, long, global = true, help = "Custom configuration file path")]
    config: Option<PathBuf>,

    #[arg(short, long, global = true, help = "Print debug logs to stderr")]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Replace a placeholder with the manifest version in a file or directory tree
    Copyto {
        /// File or directory to update
        target: String,
        /// Placeholder to replace [default: __VERSION__]
        #[arg(long)]
        subject: Option<String>,
    },
    /// Increase or decrease the major version
    Major(DirectionFlags),
    /// Increase or decrease the minor version
    Minor(DirectionFlags),
    /// Increase or decrease the patch version
    Patch(DirectionFlags),
    /// Write a TypeScript file exporting the manifest version
    CreateTs {
        /// Output file, or a directory to place version.ts in
        target: String,
        /// Use single quotes
        #[arg(long)]
        single_quotes: bool,
        /// Terminate the statement with a semicolon
        #[arg(long)]
        semi: bool,
    },
}

#[derive(clap::Args)]
struct DirectionFlags {
    /// Increment the part (default)
    #[arg(long, conflicts_with = "down")]
    up: bool,
    /// Decrement the part, stopping at 0
    #[arg(long)]
    down: bool,
}

impl DirectionFlags {
    fn direction(&self) -> Direction {
        if self.down && !self.up {
            Direction::Down
        } else {
            Direction::Up
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init_tracing(logging::level_for(args.verbose));

    let Some(command) = args.command else {
        Args::command().print_help()?;
        println!();
        return Ok(());
    };

    // Failures are reported through the notifier; the exit code stays 0.
    let notifier = ConsoleNotifier::new();
    let working_dir = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            notifier.error(&format!("Cannot access the working directory: {}", e));
            return Ok(());
        }
    };

    let config = match config::load_config(args.config.as_deref(), &working_dir) {
        Ok(cfg) => cfg,
        Err(e) => {
            notifier.error(&format!("Error loading config: {}", e));
            return Ok(());
        }
    };

    let store = OsFileStore::new();
    let session = Session {
        working_dir: &working_dir,
        config: &config,
        store: &store,
        notifier: &notifier,
    };
    let manifest = ManifestArgs {
        package: args.package,
        kind: args.manifest_type,
    };

    let outcome = match command {
        Commands::Copyto { target, subject } => cli::run_copy(
            &session,
            &CopyArgs {
                target,
                subject,
                manifest,
            },
        )
        .map(|_| ()),
        Commands::Major(flags) => adjust(&session, VersionPart::Major, &flags, manifest),
        Commands::Minor(flags) => adjust(&session, VersionPart::Minor, &flags, manifest),
        Commands::Patch(flags) => adjust(&session, VersionPart::Patch, &flags, manifest),
        Commands::CreateTs {
            target,
            single_quotes,
            semi,
        } => cli::run_create_ts(
            &session,
            &CreateTsArgs {
                target,
                single_quotes,
                semi,
                manifest,
            },
        )
        .map(|_| ()),
    };

    if let Err(e) = outcome {
        tracing::debug!(error = %e, "command failed");
    }
    Ok(())
}

fn adjust(
    session: &Session<'_>,
    part: VersionPart,
    flags: &DirectionFlags,
    manifest: ManifestArgs,
) -> pkg_version::Result<()> {
    cli::run_adjust(
        session,
        &AdjustArgs {
            part,
            direction: flags.direction(),
            manifest,
        },
    )
    .map(|_| ())
}
