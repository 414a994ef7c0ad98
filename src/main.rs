use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};

use version_bump::cli::{self, CommandArgs};
use version_bump::domain::VersionBump;
use version_bump::{logging, ui, VersionBumpError};

#[derive(Parser)]
#[command(
    name = "version-bump",
    about = "Read and bump semantic versions kept in a VERSION file or pyproject.toml",
    version
)]
struct Args {
    #[arg(
        short,
        long,
        global = true,
        action = clap::ArgAction::Count,
        help = "Increase log verbosity (-v info, -vv debug, -vvv trace)"
    )]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the current version
    GetVersion {
        #[command(flatten)]
        files: FileArgs,
    },
    /// Bump one component of the version and write it back
    BumpVersion {
        #[arg(value_enum, help = "Component to bump")]
        bump: BumpArg,

        #[command(flatten)]
        files: FileArgs,

        #[arg(long, help = "Preview the new version without writing it")]
        dry_run: bool,
    },
}

#[derive(clap::Args)]
struct FileArgs {
    #[arg(long, value_name = "PATH", help = "Plain text file holding the version")]
    version_file: Option<PathBuf>,

    #[arg(
        long,
        value_name = "PATH",
        help = "pyproject.toml with a [tool.poetry] version field"
    )]
    pyproject_file: Option<PathBuf>,
}

impl FileArgs {
    fn into_command_args(self, dry_run: bool) -> CommandArgs {
        CommandArgs {
            version_file: self.version_file,
            pyproject_file: self.pyproject_file,
            dry_run,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum BumpArg {
    Major,
    Minor,
    Patch,
}

impl From<BumpArg> for VersionBump {
    fn from(arg: BumpArg) -> Self {
        match arg {
            BumpArg::Major => VersionBump::Major,
            BumpArg::Minor => VersionBump::Minor,
            BumpArg::Patch => VersionBump::Patch,
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(args.verbose);

    match run(args.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let message = format!("{:#}", e);
            tracing::error!(error = %message, "command failed");
            ui::display_error(&message);
            exit_code_for(&e)
        }
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::GetVersion { files } => {
            let args = files.into_command_args(false);
            let version = cli::get_version(&args).context("Failed to read version")?;
            ui::display_version(&version);
        }
        Command::BumpVersion {
            bump,
            files,
            dry_run,
        } => {
            let bump = VersionBump::from(bump);
            let args = files.into_command_args(dry_run);
            let outcome = cli::bump_version(bump, &args)
                .with_context(|| format!("Failed to bump {} version", bump))?;
            ui::display_bump(&outcome);
        }
    }
    Ok(())
}

/// 3 for a missing source, 4 for filesystem failures, 1 for everything else.
/// clap exits with 2 on usage errors before we get here.
fn exit_code_for(err: &anyhow::Error) -> ExitCode {
    match err.downcast_ref::<VersionBumpError>() {
        Some(VersionBumpError::NoVersionSource { .. }) => ExitCode::from(3),
        Some(VersionBumpError::Io { .. }) => ExitCode::from(4),
        _ => ExitCode::FAILURE,
    }
}
