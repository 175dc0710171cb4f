use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use snaprotate::config::{discovery, loader};
use snaprotate::display;
use snaprotate::models::{Profile, RunOptions};
use snaprotate::ops::SystemOps;
use snaprotate::prompt::StdinConfirm;
use snaprotate::rotation::RotationEngine;

#[derive(Parser)]
#[command(
    name = "snaprotate",
    version,
    about = "Backup tool with pre-defined profiles and rotated incremental snapshots",
    long_about = "snaprotate backs up directories according to pre-defined profiles. \
                  Incremental profiles keep dated snapshots where unmodified files \
                  are shared between snapshots via hard links, and the oldest \
                  snapshot is rotated out once the retention count is reached."
)]
struct Cli {
    /// Name(s) of the profiles to back up
    profiles: Vec<String>,

    /// Profile definition file
    #[arg(long, default_value = "backup.yaml")]
    file: String,

    /// Print verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Simulate the backup process without changing anything
    #[arg(short = 'n', long = "dry-run")]
    dry_run: bool,

    /// Show all details of the specified profiles
    #[arg(short = 'p', long = "profile-details")]
    profile_details: bool,

    /// Print a profile definition template to stdout
    #[arg(short = 't', long = "print-template")]
    print_template: bool,

    /// Delete files on the target if they no longer exist on the source
    #[arg(long)]
    delete: bool,

    /// Restore a backup to the source directory (switches source and target)
    #[arg(long)]
    restore: bool,

    /// Date of the snapshot to restore for incremental profiles
    #[arg(long = "restore-date", value_name = "YYYY-MM-DD")]
    restore_date: Option<String>,

    /// Activate debug logging
    #[arg(long)]
    debug: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(debug: bool) {
    let default_level = if debug { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();
}

fn run(cli: Cli) -> Result<ExitCode> {
    if cli.print_template {
        print!("{}", loader::profile_template());
        return Ok(ExitCode::SUCCESS);
    }

    // Locate and load the definition file
    let (file, candidates) = discovery::find_definition_file(&cli.file)?;
    let Some(file) = file else {
        println!("Definition file not found:");
        for candidate in candidates {
            println!("  {}", candidate.display());
        }
        return Ok(ExitCode::FAILURE);
    };

    debug!("Parsing definition file: {}", file.display());
    let (defined_profiles, errors) = loader::load_profiles(&file)?;
    if !errors.is_empty() {
        println!("Definition file: {}", file.display());
        println!();
        println!("Error while parsing definition file:");
        for error in &errors {
            println!("  {}", error);
        }
        return Ok(ExitCode::FAILURE);
    }

    if cli.profiles.is_empty() {
        print!("{}", display::format_profile_list(&defined_profiles));
        return Ok(ExitCode::SUCCESS);
    }

    // Resolve the requested profile names
    let mut selected: Vec<&Profile> = Vec::new();
    let mut unknown_names: Vec<&String> = Vec::new();
    for name in &cli.profiles {
        match defined_profiles.iter().find(|p| p.name == *name) {
            Some(profile) => selected.push(profile),
            None => unknown_names.push(name),
        }
    }
    if !unknown_names.is_empty() {
        for name in &unknown_names {
            println!("Profile \"{}\" not found", name);
        }
        println!();
        print!("{}", display::format_profile_list(&defined_profiles));
        return Ok(ExitCode::FAILURE);
    }

    if cli.profile_details {
        println!("Definition file: {}", file.display());
        println!();
        for (i, profile) in selected.iter().enumerate() {
            if i > 0 {
                println!();
            }
            print!("{}", display::format_profile_detail(profile));
        }
        return Ok(ExitCode::SUCCESS);
    }

    let options = RunOptions {
        simulate: cli.dry_run,
        verbose: cli.verbose,
        delete: cli.delete,
        restore_date: cli.restore_date,
    };
    let ops = SystemOps::new(&options);
    let confirm = StdinConfirm;
    let engine = RotationEngine::new(&ops, &confirm);

    // Each profile runs behind its own error boundary: one failing profile
    // is reported and the batch moves on to the next
    let mut failed = false;
    for profile in selected {
        let result = if cli.restore {
            engine.restore(profile, &options)
        } else {
            engine.backup(profile, &options)
        };
        if let Err(err) = result {
            eprintln!("Error: {}", err);
            failed = true;
        }
        println!();
    }

    Ok(if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}
