// pickhost/src/main.rs

use anyhow::Result;
use clap::Parser;
use pickhost::cli::{edit_hosts, pick_host};
use pickhost::constants::HOSTS_FILE_ENV;
use pickhost::{AppDirs, CacheManager, PromptPicker};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "pickhost")]
#[command(about = "A simple SSH host manager in terminal", long_about = None)]
#[command(version = env!("PICKHOST_CLI_VERSION"))]
struct Cli {
    /// Config file (defaults to the platform hosts file)
    #[arg(short = 'f', long = "file", value_name = "FILE", env = HOSTS_FILE_ENV)]
    file: Option<PathBuf>,

    /// Edit config file rather than show it
    #[arg(short, long)]
    edit: bool,
}

fn entrypoint() -> Result<()> {
    pretty_env_logger::init();
    let cli = Cli::parse();

    let dirs = AppDirs::discover()?;
    let hosts_file = match cli.file {
        Some(file) => file,
        None => dirs.hosts_file(true)?,
    };

    if cli.edit {
        return edit_hosts(&hosts_file);
    }

    let cache = CacheManager::new(dirs.cache_file()?);
    let stdin = io::stdin();
    let mut picker = PromptPicker::new(stdin.lock(), io::stderr());

    // Menu and exports both go to stderr.
    pick_host(&hosts_file, &cache, &mut picker, &mut io::stderr())?;
    Ok(())
}

fn main() -> ExitCode {
    match entrypoint() {
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
        Ok(_) => ExitCode::SUCCESS,
    }
}
