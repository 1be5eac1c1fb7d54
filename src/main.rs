use std::path::PathBuf;

use anyhow::anyhow;
use clap::Parser;

use roster::config::{Config, ConfigError};
use roster::logging::init_tracing;
use roster::RosterStore;
use roster::shutdown::ShutdownHandle;

#[derive(Parser, Debug)]
#[command(name = "roster", version, about = "Edit a list of user names in the terminal")]
struct Cli {
    /// Path to the config file (default: <config_dir>/roster/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Override the log filter (e.g. "debug" or "roster=trace")
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<String>,

    /// Hide the state dump panel
    #[arg(long)]
    no_debug_panel: bool,

    /// Print the initial state as JSON and exit
    #[arg(long)]
    print_state: bool,
}

impl Cli {
    fn apply(&self, config: &mut Config) {
        if let Some(level) = &self.log_level {
            config.logging.level = level.clone();
        }
        if self.no_debug_panel {
            config.ui.show_debug_panel = false;
        }
    }
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = load_config(&cli)?;

    if cli.print_state {
        println!("{}", RosterStore::new().state().to_debug_json()?);
        return Ok(());
    }

    let log_path = init_tracing(&config.logging)?;
    tracing::info!(
        log = %log_path.display(),
        config = ?cli.config,
        version = env!("CARGO_PKG_VERSION"),
        "roster starting"
    );

    let shutdown = ShutdownHandle::new();
    shutdown
        .install_signal_handlers()
        .map_err(|err| anyhow!("Failed to install signal handlers: {err}"))?;

    roster::ui::run(&config.ui, shutdown).map_err(|err| anyhow!("Terminal UI failed: {err}"))?;
    tracing::info!("roster exited");
    Ok(())
}

fn load_config(cli: &Cli) -> Result<Config, ConfigError> {
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    cli.apply(&mut config);
    config.validate()?;
    Ok(config)
}
