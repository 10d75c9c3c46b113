//! delivery-mode – look up JMS delivery modes by name or header code.
//
//  $ delivery-mode list
//  PERSISTENT=2
//  NON_PERSISTENT=1
//  $ delivery-mode code non-persistent
//  1
//  $ delivery-mode name 2
//  PERSISTENT
use delivery_mode::config::resolve_config;
use delivery_mode::{logging::init_logging, Config, DeliveryMode};

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "delivery-mode",
    version,
    about = "JMS delivery mode name/code lookup"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print every delivery mode with its header code.
    List,
    /// Print the header code for a delivery mode name.
    Code {
        /// PERSISTENT or NON_PERSISTENT (case-insensitive)
        mode: DeliveryMode,
    },
    /// Print the delivery mode name for a header code.
    Name {
        #[arg(allow_negative_numbers = true)]
        code: i32,
    },
    /// Print the configured default delivery mode.
    Default {
        /// Path to config TOML (env DELIVERY_MODE_DEFAULT overrides the mode)
        #[arg(short, long)]
        config: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    init_logging()?;

    let cli = Cli::parse();
    match cli.cmd {
        Command::List => {
            for mode in DeliveryMode::ALL {
                println!("{mode}={}", mode.jms_code());
            }
        }
        Command::Code { mode } => println!("{}", mode.jms_code()),
        Command::Name { code } => println!("{}", DeliveryMode::try_from(code)?),
        Command::Default { config } => {
            let cfg: Config = resolve_config(config.as_deref())?;
            let mode = cfg.delivery.default_mode;
            println!("{mode}={}", mode.jms_code());
        }
    }
    Ok(())
}
