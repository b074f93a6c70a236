//! # relay
//!
//! Interactive terminal front end of the order relay.
//!
//! 1.  Reads the [`RelayConfig`] from flags and `RELAY_*` variables.
//! 2.  Starts a [`RelaySystem`] seeded with the sample orders.
//! 3.  Feeds stdin through the [`Shell`] until `:quit` or end of input.
//!
//! Diagnostics go to stderr; raise them with `RUST_LOG=info`.

use anyhow::{Context, Result};
use clap::Parser;
use relay_app::lifecycle::{RelayConfig, RelaySystem};
use relay_app::shell::{Output, Shell, ShellCommand};
use relay_framework::tracing::setup_tracing;
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{error, info};

#[derive(Debug, Parser)]
#[command(name = "relay", version, about = "Food-delivery order relay shell")]
struct CommandArguments {
    /// Messages the queue holds before rejecting new ones
    #[arg(long, env = "RELAY_CAPACITY", default_value_t = 10)]
    capacity: usize,

    /// Number of the first seeded order
    #[arg(long = "first-order", env = "RELAY_FIRST_ORDER", default_value_t = 1000)]
    first_order: u32,

    /// Restaurant that receives NEW orders
    #[arg(long, env = "RELAY_RESTAURANT", default_value = "Domino's")]
    restaurant: String,

    /// Item of a NEW order
    #[arg(long, env = "RELAY_ITEM", default_value = "Pizza")]
    item: String,

    /// Queue messages without handling them; use :process to drain
    #[arg(long)]
    manual: bool,
}

impl From<CommandArguments> for RelayConfig {
    fn from(args: CommandArguments) -> Self {
        Self {
            capacity: args.capacity,
            first_order_number: args.first_order,
            default_restaurant: args.restaurant,
            default_item: args.item,
            auto_process: !args.manual,
            ..Default::default()
        }
    }
}

fn print_lines(lines: &[String]) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    for line in lines {
        writeln!(stdout, "{line}")?;
    }
    stdout.flush()?;
    Ok(())
}

fn prompt(shell: &Shell) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    write!(stdout, "[{}] > ", shell.role())?;
    stdout.flush()?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    setup_tracing();

    let config = RelayConfig::from(CommandArguments::parse());
    let system = RelaySystem::new(config).context("Failed to start relay")?;
    let mut shell = Shell::new(system.client.clone(), &system.config);

    print_lines(&[shell.welcome(), "Type :help for commands.".to_string()])?;

    let mut stdin = BufReader::new(tokio::io::stdin()).lines();
    loop {
        prompt(&shell)?;
        let Some(line) = stdin.next_line().await.context("Failed to read input")? else {
            break;
        };
        match shell.execute(ShellCommand::parse(&line)).await {
            Ok(Output::Lines(lines)) => print_lines(&lines)?,
            Ok(Output::Clear(lines)) => {
                print!("\x1B[2J\x1B[H");
                print_lines(&lines)?;
            }
            Ok(Output::Quit) => break,
            Err(e) => {
                error!(error = %e, "Command failed");
                print_lines(&[format!("Error: {e}")])?;
            }
        }
    }

    drop(shell);
    system.shutdown().await?;
    info!("Goodbye");
    Ok(())
}
