//! Strictly XO - console launcher
//!
//! Lists variants, plays a single game, or runs the interactive menu.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use std::io::{BufRead, IsTerminal, Write};
use strictly_grid::PlayerKind;
use strictly_xo::{Console, GameConfig, GameErrorKind, VariantId};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = GameConfig::load(cli.config.as_deref())?;
    initialize_tracing(&config);

    match cli.command {
        Command::List => list_variants(),
        Command::Play {
            variant,
            x,
            o,
            depth,
            seed,
            dictionary,
        } => {
            let mut config = match depth {
                Some(depth) => config.with_search_depth(depth)?,
                None => config,
            };
            if let Some(seed) = seed {
                config = config.with_obstacle_seed(seed);
            }
            if let Some(path) = dictionary {
                config = config.with_dictionary(path);
            }
            let mut console = stdio_console();
            variant.play(&config, x, o, &mut console)?;
            Ok(())
        }
        Command::Menu => run_menu(&config, &mut stdio_console()),
    }
}

/// Logs go to stderr so they never interleave with the board.
fn initialize_tracing(config: &GameConfig) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.log_level())),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn stdio_console() -> Console<std::io::StdinLock<'static>, std::io::StdoutLock<'static>> {
    let color = std::io::stdout().is_terminal();
    Console::new(std::io::stdin().lock(), std::io::stdout().lock()).with_color(color)
}

fn list_variants() -> Result<()> {
    for id in VariantId::all() {
        println!("{:<14} {}", id.to_string(), id.rules());
    }
    Ok(())
}

/// Menu loop; end of input quits.
#[instrument(skip_all)]
fn run_menu<R: BufRead, W: Write>(config: &GameConfig, console: &mut Console<R, W>) -> Result<()> {
    let variants = VariantId::all();
    let kinds = [PlayerKind::Human, PlayerKind::Computer];
    loop {
        console.say("")?;
        for (n, id) in variants.iter().enumerate() {
            console.say(format!("{:>2}. {}", n + 1, id))?;
        }
        console.say(format!("{:>2}. quit", variants.len() + 1))?;

        let picked = match console.choose("Variant: ", variants.len() + 1) {
            Ok(n) => n,
            Err(e) if matches!(e.kind, GameErrorKind::InputClosed) => return Ok(()),
            Err(e) => return Err(e.into()),
        };
        let Some(&variant) = variants.get(picked - 1) else {
            info!("Menu closed");
            return Ok(());
        };

        console.say("1. human  2. computer")?;
        let x = kinds[console.choose("X plays as: ", kinds.len())? - 1];
        let o = kinds[console.choose("O plays as: ", kinds.len())? - 1];
        variant.play(config, x, o, console)?;
    }
}
