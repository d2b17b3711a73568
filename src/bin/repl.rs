use anyhow::Result;
use clap::Parser;
use mob_roller::gateway::CallerRole;
use mob_roller::{console::ConsoleGateway, roll::DefaultRoller, Dispatcher, RollerConfig, Trigger};
use rand::SeedableRng;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(version, about = "Roll monster presets for the GM")]
struct Cli {
    /// Config file to use instead of the platform default.
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Refuse to roll while no scene is open.
    #[arg(long)]
    strict: bool,
    /// Echo clicks, role and results as extra messages.
    #[arg(short, long)]
    verbose: bool,
    /// Act as a non-GM caller.
    #[arg(long)]
    player: bool,
    /// Pretend no scene is open.
    #[arg(long)]
    no_scene: bool,
    /// A single trigger to run, e.g. `bbeg 3`. Reads stdin when absent.
    trigger: Vec<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mob_roller=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();
    let mut config = match &cli.config {
        Some(path) => RollerConfig::load_path(path)?,
        None => RollerConfig::load()?,
    };
    config.strict_scene_check |= cli.strict;
    config.verbose_toasts |= cli.verbose;

    let role = if cli.player {
        CallerRole::Other
    } else {
        CallerRole::Privileged
    };
    let gateway = ConsoleGateway::new(tokio::io::stdout(), role, !cli.no_scene);
    let dispatcher = Dispatcher::new(Arc::new(gateway), config);

    if !cli.trigger.is_empty() {
        let trigger: Trigger = cli.trigger.join(" ").parse()?;
        dispatcher.run(trigger, DefaultRoller::from_entropy()).await?;
        return Ok(());
    }

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    print!("> ");
    io::stdout().flush()?;
    while let Some(Ok(line)) = lines.next() {
        let line = line.trim();
        match line {
            "" => {}
            "quit" | "exit" => break,
            _ => match line.parse::<Trigger>() {
                Ok(trigger) => {
                    if let Err(why) = dispatcher.run(trigger, DefaultRoller::from_entropy()).await {
                        eprintln!("Error: {}", why);
                    }
                }
                Err(why) => eprintln!("Error: {}", why),
            },
        }
        print!("> ");
        io::stdout().flush()?;
    }
    Ok(())
}
