use std::io::Write;

use clap::{Parser, Subcommand};
use tyrant_cli::CliContext;
use tyrant_cli::commands;
use tyrant_cli::logging;
use tyrant_cli::pack_watcher;
use tyrant_cli::readline;

#[tokio::main]
async fn main() -> Result<(), String> {
    logging::init();
    let ctx = CliContext::new();

    // Load the configured pack and start watching it for edits
    commands::load_pack(None, &ctx).await;
    if let Some(handle) = pack_watcher::init_watcher(&ctx).await {
        ctx.tasks.lock().await.watcher = Some(handle);
    }

    loop {
        let line = readline()?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match respond(line, &ctx).await {
            Ok(quit) => {
                if quit {
                    break;
                }
            }
            Err(err) => {
                write!(std::io::stdout(), "{err}").map_err(|e| e.to_string())?;
                std::io::stdout().flush().map_err(|e| e.to_string())?;
            }
        }
    }

    Ok(())
}

#[derive(Parser)]
#[command(version, about = "boss encounter console")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Reload boss definitions from the pack directory
    Load {
        #[arg(short, long)]
        dir: Option<String>,
    },
    /// List loaded bosses
    List,
    /// Spawn a boss
    Spawn {
        #[arg(short, long)]
        id: String,
    },
    /// Trigger the start condition
    Engage,
    /// Land a hit on the boss
    Hit {
        #[arg(short, long)]
        amount: u32,
    },
    /// Let the boss regenerate health
    Heal {
        #[arg(short, long)]
        amount: u32,
    },
    /// Open the boss's defense window (or close it with --off)
    Guard {
        #[arg(short, long, default_value_t = 0.5)]
        reduction: f32,
        #[arg(short, long, default_value_t = 3.0)]
        duration: f32,
        #[arg(long)]
        off: bool,
    },
    /// Play an inline script, e.g. "shoot 0.3, beam 1.0"
    Script { text: String },
    /// Play a built-in pattern
    Pattern {
        #[arg(short, long)]
        id: u16,
    },
    /// Cancel the active attack sequence
    Cancel,
    /// Advance simulated time
    Run {
        #[arg(short, long, default_value_t = 5.0)]
        secs: f32,
    },
    /// Advance one tick (or several)
    Step {
        #[arg(short, long, default_value_t = 1)]
        count: u32,
    },
    /// Show the encounter summary
    Status,
    /// Give or take the stub world's target
    Target {
        #[arg(long)]
        off: bool,
    },
    /// Show configuration
    Config,
    /// Change the definitions directory
    SetDirectory {
        #[arg(short, long)]
        path: String,
    },
    #[command(alias = "quit")]
    Exit,
}

async fn respond(line: &str, ctx: &CliContext) -> Result<bool, String> {
    let mut args = shlex::split(line).ok_or("error: Invalid quoting")?;
    args.insert(0, "tyrant".to_string());
    let cli = Cli::try_parse_from(args).map_err(|e| e.to_string())?;

    match &cli.command {
        Some(Commands::Load { dir }) => commands::load_pack(dir.as_deref(), ctx).await,
        Some(Commands::List) => commands::list_bosses(ctx).await,
        Some(Commands::Spawn { id }) => commands::spawn(id, ctx).await,
        Some(Commands::Engage) => commands::engage(ctx).await,
        Some(Commands::Hit { amount }) => commands::hit(*amount, ctx).await,
        Some(Commands::Heal { amount }) => commands::heal(*amount, ctx).await,
        Some(Commands::Guard {
            reduction,
            duration,
            off,
        }) => commands::guard(*off, *duration, *reduction, ctx).await,
        Some(Commands::Script { text }) => commands::play_script(text, ctx).await,
        Some(Commands::Pattern { id }) => commands::play_pattern(*id, ctx).await,
        Some(Commands::Cancel) => commands::cancel(ctx).await,
        Some(Commands::Run { secs }) => commands::run(*secs, ctx).await,
        Some(Commands::Step { count }) => commands::step(*count, ctx).await,
        Some(Commands::Status) => commands::status(ctx).await,
        Some(Commands::Target { off }) => commands::set_target(*off, ctx).await,
        Some(Commands::Config) => commands::show_config(ctx).await,
        Some(Commands::SetDirectory { path }) => commands::set_directory(path, ctx).await,
        Some(Commands::Exit) => {
            commands::exit();
            return Ok(true);
        }
        None => {}
    }
    Ok(false)
}
