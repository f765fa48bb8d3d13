use clap::{CommandFactory, Parser, Subcommand};

mod commands;
mod prompt;
mod sinks;

#[derive(Parser)]
#[command(name = "pausa", version, about = "Work/break interval timer for the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start a work/break session
    Start {
        /// Work duration in minutes (prompts when omitted)
        #[arg(long, value_name = "MINUTES")]
        work: Option<u64>,
        /// Break duration in minutes (prompts when omitted)
        #[arg(long = "break", value_name = "MINUTES")]
        break_minutes: Option<u64>,
        /// End the session after one work/break pair instead of cycling
        #[arg(long)]
        no_chain: bool,
        /// Tick period in milliseconds
        #[arg(long, hide = true, default_value_t = 1000)]
        tick_ms: u64,
    },
    /// Start a standalone break
    Break {
        /// Break duration in minutes (prompts when omitted)
        minutes: Option<u64>,
        /// Tick period in milliseconds
        #[arg(long, hide = true, default_value_t = 1000)]
        tick_ms: u64,
    },
    /// Stop the running session
    Stop,
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Generate shell completions
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Start {
            work,
            break_minutes,
            no_chain,
            tick_ms,
        } => commands::session::start(work, break_minutes, no_chain, tick_ms).await,
        Commands::Break { minutes, tick_ms } => {
            commands::session::start_break(minutes, tick_ms).await
        }
        Commands::Stop => commands::session::stop(),
        Commands::Config { action } => commands::config::run(action),
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "pausa", &mut std::io::stdout());
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
