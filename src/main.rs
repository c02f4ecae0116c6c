use clap::Parser;

#[derive(Parser)]
#[command(name = "hackle", about = "Browse Hacker News search results in the terminal")]
struct Cli {
    /// Search for this term at startup instead of the configured default.
    #[arg(long)]
    query: Option<String>,

    /// Write debug logs to /tmp/hackle-debug.log (tail -f to inspect).
    #[arg(long)]
    debug: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.debug {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/hackle-debug.log")?;
        tracing_subscriber::fmt()
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
        tracing::info!("hackle debug log started — tail -f /tmp/hackle-debug.log");
    }

    hackle_tui::run(cli.query)
}
