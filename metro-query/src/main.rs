use std::io;

use tracing_subscriber::EnvFilter;

use metro_query::cli::run_interactive;
use metro_query::metro::{MetroClient, MetroConfig};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Logs go to stderr; stdout is for results.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let config = MetroConfig::from_lookup(|key| std::env::var(key).ok());
    let client = match MetroClient::new(config) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Failed to create metro client: {e}");
            return;
        }
    };

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    if let Err(e) = run_interactive(&client, stdin.lock(), &mut stdout).await {
        eprintln!("I/O error: {e}");
    }
}
