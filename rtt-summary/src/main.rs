use rtt_summary::domain::Crs;
use rtt_summary::rtt::{RttClient, RttConfig};
use rtt_summary::summary::{OperatorIcons, Summarizer};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let mut args = std::env::args().skip(1);
    let (origin, destination) = match (args.next(), args.next()) {
        (Some(o), Some(d)) => (o, d),
        _ => {
            eprintln!("usage: rtt-summary ORIGIN DEST   (3-letter CRS codes, e.g. KGX YRK)");
            std::process::exit(2);
        }
    };

    let origin = Crs::parse(&origin).unwrap_or_else(|e| {
        eprintln!("bad origin {origin:?}: {e}");
        std::process::exit(2);
    });
    let destination = Crs::parse(&destination).unwrap_or_else(|e| {
        eprintln!("bad destination {destination:?}: {e}");
        std::process::exit(2);
    });

    // Credentials come from the environment at the edge; the library only
    // ever sees an explicit config.
    let username = std::env::var("RTT_USERNAME").unwrap_or_else(|_| {
        eprintln!("Warning: RTT_USERNAME not set. API calls will fail.");
        String::new()
    });
    let password = std::env::var("RTT_PASSWORD").unwrap_or_else(|_| {
        eprintln!("Warning: RTT_PASSWORD not set. API calls will fail.");
        String::new()
    });

    let client = RttClient::new(RttConfig::new(username, password))
        .expect("Failed to create RTT client");
    let summarizer = Summarizer::new(client, OperatorIcons::uk_default());

    match summarizer.summarize(origin, destination).await {
        Ok(summary) => {
            println!("{}", summary.title);
            println!();
            println!("{}", summary.body);
        }
        Err(e) => {
            eprintln!("Failed to summarise {origin} to {destination}: {e}");
            std::process::exit(1);
        }
    }
}
