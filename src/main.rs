use std::path::PathBuf;

use tracing_subscriber::EnvFilter;

use addrbook::config::Config;

fn main() {
    // Level is overridden by `RUST_LOG`; default stays quiet for the REPL.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let mut config = Config::from_env();
    let mut args = std::env::args().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--file" | "-f" => match args.next() {
                Some(path) => config = config.with_db_path(PathBuf::from(path)),
                None => {
                    eprintln!("Error: --file requires a path argument");
                    std::process::exit(1);
                }
            },
            "--api" => match args.next() {
                Some(url) => config.api_base_url = url.trim_end_matches('/').to_string(),
                None => {
                    eprintln!("Error: --api requires a base URL");
                    std::process::exit(1);
                }
            },
            "--help" | "-h" => {
                println!("Address Book - terminal client for a remote contact directory");
                println!();
                println!("Usage: addrbook [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -f, --file <PATH>   Local state database (default: .data/addrbook.db)");
                println!("  --api <URL>         Directory service base URL (default: {})", addrbook::config::DEFAULT_API_URL);
                println!("  -h, --help          Show this help");
                println!();
                println!("Environment:");
                println!("  ADDRBOOK_API_URL, ADDRBOOK_TIMEOUT_SECS, ADDRBOOK_PAGE_LIMIT,");
                println!("  ADDRBOOK_DEBOUNCE_MS, ADDRBOOK_SESSION_TTL_MINS, RUST_LOG");
                return;
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                eprintln!("Use --help for usage information.");
                std::process::exit(1);
            }
        }
    }

    addrbook::cli::run(config);
}
