use birthday_kit::cli::{execute_command, get_log_level, Cli};
use birthday_kit::KitError;
use clap::Parser;
use tracing::{debug, error, trace};

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(get_log_level(cli.verbose))
        .with_writer(std::io::stderr)
        .with_target(cli.verbose >= 2) // Show target module for -vv and above
        .with_line_number(cli.verbose >= 3) // Show line numbers for -vvv
        .init();

    debug!("bdkit started with verbosity level: {}", cli.verbose);
    trace!("Full CLI args: {:?}", std::env::args().collect::<Vec<_>>());

    let result = birthday_kit::config::load(cli.config.as_deref())
        .map_err(anyhow::Error::from)
        .and_then(|config| execute_command(cli.command, &config, &mut std::io::stdout().lock()));

    if let Err(e) = result {
        error!("Fatal error: {:#}", e);
        match e.downcast_ref::<KitError>() {
            Some(kit) => {
                debug!("Error code E{:04}", kit.code());
                eprintln!("Error: {}", kit.user_message());
                std::process::exit(kit.exit_code());
            }
            None => {
                eprintln!("Error: {e:#}");
                std::process::exit(1);
            }
        }
    }
}
