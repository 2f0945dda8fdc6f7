use mdmirror_core::logging;

mod cli;

use crate::cli::Cli;

#[tokio::main]
async fn main() {
    // Initialize logging as early as possible; progress is reported there.
    logging::init();

    if let Err(err) = Cli::run_from_args().await {
        eprintln!("mdmirror error: {:#}", err);
        std::process::exit(1);
    }
}
