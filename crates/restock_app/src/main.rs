mod config;
mod logging;
mod runner;
mod state_file;

use monitor_logging::{monitor_error, monitor_info};
use restock_engine::{ReqwestFetcher, TelegramNotifier};

fn main() {
    logging::initialize(logging::LogDestination::Both);

    let config = config::Config::load();
    let fetcher = ReqwestFetcher::new(config.fetch_settings());
    let notifier = match TelegramNotifier::new(config.telegram_settings()) {
        Ok(notifier) => notifier,
        Err(err) => {
            monitor_error!("Failed to build notifier: {}", err);
            std::process::exit(1);
        }
    };

    let runtime = match tokio::runtime::Runtime::new() {
        Ok(runtime) => runtime,
        Err(err) => {
            monitor_error!("Failed to start runtime: {}", err);
            std::process::exit(1);
        }
    };

    // A non-zero exit surfaces the failure in the scheduler's logs; the next
    // scheduled invocation is the retry.
    match runtime.block_on(runner::run_check(&config, &fetcher, &notifier)) {
        Ok(outcome) => monitor_info!("Check complete: {:?}", outcome),
        Err(err) => {
            monitor_error!("Check failed: {}", err);
            std::process::exit(1);
        }
    }
}
