//! Logger setup for binaries and host applications.

use crate::config::LogLevel;

/// Install the env_logger backend at `level`.
///
/// `RUST_LOG` takes precedence when set. Calling this more than once keeps
/// the first logger.
pub fn init(level: LogLevel) {
    let env = env_logger::Env::default().default_filter_or(level.name().to_lowercase());
    match env_logger::Builder::from_env(env).try_init() {
        Ok(()) => log::debug!("Logging initialized at {}", level.name()),
        Err(_) => log::trace!("Logger already installed"),
    }
}
