//! Logger setup for clock binaries
//!
//! Library code only talks to the `log` facade.

/// Filter used when `RUST_LOG` is unset; nannou's GPU stack is noisy at info
pub const DEFAULT_LOG_FILTER: &str = "info,wgpu_core=warn,wgpu_hal=warn,naga=warn";

/// Install `env_logger`, reading `RUST_LOG` and falling back to `default_filter`
///
/// Returns `false` if a logger was already installed.
pub fn init_logging(default_filter: &str) -> bool {
    let env = env_logger::Env::default().default_filter_or(default_filter);
    let installed = env_logger::Builder::from_env(env)
        .format_timestamp_millis()
        .try_init()
        .is_ok();
    if installed {
        log::debug!("logging initialized, default filter {:?}", default_filter);
    }
    installed
}
