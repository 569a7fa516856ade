use std::sync::Once;

use env_logger::Builder;
use log::LevelFilter;

static INIT: Once = Once::new();

// Level for this crate's own modules. Verbose runs show the per-policy debug lines.
pub fn crate_level(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// Installs the process logger once. Dependencies stay at `Warn`; `RUST_LOG`
/// overrides both levels.
pub fn initialize_logger(verbose: bool) {
    INIT.call_once_force(|_| {
        let mut builder = Builder::new();

        builder
            .filter_level(LevelFilter::Warn)
            .filter_module("disk_scheduling", crate_level(verbose))
            .filter_module("disk_sched", crate_level(verbose))
            .format_target(false)
            .parse_default_env();

        // another logger may already be installed, e.g. by a test harness
        let _ = builder.try_init();
    });
}

#[cfg(test)]
mod tests {
    use log::{debug, info};

    use super::*;

    #[test]
    fn test_crate_level() {
        assert_eq!(crate_level(true), LevelFilter::Debug);
        assert_eq!(crate_level(false), LevelFilter::Info);
    }

    #[test]
    fn test_initialize_twice() {
        initialize_logger(true);
        initialize_logger(false);
        debug!("Debug message in test");
        info!("Info message in test");
    }
}
