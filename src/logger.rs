use env_logger::{Builder, Env};

pub struct Logger;

impl Logger {
    /// Log to stderr; `RUST_LOG` takes precedence over `verbosity`.
    pub fn init(verbosity: u8) {
        Builder::from_env(Env::default().default_filter_or(Self::filter(verbosity)))
            .format_target(verbosity > 0)
            .init();
    }

    /// The log filter for the number of `-v` flags.
    ///
    /// Requests are logged by `dropsearch` itself at debug level, so the
    /// HTTP stack stays at `warn` until the highest verbosity.
    fn filter(verbosity: u8) -> &'static str {
        match verbosity {
            0 => "dropsearch=info,warn",
            1 => "dropsearch=debug,warn",
            _ => "dropsearch=trace,reqwest=debug,info",
        }
    }
}
