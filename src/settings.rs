use std::env;

const DEFAULT_LOG_FILTER: &str = "info";

/// Runtime settings read from the environment at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub log_filter: String,
}

impl Settings {
    pub fn from_env() -> Self {
        Self::from_vars(env::var("RUST_LOG").ok())
    }

    fn from_vars(log_filter: Option<String>) -> Self {
        let log_filter = log_filter
            .map(|filter| filter.trim().to_string())
            .filter(|filter| !filter.is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());
        Self { log_filter }
    }

    pub fn init_tracing(&self) {
        use tracing_subscriber::EnvFilter;

        let filter = EnvFilter::try_new(&self.log_filter).unwrap_or_else(|e| {
            eprintln!(
                "Invalid log filter `{}` ({}), using `{}`",
                self.log_filter, e, DEFAULT_LOG_FILTER
            );
            EnvFilter::new(DEFAULT_LOG_FILTER)
        });
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}
