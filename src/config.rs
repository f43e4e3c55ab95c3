use confique::Config as _;
use std::{path::PathBuf, sync::OnceLock, time::Duration};

#[derive(confique::Config)]
pub struct Config {
    /// Theme document loaded at startup. The built-in theme is used when unset.
    #[config(env = "RQL_EDITOR_THEME")]
    pub theme: Option<PathBuf>,
    /// How long the truncation notice stays visible.
    #[config(env = "RQL_EDITOR_NOTICE_MS", default = 10000)]
    pub notice_ms: u64,
}

impl Config {
    pub fn notice_duration(&self) -> Duration {
        Duration::from_millis(self.notice_ms)
    }
}

pub fn config() -> &'static Config {
    static CONFIG: OnceLock<Config> = OnceLock::new();
    CONFIG.get_or_init(|| {
        Config::builder()
            .env()
            .load()
            .expect("Failed to load one or more value configuration from the current environment")
    })
}
