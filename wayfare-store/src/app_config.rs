use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    pub server: ServerConfig,
    pub upstream: UpstreamConfig,
    pub ranking: RankingConfig,
    pub pagination: PaginationConfig,
    pub history: HistoryConfig,
    pub autocomplete: AutocompleteConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { port: 5000 }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct UpstreamConfig {
    pub base_url: String,
    pub host: String,
    /// Missing keys are not fatal: requests go out with an empty credential
    pub api_key: Option<String>,
    pub timeout_ms: u64,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: "https://sky-scrapper.p.rapidapi.com".to_string(),
            host: "sky-scrapper.p.rapidapi.com".to_string(),
            api_key: None,
            timeout_ms: 10_000,
        }
    }
}

/// "best" score = price / price_divisor + minutes × duration_weight
#[derive(Debug, Deserialize, Clone)]
pub struct RankingConfig {
    pub price_divisor: f64,
    pub duration_weight: f64,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            price_divisor: 1000.0,
            duration_weight: 0.1,
        }
    }
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PaginationMode {
    /// Numbered pages, one window at a time
    Pages,
    /// Growing prefix revealed by "load more"
    #[default]
    LoadMore,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PaginationConfig {
    pub mode: PaginationMode,
    pub page_size: usize,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            mode: PaginationMode::LoadMore,
            page_size: 6,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct HistoryConfig {
    pub limit: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self { limit: 10 }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct AutocompleteConfig {
    pub debounce_ms: u64,
    pub min_query_len: usize,
}

impl Default for AutocompleteConfig {
    fn default() -> Self {
        Self {
            debounce_ms: 300,
            min_query_len: 2,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            .set_default("server.port", 5000_i64)?
            .set_default("upstream.base_url", "https://sky-scrapper.p.rapidapi.com")?
            .set_default("upstream.host", "sky-scrapper.p.rapidapi.com")?
            .set_default("upstream.timeout_ms", 10_000_i64)?
            .set_default("ranking.price_divisor", 1000.0)?
            .set_default("ranking.duration_weight", 0.1)?
            .set_default("pagination.mode", "load_more")?
            .set_default("pagination.page_size", 6_i64)?
            .set_default("history.limit", 10_i64)?
            .set_default("autocomplete.debounce_ms", 300_i64)?
            .set_default("autocomplete.min_query_len", 2_i64)?
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Not checked in
            .add_source(config::File::with_name("config/local").required(false))
            // Eg. `WAYFARE__SERVER__PORT=8080`
            .add_source(config::Environment::with_prefix("WAYFARE").separator("__"))
            .build()?;

        let mut config: Config = s.try_deserialize()?;
        if config.upstream.api_key.is_none() {
            config.upstream.api_key = env::var("RAPIDAPI_KEY")
                .or_else(|_| env::var("X_RAPIDAPI_KEY"))
                .ok();
        }

        Ok(config)
    }
}
