use serde::Deserialize;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Embedding model server URL (expects POST {"text": ...})
    #[serde(default = "default_model_server_url")]
    pub model_server_url: String,

    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Max items returned by the popularity fallback
    #[serde(default = "default_popular_limit")]
    pub popular_limit: usize,

    /// Max items returned by personalized ranking
    #[serde(default = "default_candidate_limit")]
    pub candidate_limit: usize,
}

fn default_model_server_url() -> String {
    "http://localhost:8501/embed".to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    5001
}

fn default_popular_limit() -> usize {
    10
}

fn default_candidate_limit() -> usize {
    20
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }
}
