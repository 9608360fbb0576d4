use std::env;
use std::path::PathBuf;

const DEFAULT_PORT: u16 = 3001;

/// Runtime settings, read from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// `PORT`, default 3001.
    pub port: u16,
    /// `CTQ_STORE_PATH`: quiz content document. The bundled quiz when unset.
    pub store_path: Option<PathBuf>,
    /// `CTQ_SCORING_CONFIG`: replacement scoring table. The shipped table
    /// when unset.
    pub scoring_table: Option<PathBuf>,
}

impl ApiConfig {
    pub fn from_env() -> eyre::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> eyre::Result<Self> {
        let port = match lookup("PORT").filter(|v| !v.is_empty()) {
            Some(raw) => raw
                .parse()
                .map_err(|e| eyre::eyre!("invalid PORT '{raw}': {e}"))?,
            None => DEFAULT_PORT,
        };
        let path = |key: &str| lookup(key).filter(|v| !v.is_empty()).map(PathBuf::from);

        Ok(Self {
            port,
            store_path: path("CTQ_STORE_PATH"),
            scoring_table: path("CTQ_SCORING_CONFIG"),
        })
    }
}
