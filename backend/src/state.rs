use std::sync::Arc;

use super::{config::Config, error::AppError};

pub struct AppState {
    pub config: Config,
    pub client: reqwest::Client,
}

impl AppState {
    pub fn new(config: Config) -> Result<Arc<Self>, AppError> {
        let client = reqwest::Client::builder()
            .timeout(config.upstream_timeout)
            .build()
            .map_err(|e| AppError::Internal(format!("http client: {e}")))?;

        Ok(Arc::new(Self { config, client }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_from_default_config() {
        let state = AppState::new(Config::default()).unwrap();
        assert_eq!(state.config.port, crate::config::DEFAULT_PORT);
        assert!(state.config.upstream_url.is_none());
    }
}
