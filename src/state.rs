use rollcall_cache::{CacheConfig, MemoryCache};
use rollcall_config::{ApiConfig, LogConfig};
use rollcall_core::ClientError;
use tracing::info;

use crate::client::HttpClient;

/// Configuration and the shared client, resolved once at startup.
#[derive(Clone, Debug)]
pub struct AppState {
    pub api_config: ApiConfig,
    pub cache_config: CacheConfig,
    pub log_config: LogConfig,
    pub client: HttpClient,
}

impl AppState {
    pub fn from_configs(
        api_config: ApiConfig,
        cache_config: CacheConfig,
        log_config: LogConfig,
    ) -> Result<Self, ClientError> {
        let mut client = HttpClient::new(&api_config)?;
        if cache_config.enabled {
            info!(ttl_seconds = cache_config.ttl_seconds, "Collection cache enabled");
            client = client.with_cache(MemoryCache::new(&cache_config));
        }

        Ok(Self {
            api_config,
            cache_config,
            log_config,
            client,
        })
    }
}

/// Resolves the remaining configuration from the environment. Takes the log
/// config that tracing was already initialised with.
pub fn init_app_state(log_config: LogConfig) -> Result<AppState, ClientError> {
    AppState::from_configs(ApiConfig::from_env(), CacheConfig::from_env(), log_config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::path::PathBuf;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_cache_notice_is_logged_to_installed_subscriber() {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();
        let enabled = CacheConfig {
            enabled: true,
            ..CacheConfig::default()
        };

        tracing::subscriber::with_default(subscriber, || {
            AppState::from_configs(ApiConfig::default(), enabled, LogConfig::default()).unwrap();
        });

        let output = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
        assert!(output.contains("Collection cache enabled"));
    }

    #[test]
    fn test_init_keeps_the_log_config_tracing_was_built_from() {
        let log_config = LogConfig {
            level: "debug".to_string(),
            file_dir: Some(PathBuf::from("storage/logs")),
        };
        let state = init_app_state(log_config.clone()).unwrap();
        assert_eq!(state.log_config, log_config);
    }

    #[test]
    fn test_cache_is_attached_only_when_enabled() {
        let api = ApiConfig::new("http://127.0.0.1:9");

        let state =
            AppState::from_configs(api.clone(), CacheConfig::default(), LogConfig::default())
                .unwrap();
        assert!(state.client.cache().is_none());

        let enabled = CacheConfig {
            enabled: true,
            ..CacheConfig::default()
        };
        let state = AppState::from_configs(api, enabled, LogConfig::default()).unwrap();
        assert!(state.client.cache().is_some());
    }
}
