use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub probe: ProbeSettings,
}

/// Куда и с какими учётными данными стучится login-test
#[derive(Debug, Deserialize, Clone)]
pub struct ProbeSettings {
    pub endpoint: String,
    pub email: String,
    pub password: String,
    /// Таймаут запроса в секундах, 0 — без таймаута
    #[serde(default)]
    pub timeout_secs: u64,
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[probe]
endpoint = "https://functions.poehali.dev/eb523ac0-0903-4780-8f5d-7e0546c1eda5"
email = "admin@test.com"
password = "admin123"
timeout_secs = 30
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (copied there by build.rs)
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                return load_config_from(&config_path);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    parse_config(DEFAULT_CONFIG)
}

pub fn load_config_from(path: &Path) -> anyhow::Result<Config> {
    tracing::info!("Loading config from: {}", path.display());
    let contents = std::fs::read_to_string(path)?;
    parse_config(&contents)
}

pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let config: Config = toml::from_str(contents)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(
            config.probe.endpoint,
            "https://functions.poehali.dev/eb523ac0-0903-4780-8f5d-7e0546c1eda5"
        );
        assert_eq!(config.probe.email, "admin@test.com");
        assert_eq!(config.probe.password, "admin123");
        assert_eq!(config.probe.timeout_secs, 30);
    }

    #[test]
    fn test_timeout_is_optional() {
        let config = parse_config(
            r#"
            [probe]
            endpoint = "http://127.0.0.1:9/"
            email = "a@b.c"
            password = "x"
            "#,
        )
        .unwrap();
        assert_eq!(config.probe.timeout_secs, 0);
    }

    #[test]
    fn test_missing_section_is_error() {
        assert!(parse_config("[database]\npath = \"x\"").is_err());
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!(
            "login-probe-config-{}.toml",
            std::process::id()
        ));
        std::fs::write(&path, DEFAULT_CONFIG).unwrap();
        let config = load_config_from(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(config.probe.email, "admin@test.com");
    }
}
