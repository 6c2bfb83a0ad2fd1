mod types;

pub use types::*;

use anyhow::{Context, Result};
use std::path::Path;

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;

    validate_config(&config)?;

    Ok(config)
}

/// Load config from an explicit path or the first default location that exists.
pub fn find_and_load_config(custom_path: Option<&Path>) -> Result<Config> {
    if let Some(path) = custom_path {
        return load_config(path);
    }

    let default_paths = [
        "./config.toml",
        "./reeltag.toml",
        "~/.config/reeltag/config.toml",
        "/etc/reeltag/config.toml",
    ];

    for path_str in default_paths {
        let path = shellexpand::tilde(path_str);
        let path = Path::new(path.as_ref());
        if path.exists() {
            return load_config(path);
        }
    }

    anyhow::bail!(
        "No config file found; pass --config or create one of: {}",
        default_paths.join(", ")
    )
}

/// Validate configuration
fn validate_config(config: &Config) -> Result<()> {
    if config.tmdb.api_key.is_empty() {
        anyhow::bail!("tmdb.api_key must not be empty");
    }

    if !config.library.source.is_dir() {
        anyhow::bail!(
            "library.source does not exist or is not a directory: {:?}",
            config.library.source
        );
    }

    if !config.library.destination.is_dir() {
        tracing::warn!(
            "library.destination does not exist yet: {:?}",
            config.library.destination
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_minimal_config() {
        let dir = tempfile::tempdir().unwrap();
        let toml = format!(
            r#"
            [library]
            source = {:?}
            destination = "/tmp/movies"

            [tmdb]
            api_key = "abc123"
            "#,
            dir.path()
        );
        let config: Config = toml::from_str(&toml).unwrap();
        assert_eq!(config.tmdb.api_key, "abc123");
        assert_eq!(config.tmdb.language, "en-US");
        assert!(config.tmdb.include_adult);
        validate_config(&config).unwrap();
    }

    #[test]
    fn empty_api_key_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let toml = format!(
            r#"
            [library]
            source = {:?}
            destination = "/tmp/movies"

            [tmdb]
            api_key = ""
            "#,
            dir.path()
        );
        let config: Config = toml::from_str(&toml).unwrap();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn missing_source_rejected() {
        let toml = r#"
            [library]
            source = "/definitely/not/a/real/path"
            destination = "/tmp/movies"

            [tmdb]
            api_key = "abc123"
        "#;
        let config: Config = toml::from_str(toml).unwrap();
        assert!(validate_config(&config).is_err());
    }
}
