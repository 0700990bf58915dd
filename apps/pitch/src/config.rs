use std::path::PathBuf;

use anyhow::{Context, Result};

/// Runtime configuration for the `pitch` binary, loaded from environment variables.
/// Fails at startup if the page configuration path is missing.
#[derive(Debug, Clone)]
pub struct Config {
    /// JSON page configuration to render.
    pub config_path: PathBuf,
    /// Where to write the HTML. `None` writes to stdout.
    pub output_path: Option<PathBuf>,
    pub rust_log: String,
}

impl Config {
    /// Loads from the process environment. A positional argument, when given,
    /// overrides `PITCH_CONFIG`.
    pub fn from_env(config_arg: Option<String>) -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_vars(|key| std::env::var(key).ok(), config_arg)
    }

    pub fn from_vars<F>(lookup: F, config_arg: Option<String>) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config_path = match config_arg {
            Some(path) => path,
            None => require_var(&lookup, "PITCH_CONFIG")?,
        };

        Ok(Config {
            config_path: PathBuf::from(config_path),
            output_path: lookup("PITCH_OUTPUT")
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}

fn require_var<F>(lookup: &F, key: &str) -> Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .filter(|v| !v.trim().is_empty())
        .with_context(|| format!("Required environment variable '{key}' is not set"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_reads_paths_and_log_level() {
        let env = vars(&[
            ("PITCH_CONFIG", "pages/splunk.json"),
            ("PITCH_OUTPUT", "dist/splunk.html"),
            ("RUST_LOG", "debug"),
        ]);
        let config = Config::from_vars(|k| env.get(k).cloned(), None).unwrap();
        assert_eq!(config.config_path, PathBuf::from("pages/splunk.json"));
        assert_eq!(config.output_path, Some(PathBuf::from("dist/splunk.html")));
        assert_eq!(config.rust_log, "debug");
    }

    #[test]
    fn test_defaults_when_optional_vars_missing() {
        let env = vars(&[("PITCH_CONFIG", "page.json")]);
        let config = Config::from_vars(|k| env.get(k).cloned(), None).unwrap();
        assert!(config.output_path.is_none());
        assert_eq!(config.rust_log, "info");
    }

    #[test]
    fn test_missing_config_path_names_variable() {
        let env = vars(&[]);
        let err = Config::from_vars(|k| env.get(k).cloned(), None).unwrap_err();
        assert!(err.to_string().contains("PITCH_CONFIG"));
    }

    #[test]
    fn test_argument_overrides_env() {
        let env = vars(&[("PITCH_CONFIG", "from-env.json")]);
        let config =
            Config::from_vars(|k| env.get(k).cloned(), Some("from-arg.json".to_string())).unwrap();
        assert_eq!(config.config_path, PathBuf::from("from-arg.json"));
    }
}
