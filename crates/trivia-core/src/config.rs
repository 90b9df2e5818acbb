//! Trivia configuration loading.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::pagination::QUESTIONS_PER_PAGE;

/// Top-level trivia configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriviaConfig {
    /// Question bank file backing the store.
    #[serde(default = "default_bank_path")]
    pub bank_path: PathBuf,
    /// Questions per page for listings.
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

fn default_bank_path() -> PathBuf {
    PathBuf::from("./banks/trivia.toml")
}
fn default_page_size() -> usize {
    QUESTIONS_PER_PAGE
}

impl Default for TriviaConfig {
    fn default() -> Self {
        Self {
            bank_path: default_bank_path(),
            page_size: default_page_size(),
        }
    }
}

/// Resolve environment variable references like `${VAR_NAME}` in a string.
///
/// Substituted values are inserted as-is and never expanded again.
fn resolve_env_vars(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(start) = rest.find("${") {
        let Some(end) = rest[start..].find('}') else {
            break;
        };
        result.push_str(&rest[..start]);
        let var_name = &rest[start + 2..start + end];
        result.push_str(&std::env::var(var_name).unwrap_or_default());
        rest = &rest[start + end + 1..];
    }
    result.push_str(rest);
    result
}

/// Load configuration from an explicit path, or search the default locations.
///
/// Search order without a path:
/// 1. `trivia.toml` in the current directory
/// 2. `~/.config/trivia/config.toml`
///
/// Environment variable overrides: `TRIVIA_BANK`, `TRIVIA_PAGE_SIZE`.
pub fn load_config_from(path: Option<&Path>) -> Result<TriviaConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("trivia.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            toml::from_str::<TriviaConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => TriviaConfig::default(),
    };

    if let Ok(bank) = std::env::var("TRIVIA_BANK") {
        config.bank_path = PathBuf::from(bank);
    }
    if let Ok(size) = std::env::var("TRIVIA_PAGE_SIZE") {
        config.page_size = size
            .trim()
            .parse()
            .with_context(|| format!("invalid TRIVIA_PAGE_SIZE: '{size}'"))?;
    }

    config.bank_path = PathBuf::from(resolve_env_vars(&config.bank_path.to_string_lossy()));
    anyhow::ensure!(config.page_size >= 1, "page_size must be at least 1");

    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("trivia"))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Sets a variable for the life of the guard, then restores the old value.
    struct EnvGuard {
        name: &'static str,
        previous: Option<String>,
    }

    impl EnvGuard {
        fn set(name: &'static str, value: &str) -> Self {
            let previous = std::env::var(name).ok();
            std::env::set_var(name, value);
            Self { name, previous }
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            match &self.previous {
                Some(value) => std::env::set_var(self.name, value),
                None => std::env::remove_var(self.name),
            }
        }
    }

    #[test]
    fn resolve_env_vars_basic() {
        let _var = EnvGuard::set("_TRIVIA_TEST_RESOLVE_BASIC", "hello");
        assert_eq!(resolve_env_vars("${_TRIVIA_TEST_RESOLVE_BASIC}"), "hello");
        assert_eq!(
            resolve_env_vars("prefix_${_TRIVIA_TEST_RESOLVE_BASIC}_suffix"),
            "prefix_hello_suffix"
        );
    }

    #[test]
    fn resolved_values_are_not_expanded_again() {
        let _var = EnvGuard::set("_TRIVIA_TEST_RESOLVE_NESTED", "${_TRIVIA_TEST_RESOLVE_NESTED}");
        assert_eq!(
            resolve_env_vars("a/${_TRIVIA_TEST_RESOLVE_NESTED}/b"),
            "a/${_TRIVIA_TEST_RESOLVE_NESTED}/b"
        );
    }

    #[test]
    fn resolve_env_vars_edge_cases() {
        assert_eq!(resolve_env_vars("no vars here"), "no vars here");
        assert_eq!(resolve_env_vars("open ${UNCLOSED"), "open ${UNCLOSED");
        assert_eq!(resolve_env_vars("${_TRIVIA_TEST_RESOLVE_UNSET}x"), "x");
    }

    #[test]
    fn default_config() {
        let config = TriviaConfig::default();
        assert_eq!(config.page_size, 10);
        assert_eq!(config.bank_path, PathBuf::from("./banks/trivia.toml"));
    }

    #[test]
    fn parse_partial_config() {
        let config: TriviaConfig = toml::from_str("page_size = 5").unwrap();
        assert_eq!(config.page_size, 5);
        assert_eq!(config.bank_path, default_bank_path());
    }

    #[test]
    fn explicit_path_must_exist() {
        let err = load_config_from(Some(Path::new("/no/such/trivia.toml"))).unwrap_err();
        assert!(err.to_string().contains("config file not found"));
    }

    #[test]
    fn explicit_path_is_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trivia.toml");
        std::fs::write(&path, "bank_path = \"questions.toml\"\npage_size = 3\n").unwrap();

        let config = load_config_from(Some(&path)).unwrap();
        assert_eq!(config.bank_path, PathBuf::from("questions.toml"));
        assert_eq!(config.page_size, 3);
    }
}
