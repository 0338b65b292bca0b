//! Rule-set resolution.
//!
//! Lookup order: an explicit path (the `--rules` flag), then the
//! [`RULES_PATH_ENV_VAR`] environment variable, then `rules.json` in the
//! user config directory, then the built-in defaults. An explicitly named
//! file must exist; the config-directory file is optional.

use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};

use super::files::{config_dir, try_read_to_string};
use crate::{rules::Rules, Result, RULES_PATH_ENV_VAR};


/// Path: ~/.config/six-nations-fantasy/rules.json
pub fn rules_path() -> PathBuf {
    config_dir().join("rules.json")
}

/// Explicit rules path from the flag or, failing that, the environment.
pub fn explicit_rules_path(flag: Option<&Path>) -> Option<PathBuf> {
    flag.map(Path::to_path_buf).or_else(|| {
        std::env::var_os(RULES_PATH_ENV_VAR)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
    })
}

/// Resolve and load the effective rule set.
pub fn load_rules(flag: Option<&Path>) -> Result<Rules> {
    load_rules_from(explicit_rules_path(flag).as_deref(), &rules_path())
}

/// Load from `explicit` if given, else from `fallback` if it exists, else
/// use defaults. Whatever is loaded must pass [`Rules::validate`].
pub fn load_rules_from(explicit: Option<&Path>, fallback: &Path) -> Result<Rules> {
    let rules = match explicit {
        Some(path) => {
            info!("Loading rules from {}", path.display());
            parse_rules(&fs::read_to_string(path)?)?
        }
        None => match try_read_to_string(fallback) {
            Some(contents) => {
                info!("Loading rules from {}", fallback.display());
                parse_rules(&contents)?
            }
            None => {
                debug!("No rules file at {}, using defaults", fallback.display());
                Rules::default()
            }
        },
    };

    rules.validate()?;
    Ok(rules)
}

/// Parse a (possibly partial) JSON rule set. Missing fields take defaults.
pub fn parse_rules(contents: &str) -> Result<Rules> {
    Ok(serde_json::from_str(contents)?)
}
