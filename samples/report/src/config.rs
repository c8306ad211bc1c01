//! Configuration loaded from the environment.
//!
//! | Variable     | Meaning                                  | Default               |
//! |--------------|------------------------------------------|-----------------------|
//! | `REPORT_IDS` | Comma-separated ids; `null` means no id  | `null,foo,001,002,003` |

use std::env;

use crate::error::ConfigError;

/// The environment variable listing the ids to look up.
pub const REPORT_IDS_VAR: &str = "REPORT_IDS";

/// The ids looked up when `REPORT_IDS` is not set.
pub const DEFAULT_REPORT_IDS: &str = "null,foo,001,002,003";

const NO_ID: &str = "null";

/// The ids to run through the pipeline, in order.
///
/// `None` stands for a missing id and exercises the validation stage.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReportConfig {
    /// Raw ids; `None` is a missing id.
    pub report_ids: Vec<Option<String>>,
}

impl ReportConfig {
    /// Loads the configuration from `REPORT_IDS`, falling back to
    /// [`DEFAULT_REPORT_IDS`] when it is unset.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the variable is not Unicode or lists no ids.
    pub fn from_env() -> Result<Self, ConfigError> {
        match env::var(REPORT_IDS_VAR) {
            Ok(raw) => Self::parse(&raw),
            Err(env::VarError::NotPresent) => Self::parse(DEFAULT_REPORT_IDS),
            Err(env::VarError::NotUnicode(_)) => Err(ConfigError::NotUnicode {
                key: REPORT_IDS_VAR.to_string(),
            }),
        }
    }

    /// Parses a comma-separated id list. Entries are trimmed and the literal
    /// `null` becomes a missing id.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Empty`] if `raw` is blank.
    pub fn parse(raw: &str) -> Result<Self, ConfigError> {
        if raw.trim().is_empty() {
            return Err(ConfigError::Empty {
                key: REPORT_IDS_VAR.to_string(),
            });
        }
        let report_ids = raw
            .split(',')
            .map(str::trim)
            .map(|entry| (entry != NO_ID).then(|| entry.to_string()))
            .collect();
        Ok(Self { report_ids })
    }

    /// Iterates over the ids as borrowed options.
    pub fn ids(&self) -> impl Iterator<Item = Option<&str>> {
        self.report_ids.iter().map(Option::as_deref)
    }
}
