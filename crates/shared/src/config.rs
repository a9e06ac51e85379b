//! Money configuration management.

use serde::Deserialize;

use crate::error::{AppError, AppResult};

/// Minor units per major unit when nothing else is configured (cents per dollar).
pub const DEFAULT_MAJOR_UNIT_PARTS: u32 = 100;

/// Money configuration.
///
/// Carries the number of minor units that compose one major unit, so a
/// caller can allocate amounts of different currencies side by side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct MoneyConfig {
    /// Minor units per major unit (e.g., 100 cents in a dollar).
    #[serde(default = "default_major_unit_parts")]
    pub major_unit_parts: u32,
}

fn default_major_unit_parts() -> u32 {
    DEFAULT_MAJOR_UNIT_PARTS
}

impl Default for MoneyConfig {
    fn default() -> Self {
        Self {
            major_unit_parts: DEFAULT_MAJOR_UNIT_PARTS,
        }
    }
}

impl MoneyConfig {
    /// Creates a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Validation` if `major_unit_parts` is zero.
    pub fn new(major_unit_parts: u32) -> AppResult<Self> {
        let config = Self { major_unit_parts };
        config.validate()?;
        Ok(config)
    }

    /// Checks that the configuration is usable.
    pub fn validate(&self) -> AppResult<()> {
        if self.major_unit_parts == 0 {
            return Err(AppError::Validation(
                "major_unit_parts must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Loads configuration from config files and environment.
    ///
    /// Sources, later ones winning: `config/default`, `config/{RUN_MODE}`,
    /// then `CENTUM__*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded or is invalid.
    pub fn load() -> AppResult<Self> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config: Self = ::config::Config::builder()
            .add_source(::config::File::with_name("config/default").required(false))
            .add_source(::config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(
                ::config::Environment::with_prefix("CENTUM")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        config.validate()?;
        tracing::debug!(
            run_mode = %run_mode,
            major_unit_parts = config.major_unit_parts,
            "Money configuration loaded"
        );
        Ok(config)
    }
}
