//! Process-wide major unit setting.
//!
//! `Money::allocate` reads the number of minor units per major unit from
//! here. Callers that need per-currency values pass a `MoneyConfig` to
//! `Money::allocate_with` instead and never touch this state.

use std::sync::atomic::{AtomicU32, Ordering};

use centum_shared::{DEFAULT_MAJOR_UNIT_PARTS, MoneyConfig};

use super::error::{MoneyError, MoneyResult};
use super::value::Money;

// Independent scalar, no other memory is published through it.
static MAJOR_UNIT_PARTS: AtomicU32 = AtomicU32::new(DEFAULT_MAJOR_UNIT_PARTS);

impl Money {
    /// Returns the process-wide number of minor units per major unit.
    #[must_use]
    pub fn major_unit_parts() -> u32 {
        MAJOR_UNIT_PARTS.load(Ordering::Relaxed)
    }

    /// Sets the process-wide number of minor units per major unit.
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::InvalidMajorUnitParts` if `parts` is zero.
    pub fn set_major_unit_parts(parts: u32) -> MoneyResult<()> {
        if parts == 0 {
            tracing::warn!("Rejected zero major unit parts");
            return Err(MoneyError::InvalidMajorUnitParts(parts));
        }
        let previous = MAJOR_UNIT_PARTS.swap(parts, Ordering::Relaxed);
        tracing::debug!(previous, current = parts, "Major unit parts changed");
        Ok(())
    }

    /// Restores the process-wide setting to 100 minor units per major unit.
    pub fn reset_major_unit_parts() {
        MAJOR_UNIT_PARTS.store(DEFAULT_MAJOR_UNIT_PARTS, Ordering::Relaxed);
    }

    /// Installs a loaded configuration as the process-wide setting.
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::InvalidMajorUnitParts` if the configuration holds zero.
    pub fn install_config(config: &MoneyConfig) -> MoneyResult<()> {
        Self::set_major_unit_parts(config.major_unit_parts)
    }

    /// Returns the process-wide setting as a `MoneyConfig`.
    #[must_use]
    pub fn current_config() -> MoneyConfig {
        MoneyConfig {
            major_unit_parts: Self::major_unit_parts(),
        }
    }
}

/// Serializes tests that read or write the process-wide setting.
#[cfg(test)]
pub(crate) fn settings_guard() -> std::sync::MutexGuard<'static, ()> {
    static LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());
    LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
}
