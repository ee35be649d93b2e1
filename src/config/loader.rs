//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading leave
//! configurations from YAML files.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use rust_decimal::Decimal;
use tracing::debug;

use crate::calculation::{ApprovalChainSelection, select_approval_chain};
use crate::error::{EngineError, EngineResult};
use crate::models::{DateRange, HolidayInterval};

use super::types::{
    HolidayCalendar, InstitutionMetadata, LeaveConfig, LeaveType, LeaveTypesConfig,
};

/// Loads and provides access to leave configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory
/// and provides methods to query leave types, approval chains and holidays.
///
/// # Directory Structure
///
/// ```text
/// config/university/
/// ├── institution.yaml   # Institution metadata
/// ├── leave_types.yaml   # Leave types and approval rules
/// └── holidays/
///     └── 2025-2026.yaml # A holiday calendar
/// ```
///
/// # Example
///
/// ```no_run
/// use leave_engine::config::ConfigLoader;
/// use rust_decimal::Decimal;
///
/// let loader = ConfigLoader::load("./config/university")?;
///
/// let annual = loader.get_leave_type("annual")?;
/// println!("Leave type: {}", annual.name);
///
/// let selection = loader.approval_chain("annual", Decimal::new(5, 0))?;
/// println!("Approvers: {:?}", selection.chain.roles());
/// # Ok::<(), leave_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: LeaveConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - A leave type code is defined twice
    /// - The holidays directory holds no calendar
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let institution =
            Self::load_yaml::<InstitutionMetadata>(&path.join("institution.yaml"))?;

        let leave_types_path = path.join("leave_types.yaml");
        let leave_types_config = Self::load_yaml::<LeaveTypesConfig>(&leave_types_path)?;
        let leave_types = Self::index_leave_types(&leave_types_path, leave_types_config)?;

        let calendars = Self::load_calendars(&path.join("holidays"))?;

        debug!(
            institution = %institution.code,
            leave_types = leave_types.len(),
            calendars = calendars.len(),
            "Loaded leave configuration"
        );

        let config = LeaveConfig::new(institution, leave_types, calendars);
        Ok(Self { config })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    fn index_leave_types(
        path: &Path,
        config: LeaveTypesConfig,
    ) -> EngineResult<HashMap<String, LeaveType>> {
        let mut leave_types = HashMap::with_capacity(config.leave_types.len());
        for leave_type in config.leave_types {
            if leave_types.contains_key(&leave_type.code) {
                return Err(EngineError::ConfigParseError {
                    path: path.display().to_string(),
                    message: format!("duplicate leave type code '{}'", leave_type.code),
                });
            }
            leave_types.insert(leave_type.code.clone(), leave_type);
        }
        Ok(leave_types)
    }

    /// Loads all holiday calendars from the holidays directory.
    fn load_calendars(holidays_dir: &Path) -> EngineResult<Vec<HolidayCalendar>> {
        let holidays_dir_str = holidays_dir.display().to_string();

        if !holidays_dir.exists() {
            return Err(EngineError::ConfigNotFound {
                path: holidays_dir_str,
            });
        }

        let entries = fs::read_dir(holidays_dir).map_err(|_| EngineError::ConfigNotFound {
            path: holidays_dir_str.clone(),
        })?;

        let mut calendars = Vec::new();

        for entry in entries {
            let entry = entry.map_err(|_| EngineError::ConfigNotFound {
                path: holidays_dir_str.clone(),
            })?;

            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "yaml") {
                calendars.push(Self::load_yaml::<HolidayCalendar>(&path)?);
            }
        }

        if calendars.is_empty() {
            return Err(EngineError::ConfigNotFound {
                path: format!("{} (no holiday calendars found)", holidays_dir_str),
            });
        }

        Ok(calendars)
    }

    /// Returns the underlying leave configuration.
    pub fn config(&self) -> &LeaveConfig {
        &self.config
    }

    /// Returns the institution metadata.
    pub fn institution(&self) -> &InstitutionMetadata {
        self.config.institution()
    }

    /// Gets a leave type by its code.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use leave_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/university")?;
    /// let sick = loader.get_leave_type("sick")?;
    /// println!("Leave type: {}", sick.name);
    /// # Ok::<(), leave_engine::error::EngineError>(())
    /// ```
    pub fn get_leave_type(&self, code: &str) -> EngineResult<&LeaveType> {
        self.config
            .leave_types()
            .get(code)
            .ok_or_else(|| EngineError::LeaveTypeNotFound {
                code: code.to_string(),
            })
    }

    /// Returns every leave type, sorted by code.
    pub fn leave_types(&self) -> Vec<&LeaveType> {
        let mut leave_types: Vec<&LeaveType> = self.config.leave_types().values().collect();
        leave_types.sort_by(|a, b| a.code.cmp(&b.code));
        leave_types
    }

    /// Returns the holiday intervals of every configured calendar.
    pub fn holidays(&self) -> Vec<HolidayInterval> {
        self.config
            .calendars()
            .iter()
            .flat_map(|calendar| calendar.holidays.iter().cloned())
            .collect()
    }

    /// Returns the configured holiday intervals that share a day with `range`.
    pub fn holidays_for_range(&self, range: &DateRange) -> Vec<HolidayInterval> {
        self.config
            .calendars()
            .iter()
            .flat_map(|calendar| calendar.holidays.iter())
            .filter(|holiday| holiday.overlaps(range))
            .cloned()
            .collect()
    }

    /// Selects the approval chain of a leave type for a day count.
    pub fn approval_chain(&self, code: &str, days: Decimal) -> EngineResult<ApprovalChainSelection> {
        let leave_type = self.get_leave_type(code)?;
        select_approval_chain(leave_type, days, 1)
    }
}
