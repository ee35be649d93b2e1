//! Configuration loading and management for the Leave Engine.
//!
//! This module provides functionality to load leave configurations from YAML
//! files, including institution metadata, leave types with their approval
//! rules, and holiday calendars.
//!
//! # Example
//!
//! ```no_run
//! use leave_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/university").unwrap();
//! println!("Loaded policy: {}", config.institution().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    ApprovalRule, HolidayCalendar, InstitutionMetadata, LeaveConfig, LeaveType, LeaveTypesConfig,
};
