//! Configuration loading and management for the Tenure Engine.
//!
//! This module provides functionality to load the HR catalogs from YAML
//! files, covering day off types and disciplinary warning kinds.
//!
//! # Example
//!
//! ```no_run
//! use tenure_engine::config::CatalogLoader;
//!
//! let catalogs = CatalogLoader::load("./config/hr").unwrap();
//! println!("Loaded {} day off types", catalogs.day_off_types().len());
//! ```

mod loader;
mod types;

pub use loader::CatalogLoader;
pub use types::{DayOffType, DayOffTypesConfig, HrCatalog, WarningKind, WarningsConfig};
