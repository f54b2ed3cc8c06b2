//! Configuration loading functionality.
//!
//! This module provides the [`CatalogLoader`] type for loading the HR
//! catalogs from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{TenureError, TenureResult};

use super::types::{DayOffType, DayOffTypesConfig, HrCatalog, WarningKind, WarningsConfig};

/// Loads and provides access to the HR catalogs.
///
/// The `CatalogLoader` reads YAML configuration files from a directory
/// and provides methods to query day off types and warning kinds.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/hr/
/// ├── day_off_types.yaml  # Day off type catalog, in digest order
/// └── warnings.yaml       # Warning kinds and their point values
/// ```
///
/// # Example
///
/// ```no_run
/// use tenure_engine::config::CatalogLoader;
///
/// let loader = CatalogLoader::load("./config/hr").unwrap();
///
/// // Get a day off type
/// let day_off_type = loader.day_off_type("vacation").unwrap();
/// println!("Day off type: {}", day_off_type.name);
///
/// // Get the points a warning carries
/// let points = loader.warning_points("written").unwrap();
/// println!("Written warning: {} points", points);
/// ```
#[derive(Debug, Clone)]
pub struct CatalogLoader {
    catalog: HrCatalog,
}

impl CatalogLoader {
    /// Loads the catalogs from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/hr")
    ///
    /// # Returns
    ///
    /// Returns a `CatalogLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    ///
    /// # Example
    ///
    /// ```no_run
    /// use tenure_engine::config::CatalogLoader;
    ///
    /// let loader = CatalogLoader::load("./config/hr")?;
    /// # Ok::<(), tenure_engine::error::TenureError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> TenureResult<Self> {
        let path = path.as_ref();

        let day_off_types_path = path.join("day_off_types.yaml");
        let day_off_types_config = Self::load_yaml::<DayOffTypesConfig>(&day_off_types_path)?;

        let warnings_path = path.join("warnings.yaml");
        let warnings_config = Self::load_yaml::<WarningsConfig>(&warnings_path)?;

        let catalog = HrCatalog::new(
            day_off_types_config.day_off_types,
            warnings_config.warnings,
        );

        Ok(Self { catalog })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> TenureResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| TenureError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| TenureError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying catalog.
    pub fn catalog(&self) -> &HrCatalog {
        &self.catalog
    }

    /// Returns the day off types in digest order.
    pub fn day_off_types(&self) -> &[DayOffType] {
        self.catalog.day_off_types()
    }

    /// Gets a day off type by its code.
    ///
    /// # Arguments
    ///
    /// * `code` - The day off type code (e.g., "vacation")
    ///
    /// # Returns
    ///
    /// Returns the day off type if found, or `DayOffTypeNotFound` error.
    pub fn day_off_type(&self, code: &str) -> TenureResult<&DayOffType> {
        self.catalog
            .day_off_types()
            .iter()
            .find(|t| t.code == code)
            .ok_or_else(|| TenureError::DayOffTypeNotFound {
                code: code.to_string(),
            })
    }

    /// Gets a warning kind by its code.
    ///
    /// # Arguments
    ///
    /// * `code` - The warning code (e.g., "written")
    ///
    /// # Returns
    ///
    /// Returns the warning kind if found, or `WarningKindNotFound` error.
    pub fn warning(&self, code: &str) -> TenureResult<&WarningKind> {
        self.catalog
            .warnings()
            .get(code)
            .ok_or_else(|| TenureError::WarningKindNotFound {
                code: code.to_string(),
            })
    }

    /// Gets the points a warning kind carries.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use tenure_engine::config::CatalogLoader;
    ///
    /// let loader = CatalogLoader::load("./config/hr")?;
    /// let points = loader.warning_points("written")?;
    /// assert_eq!(points, 3);
    /// # Ok::<(), tenure_engine::error::TenureError>(())
    /// ```
    pub fn warning_points(&self, code: &str) -> TenureResult<i32> {
        Ok(self.warning(code)?.points)
    }
}
