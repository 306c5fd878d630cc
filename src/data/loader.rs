//! RON data loader
//!
//! Loads the talent economy from an external RON file, with fallback to
//! hardcoded defaults.

use std::fs;
use std::path::Path;

use super::talents::{default_talent_data, TalentData};
use super::DataError;

/// Default location of the talent data file
pub const TALENT_DATA_PATH: &str = "assets/data/talents.ron";

/// Read and validate talent data from a RON file
pub fn load_talent_data(path: &Path) -> Result<TalentData, DataError> {
    let content = fs::read_to_string(path).map_err(|e| DataError::Io(e.to_string()))?;
    parse_talent_data(&content)
}

/// Parse and validate talent data from RON text
pub fn parse_talent_data(content: &str) -> Result<TalentData, DataError> {
    let data: TalentData = ron::from_str(content).map_err(|e| DataError::Parse(e.to_string()))?;
    data.validate()?;
    Ok(data)
}

/// Load talent data, falling back to the defaults if the file is missing
/// or broken
pub fn load_talent_data_or_default(path: &Path) -> TalentData {
    if !path.exists() {
        log::info!("No talent data at {:?}, using defaults", path);
        return default_talent_data();
    }
    match load_talent_data(path) {
        Ok(data) => {
            log::info!("Loaded {} talents from {:?}", data.talents.len(), path);
            data
        }
        Err(e) => {
            log::warn!("Failed to load talent data: {}. Using defaults.", e);
            default_talent_data()
        }
    }
}
