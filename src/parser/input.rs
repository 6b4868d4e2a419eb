//! Loading of piece lists and settings from JSON.

use crate::config::Settings;
use crate::error::{PlanError, Result};
use crate::model::Piece;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Pieces and settings bundled in one document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationRequest {
    pub pieces: Vec<Piece>,
    pub settings: Settings,
}

/// Parse a JSON array of pieces.
pub fn parse_pieces(content: &str) -> Result<Vec<Piece>> {
    Ok(serde_json::from_str(content)?)
}

/// Parse a JSON settings object.
pub fn parse_settings(content: &str) -> Result<Settings> {
    Ok(serde_json::from_str(content)?)
}

/// Parse a JSON object with `pieces` and `settings` fields.
pub fn parse_request(content: &str) -> Result<CalculationRequest> {
    Ok(serde_json::from_str(content)?)
}

/// Load a piece list from a JSON file.
pub fn load_pieces(path: &Path) -> Result<Vec<Piece>> {
    parse_pieces(&read_input(path)?)
}

/// Load settings from a JSON file.
pub fn load_settings(path: &Path) -> Result<Settings> {
    parse_settings(&read_input(path)?)
}

/// Load a combined request from a JSON file.
pub fn load_request(path: &Path) -> Result<CalculationRequest> {
    parse_request(&read_input(path)?)
}

fn read_input(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(PlanError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = fs::read_to_string(path)?;
    if content.trim().is_empty() {
        return Err(PlanError::EmptyFile {
            path: path.to_path_buf(),
        });
    }

    Ok(content)
}
