//! Piece definition representing one requested cut.

use serde::{Deserialize, Serialize};

fn default_count() -> u32 {
    1
}

/// A requested cut of a given material, possibly needed several times.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Piece {
    /// Material type name, must exist in the settings.
    #[serde(alias = "type")]
    pub material_type: String,
    /// Length of one instance.
    pub length: f64,
    /// How many instances are needed.
    #[serde(default = "default_count")]
    pub count: u32,
}

impl Piece {
    /// Create a request for a single instance.
    pub fn new(material_type: impl Into<String>, length: f64) -> Self {
        Self {
            material_type: material_type.into(),
            length,
            count: 1,
        }
    }

    /// Set the number of instances, builder style.
    pub fn with_count(mut self, count: u32) -> Self {
        self.count = count;
        self
    }

    /// Total length of all instances, kerf excluded.
    pub fn total_length(&self) -> f64 {
        self.length * f64::from(self.count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_piece_defaults_count_to_one() {
        let piece: Piece = serde_json::from_str(r#"{"type": "pine", "length": 45.5}"#).unwrap();
        assert_eq!(piece.material_type, "pine");
        assert_eq!(piece.count, 1);
        assert_eq!(piece, Piece::new("pine", 45.5));
    }

    #[test]
    fn test_total_length() {
        let piece = Piece::new("oak", 30.0).with_count(3);
        assert_eq!(piece.total_length(), 90.0);
    }
}
