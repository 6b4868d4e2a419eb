//! Expansion of piece requests into per-material lists of instances.

use crate::config::Settings;
use crate::error::{PlanError, Result};
use crate::model::Piece;

/// Individual piece lengths requested for one material type.
#[derive(Debug, Clone, PartialEq)]
pub struct MaterialGroup {
    pub material_type: String,
    /// One entry per instance, in request order.
    pub lengths: Vec<f64>,
}

/// Group requested pieces by material type, expanding counts into instances.
///
/// Groups appear in the order their material was first requested. Fails on the
/// first request naming a material that is not configured.
pub fn group_pieces(pieces: &[Piece], settings: &Settings) -> Result<Vec<MaterialGroup>> {
    let mut groups: Vec<MaterialGroup> = Vec::new();

    for piece in pieces {
        if settings.material(&piece.material_type).is_none() {
            return Err(PlanError::UnknownMaterialType {
                material_type: piece.material_type.clone(),
            });
        }

        let idx = match groups
            .iter()
            .position(|g| g.material_type == piece.material_type)
        {
            Some(idx) => idx,
            None => {
                groups.push(MaterialGroup {
                    material_type: piece.material_type.clone(),
                    lengths: Vec::new(),
                });
                groups.len() - 1
            }
        };

        groups[idx]
            .lengths
            .extend(std::iter::repeat(piece.length).take(piece.count as usize));
    }

    Ok(groups)
}
