//! Mesh identity for the fixed dentition asset.
//!
//! The chart renders one specific 3D model (`permanent_dentition.glb`)
//! whose sub-meshes carry the exporter's generated names rather than
//! anything anatomical. The table below pins each tooth mesh of that one
//! asset to its Universal Numbering position. Resolution is exact-match
//! only: the asset also contains gum, jaw, and tongue geometry whose
//! names are absent from the table and resolve to nothing.

use dentition_core::tooth::TOOTH_COUNT;
use dentition_core::ToothId;

/// Tooth mesh names of the dentition asset, ordered by tooth number.
///
/// The exporter numbered surfaces in discovery order and shared blinn
/// materials across neighboring teeth, so the numerals carry no anatomy;
/// only this table does. Gaps in the surface numbers belong to the
/// non-tooth geometry.
const MESH_TABLE: [(&str, u8); TOOTH_COUNT] = [
    ("polySurface12_blinn20_0", 1),
    ("polySurface13_blinn20_0", 2),
    ("polySurface15_blinn20_0", 3),
    ("polySurface16_blinn21_0", 4),
    ("polySurface17_blinn21_0", 5),
    ("polySurface19_blinn21_0", 6),
    ("polySurface20_blinn22_0", 7),
    ("polySurface21_blinn22_0", 8),
    ("polySurface22_blinn22_0", 9),
    ("polySurface24_blinn23_0", 10),
    ("polySurface25_blinn23_0", 11),
    ("polySurface27_blinn23_0", 12),
    ("polySurface28_blinn24_0", 13),
    ("polySurface30_blinn24_0", 14),
    ("polySurface31_blinn24_0", 15),
    ("polySurface33_blinn25_0", 16),
    ("polySurface38_blinn27_0", 17),
    ("polySurface39_blinn27_0", 18),
    ("polySurface41_blinn27_0", 19),
    ("polySurface42_blinn28_0", 20),
    ("polySurface44_blinn28_0", 21),
    ("polySurface45_blinn28_0", 22),
    ("polySurface47_blinn29_0", 23),
    ("polySurface48_blinn29_0", 24),
    ("polySurface50_blinn29_0", 25),
    ("polySurface51_blinn30_0", 26),
    ("polySurface53_blinn30_0", 27),
    ("polySurface54_blinn30_0", 28),
    ("polySurface56_blinn31_0", 29),
    ("polySurface57_blinn31_0", 30),
    ("polySurface59_blinn31_0", 31),
    ("polySurface60_blinn32_0", 32),
];

/// Resolve a mesh node name to its tooth.
///
/// Exact match only, no partial or case-insensitive matching. `None`
/// marks non-tooth geometry; it is the expected result for most nodes of
/// the asset and is not an error.
pub fn resolve(mesh_name: &str) -> Option<ToothId> {
    MESH_TABLE
        .iter()
        .find(|(name, _)| *name == mesh_name)
        .and_then(|(_, number)| ToothId::new(*number).ok())
}

/// The asset's mesh name for a tooth.
///
/// Total over valid ids because the table covers all 32 positions.
pub fn mesh_name(tooth: ToothId) -> &'static str {
    MESH_TABLE[usize::from(tooth.number() - 1)].0
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_first_tooth_anchor() {
        assert_eq!(resolve("polySurface12_blinn20_0"), ToothId::new(1).ok());
    }

    #[test]
    fn test_non_tooth_geometry_resolves_to_none() {
        assert_eq!(resolve("Gingiva_Mesh"), None);
        assert_eq!(resolve("LowerJaw_phong1_0"), None);
        assert_eq!(resolve(""), None);
    }

    #[test]
    fn test_exact_match_only() {
        assert_eq!(resolve("polySurface12"), None);
        assert_eq!(resolve("polySurface12_blinn20"), None);
        assert_eq!(resolve("POLYSURFACE12_BLINN20_0"), None);
        assert_eq!(resolve(" polySurface12_blinn20_0"), None);
    }

    #[test]
    fn table_is_ordered_by_tooth_number() {
        for (index, (_, number)) in MESH_TABLE.iter().enumerate() {
            assert_eq!(usize::from(*number), index + 1);
        }
    }

    #[test]
    fn table_is_injective_and_covers_every_position() {
        let names: HashSet<&str> = MESH_TABLE.iter().map(|(name, _)| *name).collect();
        assert_eq!(names.len(), TOOTH_COUNT);

        let numbers: HashSet<u8> = MESH_TABLE.iter().map(|(_, number)| *number).collect();
        assert_eq!(numbers.len(), TOOTH_COUNT);
        assert!(numbers.iter().all(|n| (1..=32).contains(n)));
    }

    #[test]
    fn mesh_name_round_trips_through_resolve() {
        for tooth in ToothId::all() {
            assert_eq!(resolve(mesh_name(tooth)), Some(tooth));
        }
    }

    #[test]
    fn eight_teeth_resolve_per_quadrant() {
        for quadrant in 1..=4u8 {
            let count = MESH_TABLE
                .iter()
                .filter_map(|(name, _)| resolve(name))
                .filter(|tooth| tooth.quadrant() == quadrant)
                .count();
            assert_eq!(count, 8, "quadrant {quadrant}");
        }
    }
}
