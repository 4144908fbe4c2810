use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::recommendation::IrrigationRecommendation;
use crate::zone::{Zone, ZoneId};

const DEFAULT_SUB_MAIN_DIAMETER_MM: u32 = 50; // When a zone has no recommendation yet
const LATERAL_DIAMETER_MM: u32 = 16;
const LATERAL_METERS_PER_TREE: f64 = 4.0; // Typical 4 m tree spacing

// Pipe tiers of the star network
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SegmentKind {
    SubMain, // Center to zone valve
    Lateral, // Inside the zone, feeding emitters
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkSegment {
    pub kind: SegmentKind,
    pub diameter_mm: u32,
    pub length_m: f64,
    pub zone_id: ZoneId,
    pub material: String,
}

/// Lays out one sub-main and one lateral run per active zone, in zone order.
pub fn compute_network_segments(
    zones: &[Zone],
    recommendations: &HashMap<ZoneId, IrrigationRecommendation>,
) -> Vec<NetworkSegment> {
    zones
        .iter()
        .filter(|zone| zone.is_active)
        .flat_map(|zone| {
            let diameter = recommendations
                .get(&zone.id)
                .map_or(DEFAULT_SUB_MAIN_DIAMETER_MM, |rec| rec.pipe_diameter_mm);
            [
                NetworkSegment {
                    kind: SegmentKind::SubMain,
                    diameter_mm: diameter,
                    length_m: zone.distance_from_center,
                    zone_id: zone.id,
                    material: "PVC Class 3".to_string(),
                },
                NetworkSegment {
                    kind: SegmentKind::Lateral,
                    diameter_mm: LATERAL_DIAMETER_MM,
                    length_m: zone.tree_count as f64 * LATERAL_METERS_PER_TREE,
                    zone_id: zone.id,
                    material: "GR".to_string(),
                },
            ]
        })
        .collect()
}
