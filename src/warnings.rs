use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::recommendation::{DISTANCE_THRESHOLD_FOR_UPSIZING, IrrigationRecommendation};
use crate::zone::{Zone, ZoneId};

// Sub-mains below this size lose too much pressure on long runs [mm]
const MIN_LONG_RUN_DIAMETER_MM: u32 = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Warning,
    Info,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WarningKind {
    FrictionRisk,
    ManualOverride,
    ZeroTrees,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignWarning {
    pub zone_id: ZoneId,
    pub zone_name: String,
    pub kind: WarningKind,
    pub severity: Severity,
    pub message: String,
}

/// Flags design risks per zone. Zones without a recommendation are skipped.
pub fn design_warnings(
    zones: &[Zone],
    recommendations: &HashMap<ZoneId, IrrigationRecommendation>,
) -> Vec<DesignWarning> {
    let mut warnings = Vec::new();
    for zone in zones {
        let Some(rec) = recommendations.get(&zone.id) else {
            continue;
        };
        let mut push = |kind, severity, message: &str| {
            warnings.push(DesignWarning {
                zone_id: zone.id,
                zone_name: zone.name.clone(),
                kind,
                severity,
                message: message.to_string(),
            })
        };

        if zone.distance_from_center > DISTANCE_THRESHOLD_FOR_UPSIZING
            && rec.pipe_diameter_mm < MIN_LONG_RUN_DIAMETER_MM
        {
            push(
                WarningKind::FrictionRisk,
                Severity::Warning,
                "High risk of pressure drop. Distance is high but pipe is small. Consider upsizing.",
            );
        }
        if rec.is_overridden {
            push(
                WarningKind::ManualOverride,
                Severity::Info,
                "System recommendations have been manually overridden. Verify hydraulic feasibility.",
            );
        }
        if zone.tree_count == 0 {
            push(
                WarningKind::ZeroTrees,
                Severity::Warning,
                "Zone has 0 trees. Water demand is zero.",
            );
        }
    }
    warnings
}
