use std::collections::HashMap;

use approx::assert_relative_eq;
use irrigation_engine::{
    FarmConfig, IrrigationEngine, IrrigationMethod, Month, PIPE_FLOW_LIMITS, PlantCategory, Region, SoilType,
    Zone, ZoneSpec, compute_monthly_demand, compute_network_segments, compute_recommendation,
    peak_daily_demand, reference_procurement_list, write_boq_csv,
};

fn palms(trees: u32) -> Zone {
    Zone::new("North Palms", PlantCategory::Palm, trees).with_distance(50.0)
}

#[test]
fn demand_is_deterministic() {
    for category in PlantCategory::ALL {
        let zone = Zone::new("Z", category, 17);
        let first = compute_monthly_demand(&zone, Region::Qassim, SoilType::Sandy);
        let second = compute_monthly_demand(&zone, Region::Qassim, SoilType::Sandy);
        assert_eq!(first, second);
    }
}

#[test]
fn demand_follows_region_factor() {
    let zone = palms(20);
    let july = |region| compute_monthly_demand(&zone, region, SoilType::Loam)[6].water_liters_per_day;
    assert!(july(Region::Qassim) > july(Region::Central));
    assert!(july(Region::Central) > july(Region::Coastal));
    assert!(july(Region::Coastal) > july(Region::Northern));
}

#[test]
fn zero_trees_need_no_water() {
    let zone = Zone::new("Empty", PlantCategory::Citrus, 0);
    let demand = compute_monthly_demand(&zone, Region::Qassim, SoilType::Sandy);
    for entry in &demand {
        assert_relative_eq!(entry.water_liters_per_day, 0.0);
        assert_relative_eq!(entry.water_cubic_meters_per_month, 0.0);
    }
    let rec = compute_recommendation(&zone, peak_daily_demand(&demand));
    assert_eq!(rec.runtime_minutes, 0);
}

#[test]
fn central_loam_palm_scenario() {
    let zone = palms(55);
    let demand = compute_monthly_demand(&zone, Region::Central, SoilType::Loam);
    assert_eq!(demand[6].month, Month::JULY);
    assert_relative_eq!(demand[6].water_liters_per_day, 13750.0);
    assert_relative_eq!(demand[6].water_cubic_meters_per_month, 426.3);

    let rec = compute_recommendation(&zone, peak_daily_demand(&demand));
    assert_eq!(rec.method, IrrigationMethod::Basin);
    assert_eq!(rec.emitters_per_tree, 1);
    assert_relative_eq!(rec.flow_rate_per_emitter, 200.0);
    assert_eq!(rec.runtime_minutes, 75);
    assert_eq!(rec.days_per_week, 7);
    assert!(!rec.is_overridden);
}

#[test]
fn pipe_never_shrinks_as_trees_grow() {
    let mut previous = 0;
    for trees in (0..400).step_by(7) {
        let zone = Zone::new("Grove", PlantCategory::Olive, trees).with_method(IrrigationMethod::Bubbler);
        let diameter = compute_recommendation(&zone, 1000.0).pipe_diameter_mm;
        assert!(diameter >= previous, "{trees} trees gave {diameter} mm after {previous} mm");
        previous = diameter;
    }
}

#[test]
fn long_runs_go_one_tier_up() {
    let tiers: Vec<u32> = PIPE_FLOW_LIMITS.iter().map(|&(mm, _)| mm).collect();
    for trees in [1, 10, 40, 90, 200, 1000] {
        let near = Zone::new("Near", PlantCategory::Citrus, trees).with_distance(50.0);
        let far = Zone::new("Far", PlantCategory::Citrus, trees).with_distance(150.0);
        let near_mm = compute_recommendation(&near, 500.0).pipe_diameter_mm;
        let far_mm = compute_recommendation(&far, 500.0).pipe_diameter_mm;

        let tier = tiers.iter().position(|&mm| mm == near_mm).unwrap();
        let expected = tiers[(tier + 1).min(tiers.len() - 1)];
        assert_eq!(far_mm, expected, "{trees} trees");
    }
}

#[test]
fn inactive_zones_have_no_segments() {
    let mut idle = palms(30);
    idle.is_active = false;
    let active = Zone::new("Lawn", PlantCategory::Lawn, 100);
    let zones = vec![idle.clone(), active.clone()];
    let recs: HashMap<_, _> = zones
        .iter()
        .map(|z| (z.id, compute_recommendation(z, 1000.0)))
        .collect();

    let segments = compute_network_segments(&zones, &recs);
    assert_eq!(segments.len(), 2);
    assert!(segments.iter().all(|s| s.zone_id == active.id));
    assert!(segments.iter().all(|s| s.zone_id != idle.id));
}

#[test]
fn boq_is_the_same_for_any_farm() {
    let reference = reference_procurement_list();

    let empty = IrrigationEngine::default();
    let config = FarmConfig::from_path(concat!(env!("CARGO_MANIFEST_DIR"), "/farm.toml")).unwrap();
    let full = IrrigationEngine::from_config(config).unwrap();

    assert_eq!(empty.boq(), reference.as_slice());
    assert_eq!(full.boq(), reference.as_slice());
}

#[test]
fn sample_farm_end_to_end() {
    let config = FarmConfig::from_path(concat!(env!("CARGO_MANIFEST_DIR"), "/farm.toml")).unwrap();
    let mut engine = IrrigationEngine::from_config(config).unwrap();
    assert_eq!(engine.zones().len(), 5);
    assert_eq!(engine.segments().len(), 10);
    assert_eq!(engine.recommendations().len(), 5);

    let lawn = engine.zones().iter().find(|z| z.name == "Front Lawn").unwrap().id;
    let before = engine.month_totals(Month::JULY);
    engine.toggle_zone(lawn).unwrap();
    let after = engine.month_totals(Month::JULY);
    assert!(after.liters_per_day < before.liters_per_day);
    assert_eq!(engine.segments().len(), 8);

    let id = engine
        .add_zone(ZoneSpec {
            name: "Orchard".to_string(),
            plant_category: PlantCategory::Fruit,
            tree_count: 12,
            irrigation_method: IrrigationMethod::Auto,
            distance_from_center: 35.0,
            is_active: true,
        })
        .unwrap();
    assert_eq!(engine.recommendation(id).unwrap().method, IrrigationMethod::Drip);

    let mut out = Vec::new();
    write_boq_csv(engine.boq(), engine.zones(), &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert_eq!(text.lines().count(), engine.boq().len() + 1);
}
