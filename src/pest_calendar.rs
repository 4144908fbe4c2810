// Seasonal pest-risk reference for the site's main crops
use serde::Serialize;

use crate::calendar::Month;
use crate::zone::PlantCategory;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PestSeverity {
    Critical,
    Warning,
    Info,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PestEntry {
    pub id: &'static str,
    pub crop: PlantCategory,
    pub name: &'static str,
    pub scientific_name: Option<&'static str>,
    pub risk_months: &'static [u8], // Calendar months, 1-12
    pub severity: PestSeverity,
    pub symptoms: &'static str,
    pub prevention: &'static str,
    pub treatment: &'static str,
}

impl PestEntry {
    pub fn is_risk_in(&self, month: Month) -> bool {
        self.risk_months.contains(&month.number())
    }
}

pub static PEST_CALENDAR: [PestEntry; 7] = [
    PestEntry {
        id: "palm-weevil",
        crop: PlantCategory::Palm,
        name: "Red Palm Weevil",
        scientific_name: Some("Rhynchophorus ferrugineus"),
        risk_months: &[1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12], // Peaks in warm months
        severity: PestSeverity::Critical,
        symptoms: "Wilting of young fronds, tunnels and sawdust, fermented odor, death of the growing tip.",
        prevention: "Keep the crown clean, avoid wounding, spray after pruning, use pheromone traps.",
        treatment: "Inject insecticide into infested areas or fumigate; remove and burn badly infested palms.",
    },
    PestEntry {
        id: "palm-dust-mite",
        crop: PlantCategory::Palm,
        name: "Date Dust Mite",
        scientific_name: Some("Oligonychus afrasiaticus"),
        risk_months: &[6, 7, 8],
        severity: PestSeverity::Warning,
        symptoms: "Dense webbing on fruit bunches; fruit turns red, then brown, and dries.",
        prevention: "Wash bunches with a water mist to reduce dust, remove weeds.",
        treatment: "Miticides such as micronized sulfur at first signs.",
    },
    PestEntry {
        id: "olive-fly",
        crop: PlantCategory::Olive,
        name: "Olive Fruit Fly",
        scientific_name: Some("Bactrocera oleae"),
        risk_months: &[9, 10, 11],
        severity: PestSeverity::Critical,
        symptoms: "Small punctures in fruit, early discoloration and drop, poor oil quality.",
        prevention: "Yellow sticky traps to monitor density, early harvest.",
        treatment: "Partial bait sprays to kill adults before egg laying.",
    },
    PestEntry {
        id: "olive-moth",
        crop: PlantCategory::Olive,
        name: "Olive Moth",
        scientific_name: Some("Prays oleae"),
        risk_months: &[3, 4, 5],
        severity: PestSeverity::Warning,
        symptoms: "Flowers eaten by the anthophagous generation, reducing fruit set.",
        prevention: "Tillage to destroy overwintering pupae.",
        treatment: "Bacillus thuringiensis (Bt) biological control.",
    },
    PestEntry {
        id: "citrus-leafminer",
        crop: PlantCategory::Citrus,
        name: "Citrus Leafminer",
        scientific_name: Some("Phyllocnistis citrella"),
        risk_months: &[3, 4, 5, 9, 10], // New growth flushes
        severity: PestSeverity::Warning,
        symptoms: "Silvery serpentine mines on young leaves, curled and deformed leaves.",
        prevention: "Avoid excess nitrogen that drives heavy vegetative flushes.",
        treatment: "Spring and autumn sprays with a systemic insecticide (imidacloprid).",
    },
    PestEntry {
        id: "grape-mealybug",
        crop: PlantCategory::Grape,
        name: "Mealybug",
        scientific_name: Some("Planococcus citri"),
        risk_months: &[5, 6, 7],
        severity: PestSeverity::Critical,
        symptoms: "White cottony insects, honeydew causing sooty mold on clusters.",
        prevention: "Prune for airflow, remove loose bark.",
        treatment: "Mineral oils in winter, targeted insecticides in summer.",
    },
    PestEntry {
        id: "lawn-grubs",
        crop: PlantCategory::Lawn,
        name: "White Grubs",
        scientific_name: None,
        risk_months: &[8, 9, 10],
        severity: PestSeverity::Warning,
        symptoms: "Dead yellow patches; turf lifts easily because roots are eaten.",
        prevention: "Aerate the soil, avoid over-watering.",
        treatment: "Granular insecticides targeting larvae.",
    },
];

/// Pests threatening `crop` in `month`.
pub fn pest_risks(crop: PlantCategory, month: Month) -> impl Iterator<Item = &'static PestEntry> {
    PEST_CALENDAR
        .iter()
        .filter(move |p| p.crop == crop && p.is_risk_in(month))
}

/// Critical pests active in `month` for any of the given crops.
pub fn critical_alerts(crops: &[PlantCategory], month: Month) -> Vec<&'static PestEntry> {
    PEST_CALENDAR
        .iter()
        .filter(|p| p.severity == PestSeverity::Critical)
        .filter(|p| crops.contains(&p.crop) && p.is_risk_in(month))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palm_summer_risks() {
        let ids: Vec<_> = pest_risks(PlantCategory::Palm, Month::JULY).map(|p| p.id).collect();
        assert_eq!(ids, vec!["palm-weevil", "palm-dust-mite"]);
        let ids: Vec<_> = pest_risks(PlantCategory::Palm, Month::JANUARY).map(|p| p.id).collect();
        assert_eq!(ids, vec!["palm-weevil"]);
    }

    #[test]
    fn crops_without_entries_have_no_risks() {
        assert_eq!(pest_risks(PlantCategory::Ornamental, Month::JULY).count(), 0);
    }

    #[test]
    fn critical_alerts_only_for_farmed_crops() {
        let october = Month::from_number(10).unwrap();
        let alerts = critical_alerts(&[PlantCategory::Olive, PlantCategory::Lawn], october);
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].id, "olive-fly");
        assert!(critical_alerts(&[], october).is_empty());
    }
}
