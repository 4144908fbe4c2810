// Yearly fertilization program per crop
use serde::Serialize;

use crate::calendar::Month;
use crate::zone::PlantCategory;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FertilizerType {
    Organic,
    Npk,
    Micronutrients,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FertilizationEntry {
    pub crop: PlantCategory,
    pub month: u8, // 1-12
    pub kind: FertilizerType,
    pub material: &'static str,
    pub amount: &'static str,
    pub application: &'static str,
    pub frequency: &'static str,
    pub critical_note: Option<&'static str>,
}

const fn entry(
    crop: PlantCategory,
    month: u8,
    kind: FertilizerType,
    material: &'static str,
    amount: &'static str,
    application: &'static str,
    frequency: &'static str,
    critical_note: Option<&'static str>,
) -> FertilizationEntry {
    FertilizationEntry {
        crop,
        month,
        kind,
        material,
        amount,
        application,
        frequency,
        critical_note,
    }
}

use FertilizerType::{Micronutrients, Npk, Organic};
use PlantCategory::{Citrus, Grape, Lawn, Olive, Palm};

pub static FERTILIZATION_SCHEDULE: [FertilizationEntry; 30] = [
    // Palm
    entry(Palm, 1, Organic, "Decomposed compost", "10-15 kg/palm",
        "Half-circle trench 70-100 cm from the trunk, 30 cm deep", "Once (winter service)",
        Some("Large palms can take up to 50 kg every few years")),
    entry(Palm, 2, Npk, "Urea (nitrogen)", "500 g/palm", "First dose, broadcast around the trunk",
        "Dose 1 of 3", Some("Drives vegetative growth before pollination")),
    entry(Palm, 3, Micronutrients, "Chelated iron + zinc + boron", "Foliar spray per label",
        "Spray green fronds in the morning", "Once", Some("Essential on alkaline soils to prevent yellowing")),
    entry(Palm, 4, Npk, "Urea (nitrogen)", "500 g/palm", "Second dose", "Dose 2 of 3", None),
    entry(Palm, 4, Npk, "Potassium sulfate", "700 g/palm", "First dose, after fruit set", "Dose 1 of 3-4",
        Some("Key element for fruit quality and sweetness")),
    entry(Palm, 5, Npk, "Urea (nitrogen)", "500 g/palm", "Third and last dose", "Dose 3 of 3",
        Some("No nitrogen after May, it delays ripening")),
    entry(Palm, 5, Micronutrients, "Chelated iron + zinc", "Foliar spray", "Foliar spray", "Once", None),
    entry(Palm, 6, Npk, "Potassium sulfate", "700 g/palm", "Second dose", "Dose 2 of 3-4", None),
    entry(Palm, 7, Npk, "Potassium sulfate", "700 g/palm", "Last dose, color-break stage", "Dose 3 of 3-4", None),
    // Olive
    entry(Olive, 3, Micronutrients, "Boron", "Foliar spray per label", "Spray before flowering", "Once",
        Some("Critical: boron deficiency deforms fruit and kills shoot tips")),
    entry(Olive, 4, Npk, "Nitrogen (urea or ammonium sulfate)", "By tree age", "Broadcast around the trunk",
        "Once in spring", Some("Supports the shoots that carry next year's crop")),
    // Citrus
    entry(Citrus, 2, Npk, "Ammonium sulfate (nitrogen)", "By tree age", "Broadcast around the trunk",
        "Dose 1 of 3", Some("Ammonium sulfate lowers soil alkalinity")),
    entry(Citrus, 2, Npk, "Phosphorus + potassium", "By tree age", "Late winter", "Once", None),
    entry(Citrus, 3, Micronutrients, "Chelated iron + zinc + manganese", "Foliar spray",
        "Spray new growth", "Once", Some("Essential on alkaline soils")),
    entry(Citrus, 5, Npk, "Nitrogen", "By tree age", "Second dose", "Dose 2 of 3", None),
    entry(Citrus, 6, Micronutrients, "Chelated micronutrients", "Foliar spray", "Foliar spray", "Once", None),
    entry(Citrus, 7, Npk, "Potassium", "By tree age", "During fruit growth", "Once",
        Some("Improves fruit size and peel thickness")),
    entry(Citrus, 8, Npk, "Nitrogen", "By tree age", "Third dose", "Dose 3 of 3", None),
    entry(Citrus, 9, Micronutrients, "Micronutrients", "Foliar spray", "Foliar spray", "Once", None),
    // Grape
    entry(Grape, 7, Npk, "Potassium", "By vine age", "Ripening stage", "Once",
        Some("Raises sugar content (Brix) and berry quality")),
    entry(Grape, 7, Micronutrients, "Magnesium", "Foliar spray", "Foliar spray", "Once",
        Some("Prevents bunch-stem necrosis")),
    // Lawn
    entry(Lawn, 3, Npk, "Urea (high nitrogen)", "By area", "Broadcast then irrigate immediately",
        "Monthly from March to October", Some("Keeps the turf green")),
    entry(Lawn, 4, Npk, "Compound NPK", "By area", "Broadcast then irrigate", "Monthly", None),
    entry(Lawn, 5, Npk, "Compound NPK", "By area", "Broadcast then irrigate", "Monthly", None),
    entry(Lawn, 6, Npk, "Compound NPK", "By area", "Broadcast then irrigate", "Monthly", None),
    entry(Lawn, 6, Micronutrients, "Chelated iron", "Spray or through irrigation",
        "Foliar spray or via drip", "When yellowing appears", Some("Restores green color")),
    entry(Lawn, 7, Npk, "Compound NPK", "By area", "Broadcast then irrigate", "Monthly", None),
    entry(Lawn, 8, Npk, "Compound NPK", "By area", "Broadcast then irrigate", "Monthly", None),
    entry(Lawn, 9, Npk, "Compound NPK", "By area", "Broadcast then irrigate", "Monthly", None),
    entry(Lawn, 10, Npk, "Compound NPK", "By area", "Broadcast then irrigate", "Monthly (last dose)", None),
];

/// Fertilizer applications due for `crop` in `month`.
pub fn fertilization_tasks(crop: PlantCategory, month: Month) -> impl Iterator<Item = &'static FertilizationEntry> {
    FERTILIZATION_SCHEDULE
        .iter()
        .filter(move |e| e.crop == crop && e.month == month.number())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn months_are_calendar_numbers() {
        assert!(FERTILIZATION_SCHEDULE.iter().all(|e| (1..=12).contains(&e.month)));
    }

    #[test]
    fn palm_april_gets_nitrogen_and_potassium() {
        let april = Month::from_number(4).unwrap();
        let materials: Vec<_> = fertilization_tasks(Palm, april).map(|e| e.material).collect();
        assert_eq!(materials, vec!["Urea (nitrogen)", "Potassium sulfate"]);
    }

    #[test]
    fn no_nitrogen_for_palms_after_may() {
        let late_nitrogen = FERTILIZATION_SCHEDULE
            .iter()
            .filter(|e| e.crop == Palm && e.month > 5)
            .any(|e| e.material.contains("nitrogen"));
        assert!(!late_nitrogen);
    }

    #[test]
    fn ornamentals_have_no_program() {
        assert_eq!(fertilization_tasks(PlantCategory::Ornamental, Month::JULY).count(), 0);
    }
}
