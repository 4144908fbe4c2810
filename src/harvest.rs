use serde::Serialize;

use crate::calendar::Month;
use crate::zone::PlantCategory;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HarvestWindow {
    pub crop: PlantCategory,
    pub variety: Option<&'static str>,
    pub start_month: u8, // 1-12
    pub end_month: u8,   // 1-12, may be earlier than start when the season spans the new year
    pub maturity_signs: &'static str,
    pub method: &'static str,
    pub post_harvest: &'static str,
}

impl HarvestWindow {
    pub fn contains(&self, month: Month) -> bool {
        match (Month::from_number(self.start_month), Month::from_number(self.end_month)) {
            (Ok(start), Ok(end)) => month.within(start, end),
            _ => false,
        }
    }
}

pub static HARVEST_CALENDAR: [HarvestWindow; 7] = [
    HarvestWindow {
        crop: PlantCategory::Palm,
        variety: Some("Rutab stage"),
        start_month: 7,
        end_month: 8,
        maturity_signs: "Fruit fully colored (yellow/red) with half of it softened.",
        method: "Repeated hand picking every 2-3 days.",
        post_harvest: "Rapid cooling to 0-4 °C to stop fermentation.",
    },
    HarvestWindow {
        crop: PlantCategory::Palm,
        variety: Some("Tamr stage"),
        start_month: 9,
        end_month: 10,
        maturity_signs: "Dry fruit, firm skin, dark brown color.",
        method: "Cut the whole bunch.",
        post_harvest: "Clean, fumigate against insects, then press or pack.",
    },
    HarvestWindow {
        crop: PlantCategory::Olive,
        variety: Some("Table olives"),
        start_month: 9,
        end_month: 10,
        maturity_signs: "Full size, yellowish-green color.",
        method: "Hand picking to avoid bruising.",
        post_harvest: "Start curing immediately to remove bitterness.",
    },
    HarvestWindow {
        crop: PlantCategory::Olive,
        variety: Some("Oil olives"),
        start_month: 10,
        end_month: 11,
        maturity_signs: "60-70% of fruit turned purple/black.",
        method: "Pole beating or mechanical shaking.",
        post_harvest: "Press within 24 hours for extra virgin oil and to limit oxidation.",
    },
    HarvestWindow {
        crop: PlantCategory::Citrus,
        variety: Some("Lemon"),
        start_month: 1,
        end_month: 4,
        maturity_signs: "Juice content above 30%, bright yellow color.",
        method: "Clip with shears, leaving a short stem.",
        post_harvest: "Wax for long storage.",
    },
    HarvestWindow {
        crop: PlantCategory::Citrus,
        variety: Some("Orange"),
        start_month: 12,
        end_month: 2,
        maturity_signs: "Sugar/acid ratio (TSS/acid) suitable for eating.",
        method: "Hand picking or shears.",
        post_harvest: "Sort out damaged fruit.",
    },
    HarvestWindow {
        crop: PlantCategory::Grape,
        variety: None,
        start_month: 6,
        end_month: 8,
        maturity_signs: "Soft berries, sweet taste, brown seeds.",
        method: "Cut whole clusters with shears.",
        post_harvest: "Cool immediately; grapes do not ripen after picking.",
    },
];

/// Harvest windows of `crop` open in `month`.
pub fn harvest_windows(crop: PlantCategory, month: Month) -> impl Iterator<Item = &'static HarvestWindow> {
    HARVEST_CALENDAR
        .iter()
        .filter(move |w| w.crop == crop && w.contains(month))
}
