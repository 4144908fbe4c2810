// Static agronomic reference tables: per-crop monthly water schedules and the generic seasonal curves
use std::fmt;

use nalgebra::SVector;
use serde::{Deserialize, Serialize};

use crate::calendar::Month;
use crate::zone::PlantCategory;

pub type MonthlyProfile = SVector<f64, 12>;

/// How often a crop is watered in a given month.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Frequency {
    Daily,
    EveryNDays(u32),
    TwiceWeekly,
    Weekly,
    Monthly,
    Dormant,
}

impl Frequency {
    /// Days between irrigation events.
    pub fn interval_days(self) -> f64 {
        match self {
            Frequency::Daily | Frequency::Dormant => 1.0,
            Frequency::EveryNDays(n) => n as f64,
            Frequency::TwiceWeekly => 3.5,
            Frequency::Weekly => 7.0,
            Frequency::Monthly => 30.0,
        }
    }

    /// Reads a free-text frequency descriptor such as "Every 4 Days" or "Twice Weekly".
    ///
    /// Anything unrecognized is treated as daily watering.
    pub fn from_description(text: &str) -> Frequency {
        let text = text.trim().to_lowercase();
        if text.contains("daily") {
            Frequency::Daily
        } else if text.contains("every") {
            text.split_whitespace()
                .find_map(|word| word.parse::<u32>().ok())
                .filter(|n| *n > 0)
                .map(|n| if n == 1 { Frequency::Daily } else { Frequency::EveryNDays(n) })
                .unwrap_or(Frequency::Daily)
        } else if text.contains("twice weekly") {
            Frequency::TwiceWeekly
        } else if text.contains("weekly") {
            Frequency::Weekly
        } else if text.contains("monthly") {
            Frequency::Monthly
        } else if text.contains("dorman") {
            Frequency::Dormant
        } else {
            Frequency::Daily
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Frequency::Daily => f.write_str("Daily"),
            Frequency::EveryNDays(n) => write!(f, "Every {n} Days"),
            Frequency::TwiceWeekly => f.write_str("Twice Weekly"),
            Frequency::Weekly => f.write_str("Weekly"),
            Frequency::Monthly => f.write_str("Monthly"),
            Frequency::Dormant => f.write_str("Dormancy"),
        }
    }
}

use Frequency::{Daily, Dormant, EveryNDays as Every, Monthly, TwiceWeekly, Weekly};

/// Twelve-month irrigation schedule for one crop.
#[derive(Debug, Clone, PartialEq)]
pub struct CropSchedule {
    pub daily_liters: [f64; 12], // Per tree, or per m² for lawn [L/day]
    pub frequency: [Frequency; 12],
    pub stage: [&'static str; 12], // Phenological stage
}

impl CropSchedule {
    /// Reference schedule for a crop. Every category has one.
    pub fn for_category(category: PlantCategory) -> &'static CropSchedule {
        match category {
            PlantCategory::Palm => &PALM,
            PlantCategory::Olive => &OLIVE,
            PlantCategory::Citrus => &CITRUS,
            PlantCategory::Grape => &GRAPE,
            PlantCategory::Lawn => &LAWN,
            PlantCategory::Fruit => &FRUIT,
            PlantCategory::Ornamental => &ORNAMENTAL,
        }
    }

    pub fn daily_liters_per_unit(&self, month: Month) -> f64 {
        self.daily_liters[month.index()]
    }

    pub fn frequency(&self, month: Month) -> Frequency {
        self.frequency[month.index()]
    }

    pub fn stage(&self, month: Month) -> &'static str {
        self.stage[month.index()]
    }

    pub fn daily_profile(&self) -> MonthlyProfile {
        MonthlyProfile::from(self.daily_liters)
    }
}

// Max 250 L/day at peak heat
static PALM: CropSchedule = CropSchedule {
    daily_liters: [70.0, 80.0, 120.0, 160.0, 200.0, 240.0, 250.0, 250.0, 220.0, 180.0, 130.0, 70.0],
    frequency: [
        Every(3), Every(3), Every(2), Every(2), Daily, Daily,
        Daily, Daily, Daily, Every(2), Every(2), Every(3),
    ],
    stage: [
        "Dormancy", "Pollination", "Fruit Set", "Fruit Growth", "Fruit Growth", "Rapid Growth",
        "Color Break", "Maturation", "Harvest", "Post-Harvest", "Nutrient Storage", "Dormancy",
    ],
};

// Dormant at 30 L in Dec-Jan, peaks at 110 L during pit hardening
static OLIVE: CropSchedule = CropSchedule {
    daily_liters: [30.0, 40.0, 60.0, 70.0, 80.0, 100.0, 110.0, 100.0, 90.0, 70.0, 60.0, 30.0],
    frequency: [
        Every(10), Every(7), Every(4), Every(3), Every(2), Every(2),
        Every(2), Every(2), Every(3), Every(4), Every(7), Every(10),
    ],
    stage: [
        "Dormancy", "Differentiation", "Bud Break", "Flowering", "Fruit Set", "Pit Hardening",
        "Pit Hardening", "Oil Accumulation", "Oil Accumulation", "Maturation", "Harvest", "Dormancy",
    ],
};

static CITRUS: CropSchedule = CropSchedule {
    daily_liters: [60.0, 60.0, 100.0, 125.0, 150.0, 200.0, 225.0, 230.0, 150.0, 125.0, 100.0, 60.0],
    frequency: [
        Every(3), Every(3), Every(3), Every(2), Every(2), Daily,
        Daily, Daily, Daily, Every(2), Every(3), Every(3),
    ],
    stage: [
        "Dormancy", "Bud Break", "Flowering", "Fruit Set", "Cell Enlargement", "Rapid Growth",
        "Rapid Growth", "Juice Accumulation", "Color Break", "Maturation", "Harvest", "Dormancy",
    ],
};

// Irrigation stops in Dec-Feb; August is a deliberate deficit month for sugar
static GRAPE: CropSchedule = CropSchedule {
    daily_liters: [0.0, 0.0, 40.0, 60.0, 80.0, 100.0, 130.0, 50.0, 40.0, 30.0, 20.0, 0.0],
    frequency: [
        Dormant, Dormant, Weekly, Every(4), Every(2), Daily,
        Daily, Daily, Every(3), Weekly, Monthly, Dormant,
    ],
    stage: [
        "Dormancy", "Dormancy", "Bud Burst", "Shoot Growth", "Flowering", "Fruit Set",
        "Berry Growth", "Veraison (Sugar)", "Maturation", "Harvest", "Reserve Storage", "Dormancy",
    ],
};

// Per m² of turf
static LAWN: CropSchedule = CropSchedule {
    daily_liters: [4.0, 4.0, 7.0, 8.0, 9.0, 12.0, 14.0, 15.0, 10.0, 9.0, 8.0, 4.0],
    frequency: [
        TwiceWeekly, TwiceWeekly, Every(2), Every(2), Daily, Daily,
        Daily, Daily, Every(2), Every(2), TwiceWeekly, TwiceWeekly,
    ],
    stage: [
        "Slow Growth", "Slow Growth", "Spring Greening", "Active Growth", "Active Growth", "Peak Heat",
        "Peak Heat", "Peak Heat", "Recovery", "Slowing", "Dormancy Prep", "Slow Growth",
    ],
};

static FRUIT: CropSchedule = CropSchedule {
    daily_liters: [60.0, 70.0, 110.0, 135.0, 160.0, 210.0, 240.0, 240.0, 160.0, 135.0, 100.0, 60.0],
    frequency: [
        Every(5), Every(4), Every(3), Every(2), Every(2), Daily,
        Daily, Daily, Daily, Every(2), Every(3), Every(5),
    ],
    stage: [
        "Dormancy", "Bud Break", "Flowering", "Fruit Set", "Growth", "Rapid Growth",
        "Maturation", "Maturation", "Harvest", "Post-Harvest", "Storage", "Dormancy",
    ],
};

static ORNAMENTAL: CropSchedule = CropSchedule {
    daily_liters: [35.0, 40.0, 55.0, 70.0, 90.0, 110.0, 130.0, 130.0, 110.0, 80.0, 55.0, 35.0],
    frequency: [
        Every(7), Every(6), Every(4), Every(3), Every(3), Every(2),
        Every(2), Every(2), Every(2), Every(3), Every(5), Every(7),
    ],
    stage: [
        "Standard", "Standard", "Spring", "Spring", "Summer", "Summer",
        "Peak", "Peak", "Summer", "Fall", "Fall", "Standard",
    ],
};

// Generic estimation, used only when no crop schedule is available
pub const BASE_LITERS_PER_TREE_FRUIT: f64 = 80.0;
pub const BASE_LITERS_PER_TREE_ORNAMENTAL: f64 = 40.0;

// Water need relative to base; peaks in Jul/Aug
const SEASONAL_FACTORS_FRUIT: [f64; 12] = [0.6, 0.7, 0.9, 1.1, 1.3, 1.45, 1.5, 1.45, 1.3, 1.1, 0.8, 0.6];
const SEASONAL_FACTORS_ORNAMENTAL: [f64; 12] =
    [0.5, 0.6, 0.8, 1.0, 1.2, 1.3, 1.35, 1.3, 1.2, 1.0, 0.7, 0.5];

pub fn generic_base_liters(category: PlantCategory) -> f64 {
    if category.is_fruit_like() {
        BASE_LITERS_PER_TREE_FRUIT
    } else {
        BASE_LITERS_PER_TREE_ORNAMENTAL
    }
}

pub fn seasonal_curve(category: PlantCategory) -> MonthlyProfile {
    match category {
        PlantCategory::Fruit | PlantCategory::Palm => MonthlyProfile::from(SEASONAL_FACTORS_FRUIT),
        _ => MonthlyProfile::from(SEASONAL_FACTORS_ORNAMENTAL),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn parses_frequency_descriptors() {
        assert_eq!(Frequency::from_description("Daily"), Frequency::Daily);
        assert_eq!(Frequency::from_description("Every 10 Days"), Frequency::EveryNDays(10));
        assert_eq!(Frequency::from_description("Every 300 Days"), Frequency::EveryNDays(300));
        assert_eq!(Frequency::from_description("Twice Weekly"), Frequency::TwiceWeekly);
        assert_eq!(Frequency::from_description("Weekly"), Frequency::Weekly);
        assert_eq!(Frequency::from_description("Monthly"), Frequency::Monthly);
        assert_eq!(Frequency::from_description("whenever it looks dry"), Frequency::Daily);
        assert_eq!(Frequency::from_description("Every other day"), Frequency::Daily);
    }

    #[test]
    fn intervals() {
        assert_relative_eq!(Frequency::TwiceWeekly.interval_days(), 3.5);
        assert_relative_eq!(Frequency::EveryNDays(4).interval_days(), 4.0);
        assert_relative_eq!(Frequency::from_description("every 300 days").interval_days(), 300.0);
        assert_relative_eq!(Frequency::Monthly.interval_days(), 30.0);
        assert_relative_eq!(Frequency::Dormant.interval_days(), 1.0);
    }

    #[test]
    fn labels_parse_back_to_the_same_interval() {
        for category in PlantCategory::ALL {
            let schedule = CropSchedule::for_category(category);
            for month in Month::ALL {
                let freq = schedule.frequency(month);
                let parsed = Frequency::from_description(&freq.to_string());
                assert_relative_eq!(parsed.interval_days(), freq.interval_days());
            }
        }
    }

    #[test]
    fn palm_peaks_in_july_and_august() {
        let palm = CropSchedule::for_category(PlantCategory::Palm);
        assert_relative_eq!(palm.daily_liters_per_unit(Month::JULY), 250.0);
        assert_relative_eq!(palm.daily_profile().max(), 250.0);
        assert_eq!(palm.stage(Month::JULY), "Color Break");
    }

    #[test]
    fn generic_constants_follow_crop_family() {
        assert_relative_eq!(generic_base_liters(PlantCategory::Olive), 80.0);
        assert_relative_eq!(generic_base_liters(PlantCategory::Lawn), 40.0);
        assert_relative_eq!(seasonal_curve(PlantCategory::Palm)[6], 1.5);
        assert_relative_eq!(seasonal_curve(PlantCategory::Citrus)[6], 1.35);
    }
}
