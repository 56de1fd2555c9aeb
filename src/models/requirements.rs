use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::{DressCode, FormalityLevel, Level, Tag};

/// Required warmth derived from the forecast
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Warmth {
    #[default]
    Standard,
    High,
}

/// Weather-derived constraints nested inside the requirements
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct WeatherRequirements {
    pub warmth: Warmth,
    pub waterproof: bool,
    pub wind_resistant: bool,
    pub breathable: bool,
    pub required_items: Vec<String>,
    pub suggested_items: Vec<String>,
    pub avoid_items: Vec<String>,
}

/// All constraints derived from one event (plus forecast)
///
/// Built fresh for every recommendation call by the requirement analyzer and
/// never shared across calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutfitRequirements {
    pub dress_code: DressCode,
    pub formality: FormalityLevel,
    pub video_call_optimized: bool,
    pub conservative: bool,
    pub professional: bool,
    pub special_occasion: bool,
    pub activewear: bool,
    pub evening: bool,
    pub comfort_priority: Level,
    pub preferred_colors: Vec<String>,
    pub avoid_colors: Vec<String>,
    pub avoid_tags: BTreeSet<Tag>,
    pub must_have_items: Vec<String>,
    pub suggested_items: Vec<String>,
    pub avoid_items: Vec<String>,
    pub weather: Option<WeatherRequirements>,
}

impl OutfitRequirements {
    /// Baseline requirements carrying only the dress-code constraint
    pub fn for_dress_code(dress_code: DressCode) -> Self {
        Self {
            dress_code,
            formality: dress_code.formality(),
            video_call_optimized: false,
            conservative: false,
            professional: false,
            special_occasion: false,
            activewear: false,
            evening: false,
            comfort_priority: Level::Medium,
            preferred_colors: Vec::new(),
            avoid_colors: Vec::new(),
            avoid_tags: BTreeSet::new(),
            must_have_items: Vec::new(),
            suggested_items: Vec::new(),
            avoid_items: Vec::new(),
            weather: None,
        }
    }

    /// Raises formality, never lowers it
    pub fn escalate_formality(&mut self, floor: FormalityLevel) {
        if self.formality < floor {
            self.formality = floor;
        }
    }
}
