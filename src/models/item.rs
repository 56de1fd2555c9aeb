use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use uuid::Uuid;

/// Garment category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Top,
    Bottom,
    Dress,
    Outerwear,
    Shoes,
    Accessory,
}

impl Category {
    /// Whether items of this category are visible on camera from the waist up
    pub fn is_upper_body(self) -> bool {
        matches!(self, Category::Top | Category::Dress | Category::Outerwear)
    }
}

/// Closed tag vocabulary
///
/// The rule tables match on tags rather than free-form strings, so a typo in
/// stored data cannot silently bypass a constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tag {
    Solid,
    Patterned,
    Busy,
    Bright,
    Warm,
    Insulated,
    Thick,
    Light,
    Thin,
    Sleeveless,
    Breathable,
    Waterproof,
    WindResistant,
    Suede,
    Delicate,
    Athletic,
    WrinkleResistant,
    Layerable,
    Conservative,
    Professional,
    Classic,
    Statement,
    Elegant,
    Flowing,
}

/// Style classification from a fixed vocabulary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StyleClass {
    Business,
    BusinessCasual,
    Casual,
    Bohemian,
    Minimalist,
    Modern,
    Classic,
    Romantic,
    Sporty,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Season {
    Spring,
    Summer,
    Autumn,
    Winter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Occasion {
    Work,
    Formal,
    Casual,
    Party,
    Sport,
    Travel,
    Date,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FitCategory {
    Slim,
    Regular,
    Relaxed,
    Oversized,
}

/// Ordered 1..=5 rating used for comfort, versatility and condition
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Level {
    VeryLow,
    Low,
    Medium,
    High,
    VeryHigh,
}

impl Level {
    /// Numeric value on the 1..=5 scale
    pub fn value(self) -> u8 {
        match self {
            Level::VeryLow => 1,
            Level::Low => 2,
            Level::Medium => 3,
            Level::High => 4,
            Level::VeryHigh => 5,
        }
    }
}

/// A single wardrobe item
///
/// Read-only input to the recommendation engine; created and updated by the
/// wardrobe store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WardrobeItem {
    pub id: Uuid,
    pub name: String,
    pub category: Category,
    #[serde(default)]
    pub subcategory: Option<String>,
    /// Matched case-insensitively throughout the engine
    pub color: String,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub size: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub acquired_on: Option<NaiveDate>,
    #[serde(default)]
    pub tags: BTreeSet<Tag>,
    pub style: StyleClass,
    #[serde(default)]
    pub seasons: BTreeSet<Season>,
    #[serde(default)]
    pub occasions: BTreeSet<Occasion>,
    pub fit: FitCategory,
    pub comfort: Level,
    pub versatility: Level,
    pub condition: Level,
    #[serde(default)]
    pub last_worn: Option<DateTime<Utc>>,
    #[serde(default)]
    pub wear_count: u32,
    #[serde(default)]
    pub rating: Option<f32>,
    #[serde(default)]
    pub image_ref: Option<String>,
}

impl WardrobeItem {
    /// Creates an item with neutral defaults for the optional fields
    pub fn new(name: impl Into<String>, category: Category, color: impl Into<String>, style: StyleClass) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            category,
            subcategory: None,
            color: color.into(),
            brand: None,
            size: None,
            price: None,
            acquired_on: None,
            tags: BTreeSet::new(),
            style,
            seasons: BTreeSet::new(),
            occasions: BTreeSet::new(),
            fit: FitCategory::Regular,
            comfort: Level::Medium,
            versatility: Level::Medium,
            condition: Level::High,
            last_worn: None,
            wear_count: 0,
            rating: None,
            image_ref: None,
        }
    }

    pub fn with_tags(mut self, tags: impl IntoIterator<Item = Tag>) -> Self {
        self.tags.extend(tags);
        self
    }

    pub fn with_occasions(mut self, occasions: impl IntoIterator<Item = Occasion>) -> Self {
        self.occasions.extend(occasions);
        self
    }

    pub fn with_subcategory(mut self, subcategory: impl Into<String>) -> Self {
        self.subcategory = Some(subcategory.into());
        self
    }

    pub fn with_comfort(mut self, comfort: Level) -> Self {
        self.comfort = comfort;
        self
    }

    pub fn has_tag(&self, tag: Tag) -> bool {
        self.tags.contains(&tag)
    }

    pub fn has_any_tag(&self, tags: &[Tag]) -> bool {
        tags.iter().any(|t| self.tags.contains(t))
    }

    /// Case-insensitive substring match against name, subcategory and category
    pub fn matches_keyword(&self, keyword: &str) -> bool {
        let keyword = keyword.to_lowercase();
        if self.name.to_lowercase().contains(&keyword) {
            return true;
        }
        if let Some(sub) = &self.subcategory {
            if sub.to_lowercase().contains(&keyword) {
                return true;
            }
        }
        let category = match self.category {
            Category::Top => "top",
            Category::Bottom => "bottom",
            Category::Dress => "dress",
            Category::Outerwear => "outerwear",
            Category::Shoes => "shoes",
            Category::Accessory => "accessory",
        };
        category.contains(&keyword)
    }

    /// Lower-cased color for rule matching
    pub fn color_key(&self) -> String {
        self.color.to_lowercase()
    }
}
