mod event;
mod item;
mod outfit;
mod requirements;
mod weather;

pub use event::{DressCode, EventContext, EventType, FormalityLevel, Importance};
pub use item::{Category, FitCategory, Level, Occasion, Season, StyleClass, Tag, WardrobeItem};
pub use outfit::{OutfitCombination, PlannedOutfit};
pub use requirements::{OutfitRequirements, Warmth, WeatherRequirements};
pub use weather::{WeatherCondition, WeatherForecast};
