use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use uuid::Uuid;

use super::{DressCode, EventType, WardrobeItem};

/// A candidate multi-item outfit prior to ranking
///
/// Produced by the combination generator; the scorer fills in `score` and
/// `reasoning`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutfitCombination {
    pub items: Vec<WardrobeItem>,
    pub score: f64,
    pub reasoning: Vec<String>,
}

impl OutfitCombination {
    pub fn new(items: Vec<WardrobeItem>) -> Self {
        Self {
            items,
            score: 0.0,
            reasoning: Vec::new(),
        }
    }

    /// A viable outfit has at least two items, none of them repeated
    pub fn is_valid(&self) -> bool {
        if self.items.len() < 2 {
            return false;
        }
        let ids: HashSet<Uuid> = self.items.iter().map(|i| i.id).collect();
        ids.len() == self.items.len()
    }

    pub fn item_ids(&self) -> HashSet<Uuid> {
        self.items.iter().map(|i| i.id).collect()
    }
}

/// Final recommendation unit, immutable once constructed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannedOutfit {
    pub id: Uuid,
    pub event_id: Uuid,
    pub event_type: EventType,
    pub dress_code: DressCode,
    pub items: Vec<WardrobeItem>,
    /// Normalized score in [0, 1]
    pub confidence: f64,
    pub reasoning: Vec<String>,
    pub weather_notes: Vec<String>,
    pub alternatives: Vec<WardrobeItem>,
    pub created_at: DateTime<Utc>,
    pub event_date: DateTime<Utc>,
}

impl PlannedOutfit {
    pub fn item_ids(&self) -> HashSet<Uuid> {
        self.items.iter().map(|i| i.id).collect()
    }
}
