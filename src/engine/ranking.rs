use std::cmp::Ordering;
use std::collections::HashSet;

use chrono::Utc;
use uuid::Uuid;

use crate::engine::scoring;
use crate::models::{
    EventContext, OutfitCombination, PlannedOutfit, WardrobeItem, WeatherForecast,
};

/// Confidence attached to the fallback recommendation when the wardrobe
/// cannot produce a viable combination
pub const FALLBACK_CONFIDENCE: f64 = 0.3;

const MAX_ALTERNATIVES: usize = 3;

/// Orders scored combinations and turns them into final recommendations,
/// highest score first. The sort is stable: ties keep generator order.
pub fn rank(
    mut combinations: Vec<OutfitCombination>,
    event: &EventContext,
    weather: Option<&WeatherForecast>,
) -> Vec<PlannedOutfit> {
    combinations.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));

    let notes = scoring::weather_notes(weather);

    (0..combinations.len())
        .map(|idx| {
            let alternatives = alternatives_for(&combinations, idx);
            let combo = &combinations[idx];
            PlannedOutfit {
                id: Uuid::new_v4(),
                event_id: event.id,
                event_type: event.event_type,
                dress_code: event.dress_code,
                items: combo.items.clone(),
                confidence: (combo.score / 100.0).min(1.0),
                reasoning: combo.reasoning.clone(),
                weather_notes: notes.clone(),
                alternatives,
                created_at: Utc::now(),
                event_date: event.start,
            }
        })
        .collect()
}

/// A few items from lower-ranked combinations the user could swap in
fn alternatives_for(ranked: &[OutfitCombination], idx: usize) -> Vec<WardrobeItem> {
    let own_ids = ranked[idx].item_ids();
    let mut seen: HashSet<Uuid> = HashSet::new();
    let mut alternatives = Vec::new();

    for other in ranked.iter().skip(idx + 1) {
        for item in &other.items {
            if own_ids.contains(&item.id) || seen.contains(&item.id) {
                continue;
            }
            seen.insert(item.id);
            alternatives.push(item.clone());
            if alternatives.len() == MAX_ALTERNATIVES {
                return alternatives;
            }
        }
    }

    alternatives
}

/// Terminal state for a starved pipeline: a defined low-confidence result the
/// caller should surface as "add more wardrobe items", never an error.
pub fn fallback_outfit(event: &EventContext) -> PlannedOutfit {
    tracing::info!(event_id = %event.id, "No viable combination, emitting fallback outfit");

    PlannedOutfit {
        id: Uuid::new_v4(),
        event_id: event.id,
        event_type: event.event_type,
        dress_code: event.dress_code,
        items: Vec::new(),
        confidence: FALLBACK_CONFIDENCE,
        reasoning: vec![
            "Not enough suitable wardrobe items to assemble an outfit for this event".to_string(),
            "Add more items matching the event's dress code to get recommendations".to_string(),
        ],
        weather_notes: Vec::new(),
        alternatives: Vec::new(),
        created_at: Utc::now(),
        event_date: event.start,
    }
}
