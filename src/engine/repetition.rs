use std::collections::HashSet;

use uuid::Uuid;

use crate::models::{EventContext, PlannedOutfit, WardrobeItem};

/// How far back (and forward) an outfit counts as recent. Tunable, kept at the
/// historical value.
pub const SIMILARITY_WINDOW_DAYS: i64 = 14;

/// Safety floor: never let repetition avoidance remove more than this share of
/// the candidate pool. Tunable, kept at the historical value.
pub const MIN_REMAINING_RATIO: f64 = 0.3;

/// Removes items worn in temporally and contextually similar recent outfits.
///
/// If the removal would starve the generator (fewer than 30% of candidates
/// remaining), the removal is discarded entirely and the original set is
/// returned.
pub fn apply(
    items: Vec<WardrobeItem>,
    history: &[PlannedOutfit],
    event: &EventContext,
) -> Vec<WardrobeItem> {
    let recently_worn = recently_worn_ids(history, event);
    if recently_worn.is_empty() {
        return items;
    }

    let original_count = items.len();
    let remaining: Vec<WardrobeItem> = items
        .iter()
        .filter(|item| !recently_worn.contains(&item.id))
        .cloned()
        .collect();

    if (remaining.len() as f64) < original_count as f64 * MIN_REMAINING_RATIO {
        tracing::debug!(
            original = original_count,
            remaining = remaining.len(),
            "Repetition removal would starve the generator, keeping full set"
        );
        return items;
    }

    tracing::debug!(
        original = original_count,
        remaining = remaining.len(),
        recently_worn = recently_worn.len(),
        "Recently worn items removed"
    );

    remaining
}

/// Union of item ids from outfits within the similarity window whose event
/// type or dress code matches the current event
fn recently_worn_ids(history: &[PlannedOutfit], event: &EventContext) -> HashSet<Uuid> {
    history
        .iter()
        .filter(|outfit| {
            let days_apart = (outfit.event_date - event.start).num_days().abs();
            let similar_context = outfit.event_type == event.event_type
                || outfit.dress_code == event.dress_code;
            days_apart <= SIMILARITY_WINDOW_DAYS && similar_context
        })
        .flat_map(|outfit| outfit.items.iter().map(|i| i.id))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, DressCode, EventType, Importance, StyleClass};
    use chrono::{DateTime, Duration, TimeZone, Utc};

    fn event(start: DateTime<Utc>) -> EventContext {
        EventContext {
            id: Uuid::new_v4(),
            title: "Meeting".to_string(),
            start,
            end: start + Duration::hours(1),
            location: None,
            event_type: EventType::WorkMeeting,
            dress_code: DressCode::Business,
            importance: Importance::Medium,
            video_call: false,
            attendee_count: None,
            notes: None,
        }
    }

    fn outfit(
        items: Vec<WardrobeItem>,
        event_type: EventType,
        dress_code: DressCode,
        event_date: DateTime<Utc>,
    ) -> PlannedOutfit {
        PlannedOutfit {
            id: Uuid::new_v4(),
            event_id: Uuid::new_v4(),
            event_type,
            dress_code,
            items,
            confidence: 0.8,
            reasoning: Vec::new(),
            weather_notes: Vec::new(),
            alternatives: Vec::new(),
            created_at: event_date,
            event_date,
        }
    }

    fn items(count: usize) -> Vec<WardrobeItem> {
        (0..count)
            .map(|i| WardrobeItem::new(format!("Item {i}"), Category::Top, "blue", StyleClass::Casual))
            .collect()
    }

    #[test]
    fn test_recent_similar_outfit_removes_items() {
        let now = Utc.with_ymd_and_hms(2025, 5, 20, 9, 0, 0).unwrap();
        let pool = items(10);
        let worn = vec![pool[0].clone(), pool[1].clone()];
        let history = vec![outfit(
            worn,
            EventType::WorkMeeting,
            DressCode::Casual,
            now - Duration::days(3),
        )];

        let remaining = apply(pool.clone(), &history, &event(now));
        assert_eq!(remaining.len(), 8);
        assert!(!remaining.iter().any(|i| i.id == pool[0].id));
    }

    #[test]
    fn test_old_outfit_is_ignored() {
        let now = Utc.with_ymd_and_hms(2025, 5, 20, 9, 0, 0).unwrap();
        let pool = items(10);
        let history = vec![outfit(
            vec![pool[0].clone()],
            EventType::WorkMeeting,
            DressCode::Business,
            now - Duration::days(SIMILARITY_WINDOW_DAYS + 1),
        )];

        let remaining = apply(pool.clone(), &history, &event(now));
        assert_eq!(remaining.len(), 10);
    }

    #[test]
    fn test_dissimilar_context_is_ignored() {
        let now = Utc.with_ymd_and_hms(2025, 5, 20, 9, 0, 0).unwrap();
        let pool = items(10);
        let history = vec![outfit(
            vec![pool[0].clone()],
            EventType::Fitness,
            DressCode::Activewear,
            now - Duration::days(2),
        )];

        let remaining = apply(pool.clone(), &history, &event(now));
        assert_eq!(remaining.len(), 10);
    }

    #[test]
    fn test_matching_dress_code_alone_is_similar() {
        let now = Utc.with_ymd_and_hms(2025, 5, 20, 9, 0, 0).unwrap();
        let pool = items(10);
        let history = vec![outfit(
            vec![pool[0].clone()],
            EventType::SpecialEvent,
            DressCode::Business,
            now - Duration::days(2),
        )];

        let remaining = apply(pool.clone(), &history, &event(now));
        assert_eq!(remaining.len(), 9);
    }

    #[test]
    fn test_safety_floor_keeps_original_set() {
        let now = Utc.with_ymd_and_hms(2025, 5, 20, 9, 0, 0).unwrap();
        let pool = items(4);
        // Removing 3 of 4 items would leave 25% < 30%
        let history = vec![outfit(
            pool[..3].to_vec(),
            EventType::WorkMeeting,
            DressCode::Business,
            now - Duration::days(1),
        )];

        let remaining = apply(pool.clone(), &history, &event(now));
        assert_eq!(remaining.len(), 4);
    }

    #[test]
    fn test_empty_history_is_noop() {
        let now = Utc.with_ymd_and_hms(2025, 5, 20, 9, 0, 0).unwrap();
        let pool = items(5);
        assert_eq!(apply(pool.clone(), &[], &event(now)).len(), 5);
    }
}
