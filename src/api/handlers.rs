use axum::{extract::State, http::StatusCode, Json};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::collections::BTreeSet;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::models::{
    Category, DressCode, EventContext, EventType, FitCategory, Importance, Level, Occasion,
    PlannedOutfit, Season, StyleClass, Tag, WardrobeItem, WeatherForecast,
};

use super::AppState;

const MAX_SUGGESTIONS: usize = 5;

// Request types

#[derive(Debug, Deserialize)]
pub struct CreateItemRequest {
    pub name: String,
    pub category: Category,
    pub color: String,
    pub style: StyleClass,
    #[serde(default)]
    pub subcategory: Option<String>,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub size: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub tags: BTreeSet<Tag>,
    #[serde(default)]
    pub seasons: BTreeSet<Season>,
    #[serde(default)]
    pub occasions: BTreeSet<Occasion>,
    #[serde(default)]
    pub fit: Option<FitCategory>,
    #[serde(default)]
    pub comfort: Option<Level>,
    #[serde(default)]
    pub versatility: Option<Level>,
    #[serde(default)]
    pub condition: Option<Level>,
}

impl From<CreateItemRequest> for WardrobeItem {
    fn from(request: CreateItemRequest) -> Self {
        let mut item = WardrobeItem::new(request.name, request.category, request.color, request.style);
        item.subcategory = request.subcategory;
        item.brand = request.brand;
        item.size = request.size;
        item.price = request.price;
        item.tags = request.tags;
        item.seasons = request.seasons;
        item.occasions = request.occasions;
        if let Some(fit) = request.fit {
            item.fit = fit;
        }
        if let Some(comfort) = request.comfort {
            item.comfort = comfort;
        }
        if let Some(versatility) = request.versatility {
            item.versatility = versatility;
        }
        if let Some(condition) = request.condition {
            item.condition = condition;
        }
        item
    }
}

/// Event payload for suggestion requests; the id is optional so one-off
/// events can be submitted without pre-registering them anywhere
#[derive(Debug, Deserialize)]
pub struct EventPayload {
    #[serde(default)]
    pub id: Option<Uuid>,
    pub title: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    #[serde(default)]
    pub location: Option<String>,
    pub event_type: EventType,
    pub dress_code: DressCode,
    #[serde(default)]
    pub importance: Option<Importance>,
    #[serde(default)]
    pub video_call: bool,
    #[serde(default)]
    pub attendee_count: Option<u32>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl EventPayload {
    fn into_context(self) -> EventContext {
        EventContext {
            id: self.id.unwrap_or_else(Uuid::new_v4),
            title: self.title,
            start: self.start,
            end: self.end,
            location: self.location,
            event_type: self.event_type,
            dress_code: self.dress_code,
            importance: self.importance.unwrap_or(Importance::Medium),
            video_call: self.video_call,
            attendee_count: self.attendee_count,
            notes: self.notes,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SuggestRequest {
    pub event: EventPayload,
    /// Inline forecast overriding the weather provider
    #[serde(default)]
    pub weather: Option<WeatherForecast>,
    /// Number of outfit variants, 1..=5
    #[serde(default)]
    pub count: Option<usize>,
}

// Handlers

/// Get all wardrobe items
pub async fn list_items(State(state): State<AppState>) -> Json<Vec<WardrobeItem>> {
    Json(state.wardrobe.list().await)
}

/// Add a wardrobe item
pub async fn create_item(
    State(state): State<AppState>,
    Json(request): Json<CreateItemRequest>,
) -> (StatusCode, Json<WardrobeItem>) {
    let item = WardrobeItem::from(request);
    state.wardrobe.add(item.clone()).await;
    (StatusCode::CREATED, Json(item))
}

/// Get recorded outfit history
pub async fn list_history(State(state): State<AppState>) -> Json<Vec<PlannedOutfit>> {
    Json(state.history.list().await)
}

/// Record a worn outfit so the repetition guard can see it
pub async fn record_outfit(
    State(state): State<AppState>,
    Json(outfit): Json<PlannedOutfit>,
) -> (StatusCode, Json<PlannedOutfit>) {
    state.history.record(outfit.clone()).await;
    (StatusCode::CREATED, Json(outfit))
}

/// Suggest ranked outfits for an event
///
/// A low-confidence fallback outfit with no items is a valid 200 response;
/// only provider failures surface as errors.
pub async fn suggest(
    State(state): State<AppState>,
    Json(request): Json<SuggestRequest>,
) -> AppResult<Json<Vec<PlannedOutfit>>> {
    if request.event.end <= request.event.start {
        return Err(AppError::InvalidInput(
            "Event end must be after its start".to_string(),
        ));
    }

    let count = request.count.unwrap_or(1);
    if count == 0 || count > MAX_SUGGESTIONS {
        return Err(AppError::InvalidInput(format!(
            "count must be between 1 and {}",
            MAX_SUGGESTIONS
        )));
    }

    let event = request.event.into_context();
    let suggestions = state
        .planner
        .suggest_outfits(&event, request.weather, count)
        .await?;

    Ok(Json(suggestions))
}
