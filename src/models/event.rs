use chrono::{DateTime, Timelike, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Classification of the scheduled event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    WorkMeeting,
    VideoCall,
    JobInterview,
    DateNight,
    SpecialEvent,
    Fitness,
    Travel,
    Casual,
}

/// Dress code attached to the event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DressCode {
    Formal,
    Business,
    BusinessCasual,
    Cocktail,
    Casual,
    Comfortable,
    Activewear,
    VideoCallOptimized,
}

/// Ordered formality scale derived from the dress code
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormalityLevel {
    Activewear,
    Casual,
    BusinessCasual,
    Business,
    Formal,
}

impl DressCode {
    /// Fixed dress-code to formality mapping
    pub fn formality(self) -> FormalityLevel {
        match self {
            DressCode::Formal => FormalityLevel::Formal,
            DressCode::Business => FormalityLevel::Business,
            DressCode::BusinessCasual | DressCode::Cocktail | DressCode::VideoCallOptimized => {
                FormalityLevel::BusinessCasual
            }
            DressCode::Casual | DressCode::Comfortable => FormalityLevel::Casual,
            DressCode::Activewear => FormalityLevel::Activewear,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Importance {
    Low,
    Medium,
    High,
    Critical,
}

/// Event metadata supplied by the calendar collaborator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventContext {
    pub id: Uuid,
    pub title: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    #[serde(default)]
    pub location: Option<String>,
    pub event_type: EventType,
    pub dress_code: DressCode,
    pub importance: Importance,
    #[serde(default)]
    pub video_call: bool,
    #[serde(default)]
    pub attendee_count: Option<u32>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl EventContext {
    pub fn duration_hours(&self) -> f64 {
        (self.end - self.start).num_minutes() as f64 / 60.0
    }

    /// Events starting at 18:00 or later call for evening-appropriate attire
    pub fn is_evening(&self) -> bool {
        self.start.hour() >= 18
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn event_at(hour: u32) -> EventContext {
        let start = Utc.with_ymd_and_hms(2025, 6, 10, hour, 0, 0).unwrap();
        EventContext {
            id: Uuid::new_v4(),
            title: "Test".to_string(),
            start,
            end: start + chrono::Duration::hours(2),
            location: None,
            event_type: EventType::Casual,
            dress_code: DressCode::Casual,
            importance: Importance::Medium,
            video_call: false,
            attendee_count: None,
            notes: None,
        }
    }

    #[test]
    fn test_formality_ordering() {
        assert!(FormalityLevel::Activewear < FormalityLevel::Casual);
        assert!(FormalityLevel::BusinessCasual < FormalityLevel::Business);
        assert!(FormalityLevel::Business < FormalityLevel::Formal);
    }

    #[test]
    fn test_dress_code_formality_table() {
        assert_eq!(DressCode::Formal.formality(), FormalityLevel::Formal);
        assert_eq!(DressCode::Business.formality(), FormalityLevel::Business);
        assert_eq!(DressCode::BusinessCasual.formality(), FormalityLevel::BusinessCasual);
        assert_eq!(DressCode::Cocktail.formality(), FormalityLevel::BusinessCasual);
        assert_eq!(DressCode::VideoCallOptimized.formality(), FormalityLevel::BusinessCasual);
        assert_eq!(DressCode::Casual.formality(), FormalityLevel::Casual);
        assert_eq!(DressCode::Comfortable.formality(), FormalityLevel::Casual);
        assert_eq!(DressCode::Activewear.formality(), FormalityLevel::Activewear);
    }

    #[test]
    fn test_evening_threshold() {
        assert!(!event_at(17).is_evening());
        assert!(event_at(18).is_evening());
        assert!(event_at(21).is_evening());
    }

    #[test]
    fn test_duration_hours() {
        let event = event_at(9);
        assert_eq!(event.duration_hours(), 2.0);
    }
}
