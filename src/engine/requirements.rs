use crate::models::{
    EventContext, EventType, FormalityLevel, Importance, Level, OutfitRequirements, Tag, Warmth,
    WeatherForecast, WeatherRequirements,
};

/// Derives a fully-formed requirements value from the event context and an
/// optional forecast.
///
/// Pure and deterministic: same inputs always produce the same requirements,
/// and every branch has a default. The value is built by composing reducers
/// over the baseline so no partially-constructed requirements ever escape.
pub fn analyze(event: &EventContext, weather: Option<&WeatherForecast>) -> OutfitRequirements {
    let req = OutfitRequirements::for_dress_code(event.dress_code);
    let req = apply_event_overlay(req, event);
    let req = apply_weather(req, weather);
    apply_time_of_day(req, event)
}

fn apply_event_overlay(mut req: OutfitRequirements, event: &EventContext) -> OutfitRequirements {
    match event.event_type {
        EventType::VideoCall => {
            req.video_call_optimized = true;
            // Only the upper body is on camera; busy patterns shimmer badly
            req.avoid_tags.extend([Tag::Busy, Tag::Bright, Tag::Patterned]);
            req.preferred_colors
                .extend(["navy", "charcoal", "gray", "black"].map(String::from));
        }
        EventType::JobInterview => {
            req.conservative = true;
            req.professional = true;
            req.escalate_formality(FormalityLevel::Business);
            req.must_have_items
                .extend(["blazer", "dress shoes"].map(String::from));
            req.avoid_items
                .extend(["sneakers", "denim", "t-shirt"].map(String::from));
            req.preferred_colors
                .extend(["navy", "black", "gray", "white"].map(String::from));
        }
        EventType::DateNight => {
            req.special_occasion = true;
            req.suggested_items
                .extend(["dress", "heels", "statement necklace"].map(String::from));
        }
        EventType::WorkMeeting => {
            req.professional = true;
            req.comfort_priority = Level::High;
            if event.importance == Importance::Critical {
                req.escalate_formality(FormalityLevel::Business);
                req.must_have_items.push("blazer".to_string());
            }
        }
        EventType::SpecialEvent => {
            req.special_occasion = true;
            req.escalate_formality(FormalityLevel::BusinessCasual);
            req.suggested_items.extend(["dress", "suit"].map(String::from));
        }
        EventType::Fitness => {
            req.activewear = true;
            req.comfort_priority = Level::VeryHigh;
            req.formality = FormalityLevel::Activewear;
            req.must_have_items
                .extend(["athletic", "sneakers"].map(String::from));
        }
        EventType::Travel => {
            req.comfort_priority = Level::VeryHigh;
            req.suggested_items
                .extend(["wrinkle resistant", "layers"].map(String::from));
        }
        EventType::Casual => {
            req.comfort_priority = Level::High;
        }
    }

    // Video-call constraints also apply when a non-call event happens on camera
    if event.video_call && !req.video_call_optimized {
        req.video_call_optimized = true;
        req.avoid_tags.extend([Tag::Busy, Tag::Bright, Tag::Patterned]);
    }

    req
}

fn apply_weather(mut req: OutfitRequirements, weather: Option<&WeatherForecast>) -> OutfitRequirements {
    let Some(forecast) = weather else {
        return req;
    };

    let mut wr = WeatherRequirements::default();

    if forecast.is_cold() {
        wr.warmth = Warmth::High;
        wr.suggested_items.push("layers".to_string());
        wr.required_items.extend(["coat", "boots"].map(String::from));
    }

    if forecast.is_hot() {
        wr.breathable = true;
        req.preferred_colors
            .extend(["white", "beige", "light blue"].map(String::from));
    }

    if forecast.is_rainy() {
        wr.waterproof = true;
        wr.required_items.push("rain".to_string());
        wr.avoid_items.push("suede".to_string());
        req.avoid_colors.extend(["white", "cream"].map(String::from));
    }

    if forecast.is_windy() {
        wr.wind_resistant = true;
        wr.avoid_items.extend(["scarf", "flowing"].map(String::from));
    }

    req.weather = Some(wr);
    req
}

fn apply_time_of_day(mut req: OutfitRequirements, event: &EventContext) -> OutfitRequirements {
    if event.is_evening() {
        req.evening = true;
    }
    req
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DressCode, WeatherCondition};
    use chrono::{TimeZone, Utc};
    use uuid::Uuid;

    fn event(event_type: EventType, dress_code: DressCode, hour: u32) -> EventContext {
        let start = Utc.with_ymd_and_hms(2025, 3, 12, hour, 0, 0).unwrap();
        EventContext {
            id: Uuid::new_v4(),
            title: "Event".to_string(),
            start,
            end: start + chrono::Duration::hours(1),
            location: None,
            event_type,
            dress_code,
            importance: Importance::Medium,
            video_call: false,
            attendee_count: None,
            notes: None,
        }
    }

    fn forecast(temperature_c: f32, precipitation_chance: u8, wind_speed_kmh: f32) -> WeatherForecast {
        WeatherForecast {
            condition: WeatherCondition::Overcast,
            temperature_c,
            precipitation_chance,
            humidity: 60,
            wind_speed_kmh,
        }
    }

    #[test]
    fn test_video_call_avoids_patterns() {
        let req = analyze(&event(EventType::VideoCall, DressCode::VideoCallOptimized, 10), None);
        assert!(req.video_call_optimized);
        assert!(req.avoid_tags.contains(&Tag::Patterned));
        assert!(req.avoid_tags.contains(&Tag::Busy));
        assert!(req.preferred_colors.contains(&"navy".to_string()));
    }

    #[test]
    fn test_job_interview_is_conservative_business() {
        let req = analyze(&event(EventType::JobInterview, DressCode::Casual, 10), None);
        assert!(req.conservative);
        assert!(req.professional);
        assert_eq!(req.formality, FormalityLevel::Business);
        assert!(req.must_have_items.contains(&"blazer".to_string()));
        assert!(req.avoid_items.contains(&"denim".to_string()));
    }

    #[test]
    fn test_critical_work_meeting_escalates() {
        let mut ev = event(EventType::WorkMeeting, DressCode::BusinessCasual, 9);
        ev.importance = Importance::Critical;
        let req = analyze(&ev, None);
        assert_eq!(req.formality, FormalityLevel::Business);
        assert!(req.must_have_items.contains(&"blazer".to_string()));
    }

    #[test]
    fn test_regular_work_meeting_keeps_dress_code_formality() {
        let req = analyze(&event(EventType::WorkMeeting, DressCode::BusinessCasual, 9), None);
        assert_eq!(req.formality, FormalityLevel::BusinessCasual);
        assert!(req.must_have_items.is_empty());
    }

    #[test]
    fn test_fitness_forces_activewear() {
        let req = analyze(&event(EventType::Fitness, DressCode::Activewear, 7), None);
        assert!(req.activewear);
        assert_eq!(req.formality, FormalityLevel::Activewear);
        assert_eq!(req.comfort_priority, Level::VeryHigh);
        assert!(req.must_have_items.contains(&"sneakers".to_string()));
    }

    #[test]
    fn test_no_weather_leaves_requirements_unset() {
        let req = analyze(&event(EventType::Casual, DressCode::Casual, 12), None);
        assert!(req.weather.is_none());
    }

    #[test]
    fn test_cold_weather_demands_warmth() {
        let req = analyze(
            &event(EventType::Casual, DressCode::Casual, 12),
            Some(&forecast(4.0, 10, 5.0)),
        );
        let wr = req.weather.expect("weather requirements");
        assert_eq!(wr.warmth, Warmth::High);
        assert!(wr.required_items.contains(&"coat".to_string()));
        assert!(wr.required_items.contains(&"boots".to_string()));
    }

    #[test]
    fn test_rain_demands_waterproofing() {
        let req = analyze(
            &event(EventType::Casual, DressCode::Casual, 12),
            Some(&forecast(15.0, 75, 5.0)),
        );
        let wr = req.weather.as_ref().expect("weather requirements");
        assert!(wr.waterproof);
        assert!(wr.avoid_items.contains(&"suede".to_string()));
        assert!(req.avoid_colors.contains(&"white".to_string()));
    }

    #[test]
    fn test_wind_avoids_loose_garments() {
        let req = analyze(
            &event(EventType::Casual, DressCode::Casual, 12),
            Some(&forecast(15.0, 10, 30.0)),
        );
        let wr = req.weather.expect("weather requirements");
        assert!(wr.wind_resistant);
        assert!(wr.avoid_items.contains(&"scarf".to_string()));
    }

    #[test]
    fn test_evening_flag_from_start_hour() {
        assert!(!analyze(&event(EventType::DateNight, DressCode::Cocktail, 17), None).evening);
        assert!(analyze(&event(EventType::DateNight, DressCode::Cocktail, 19), None).evening);
    }

    #[test]
    fn test_analyzer_is_deterministic() {
        let ev = event(EventType::JobInterview, DressCode::Business, 9);
        let fc = forecast(8.0, 70, 25.0);
        assert_eq!(analyze(&ev, Some(&fc)), analyze(&ev, Some(&fc)));
    }
}
