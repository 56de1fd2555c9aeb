use crate::models::{
    Category, EventContext, EventType, Level, Occasion, OutfitCombination, StyleClass, Tag,
    WardrobeItem, WeatherForecast,
};
use std::collections::BTreeSet;

/// Known-harmonic color pairs. Intentionally a coarse heuristic rather than a
/// perceptual color-distance model.
const HARMONIC_PAIRS: [(&str, &str); 5] = [
    ("black", "white"),
    ("navy", "white"),
    ("gray", "black"),
    ("brown", "cream"),
    ("blue", "gray"),
];

const NEUTRAL_HARMONY: f64 = 0.7;

/// Scores one combination in [0, 100] across six independently-capped
/// criteria and fills in its reasoning.
pub fn score(combo: &mut OutfitCombination, event: &EventContext, weather: Option<&WeatherForecast>) {
    let appropriateness = component(event_appropriateness(combo, event), 30.0);
    let weather_suitability = component(
        weather.map_or(0.0, |w| weather_points(combo, w)),
        20.0,
    );
    let harmony = component(color_harmony(&item_colors(combo)) * 15.0, 15.0);
    let coherence = component(style_coherence(combo), 15.0);
    let comfort = component(comfort_points(combo, event), 10.0);
    let versatility = component(mean_level(combo, |i| i.versatility), 5.0);
    let condition = component(mean_level(combo, |i| i.condition), 5.0);

    let total = (appropriateness
        + weather_suitability
        + harmony
        + coherence
        + comfort
        + versatility
        + condition)
        .clamp(0.0, 100.0);

    combo.score = total;
    combo.reasoning = build_reasoning(total, event);
}

/// Each criterion is capped at its maximum before summing. No lower bound:
/// weather penalties can take that component net-negative, and the final sum
/// clamp bounds the total.
fn component(points: f64, cap: f64) -> f64 {
    points.min(cap)
}

fn item_colors(combo: &OutfitCombination) -> Vec<String> {
    combo.items.iter().map(|i| i.color_key()).collect()
}

/// Coarse harmony heuristic: the first two colors are checked against the
/// fixed pair table; an exact subset match scores 1.0, anything else the
/// neutral default.
pub fn color_harmony(colors: &[String]) -> f64 {
    let leading: BTreeSet<&str> = colors.iter().take(2).map(String::as_str).collect();

    if leading.is_empty() {
        return NEUTRAL_HARMONY;
    }

    let matches_pair = HARMONIC_PAIRS.iter().any(|(a, b)| {
        leading.iter().all(|c| c == a || c == b)
    });

    if matches_pair {
        1.0
    } else {
        NEUTRAL_HARMONY
    }
}

fn event_appropriateness(combo: &OutfitCombination, event: &EventContext) -> f64 {
    let mut points = 0.0;

    match event.event_type {
        EventType::VideoCall => {
            for item in &combo.items {
                if item.category.is_upper_body() {
                    points += 8.0;
                    if !item.has_tag(Tag::Patterned) {
                        points += 2.0;
                    }
                }
            }
        }
        EventType::JobInterview => {
            for item in &combo.items {
                if item.style == StyleClass::Business {
                    points += 6.0;
                }
                if item.has_any_tag(&[Tag::Conservative, Tag::Professional, Tag::Classic]) {
                    points += 2.0;
                }
            }
        }
        EventType::WorkMeeting => {
            for item in &combo.items {
                if matches!(item.style, StyleClass::Business | StyleClass::BusinessCasual) {
                    points += 5.0;
                }
                if item.occasions.contains(&Occasion::Work) {
                    points += 2.0;
                }
            }
        }
        EventType::DateNight => {
            for item in &combo.items {
                if item.style == StyleClass::Romantic {
                    points += 6.0;
                }
                if item.has_any_tag(&[Tag::Statement, Tag::Elegant]) {
                    points += 2.0;
                }
                if item.category == Category::Dress {
                    points += 4.0;
                }
            }
        }
        EventType::SpecialEvent => {
            for item in &combo.items {
                if item.occasions.contains(&Occasion::Party)
                    || item.occasions.contains(&Occasion::Formal)
                {
                    points += 5.0;
                }
                if matches!(
                    item.style,
                    StyleClass::Classic | StyleClass::Romantic | StyleClass::Modern
                ) {
                    points += 3.0;
                }
            }
        }
        EventType::Fitness => {
            for item in &combo.items {
                if item.has_tag(Tag::Athletic) || item.style == StyleClass::Sporty {
                    points += 8.0;
                }
            }
        }
        EventType::Travel => {
            for item in &combo.items {
                if item.has_tag(Tag::WrinkleResistant) {
                    points += 4.0;
                }
                if item.has_tag(Tag::Layerable) {
                    points += 3.0;
                }
                if item.comfort >= Level::High {
                    points += 2.0;
                }
            }
        }
        // Flat award for event types without specific rules
        EventType::Casual => points = 15.0,
    }

    points
}

fn weather_points(combo: &OutfitCombination, forecast: &WeatherForecast) -> f64 {
    let mut points = 0.0;

    if forecast.is_cold() {
        for item in &combo.items {
            if item.has_any_tag(&[Tag::Warm, Tag::Insulated, Tag::Thick]) {
                points += 3.0;
            }
            if item.has_any_tag(&[Tag::Light, Tag::Thin, Tag::Sleeveless]) {
                points -= 2.0;
            }
        }
    }

    if forecast.is_hot() {
        for item in &combo.items {
            if item.has_tag(Tag::Breathable) {
                points += 3.0;
            }
        }
    }

    if forecast.is_rainy() {
        if combo.items.iter().any(|i| i.has_tag(Tag::Waterproof)) {
            points += 5.0;
        }
        for item in &combo.items {
            if item.has_any_tag(&[Tag::Suede, Tag::Delicate]) {
                points -= 3.0;
            }
        }
    }

    points
}

/// Style coherence over the distinct style classifications in the outfit
fn style_coherence(combo: &OutfitCombination) -> f64 {
    const COMPATIBLE_PAIRS: [(StyleClass, StyleClass); 4] = [
        (StyleClass::Business, StyleClass::BusinessCasual),
        (StyleClass::Casual, StyleClass::Bohemian),
        (StyleClass::Minimalist, StyleClass::Modern),
        (StyleClass::Classic, StyleClass::Business),
    ];

    let mut distinct: Vec<StyleClass> = Vec::new();
    for item in &combo.items {
        if !distinct.contains(&item.style) {
            distinct.push(item.style);
        }
    }

    match distinct.len() {
        0 | 1 => 15.0,
        2 => {
            let compatible = COMPATIBLE_PAIRS.iter().any(|(a, b)| {
                (distinct[0] == *a && distinct[1] == *b)
                    || (distinct[0] == *b && distinct[1] == *a)
            });
            if compatible {
                10.0
            } else {
                5.0
            }
        }
        _ => 0.0,
    }
}

fn comfort_points(combo: &OutfitCombination, event: &EventContext) -> f64 {
    let multiplier = if event.duration_hours() > 4.0 { 3.0 } else { 2.0 };
    mean_level(combo, |i| i.comfort) * multiplier
}

fn mean_level(combo: &OutfitCombination, level: impl Fn(&WardrobeItem) -> Level) -> f64 {
    if combo.items.is_empty() {
        return 0.0;
    }
    let sum: f64 = combo.items.iter().map(|i| f64::from(level(i).value())).sum();
    sum / combo.items.len() as f64
}

fn build_reasoning(total: f64, event: &EventContext) -> Vec<String> {
    let banner = if total >= 80.0 {
        "Excellent match for this event"
    } else if total >= 60.0 {
        "Good fit for the occasion"
    } else {
        "Acceptable option with room for improvement"
    };

    let event_line = match event.event_type {
        EventType::WorkMeeting => "Professional look that holds up through a full meeting schedule.",
        EventType::VideoCall => "Solid, muted upper body reads clearly on camera.",
        EventType::JobInterview => "Conservative business styling makes a strong first impression.",
        EventType::DateNight => "Elevated pieces set the right tone for the evening.",
        EventType::SpecialEvent => "Polished enough to stand out at the occasion.",
        EventType::Fitness => "Built for movement and comfort.",
        EventType::Travel => "Comfortable layers that travel well.",
        EventType::Casual => "Relaxed and easy to wear.",
    };

    vec![banner.to_string(), event_line.to_string()]
}

/// Human-readable weather considerations for the final recommendation. Empty
/// when no forecast was available.
pub fn weather_notes(weather: Option<&WeatherForecast>) -> Vec<String> {
    let Some(forecast) = weather else {
        return Vec::new();
    };

    let mut notes = vec![format!(
        "Forecast: {:.0}°C, {:?}, {}% chance of precipitation",
        forecast.temperature_c, forecast.condition, forecast.precipitation_chance
    )];

    if forecast.is_cold() {
        notes.push("Cold forecast, warm layers favored".to_string());
    }
    if forecast.is_hot() {
        notes.push("Warm forecast, breathable fabrics favored".to_string());
    }
    if forecast.is_rainy() {
        notes.push("High chance of rain, waterproof pieces favored".to_string());
    }
    if forecast.is_windy() {
        notes.push("Strong wind expected, loose garments avoided".to_string());
    }

    notes
}
