use crate::models::{
    Category, DressCode, Occasion, OutfitRequirements, StyleClass, Tag, Warmth, WardrobeItem,
};

/// Narrows the wardrobe to items compatible with the requirements.
///
/// Must-have constraints are advisory here; they only remove individual
/// conflicting items. Enforcement of "at least one matching item per outfit"
/// happens in the combination generator. An empty result is not an error,
/// downstream stages fall back.
pub fn filter_items(items: &[WardrobeItem], req: &OutfitRequirements) -> Vec<WardrobeItem> {
    let survivors: Vec<WardrobeItem> = items
        .iter()
        .filter(|item| survives(item, req))
        .cloned()
        .collect();

    tracing::debug!(
        candidates = items.len(),
        survivors = survivors.len(),
        dress_code = ?req.dress_code,
        "Wardrobe filtered"
    );

    survivors
}

fn survives(item: &WardrobeItem, req: &OutfitRequirements) -> bool {
    if !dress_code_compatible(item, req.dress_code) {
        return false;
    }

    if req.avoid_items.iter().any(|kw| item.matches_keyword(kw)) {
        return false;
    }

    if req.avoid_colors.iter().any(|c| item.color_key() == *c) {
        return false;
    }

    if req.avoid_tags.iter().any(|tag| item.has_tag(*tag)) {
        return false;
    }

    if req.video_call_optimized && !camera_friendly(item) {
        return false;
    }

    if let Some(wr) = &req.weather {
        if wr.avoid_items.iter().any(|kw| item.matches_keyword(kw)) {
            return false;
        }
        // Warmth only disqualifies the outer layer; a thin shirt under a warm
        // coat is fine.
        if wr.warmth == Warmth::High
            && item.category == Category::Outerwear
            && !item.has_any_tag(&[Tag::Warm, Tag::Insulated, Tag::Thick])
        {
            return false;
        }
        if wr.waterproof && item.has_any_tag(&[Tag::Suede, Tag::Delicate]) {
            return false;
        }
    }

    true
}

/// Busy, bright or patterned pieces shimmer on camera; upper-body items must
/// additionally be solid (or at least not patterned)
fn camera_friendly(item: &WardrobeItem) -> bool {
    if item.has_any_tag(&[Tag::Busy, Tag::Bright, Tag::Patterned]) {
        return false;
    }
    if item.category.is_upper_body() {
        return item.has_tag(Tag::Solid) || !item.has_tag(Tag::Patterned);
    }
    true
}

/// Dress-code to item-attribute compatibility rules
fn dress_code_compatible(item: &WardrobeItem, dress_code: DressCode) -> bool {
    match dress_code {
        DressCode::Formal => {
            item.occasions.contains(&Occasion::Formal)
                || item.occasions.contains(&Occasion::Work)
                || matches!(item.style, StyleClass::Business | StyleClass::Classic)
        }
        DressCode::Business => {
            item.occasions.contains(&Occasion::Work) || item.style == StyleClass::Business
        }
        DressCode::BusinessCasual | DressCode::VideoCallOptimized => {
            item.style != StyleClass::Sporty || item.occasions.contains(&Occasion::Work)
        }
        DressCode::Cocktail => {
            item.occasions.contains(&Occasion::Party)
                || item.occasions.contains(&Occasion::Formal)
                || item.occasions.contains(&Occasion::Date)
                || matches!(
                    item.style,
                    StyleClass::Romantic | StyleClass::Classic | StyleClass::Modern
                )
        }
        DressCode::Casual | DressCode::Comfortable => {
            // Everything goes except pieces reserved for formal occasions
            !(item.occasions.contains(&Occasion::Formal)
                && !item.occasions.contains(&Occasion::Casual))
        }
        DressCode::Activewear => {
            item.style == StyleClass::Sporty
                || item.has_tag(Tag::Athletic)
                || item.occasions.contains(&Occasion::Sport)
        }
    }
}
