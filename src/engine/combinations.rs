use crate::models::{
    Category, FormalityLevel, OutfitCombination, OutfitRequirements, StyleClass, Tag, Warmth,
    WardrobeItem,
};

/// Default upper bound on generated combinations per request.
///
/// The cross-product itself is unbounded in the wardrobe size; the cap is a
/// documented extension that truncates the generation order without changing
/// which combinations are eligible.
pub const DEFAULT_MAX_COMBINATIONS: usize = 5000;

/// Produces candidate outfit combinations from the filtered wardrobe.
///
/// Base combinations come from two cross-products (top x bottom x shoes and
/// dress x shoes). Each base is optionally extended with the single
/// best-matching outerwear piece and up to two accessories.
pub fn generate(
    items: &[WardrobeItem],
    req: &OutfitRequirements,
    max_combinations: usize,
) -> Vec<OutfitCombination> {
    let tops = by_category(items, Category::Top);
    let bottoms = by_category(items, Category::Bottom);
    let dresses = by_category(items, Category::Dress);
    let shoes = by_category(items, Category::Shoes);

    let outerwear = select_outerwear(items, req);
    let accessories = select_accessories(items, req);

    let mut combinations = Vec::new();

    for top in &tops {
        for bottom in &bottoms {
            for pair_of_shoes in &shoes {
                push_combination(
                    &mut combinations,
                    vec![(*top).clone(), (*bottom).clone(), (*pair_of_shoes).clone()],
                    outerwear,
                    &accessories,
                );
            }
        }
    }

    for dress in &dresses {
        for pair_of_shoes in &shoes {
            push_combination(
                &mut combinations,
                vec![(*dress).clone(), (*pair_of_shoes).clone()],
                outerwear,
                &accessories,
            );
        }
    }

    let combinations = enforce_must_haves(combinations, items, req);

    let mut combinations = combinations;
    if combinations.len() > max_combinations {
        tracing::warn!(
            generated = combinations.len(),
            cap = max_combinations,
            "Combination cap reached, truncating"
        );
        combinations.truncate(max_combinations);
    }

    tracing::debug!(count = combinations.len(), "Combinations generated");
    combinations
}

fn push_combination(
    combinations: &mut Vec<OutfitCombination>,
    mut base: Vec<WardrobeItem>,
    outerwear: Option<&WardrobeItem>,
    accessories: &[&WardrobeItem],
) {
    if let Some(layer) = outerwear {
        base.push(layer.clone());
    }
    for accessory in accessories {
        base.push((*accessory).clone());
    }

    let combination = OutfitCombination::new(base);
    if combination.is_valid() {
        combinations.push(combination);
    }
}

fn by_category<'a>(items: &'a [WardrobeItem], category: Category) -> Vec<&'a WardrobeItem> {
    items.iter().filter(|i| i.category == category).collect()
}

/// Picks the single outerwear piece best matching the requirements, or none
/// when nothing qualifies
fn select_outerwear<'a>(
    items: &'a [WardrobeItem],
    req: &OutfitRequirements,
) -> Option<&'a WardrobeItem> {
    items
        .iter()
        .filter(|i| i.category == Category::Outerwear)
        .map(|i| (i, outerwear_affinity(i, req)))
        .filter(|(_, affinity)| *affinity > 0)
        .max_by_key(|(_, affinity)| *affinity)
        .map(|(item, _)| item)
}

fn outerwear_affinity(item: &WardrobeItem, req: &OutfitRequirements) -> i32 {
    let mut affinity = 0;

    for keyword in must_have_keywords(req) {
        if item.matches_keyword(keyword) {
            affinity += 3;
        }
    }

    if let Some(wr) = &req.weather {
        if wr.warmth == Warmth::High && item.has_any_tag(&[Tag::Warm, Tag::Insulated, Tag::Thick]) {
            affinity += 2;
        }
        if wr.waterproof && item.has_tag(Tag::Waterproof) {
            affinity += 2;
        }
        if wr.wind_resistant && item.has_tag(Tag::WindResistant) {
            affinity += 1;
        }
    }

    if req.formality >= FormalityLevel::Business && item.style == StyleClass::Business {
        affinity += 2;
    }

    if req.preferred_colors.contains(&item.color_key()) {
        affinity += 1;
    }

    affinity
}

/// Up to two accessories, favoring preferred colors and statement pieces for
/// special occasions
fn select_accessories<'a>(
    items: &'a [WardrobeItem],
    req: &OutfitRequirements,
) -> Vec<&'a WardrobeItem> {
    let mut candidates: Vec<(&WardrobeItem, i32)> = items
        .iter()
        .filter(|i| i.category == Category::Accessory)
        .map(|i| (i, accessory_affinity(i, req)))
        .collect();

    candidates.sort_by(|a, b| b.1.cmp(&a.1));
    candidates.into_iter().take(2).map(|(item, _)| item).collect()
}

fn accessory_affinity(item: &WardrobeItem, req: &OutfitRequirements) -> i32 {
    let mut affinity = i32::from(item.versatility.value());
    if req.preferred_colors.contains(&item.color_key()) {
        affinity += 2;
    }
    if req.special_occasion && item.has_tag(Tag::Statement) {
        affinity += 2;
    }
    affinity
}

fn must_have_keywords(req: &OutfitRequirements) -> impl Iterator<Item = &String> {
    req.must_have_items.iter().chain(
        req.weather
            .iter()
            .flat_map(|wr| wr.required_items.iter()),
    )
}

/// Keeps only combinations containing a match for every must-have keyword that
/// the surviving pool can actually satisfy. If that would leave nothing, the
/// unenforced list is kept; must-haves never starve the pipeline.
fn enforce_must_haves(
    combinations: Vec<OutfitCombination>,
    pool: &[WardrobeItem],
    req: &OutfitRequirements,
) -> Vec<OutfitCombination> {
    let satisfiable: Vec<&String> = must_have_keywords(req)
        .filter(|kw| pool.iter().any(|item| item.matches_keyword(kw)))
        .collect();

    if satisfiable.is_empty() {
        return combinations;
    }

    let enforced: Vec<OutfitCombination> = combinations
        .iter()
        .filter(|combo| {
            satisfiable
                .iter()
                .all(|kw| combo.items.iter().any(|item| item.matches_keyword(kw)))
        })
        .cloned()
        .collect();

    if enforced.is_empty() {
        tracing::debug!("No combination satisfies every must-have, keeping unenforced set");
        combinations
    } else {
        enforced
    }
}
