use std::collections::HashMap;

use crate::constants::{MAX_SERVINGS, MIN_SERVINGS};

use super::schema::{CharacteristicId, IngredientId, Recipe};

/// Applies the browse filters: base ingredient membership, characteristic
/// overlap and a name/description substring match, AND-combined. An empty
/// selection or query means "no constraint", so calling this with everything
/// empty returns the full table in order.
pub fn filter_recipes<'a>(
    recipes: &'a [Recipe],
    selected_ingredients: &[IngredientId],
    selected_characteristics: &[CharacteristicId],
    query: &str,
) -> Vec<&'a Recipe> {
    let query = query.trim().to_lowercase();

    recipes
        .iter()
        .filter(|recipe| {
            let matches_ingredients = selected_ingredients.is_empty()
                || selected_ingredients.contains(&recipe.base_ingredient);

            let matches_characteristics = selected_characteristics.is_empty()
                || recipe
                    .characteristics
                    .iter()
                    .any(|id| selected_characteristics.contains(id));

            let matches_query = query.is_empty()
                || recipe.name.to_lowercase().contains(&query)
                || recipe.description.to_lowercase().contains(&query);

            matches_ingredients && matches_characteristics && matches_query
        })
        .collect()
}

/// Broad-recall search backing the type-ahead dropdown. Matches the query
/// against name, description, the resolved base ingredient label, the raw
/// ingredient lines and the resolved characteristic labels. Lookup tables are
/// optional; when absent those clauses are skipped.
///
/// Results keep table order and are cut off at `limit` matches when given.
/// There is deliberately no relevance ranking.
pub fn search_recipes<'a>(
    recipes: &'a [Recipe],
    query: &str,
    ingredient_lookup: Option<&HashMap<IngredientId, String>>,
    characteristic_lookup: Option<&HashMap<CharacteristicId, String>>,
    limit: Option<usize>,
) -> Vec<&'a Recipe> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return Vec::new();
    }

    let matches = recipes.iter().filter(|recipe| {
        if recipe.name.to_lowercase().contains(&query)
            || recipe.description.to_lowercase().contains(&query)
        {
            return true;
        }

        if let Some(lookup) = ingredient_lookup {
            if lookup
                .get(&recipe.base_ingredient)
                .is_some_and(|label| label.to_lowercase().contains(&query))
            {
                return true;
            }
        }

        if recipe
            .ingredients
            .iter()
            .any(|line| line.to_lowercase().contains(&query))
        {
            return true;
        }

        if let Some(lookup) = characteristic_lookup {
            if recipe.characteristics.iter().any(|id| {
                lookup
                    .get(id)
                    .is_some_and(|label| label.to_lowercase().contains(&query))
            }) {
                return true;
            }
        }

        false
    });

    match limit {
        Some(limit) => matches.take(limit).collect(),
        None => matches.collect(),
    }
}

/// Rescales the leading quantity of an ingredient line from `base_servings`
/// to `target_servings`. Lines without a leading number (e.g. "hielo") pass
/// through untouched, as does anything that fails to parse.
pub fn scale_ingredient_quantity(text: &str, base_servings: u32, target_servings: u32) -> String {
    let Some((token, rest)) = split_leading_quantity(text) else {
        return text.to_string();
    };

    // The dataset uses both "1.5" and "1,5".
    let Ok(amount) = token.replace(',', ".").parse::<f64>() else {
        return text.to_string();
    };

    let scaled = (amount / f64::from(base_servings)) * f64::from(target_servings);

    format!("{}{}", format_quantity(scaled), rest)
}

/// Splits off a leading numeric token: digits, optionally a single `.` or `,`
/// decimal separator followed by more digits.
fn split_leading_quantity(text: &str) -> Option<(&str, &str)> {
    let bytes = text.as_bytes();

    let mut end = 0;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    if end == 0 {
        return None;
    }

    if end < bytes.len() && (bytes[end] == b'.' || bytes[end] == b',') {
        let mut fraction = end + 1;
        while fraction < bytes.len() && bytes[fraction].is_ascii_digit() {
            fraction += 1;
        }
        if fraction > end + 1 {
            end = fraction;
        }
    }

    Some(text.split_at(end))
}

/// Whole amounts render without decimals, anything else with exactly one
/// decimal place and no trailing zero: 2.0 -> "2", 1.50 -> "1.5".
fn format_quantity(value: f64) -> String {
    let rounded = (value * 10.0).round() / 10.0;
    if rounded == rounded.trunc() {
        format!("{}", rounded as i64)
    } else {
        format!("{rounded:.1}")
    }
}

/// Uppercases the first character only. Stored ingredient and occasion text
/// is lower-case; displays capitalize it on the way out.
pub fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// The serving stepper bound used by callers before scaling.
pub fn clamp_servings(value: u32) -> u32 {
    value.clamp(MIN_SERVINGS, MAX_SERVINGS)
}
