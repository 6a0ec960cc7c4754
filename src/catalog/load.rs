use std::collections::HashSet;

use crate::constants::MIN_SERVINGS;

use super::error::CatalogError;
use super::schema::{Catalog, Characteristic, IdealFor, Ingredient, Recipe, RecipeRow};

/// Parses the three dataset tables and normalizes them into a [`Catalog`].
///
/// Parsing a table is the only hard failure; every row-level inconsistency
/// (duplicate ids, zero servings, dangling references) is logged and repaired
/// so a single bad row cannot take the whole catalog down.
pub fn load_catalog(
    recipes_json: &str,
    ingredients_json: &str,
    characteristics_json: &str,
) -> Result<Catalog, CatalogError> {
    let rows: Vec<RecipeRow> =
        serde_json::from_str(recipes_json).map_err(|e| CatalogError::parse("recipes", e))?;
    let ingredients: Vec<Ingredient> =
        serde_json::from_str(ingredients_json).map_err(|e| CatalogError::parse("ingredients", e))?;
    let characteristics: Vec<Characteristic> = serde_json::from_str(characteristics_json)
        .map_err(|e| CatalogError::parse("characteristics", e))?;

    Ok(build_catalog(rows, ingredients, characteristics))
}

/// Normalizes already-parsed rows into a [`Catalog`].
pub fn build_catalog(
    rows: Vec<RecipeRow>,
    ingredients: Vec<Ingredient>,
    characteristics: Vec<Characteristic>,
) -> Catalog {
    let ingredients = dedupe_by_id(ingredients, "ingredient", |ingredient| &ingredient.id);
    let characteristics =
        dedupe_by_id(characteristics, "characteristic", |characteristic| {
            &characteristic.id
        });

    let ingredient_ids: HashSet<&str> = ingredients
        .iter()
        .map(|ingredient| ingredient.id.as_str())
        .collect();
    let characteristic_ids: HashSet<&str> = characteristics
        .iter()
        .map(|characteristic| characteristic.id.as_str())
        .collect();

    let mut seen_ids: HashSet<String> = HashSet::new();
    let mut seen_slugs: HashSet<String> = HashSet::new();
    let mut recipes: Vec<Recipe> = Vec::with_capacity(rows.len());

    for row in rows {
        if !seen_ids.insert(row.id.clone()) {
            log::warn!("dropping recipe with duplicate id {:?}", row.id);
            continue;
        }
        if !seen_slugs.insert(row.slug.clone()) {
            log::warn!("dropping recipe with duplicate slug {:?}", row.slug);
            continue;
        }

        if !ingredient_ids.contains(row.base_ingredient.as_str()) {
            log::warn!(
                "recipe {:?} references unknown base ingredient {:?}",
                row.id,
                row.base_ingredient
            );
        }
        for characteristic in &row.characteristics {
            if !characteristic_ids.contains(characteristic.as_str()) {
                log::warn!(
                    "recipe {:?} references unknown characteristic {:?}",
                    row.id,
                    characteristic
                );
            }
        }

        let servings = if row.servings < MIN_SERVINGS {
            log::warn!(
                "recipe {:?} has invalid servings {}, using {}",
                row.id,
                row.servings,
                MIN_SERVINGS
            );
            MIN_SERVINGS
        } else {
            row.servings
        };

        recipes.push(Recipe {
            id: row.id,
            slug: row.slug,
            name: row.name,
            description: row.description,
            base_ingredient: row.base_ingredient,
            characteristics: row.characteristics,
            ingredients: row.ingredients,
            supplies: row.supplies,
            preparation: row.preparation,
            servings,
            ideal_for: row
                .ideal_for
                .map(IdealFor::into_occasions)
                .unwrap_or_default(),
        });
    }

    Catalog {
        recipes,
        ingredients,
        characteristics,
    }
}

fn dedupe_by_id<T, F>(rows: Vec<T>, table: &str, id: F) -> Vec<T>
where
    F: Fn(&T) -> &String,
{
    let mut seen: HashSet<String> = HashSet::new();
    let mut unique = Vec::with_capacity(rows.len());

    for row in rows {
        if seen.insert(id(&row).clone()) {
            unique.push(row);
        } else {
            log::warn!("dropping {table} with duplicate id {:?}", id(&row));
        }
    }

    unique
}
