use std::collections::HashMap;

use serde::{Deserialize, Serialize};

pub type RecipeId = String;
pub type IngredientId = String;
pub type CharacteristicId = String;

/// Raw shape of the `idealFor` field. The shipped dataset is inconsistent:
/// some recipes carry a list of occasions, others a single comma-separated
/// string. Normalized to a plain list at load time.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IdealFor {
    List(Vec<String>),
    Joined(String),
}

impl IdealFor {
    pub fn into_occasions(self) -> Vec<String> {
        match self {
            IdealFor::List(occasions) => occasions,
            IdealFor::Joined(joined) => joined
                .split(',')
                .map(|occasion| occasion.trim().to_string())
                .filter(|occasion| !occasion.is_empty())
                .collect(),
        }
    }
}

fn default_servings() -> u32 {
    1
}

/// Recipe row as stored in the dataset, before normalization.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeRow {
    pub id: RecipeId,
    pub slug: String,
    pub name: String,
    pub description: String,
    pub base_ingredient: IngredientId,
    #[serde(default)]
    pub characteristics: Vec<CharacteristicId>,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub supplies: Vec<String>,
    #[serde(default)]
    pub preparation: Vec<String>,
    #[serde(default = "default_servings")]
    pub servings: u32,
    #[serde(default)]
    pub ideal_for: Option<IdealFor>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: RecipeId,
    pub slug: String,
    pub name: String,
    pub description: String,
    pub base_ingredient: IngredientId,
    pub characteristics: Vec<CharacteristicId>,
    pub ingredients: Vec<String>,
    pub supplies: Vec<String>,
    pub preparation: Vec<String>,
    pub servings: u32,
    pub ideal_for: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub id: IngredientId,
    pub label: String,
    #[serde(default)]
    pub icon: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Characteristic {
    pub id: CharacteristicId,
    pub label: String,
    #[serde(default)]
    pub icon: String,
}

/// The three static tables, loaded once and read-only afterwards.
#[derive(Clone, Debug, Default, Serialize)]
pub struct Catalog {
    pub recipes: Vec<Recipe>,
    pub ingredients: Vec<Ingredient>,
    pub characteristics: Vec<Characteristic>,
}

impl Catalog {
    pub fn recipe_by_id(&self, id: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|recipe| recipe.id == id)
    }

    pub fn recipe_by_slug(&self, slug: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|recipe| recipe.slug == slug)
    }

    pub fn ingredient(&self, id: &str) -> Option<&Ingredient> {
        self.ingredients.iter().find(|ingredient| ingredient.id == id)
    }

    pub fn characteristic(&self, id: &str) -> Option<&Characteristic> {
        self.characteristics
            .iter()
            .find(|characteristic| characteristic.id == id)
    }

    /// Characteristic rows for a recipe. Ids without a matching row are
    /// dropped instead of surfacing an error.
    pub fn resolved_characteristics(&self, recipe: &Recipe) -> Vec<&Characteristic> {
        recipe
            .characteristics
            .iter()
            .filter_map(|id| self.characteristic(id))
            .collect()
    }

    pub fn ingredient_labels(&self) -> HashMap<IngredientId, String> {
        self.ingredients
            .iter()
            .map(|ingredient| (ingredient.id.clone(), ingredient.label.clone()))
            .collect()
    }

    pub fn characteristic_labels(&self) -> HashMap<CharacteristicId, String> {
        self.characteristics
            .iter()
            .map(|characteristic| (characteristic.id.clone(), characteristic.label.clone()))
            .collect()
    }
}
