use super::schema::{Characteristic, Ingredient, Recipe};

/// Recipe count per base ingredient, for the browse cards. Ingredients no
/// recipe uses are dropped.
pub fn ingredient_usage<'a>(
    recipes: &[Recipe],
    ingredients: &'a [Ingredient],
) -> Vec<(&'a Ingredient, usize)> {
    ingredients
        .iter()
        .filter_map(|ingredient| {
            let count = recipes
                .iter()
                .filter(|recipe| recipe.base_ingredient == ingredient.id)
                .count();
            (count > 0).then_some((ingredient, count))
        })
        .collect()
}

/// Recipe count per characteristic tag, zero-count tags dropped.
pub fn characteristic_usage<'a>(
    recipes: &[Recipe],
    characteristics: &'a [Characteristic],
) -> Vec<(&'a Characteristic, usize)> {
    characteristics
        .iter()
        .filter_map(|characteristic| {
            let count = recipes
                .iter()
                .filter(|recipe| recipe.characteristics.contains(&characteristic.id))
                .count();
            (count > 0).then_some((characteristic, count))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipe(id: &str, base_ingredient: &str, characteristics: &[&str]) -> Recipe {
        Recipe {
            id: id.to_string(),
            slug: id.to_string(),
            name: id.to_string(),
            description: String::new(),
            base_ingredient: base_ingredient.to_string(),
            characteristics: characteristics.iter().map(|c| c.to_string()).collect(),
            ingredients: vec![],
            supplies: vec![],
            preparation: vec![],
            servings: 1,
            ideal_for: vec![],
        }
    }

    fn ingredient(id: &str) -> Ingredient {
        Ingredient {
            id: id.to_string(),
            label: id.to_string(),
            icon: String::new(),
        }
    }

    fn characteristic(id: &str) -> Characteristic {
        Characteristic {
            id: id.to_string(),
            label: id.to_string(),
            icon: String::new(),
        }
    }

    #[test]
    fn unused_ingredients_are_dropped_from_the_counts() {
        let recipes = vec![
            recipe("mojito", "ron", &["citrico"]),
            recipe("daiquiri", "ron", &["dulce", "citrico"]),
            recipe("gimlet", "gin", &["citrico"]),
        ];
        let ingredients = vec![ingredient("ron"), ingredient("gin"), ingredient("tequila")];

        let usage = ingredient_usage(&recipes, &ingredients);

        assert_eq!(usage.len(), 2);
        assert_eq!(usage[0].0.id, "ron");
        assert_eq!(usage[0].1, 2);
        assert_eq!(usage[1].0.id, "gin");
        assert_eq!(usage[1].1, 1);
    }

    #[test]
    fn characteristic_counts_cover_every_tagged_recipe() {
        let recipes = vec![
            recipe("mojito", "ron", &["citrico"]),
            recipe("daiquiri", "ron", &["dulce", "citrico"]),
        ];
        let characteristics = vec![
            characteristic("citrico"),
            characteristic("dulce"),
            characteristic("amargo"),
        ];

        let usage = characteristic_usage(&recipes, &characteristics);

        assert_eq!(usage.len(), 2);
        assert_eq!(usage[0].0.id, "citrico");
        assert_eq!(usage[0].1, 2);
        assert_eq!(usage[1].0.id, "dulce");
        assert_eq!(usage[1].1, 1);
    }
}
