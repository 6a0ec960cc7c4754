use url::form_urlencoded::Serializer;

use crate::constants::RECIPE_ROUTE_PREFIX;
use crate::engine::capitalize_first;
use crate::schema::{Catalog, Recipe};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShareTarget {
    WhatsApp,
    Telegram,
    Twitter,
    Facebook,
}

impl ShareTarget {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::WhatsApp => "whatsapp",
            Self::Telegram => "telegram",
            Self::Twitter => "twitter",
            Self::Facebook => "facebook",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "whatsapp" => Some(Self::WhatsApp),
            "telegram" => Some(Self::Telegram),
            "twitter" => Some(Self::Twitter),
            "facebook" => Some(Self::Facebook),
            _ => None,
        }
    }
}

/// Deep link to a recipe detail page: `{origin}/#/coctel/{slug}`.
pub fn share_link(origin: &str, recipe: &Recipe) -> String {
    format!(
        "{}/{}/{}",
        origin.trim_end_matches('/'),
        RECIPE_ROUTE_PREFIX,
        recipe.slug
    )
}

/// Short caption for share targets: name and description.
pub fn share_text(recipe: &Recipe) -> String {
    format!("{} - {}", recipe.name, recipe.description)
}

/// Share-intent URL for a third-party target.
pub fn share_url(target: ShareTarget, link: &str, text: &str) -> String {
    match target {
        ShareTarget::WhatsApp => format!(
            "https://wa.me/?{}",
            encoded_query(&[("text", &format!("{text} {link}"))])
        ),
        ShareTarget::Telegram => format!(
            "https://t.me/share/url?{}",
            encoded_query(&[("url", link), ("text", text)])
        ),
        ShareTarget::Twitter => format!(
            "https://twitter.com/intent/tweet?{}",
            encoded_query(&[("text", text), ("url", link)])
        ),
        ShareTarget::Facebook => format!(
            "https://www.facebook.com/sharer/sharer.php?{}",
            encoded_query(&[("u", link)])
        ),
    }
}

fn encoded_query(pairs: &[(&str, &str)]) -> String {
    let mut query = Serializer::new(String::new());
    for (key, value) in pairs {
        query.append_pair(key, value);
    }
    query.finish()
}

/// Plain-text rendition of a full recipe, the "copy recipe" clipboard payload.
/// Unresolved lookup ids fall back to the raw id so the export never fails.
pub fn recipe_text(recipe: &Recipe, catalog: &Catalog) -> String {
    let base = catalog.ingredient(&recipe.base_ingredient);
    let base_icon = base.map(|i| i.icon.as_str()).unwrap_or("🥃");
    let base_label = base
        .map(|i| i.label.as_str())
        .unwrap_or(recipe.base_ingredient.as_str());

    let characteristics = recipe
        .characteristics
        .iter()
        .map(|id| {
            catalog
                .characteristic(id)
                .map(|c| c.label.clone())
                .unwrap_or_else(|| id.clone())
        })
        .collect::<Vec<_>>()
        .join(", ");

    let ingredients = recipe
        .ingredients
        .iter()
        .enumerate()
        .map(|(n, line)| format!("{}. {}", n + 1, capitalize_first(line)))
        .collect::<Vec<_>>()
        .join("\n");

    let preparation = recipe
        .preparation
        .iter()
        .enumerate()
        .map(|(n, step)| format!("{}. {}", n + 1, step))
        .collect::<Vec<_>>()
        .join("\n");

    let persons = if recipe.servings > 1 {
        "personas"
    } else {
        "persona"
    };

    format!(
        "🍸 {}\n\n\"{}\"\n\n📋 INFORMACIÓN\n• Ingrediente base: {} {}\n• Características: {}\n• Porciones: {} {}\n\n📝 INGREDIENTES\n{}\n\n👨‍🍳 PREPARACIÓN\n{}\n\n🍹 Receta desde Brindisi",
        recipe.name,
        recipe.description,
        base_icon,
        base_label,
        characteristics,
        recipe.servings,
        persons,
        ingredients,
        preparation,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{Characteristic, Ingredient};

    fn mojito() -> Recipe {
        Recipe {
            id: "mojito".to_string(),
            slug: "mojito".to_string(),
            name: "Mojito".to_string(),
            description: "Refrescante clásico cubano".to_string(),
            base_ingredient: "ron".to_string(),
            characteristics: vec!["citrico".to_string(), "refrescante".to_string()],
            ingredients: vec!["2 oz ron blanco".to_string(), "hielo".to_string()],
            supplies: vec![],
            preparation: vec!["machacar la hierbabuena".to_string(), "servir".to_string()],
            servings: 1,
            ideal_for: vec![],
        }
    }

    fn catalog() -> Catalog {
        Catalog {
            recipes: vec![mojito()],
            ingredients: vec![Ingredient {
                id: "ron".to_string(),
                label: "Ron".to_string(),
                icon: "🥃".to_string(),
            }],
            characteristics: vec![Characteristic {
                id: "citrico".to_string(),
                label: "Cítrico".to_string(),
                icon: "🍋".to_string(),
            }],
        }
    }

    #[test]
    fn share_link_joins_origin_and_slug() {
        assert_eq!(
            share_link("https://brindisi.app", &mojito()),
            "https://brindisi.app/#/coctel/mojito"
        );
        // A trailing slash on the origin does not double up.
        assert_eq!(
            share_link("https://brindisi.app/", &mojito()),
            "https://brindisi.app/#/coctel/mojito"
        );
    }

    #[test]
    fn share_urls_encode_their_query() {
        let url = share_url(
            ShareTarget::Telegram,
            "https://brindisi.app/#/coctel/mojito",
            "Mojito - Refrescante clásico cubano",
        );

        assert!(url.starts_with("https://t.me/share/url?url="));
        assert!(!url.contains(' '));
        assert!(url.contains("Refrescante"));
    }

    #[test]
    fn facebook_share_only_carries_the_link() {
        let url = share_url(ShareTarget::Facebook, "https://brindisi.app/#/coctel/mojito", "texto");
        assert!(url.starts_with("https://www.facebook.com/sharer/sharer.php?u="));
        assert!(!url.contains("texto"));
    }

    #[test]
    fn recipe_text_numbers_and_capitalizes_ingredients() {
        let text = recipe_text(&mojito(), &catalog());

        assert!(text.contains("🍸 Mojito"));
        assert!(text.contains("1. 2 oz ron blanco"));
        assert!(text.contains("2. Hielo"));
        assert!(text.contains("Ingrediente base: 🥃 Ron"));
        assert!(text.contains("1 persona\n"));
    }

    #[test]
    fn recipe_text_falls_back_to_raw_ids_for_unknown_lookups() {
        let text = recipe_text(&mojito(), &catalog());
        // "refrescante" has no characteristic row; the id itself is printed.
        assert!(text.contains("Cítrico, refrescante"));
    }

    #[test]
    fn share_target_ids_round_trip() {
        for (id, _) in crate::constants::SHARE_TARGETS.iter().copied() {
            let target = ShareTarget::from_id(id).unwrap();
            assert_eq!(target.as_str(), id);
        }
        assert_eq!(ShareTarget::from_id("myspace"), None);
    }
}
