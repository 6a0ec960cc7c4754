pub const FAVORITES_STORAGE_KEY: &str = "brindisi-favorites";
pub const THEME_STORAGE_KEY: &str = "brindisi-theme";
pub const CAROUSEL_SEEN_STORAGE_KEY: &str = "brindisi-carousel-seen";

pub const MIN_SERVINGS: u32 = 1;
pub const MAX_SERVINGS: u32 = 50;

pub const SEARCH_RESULT_LIMIT: usize = 6;

pub const RECIPE_ROUTE_PREFIX: &str = "#/coctel";

pub const SHARE_TARGETS: &[(&str, &str)] = &[
    ("whatsapp", "WhatsApp"),
    ("telegram", "Telegram"),
    ("twitter", "Twitter"),
    ("facebook", "Facebook"),
];
