//! Recipe content
//!
//! The deck ships as JSON bundled into the binary. A user file with the same
//! shape can replace it through `content.recipes_path` in the settings.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

const BUNDLED_RECIPES: &str = include_str!("../../assets/recipes.json");

/// A single recipe card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub title: String,
    pub description: String,
    /// Image asset name, resolved against the assets directory
    pub image_name: String,
    /// Attribute key -> display value. Iterates in key order.
    pub summary: BTreeMap<String, String>,
}

/// On-disk shape of a recipes file
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RecipesFile {
    #[serde(default)]
    summary_icons: BTreeMap<String, String>,
    recipes: Vec<Recipe>,
}

/// Ordered, non-empty list of recipes
#[derive(Debug, Clone)]
pub struct RecipeDeck {
    recipes: Vec<Recipe>,
    summary_icons: BTreeMap<String, String>,
}

impl RecipeDeck {
    /// Build a deck, rejecting empty decks and blank fields
    pub fn new(
        recipes: Vec<Recipe>,
        summary_icons: BTreeMap<String, String>,
    ) -> Result<Self, ContentError> {
        if recipes.is_empty() {
            return Err(ContentError::EmptyDeck);
        }

        for (index, recipe) in recipes.iter().enumerate() {
            let blank = [
                ("title", recipe.title.trim().is_empty()),
                ("description", recipe.description.trim().is_empty()),
                ("image_name", recipe.image_name.trim().is_empty()),
                ("summary", recipe.summary.is_empty()),
            ]
            .into_iter()
            .find(|(_, is_blank)| *is_blank);

            if let Some((field, _)) = blank {
                return Err(ContentError::InvalidRecipe { index, field });
            }
        }

        Ok(Self {
            recipes,
            summary_icons,
        })
    }

    /// The deck compiled into the binary
    pub fn bundled() -> Result<Self, ContentError> {
        Self::from_json(BUNDLED_RECIPES)
    }

    /// Parse a deck from JSON text
    pub fn from_json(json: &str) -> Result<Self, ContentError> {
        let file: RecipesFile =
            serde_json::from_str(json).map_err(|e| ContentError::Parse(e.to_string()))?;
        Self::new(file.recipes, file.summary_icons)
    }

    /// Load a deck from a JSON file
    pub fn load_from_file(path: &Path) -> Result<Self, ContentError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| ContentError::Io(e.to_string()))?;
        Self::from_json(&content)
    }

    /// Load the user deck if configured, falling back to the bundled one
    pub fn load(recipes_path: Option<&Path>) -> Result<Self, ContentError> {
        if let Some(path) = recipes_path {
            match Self::load_from_file(path) {
                Ok(deck) => {
                    tracing::info!("Loaded {} recipes from {:?}", deck.len(), path);
                    return Ok(deck);
                }
                Err(e) => {
                    tracing::warn!("Falling back to bundled recipes, {:?}: {}", path, e);
                }
            }
        }
        Self::bundled()
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn get(&self, index: usize) -> Option<&Recipe> {
        self.recipes.get(index)
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    /// Icon id for a summary key
    pub fn summary_icon(&self, key: &str) -> Option<&str> {
        self.summary_icons.get(key).map(String::as_str)
    }
}

/// Resolve an image asset name to its file, if present
pub fn image_path(assets_dir: &Path, image_name: &str) -> Option<PathBuf> {
    let path = assets_dir.join("images").join(format!("{}.png", image_name));
    path.exists().then_some(path)
}

/// Errors that can occur while loading recipe content
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    Io(String),
    Parse(String),
    EmptyDeck,
    InvalidRecipe { index: usize, field: &'static str },
}

impl std::fmt::Display for ContentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContentError::Io(e) => write!(f, "IO error: {}", e),
            ContentError::Parse(e) => write!(f, "Parse error: {}", e),
            ContentError::EmptyDeck => write!(f, "Recipe deck is empty"),
            ContentError::InvalidRecipe { index, field } => {
                write!(f, "Recipe {} has an empty {}", index, field)
            }
        }
    }
}

impl std::error::Error for ContentError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipe(title: &str) -> Recipe {
        Recipe {
            title: title.to_string(),
            description: "desc".to_string(),
            image_name: "img".to_string(),
            summary: BTreeMap::from([("time".to_string(), "5 min".to_string())]),
        }
    }

    #[test]
    fn test_bundled_deck_is_valid() {
        let deck = RecipeDeck::bundled().unwrap();
        assert!(deck.len() >= 3);
        assert_eq!(deck.summary_icon("time"), Some("clock"));
    }

    #[test]
    fn test_empty_deck_rejected() {
        let err = RecipeDeck::new(Vec::new(), BTreeMap::new()).unwrap_err();
        assert_eq!(err, ContentError::EmptyDeck);
    }

    #[test]
    fn test_blank_field_rejected() {
        let mut broken = recipe("Soup");
        broken.image_name = "  ".to_string();
        let err = RecipeDeck::new(vec![recipe("Toast"), broken], BTreeMap::new()).unwrap_err();
        assert_eq!(
            err,
            ContentError::InvalidRecipe {
                index: 1,
                field: "image_name"
            }
        );
    }

    #[test]
    fn test_summary_iterates_sorted_by_key() {
        let json = r#"{
            "recipes": [{
                "title": "Toast",
                "description": "Bread",
                "image_name": "toast",
                "summary": { "time": "5 min", "calories": "100 kcal", "servings": "1" }
            }]
        }"#;
        let deck = RecipeDeck::from_json(json).unwrap();
        let keys: Vec<_> = deck.get(0).unwrap().summary.keys().cloned().collect();
        assert_eq!(keys, vec!["calories", "servings", "time"]);
        assert_eq!(deck.summary_icon("time"), None);
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        assert!(matches!(
            RecipeDeck::from_json("{ not json"),
            Err(ContentError::Parse(_))
        ));
    }

    #[test]
    fn test_missing_override_falls_back_to_bundled() {
        let missing = std::env::temp_dir().join("cooking-quest-no-such-recipes.json");
        let deck = RecipeDeck::load(Some(&missing)).unwrap();
        assert_eq!(deck.len(), RecipeDeck::bundled().unwrap().len());
    }

    #[test]
    fn test_image_path_missing_file() {
        let dir = std::env::temp_dir().join("cooking-quest-no-assets");
        assert_eq!(image_path(&dir, "toast"), None);
    }
}
