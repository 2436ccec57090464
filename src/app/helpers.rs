//! Async helper functions for content loading and timers

use std::path::PathBuf;
use std::time::Duration;

use crate::features::content::{self, RecipeDeck};

/// Recipe deck with its image files resolved
#[derive(Debug, Clone)]
pub struct LoadedDeck {
    pub deck: RecipeDeck,
    /// One entry per recipe, None when the image file is missing
    pub images: Vec<Option<PathBuf>>,
}

/// Load the recipe deck off the UI thread
pub async fn load_deck(
    recipes_path: Option<PathBuf>,
    assets_dir: PathBuf,
) -> anyhow::Result<LoadedDeck> {
    let loaded = tokio::task::spawn_blocking(move || -> anyhow::Result<LoadedDeck> {
        let deck = RecipeDeck::load(recipes_path.as_deref())?;

        let images: Vec<Option<PathBuf>> = deck
            .recipes()
            .iter()
            .map(|recipe| {
                let path = content::image_path(&assets_dir, &recipe.image_name);
                if path.is_none() {
                    tracing::debug!(
                        "No image for '{}' in {}",
                        recipe.image_name,
                        assets_dir.display()
                    );
                }
                path
            })
            .collect();

        Ok(LoadedDeck { deck, images })
    })
    .await??;

    tracing::info!("Recipe deck ready with {} recipes", loaded.deck.len());
    Ok(loaded)
}

/// Wait out the settle delay after a recipe change
pub async fn settle_after(delay: Duration) {
    tokio::time::sleep(delay).await;
}
