//! Textures and fonts, loaded once at startup
//!
//! Every asset is optional. A missing file is logged and the renderer
//! draws a flat-colour stand-in instead, so the game stays playable from
//! a bare checkout.

use macroquad::prelude::*;
use macroquad::logging::{info, warn};
use crate::game::TrashKind;

const ASSET_ROOT: &str = "assets";

/// Relative paths under `assets/`
mod paths {
    pub const BACKGROUND: &str = "images/background.jpg";
    pub const FIRE: &str = "images/fire.png";
    pub const TITLE_FONT: &str = "fonts/Asimovian-Regular.ttf";
    pub const PLAYER: &str = "images/player.png";
    pub const FRAME: &str = "images/frame.png";
    pub const HAND: &str = "images/hand.png";
}

/// Item sprite for a trash kind
fn item_path(kind: TrashKind) -> &'static str {
    match kind {
        TrashKind::Plastic => "images/plastic_garbage.png",
        TrashKind::Glass => "images/glass_garbage.png",
        TrashKind::Metal => "images/metal_garbage.png",
        TrashKind::Paper => "images/paper_garbage.png",
    }
}

/// Bin sprite for a trash kind
fn bin_path(kind: TrashKind) -> &'static str {
    match kind {
        TrashKind::Plastic => "images/bin_plastic.png",
        TrashKind::Glass => "images/bin_glass.png",
        TrashKind::Metal => "images/bin_metal.png",
        TrashKind::Paper => "images/bin_paper.png",
    }
}

fn full_path(rel: &str) -> String {
    format!("{}/{}", ASSET_ROOT, rel)
}

/// Everything the renderer draws from disk
pub struct GameAssets {
    pub background: Option<Texture2D>,
    pub fire: Option<Texture2D>,
    pub title_font: Option<Font>,
    /// Horizontal strip of swim frames
    pub player: Option<Texture2D>,
    /// Indexed by `TrashKind::index`
    pub items: [Option<Texture2D>; 4],
    pub bins: [Option<Texture2D>; 4],
    pub frame: Option<Texture2D>,
    pub hand: Option<Texture2D>,
}

impl GameAssets {
    /// No textures at all; everything draws with fallbacks
    pub fn empty() -> Self {
        Self {
            background: None,
            fire: None,
            title_font: None,
            player: None,
            items: [None, None, None, None],
            bins: [None, None, None, None],
            frame: None,
            hand: None,
        }
    }

    pub async fn load() -> Self {
        let mut assets = Self::empty();

        assets.background = load_optional_texture(paths::BACKGROUND).await;
        assets.fire = load_optional_texture(paths::FIRE).await;
        assets.player = load_optional_texture(paths::PLAYER).await;
        assets.frame = load_optional_texture(paths::FRAME).await;
        assets.hand = load_optional_texture(paths::HAND).await;

        for kind in TrashKind::ALL {
            assets.items[kind.index()] = load_optional_texture(item_path(kind)).await;
            assets.bins[kind.index()] = load_optional_texture(bin_path(kind)).await;
        }

        assets.title_font = match load_ttf_font(&full_path(paths::TITLE_FONT)).await {
            Ok(font) => {
                info!("Loaded title font");
                Some(font)
            }
            Err(e) => {
                warn!("Failed to load title font: {}, using default font", e);
                None
            }
        };

        info!("Loaded {}/{} textures", assets.texture_count(), Self::TEXTURE_SLOTS);
        assets
    }

    const TEXTURE_SLOTS: usize = 13;

    fn texture_count(&self) -> usize {
        [&self.background, &self.fire, &self.player, &self.frame, &self.hand]
            .into_iter()
            .chain(self.items.iter())
            .chain(self.bins.iter())
            .filter(|t| t.is_some())
            .count()
    }

    pub fn item(&self, kind: TrashKind) -> Option<&Texture2D> {
        self.items[kind.index()].as_ref()
    }

    pub fn bin(&self, kind: TrashKind) -> Option<&Texture2D> {
        self.bins[kind.index()].as_ref()
    }
}

async fn load_optional_texture(rel: &str) -> Option<Texture2D> {
    let path = full_path(rel);
    match load_texture(&path).await {
        Ok(tex) => {
            tex.set_filter(FilterMode::Linear);
            Some(tex)
        }
        Err(e) => {
            warn!("Failed to load {}: {}", path, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_kind_has_distinct_sprites() {
        let mut seen: Vec<&str> = Vec::new();
        for kind in TrashKind::ALL {
            for path in [item_path(kind), bin_path(kind)] {
                assert!(!seen.contains(&path), "duplicate asset path {}", path);
                seen.push(path);
            }
        }
        assert_eq!(seen.len(), 8);
    }

    #[test]
    fn test_empty_has_no_textures() {
        let assets = GameAssets::empty();
        assert_eq!(assets.texture_count(), 0);
        assert!(assets.item(TrashKind::Glass).is_none());
    }
}
