//! Disposal bins: one per trash kind, laid out once and never moved

use crate::config::GameConfig;
use crate::ui::Rect;
use super::trash::TrashKind;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bin {
    pub rect: Rect,
    pub accepts: TrashKind,
}

/// The four bins, left to right in `TrashKind::ALL` order
#[derive(Debug, Clone)]
pub struct BinSet {
    bins: [Bin; 4],
}

impl BinSet {
    pub fn from_config(config: &GameConfig) -> Self {
        let bins = TrashKind::ALL.map(|kind| Bin {
            rect: config.bin_rect(kind.index()),
            accepts: kind,
        });
        Self { bins }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Bin> {
        self.bins.iter()
    }

    #[cfg(test)]
    /// The bin for a kind
    pub fn for_kind(&self, kind: TrashKind) -> &Bin {
        &self.bins[kind.index()]
    }

    /// First bin (in layout order) overlapping `rect`
    pub fn first_overlapping(&self, rect: &Rect) -> Option<&Bin> {
        self.bins.iter().find(|bin| bin.rect.overlaps(rect))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_bin_per_kind() {
        let bins = BinSet::from_config(&GameConfig::default());
        assert_eq!(bins.iter().count(), 4);
        for kind in TrashKind::ALL {
            assert_eq!(bins.for_kind(kind).accepts, kind);
        }
    }

    #[test]
    fn test_layout_left_to_right() {
        let bins = BinSet::from_config(&GameConfig::default());
        let xs: Vec<f32> = bins.iter().map(|b| b.rect.x).collect();
        assert_eq!(xs, vec![100.0, 270.0, 440.0, 610.0]);
        assert!(bins.iter().all(|b| b.rect.y == 480.0));
    }

    #[test]
    fn test_first_overlapping() {
        let bins = BinSet::from_config(&GameConfig::default());
        let over_glass = Rect::new(250.0, 450.0, 40.0, 40.0);
        assert_eq!(bins.first_overlapping(&over_glass).map(|b| b.accepts), Some(TrashKind::Glass));

        // Wide enough to cover plastic and glass: plastic comes first
        let wide = Rect::new(120.0, 470.0, 200.0, 40.0);
        assert_eq!(bins.first_overlapping(&wide).map(|b| b.accepts), Some(TrashKind::Plastic));

        assert!(bins.first_overlapping(&Rect::new(0.0, 0.0, 50.0, 50.0)).is_none());
    }
}
