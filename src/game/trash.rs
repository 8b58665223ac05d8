//! Trash items and the fixed-capacity pool they live in
//!
//! The pool never grows: spawning scans for the first free slot and does
//! nothing when every slot is taken.

use rand::Rng;
use crate::config::SpawnArea;
use crate::ui::Rect;

/// The four recyclable categories, in bin order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrashKind {
    Plastic,
    Glass,
    Metal,
    Paper,
}

impl TrashKind {
    pub const ALL: [TrashKind; 4] = [
        TrashKind::Plastic,
        TrashKind::Glass,
        TrashKind::Metal,
        TrashKind::Paper,
    ];

    /// Position in `ALL` (also the bin index)
    pub fn index(self) -> usize {
        match self {
            TrashKind::Plastic => 0,
            TrashKind::Glass => 1,
            TrashKind::Metal => 2,
            TrashKind::Paper => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TrashKind::Plastic => "Plastic",
            TrashKind::Glass => "Glass",
            TrashKind::Metal => "Metal",
            TrashKind::Paper => "Paper",
        }
    }

    /// Uniformly random kind
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }
}

/// One pool slot
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrashItem {
    pub x: f32,
    pub y: f32,
    pub kind: TrashKind,
    pub active: bool,
}

impl TrashItem {
    const EMPTY: TrashItem = TrashItem { x: 0.0, y: 0.0, kind: TrashKind::Plastic, active: false };

    /// Hitbox for an item of the given side length
    pub fn rect(&self, size: f32) -> Rect {
        Rect::new(self.x, self.y, size, size)
    }
}

/// Fixed-capacity slot pool of trash items
#[derive(Debug, Clone)]
pub struct TrashPool {
    slots: Vec<TrashItem>,
    /// Hitbox side length shared by every item
    item_size: f32,
}

impl TrashPool {
    pub fn new(capacity: usize, item_size: f32) -> Self {
        Self {
            slots: vec![TrashItem::EMPTY; capacity],
            item_size,
        }
    }

    #[cfg(test)]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn item_size(&self) -> f32 {
        self.item_size
    }

    #[cfg(test)]
    pub fn active_count(&self) -> usize {
        self.slots.iter().filter(|item| item.active).count()
    }

    #[cfg(test)]
    pub fn is_full(&self) -> bool {
        self.slots.iter().all(|item| item.active)
    }

    pub fn get(&self, slot: usize) -> Option<&TrashItem> {
        self.slots.get(slot)
    }

    /// Active items with their slot index, in slot order
    pub fn active(&self) -> impl Iterator<Item = (usize, &TrashItem)> {
        self.slots.iter().enumerate().filter(|(_, item)| item.active)
    }

    /// Activate the first free slot at a random spot in `area` with a random kind.
    /// Returns the slot used, or `None` (pool untouched) when every slot is busy.
    pub fn spawn<R: Rng + ?Sized>(&mut self, rng: &mut R, area: &SpawnArea) -> Option<usize> {
        let slot = self.slots.iter().position(|item| !item.active)?;
        let x = rng.gen_range(area.min_x..=area.max_x) as f32;
        let y = rng.gen_range(area.min_y..=area.max_y) as f32;
        let kind = TrashKind::random(rng);
        self.slots[slot] = TrashItem { x, y, kind, active: true };
        Some(slot)
    }

    #[cfg(test)]
    /// Put a specific item into a specific slot
    pub fn place(&mut self, slot: usize, x: f32, y: f32, kind: TrashKind) {
        if let Some(item) = self.slots.get_mut(slot) {
            *item = TrashItem { x, y, kind, active: true };
        }
    }

    /// Free a slot. Returns true if it was active.
    pub fn deactivate(&mut self, slot: usize) -> bool {
        match self.slots.get_mut(slot) {
            Some(item) if item.active => {
                item.active = false;
                true
            }
            _ => false,
        }
    }

    /// Free every slot
    pub fn clear(&mut self) {
        for item in &mut self.slots {
            item.active = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const AREA: SpawnArea = SpawnArea { min_x: 50, max_x: 750, min_y: 200, max_y: 550 };

    #[test]
    fn test_spawn_uses_first_free_slot() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut pool = TrashPool::new(3, 40.0);

        assert_eq!(pool.spawn(&mut rng, &AREA), Some(0));
        assert_eq!(pool.spawn(&mut rng, &AREA), Some(1));
        pool.deactivate(0);
        assert_eq!(pool.spawn(&mut rng, &AREA), Some(0));
        assert_eq!(pool.active_count(), 2);
    }

    #[test]
    fn test_spawn_on_full_pool_is_noop() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut pool = TrashPool::new(20, 40.0);
        for _ in 0..20 {
            assert!(pool.spawn(&mut rng, &AREA).is_some());
        }
        assert!(pool.is_full());

        let before: Vec<TrashItem> = (0..20).map(|i| *pool.get(i).unwrap()).collect();
        for _ in 0..5 {
            assert_eq!(pool.spawn(&mut rng, &AREA), None);
        }
        let after: Vec<TrashItem> = (0..20).map(|i| *pool.get(i).unwrap()).collect();
        assert_eq!(before, after);
        assert_eq!(pool.active_count(), 20);
    }

    #[test]
    fn test_spawn_stays_in_area() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut pool = TrashPool::new(1, 40.0);
        for _ in 0..500 {
            let slot = pool.spawn(&mut rng, &AREA).unwrap();
            let item = *pool.get(slot).unwrap();
            assert!(item.x >= 50.0 && item.x <= 750.0);
            assert!(item.y >= 200.0 && item.y <= 550.0);
            assert_eq!(item.x.fract(), 0.0);
            pool.deactivate(slot);
        }
    }

    #[test]
    fn test_random_kind_covers_all_categories() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut seen = [false; 4];
        for _ in 0..200 {
            seen[TrashKind::random(&mut rng).index()] = true;
        }
        assert_eq!(seen, [true; 4]);
    }

    #[test]
    fn test_deactivate() {
        let mut pool = TrashPool::new(2, 40.0);
        pool.place(1, 10.0, 20.0, TrashKind::Glass);
        assert!(pool.deactivate(1));
        assert!(!pool.deactivate(1));
        assert!(!pool.deactivate(99));
        assert_eq!(pool.active_count(), 0);
    }

    #[test]
    fn test_clear_and_active_iter() {
        let mut pool = TrashPool::new(4, 40.0);
        pool.place(1, 0.0, 0.0, TrashKind::Metal);
        pool.place(3, 0.0, 0.0, TrashKind::Paper);
        let slots: Vec<usize> = pool.active().map(|(slot, _)| slot).collect();
        assert_eq!(slots, vec![1, 3]);

        pool.clear();
        assert_eq!(pool.active().count(), 0);
        assert_eq!(pool.capacity(), 4);
    }

    #[test]
    fn test_item_rect() {
        let mut pool = TrashPool::new(1, 40.0);
        pool.place(0, 100.0, 250.0, TrashKind::Plastic);
        let item = pool.get(0).unwrap();
        assert_eq!(item.rect(pool.item_size()), Rect::new(100.0, 250.0, 40.0, 40.0));
    }
}
