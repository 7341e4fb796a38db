//! Board Generator
//!
//! Lays out one play session: shuffled items on the left, independently
//! shuffled drop slots on the right, each with a small cosmetic offset.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::catalog::PairCatalog;
use crate::config::GameConfig;

/// Draggable left-column element
#[derive(Debug, Clone, PartialEq)]
pub struct BoardItem {
    pub name: String,
    pub image: String,
    /// Top margin in px, purely cosmetic
    pub offset_px: f64,
}

/// Right-column drop target
#[derive(Debug, Clone, PartialEq)]
pub struct DropSlot {
    pub name: String,
    pub image: String,
    pub offset_px: f64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Board {
    /// Bumped on every regeneration so views rebuild their elements
    pub generation: u32,
    pub items: Vec<BoardItem>,
    pub slots: Vec<DropSlot>,
}

impl Board {
    /// Shuffle both columns independently (uniform Fisher-Yates)
    pub fn generate<R: Rng + ?Sized>(
        catalog: &PairCatalog,
        config: &GameConfig,
        generation: u32,
        rng: &mut R,
    ) -> Self {
        let mut lefts = catalog.left_names();
        let mut rights = catalog.right_names();
        lefts.shuffle(rng);
        rights.shuffle(rng);

        let items = lefts
            .into_iter()
            .map(|name| BoardItem {
                image: PairCatalog::image_path(&config.image_dir, &name),
                offset_px: random_offset(config, rng),
                name,
            })
            .collect();
        let slots = rights
            .into_iter()
            .map(|name| DropSlot {
                image: PairCatalog::image_path(&config.image_dir, &name),
                offset_px: random_offset(config, rng),
                name,
            })
            .collect();

        Self {
            generation,
            items,
            slots,
        }
    }

    pub fn has_item(&self, name: &str) -> bool {
        self.items.iter().any(|i| i.name == name)
    }

    pub fn has_slot(&self, name: &str) -> bool {
        self.slots.iter().any(|s| s.name == name)
    }
}

fn random_offset<R: Rng + ?Sized>(config: &GameConfig, rng: &mut R) -> f64 {
    let [min, max] = config.offset_range_px;
    if max > min {
        rng.gen_range(min..max)
    } else {
        min
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_board_covers_catalog() {
        let catalog = PairCatalog::reference();
        let config = GameConfig::default();
        let mut rng = StdRng::seed_from_u64(7);

        let board = Board::generate(&catalog, &config, 1, &mut rng);
        assert_eq!(board.items.len(), catalog.len());
        assert_eq!(board.slots.len(), catalog.len());

        let mut names: Vec<String> = board.items.iter().map(|i| i.name.clone()).collect();
        names.sort();
        let mut expected = catalog.left_names();
        expected.sort();
        assert_eq!(names, expected);

        for slot in &board.slots {
            assert!(catalog.right_names().contains(&slot.name));
            assert_eq!(slot.image, format!("images/{}.jpg", slot.name));
        }
    }

    #[test]
    fn test_offsets_in_range() {
        let catalog = PairCatalog::reference();
        let config = GameConfig::default();
        let mut rng = StdRng::seed_from_u64(42);

        for generation in 0..50 {
            let board = Board::generate(&catalog, &config, generation, &mut rng);
            for offset in board.items.iter().map(|i| i.offset_px).chain(board.slots.iter().map(|s| s.offset_px)) {
                assert!((10.0..40.0).contains(&offset), "offset {} out of range", offset);
            }
        }
    }

    #[test]
    fn test_fixed_offset_when_range_empty() {
        let catalog = PairCatalog::reference();
        let config = GameConfig {
            offset_range_px: [12.0, 12.0],
            ..GameConfig::default()
        };
        let mut rng = StdRng::seed_from_u64(1);
        let board = Board::generate(&catalog, &config, 0, &mut rng);
        assert!(board.items.iter().all(|i| i.offset_px == 12.0));
    }

    #[test]
    fn test_shuffle_reaches_every_first_item() {
        let catalog = PairCatalog::reference();
        let config = GameConfig::default();
        let mut rng = StdRng::seed_from_u64(3);

        let mut firsts = std::collections::HashSet::new();
        for generation in 0..200 {
            let board = Board::generate(&catalog, &config, generation, &mut rng);
            firsts.insert(board.items[0].name.clone());
        }
        assert_eq!(firsts.len(), catalog.len());
    }
}
