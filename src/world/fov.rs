//! Fog of war
//!
//! Distance-based visibility classification over the generated grid.

use serde::{Deserialize, Serialize};

use super::grid::Grid;
use super::tile::BiomeType;
use super::Position;

/// Visibility state of a single tile, ordered from most to least hidden
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Visibility {
    Hidden,
    /// One-tile band past the sight radius, rendered at partial opacity
    Transition,
    Revealed,
}

/// Classify one tile's visibility from the player's position.
///
/// Border tiles stay revealed at any distance so the map edge remains
/// an orientation anchor. Out-of-bounds coordinates classify by
/// distance alone. Stateless and reentrant; callers may invoke this
/// once per on-screen tile per frame.
pub fn visibility_of(grid: &Grid, player: Position, radius: f64, x: i32, y: i32) -> Visibility {
    let is_border = grid
        .get_tile(x, y)
        .map_or(false, |t| t.biome == BiomeType::Border);
    if is_border {
        return Visibility::Revealed;
    }

    let d = player.euclidean_distance(&Position::new(x, y));
    if d > radius + 1.0 {
        Visibility::Hidden
    } else if d > radius {
        Visibility::Transition
    } else {
        Visibility::Revealed
    }
}

/// A whole-grid visibility snapshot for one frame.
///
/// Recomputed from scratch on every call; a pure function of the grid
/// dimensions, player position, and radius.
#[derive(Debug, Clone)]
pub struct VisibilityField {
    width: i32,
    height: i32,
    states: Vec<Visibility>,
}

impl VisibilityField {
    /// Classify every in-bounds tile
    pub fn compute(grid: &Grid, player: Position, radius: f64) -> Self {
        let mut states = Vec::with_capacity((grid.width * grid.height) as usize);
        for y in 0..grid.height {
            for x in 0..grid.width {
                states.push(visibility_of(grid, player, radius, x, y));
            }
        }
        Self {
            width: grid.width,
            height: grid.height,
            states,
        }
    }

    /// Visibility at a position; None when out of bounds
    pub fn get(&self, x: i32, y: i32) -> Option<Visibility> {
        if x >= 0 && x < self.width && y >= 0 && y < self.height {
            Some(self.states[(y * self.width + x) as usize])
        } else {
            None
        }
    }

    /// Positions fully revealed this frame
    pub fn revealed_positions(&self) -> Vec<Position> {
        self.states
            .iter()
            .enumerate()
            .filter(|(_, v)| **v == Visibility::Revealed)
            .map(|(idx, _)| {
                let idx = idx as i32;
                Position::new(idx % self.width, idx / self.width)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn test_grid() -> Grid {
        let mut rng = StdRng::seed_from_u64(2024);
        Grid::generate(&mut rng, 10, 10).unwrap()
    }

    #[test]
    fn test_distance_tiers() {
        let grid = test_grid();
        let player = Position::new(5, 5);

        assert_eq!(visibility_of(&grid, player, 2.0, 5, 5), Visibility::Revealed);
        // d = 2, inside the radius
        assert_eq!(visibility_of(&grid, player, 2.0, 7, 5), Visibility::Revealed);
        // d = 3, in the one-tile band past the radius
        assert_eq!(
            visibility_of(&grid, player, 2.0, 8, 5),
            Visibility::Transition
        );
        // d = sqrt(18) ~ 4.24, past the band
        assert_eq!(visibility_of(&grid, player, 2.0, 8, 8), Visibility::Hidden);
    }

    #[test]
    fn test_border_always_revealed() {
        let grid = test_grid();
        let player = Position::new(5, 5);

        // d = 4 would be hidden for an interior tile
        assert_eq!(visibility_of(&grid, player, 2.0, 9, 5), Visibility::Revealed);
        assert_eq!(visibility_of(&grid, player, 0.0, 0, 0), Visibility::Revealed);
    }

    #[test]
    fn test_zero_radius_reveals_own_tile() {
        let grid = test_grid();
        let player = Position::new(4, 4);
        assert_eq!(visibility_of(&grid, player, 0.0, 4, 4), Visibility::Revealed);
        assert_eq!(visibility_of(&grid, player, 0.0, 5, 4), Visibility::Transition);
    }

    #[test]
    fn test_monotonic_in_distance() {
        let grid = test_grid();
        let player = Position::new(5, 5);
        let radius = 2.5;

        let mut by_distance: Vec<(f64, Visibility)> = Vec::new();
        for y in 0..grid.height {
            for x in 0..grid.width {
                let tile = grid.get_tile(x, y).unwrap();
                if tile.biome == BiomeType::Border {
                    continue;
                }
                let d = player.euclidean_distance(&Position::new(x, y));
                by_distance.push((d, visibility_of(&grid, player, radius, x, y)));
            }
        }

        by_distance.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap());
        for pair in by_distance.windows(2) {
            assert!(
                pair[0].1 >= pair[1].1,
                "visibility increased with distance: {:?} then {:?}",
                pair[0],
                pair[1]
            );
        }
    }

    #[test]
    fn test_snapshot_matches_per_tile_queries() {
        let grid = test_grid();
        let player = Position::new(3, 6);
        let radius = 3.0;
        let field = VisibilityField::compute(&grid, player, radius);

        for y in 0..grid.height {
            for x in 0..grid.width {
                assert_eq!(
                    field.get(x, y),
                    Some(visibility_of(&grid, player, radius, x, y))
                );
            }
        }
        assert!(field.get(10, 0).is_none());
        assert!(field.get(0, -1).is_none());
    }

    #[test]
    fn test_full_world_scenario() {
        let mut rng = StdRng::seed_from_u64(1337);
        let grid = Grid::generate(&mut rng, 10, 10).unwrap();

        for (x, y) in [(0, 0), (9, 9), (0, 5), (5, 0)] {
            let tile = grid.get_tile(x, y).unwrap();
            assert_eq!(tile.biome, BiomeType::Border);
            assert!(tile.has_tag("impassable"));
        }
        assert!(!grid.walkable_positions().is_empty());

        let player = Position::new(5, 5);
        let field = VisibilityField::compute(&grid, player, 2.0);
        assert_eq!(field.get(5, 5), Some(Visibility::Revealed));
        assert_eq!(field.get(7, 5), Some(Visibility::Revealed));
        assert_eq!(field.get(8, 5), Some(Visibility::Transition));
        assert_eq!(field.get(8, 8), Some(Visibility::Hidden));
        // Border stays revealed even past the hidden cutoff
        assert_eq!(field.get(9, 5), Some(Visibility::Revealed));
        assert!(field.get(12, 5).is_none());

        let revealed = field.revealed_positions();
        assert!(revealed.contains(&Position::new(5, 5)));
        assert!(!revealed.contains(&Position::new(8, 8)));
    }
}
