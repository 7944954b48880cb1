use crate::game::tile_map::{Ground, TileLayer, TileMap, TilePos};
use std::collections::{BTreeMap, HashSet};

/// the 3x3 block around a tile (including the tile) in flood fill order
const NEIGHBORHOOD: [(i32, i32); 9] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 0),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// an island that sinks one ring at a time, starting with the ring furthest from its center
#[derive(Debug, Clone, PartialEq)]
pub struct SinkQueue {
    current_index: i32,
    rings: BTreeMap<i32, Vec<TilePos>>,
}

impl SinkQueue {
    /// builds the sink queue for the island the ``start`` tile belongs to
    pub fn for_island(ground: &TileLayer<Ground>, start: TilePos) -> Self {
        let center = find_island_center(ground, start).unwrap_or(start);
        let rings = distance_rings(ground, center, start);
        let current_index = rings.keys().next_back().copied().unwrap_or(0);
        log::debug!(
            "island at {:?} sinks around {:?} in {} rings",
            start,
            center,
            rings.len()
        );
        Self {
            current_index,
            rings,
        }
    }

    /// the distance of the ring that sinks next (or just sank)
    pub fn current_index(&self) -> i32 {
        self.current_index
    }

    /// all tiles that have not sunk yet, grouped by their distance to the center
    pub fn rings(&self) -> &BTreeMap<i32, Vec<TilePos>> {
        &self.rings
    }

    /// sinks the outermost remaining ring
    pub fn advance(&mut self, map: &mut TileMap) {
        while self.current_index >= 0 {
            if let Some(ring) = self.rings.remove(&self.current_index) {
                for pos in ring {
                    map.sink(pos);
                }
                break;
            }
            self.current_index -= 1;
        }
    }

    /// true once the center ring has sunk
    pub fn is_finished(&self) -> bool {
        self.current_index <= 0
    }
}

/// sum of the horizontal and vertical distance to the closest water
pub fn water_distance(ground: &TileLayer<Ground>, pos: TilePos) -> i32 {
    let run = |dx: i32, dy: i32| {
        let mut steps = 0;
        while ground.is_set(pos.offset(dx * steps, dy * steps)) {
            steps += 1;
        }
        steps
    };
    run(1, 0).min(run(-1, 0)) + run(0, 1).min(run(0, -1))
}

/// finds the tile of the island furthest away from water, the first one found wins ties
/// ### Info
/// Returns ``None`` if the start tile has no ground neighbors.
pub fn find_island_center(ground: &TileLayer<Ground>, start: TilePos) -> Option<TilePos> {
    let mut scanned = HashSet::from([start]);
    let mut stack = vec![(start, 0usize)];
    let mut best: Option<(i32, TilePos)> = None;

    while let Some((origin, next)) = stack.last_mut() {
        let Some(&(dx, dy)) = NEIGHBORHOOD.get(*next) else {
            stack.pop();
            continue;
        };
        *next += 1;
        let pos = origin.offset(dx, dy);
        if scanned.contains(&pos) || !ground.is_set(pos) {
            continue;
        }
        let distance = water_distance(ground, pos);
        if best.map_or(true, |(largest, _)| distance > largest) {
            best = Some((distance, pos));
        }
        scanned.insert(pos);
        stack.push((pos, 0));
    }
    best.map(|(_, pos)| pos)
}

/// groups every tile of the island by its rounded down distance to the center
pub fn distance_rings(
    ground: &TileLayer<Ground>,
    center: TilePos,
    start: TilePos,
) -> BTreeMap<i32, Vec<TilePos>> {
    let mut rings: BTreeMap<i32, Vec<TilePos>> = BTreeMap::new();
    let mut scanned = HashSet::new();
    let mut stack = vec![(start, 0usize)];

    while let Some((origin, next)) = stack.last_mut() {
        let Some(&(dx, dy)) = NEIGHBORHOOD.get(*next) else {
            stack.pop();
            continue;
        };
        *next += 1;
        let pos = origin.offset(dx, dy);
        if !ground.is_set(pos) || !scanned.insert(pos) {
            continue;
        }
        let distance = (center.distance_squared(pos) as f64).sqrt() as i32;
        rings.entry(distance).or_default().push(pos);
        stack.push((pos, 0));
    }
    rings
}

#[cfg(test)]
mod tests {
    use super::*;

    /// square island of sand, ``size`` tiles wide, with its lower left corner at ``corner``
    fn square_island(map_size: u32, corner: TilePos, size: i32) -> TileMap {
        let mut map = TileMap::new(map_size, map_size);
        for x in 0..size {
            for y in 0..size {
                map.ground.set(corner.offset(x, y), Some(Ground::Sand));
            }
        }
        map
    }

    #[test]
    fn water_distance_counts_both_axes() {
        let map = square_island(10, TilePos::new(2, 2), 5);
        // edge tile: one step to water on the left, three down
        assert_eq!(water_distance(&map.ground, TilePos::new(2, 4)), 1 + 3);
        assert_eq!(water_distance(&map.ground, TilePos::new(4, 4)), 3 + 3);
        assert_eq!(water_distance(&map.ground, TilePos::new(0, 0)), 0);
    }

    #[test]
    fn center_of_square_island() {
        let map = square_island(12, TilePos::new(3, 3), 5);
        let center = find_island_center(&map.ground, TilePos::new(3, 3));
        assert_eq!(center, Some(TilePos::new(5, 5)));
    }

    #[test]
    fn lonely_tile_has_no_center() {
        let map = square_island(5, TilePos::new(2, 2), 1);
        assert_eq!(find_island_center(&map.ground, TilePos::new(2, 2)), None);
        let queue = SinkQueue::for_island(&map.ground, TilePos::new(2, 2));
        assert_eq!(queue.current_index(), 0);
        assert_eq!(queue.rings().get(&0), Some(&vec![TilePos::new(2, 2)]));
    }

    #[test]
    fn rings_cover_the_whole_island_only() {
        let mut map = square_island(20, TilePos::new(2, 2), 5);
        // a second island that must not be touched
        map.ground.set(TilePos::new(15, 15), Some(Ground::Grass));

        let rings = distance_rings(&map.ground, TilePos::new(4, 4), TilePos::new(2, 2));
        let total: usize = rings.values().map(Vec::len).sum();
        assert_eq!(total, 25);
        assert_eq!(rings[&0], vec![TilePos::new(4, 4)]);
        // corners are sqrt(8) away
        assert!(rings[&2].contains(&TilePos::new(2, 2)));
        assert_eq!(rings.keys().copied().max(), Some(2));
    }

    #[test]
    fn diagonal_tiles_belong_to_the_island() {
        let mut map = TileMap::new(6, 6);
        map.ground.set(TilePos::new(1, 1), Some(Ground::Sand));
        map.ground.set(TilePos::new(2, 2), Some(Ground::Sand));
        map.ground.set(TilePos::new(3, 3), Some(Ground::Sand));
        let rings = distance_rings(&map.ground, TilePos::new(2, 2), TilePos::new(1, 1));
        assert_eq!(rings.values().map(Vec::len).sum::<usize>(), 3);
    }

    #[test]
    fn island_sinks_from_the_outside_in() {
        let mut map = square_island(12, TilePos::new(3, 3), 5);
        let mut queue = SinkQueue::for_island(&map.ground, TilePos::new(4, 4));
        assert_eq!(queue.current_index(), 2);

        queue.advance(&mut map);
        assert!(!map.is_ground(TilePos::new(3, 3)));
        assert!(map.is_ground(TilePos::new(5, 5)));
        assert!(!queue.is_finished());

        queue.advance(&mut map);
        assert_eq!(queue.current_index(), 1);
        assert!(map.is_ground(TilePos::new(5, 5)));

        queue.advance(&mut map);
        assert!(queue.is_finished());
        assert_eq!(map.ground.count(), 0);
    }
}
