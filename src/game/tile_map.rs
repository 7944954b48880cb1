use itertools::Itertools;

/// tile coordinates, ``y`` grows upwards like the world
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TilePos {
    pub x: i32,
    pub y: i32,
}

impl TilePos {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// the position moved by ``(dx, dy)`` tiles
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// squared euclidean distance to another tile
    pub fn distance_squared(self, other: TilePos) -> i64 {
        let dx = (self.x - other.x) as i64;
        let dy = (self.y - other.y) as i64;
        dx * dx + dy * dy
    }
}

/// ground tile variants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ground {
    Sand,
    Grass,
}

/// a pushable box
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Crate;

/// a flower that recharges the jump when walked over
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Flower;

/// footprint pointing in the direction the player left the tile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepDirection {
    Left,
    Right,
    Up,
    Down,
}

impl StepDirection {
    /// the direction of a single tile move
    pub fn from_move(dx: i32, dy: i32) -> Option<Self> {
        match (dx, dy) {
            (-1, 0) => Some(Self::Left),
            (1, 0) => Some(Self::Right),
            (0, -1) => Some(Self::Down),
            (0, 1) => Some(Self::Up),
            _ => None,
        }
    }
}

/// fixed size grid of optional tiles, everything outside the grid reads as empty
#[derive(Debug, Clone, PartialEq)]
pub struct TileLayer<T: Copy> {
    width: i32,
    height: i32,
    cells: Vec<Option<T>>,
}

impl<T: Copy> TileLayer<T> {
    /// creates an empty layer
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: width as i32,
            height: height as i32,
            cells: vec![None; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    fn index(&self, pos: TilePos) -> Option<usize> {
        let inside = (0..self.width).contains(&pos.x) && (0..self.height).contains(&pos.y);
        inside.then(|| (pos.y * self.width + pos.x) as usize)
    }

    /// the tile at the position
    pub fn get(&self, pos: TilePos) -> Option<T> {
        self.index(pos).and_then(|i| self.cells[i])
    }

    pub fn is_set(&self, pos: TilePos) -> bool {
        self.get(pos).is_some()
    }

    /// replaces the tile at the position, writes outside of the layer are dropped
    pub fn set(&mut self, pos: TilePos, tile: Option<T>) {
        if let Some(i) = self.index(pos) {
            self.cells[i] = tile;
        }
    }

    /// removes and returns the tile at the position
    pub fn take(&mut self, pos: TilePos) -> Option<T> {
        self.index(pos).and_then(|i| self.cells[i].take())
    }

    /// all set tiles inside the inclusive rectangle ``min..=max``, clipped to the layer
    pub fn tiles_in(&self, min: TilePos, max: TilePos) -> impl Iterator<Item = (TilePos, T)> + '_ {
        let xs = min.x.max(0)..=max.x.min(self.width - 1);
        let ys = min.y.max(0)..=max.y.min(self.height - 1);
        ys.cartesian_product(xs).filter_map(move |(y, x)| {
            let pos = TilePos::new(x, y);
            self.get(pos).map(|tile| (pos, tile))
        })
    }

    /// number of set tiles
    pub fn count(&self) -> usize {
        self.cells.iter().flatten().count()
    }
}

/// all layers of a level
#[derive(Debug, Clone, PartialEq)]
pub struct TileMap {
    pub ground: TileLayer<Ground>,
    pub boxes: TileLayer<Crate>,
    pub flowers: TileLayer<Flower>,
    pub steps: TileLayer<StepDirection>,
}

impl TileMap {
    /// creates a map that is all water
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            ground: TileLayer::new(width, height),
            boxes: TileLayer::new(width, height),
            flowers: TileLayer::new(width, height),
            steps: TileLayer::new(width, height),
        }
    }

    pub fn width(&self) -> i32 {
        self.ground.width()
    }

    pub fn height(&self) -> i32 {
        self.ground.height()
    }

    pub fn is_ground(&self, pos: TilePos) -> bool {
        self.ground.is_set(pos)
    }

    /// ground without a crate on it
    pub fn is_walkable(&self, pos: TilePos) -> bool {
        self.ground.is_set(pos) && !self.boxes.is_set(pos)
    }

    /// turns the tile into water, footprints on it vanish too
    pub fn sink(&mut self, pos: TilePos) {
        self.ground.set(pos, None);
        self.steps.set(pos, None);
    }
}
