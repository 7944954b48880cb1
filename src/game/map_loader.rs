use crate::game::tile_map::{Crate, Flower, Ground, TileMap, TilePos};
use serde::Deserialize;
use std::fmt;
use std::path::Path;

/// where the player starts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Spawn {
    /// tile of the player on screen
    pub screen: [i32; 2],
    /// offset of the view into the world in tiles
    pub world: [i32; 2],
}

/// world offsets that enable footprints and sinking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Zones {
    /// footprints are left when the view offset is beyond both values
    pub steps_after: [i32; 2],
    /// islands sink on landing when the view offset is beyond both values...
    pub sink_after: [i32; 2],
    /// ...and below this y offset
    pub sink_before_y: i32,
}

impl Zones {
    pub fn leaves_steps(&self, world: TilePos) -> bool {
        world.x > self.steps_after[0] && world.y > self.steps_after[1]
    }

    pub fn sinks_on_landing(&self, world: TilePos) -> bool {
        world.x > self.sink_after[0] && world.y > self.sink_after[1] && world.y < self.sink_before_y
    }
}

#[derive(Debug, Deserialize)]
struct MapFile {
    name: String,
    spawn: Spawn,
    zones: Zones,
    rows: Vec<String>,
}

/// a parsed level
#[derive(Debug, Clone, PartialEq)]
pub struct MapData {
    pub name: String,
    pub spawn: Spawn,
    pub zones: Zones,
    pub tiles: TileMap,
}

impl MapData {
    /// parses a map from yaml source
    /// ### Info
    /// Legend: ``~`` water, ``.`` sand, ``,`` grass, ``B`` crate on sand, ``F`` flower on grass.
    /// The first row is the top of the map.
    pub fn from_yaml(source: &str) -> Result<Self, MapError> {
        let file: MapFile = serde_yaml::from_str(source)?;
        let tiles = parse_rows(&file.rows)?;
        log::info!(
            "loaded map '{}' ({}x{}, {} ground tiles)",
            file.name,
            tiles.width(),
            tiles.height(),
            tiles.ground.count()
        );
        Ok(Self {
            name: file.name,
            spawn: file.spawn,
            zones: file.zones,
            tiles,
        })
    }

    /// reads and parses a map file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, MapError> {
        let source = std::fs::read_to_string(path)?;
        Self::from_yaml(&source)
    }
}

fn parse_rows(rows: &[String]) -> Result<TileMap, MapError> {
    let width = rows.first().map(|row| row.chars().count()).unwrap_or(0);
    if width == 0 {
        return Err(MapError::Empty);
    }
    let height = rows.len();
    let mut tiles = TileMap::new(width as u32, height as u32);

    for (row_index, row) in rows.iter().enumerate() {
        let found = row.chars().count();
        if found != width {
            return Err(MapError::RaggedRow {
                row: row_index,
                expected: width,
                found,
            });
        }
        let y = (height - 1 - row_index) as i32;
        for (column, symbol) in row.chars().enumerate() {
            let pos = TilePos::new(column as i32, y);
            match symbol {
                '~' => {}
                '.' => tiles.ground.set(pos, Some(Ground::Sand)),
                ',' => tiles.ground.set(pos, Some(Ground::Grass)),
                'B' => {
                    tiles.ground.set(pos, Some(Ground::Sand));
                    tiles.boxes.set(pos, Some(Crate));
                }
                'F' => {
                    tiles.ground.set(pos, Some(Ground::Grass));
                    tiles.flowers.set(pos, Some(Flower));
                }
                _ => {
                    return Err(MapError::UnknownTile {
                        symbol,
                        row: row_index,
                        column,
                    })
                }
            }
        }
    }
    Ok(tiles)
}

/// everything that can go wrong while loading a map
#[derive(Debug)]
pub enum MapError {
    Io(std::io::Error),
    Yaml(serde_yaml::Error),
    Empty,
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    UnknownTile {
        symbol: char,
        row: usize,
        column: usize,
    },
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MapError::Io(e) => write!(f, "failed to read map file: {e}"),
            MapError::Yaml(e) => write!(f, "failed to parse map file: {e}"),
            MapError::Empty => write!(f, "map has no tiles"),
            MapError::RaggedRow {
                row,
                expected,
                found,
            } => write!(f, "map row {row} has {found} tiles, expected {expected}"),
            MapError::UnknownTile {
                symbol,
                row,
                column,
            } => write!(f, "unknown tile '{symbol}' in row {row}, column {column}"),
        }
    }
}

impl std::error::Error for MapError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MapError::Io(e) => Some(e),
            MapError::Yaml(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for MapError {
    fn from(error: std::io::Error) -> Self {
        MapError::Io(error)
    }
}

impl From<serde_yaml::Error> for MapError {
    fn from(error: serde_yaml::Error) -> Self {
        MapError::Yaml(error)
    }
}
