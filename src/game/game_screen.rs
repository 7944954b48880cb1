use crate::game::controls::{self, JUMP, RESTART};
use crate::game::map_loader::MapData;
use crate::game::player::PlayerFrame;
use crate::game::sinking::SinkQueue;
use crate::game::tile_map::{Ground, StepDirection, TileMap, TilePos};
use crate::glm;
use crate::rendering::camera::OrthoCamera;
use crate::rendering::color::Color32;
use crate::rendering::frame::{Frame, Quad};
use crate::systems::input_system::InputSystem;
use crate::utils::constants::tuning::*;
use crate::utils::constants::{FRAMETIME, TILE_SIZE, VIEWPORT_HEIGHT, VIEWPORT_WIDTH, WATER_COLOR};

const SAND_COLOR: Color32 = Color32::from_rgb(238, 214, 150);
const GRASS_COLOR: Color32 = Color32::from_rgb(110, 190, 90);
const STEP_COLOR: Color32 = Color32::from_rgba(150, 120, 70, 200);
const FLOWER_COLOR: Color32 = Color32::from_rgb(240, 90, 160);
const CRATE_COLOR: Color32 = Color32::from_rgb(140, 90, 40);

/// what the player is doing right now
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerState {
    Normal,
    Jumping,
    Falling,
    Drowning,
}

/// the running level: player, camera, map and sinking islands
pub struct GameScreen {
    level: MapData,
    map: TileMap,
    state: PlayerState,
    camera: OrthoCamera,
    /// position of the player in the viewport
    screen_position: TilePos,
    /// position of the viewport in the world
    world_position: TilePos,
    current_frame: PlayerFrame,
    input_timer: f32,
    jump_timer: f32,
    jump_frame: u32,
    drown_alpha: f32,
    sink_queues: Vec<SinkQueue>,
    sink_timer: f32,
}

impl GameScreen {
    /// starts the level at its spawn point
    pub fn new(level: MapData) -> Self {
        let map = level.tiles.clone();
        let mut screen = Self {
            level,
            map,
            state: PlayerState::Normal,
            camera: OrthoCamera::new(VIEWPORT_WIDTH as f32, VIEWPORT_HEIGHT as f32),
            screen_position: TilePos::default(),
            world_position: TilePos::default(),
            current_frame: PlayerFrame::IDLE,
            input_timer: INPUT_DELAY,
            jump_timer: 0.0,
            jump_frame: 1,
            drown_alpha: 1.0,
            sink_queues: Vec::new(),
            sink_timer: SINK_DELAY,
        };
        screen.init_game();
        screen
    }

    /// resets the player and restores the map, the spawn island starts sinking right away
    pub fn init_game(&mut self) {
        log::debug!("starting '{}'", self.level.name);
        let spawn = self.level.spawn;
        self.screen_position = TilePos::new(spawn.screen[0], spawn.screen[1]);
        self.world_position = TilePos::new(spawn.world[0], spawn.world[1]);
        self.state = PlayerState::Normal;
        self.camera.zoom = 1.0;
        self.input_timer = INPUT_DELAY;
        self.jump_timer = 0.0;
        self.current_frame = PlayerFrame::IDLE;
        self.map = self.level.tiles.clone();

        self.sink_queues.clear();
        self.create_sink();
        self.update_camera();
    }

    /// advances the game by one frame
    pub fn update(&mut self, delta_time: f32, input: &InputSystem) {
        self.update_sinking(delta_time);

        match self.state {
            PlayerState::Normal => self.update_normal(delta_time, input),
            PlayerState::Jumping => self.update_jumping(delta_time, input),
            PlayerState::Falling => self.update_falling(delta_time, input),
            PlayerState::Drowning => self.update_drowning(delta_time),
        }

        self.update_camera();
    }

    pub fn state(&self) -> PlayerState {
        self.state
    }

    pub fn map(&self) -> &TileMap {
        &self.map
    }

    pub fn level(&self) -> &MapData {
        &self.level
    }

    pub fn camera(&self) -> &OrthoCamera {
        &self.camera
    }

    pub fn screen_position(&self) -> TilePos {
        self.screen_position
    }

    pub fn world_position(&self) -> TilePos {
        self.world_position
    }

    /// the map tile the player stands on (or hovers over)
    pub fn player_tile(&self) -> TilePos {
        self.screen_position
            .offset(self.world_position.x, self.world_position.y)
    }

    pub fn current_frame(&self) -> PlayerFrame {
        self.current_frame
    }

    /// seconds until the next jump is possible
    pub fn jump_timer(&self) -> f32 {
        self.jump_timer
    }

    pub fn drown_alpha(&self) -> f32 {
        self.drown_alpha
    }

    pub fn sink_queues(&self) -> &[SinkQueue] {
        &self.sink_queues
    }

    /// sinks one ring of every sinking island each time the sink timer runs out
    fn update_sinking(&mut self, delta_time: f32) {
        if self.sink_queues.is_empty() {
            return;
        }
        if self.sink_timer > 0.0 {
            self.sink_timer -= delta_time;
            return;
        }
        self.sink_timer = SINK_DELAY;

        for queue in self.sink_queues.iter_mut() {
            queue.advance(&mut self.map);
        }
        let before = self.sink_queues.len();
        self.sink_queues.retain(|queue| !queue.is_finished());
        if self.sink_queues.len() < before {
            log::debug!("{} island(s) sank completely", before - self.sink_queues.len());
        }
    }

    fn update_normal(&mut self, delta_time: f32, input: &InputSystem) {
        let position = self.player_tile();

        if input.is_key_just_pressed(RESTART) {
            log::debug!("restart requested");
            self.init_game();
            return;
        }

        if !self.map.is_ground(position) {
            log::debug!("the ground at {:?} is gone", position);
            self.state = PlayerState::Drowning;
            return;
        }

        if self.jump_timer > 0.0 {
            self.jump_timer -= delta_time;
            self.current_frame = PlayerFrame::recharge(self.jump_timer / JUMP_DELAY);
        } else if input.is_key_just_pressed(JUMP) {
            log::debug!("jump from {:?}", position);
            self.jump_timer = JUMP_DELAY;
            self.jump_frame = 1;
            self.state = PlayerState::Jumping;
            return;
        }

        if self.input_timer > 0.0 {
            self.input_timer -= delta_time;
            return;
        }

        if let Some((dx, dy)) = controls::walk_direction(input) {
            self.try_walk(position, dx, dy);
        }
    }

    /// walks one tile, pushing a crate if there is room behind it
    fn try_walk(&mut self, position: TilePos, dx: i32, dy: i32) {
        let ahead = position.offset(dx, dy);
        let behind_crate = position.offset(2 * dx, 2 * dy);

        let mut moved = self.map.is_walkable(ahead);
        if self.map.boxes.is_set(ahead) && self.map.is_walkable(behind_crate) {
            let pushed = self.map.boxes.take(ahead);
            self.map.boxes.set(behind_crate, pushed);
            moved = true;
        }
        if !moved {
            return;
        }

        self.input_timer = INPUT_DELAY;

        if self.level.zones.leaves_steps(self.world_position) {
            self.map.steps.set(position, StepDirection::from_move(dx, dy));
        }

        if self.map.flowers.take(ahead).is_some() {
            self.jump_timer = FLOWER_RECHARGE;
        }

        self.screen_position = self.screen_position.offset(dx, dy);

        // scroll the view along when the player gets close to an edge
        let scroll = match (dx, dy) {
            (1, 0) if self.screen_position.x == SCROLL_HIGH => Some((1, 0)),
            (-1, 0) if self.screen_position.x == SCROLL_LOW => Some((-1, 0)),
            (0, 1) if self.screen_position.y == SCROLL_HIGH => Some((0, 1)),
            (0, -1) if self.screen_position.y == SCROLL_LOW => Some((0, -1)),
            _ => None,
        };
        if let Some((sx, sy)) = scroll {
            self.world_position = self.world_position.offset(sx, sy);
            self.screen_position = self.screen_position.offset(-sx, -sy);
        }
    }

    fn update_jumping(&mut self, delta_time: f32, input: &InputSystem) {
        self.steer_in_air(input);

        self.current_frame = PlayerFrame::take_off(self.jump_frame);
        self.jump_frame += 1;

        if self.camera.zoom < JUMP_ZOOM_MAX {
            self.camera.zoom += ZOOM_SPEED * delta_time / FRAMETIME;
        } else {
            self.state = PlayerState::Falling;
        }
    }

    fn update_falling(&mut self, delta_time: f32, input: &InputSystem) {
        self.steer_in_air(input);

        if self.camera.zoom > 1.0 {
            self.camera.zoom -= (ZOOM_SPEED * delta_time / FRAMETIME).min(self.camera.zoom - 1.0);
            return;
        }
        self.camera.zoom = 1.0;

        let position = self.player_tile();
        if !self.map.is_ground(position) {
            log::debug!("splash at {:?}", position);
            self.state = PlayerState::Drowning;
            return;
        }

        log::debug!("landed at {:?}", position);
        self.current_frame = PlayerFrame::LANDED;
        self.state = PlayerState::Normal;
        if self.level.zones.sinks_on_landing(self.world_position) {
            self.create_sink();
        }
        if self.map.flowers.take(position).is_some() {
            self.jump_timer = FLOWER_RECHARGE;
        }
    }

    /// moves the view (and with it the player) while in the air
    fn steer_in_air(&mut self, input: &InputSystem) {
        let (dx, dy) = controls::air_direction(input);
        self.world_position = self.world_position.offset(dx, dy);
    }

    fn update_drowning(&mut self, delta_time: f32) {
        if self.drown_alpha > DROWN_FADE {
            self.drown_alpha -= DROWN_FADE * delta_time / FRAMETIME;
        } else {
            self.drown_alpha = 1.0;
            self.init_game();
        }
    }

    /// starts sinking the island under the player
    fn create_sink(&mut self) {
        let queue = SinkQueue::for_island(&self.map.ground, self.player_tile());
        self.sink_queues.push(queue);
    }

    /// keeps the player at the same spot on screen while zooming
    fn update_camera(&mut self) {
        let half_width = self.camera.viewport.x / 2.0;
        let half_height = self.camera.viewport.y / 2.0;
        let center_x = half_width / TILE_SIZE - 0.5;
        let center_y = half_height / TILE_SIZE - 0.5;
        let zoom_shift = TILE_SIZE * (self.camera.zoom - 1.0);

        self.camera.position = glm::vec2(
            half_width - (self.screen_position.x as f32 - center_x) * zoom_shift
                + self.world_position.x as f32 * TILE_SIZE,
            half_height - (self.screen_position.y as f32 - center_y) * zoom_shift
                + self.world_position.y as f32 * TILE_SIZE,
        );
    }

    /// puts the visible part of the map and the player into the frame
    pub fn draw(&self, frame: &mut Frame) {
        frame.clear_color = WATER_COLOR;
        frame.camera = self.camera;

        let (min, max) = self.camera.visible_bounds();
        let min = TilePos::new(
            (min.x / TILE_SIZE).floor() as i32,
            (min.y / TILE_SIZE).floor() as i32,
        );
        let max = TilePos::new(
            (max.x / TILE_SIZE).floor() as i32,
            (max.y / TILE_SIZE).floor() as i32,
        );

        for (pos, ground) in self.map.ground.tiles_in(min, max) {
            let color = match ground {
                Ground::Sand => SAND_COLOR,
                Ground::Grass => GRASS_COLOR,
            };
            frame.push_world(tile_quad(pos, 0.0, color));
        }
        for (pos, step) in self.map.steps.tiles_in(min, max) {
            frame.push_world(step_quad(pos, step));
        }
        for (pos, _) in self.map.flowers.tiles_in(min, max) {
            frame.push_world(tile_quad(pos, 10.0, FLOWER_COLOR));
        }
        for (pos, _) in self.map.boxes.tiles_in(min, max) {
            frame.push_world(tile_quad(pos, 3.0, CRATE_COLOR));
        }

        frame.push_screen(Quad::new(
            self.screen_position.x as f32 * TILE_SIZE,
            self.screen_position.y as f32 * TILE_SIZE,
            TILE_SIZE,
            TILE_SIZE,
            self.current_frame.tint().with_alpha(self.drown_alpha),
        ));
    }
}

/// a tile sized quad shrunk by ``inset`` pixels on every side
fn tile_quad(pos: TilePos, inset: f32, color: Color32) -> Quad {
    Quad::new(
        pos.x as f32 * TILE_SIZE + inset,
        pos.y as f32 * TILE_SIZE + inset,
        TILE_SIZE - 2.0 * inset,
        TILE_SIZE - 2.0 * inset,
        color,
    )
}

/// a small mark on the side of the tile the player walked off to
fn step_quad(pos: TilePos, step: StepDirection) -> Quad {
    let (ox, oy) = match step {
        StepDirection::Left => (-8.0, 0.0),
        StepDirection::Right => (8.0, 0.0),
        StepDirection::Up => (0.0, 8.0),
        StepDirection::Down => (0.0, -8.0),
    };
    let size = 8.0;
    Quad::new(
        pos.x as f32 * TILE_SIZE + (TILE_SIZE - size) / 2.0 + ox,
        pos.y as f32 * TILE_SIZE + (TILE_SIZE - size) / 2.0 + oy,
        size,
        size,
        STEP_COLOR,
    )
}
