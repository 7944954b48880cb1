use island_happened::game::game_screen::{GameScreen, PlayerState};
use island_happened::game::map_loader::MapData;
use island_happened::game::player::PlayerFrame;
use island_happened::game::tile_map::{StepDirection, TilePos};
use island_happened::systems::input_system::InputSystem;
use island_happened::utils::constants::FRAMETIME;
use island_happened::winit::keyboard::KeyCode;

/// longer than the input delay, so every second frame moves the player
const SLOW_FRAME: f32 = 0.15;

struct LevelBuilder {
    tiles: Vec<Vec<char>>,
    spawn: (i32, i32),
    sink_after: i32,
}

impl LevelBuilder {
    /// an all water map
    fn new(width: usize, height: usize) -> Self {
        Self {
            tiles: vec![vec!['~'; width]; height],
            spawn: (0, 0),
            sink_after: -1000,
        }
    }

    /// a sand island covering everything but a one tile border
    fn island(width: usize, height: usize) -> Self {
        let mut level = Self::new(width, height);
        level.fill((1, 1), (width as i32 - 2, height as i32 - 2), '.');
        level
    }

    fn fill(&mut self, min: (i32, i32), max: (i32, i32), symbol: char) {
        for y in min.1..=max.1 {
            for x in min.0..=max.0 {
                self.put(x, y, symbol);
            }
        }
    }

    fn put(&mut self, x: i32, y: i32, symbol: char) {
        self.tiles[y as usize][x as usize] = symbol;
    }

    /// the player starts on this tile with the usual screen position
    fn spawn(mut self, x: i32, y: i32) -> Self {
        self.spawn = (x, y);
        self
    }

    fn without_landing_sinks(mut self) -> Self {
        self.sink_after = 1000;
        self
    }

    fn build(&self) -> MapData {
        let mut source = format!(
            "name: test\nspawn: {{ screen: [10, 9], world: [{}, {}] }}\n",
            self.spawn.0 - 10,
            self.spawn.1 - 9
        );
        source.push_str(&format!(
            "zones: {{ steps_after: [-1000, -1000], sink_after: [{0}, {0}], sink_before_y: 1000 }}\nrows:\n",
            self.sink_after
        ));
        for row in self.tiles.iter().rev() {
            source.push_str(&format!("  - '{}'\n", row.iter().collect::<String>()));
        }
        MapData::from_yaml(&source).unwrap()
    }
}

/// runs frames the way the engine does, clearing fresh key presses after each one
fn run(screen: &mut GameScreen, input: &mut InputSystem, frames: usize, delta_time: f32) {
    for _ in 0..frames {
        screen.update(delta_time, input);
        input.end_frame();
    }
}

/// runs frames until the state changes, returns the number of frames it took
fn run_until_state_changes(screen: &mut GameScreen, input: &mut InputSystem, limit: usize) -> usize {
    let start = screen.state();
    for frame in 1..=limit {
        screen.update(FRAMETIME, input);
        input.end_frame();
        if screen.state() != start {
            return frame;
        }
    }
    panic!("still {:?} after {} frames", start, limit);
}

#[test]
fn walking_leaves_footprints() {
    let mut screen = GameScreen::new(LevelBuilder::island(24, 24).spawn(12, 12).build());
    let mut input = InputSystem::new();
    assert_eq!(screen.player_tile(), TilePos::new(12, 12));

    input.press(KeyCode::ArrowRight);
    run(&mut screen, &mut input, 2, SLOW_FRAME);
    assert_eq!(screen.player_tile(), TilePos::new(13, 12));
    assert_eq!(
        screen.map().steps.get(TilePos::new(12, 12)),
        Some(StepDirection::Right)
    );

    input.release(KeyCode::ArrowRight);
    input.press(KeyCode::ArrowUp);
    run(&mut screen, &mut input, 2, SLOW_FRAME);
    assert_eq!(screen.player_tile(), TilePos::new(13, 13));
    assert_eq!(
        screen.map().steps.get(TilePos::new(13, 12)),
        Some(StepDirection::Up)
    );

    // two arrows at once do nothing on the ground
    input.press(KeyCode::ArrowLeft);
    run(&mut screen, &mut input, 4, SLOW_FRAME);
    assert_eq!(screen.player_tile(), TilePos::new(13, 13));
}

#[test]
fn water_blocks_walking() {
    let mut level = LevelBuilder::new(8, 8);
    level.fill((2, 2), (4, 4), '.');
    let mut screen = GameScreen::new(level.spawn(4, 3).build());
    let mut input = InputSystem::new();

    input.press(KeyCode::ArrowRight);
    run(&mut screen, &mut input, 4, SLOW_FRAME);
    assert_eq!(screen.player_tile(), TilePos::new(4, 3));
    assert_eq!(screen.state(), PlayerState::Normal);
}

#[test]
fn crates_are_pushed_and_flowers_picked() {
    let mut level = LevelBuilder::island(30, 30).spawn(12, 12);
    level.put(13, 12, 'B');
    level.put(15, 12, 'F');
    level.put(17, 12, '~');
    let mut screen = GameScreen::new(level.build());
    let mut input = InputSystem::new();
    input.press(KeyCode::ArrowRight);

    run(&mut screen, &mut input, 2, SLOW_FRAME);
    assert_eq!(screen.player_tile(), TilePos::new(13, 12));
    assert!(screen.map().boxes.is_set(TilePos::new(14, 12)));
    assert!(!screen.map().boxes.is_set(TilePos::new(13, 12)));

    run(&mut screen, &mut input, 2, SLOW_FRAME);
    // the crate rolls over the flower without picking it
    assert!(screen.map().boxes.is_set(TilePos::new(15, 12)));
    assert!(screen.map().flowers.is_set(TilePos::new(15, 12)));

    run(&mut screen, &mut input, 2, SLOW_FRAME);
    assert_eq!(screen.player_tile(), TilePos::new(15, 12));
    assert!(!screen.map().flowers.is_set(TilePos::new(15, 12)));
    assert_eq!(screen.jump_timer(), 0.01);

    // water behind the crate, nothing moves
    run(&mut screen, &mut input, 2, SLOW_FRAME);
    assert_eq!(screen.player_tile(), TilePos::new(15, 12));
    assert!(screen.map().boxes.is_set(TilePos::new(16, 12)));
}

#[test]
fn view_scrolls_near_the_edge() {
    let mut screen = GameScreen::new(LevelBuilder::island(30, 30).spawn(12, 12).build());
    let mut input = InputSystem::new();
    let world_before = screen.world_position();

    input.press(KeyCode::ArrowRight);
    run(&mut screen, &mut input, 14, SLOW_FRAME);
    assert_eq!(screen.player_tile(), TilePos::new(19, 12));
    assert_eq!(screen.screen_position(), TilePos::new(16, 9));
    assert_eq!(screen.world_position(), world_before.offset(1, 0));
}

#[test]
fn jump_zooms_out_and_lands() {
    let mut screen = GameScreen::new(LevelBuilder::island(30, 30).spawn(15, 15).build());
    let mut input = InputSystem::new();
    assert_eq!(screen.sink_queues().len(), 1);

    input.press(KeyCode::Space);
    run(&mut screen, &mut input, 1, FRAMETIME);
    input.release(KeyCode::Space);
    assert_eq!(screen.state(), PlayerState::Jumping);

    run_until_state_changes(&mut screen, &mut input, 200);
    assert_eq!(screen.state(), PlayerState::Falling);
    assert!(screen.camera().zoom >= 13.0);
    assert_eq!(screen.current_frame(), PlayerFrame::AIRBORNE);

    run_until_state_changes(&mut screen, &mut input, 200);
    assert_eq!(screen.state(), PlayerState::Normal);
    assert_eq!(screen.camera().zoom, 1.0);
    assert_eq!(screen.player_tile(), TilePos::new(15, 15));
    assert_eq!(screen.current_frame(), PlayerFrame::LANDED);
    // landing starts a second sink on the same island
    assert_eq!(screen.sink_queues().len(), 2);

    // the jump has to recharge first
    input.press(KeyCode::Space);
    run(&mut screen, &mut input, 1, FRAMETIME);
    assert_eq!(screen.state(), PlayerState::Normal);
    assert!(screen.jump_timer() < 8.0);
}

#[test]
fn landing_outside_the_sink_zone_keeps_the_island() {
    let level = LevelBuilder::island(30, 30)
        .spawn(15, 15)
        .without_landing_sinks()
        .build();
    let mut screen = GameScreen::new(level);
    let mut input = InputSystem::new();

    input.press(KeyCode::Space);
    run(&mut screen, &mut input, 1, FRAMETIME);
    input.release(KeyCode::Space);
    run_until_state_changes(&mut screen, &mut input, 200);
    run_until_state_changes(&mut screen, &mut input, 200);
    assert_eq!(screen.state(), PlayerState::Normal);
    assert_eq!(screen.sink_queues().len(), 1);
}

#[test]
fn landing_on_a_flower_recharges_the_jump() {
    let mut level = LevelBuilder::island(30, 30).spawn(15, 15);
    level.put(15, 15, 'F');
    let mut screen = GameScreen::new(level.build());
    let mut input = InputSystem::new();
    assert!(screen.map().flowers.is_set(TilePos::new(15, 15)));

    input.press(KeyCode::Space);
    run(&mut screen, &mut input, 1, FRAMETIME);
    input.release(KeyCode::Space);
    run_until_state_changes(&mut screen, &mut input, 200);
    run_until_state_changes(&mut screen, &mut input, 200);

    assert_eq!(screen.state(), PlayerState::Normal);
    assert_eq!(screen.player_tile(), TilePos::new(15, 15));
    assert!(!screen.map().flowers.is_set(TilePos::new(15, 15)));
    assert_eq!(screen.jump_timer(), 0.01);
}

#[test]
fn steering_into_the_sea_drowns_and_restarts() {
    let mut level = LevelBuilder::new(40, 40);
    level.fill((10, 10), (14, 14), ',');
    let mut screen = GameScreen::new(level.spawn(12, 12).build());
    let mut input = InputSystem::new();

    input.press(KeyCode::Space);
    run(&mut screen, &mut input, 1, FRAMETIME);
    input.release(KeyCode::Space);
    input.press(KeyCode::ArrowRight);

    run_until_state_changes(&mut screen, &mut input, 200);
    run_until_state_changes(&mut screen, &mut input, 200);
    assert_eq!(screen.state(), PlayerState::Drowning);
    assert!(screen.player_tile().x > 14);

    input.release(KeyCode::ArrowRight);
    run(&mut screen, &mut input, 10, FRAMETIME);
    assert!(screen.drown_alpha() < 1.0);

    run_until_state_changes(&mut screen, &mut input, 200);
    assert_eq!(screen.state(), PlayerState::Normal);
    assert_eq!(screen.player_tile(), TilePos::new(12, 12));
    assert_eq!(screen.drown_alpha(), 1.0);
    assert_eq!(screen.camera().zoom, 1.0);
    assert!(screen.map().is_ground(TilePos::new(10, 10)));
    assert_eq!(screen.sink_queues().len(), 1);
}

#[test]
fn escape_restarts_the_level() {
    let mut screen = GameScreen::new(LevelBuilder::island(24, 24).spawn(12, 12).build());
    let mut input = InputSystem::new();

    input.press(KeyCode::ArrowDown);
    run(&mut screen, &mut input, 2, SLOW_FRAME);
    assert_eq!(screen.player_tile(), TilePos::new(12, 11));
    input.release(KeyCode::ArrowDown);

    input.press(KeyCode::Escape);
    run(&mut screen, &mut input, 1, SLOW_FRAME);
    assert_eq!(screen.player_tile(), TilePos::new(12, 12));
    assert!(!screen.map().steps.is_set(TilePos::new(12, 12)));
}

#[test]
fn sinking_ground_drowns_the_player() {
    let mut level = LevelBuilder::new(10, 10);
    level.put(5, 5, '.');
    let mut screen = GameScreen::new(level.spawn(5, 5).build());
    let mut input = InputSystem::new();

    for _ in 0..20 {
        run(&mut screen, &mut input, 1, SLOW_FRAME);
        if screen.state() == PlayerState::Drowning {
            break;
        }
    }
    assert_eq!(screen.state(), PlayerState::Drowning);
    assert!(screen.sink_queues().is_empty());
    assert!(!screen.map().is_ground(TilePos::new(5, 5)));
    // the pristine level is untouched
    assert!(screen.level().tiles.is_ground(TilePos::new(5, 5)));
}
