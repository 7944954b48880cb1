use crate::rendering::color::Color32;

/// columns of the player sprite sheet
pub const SHEET_COLUMNS: u8 = 5;

/// one cell of the player sprite sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerFrame {
    pub row: u8,
    pub column: u8,
}

impl PlayerFrame {
    pub const fn new(row: u8, column: u8) -> Self {
        Self { row, column }
    }

    /// standing still with a charged jump
    pub const IDLE: Self = Self::new(0, 0);
    /// right after landing, the recharge animation starts here
    pub const LANDED: Self = Self::new(1, 4);
    /// in the air after the take-off frames
    pub const AIRBORNE: Self = Self::new(2, 0);

    /// the frame of the recharge animation for the remaining share of the jump delay
    pub fn recharge(remaining: f32) -> Self {
        const STEPS: [(f32, PlayerFrame); 9] = [
            (0.9, PlayerFrame::new(1, 4)),
            (0.8, PlayerFrame::new(1, 3)),
            (0.7, PlayerFrame::new(1, 2)),
            (0.6, PlayerFrame::new(1, 1)),
            (0.5, PlayerFrame::new(1, 0)),
            (0.4, PlayerFrame::new(0, 4)),
            (0.3, PlayerFrame::new(0, 3)),
            (0.15, PlayerFrame::new(0, 2)),
            (0.05, PlayerFrame::new(0, 1)),
        ];
        STEPS
            .iter()
            .find(|(threshold, _)| remaining > *threshold)
            .map_or(Self::IDLE, |(_, frame)| *frame)
    }

    /// the take-off animation, counted from 1
    pub fn take_off(jump_frame: u32) -> Self {
        match jump_frame {
            1 => Self::new(0, 1),
            2 => Self::new(0, 3),
            3 => Self::new(1, 0),
            4 => Self::new(1, 2),
            _ => Self::AIRBORNE,
        }
    }

    /// position of the frame in the sheet, row by row
    pub fn sheet_index(&self) -> u8 {
        self.row * SHEET_COLUMNS + self.column
    }

    /// flat color standing in for the sprite: dark while recharging, bright when ready or airborne
    pub fn tint(&self) -> Color32 {
        let charge = 1.0 - (self.sheet_index().min(9) as f32 / 9.0);
        match self.row {
            2 => Color32::from_rgb(255, 236, 120),
            _ => Color32::from_rgb(
                (120.0 + 135.0 * charge) as u8,
                (60.0 + 80.0 * charge) as u8,
                (40.0 + 20.0 * charge) as u8,
            ),
        }
    }
}
