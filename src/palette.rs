//! Neon colour palette shared by the simulation (particle and explosion
//! tints) and the rendering layer.

use macroquad::color::Color;

pub const NEON_BLUE: Color = Color::new(0.196, 0.784, 1.0, 1.0);
pub const NEON_RED: Color = Color::new(1.0, 0.196, 0.314, 1.0);
pub const NEON_GREEN: Color = Color::new(0.196, 1.0, 0.392, 1.0);
pub const NEON_ORANGE: Color = Color::new(1.0, 0.706, 0.196, 1.0);
pub const NEON_PURPLE: Color = Color::new(0.706, 0.196, 1.0, 1.0);
pub const NEON_CYAN: Color = Color::new(0.0, 1.0, 1.0, 1.0);
pub const NEON_YELLOW: Color = Color::new(1.0, 1.0, 0.0, 1.0);

/// Night-sky fill used when the background texture is missing.
pub const NIGHT_SKY: Color = Color::new(0.078, 0.078, 0.157, 1.0);
