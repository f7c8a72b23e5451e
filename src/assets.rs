//! Dice Face Textures
//!
//! All six faces are loaded once at startup. A face whose image is missing
//! is logged and drawn procedurally instead, so a broken asset folder never
//! stops the frame loop.

use crate::config::GameConfig;
use sdl2::image::LoadTexture;
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::{Canvas, Texture, TextureCreator};
use sdl2::video::{Window, WindowContext};

/// Edge length of a placeholder die in pixels
pub const PLACEHOLDER_SIZE: u32 = 64;

const PIP_SIZE: u32 = 10;

/// Pip centers on a 3x3 grid (column, row), for faces 1-6
pub fn pip_layout(face: u8) -> &'static [(i32, i32)] {
    match face {
        1 => &[(1, 1)],
        2 => &[(0, 0), (2, 2)],
        3 => &[(0, 0), (1, 1), (2, 2)],
        4 => &[(0, 0), (2, 0), (0, 2), (2, 2)],
        5 => &[(0, 0), (2, 0), (1, 1), (0, 2), (2, 2)],
        6 => &[(0, 0), (2, 0), (0, 1), (2, 1), (0, 2), (2, 2)],
        _ => &[],
    }
}

/// Screen rectangles for the pips of a placeholder die at (x, y)
pub fn pip_rects(face: u8, x: i32, y: i32) -> Vec<Rect> {
    let cell = (PLACEHOLDER_SIZE / 4) as i32;
    let half_pip = (PIP_SIZE / 2) as i32;
    pip_layout(face)
        .iter()
        .map(|&(col, row)| {
            Rect::new(
                x + cell * (col + 1) - half_pip,
                y + cell * (row + 1) - half_pip,
                PIP_SIZE,
                PIP_SIZE,
            )
        })
        .collect()
}

/// Texture cache for the six dice faces
pub struct DiceTextures<'a> {
    faces: [Option<Texture<'a>>; 6],
}

impl<'a> DiceTextures<'a> {
    pub fn load(texture_creator: &'a TextureCreator<WindowContext>, config: &GameConfig) -> Self {
        let faces = std::array::from_fn(|i| {
            let path = config.dice_image_path(i as u8 + 1);
            match texture_creator.load_texture(&path) {
                Ok(texture) => Some(texture),
                Err(e) => {
                    log::warn!("Failed to load {}: {} (using placeholder)", path.display(), e);
                    None
                }
            }
        });

        let loaded = DiceTextures { faces };
        log::info!("Loaded {}/6 dice textures", loaded.loaded_count());
        loaded
    }

    pub fn loaded_count(&self) -> usize {
        self.faces.iter().filter(|face| face.is_some()).count()
    }

    /// Draws `face` with its top-left corner at (x, y)
    pub fn draw(&self, canvas: &mut Canvas<Window>, face: u8, x: i32, y: i32) -> Result<(), String> {
        let texture = match face {
            1..=6 => self.faces[face as usize - 1].as_ref(),
            _ => return Err(format!("Invalid die face: {}", face)),
        };

        match texture {
            Some(texture) => {
                let query = texture.query();
                canvas.copy(texture, None, Rect::new(x, y, query.width, query.height))
            }
            None => draw_placeholder_die(canvas, face, x, y),
        }
    }
}

/// White die with black border and pips
fn draw_placeholder_die(canvas: &mut Canvas<Window>, face: u8, x: i32, y: i32) -> Result<(), String> {
    let body = Rect::new(x, y, PLACEHOLDER_SIZE, PLACEHOLDER_SIZE);
    canvas.set_draw_color(Color::RGB(255, 255, 255));
    canvas.fill_rect(body)?;
    canvas.set_draw_color(Color::RGB(0, 0, 0));
    canvas.draw_rect(body)?;
    canvas.fill_rects(&pip_rects(face, x, y))
}
