/// Draw context shared by all screens
///
/// Screens never touch SDL2 directly. They draw through the [`Surface`]
/// trait, which the frame loop implements with [`SdlSurface`] (window
/// canvas plus the preloaded dice textures) and tests implement with a
/// recording fake.
///
/// # Usage Example
///
/// ```rust
/// let mut surface = SdlSurface::new(&mut canvas, &dice_textures);
/// surface.clear(background);
/// screen_manager.draw(&mut surface)?;
/// canvas.present();
/// ```
use crate::assets::DiceTextures;
use crate::text::{draw_simple_text, text_width};
use sdl2::pixels::Color;
use sdl2::render::Canvas;
use sdl2::video::Window;

/// Color and size of a line of text
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub color: Color,
    /// Bitmap font scale (1 = 5x7 pixel glyphs)
    pub scale: u32,
}

impl TextStyle {
    pub fn new(color: Color, scale: u32) -> Self {
        TextStyle { color, scale }
    }
}

pub trait Surface {
    /// Logical size in pixels
    fn size(&self) -> (u32, u32);

    /// Fill the whole surface
    fn clear(&mut self, color: Color);

    /// Draw text with its top-left corner at (x, y)
    fn draw_text(&mut self, text: &str, x: i32, y: i32, style: TextStyle) -> Result<(), String>;

    /// Draw a die showing `face` with its top-left corner at (x, y)
    fn draw_die(&mut self, face: u8, x: i32, y: i32) -> Result<(), String>;

    fn width(&self) -> u32 {
        self.size().0
    }
}

/// X coordinate that centers `text` horizontally on `surface`
pub fn centered_x(surface: &dyn Surface, text: &str, scale: u32) -> i32 {
    (surface.width() as i32 - text_width(text, scale) as i32) / 2
}

/// SDL2 implementation of [`Surface`]
pub struct SdlSurface<'c, 't> {
    canvas: &'c mut Canvas<Window>,
    dice: &'c DiceTextures<'t>,
}

impl<'c, 't> SdlSurface<'c, 't> {
    pub fn new(canvas: &'c mut Canvas<Window>, dice: &'c DiceTextures<'t>) -> Self {
        SdlSurface { canvas, dice }
    }
}

impl Surface for SdlSurface<'_, '_> {
    fn size(&self) -> (u32, u32) {
        // Use logical size (game coordinates), not physical window size
        match self.canvas.logical_size() {
            (0, 0) => self.canvas.window().size(),
            size => size,
        }
    }

    fn clear(&mut self, color: Color) {
        self.canvas.set_draw_color(color);
        self.canvas.clear();
    }

    fn draw_text(&mut self, text: &str, x: i32, y: i32, style: TextStyle) -> Result<(), String> {
        draw_simple_text(self.canvas, text, x, y, style.color, style.scale)
    }

    fn draw_die(&mut self, face: u8, x: i32, y: i32) -> Result<(), String> {
        self.dice.draw(self.canvas, face, x, y)
    }
}
