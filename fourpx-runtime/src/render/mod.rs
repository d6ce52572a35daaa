/// The in-memory pixel store that glyph columns are drawn onto.
pub mod canvas;

use palette::Srgb;

use crate::layout::Position;

/// Simple structure that encapsulates the frame buffer and relevant metadata.
/// Render methods are implemented to take this structure, to keep them separate from the event loop.
///
/// Every logical pixel covers a `scale` × `scale` block of the frame buffer;
/// 4PX columns are a single pixel wide, which is hard to see otherwise.
pub struct DrawHandle<'a> {
    pub buffer: &'a mut [u32],
    pub width: usize,
    pub scale: Pixel,
}
impl<'a> DrawHandle<'a> {
    #[inline]
    fn index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    fn height(&self) -> usize {
        self.buffer.len() / self.width.max(1)
    }

    /// Fills the block for a logical pixel, clipping at the frame edges
    fn set(&mut self, position: Position, value: u32) {
        let left = position.x * self.scale;
        let top = position.y * self.scale;
        let right = (left + self.scale).min(self.width);
        let bottom = (top + self.scale).min(self.height());

        for y in top..bottom {
            for x in left..right {
                let index = self.index(x, y);
                self.buffer[index] = value;
            }
        }
    }

    pub fn clear(&mut self, value: u32) {
        self.buffer.fill(value);
    }
}

/// We're only dealing with integer pixels for now
pub type Pixel = usize;

pub trait Drawable {
    fn draw_at(&self, handle: &mut DrawHandle, position: Position);
}

/// Anything glyph columns can be drawn onto
pub trait Surface {
    /// Draws one packed buffer as a column of pixels, top to bottom, starting at `position`
    fn draw_column(&mut self, position: Position, colors: &[Srgb<u8>]);

    /// Wipes everything drawn so far
    fn clear(&mut self);
}
