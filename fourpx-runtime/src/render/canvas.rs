use palette::Srgb;

use super::{DrawHandle, Drawable, Pixel, Surface};
use crate::graphics::{to_hex, to_pixel};
use crate::layout::Position;

/// Keeps every column drawn so far, so the window can be repainted at any time.
/// Pixels are stored in the `0x00RRGGBB` layout of the frame buffer.
pub struct Canvas {
    width: Pixel,
    height: Pixel,
    pixels: Vec<u32>,
}
impl Canvas {
    pub fn new(width: Pixel, height: Pixel) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width * height],
        }
    }

    /// `None` outside the canvas
    pub fn pixel(&self, position: Position) -> Option<u32> {
        if position.x >= self.width || position.y >= self.height {
            return None;
        }
        Some(self.pixels[position.y * self.width + position.x])
    }
}
impl Surface for Canvas {
    fn draw_column(&mut self, position: Position, colors: &[Srgb<u8>]) {
        for (offset, color) in colors.iter().enumerate() {
            let (x, y) = (position.x, position.y + offset);
            if x >= self.width || y >= self.height {
                log::warn!("pixel ({x}, {y}) is off the canvas, dropping {}", to_hex(*color));
                continue;
            }
            self.pixels[y * self.width + x] = to_pixel(*color);
        }
    }

    fn clear(&mut self) {
        self.pixels.fill(0);
    }
}
impl Drawable for Canvas {
    fn draw_at(&self, handle: &mut DrawHandle, position: Position) {
        (0..self.pixels.len()).for_each(|index| {
            handle.set(
                Position {
                    x: position.x + index % self.width,
                    y: position.y + index / self.width,
                },
                self.pixels[index],
            );
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: Srgb<u8> = Srgb::new(0xFF, 0xFF, 0xFF);
    const RED: Srgb<u8> = Srgb::new(0xFF, 0x00, 0x00);

    #[test]
    fn columns_run_downwards() {
        let mut canvas = Canvas::new(4, 4);
        canvas.draw_column(Position { x: 1, y: 1 }, &[WHITE, RED]);

        assert_eq!(canvas.pixel(Position { x: 1, y: 1 }), Some(0xFFFFFF));
        assert_eq!(canvas.pixel(Position { x: 1, y: 2 }), Some(0xFF0000));
        assert_eq!(canvas.pixel(Position { x: 1, y: 3 }), Some(0));
        assert_eq!(canvas.pixel(Position { x: 4, y: 0 }), None);
    }

    #[test]
    fn off_canvas_pixels_are_dropped() {
        let mut canvas = Canvas::new(2, 2);
        canvas.draw_column(Position { x: 1, y: 1 }, &[RED, RED, RED]);
        canvas.draw_column(Position { x: 5, y: 0 }, &[RED]);
        assert_eq!(canvas.pixel(Position { x: 1, y: 1 }), Some(0xFF0000));
        assert_eq!(canvas.pixels.iter().filter(|pixel| **pixel != 0).count(), 1);
    }

    #[test]
    fn presents_scaled() {
        let mut canvas = Canvas::new(2, 1);
        canvas.draw_column(Position { x: 1, y: 0 }, &[WHITE]);

        let mut frame = vec![0u32; 4 * 2];
        canvas.draw_at(
            &mut DrawHandle {
                buffer: &mut frame,
                width: 4,
                scale: 2,
            },
            Position { x: 0, y: 0 },
        );
        assert_eq!(frame, vec![0, 0, 0xFFFFFF, 0xFFFFFF, 0, 0, 0xFFFFFF, 0xFFFFFF]);
    }
}
