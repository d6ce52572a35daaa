use crate::encode::{
    chain::{Packed, Touched},
    PackingBuffer,
};
use crate::render::Pixel;

/// Position from the top left of the canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub x: Pixel,
    pub y: Pixel,
}

/// The area text may be written in.
/// `left`/`top` double as the margins the cursor returns to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub left: Pixel,
    pub top: Pixel,
    pub right: Pixel,
    pub bottom: Pixel,
}
impl Region {
    pub fn origin(&self) -> Position {
        Position {
            x: self.left,
            y: self.top,
        }
    }

    pub fn fits_x(&self, x: Pixel) -> bool {
        (self.left..=self.right).contains(&x)
    }
    pub fn fits_y(&self, y: Pixel) -> bool {
        (self.top..=self.bottom).contains(&y)
    }
}

/// How far the cursor moves after a glyph has been drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    One,
    Two,
}
impl Advance {
    pub fn columns(self) -> Pixel {
        match self {
            Advance::One => 1,
            Advance::Two => 2,
        }
    }
}
impl From<Touched> for Advance {
    fn from(touched: Touched) -> Self {
        match touched {
            Touched::Two => Advance::One,
            Touched::Three => Advance::Two,
        }
    }
}

/// Where the next glyph goes, and the partially filled buffer it has to start from.
///
/// This is the only state carried from one glyph to the next.
/// The buffer after `carry` is always fresh, so it isn't stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pen {
    pub position: Position,
    pub carry: PackingBuffer,
}
impl Pen {
    pub fn at(position: Position) -> Self {
        Self {
            position,
            carry: PackingBuffer::new(),
        }
    }

    /// Where the two drawn buffers of a glyph go: the first at the cursor, the second right after it
    pub fn columns(&self) -> [Position; 2] {
        let Position { x, y } = self.position;
        [Position { x, y }, Position { x: x + 1, y }]
    }

    /// Moves past a glyph that has just been drawn.
    ///
    /// The column drawn at `x + 1` becomes the next glyph's first column,
    /// so its buffer is carried along and keeps filling up.
    /// If the glyph needed the spare, the spare becomes the next first column at `x + 2` instead,
    /// and is drawn for the first time with the next glyph.
    pub fn advance(&mut self, packed: Packed) -> Advance {
        let advance = Advance::from(packed.touched);
        self.carry = match packed.touched {
            Touched::Two => packed.second,
            Touched::Three => packed.spare,
        };
        self.position.x += advance.columns();

        log::debug!(
            "advanced by {} to ({}, {}), carrying {} slots",
            advance.columns(),
            self.position.x,
            self.position.y,
            self.carry.written()
        );
        advance
    }

    /// Moves to the start of the next line.
    /// Returns `false`, leaving the pen where it was, when that line would fall outside `region`.
    pub fn newline(&mut self, region: &Region, pitch: Pixel) -> bool {
        let y = self.position.y + pitch;
        if !region.fits_y(y) {
            return false;
        }

        // Nothing carries across lines
        *self = Pen::at(Position { x: region.left, y });
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encode::chain::{pack_glyph, Packing};
    use crate::graphics::{glyph::GlyphEncoding, ChannelSlot, Intensity};

    const REGION: Region = Region {
        left: 10,
        top: 10,
        right: 115,
        bottom: 930,
    };

    fn solid(rows: usize, width: usize) -> GlyphEncoding {
        GlyphEncoding::new(vec![vec![Intensity::On; width]; rows])
    }

    #[test]
    fn two_buffers_advance_one_column() {
        let mut pen = Pen::at(REGION.origin());
        let packed = pack_glyph(&pen.carry, &solid(3, 3), Packing::Sequential).unwrap();
        let second = packed.second.clone();

        assert_eq!(pen.advance(packed), Advance::One);
        assert_eq!(pen.position, Position { x: 11, y: 10 });
        assert_eq!(pen.carry, second);
        assert!(pen.carry.is_empty());
    }

    #[test]
    fn partially_filled_second_buffer_keeps_filling() {
        let mut pen = Pen::at(REGION.origin());
        // 16 bits: 12 in the first buffer, 4 in the second
        let packed = pack_glyph(&pen.carry, &solid(4, 3), Packing::Sequential).unwrap();
        pen.advance(packed);
        assert_eq!(pen.carry.written(), 4);
    }

    #[test]
    fn spare_is_carried_forward() {
        let mut pen = Pen::at(REGION.origin());
        let packed = pack_glyph(&pen.carry, &solid(5, 5), Packing::Sequential).unwrap();
        let spare: Vec<_> = packed.spare.slots().map(ChannelSlot::read).collect();

        assert_eq!(pen.advance(packed), Advance::Two);
        assert_eq!(pen.position, Position { x: 12, y: 10 });

        let carried: Vec<_> = pen.carry.slots().map(ChannelSlot::read).collect();
        assert_eq!(carried, spare);
        assert_eq!(pen.carry.written(), 6);
    }

    #[test]
    fn newline_resets_and_drops_the_carry() {
        let mut pen = Pen::at(Position { x: 40, y: 10 });
        pen.carry.write_bit(Intensity::On).unwrap();

        assert!(pen.newline(&REGION, 5));
        assert_eq!(pen, Pen::at(Position { x: 10, y: 15 }));
    }

    #[test]
    fn newline_past_the_bottom_is_refused() {
        let mut pen = Pen::at(Position { x: 40, y: 930 });
        pen.carry.write_bit(Intensity::On).unwrap();
        let before = pen.clone();

        assert!(!pen.newline(&REGION, 5));
        assert_eq!(pen, before);

        let mut pen = Pen::at(Position { x: 40, y: 925 });
        assert!(pen.newline(&REGION, 5));
        assert_eq!(pen.position.y, 930);
    }
}
