use crate::encode::chain::Packing;
use crate::layout::Region;
use crate::render::Pixel;

pub const MARGIN: Pixel = 10;

/// Editor settings; [`Config::default`] reproduces the classic 4PX page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub region: Region,

    /// Vertical distance between lines: four pixel rows of glyph plus one of spacing
    pub line_pitch: Pixel,

    /// Spaces typed for a tab
    pub tab_width: usize,

    pub packing: Packing,

    /// Frame buffer pixels per canvas pixel.
    /// Glyphs only read as letters at 1; larger scales show the packed channels.
    pub scale: Pixel,
}
impl Config {
    /// Canvas size needed to hold the region and its margins on all sides
    pub fn canvas_size(&self) -> (Pixel, Pixel) {
        (
            self.region.right + 2 * self.region.left,
            self.region.bottom + 2 * self.region.top,
        )
    }
}
impl Default for Config {
    fn default() -> Self {
        Self {
            region: Region {
                left: MARGIN,
                top: MARGIN,
                right: MARGIN + 105,
                bottom: MARGIN + 920,
            },
            line_pitch: 5,
            tab_width: 4,
            packing: Packing::Sequential,
            scale: 1,
        }
    }
}
