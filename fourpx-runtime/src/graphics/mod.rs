pub mod glyph;

use palette::Srgb;

/// A single dot of a glyph, and the value of a single color channel.
/// Only binary intensities exist; there is no anti-aliasing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intensity {
    Off,
    On,
}
impl Intensity {
    /// The display value of this intensity for one 8-bit color channel
    pub fn channel_value(self) -> u8 {
        match self {
            Intensity::Off => u8::MIN,
            Intensity::On => u8::MAX,
        }
    }
}
impl From<bool> for Intensity {
    fn from(value: bool) -> Self {
        match value {
            true => Intensity::On,
            false => Intensity::Off,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("channel slot already holds {0:?}")]
pub struct OverwriteError(pub Intensity);

/// The smallest packing unit: one red, green or blue channel of one pixel.
///
/// Write-once; the packing buffer only ever moves forward, so a second write
/// means its fill counter is broken.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChannelSlot(Option<Intensity>);
impl ChannelSlot {
    pub fn write(&mut self, intensity: Intensity) -> Result<(), OverwriteError> {
        match self.0 {
            Some(existing) => Err(OverwriteError(existing)),
            None => {
                self.0 = Some(intensity);
                Ok(())
            }
        }
    }

    /// `None` until written
    pub fn read(&self) -> Option<Intensity> {
        self.0
    }

    /// Unwritten slots display as off
    pub fn as_color_value(&self) -> u8 {
        self.0.unwrap_or(Intensity::Off).channel_value()
    }
}

/// Packs a resolved color into the `0x00RRGGBB` layout the frame buffer expects
pub fn to_pixel(color: Srgb<u8>) -> u32 {
    let (red, green, blue) = color.into_components();
    (red as u32) << 16 | (green as u32) << 8 | blue as u32
}

/// `#RRGGBB`, the way colors are written in diagnostics
pub fn to_hex(color: Srgb<u8>) -> String {
    let (red, green, blue) = color.into_components();
    format!("#{red:02X}{green:02X}{blue:02X}")
}
