/// Chaining buffers together and packing whole glyphs into them
pub mod chain;

use palette::Srgb;

use crate::graphics::{ChannelSlot, Intensity};

/// Slots per group: red, green, blue
pub const CHANNELS: usize = 3;

/// Groups per buffer, i.e. the height of a drawn column in pixels
pub const GROUPS: usize = 4;

/// Slots per buffer
pub const BUFFER_CAPACITY: usize = CHANNELS * GROUPS;

/// Returned when a write finds no free slot; nothing was written.
/// Only ever seen by the chain, which reacts by moving on to its next buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("packing buffer is full")]
pub struct Full;

/// The three channel slots of one pixel, filled red first
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChannelGroup {
    slots: [ChannelSlot; CHANNELS],
    filled: usize,
}
impl ChannelGroup {
    fn push(&mut self, bit: Intensity) -> Result<(), Full> {
        let slot = self.slots.get_mut(self.filled).ok_or(Full)?;
        let written = slot.write(bit);
        debug_assert!(written.is_ok(), "fill counter revisited a slot: {written:?}");
        self.filled += 1;
        Ok(())
    }

    pub fn is_full(&self) -> bool {
        self.filled == CHANNELS
    }

    pub fn slots(&self) -> &[ChannelSlot; CHANNELS] {
        &self.slots
    }

    /// Resolves the group to one display color; unwritten channels are off
    pub fn color(&self) -> Srgb<u8> {
        let [red, green, blue] = self.slots.map(|slot| slot.as_color_value());
        Srgb::new(red, green, blue)
    }
}

/// One pixel column worth of channel slots.
///
/// A buffer belongs to exactly one glyph stream: once it has been drawn and left behind,
/// it is dropped rather than cleared.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackingBuffer {
    groups: [ChannelGroup; GROUPS],
}
impl PackingBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Writes into the earliest slot that has not been written yet
    pub fn write_bit(&mut self, bit: Intensity) -> Result<(), Full> {
        self.groups
            .iter_mut()
            .find(|group| !group.is_full())
            .ok_or(Full)?
            .push(bit)
    }

    /// Writes into the earliest free slot of a single group.
    /// A group index past the end of the buffer behaves like a full group.
    pub fn write_bit_in_group(&mut self, group: usize, bit: Intensity) -> Result<(), Full> {
        self.groups.get_mut(group).ok_or(Full)?.push(bit)
    }

    pub fn is_full(&self) -> bool {
        self.groups.iter().all(ChannelGroup::is_full)
    }

    /// `true` until the first write
    pub fn is_empty(&self) -> bool {
        self.written() == 0
    }

    /// Number of slots written so far
    pub fn written(&self) -> usize {
        self.groups.iter().map(|group| group.filled).sum()
    }

    pub fn groups(&self) -> &[ChannelGroup; GROUPS] {
        &self.groups
    }

    /// Every slot in order, red of the top pixel first
    pub fn slots(&self) -> impl Iterator<Item = &ChannelSlot> + '_ {
        self.groups.iter().flat_map(|group| group.slots.iter())
    }

    /// One color per group, top to bottom
    pub fn colors(&self) -> [Srgb<u8>; GROUPS] {
        self.groups.map(|group| group.color())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Intensity::{Off, On};

    #[test]
    fn fills_strictly_in_order() {
        let mut buffer = PackingBuffer::new();
        assert!(buffer.is_empty());

        for bit in [On, Off, On, On] {
            buffer.write_bit(bit).unwrap();
        }
        let slots: Vec<_> = buffer.slots().map(ChannelSlot::read).collect();
        assert_eq!(&slots[..5], &[Some(On), Some(Off), Some(On), Some(On), None]);
        assert_eq!(buffer.written(), 4);
        assert!(buffer.groups()[0].is_full());
        assert!(!buffer.groups()[1].is_full());
    }

    #[test]
    fn full_buffer_rejects_without_writing() {
        let mut buffer = PackingBuffer::new();
        for _ in 0..BUFFER_CAPACITY {
            buffer.write_bit(On).unwrap();
        }
        assert!(buffer.is_full());

        let before = buffer.clone();
        assert_eq!(buffer.write_bit(Off), Err(Full));
        assert_eq!(buffer, before);
    }

    #[test]
    fn group_writes_stay_in_their_group() {
        let mut buffer = PackingBuffer::new();
        buffer.write_bit_in_group(2, On).unwrap();
        buffer.write_bit_in_group(2, On).unwrap();
        buffer.write_bit_in_group(2, Off).unwrap();
        assert_eq!(buffer.write_bit_in_group(2, On), Err(Full));
        assert_eq!(buffer.write_bit_in_group(GROUPS, On), Err(Full));

        assert!(buffer.groups()[2].is_full());
        assert!(buffer.groups()[0].slots().iter().all(|slot| slot.read().is_none()));

        // Sequential writes pick up the earliest free slot regardless
        buffer.write_bit(On).unwrap();
        assert_eq!(buffer.groups()[0].slots()[0].read(), Some(On));
    }

    #[test]
    fn partial_groups_resolve_unwritten_channels_as_off() {
        let mut buffer = PackingBuffer::new();
        buffer.write_bit(On).unwrap();
        buffer.write_bit(Off).unwrap();
        buffer.write_bit(On).unwrap();
        buffer.write_bit(On).unwrap();

        let colors = buffer.colors();
        assert_eq!(colors[0], Srgb::new(0xFF, 0x00, 0xFF));
        assert_eq!(colors[1], Srgb::new(0xFF, 0x00, 0x00));
        assert_eq!(colors[3], Srgb::new(0x00, 0x00, 0x00));
    }
}
