use crate::encode::chain::EncoderOverflow;
use crate::render::Pixel;

/// Everything the editor reports back for a single input event.
/// None of these leave the editor in a half-updated state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EditError {
    #[error("glyph for {character:?} does not fit: {source}")]
    EncoderOverflow {
        character: char,
        source: EncoderOverflow,
    },

    #[error("character {0:?} is not implemented")]
    UnsupportedCharacter(char),

    #[error("ran out of space: no line below y = {y} (bottom is {bottom})")]
    OutOfSpace { y: Pixel, bottom: Pixel },
}
impl EditError {
    /// Whether this should be shown to the user at all.
    /// Unsupported control characters are skipped silently.
    pub fn is_reportable(&self) -> bool {
        match self {
            EditError::UnsupportedCharacter(character) => {
                character.is_ascii_graphic() || character.is_ascii_whitespace()
            }
            _ => true,
        }
    }
}
