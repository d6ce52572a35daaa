use crate::config::Config;
use crate::encode::chain::pack_glyph;
use crate::error::EditError;
use crate::graphics::glyph::GlyphCatalog;
use crate::layout::{Advance, Pen, Region};
use crate::render::Surface;

/// Turns typed characters into glyph columns on a [`Surface`].
///
/// Owns the pen (cursor plus carried buffer), which only changes once a character has been
/// packed and drawn successfully; every error path leaves it exactly as it was.
pub struct Editor<C, S> {
    config: Config,
    catalog: C,
    surface: S,
    pen: Pen,

    /// Set once a line break hits the bottom of the region;
    /// cleared by [`Editor::reset`] or a larger [`Editor::set_region`]
    out_of_space: bool,
}

impl<C: GlyphCatalog, S: Surface> Editor<C, S> {
    pub fn new(config: Config, catalog: C, surface: S) -> Self {
        Self {
            pen: Pen::at(config.region.origin()),
            config,
            catalog,
            surface,
            out_of_space: false,
        }
    }

    pub fn pen(&self) -> &Pen {
        &self.pen
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    fn out_of_space_error(&self) -> EditError {
        EditError::OutOfSpace {
            y: self.pen.position.y,
            bottom: self.config.region.bottom,
        }
    }

    /// Packs and draws one character, then moves the cursor past it
    pub fn on_char(&mut self, character: char) -> Result<Advance, EditError> {
        if self.out_of_space {
            return Err(self.out_of_space_error());
        }

        let glyph = self
            .catalog
            .lookup(character)
            .ok_or(EditError::UnsupportedCharacter(character))?;
        let packed = pack_glyph(&self.pen.carry, glyph, self.config.packing)
            .map_err(|source| EditError::EncoderOverflow { character, source })?;

        let [first, second] = self.pen.columns();
        if !self.config.region.fits_x(second.x) {
            log::warn!("{character:?} at x = {} is past the right edge", second.x);
        }
        self.surface.draw_column(first, &packed.first.colors());
        self.surface.draw_column(second, &packed.second.colors());

        Ok(self.pen.advance(packed))
    }

    pub fn on_enter(&mut self) -> Result<(), EditError> {
        if self.out_of_space || !self.pen.newline(&self.config.region, self.config.line_pitch) {
            self.out_of_space = true;
            return Err(self.out_of_space_error());
        }
        Ok(())
    }

    /// A tab is just a few spaces
    pub fn on_tab(&mut self) -> Result<(), EditError> {
        for _ in 0..self.config.tab_width {
            self.on_char(' ')?;
        }
        Ok(())
    }

    /// Types `text` one character at a time.
    ///
    /// Unsupported characters are reported and skipped;
    /// any other error stops the insertion and is returned.
    pub fn insert_text(&mut self, text: &str) -> Result<(), EditError> {
        for character in text.chars() {
            let result = match character {
                '\n' => self.on_enter(),
                '\t' => self.on_tab(),
                character => self.on_char(character).map(|_| ()),
            };

            match result {
                Err(err @ EditError::UnsupportedCharacter(_)) => report(&err),
                result => result?,
            }
        }
        Ok(())
    }

    /// Wipes the surface and returns to the top left of the region
    pub fn reset(&mut self) {
        self.surface.clear();
        self.pen = Pen::at(self.config.region.origin());
        self.out_of_space = false;
    }

    /// Changes the writable region.
    /// The cursor stays where it is; if the region now has room for another line, writing may continue.
    pub fn set_region(&mut self, region: Region) {
        self.config.region = region;
        if self.out_of_space {
            self.out_of_space = !region.fits_y(self.pen.position.y + self.config.line_pitch);
        }
    }
}

/// Logs an editor error, unless it is about a character nobody could have meant to type
pub fn report(err: &EditError) {
    if err.is_reportable() {
        log::warn!("{err}");
    } else {
        log::trace!("{err}");
    }
}
