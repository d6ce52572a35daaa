use std::collections::HashMap;

use super::Intensity;

/// Dot art for the builtin font.
/// Four rows per glyph, at most [`MAX_GLYPH_WIDTH`] dots per row; `#` is on, `.` is off.
///
/// Widths are counted in subpixels, so a three dot wide glyph fits in a single pixel column
/// (plus the row separator, which spills into the next one).
const BUILTIN_GLYPHS: &[(char, [&str; 4])] = &[
    (' ', [".", ".", ".", "."]),
    ('A', [".#.", "#.#", "###", "#.#"]),
    ('B', ["##.", "###", "#.#", "###"]),
    ('C', ["###", "#..", "#..", "###"]),
    ('D', ["##.", "#.#", "#.#", "##."]),
    ('E', ["###", "##.", "#..", "###"]),
    ('F', ["###", "#..", "##.", "#.."]),
    ('G', ["###", "#..", "#.#", "###"]),
    ('H', ["#.#", "###", "#.#", "#.#"]),
    ('I', ["###", ".#.", ".#.", "###"]),
    ('J', ["..#", "..#", "#.#", "###"]),
    ('K', ["#.#", "##.", "#.#", "#.#"]),
    ('L', ["#..", "#..", "#..", "###"]),
    ('M', ["#...#", "##.##", "#.#.#", "#...#"]),
    ('N', ["#..#", "##.#", "#.##", "#..#"]),
    ('O', ["###", "#.#", "#.#", "###"]),
    ('P', ["###", "#.#", "###", "#.."]),
    ('Q', ["###", "#.#", "###", "..#"]),
    ('R', ["###", "#.#", "##.", "#.#"]),
    ('S', ["###", "##.", "..#", "###"]),
    ('T', ["###", ".#.", ".#.", ".#."]),
    ('U', ["#.#", "#.#", "#.#", "###"]),
    ('V', ["#.#", "#.#", "#.#", ".#."]),
    ('W', ["#...#", "#.#.#", "##.##", "#...#"]),
    ('X', ["#.#", ".#.", ".#.", "#.#"]),
    ('Y', ["#.#", "#.#", ".#.", ".#."]),
    ('Z', ["###", ".##", "#..", "###"]),
    ('0', [".#.", "#.#", "#.#", ".#."]),
    ('1', [".#", "##", ".#", ".#"]),
    ('2', ["##.", "..#", ".#.", "###"]),
    ('3', ["###", ".##", "..#", "###"]),
    ('4', ["#.#", "#.#", "###", "..#"]),
    ('5', ["###", "##.", "..#", "##."]),
    ('6', ["#..", "###", "#.#", "###"]),
    ('7', ["###", "..#", ".#.", ".#."]),
    ('8', [".#.", "###", "#.#", "###"]),
    ('9', ["###", "#.#", "###", "..#"]),
    ('.', [".", ".", ".", "#"]),
    (',', [".", ".", "#", "#"]),
    (':', [".", "#", ".", "#"]),
    (';', [".#", "..", ".#", "#."]),
    ('!', ["#", "#", ".", "#"]),
    ('?', ["##.", "..#", ".#.", "..."]),
    ('\'', ["#", "#", ".", "."]),
    ('"', ["#.#", "#.#", "...", "..."]),
    ('`', ["#.", ".#", "..", ".."]),
    ('-', ["...", "###", "...", "..."]),
    ('+', ["...", ".#.", "###", ".#."]),
    ('=', ["...", "###", "...", "###"]),
    ('*', ["#.#", ".#.", "#.#", "..."]),
    ('/', ["..#", ".#.", ".#.", "#.."]),
    ('\\', ["#..", ".#.", ".#.", "..#"]),
    ('|', ["#", "#", "#", "#"]),
    ('_', ["...", "...", "...", "###"]),
    ('(', [".#", "#.", "#.", ".#"]),
    (')', ["#.", ".#", ".#", "#."]),
    ('[', ["##", "#.", "#.", "##"]),
    (']', ["##", ".#", ".#", "##"]),
    ('{', [".##", "##.", ".#.", ".##"]),
    ('}', ["##.", ".##", ".#.", "##."]),
    ('<', ["..#", ".#.", ".#.", "..#"]),
    ('>', ["#..", ".#.", ".#.", "#.."]),
    ('^', [".#.", "#.#", "...", "..."]),
    ('~', ["....", ".#.#", "#.#.", "...."]),
    ('#', [".#.#", "####", "####", "#.#."]),
    ('$', [".##", "##.", ".##", "##."]),
    ('%', ["#.#", "..#", "#..", "#.#"]),
    ('&', [".#.", "#.#", ".#.", "#.#"]),
    ('@', ["###", "###", "#..", "###"]),
];

/// No builtin glyph is wider than this many dots
pub const MAX_GLYPH_WIDTH: usize = 5;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("glyph {character:?} has invalid dot {dot:?} in row {row}")]
    InvalidDot {
        character: char,
        row: usize,
        dot: char,
    },
    #[error("glyph {0:?} is declared twice")]
    Duplicate(char),
}

/// The dot matrix of one character.
///
/// Rows are scan-lines from top to bottom;
/// within a row, dots are the bit-stream written for that scan-line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphEncoding {
    rows: Vec<Vec<Intensity>>,
}
impl GlyphEncoding {
    pub fn new(rows: Vec<Vec<Intensity>>) -> Self {
        Self { rows }
    }

    /// Builds a glyph from `#`/`.` dot art.
    /// `character` is only used for error reporting.
    pub fn from_art(character: char, art: &[&str]) -> Result<Self, CatalogError> {
        let rows = art
            .iter()
            .enumerate()
            .map(|(row, line)| {
                line.chars()
                    .map(|dot| match dot {
                        '#' => Ok(Intensity::On),
                        '.' => Ok(Intensity::Off),
                        dot => Err(CatalogError::InvalidDot {
                            character,
                            row,
                            dot,
                        }),
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { rows })
    }

    pub fn rows(&self) -> &[Vec<Intensity>] {
        &self.rows
    }

    /// Number of slots this glyph needs once packed: every dot, plus one separator per row
    pub fn bit_count(&self) -> usize {
        self.rows.iter().map(|row| row.len() + 1).sum()
    }
}

/// Maps characters to their dot matrix
pub trait GlyphCatalog {
    fn lookup(&self, character: char) -> Option<&GlyphEncoding>;
}

/// The 4PX font: four rows tall, variable width.
/// Lowercase letters share the uppercase shapes.
pub struct BuiltinCatalog {
    glyphs: HashMap<char, GlyphEncoding>,
}
impl BuiltinCatalog {
    pub fn try_default() -> Result<Self, CatalogError> {
        let mut glyphs = HashMap::with_capacity(BUILTIN_GLYPHS.len() * 2);

        for (character, art) in BUILTIN_GLYPHS {
            let glyph = GlyphEncoding::from_art(*character, art)?;
            if character.is_ascii_uppercase() {
                glyphs.insert(character.to_ascii_lowercase(), glyph.clone());
            }
            if glyphs.insert(*character, glyph).is_some() {
                return Err(CatalogError::Duplicate(*character));
            }
        }

        log::debug!("builtin catalog holds {} glyphs", glyphs.len());
        Ok(Self { glyphs })
    }
}
impl GlyphCatalog for HashMap<char, GlyphEncoding> {
    fn lookup(&self, character: char) -> Option<&GlyphEncoding> {
        self.get(&character)
    }
}

impl GlyphCatalog for BuiltinCatalog {
    fn lookup(&self, character: char) -> Option<&GlyphEncoding> {
        self.glyphs.get(&character)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_glyphs_fit_the_font_metrics() {
        for (character, art) in BUILTIN_GLYPHS {
            let glyph = GlyphEncoding::from_art(*character, art).unwrap();
            assert_eq!(glyph.rows().len(), 4, "{character:?}");
            assert!(
                glyph.rows().iter().all(|row| row.len() <= MAX_GLYPH_WIDTH),
                "{character:?} is too wide"
            );
            assert!(glyph.bit_count() <= 4 * (MAX_GLYPH_WIDTH + 1));
        }
    }

    #[test]
    fn lowercase_shares_uppercase_shapes() {
        let catalog = BuiltinCatalog::try_default().unwrap();
        assert_eq!(catalog.lookup('a'), catalog.lookup('A'));
        assert!(catalog.lookup('a').is_some());
        assert!(catalog.lookup('é').is_none());
        assert!(catalog.lookup('\u{7}').is_none());
    }

    #[test]
    fn art_parsing() {
        let glyph = GlyphEncoding::from_art('A', &["#.#", "###"]).unwrap();
        assert_eq!(
            glyph.rows()[0],
            vec![Intensity::On, Intensity::Off, Intensity::On]
        );
        assert_eq!(glyph.bit_count(), 8);

        let err = GlyphEncoding::from_art('x', &["#.", "#o"]).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::InvalidDot {
                character: 'x',
                row: 1,
                dot: 'o'
            }
        ));
    }
}
