use std::path::PathBuf;

use clap::Parser;

use crate::config::Config;
use crate::encode::chain::Packing;

#[derive(Parser, Debug)]
#[command(author, version, about = "4PX: a subpixel pixel-font editor", long_about = None)]
pub struct Args {
    /// Text file to type in at start-up
    pub file: Option<PathBuf>,

    /// How glyph rows are packed into pixel columns
    #[arg(short, long, value_enum, default_value_t = Packing::Sequential)]
    pub packing: Packing,

    /// Screen pixels per canvas pixel
    #[arg(short, long, default_value_t = Config::default().scale)]
    pub scale: usize,
}
impl Args {
    pub fn config(&self) -> Config {
        Config {
            packing: self.packing,
            scale: self.scale.max(1),
            ..Config::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = Args::parse_from(["fourpx"]);
        assert_eq!(args.config(), Config::default());
        assert!(args.file.is_none());
    }

    #[test]
    fn overrides() {
        let args = Args::parse_from(["fourpx", "notes.txt", "--packing", "row-aligned", "-s", "0"]);
        let config = args.config();
        assert_eq!(config.packing, Packing::RowAligned);
        assert_eq!(config.scale, 1);
        assert_eq!(args.file, Some(PathBuf::from("notes.txt")));
    }
}
