//! Plain-text world files.
//!
//! ## Format
//!
//! ```text
//! 3 4
//! 0 1 0 0
//! 0 1 0 0
//! 0 1 0 0
//! ```
//!
//! The first line is `<height> <width>`, followed by `height` lines of
//! `width` space-separated cells. On load the text is treated as one stream
//! of whitespace-separated integers, so line breaks are not significant;
//! `0` is dead and any other integer is alive. Only the current generation
//! is stored.

use std::fmt;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;
use std::str::FromStr;

use super::error::{LoadError, SaveError};
use crate::core::{CellMatrix, Grid};

impl Grid {
    /// Load a world file. History starts empty and the generation counter at zero.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| LoadError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let grid = Self::from_reader(BufReader::new(file))?;
        log::debug!(
            "loaded {}x{} world from {}",
            grid.height(),
            grid.width(),
            path.display()
        );
        Ok(grid)
    }

    /// Read a world from any byte source.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self, LoadError> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        text.parse()
    }

    /// Save the current generation to a world file, replacing any existing file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), SaveError> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|source| SaveError::Create {
            path: path.to_path_buf(),
            source,
        })?;
        self.write_to(BufWriter::new(file))?;
        log::debug!(
            "saved {}x{} world to {}",
            self.height(),
            self.width(),
            path.display()
        );
        Ok(())
    }

    /// Write the current generation in world-file format.
    pub fn write_to<W: Write>(&self, mut writer: W) -> Result<(), SaveError> {
        write!(writer, "{}", self)?;
        writer.flush()?;
        Ok(())
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {}", self.height(), self.width())?;
        for row in self.current().rows() {
            for (x, &alive) in row.iter().enumerate() {
                if x > 0 {
                    f.write_str(" ")?;
                }
                f.write_str(if alive { "1" } else { "0" })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl FromStr for Grid {
    type Err = LoadError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let mut tokens = text.split_whitespace().enumerate();

        let mut header = || -> Result<i64, LoadError> {
            let (index, token) = tokens.next().ok_or(LoadError::MissingHeader)?;
            parse_token(index, token)
        };
        let height = header()?;
        let width = header()?;

        let (rows, cols) = dimensions(height, width)
            .ok_or(LoadError::InvalidDimensions { height, width })?;
        let expected = rows * cols;

        let mut cells = Vec::new();
        for (index, token) in tokens.by_ref().take(expected) {
            cells.push(parse_token(index, token)? != 0);
        }
        if cells.len() < expected {
            return Err(LoadError::Truncated {
                expected,
                found: cells.len(),
            });
        }

        let trailing = tokens.count();
        if trailing > 0 {
            log::warn!("ignoring {} tokens after the last cell", trailing);
        }

        let matrix = CellMatrix::from_cells(rows, cols, cells)
            .ok_or(LoadError::InvalidDimensions { height, width })?;
        Ok(Grid::from_matrix(matrix))
    }
}

fn parse_token(index: usize, token: &str) -> Result<i64, LoadError> {
    token.parse().map_err(|_| LoadError::NotAnInteger {
        index,
        token: token.to_string(),
    })
}

/// Positive dimensions whose product is addressable, as `(height, width)`.
fn dimensions(height: i64, width: i64) -> Option<(usize, usize)> {
    if height <= 0 || width <= 0 {
        return None;
    }
    let rows = usize::try_from(height).ok()?;
    let cols = usize::try_from(width).ok()?;
    rows.checked_mul(cols)?;
    Some((rows, cols))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_format() {
        let mut grid = Grid::new(2, 3);
        grid.set_cell(1, 0, true);
        grid.set_cell(2, 1, true);
        assert_eq!(grid.to_string(), "2 3\n0 1 0\n0 0 1\n");
    }

    #[test]
    fn test_parse_any_nonzero_is_alive() {
        let grid: Grid = "1 4\n0 7 -1 0".parse().unwrap();
        assert!(!grid.get_cell(0, 0));
        assert!(grid.get_cell(1, 0));
        assert!(grid.get_cell(2, 0));
        assert!(!grid.get_cell(3, 0));
    }

    #[test]
    fn test_parse_ignores_layout_and_trailing_spaces() {
        let grid: Grid = "2 2 1 0 \n 0 1 \n\n".parse().unwrap();
        assert!(grid.get_cell(0, 0));
        assert!(grid.get_cell(1, 1));
        assert_eq!(grid.population(), 2);
    }

    #[test]
    fn test_parse_ignores_trailing_tokens() {
        let grid: Grid = "1 1 1 0 0 0".parse().unwrap();
        assert_eq!(grid.population(), 1);
    }

    #[test]
    fn test_parse_truncated() {
        let err = "3 3\n1 0 1\n0 1".parse::<Grid>().unwrap_err();
        assert!(matches!(err, LoadError::Truncated { expected: 9, found: 5 }));
    }

    #[test]
    fn test_parse_missing_header() {
        assert!(matches!("".parse::<Grid>(), Err(LoadError::MissingHeader)));
        assert!(matches!("4".parse::<Grid>(), Err(LoadError::MissingHeader)));
    }

    #[test]
    fn test_parse_bad_dimensions() {
        let err = "0 3".parse::<Grid>().unwrap_err();
        assert!(matches!(err, LoadError::InvalidDimensions { height: 0, width: 3 }));

        let err = "2 -1 0 0".parse::<Grid>().unwrap_err();
        assert!(matches!(err, LoadError::InvalidDimensions { height: 2, width: -1 }));

        let huge = format!("{} {}", i64::MAX, i64::MAX);
        assert!(matches!(
            huge.parse::<Grid>(),
            Err(LoadError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_parse_non_numeric() {
        let err = "2 2\n1 x 0 0".parse::<Grid>().unwrap_err();
        match err {
            LoadError::NotAnInteger { index, token } => {
                assert_eq!(index, 3);
                assert_eq!(token, "x");
            }
            other => panic!("unexpected error: {other}"),
        }

        assert!(matches!(
            "h 2".parse::<Grid>(),
            Err(LoadError::NotAnInteger { index: 0, .. })
        ));
    }

    #[test]
    fn test_loaded_grid_history_is_dead() {
        // History is all dead after a load, so a populated world is not
        // stable until it has evolved.
        let grid: Grid = "3 3\n0 0 0\n1 1 1\n0 0 0\n".parse().unwrap();
        assert_eq!(grid.generation(), 0);
        assert!(!grid.is_stable());

        let empty: Grid = "2 2\n0 0\n0 0\n".parse().unwrap();
        assert!(empty.is_stable());
    }

    #[test]
    fn test_from_reader_invalid_utf8() {
        let bytes: &[u8] = &[0x31, 0x20, 0x31, 0x20, 0xff];
        assert!(matches!(Grid::from_reader(bytes), Err(LoadError::Read(_))));
    }
}
