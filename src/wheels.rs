//! The lettered wheels and the traversal over them.
//!
//! A [`WheelGrid`] is a stack of wheels, each carrying the same number of
//! letters. A word is read by picking one letter from each wheel of a
//! contiguous run, top to bottom, without wrapping.
//!
//! Example grid file:
//!
//! ```text
//! 3
//! 5
//! ABCDE
//! FGHIJ
//! KLMNO
//! ```
//!
//! spells `AH`, `IN` and `DIM`, among other strings.
//!
//! The [`Cursor`] walks every candidate of the grid depth-first. It never looks
//! ahead: after each candidate it is told how the dictionary classified it and
//! moves accordingly.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

use tracing::debug;

use crate::error::WheelError;
use crate::{byte_lines, is_valid_word};
use crate::status::SearchStatus;

/// An immutable grid of lettered wheels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WheelGrid {
    wheels: Vec<String>,
    letters_per_wheel: usize,
}

impl WheelGrid {
    /// Build a grid from its wheel lines, top to bottom.
    ///
    /// The letter count is taken from the first wheel; every other wheel
    /// must match it.
    pub fn from_lines<I, S>(lines: I) -> Result<Self, WheelError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let rows: Vec<(Option<usize>, Vec<u8>)> = lines
            .into_iter()
            .map(|line| (None, line.as_ref().as_bytes().to_vec()))
            .collect();
        let number_of_wheels = rows.len();
        let letters_per_wheel = rows.first().map_or(0, |(_, row)| row.len());
        check_dimensions(number_of_wheels as i64, letters_per_wheel as i64)?;
        Self::from_rows(rows, number_of_wheels, letters_per_wheel)
    }

    /// Parse the grid file format: wheel count, letters per wheel, then one
    /// line per wheel. Blank lines and surrounding whitespace are ignored.
    /// The input is read as bytes; it need not be UTF-8.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, WheelError> {
        let mut lines = byte_lines(reader);
        let number_of_wheels = parse_count(lines.next().transpose()?, "number of wheels")?;
        let letters_per_wheel = parse_count(lines.next().transpose()?, "number of letters per wheel")?;
        check_dimensions(number_of_wheels, letters_per_wheel)?;

        let mut rows = Vec::new();
        for (offset, row) in lines.enumerate() {
            let row = row?;
            if row.is_empty() {
                continue;
            }
            // The two count lines come first.
            rows.push((Some(offset + 3), row));
        }

        Self::from_rows(rows, number_of_wheels as usize, letters_per_wheel as usize)
    }

    /// Open a grid file and parse it with [`WheelGrid::from_reader`].
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, WheelError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|_| WheelError::FileAccess {
            paths: vec![path.to_path_buf()],
        })?;
        Self::from_reader(BufReader::new(file))
    }

    fn from_rows(
        rows: Vec<(Option<usize>, Vec<u8>)>,
        number_of_wheels: usize,
        letters_per_wheel: usize,
    ) -> Result<Self, WheelError> {
        let mut wheels = Vec::with_capacity(rows.len());
        for (wheel, (line, row)) in rows.into_iter().enumerate() {
            if !is_valid_word(&row) {
                return Err(WheelError::InvalidCharacter {
                    text: String::from_utf8_lossy(&row).into_owned(),
                    line,
                });
            }
            if row.len() != letters_per_wheel {
                return Err(WheelError::WheelLength {
                    wheel,
                    expected: letters_per_wheel,
                    found: row.len(),
                });
            }
            wheels.push(String::from_utf8_lossy(&row).to_ascii_uppercase());
        }

        if wheels.len() != number_of_wheels {
            return Err(WheelError::WheelCount {
                expected: number_of_wheels,
                found: wheels.len(),
            });
        }

        debug!(number_of_wheels, letters_per_wheel, "wheel grid loaded");
        Ok(Self {
            wheels,
            letters_per_wheel,
        })
    }

    pub fn number_of_wheels(&self) -> usize {
        self.wheels.len()
    }

    pub fn letters_per_wheel(&self) -> usize {
        self.letters_per_wheel
    }

    /// The letters of one wheel, uppercase.
    pub fn wheel(&self, wheel: usize) -> &str {
        &self.wheels[wheel]
    }

    /// The uppercase letter at `index` on `wheel`.
    pub fn letter(&self, wheel: usize, index: usize) -> u8 {
        self.wheels[wheel].as_bytes()[index]
    }
}

impl FromStr for WheelGrid {
    type Err = WheelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_reader(s.as_bytes())
    }
}

impl std::fmt::Display for WheelGrid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.number_of_wheels())?;
        writeln!(f, "{}", self.letters_per_wheel)?;
        for wheel in &self.wheels {
            writeln!(f, "{}", wheel)?;
        }
        Ok(())
    }
}

fn parse_count(line: Option<Vec<u8>>, field: &'static str) -> Result<i64, WheelError> {
    let value = String::from_utf8_lossy(&line.unwrap_or_default()).into_owned();
    let parsed = value.parse();
    parsed.map_err(|_| WheelError::MalformedCount { field, value })
}

fn check_dimensions(wheels: i64, letters: i64) -> Result<(), WheelError> {
    if wheels < 1 || letters < 2 {
        return Err(WheelError::InvalidGridDimensions { wheels, letters });
    }
    Ok(())
}

/// A wheel/letter coordinate in the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub wheel: usize,
    pub letter: usize,
}

impl Position {
    pub fn new(wheel: usize, letter: usize) -> Self {
        Self { wheel, letter }
    }
}

/// One entry of the candidate path: the letter chosen on a wheel and its
/// index on that wheel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Slot {
    pub letter: u8,
    pub index: usize,
}

/// Traversal state: where the current candidate starts, where it ends, and
/// the letters picked on every wheel in between.
///
/// `path[0]` is the start wheel and the last slot is the end wheel, so the
/// path length is always `end.wheel - start.wheel + 1` while the traversal is
/// live.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Cursor {
    start: Position,
    end: Position,
    path: Vec<Slot>,
}

impl Cursor {
    /// The first two-letter candidate of `grid`. A one-wheel grid has no
    /// candidates and gets an empty path.
    pub fn new(grid: &WheelGrid) -> Self {
        let mut cursor = Self {
            start: Position::new(0, 0),
            end: Position::new(1, 0),
            path: Vec::with_capacity(grid.number_of_wheels()),
        };
        if cursor.can_permute(grid) {
            cursor.seed(grid);
        }
        cursor
    }

    /// True while some wheel remains below the start wheel.
    pub fn can_permute(&self, grid: &WheelGrid) -> bool {
        self.start.wheel + 1 < grid.number_of_wheels()
    }

    /// The current candidate, read from the start wheel down.
    pub fn permutation(&self) -> String {
        self.path.iter().map(|slot| slot.letter as char).collect()
    }

    pub fn start(&self) -> Position {
        self.start
    }

    pub fn end(&self) -> Position {
        self.end
    }

    pub fn path(&self) -> &[Slot] {
        &self.path
    }

    /// Number of wheels spanned by the current candidate
    pub fn depth(&self) -> usize {
        self.path.len()
    }

    /// Move to the next candidate given how the current one was classified.
    ///
    /// A parent status extends the candidate into the next wheel; a miss or
    /// terminal hit rotates the last wheel instead. Running off the last
    /// letter of a wheel, or off the last wheel, backtracks one wheel up.
    /// Once every extension of the start letter is spent the start moves on
    /// and the path is reseeded with two letters. An exhausted cursor is
    /// returned unchanged.
    pub fn advance(mut self, grid: &WheelGrid, status: SearchStatus) -> Self {
        if !self.can_permute(grid) {
            return self;
        }
        let letters = grid.letters_per_wheel();

        if status.can_extend() {
            self.end.wheel += 1;
            self.end.letter = 0;
            if self.end.wheel >= grid.number_of_wheels() {
                self.revert();
            }
        } else {
            self.path.pop();
            self.end.letter += 1;
        }

        while self.path.len() > 1 && self.end.letter >= letters {
            self.revert();
        }

        if self.path.len() <= 1 && self.end.letter >= letters {
            self.next_start(grid);
        } else {
            self.push_end(grid);
        }
        self
    }

    /// Step back to the wheel above the end and rotate it by one letter.
    fn revert(&mut self) {
        if let Some(slot) = self.path.pop() {
            self.end.wheel -= 1;
            self.end.letter = slot.index + 1;
        }
    }

    fn next_start(&mut self, grid: &WheelGrid) {
        if self.start.letter + 1 < grid.letters_per_wheel() {
            self.start.letter += 1;
        } else {
            self.start.wheel += 1;
            self.start.letter = 0;
        }

        self.end = Position::new(self.start.wheel + 1, 0);
        self.path.clear();
        if self.can_permute(grid) {
            self.seed(grid);
        }
    }

    fn seed(&mut self, grid: &WheelGrid) {
        self.path.push(Slot {
            letter: grid.letter(self.start.wheel, self.start.letter),
            index: self.start.letter,
        });
        self.push_end(grid);
    }

    fn push_end(&mut self, grid: &WheelGrid) {
        self.path.push(Slot {
            letter: grid.letter(self.end.wheel, self.end.letter),
            index: self.end.letter,
        });
    }
}

/// A grid together with a live traversal over it.
#[derive(Debug, Clone)]
pub struct Wheels {
    grid: WheelGrid,
    cursor: Cursor,
}

impl Wheels {
    pub fn new(grid: WheelGrid) -> Self {
        let cursor = Cursor::new(&grid);
        Self { grid, cursor }
    }

    pub fn grid(&self) -> &WheelGrid {
        &self.grid
    }

    pub fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    /// The current candidate. Does not move the traversal.
    pub fn current_permutation(&self) -> String {
        self.cursor.permutation()
    }

    /// Check this before each call to [`Wheels::advance_permutation`].
    pub fn can_permute(&self) -> bool {
        self.cursor.can_permute(&self.grid)
    }

    /// Advance to the next candidate and return it.
    pub fn advance_permutation(&mut self, status: SearchStatus) -> String {
        let cursor = std::mem::take(&mut self.cursor);
        self.cursor = cursor.advance(&self.grid, status);
        self.current_permutation()
    }

    /// Restart the traversal from the first candidate.
    pub fn reset(&mut self) {
        self.cursor = Cursor::new(&self.grid);
    }
}
