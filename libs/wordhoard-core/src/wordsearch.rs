//! Word-search puzzle generation and selection checking.
//!
//! Words are laid into a square grid either rightward or downward. Two
//! words may cross only where they share a letter. Every cell not covered
//! by a word is filled from a language-specific letter bag. The player
//! selects a straight path of cells and submits it; a path spelling an
//! unfound target marks those cells as found.

use crate::types::{Language, UnplacedPolicy, Word, WordSearchSettings};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;
use std::collections::HashSet;

/// Direction a word runs in the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Right,
    Down,
}

impl Direction {
    fn step(self) -> (usize, usize) {
        match self {
            Self::Right => (1, 0),
            Self::Down => (0, 1),
        }
    }
}

/// Where a target word was laid into the grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Placement {
    pub word: String,
    pub x: usize,
    pub y: usize,
    pub direction: Direction,
}

impl Placement {
    /// Cells covered by the word, first letter first.
    pub fn cells(&self) -> Vec<(usize, usize)> {
        let (dx, dy) = self.direction.step();
        (0..self.word.chars().count())
            .map(|i| (self.x + dx * i, self.y + dy * i))
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Cell {
    pub letter: char,
    pub selected: bool,
    pub found: bool,
}

/// Square letter grid stored row by row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Grid {
    size: usize,
    cells: Vec<Cell>,
}

impl Grid {
    fn from_letters(size: usize, letters: Vec<char>) -> Self {
        let cells = letters
            .into_iter()
            .map(|letter| Cell {
                letter,
                selected: false,
                found: false,
            })
            .collect();
        Self { size, cells }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn contains(&self, x: usize, y: usize) -> bool {
        x < self.size && y < self.size
    }

    pub fn cell(&self, x: usize, y: usize) -> Option<&Cell> {
        if self.contains(x, y) {
            self.cells.get(y * self.size + x)
        } else {
            None
        }
    }

    fn cell_mut(&mut self, x: usize, y: usize) -> Option<&mut Cell> {
        if self.contains(x, y) {
            self.cells.get_mut(y * self.size + x)
        } else {
            None
        }
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        // chunks() rejects a zero chunk size
        self.cells.chunks(self.size.max(1))
    }

    /// Letters along `path`, in path order. `None` if any cell lies outside the grid.
    pub fn read(&self, path: &[(usize, usize)]) -> Option<String> {
        path.iter()
            .map(|&(x, y)| self.cell(x, y).map(|cell| cell.letter))
            .collect()
    }

    fn clear_selected(&mut self) {
        for cell in &mut self.cells {
            cell.selected = false;
        }
    }

    fn mark_selected(&mut self, path: &[(usize, usize)]) {
        self.clear_selected();
        for &(x, y) in path {
            if let Some(cell) = self.cell_mut(x, y) {
                cell.selected = true;
            }
        }
    }
}

/// Parameters for [`generate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub size: usize,
    pub max_targets: usize,
    /// Random placements tried per word before it is given up.
    pub max_attempts: u32,
    pub policy: UnplacedPolicy,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        WordSearchSettings::default().into()
    }
}

impl From<WordSearchSettings> for GeneratorConfig {
    fn from(settings: WordSearchSettings) -> Self {
        Self {
            size: settings.grid_size,
            max_targets: settings.max_targets,
            max_attempts: settings.max_attempts,
            policy: settings.unplaced_policy,
        }
    }
}

/// A generated puzzle: the grid and the words hidden in it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Puzzle {
    pub grid: Grid,
    /// Placed words, upper-cased, in placement order.
    pub targets: Vec<String>,
    pub placements: Vec<Placement>,
}

/// Frequency-weighted letter bag used for cells not covered by a word.
pub fn filler_letters(language: Language) -> &'static str {
    match language {
        Language::Ru => "ООООЕЕЕАААИННТТРРССВВЛЛККММДПУЯЫЗБГЧЙХЖШЮЦЩЭФ",
        Language::De => "EEEEEAAANNNIIIRRRSSSTTHHDDUULLGOÄÖÜ",
        Language::It => "AAAAAEEEEIIIIOOOONNLLRRTTSSCCMPU",
        Language::En => "AAAAAEEEEIIIOOOUNNNLRRSTTKM",
    }
}

/// Lay `words` into a fresh grid.
///
/// Candidates are tried in order until `max_targets` words are placed.
/// A word that finds no conflict-free spot within `max_attempts` random
/// tries is handled according to `config.policy`. Repeated candidates are
/// placed at most once.
pub fn generate<S, R>(words: &[S], language: Language, config: &GeneratorConfig, rng: &mut R) -> Puzzle
where
    S: AsRef<str>,
    R: Rng + ?Sized,
{
    let size = config.size;
    let mut letters: Vec<Option<char>> = vec![None; size * size];
    let mut targets: Vec<String> = Vec::new();
    let mut placements = Vec::new();

    for word in words {
        if targets.len() >= config.max_targets {
            break;
        }

        let upper = word.as_ref().trim().to_uppercase();
        if upper.is_empty() || targets.contains(&upper) {
            continue;
        }
        let chars: Vec<char> = upper.chars().collect();

        match try_place(&mut letters, size, &chars, config.max_attempts, rng) {
            Some((x, y, direction)) => {
                placements.push(Placement {
                    word: upper.clone(),
                    x,
                    y,
                    direction,
                });
                targets.push(upper);
            }
            None => match config.policy {
                UnplacedPolicy::Skip => continue,
                UnplacedPolicy::Stop => break,
            },
        }
    }

    let bag: Vec<char> = filler_letters(language).chars().collect();
    let filled = letters
        .into_iter()
        .map(|slot| slot.unwrap_or_else(|| bag[rng.gen_range(0..bag.len())]))
        .collect();

    Puzzle {
        grid: Grid::from_letters(size, filled),
        targets,
        placements,
    }
}

fn try_place<R: Rng + ?Sized>(
    letters: &mut [Option<char>],
    size: usize,
    word: &[char],
    max_attempts: u32,
    rng: &mut R,
) -> Option<(usize, usize, Direction)> {
    if size == 0 || word.len() > size {
        return None;
    }

    for _ in 0..max_attempts {
        let direction = if rng.gen_bool(0.5) {
            Direction::Right
        } else {
            Direction::Down
        };
        let x = rng.gen_range(0..size);
        let y = rng.gen_range(0..size);
        let (dx, dy) = direction.step();

        let fits = word.iter().enumerate().all(|(i, &ch)| {
            let (nx, ny) = (x + dx * i, y + dy * i);
            nx < size && ny < size && letters[ny * size + nx].map_or(true, |existing| existing == ch)
        });
        if !fits {
            continue;
        }

        for (i, &ch) in word.iter().enumerate() {
            letters[(y + dy * i) * size + (x + dx * i)] = Some(ch);
        }
        return Some((x, y, direction));
    }

    None
}

/// Pick word-search candidates from the word list.
///
/// Keeps active words of `language` that consist only of letters and fit
/// into a row of `max_len` cells, shuffled and de-duplicated ignoring case.
pub fn pick_candidates<R: Rng + ?Sized>(
    words: &[Word],
    language: Language,
    max_len: usize,
    rng: &mut R,
) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut candidates: Vec<String> = words
        .iter()
        .filter(|w| w.is_active_in(language))
        .map(|w| w.text.trim().to_string())
        .filter(|text| {
            let len = text.chars().count();
            len > 0 && len <= max_len && text.chars().all(char::is_alphabetic)
        })
        .filter(|text| seen.insert(text.to_lowercase()))
        .collect();

    candidates.shuffle(rng);
    candidates
}

/// Orientation fixed by the first two selected cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// An ordered path of selected cells restricted to one row or column.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Selection {
    cells: Vec<(usize, usize)>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cells(&self) -> &[(usize, usize)] {
        &self.cells
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn clear(&mut self) {
        self.cells.clear();
    }

    pub fn axis(&self) -> Option<Axis> {
        match self.cells.as_slice() {
            [(x0, y0), (x1, y1), ..] => {
                if y0 == y1 {
                    Some(Axis::Horizontal)
                } else if x0 == x1 {
                    Some(Axis::Vertical)
                } else {
                    None
                }
            }
            _ => None,
        }
    }

    /// Tap a cell. Returns whether the selection changed.
    ///
    /// Tapping a selected cell cuts the path just before it, so tapping
    /// the last cell deselects only that cell. A new cell must stay on the
    /// row or column the path already runs along; anything else is ignored.
    pub fn toggle(&mut self, x: usize, y: usize) -> bool {
        if let Some(pos) = self.cells.iter().position(|&cell| cell == (x, y)) {
            self.cells.truncate(pos);
            return true;
        }

        let allowed = match (self.cells.first(), self.axis()) {
            (None, _) => true,
            (Some(&(x0, y0)), None) => x == x0 || y == y0,
            (Some(&(_, y0)), Some(Axis::Horizontal)) => y == y0,
            (Some(&(x0, _)), Some(Axis::Vertical)) => x == x0,
        };

        if allowed {
            self.cells.push((x, y));
        }
        allowed
    }
}

/// Result of submitting a selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "word", rename_all = "snake_case")]
pub enum CheckOutcome {
    /// Nothing was selected.
    Empty,
    Found(String),
    AlreadyFound,
    Miss,
}

/// Compare the selected path with the targets.
///
/// A match with an unfound target marks its cells as found and records the
/// word. Any other outcome only clears the selection highlights. The
/// selection is emptied in every case.
pub fn check_selection(
    grid: &mut Grid,
    selection: &mut Selection,
    targets: &[String],
    found: &mut Vec<String>,
) -> CheckOutcome {
    if selection.is_empty() {
        return CheckOutcome::Empty;
    }

    let word = grid
        .read(selection.cells())
        .map(|letters| letters.to_uppercase());
    let outcome = match word {
        Some(word) if targets.contains(&word) => mark_found(grid, selection, found, word),
        _ => CheckOutcome::Miss,
    };

    grid.clear_selected();
    selection.clear();
    outcome
}

fn mark_found(
    grid: &mut Grid,
    selection: &Selection,
    found: &mut Vec<String>,
    word: String,
) -> CheckOutcome {
    if found.contains(&word) {
        CheckOutcome::AlreadyFound
    } else {
        for &(x, y) in selection.cells() {
            if let Some(cell) = grid.cell_mut(x, y) {
                cell.found = true;
            }
        }
        found.push(word.clone());
        CheckOutcome::Found(word)
    }
}

/// A word-search game in progress.
#[derive(Debug, Clone, Serialize)]
pub struct WordSearch {
    grid: Grid,
    targets: Vec<String>,
    placements: Vec<Placement>,
    selection: Selection,
    found: Vec<String>,
}

impl WordSearch {
    pub fn new(puzzle: Puzzle) -> Self {
        Self {
            grid: puzzle.grid,
            targets: puzzle.targets,
            placements: puzzle.placements,
            selection: Selection::new(),
            found: Vec::new(),
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn targets(&self) -> &[String] {
        &self.targets
    }

    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    pub fn found(&self) -> &[String] {
        &self.found
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Tap the cell at column `x`, row `y`. Out-of-grid taps are ignored.
    pub fn select_cell(&mut self, x: usize, y: usize) -> bool {
        if !self.grid.contains(x, y) {
            return false;
        }
        let changed = self.selection.toggle(x, y);
        if changed {
            self.grid.mark_selected(self.selection.cells());
        }
        changed
    }

    pub fn check_selection(&mut self) -> CheckOutcome {
        check_selection(
            &mut self.grid,
            &mut self.selection,
            &self.targets,
            &mut self.found,
        )
    }

    /// No word could be placed; the grid is filler only.
    pub fn is_placeholder(&self) -> bool {
        self.targets.is_empty()
    }

    pub fn is_complete(&self) -> bool {
        !self.targets.is_empty() && self.found.len() == self.targets.len()
    }

    /// (found, total) target counts.
    pub fn progress(&self) -> (usize, usize) {
        (self.found.len(), self.targets.len())
    }
}
