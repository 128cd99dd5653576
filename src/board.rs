//! # Board rendering
//!
//! Text rendering of a chromosome as an N×N checkerboard, plus an observer
//! that redraws the board to any writer as the search advances.
//!
//! ```rust
//! use nqueens_evo::board::Board;
//! use nqueens_evo::chromosome::Chromosome;
//!
//! let solution = Chromosome::try_from(vec![1, 3, 0, 2]).unwrap();
//! let expected = "\
//! . # Q #
//! Q . # .
//! . # . Q
//! ## Q # .
//! ";
//! assert_eq!(Board::new(&solution).to_string(), expected);
//! ```

use std::fmt;
use std::io::Write;

use crate::chromosome::Chromosome;
use crate::evolution::{Fitness, GenerationObserver, ObserverResult};

const QUEEN: char = 'Q';
const LIGHT: char = '.';
const DARK: char = '#';

/// Displays a chromosome as a board, one rank per line.
///
/// Column `c` holds its queen on row `chromosome[c]`. Squares where
/// `row + column` is even are light.
#[derive(Debug, Clone, Copy)]
pub struct Board<'a> {
    chromosome: &'a Chromosome,
}

impl<'a> Board<'a> {
    pub fn new(chromosome: &'a Chromosome) -> Self {
        Self { chromosome }
    }
}

impl fmt::Display for Board<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let genes = self.chromosome.genes();
        for row in 0..genes.len() {
            for (column, &queen_row) in genes.iter().enumerate() {
                if column > 0 {
                    f.write_str(" ")?;
                }
                let square = if queen_row == row {
                    QUEEN
                } else if (row + column) % 2 == 0 {
                    LIGHT
                } else {
                    DARK
                };
                write!(f, "{}", square)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Writes the board and a status line for every generation it is told about.
///
/// Wrap it in [`Throttled`](crate::evolution::Throttled) to redraw less often.
#[derive(Debug)]
pub struct BoardObserver<W: Write> {
    out: W,
}

impl<W: Write> BoardObserver<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> GenerationObserver for BoardObserver<W> {
    fn on_generation_advanced(
        &mut self,
        generation: usize,
        best: &Chromosome,
        fitness: Fitness,
    ) -> ObserverResult {
        write!(self.out, "{}", Board::new(best))?;
        writeln!(self.out, "Gen {} - Fitness {}", generation, fitness)?;
        writeln!(self.out)?;
        self.out.flush()?;
        Ok(())
    }
}
