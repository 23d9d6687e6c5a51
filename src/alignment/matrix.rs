//! Full scoring and operation matrices (Wagner-Fischer).
//!
//! [`full_distance`] keeps every cell of the dynamic program together with the
//! operation that produced it, which is what the alignment backtrace needs.
//! Use [`crate::alignment::distance::distance`] when only the cost matters.

use serde::{Deserialize, Serialize};

use crate::alignment::align::EditOp;
use crate::alignment::cost::{Cost, EditCosts, Unit};

/// How the boundary row of the scoring matrix is initialised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AlignmentMode {
    /// Row 0 and column 0 accumulate insertion/deletion costs.
    #[default]
    Global,
    /// Row 0 is zero so a prefix of the second sequence can be skipped for free.
    SemiGlobal,
}

/// A dense `(len1 + 1) x (len2 + 1)` table of costs stored row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoringMatrix {
    rows: usize,
    cols: usize,
    cells: Vec<Cost>,
}

impl ScoringMatrix {
    fn new(rows: usize, cols: usize) -> Self {
        ScoringMatrix {
            rows,
            cols,
            cells: vec![0.0; rows * cols],
        }
    }

    /// Number of rows (`len(seq1) + 1`).
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns (`len(seq2) + 1`).
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Cost stored at `(i, j)`.
    ///
    /// # Panics
    ///
    /// Panics if the cell is out of bounds.
    pub fn get(&self, i: usize, j: usize) -> Cost {
        assert!(i < self.rows && j < self.cols, "cell ({i}, {j}) out of bounds");
        self.cells[i * self.cols + j]
    }

    fn set(&mut self, i: usize, j: usize, cost: Cost) {
        self.cells[i * self.cols + j] = cost;
    }

    /// A full row of the matrix.
    pub fn row(&self, i: usize) -> &[Cost] {
        &self.cells[i * self.cols..(i + 1) * self.cols]
    }

    /// The bottom-right cell: the cost of transforming all of seq1 into all of seq2.
    pub fn last(&self) -> Cost {
        self.cells[self.cells.len() - 1]
    }

    /// Copy the matrix into nested vectors, mostly useful in tests and debugging.
    pub fn to_rows(&self) -> Vec<Vec<Cost>> {
        (0..self.rows).map(|i| self.row(i).to_vec()).collect()
    }
}

/// The operation that realised each cell of a [`ScoringMatrix`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationMatrix {
    rows: usize,
    cols: usize,
    cells: Vec<Option<EditOp>>,
}

impl OperationMatrix {
    fn new(rows: usize, cols: usize) -> Self {
        OperationMatrix {
            rows,
            cols,
            cells: vec![None; rows * cols],
        }
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Operation stored at `(i, j)`; `None` at the origin or out of bounds.
    pub fn get(&self, i: usize, j: usize) -> Option<EditOp> {
        if i >= self.rows || j >= self.cols {
            return None;
        }
        self.cells[i * self.cols + j]
    }

    fn set(&mut self, i: usize, j: usize, op: EditOp) {
        self.cells[i * self.cols + j] = Some(op);
    }

    /// Copy the operations into nested vectors of one-letter codes
    /// (`' '` marks the origin).
    pub fn to_rows(&self) -> Vec<String> {
        (0..self.rows)
            .map(|i| {
                (0..self.cols)
                    .map(|j| self.get(i, j).map_or(' ', EditOp::code))
                    .collect()
            })
            .collect()
    }
}

/// Both matrices produced by [`full_distance`].
#[derive(Debug, Clone, PartialEq)]
pub struct FullDistance {
    /// Minimum costs per prefix pair.
    pub scores: ScoringMatrix,
    /// Operation chosen for each cell.
    pub operations: OperationMatrix,
}

impl FullDistance {
    /// The edit distance between the complete sequences.
    pub fn distance(&self) -> Cost {
        self.scores.last()
    }
}

/// Compute the global scoring and operation matrices of `seq1` against `seq2`.
pub fn full_distance<T: Unit>(seq1: &[T], seq2: &[T], costs: &EditCosts<T>) -> FullDistance {
    full_distance_with_mode(seq1, seq2, costs, AlignmentMode::Global)
}

/// Compute the scoring and operation matrices with the given boundary mode.
///
/// Equal units copy the diagonal as a zero-cost match. Otherwise the cheapest
/// of substitution, insertion (from the left) and deletion (from above) wins,
/// with ties resolved in exactly that order.
pub fn full_distance_with_mode<T: Unit>(
    seq1: &[T],
    seq2: &[T],
    costs: &EditCosts<T>,
    mode: AlignmentMode,
) -> FullDistance {
    let rows = seq1.len() + 1;
    let cols = seq2.len() + 1;

    let mut scores = ScoringMatrix::new(rows, cols);
    let mut operations = OperationMatrix::new(rows, cols);

    for i in 1..rows {
        scores.set(i, 0, i as Cost * costs.boundary_deletion(&seq1[i - 1]));
        operations.set(i, 0, EditOp::Delete);
    }
    for j in 1..cols {
        if mode == AlignmentMode::Global {
            scores.set(0, j, j as Cost * costs.boundary_insertion(&seq2[j - 1]));
        }
        operations.set(0, j, EditOp::Insert);
    }

    for i in 1..rows {
        let a = &seq1[i - 1];
        for j in 1..cols {
            let b = &seq2[j - 1];

            if a == b {
                scores.set(i, j, scores.get(i - 1, j - 1));
                operations.set(i, j, EditOp::Match);
                continue;
            }

            let (op, cost) = cheapest([
                (
                    EditOp::Substitute,
                    scores.get(i - 1, j - 1) + costs.substitution_cost(a, b),
                ),
                (EditOp::Insert, scores.get(i, j - 1) + costs.insertion_cost(a, b)),
                (EditOp::Delete, scores.get(i - 1, j) + costs.deletion_cost(a, b)),
            ]);
            scores.set(i, j, cost);
            operations.set(i, j, op);
        }
    }

    FullDistance { scores, operations }
}

/// First candidate with the strictly lowest cost.
fn cheapest(candidates: [(EditOp, Cost); 3]) -> (EditOp, Cost) {
    let mut best = candidates[0];
    for candidate in &candidates[1..] {
        if candidate.1 < best.1 {
            best = *candidate;
        }
    }
    best
}
