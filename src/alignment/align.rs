//! Edit-operation reconstruction (global and semi-global alignment).

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::alignment::cost::{EditCosts, Unit};
use crate::alignment::matrix::{AlignmentMode, OperationMatrix, full_distance, full_distance_with_mode};
use crate::error::{PalimpsestError, Result};

/// A single edit operation of an alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EditOp {
    /// Units are equal; consumes one unit of each sequence.
    #[serde(rename = "m")]
    Match,
    /// Units differ; consumes one unit of each sequence.
    #[serde(rename = "s")]
    Substitute,
    /// Consumes one unit of the second sequence.
    #[serde(rename = "i")]
    Insert,
    /// Consumes one unit of the first sequence.
    #[serde(rename = "d")]
    Delete,
}

impl EditOp {
    /// One-letter code: `m`, `s`, `i` or `d`.
    pub fn code(self) -> char {
        match self {
            EditOp::Match => 'm',
            EditOp::Substitute => 's',
            EditOp::Insert => 'i',
            EditOp::Delete => 'd',
        }
    }

    /// Parse a one-letter code.
    pub fn from_code(code: char) -> Option<Self> {
        match code {
            'm' => Some(EditOp::Match),
            's' => Some(EditOp::Substitute),
            'i' => Some(EditOp::Insert),
            'd' => Some(EditOp::Delete),
            _ => None,
        }
    }

    /// Whether this operation consumes a unit of the first sequence.
    pub fn consumes_first(self) -> bool {
        !matches!(self, EditOp::Insert)
    }

    /// Whether this operation consumes a unit of the second sequence.
    pub fn consumes_second(self) -> bool {
        !matches!(self, EditOp::Delete)
    }
}

impl fmt::Display for EditOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Render an operation sequence as its one-letter codes, e.g. `"smmmsmd"`.
pub fn ops_to_string(ops: &[EditOp]) -> String {
    ops.iter().map(|op| op.code()).collect()
}

/// Parse a string of one-letter codes into an operation sequence.
pub fn parse_ops(codes: &str) -> Result<Vec<EditOp>> {
    codes
        .chars()
        .map(|c| {
            EditOp::from_code(c)
                .ok_or_else(|| PalimpsestError::parse(format!("unknown edit operation '{c}'")))
        })
        .collect()
}

/// Walk the operation matrix back from `start` to the origin and return the
/// operations in forward order.
pub fn backtrace(operations: &OperationMatrix, start: (usize, usize)) -> Result<Vec<EditOp>> {
    let (i, j) = start;
    if i >= operations.rows() || j >= operations.cols() {
        return Err(PalimpsestError::alignment(format!(
            "backtrace start ({i}, {j}) outside a {}x{} matrix",
            operations.rows(),
            operations.cols()
        )));
    }

    Ok(trace_from(operations, start))
}

fn trace_from(operations: &OperationMatrix, (mut i, mut j): (usize, usize)) -> Vec<EditOp> {
    let mut path = Vec::with_capacity(i + j);

    while let Some(op) = operations.get(i, j) {
        path.push(op);
        match op {
            EditOp::Insert => j -= 1,
            EditOp::Delete => i -= 1,
            EditOp::Match | EditOp::Substitute => {
                i -= 1;
                j -= 1;
            }
        }
    }

    path.reverse();
    path
}

/// Compute a minimum-cost global alignment of `seq1` onto `seq2`.
///
/// # Examples
///
/// ```
/// use palimpsest::alignment::align::{align, ops_to_string};
/// use palimpsest::alignment::cost::EditCosts;
///
/// let a: Vec<char> = "sitting".chars().collect();
/// let b: Vec<char> = "kitten".chars().collect();
/// assert_eq!(ops_to_string(&align(&a, &b, &EditCosts::default())), "smmmsmd");
/// ```
pub fn align<T: Unit>(seq1: &[T], seq2: &[T], costs: &EditCosts<T>) -> Vec<EditOp> {
    let full = full_distance(seq1, seq2, costs);
    trace_from(&full.operations, (seq1.len(), seq2.len()))
}

/// Align a short sequence inside a longer one.
///
/// Leading units of `long` are skipped for free (row 0 of the scoring matrix
/// is zero) and the traceback starts at the first cheapest cell of the last
/// row, so trailing units of `long` are free as well and do not appear in the
/// returned operations. Fails with [`PalimpsestError::Ordering`] when `short`
/// is longer than `long`; the sequences are never swapped.
pub fn semi_global_align<T: Unit>(
    short: &[T],
    long: &[T],
    costs: &EditCosts<T>,
) -> Result<Vec<EditOp>> {
    if short.len() > long.len() {
        return Err(PalimpsestError::ordering(format!(
            "first sequence ({} units) must not be longer than the second ({} units)",
            short.len(),
            long.len()
        )));
    }

    let full = full_distance_with_mode(short, long, costs, AlignmentMode::SemiGlobal);
    let last_row = full.scores.row(short.len());

    let mut end = 0;
    for (j, &cost) in last_row.iter().enumerate() {
        if cost < last_row[end] {
            end = j;
        }
    }

    Ok(trace_from(&full.operations, (short.len(), end)))
}

/// Replay a global alignment onto `seq1`, returning the reconstructed `seq2`.
///
/// Every unit of both sequences must be consumed and every `Match` must pair
/// equal units, otherwise [`PalimpsestError::Alignment`] is returned.
pub fn apply_edit_ops<T: Unit>(seq1: &[T], seq2: &[T], ops: &[EditOp]) -> Result<Vec<T>> {
    let mut output = Vec::with_capacity(seq2.len());
    let (mut i, mut j) = (0, 0);

    for (step, &op) in ops.iter().enumerate() {
        if op.consumes_first() && i >= seq1.len() {
            return Err(PalimpsestError::alignment(format!(
                "operation {step} ('{op}') runs past the end of the first sequence"
            )));
        }
        if op.consumes_second() && j >= seq2.len() {
            return Err(PalimpsestError::alignment(format!(
                "operation {step} ('{op}') runs past the end of the second sequence"
            )));
        }

        match op {
            EditOp::Match => {
                if seq1[i] != seq2[j] {
                    return Err(PalimpsestError::alignment(format!(
                        "operation {step} matches unequal units"
                    )));
                }
                output.push(seq1[i].clone());
            }
            EditOp::Substitute | EditOp::Insert => output.push(seq2[j].clone()),
            EditOp::Delete => {}
        }

        if op.consumes_first() {
            i += 1;
        }
        if op.consumes_second() {
            j += 1;
        }
    }

    if i != seq1.len() || j != seq2.len() {
        return Err(PalimpsestError::alignment(format!(
            "alignment consumed {i}/{} and {j}/{} units",
            seq1.len(),
            seq2.len()
        )));
    }

    Ok(output)
}
