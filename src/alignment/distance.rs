//! Space-optimised edit distance.
//!
//! The dynamic program keeps only two rows. The longer sequence drives the
//! outer loop and the row buffer spans the shorter one, so memory is
//! `O(min(n, m))`. The result always equals the bottom-right cell of
//! [`crate::alignment::matrix::full_distance`] for the same costs.

use crate::alignment::cost::{Cost, EditCosts, Unit};

/// Calculate the minimum edit cost of transforming `seq1` into `seq2`.
///
/// Works on any unit type: characters, words, glyph ids.
///
/// # Examples
///
/// ```
/// use palimpsest::alignment::cost::EditCosts;
/// use palimpsest::alignment::distance::distance;
///
/// let a: Vec<char> = "sitting".chars().collect();
/// let b: Vec<char> = "kitten".chars().collect();
/// assert_eq!(distance(&a, &b, &EditCosts::default()), 3.0);
///
/// let words = distance(&["the", "cat"], &["the", "hat"], &EditCosts::default());
/// assert_eq!(words, 1.0);
/// ```
pub fn distance<T: Unit>(seq1: &[T], seq2: &[T], costs: &EditCosts<T>) -> Cost {
    // Moving down the grid consumes a row unit, moving right a column unit.
    // When seq2 drives the rows the roles of insertion and deletion flip,
    // and override keys must still be looked up in (seq1, seq2) order.
    let transposed = seq1.len() < seq2.len();
    let (rows, cols) = if transposed { (seq2, seq1) } else { (seq1, seq2) };

    let edge_cost = |r: &T| {
        if transposed {
            costs.boundary_insertion(r)
        } else {
            costs.boundary_deletion(r)
        }
    };
    let header_cost = |c: &T| {
        if transposed {
            costs.boundary_deletion(c)
        } else {
            costs.boundary_insertion(c)
        }
    };
    let down_cost = |a: &T, b: &T| {
        if transposed {
            costs.insertion_cost(a, b)
        } else {
            costs.deletion_cost(a, b)
        }
    };
    let right_cost = |a: &T, b: &T| {
        if transposed {
            costs.deletion_cost(a, b)
        } else {
            costs.insertion_cost(a, b)
        }
    };

    let width = cols.len();
    let mut previous: Vec<Cost> = Vec::with_capacity(width + 1);
    previous.push(0.0);
    for (j, c) in cols.iter().enumerate() {
        previous.push((j + 1) as Cost * header_cost(c));
    }
    let mut current: Vec<Cost> = vec![0.0; width + 1];

    for (i, r) in rows.iter().enumerate() {
        current[0] = (i + 1) as Cost * edge_cost(r);

        // From above.
        for j in 1..=width {
            let (a, b) = oriented(transposed, r, &cols[j - 1]);
            current[j] = previous[j] + down_cost(a, b);
        }

        // Match or substitution against the previous row.
        for j in 1..=width {
            let c = &cols[j - 1];
            if r == c {
                current[j] = previous[j - 1];
            } else {
                let (a, b) = oriented(transposed, r, c);
                current[j] = current[j].min(previous[j - 1] + costs.substitution_cost(a, b));
            }
        }

        // From the left, within the current row.
        for j in 1..=width {
            let c = &cols[j - 1];
            if r != c {
                let (a, b) = oriented(transposed, r, c);
                current[j] = current[j].min(current[j - 1] + right_cost(a, b));
            }
        }

        std::mem::swap(&mut previous, &mut current);
    }

    previous[width]
}

/// Put a (row unit, column unit) pair back into (seq1, seq2) order.
fn oriented<'a, T>(transposed: bool, r: &'a T, c: &'a T) -> (&'a T, &'a T) {
    if transposed { (c, r) } else { (r, c) }
}

/// Unit-cost Levenshtein distance between two strings, counted in codepoints.
pub fn char_distance(s1: &str, s2: &str) -> usize {
    let s1_chars: Vec<char> = s1.chars().collect();
    let s2_chars: Vec<char> = s2.chars().collect();

    distance(&s1_chars, &s2_chars, &EditCosts::default()) as usize
}

/// Normalised similarity between 0.0 (nothing in common) and 1.0 (identical).
pub fn similarity(s1: &str, s2: &str) -> f64 {
    let max_len = s1.chars().count().max(s2.chars().count());
    if max_len == 0 {
        return 1.0;
    }

    1.0 - (char_distance(s1, s2) as f64 / max_len as f64)
}
