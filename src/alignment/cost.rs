//! Cost configuration for edit distance and alignment.
//!
//! A cost configuration is three scalar defaults plus an optional table of
//! per-pair overrides. It is always handed to the engine by shared reference
//! for the duration of one call; the engine never mutates it.

use std::hash::Hash;

use ahash::AHashMap;

/// Numeric cost of an edit operation.
pub type Cost = f64;

/// A comparable unit of a token sequence: a `char`, a word, a glyph id...
pub trait Unit: Eq + Hash + Clone {}

impl<T: Eq + Hash + Clone> Unit for T {}

/// Per-pair cost overrides.
///
/// Interior cells of the scoring matrix consult the ordered pair `(a, b)`
/// for all three candidate operations, while the boundary row and column
/// consult the per-unit costs registered through
/// [`CostOverrides::insertion_boundary`] and
/// [`CostOverrides::deletion_boundary`]. Lookups borrow the units.
#[derive(Debug, Clone)]
pub struct CostOverrides<T: Unit> {
    pairs: AHashMap<T, AHashMap<T, Cost>>,
    insertion_boundary: AHashMap<T, Cost>,
    deletion_boundary: AHashMap<T, Cost>,
}

impl<T: Unit> CostOverrides<T> {
    /// Create an empty override table.
    pub fn new() -> Self {
        CostOverrides {
            pairs: AHashMap::new(),
            insertion_boundary: AHashMap::new(),
            deletion_boundary: AHashMap::new(),
        }
    }

    /// Override the cost of editing `a` (from the first sequence) against
    /// `b` (from the second sequence).
    pub fn pair(mut self, a: T, b: T, cost: Cost) -> Self {
        self.pairs.entry(a).or_default().insert(b, cost);
        self
    }

    /// Override the per-unit cost of deleting `unit` along column 0.
    pub fn deletion_boundary(mut self, unit: T, cost: Cost) -> Self {
        self.deletion_boundary.insert(unit, cost);
        self
    }

    /// Override the per-unit cost of inserting `unit` along row 0.
    pub fn insertion_boundary(mut self, unit: T, cost: Cost) -> Self {
        self.insertion_boundary.insert(unit, cost);
        self
    }

    /// Look up an override, `None` standing for the empty unit.
    ///
    /// `(Some(a), None)` is the insertion boundary of `a` and `(None, Some(b))`
    /// the deletion boundary of `b`.
    pub fn get(&self, a: Option<&T>, b: Option<&T>) -> Option<Cost> {
        match (a, b) {
            (Some(a), Some(b)) => self.pairs.get(a)?.get(b).copied(),
            (Some(a), None) => self.insertion_boundary.get(a).copied(),
            (None, Some(b)) => self.deletion_boundary.get(b).copied(),
            (None, None) => None,
        }
    }

    /// Number of registered overrides.
    pub fn len(&self) -> usize {
        self.pairs.values().map(|row| row.len()).sum::<usize>()
            + self.insertion_boundary.len()
            + self.deletion_boundary.len()
    }

    /// Whether no overrides are registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: Unit> Default for CostOverrides<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Scalar edit costs plus per-pair overrides.
#[derive(Debug, Clone)]
pub struct EditCosts<T: Unit> {
    /// Default cost of replacing one unit with a different one.
    pub substitution: Cost,
    /// Default cost of a unit present only in the second sequence.
    pub insertion: Cost,
    /// Default cost of a unit present only in the first sequence.
    pub deletion: Cost,
    /// Per-pair overrides, consulted before the defaults.
    pub overrides: CostOverrides<T>,
}

impl<T: Unit> EditCosts<T> {
    /// Create a cost configuration without overrides.
    pub fn new(substitution: Cost, insertion: Cost, deletion: Cost) -> Self {
        EditCosts {
            substitution,
            insertion,
            deletion,
            overrides: CostOverrides::new(),
        }
    }

    /// Replace the substitution cost.
    pub fn with_substitution(mut self, cost: Cost) -> Self {
        self.substitution = cost;
        self
    }

    /// Replace the insertion cost.
    pub fn with_insertion(mut self, cost: Cost) -> Self {
        self.insertion = cost;
        self
    }

    /// Replace the deletion cost.
    pub fn with_deletion(mut self, cost: Cost) -> Self {
        self.deletion = cost;
        self
    }

    /// Attach an override table.
    pub fn with_overrides(mut self, overrides: CostOverrides<T>) -> Self {
        self.overrides = overrides;
        self
    }

    pub(crate) fn substitution_cost(&self, a: &T, b: &T) -> Cost {
        self.overrides
            .get(Some(a), Some(b))
            .unwrap_or(self.substitution)
    }

    pub(crate) fn insertion_cost(&self, a: &T, b: &T) -> Cost {
        self.overrides.get(Some(a), Some(b)).unwrap_or(self.insertion)
    }

    pub(crate) fn deletion_cost(&self, a: &T, b: &T) -> Cost {
        self.overrides.get(Some(a), Some(b)).unwrap_or(self.deletion)
    }

    pub(crate) fn boundary_insertion(&self, b: &T) -> Cost {
        self.overrides.get(Some(b), None).unwrap_or(self.insertion)
    }

    pub(crate) fn boundary_deletion(&self, a: &T) -> Cost {
        self.overrides.get(None, Some(a)).unwrap_or(self.deletion)
    }
}

impl<T: Unit> Default for EditCosts<T> {
    fn default() -> Self {
        Self::new(1.0, 1.0, 1.0)
    }
}
