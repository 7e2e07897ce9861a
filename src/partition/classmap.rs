use super::augment::{augment_classes, Augmentation};
use super::greedy::{partition, Partition};
use super::index::{build_index, members_from_assignments, nearest_prototypes, ClassEntry, UNCLASSIFIED};
use crate::error::{Error, Result};
use crate::matrix::{validate_inputs, ValidationConfig};
use crate::report::{ClassTable, DEFAULT_MAX_LINES};
use ndarray::ArrayView2;
use tracing::{info, warn};

/// Configuration for [`ClassMap::with_config`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ClassMapConfig {
    /// Input checks run before the greedy pass.
    pub validation: ValidationConfig,
}

impl ClassMapConfig {
    /// Create a new configuration (validation disabled).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the validation configuration.
    pub fn with_validation(mut self, validation: ValidationConfig) -> Self {
        self.validation = validation;
        self
    }

    /// Shorthand for enabling validation with default tolerances.
    pub fn with_checked_inputs(mut self, check: bool) -> Self {
        self.validation.enabled = check;
        self
    }
}

/// A classification of a data set, plus the operations that reshape it.
///
/// Created by the greedy pass; [`reassign`](Self::reassign),
/// [`sort`](Self::sort), and [`truncate`](Self::truncate) then mutate it in
/// place. The assignment map, member sets, and class index always describe
/// the same partition of `0..N`.
///
/// The data set is borrowed and kept for reference only; all decisions are
/// made from the similarity matrix.
///
/// # Example
///
/// ```rust
/// use ndarray::array;
/// use psp::ClassMap;
///
/// let data = ["a", "a'", "b", "b'"];
/// let sim = array![
///     [1.0_f32, 0.9, 0.1, 0.1],
///     [0.9, 1.0, 0.1, 0.1],
///     [0.1, 0.1, 1.0, 0.8],
///     [0.1, 0.1, 0.8, 1.0],
/// ];
///
/// let mut classes = ClassMap::new(&data, sim.view(), 0.5).unwrap();
/// assert_eq!(classes.n_classes(), 2);
///
/// classes.truncate(1).unwrap();
/// assert_eq!(classes.assignments(), &[1, 1, 1, 1]);
/// ```
#[derive(Debug, Clone)]
pub struct ClassMap<'a, T> {
    data: &'a [T],
    simmat: ArrayView2<'a, f32>,
    thresh: f32,
    prototypes: Vec<usize>,
    members: Vec<Vec<usize>>,
    assignments: Vec<usize>,
    index: Vec<ClassEntry>,
}

impl<'a, T> ClassMap<'a, T> {
    /// Classify `data` from its similarity matrix, without input checks.
    pub fn new(data: &'a [T], simmat: ArrayView2<'a, f32>, thresh: f32) -> Result<Self> {
        Self::with_config(data, simmat, thresh, &ClassMapConfig::default())
    }

    /// Classify `data` from its similarity matrix.
    ///
    /// # Errors
    ///
    /// Validation errors (when enabled in `config`), then the errors of
    /// [`partition`].
    pub fn with_config(
        data: &'a [T],
        simmat: ArrayView2<'a, f32>,
        thresh: f32,
        config: &ClassMapConfig,
    ) -> Result<Self> {
        info!(
            data_len = data.len(),
            rows = simmat.nrows(),
            cols = simmat.ncols(),
            thresh,
            "classifying"
        );
        validate_inputs(data.len(), simmat, &config.validation)?;

        let Partition {
            assignments,
            prototypes,
            members,
        } = partition(simmat, thresh)?;
        let index = build_index(&prototypes, &members, assignments.len());

        info!(classes = prototypes.len(), "classification complete");

        Ok(Self {
            data,
            simmat,
            thresh,
            prototypes,
            members,
            assignments,
            index,
        })
    }

    /// Reassign every element to its most similar prototype.
    ///
    /// Ignores the threshold, so every element stays classified. Class
    /// numbers are kept; classes may shrink (even to zero members) and
    /// lose their size ordering, so a [`sort`](Self::sort) usually follows.
    pub fn reassign(&mut self) {
        let assignments = nearest_prototypes(self.simmat, &self.prototypes);
        self.rebuild(assignments);
    }

    /// Renumber classes by descending size.
    ///
    /// Stable: classes of equal size keep their relative order. Membership
    /// does not change.
    pub fn sort(&mut self) {
        let k = self.prototypes.len();
        let mut order: Vec<usize> = (0..k).collect();
        order.sort_by(|&a, &b| self.members[b].len().cmp(&self.members[a].len()));

        // remap[old class] = new class
        let mut remap = vec![UNCLASSIFIED; k + 1];
        for (new, &old) in order.iter().enumerate() {
            remap[old + 1] = new + 1;
        }

        self.prototypes = order.iter().map(|&old| self.prototypes[old]).collect();
        let assignments = self.assignments.iter().map(|&c| remap[c]).collect();
        self.rebuild(assignments);
    }

    /// Keep only the first `maxclasses` prototypes, then reassign and sort.
    ///
    /// Normally called after [`sort`](Self::sort) so the largest classes
    /// survive. Discarded prototypes are gone for good. A `maxclasses`
    /// larger than the current class count keeps every class.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidClassCount`] if `maxclasses` is zero; the map is left
    /// unchanged.
    pub fn truncate(&mut self, maxclasses: usize) -> Result<()> {
        let available = self.prototypes.len();
        if maxclasses == 0 {
            return Err(Error::InvalidClassCount {
                requested: maxclasses,
                available,
            });
        }
        if maxclasses > available {
            warn!(
                requested = maxclasses,
                available, "truncate asked for more classes than exist; keeping all"
            );
        }

        self.prototypes.truncate(maxclasses);
        self.reassign();
        self.sort();
        Ok(())
    }

    /// Extend the classification to a second data set.
    ///
    /// `simmat2` is M×P: row `i`, column `c` is the similarity between
    /// element `i` of `datafull` and the prototype of class `c + 1`.
    /// `datafull` is expected, not checked, to contain the classified data
    /// set. The result is independent of `self`.
    ///
    /// # Errors
    ///
    /// - [`Error::ShapeMismatch`] if `datafull.len()` differs from the row
    ///   count of `simmat2`.
    /// - [`Error::EmptyInput`] if `simmat2` has no rows or no columns.
    pub fn augment<U>(&self, datafull: &[U], simmat2: ArrayView2<'_, f32>) -> Result<Augmentation> {
        if simmat2.ncols() != self.prototypes.len() {
            warn!(
                columns = simmat2.ncols(),
                prototypes = self.prototypes.len(),
                "cross-similarity columns differ from retained prototypes"
            );
        }
        augment_classes(datafull.len(), simmat2)
    }

    /// The classified data set.
    pub fn data(&self) -> &'a [T] {
        self.data
    }

    /// The similarity matrix.
    pub fn simmat(&self) -> ArrayView2<'a, f32> {
        self.simmat
    }

    /// Threshold used by the greedy pass.
    pub fn threshold(&self) -> f32 {
        self.thresh
    }

    /// Prototype index per class, class 1 first.
    pub fn prototypes(&self) -> &[usize] {
        &self.prototypes
    }

    /// Member indices per class.
    pub fn members(&self) -> &[Vec<usize>] {
        &self.members
    }

    /// 1-based class number of every element.
    pub fn assignments(&self) -> &[usize] {
        &self.assignments
    }

    /// One entry per class.
    pub fn index(&self) -> &[ClassEntry] {
        &self.index
    }

    /// Number of classes.
    pub fn n_classes(&self) -> usize {
        self.prototypes.len()
    }

    /// Number of classified elements (N).
    pub fn total_count(&self) -> usize {
        self.assignments.len()
    }

    /// Printable class table, eliding the middle when longer than `max_lines`.
    pub fn table(&self, max_lines: usize) -> ClassTable<'_> {
        ClassTable::new(&self.index, max_lines)
    }

    /// Printable class table with [`DEFAULT_MAX_LINES`].
    pub fn default_table(&self) -> ClassTable<'_> {
        self.table(DEFAULT_MAX_LINES)
    }

    /// Replace assignments and regenerate member sets and class index.
    fn rebuild(&mut self, assignments: Vec<usize>) {
        self.members = members_from_assignments(&assignments, self.prototypes.len());
        self.index = build_index(&self.prototypes, &self.members, assignments.len());
        self.assignments = assignments;
    }
}
