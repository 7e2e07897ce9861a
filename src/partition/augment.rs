use super::index::{argmax, build_index, members_from_assignments, ClassEntry, UNCLASSIFIED};
use crate::error::{Error, Result};
use crate::report::{ClassTable, DEFAULT_MAX_LINES};
use ndarray::ArrayView2;

/// Classes extended to a second data set.
///
/// Same shape as the primary classification, but computed from an M×P
/// cross-similarity matrix against the P retained prototypes. Never merged
/// back into the [`ClassMap`](super::ClassMap) that produced it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Augmentation {
    /// Per class, the row of the second data set most similar to the
    /// original prototype.
    pub prototypes: Vec<usize>,
    /// 1-based class number of every row.
    pub assignments: Vec<usize>,
    /// Member rows per class, ascending.
    pub members: Vec<Vec<usize>>,
    /// Class index over the second data set.
    pub index: Vec<ClassEntry>,
    /// Number of rows (M).
    pub total: usize,
}

impl Augmentation {
    /// Number of classes.
    pub fn n_classes(&self) -> usize {
        self.prototypes.len()
    }

    /// Printable class table, eliding the middle when longer than `max_lines`.
    pub fn table(&self, max_lines: usize) -> ClassTable<'_> {
        ClassTable::new(&self.index, max_lines)
    }

    /// Printable class table with [`DEFAULT_MAX_LINES`].
    pub fn default_table(&self) -> ClassTable<'_> {
        self.table(DEFAULT_MAX_LINES)
    }
}

pub(crate) fn augment_classes(data_len: usize, simmat2: ArrayView2<'_, f32>) -> Result<Augmentation> {
    let (m, p) = simmat2.dim();
    if data_len != m {
        return Err(Error::ShapeMismatch {
            expected: format!("cross-similarity matrix with {data_len} rows (data length)"),
            actual: format!("{m} rows"),
        });
    }
    if m == 0 || p == 0 {
        return Err(Error::EmptyInput);
    }

    let prototypes: Vec<usize> = simmat2
        .columns()
        .into_iter()
        .map(|col| argmax(col.iter().copied()).unwrap_or_default())
        .collect();
    let assignments: Vec<usize> = simmat2
        .rows()
        .into_iter()
        .map(|row| argmax(row.iter().copied()).map_or(UNCLASSIFIED, |k| k + 1))
        .collect();

    let members = members_from_assignments(&assignments, p);
    let index = build_index(&prototypes, &members, m);

    Ok(Augmentation {
        prototypes,
        assignments,
        members,
        index,
        total: m,
    })
}
