//! Class bookkeeping shared by the greedy pass, the class map, and augmentation.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use ndarray::ArrayView2;

/// Class number meaning "not yet classified".
///
/// Only ever seen inside the greedy pass; no returned assignment map
/// contains it.
pub const UNCLASSIFIED: usize = 0;

/// One row of a class index.
///
/// A denormalized view of the prototype sequence and member sets, rebuilt
/// whenever either changes.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClassEntry {
    /// Class number (1-based).
    pub class: usize,
    /// Index of the class prototype in the data set.
    pub prototype: usize,
    /// Number of members.
    pub count: usize,
    /// Member indices, ascending.
    pub members: Vec<usize>,
    /// `count / total`.
    pub fraction: f64,
}

/// Index of the first maximum. NaN never wins against a number.
pub(crate) fn argmax<T, I>(values: I) -> Option<usize>
where
    T: PartialOrd + Copy,
    I: IntoIterator<Item = T>,
{
    let mut best: Option<(usize, T)> = None;
    for (i, v) in values.into_iter().enumerate() {
        let replace = match best {
            None => true,
            Some((_, b)) => v > b,
        };
        if replace {
            best = Some((i, v));
        }
    }
    best.map(|(i, _)| i)
}

/// Group indices by their 1-based class number.
pub(crate) fn members_from_assignments(assignments: &[usize], n_classes: usize) -> Vec<Vec<usize>> {
    let mut members = vec![Vec::new(); n_classes];
    for (i, &class) in assignments.iter().enumerate() {
        if let Some(set) = class.checked_sub(1).and_then(|k| members.get_mut(k)) {
            set.push(i);
        }
    }
    members
}

pub(crate) fn build_index(prototypes: &[usize], members: &[Vec<usize>], total: usize) -> Vec<ClassEntry> {
    prototypes
        .iter()
        .zip(members)
        .enumerate()
        .map(|(k, (&prototype, set))| ClassEntry {
            class: k + 1,
            prototype,
            count: set.len(),
            members: set.clone(),
            fraction: set.len() as f64 / total as f64,
        })
        .collect()
}

/// For every column `i`, the 1-based class of the prototype row `p`
/// maximizing `simmat[[p, i]]`; ties go to the lowest class.
pub(crate) fn nearest_prototypes(simmat: ArrayView2<'_, f32>, prototypes: &[usize]) -> Vec<usize> {
    let nearest = |i: usize| {
        argmax(prototypes.iter().map(|&p| simmat[[p, i]])).map_or(UNCLASSIFIED, |k| k + 1)
    };

    #[cfg(feature = "parallel")]
    {
        (0..simmat.ncols()).into_par_iter().map(nearest).collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        (0..simmat.ncols()).map(nearest).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_argmax_first_occurrence_wins() {
        assert_eq!(argmax([1, 3, 3, 2]), Some(1));
        assert_eq!(argmax([0.5_f32, 0.5, 0.5]), Some(0));
        assert_eq!(argmax(Vec::<f32>::new()), None);
    }

    #[test]
    fn test_argmax_skips_nan() {
        assert_eq!(argmax([0.2_f32, f32::NAN, 0.7]), Some(2));
    }

    #[test]
    fn test_members_from_assignments_keeps_empty_classes() {
        let members = members_from_assignments(&[1, 3, 1, 3], 3);
        assert_eq!(members, vec![vec![0, 2], vec![], vec![1, 3]]);
    }

    #[test]
    fn test_build_index_fractions() {
        let index = build_index(&[4, 1], &[vec![0, 2, 4], vec![1]], 4);
        assert_eq!(index.len(), 2);
        assert_eq!(index[0].class, 1);
        assert_eq!(index[0].prototype, 4);
        assert_eq!(index[0].count, 3);
        assert!((index[0].fraction - 0.75).abs() < 1e-12);
        assert_eq!(index[1].members, vec![1]);
    }

    #[test]
    fn test_nearest_prototypes_tie_goes_to_lower_class() {
        let sim = array![
            [1.0_f32, 0.4, 0.6],
            [0.4, 1.0, 0.6],
            [0.6, 0.6, 1.0]
        ];
        // Prototypes 0 and 1; index 2 is equally close to both.
        assert_eq!(nearest_prototypes(sim.view(), &[0, 1]), vec![1, 2, 1]);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_class_entry_serde() {
        let entry = ClassEntry {
            class: 2,
            prototype: 7,
            count: 2,
            members: vec![3, 7],
            fraction: 0.25,
        };
        let json = serde_json::to_string(&entry).unwrap();
        let back: ClassEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(back, entry);
    }
}
