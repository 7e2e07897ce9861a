#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::needless_range_loop)]
mod tests {
    use crate::partition::{partition, ClassMap, Partition};
    use ndarray::Array2;
    use proptest::prelude::*;

    /// Random symmetric matrix with ones on the diagonal.
    fn similarity_matrix() -> impl Strategy<Value = Array2<f32>> {
        (1usize..24).prop_flat_map(|n| {
            proptest::collection::vec(0.0f32..=1.0, n * n).prop_map(move |values| {
                let mut sim = Array2::from_shape_vec((n, n), values).unwrap();
                for i in 0..n {
                    sim[[i, i]] = 1.0;
                    for j in 0..i {
                        sim[[i, j]] = sim[[j, i]];
                    }
                }
                sim
            })
        })
    }

    fn is_exact_cover(members: &[Vec<usize>], assignments: &[usize]) -> bool {
        let mut seen = vec![false; assignments.len()];
        for (k, set) in members.iter().enumerate() {
            for &i in set {
                if seen[i] || assignments[i] != k + 1 {
                    return false;
                }
                seen[i] = true;
            }
        }
        seen.into_iter().all(|s| s)
    }

    proptest! {
        #[test]
        fn greedy_pass_is_an_exact_partition(sim in similarity_matrix(), thresh in 0.0f32..=1.0) {
            let n = sim.nrows();
            let p = partition(sim.view(), thresh).unwrap();

            prop_assert!(p.n_classes() >= 1 && p.n_classes() <= n);
            prop_assert_eq!(p.members.len(), p.n_classes());
            prop_assert!(is_exact_cover(&p.members, &p.assignments));
            prop_assert!(p.assignments.iter().all(|&c| c >= 1));
        }

        #[test]
        fn prototypes_cover_themselves(sim in similarity_matrix(), thresh in 0.0f32..=1.0) {
            let p = partition(sim.view(), thresh).unwrap();
            for (k, &proto) in p.prototypes.iter().enumerate() {
                prop_assert_eq!(p.assignments[proto], k + 1);
            }
        }

        #[test]
        fn members_meet_threshold_against_prototype(sim in similarity_matrix(), thresh in 0.0f32..=1.0) {
            let p = partition(sim.view(), thresh).unwrap();
            for (k, set) in p.members.iter().enumerate() {
                let proto = p.prototypes[k];
                for &i in set {
                    prop_assert!(i == proto || sim[[proto, i]] >= thresh);
                }
            }
        }

        #[test]
        fn greedy_pass_is_deterministic(sim in similarity_matrix(), thresh in 0.0f32..=1.0) {
            let a: Partition = partition(sim.view(), thresh).unwrap();
            let b: Partition = partition(sim.view(), thresh).unwrap();
            prop_assert_eq!(a, b);
        }

        #[test]
        fn reassign_is_idempotent(sim in similarity_matrix(), thresh in 0.0f32..=1.0) {
            let data = vec![(); sim.nrows()];
            let mut classes = ClassMap::new(&data, sim.view(), thresh).unwrap();

            classes.reassign();
            let first = classes.assignments().to_vec();
            classes.reassign();

            prop_assert_eq!(classes.assignments(), first.as_slice());
            prop_assert!(is_exact_cover(classes.members(), classes.assignments()));
        }

        #[test]
        fn sort_orders_by_size_and_keeps_membership(sim in similarity_matrix(), thresh in 0.0f32..=1.0) {
            let data = vec![(); sim.nrows()];
            let mut classes = ClassMap::new(&data, sim.view(), thresh).unwrap();
            classes.reassign();

            let mut before: Vec<Vec<usize>> = classes.members().to_vec();
            classes.sort();
            let mut after: Vec<Vec<usize>> = classes.members().to_vec();

            let counts: Vec<usize> = classes.index().iter().map(|c| c.count).collect();
            prop_assert!(counts.windows(2).all(|w| w[0] >= w[1]));
            for (k, entry) in classes.index().iter().enumerate() {
                prop_assert_eq!(entry.class, k + 1);
                prop_assert_eq!(entry.prototype, classes.prototypes()[k]);
            }

            before.sort();
            after.sort();
            prop_assert_eq!(before, after);

            // Sorting a sorted map changes nothing.
            let sorted = classes.index().to_vec();
            classes.sort();
            prop_assert_eq!(classes.index(), sorted.as_slice());
        }

        #[test]
        fn truncate_leaves_exactly_k_classes(
            sim in similarity_matrix(),
            thresh in 0.0f32..=1.0,
            pick in 0usize..64,
        ) {
            let data = vec![(); sim.nrows()];
            let mut classes = ClassMap::new(&data, sim.view(), thresh).unwrap();
            classes.sort();
            let k = 1 + pick % classes.n_classes();
            let kept: Vec<usize> = classes.prototypes()[..k].to_vec();

            classes.truncate(k).unwrap();

            prop_assert_eq!(classes.n_classes(), k);
            prop_assert_eq!(classes.index().len(), k);
            prop_assert!(is_exact_cover(classes.members(), classes.assignments()));
            let total: usize = classes.index().iter().map(|c| c.count).sum();
            prop_assert_eq!(total, sim.nrows());

            let mut after = classes.prototypes().to_vec();
            let mut expected = kept;
            after.sort_unstable();
            expected.sort_unstable();
            prop_assert_eq!(after, expected);
        }
    }
}
