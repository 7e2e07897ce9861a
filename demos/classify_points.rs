use psp::{build_similarity_matrix, ClassMap, ClassMapConfig};
use rand::prelude::*;

fn gaussian_similarity(a: &[f32; 2], b: &[f32; 2]) -> f32 {
    let d2 = (a[0] - b[0]).powi(2) + (a[1] - b[1]).powi(2);
    (-d2 / 2.0).exp()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Three blobs of different sizes in 2D, sampled with a fixed seed.
    let mut rng = StdRng::seed_from_u64(7);
    let centers = [([0.0_f32, 0.0], 40), ([6.0, 0.0], 25), ([0.0, 6.0], 15)];

    let mut points: Vec<[f32; 2]> = Vec::new();
    for (center, count) in centers {
        for _ in 0..count {
            points.push([
                center[0] + rng.random_range(-1.0..1.0),
                center[1] + rng.random_range(-1.0..1.0),
            ]);
        }
    }

    let sim = build_similarity_matrix(&points, gaussian_similarity)?;
    let config = ClassMapConfig::new().with_checked_inputs(true);
    let mut classes = ClassMap::with_config(&points, sim.view(), 0.6, &config)?;

    println!("greedy pass: {} classes", classes.n_classes());
    print!("{}", classes.table(10));

    classes.sort();
    classes.truncate(3)?;
    println!("\nafter truncate(3):");
    print!("{}", classes.default_table());

    // Extend to fresh samples: similarity of each new point to each prototype.
    let fresh: Vec<[f32; 2]> = (0..20)
        .map(|_| [rng.random_range(-1.0..7.0), rng.random_range(-1.0..7.0)])
        .collect();
    let sim2 = ndarray::Array2::from_shape_fn((fresh.len(), classes.n_classes()), |(i, c)| {
        gaussian_similarity(&fresh[i], &points[classes.prototypes()[c]])
    });
    let extended = classes.augment(&fresh, sim2.view())?;

    println!("\naugmented ({} points):", extended.total);
    print!("{}", extended.default_table());

    Ok(())
}
