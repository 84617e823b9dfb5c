//! Walk the whole catalog: draw a sample set per family and compare the
//! sampled statistics against the closed-form moments.

use vizmath_dist::{Family, Summary, UniformSource};

fn main() {
    let source = UniformSource::new();
    let count = 5_000;

    println!("=== Distribution Catalog ===\n");

    for family in Family::ALL {
        let spec = family.descriptor();
        let dist = family.default_distribution();
        let samples = dist.sample_many(&source, count);
        let summary = Summary::from_samples(&samples).expect("sample set is non-empty");

        println!("{} — {}", spec.name, spec.description);
        for param in spec.params {
            println!(
                "  {:>8}: default {} in [{}, {}] step {}",
                param.name, param.default, param.min, param.max, param.step
            );
        }
        println!(
            "  mean: sampled {:.3} vs exact {:.3}",
            summary.mean,
            dist.mean()
        );
        println!(
            "  std dev: sampled {:.3} vs exact {:.3}",
            summary.std_dev,
            dist.variance().sqrt()
        );
        println!(
            "  median {:.3}, min {:.3}, max {:.3}\n",
            summary.median, summary.min, summary.max
        );
    }
}
