//! Engine-level tests across the catalog: support handling, normalization,
//! monotonicity, and sampling behavior for every family.

use vizmath_dist::{factorial, histogram, Family, Summary, UniformSource};

// ============================================================================
// Density and cumulative properties
// ============================================================================

#[test]
fn standard_normal_pdf_integrates_to_one() {
    let dist = Family::Normal.from_params(0.0, 1.0).unwrap();
    let (lo, hi) = dist.domain();
    let steps = 10_000;
    let width = (hi - lo) / steps as f64;
    let mut area = 0.0;
    for i in 0..steps {
        let x = lo + (i as f64 + 0.5) * width;
        area += dist.pdf(x) * width;
    }
    assert!((area - 1.0).abs() < 1e-2);
}

#[test]
fn every_family_pdf_is_zero_left_of_support() {
    for family in [Family::Binomial, Family::Poisson, Family::Exponential] {
        let dist = family.default_distribution();
        assert_eq!(dist.pdf(-3.0), 0.0);
        assert_eq!(dist.cdf(-3.0), 0.0);
    }
}

#[test]
fn every_family_cdf_is_monotone_and_bounded() {
    for family in Family::ALL {
        let dist = family.default_distribution();
        let (lo, hi) = dist.domain();
        let mut last = 0.0;
        for i in 0..=200 {
            let x = lo + (hi - lo) * i as f64 / 200.0;
            let c = dist.cdf(x);
            assert!(
                (0.0..=1.0).contains(&c),
                "cdf out of bounds for {}",
                family.descriptor().name
            );
            assert!(
                c >= last - 1e-12,
                "cdf decreased for {}",
                family.descriptor().name
            );
            last = c;
        }
    }
}

#[test]
fn binomial_cdf_reaches_one_at_trial_count() {
    let dist = Family::Binomial.from_params(17.0, 0.35).unwrap();
    assert!((dist.cdf(17.0) - 1.0).abs() < 1e-9);
}

#[test]
fn discrete_pdf_rejects_fractional_points() {
    for family in [Family::Binomial, Family::Poisson] {
        let dist = family.default_distribution();
        assert_eq!(dist.pdf(1.5), 0.0);
        assert!(dist.pdf(2.0) > 0.0);
    }
}

// ============================================================================
// Sampling
// ============================================================================

#[test]
fn uniform_unit_interval_mean_is_centered() {
    let dist = Family::Uniform.from_params(0.0, 1.0).unwrap();
    let source = UniformSource::new();
    let samples = dist.sample_many(&source, 10_000);
    let summary = Summary::from_samples(&samples).unwrap();
    assert!((summary.mean - 0.5).abs() < 0.05);
}

#[test]
fn sampled_means_track_closed_form_means() {
    let source = UniformSource::with_seed(2024);
    for family in Family::ALL {
        let dist = family.default_distribution();
        let samples = dist.sample_many(&source, 10_000);
        let summary = Summary::from_samples(&samples).unwrap();
        let expected = dist.mean();
        let spread = dist.variance().sqrt();
        // Allow several standard errors of slack
        let tolerance = (spread / 100.0) * 5.0 + 1e-3;
        assert!(
            (summary.mean - expected).abs() < tolerance,
            "{}: sampled mean {} vs expected {}",
            family.descriptor().name,
            summary.mean,
            expected
        );
    }
}

#[test]
fn sample_sets_regenerate_independently() {
    let dist = Family::Normal.default_distribution();
    let source = UniformSource::new();
    let first = dist.sample_many(&source, 100);
    let second = dist.sample_many(&source, 100);
    assert_ne!(first, second);
}

#[test]
fn histogram_of_normal_samples_peaks_near_mean() {
    let dist = Family::Normal.from_params(0.0, 1.0).unwrap();
    let source = UniformSource::with_seed(77);
    let samples = dist.sample_many(&source, 10_000);
    let counts = histogram(&samples, (-4.0, 4.0), 8);
    // The two central bins (-1..0 and 0..1) dominate the tails
    assert!(counts[3] > counts[0]);
    assert!(counts[4] > counts[7]);
}

// ============================================================================
// Overflow sentinel
// ============================================================================

#[test]
fn factorial_past_limit_is_the_sentinel() {
    assert_eq!(factorial(21), f64::INFINITY);
}

// ============================================================================
// Catalog serialization
// ============================================================================

#[test]
fn descriptors_serialize_for_the_control_layer() {
    let json = serde_json::to_string(Family::Normal.descriptor()).unwrap();
    assert!(json.contains("\"name\":\"Normal\""));
    assert!(json.contains("\"params\""));

    let catalog: Vec<_> = Family::ALL.iter().map(|f| f.descriptor()).collect();
    let json = serde_json::to_string(&catalog).unwrap();
    assert!(json.contains("Poisson"));
    assert!(json.contains("Exponential"));
}
