use distplot::{Catalog, CONTINUOUS_SAMPLES, DistributionKind, Error, ParamValues, PlotKind};

fn defaults(catalog: &Catalog, name: &str) -> ParamValues {
    catalog.get_spec(name).unwrap().default_values()
}

#[test]
fn every_default_evaluates_to_finite_nonnegative_samples() {
    let catalog = Catalog::new();
    for spec in catalog.iter() {
        let curve = spec.evaluate(&spec.default_values()).unwrap();
        assert_eq!(curve.x.len(), curve.y.len(), "{}", spec.name());
        assert!(!curve.is_empty(), "{}", spec.name());
        assert!(
            curve.y.iter().all(|y| y.is_finite() && *y >= 0.0),
            "{} has a bad sample",
            spec.name()
        );
        assert!(
            curve.x.windows(2).all(|w| w[0] < w[1]),
            "{} domain is not increasing",
            spec.name()
        );
    }
}

#[test]
fn masses_are_probabilities() {
    let catalog = Catalog::new();
    for spec in catalog.iter().filter(|s| s.kind().is_discrete()) {
        let curve = spec.evaluate(&spec.default_values()).unwrap();
        assert!(curve.y.iter().all(|y| *y <= 1.0), "{}", spec.name());
        assert_eq!(spec.display().kind, PlotKind::Bar);
    }
}

#[test]
fn continuous_domains_hold_a_thousand_samples() {
    let catalog = Catalog::new();
    for spec in catalog.iter().filter(|s| !s.kind().is_discrete()) {
        let curve = spec.evaluate(&spec.default_values()).unwrap();
        assert_eq!(curve.len(), CONTINUOUS_SAMPLES, "{}", spec.name());
        assert_eq!(spec.display().kind, PlotKind::Line);
    }
}

#[test]
fn binomial_masses_sum_to_one() {
    let catalog = Catalog::new();
    let curve = catalog
        .evaluate("Binomial", &defaults(&catalog, "Binomial"))
        .unwrap();
    assert_eq!(curve.x, (0..=10).map(f64::from).collect::<Vec<_>>());
    let total: f64 = curve.y.iter().sum();
    assert!((total - 1.0).abs() < 1e-9);
    // Symmetric at p = 0.5, peaked at n/2.
    assert_eq!(curve.nearest_index(5.0), Some(5));
    assert!((curve.y[5] - curve.y_max().unwrap()).abs() < 1e-12);
    assert!((curve.y[3] - curve.y[7]).abs() < 1e-12);
}

#[test]
fn binomial_degenerate_probability() {
    let catalog = Catalog::new();
    let values = ParamValues::new().with("n", 4_i64).with("p", 0.0);
    let curve = catalog.evaluate("Binomial", &values).unwrap();
    assert_eq!(curve.len(), 5);
    assert!((curve.y[0] - 1.0).abs() < 1e-12);
    assert!(curve.y[1..].iter().all(|y| y.abs() < 1e-12));
}

#[test]
fn poisson_domain_and_mode() {
    let catalog = Catalog::new();
    let curve = catalog
        .evaluate("Poisson", &defaults(&catalog, "Poisson"))
        .unwrap();
    assert_eq!(curve.len(), 24);
    assert!((curve.x[23] - 23.0).abs() < f64::EPSILON);
    // λ = 5: P(4) and P(5) tie for the mode.
    let max = curve.y_max().unwrap();
    assert!((curve.y[5] - max).abs() < 1e-12);
    assert!((curve.y[4] - curve.y[5]).abs() < 1e-12);
    assert!((curve.y[5] - 0.175_467_369_767_850_6).abs() < 1e-9);
}

#[test]
fn normal_peak_and_symmetry() {
    let catalog = Catalog::new();
    let curve = catalog
        .evaluate("Normal", &defaults(&catalog, "Normal"))
        .unwrap();
    let peak = curve.y_max().unwrap();
    // The grid straddles 0, so the sampled peak is within a hair of 1/sqrt(2π).
    assert!((peak - 0.398_942_280_401_432_7).abs() < 1e-3);
    let n = curve.len();
    for i in 0..n / 2 {
        assert!((curve.y[i] - curve.y[n - 1 - i]).abs() < 1e-12);
    }
}

#[test]
fn uniform_is_flat_inside_and_zero_outside() {
    let catalog = Catalog::new();
    let curve = catalog
        .evaluate("Uniform", &defaults(&catalog, "Uniform"))
        .unwrap();
    for (x, y) in curve.x.iter().zip(&curve.y) {
        if *x > -4.99 && *x < 4.99 {
            assert!((y - 0.1).abs() < 1e-12, "f({x}) = {y}");
        } else if *x < -5.01 || *x > 5.01 {
            assert!(y.abs() < f64::EPSILON, "f({x}) = {y}");
        }
    }
}

#[test]
fn uniform_rejects_inverted_and_empty_ranges() {
    let catalog = Catalog::new();
    let inverted = ParamValues::new().with("a", 5.0).with("b", -5.0);
    let err = catalog.evaluate("Uniform", &inverted).unwrap_err();
    assert!(err.is_validation());
    assert!(matches!(err, Error::InvalidRange { .. }));
    assert!(err.to_string().contains("must be less than the upper bound"));

    let empty = ParamValues::new().with("a", 2.0).with("b", 2.0);
    assert!(matches!(
        catalog.evaluate("Uniform", &empty),
        Err(Error::InvalidRange { .. })
    ));
}

#[test]
fn exponential_starts_at_rate() {
    let catalog = Catalog::new();
    let values = ParamValues::new().with("lambda", 2.5);
    let curve = catalog.evaluate("Exponential", &values).unwrap();
    assert!((curve.y[0] - 2.5).abs() < 1e-12);
    assert!((curve.x[curve.len() - 1] - 5.0).abs() < f64::EPSILON);
    assert!(curve.y.windows(2).all(|w| w[0] > w[1]));
}

#[test]
fn beta_is_uniform_at_one_one() {
    let catalog = Catalog::new();
    let curve = catalog.evaluate("Beta", &defaults(&catalog, "Beta")).unwrap();
    assert!(curve.y.iter().all(|y| (y - 1.0).abs() < 1e-9));
}

#[test]
fn beta_with_small_shape_keeps_length() {
    let catalog = Catalog::new();
    let values = ParamValues::new().with("alpha", 0.5).with("beta", 0.5);
    let curve = catalog.evaluate("Beta", &values).unwrap();
    assert_eq!(curve.len(), CONTINUOUS_SAMPLES);
    // The interior is finite even though the endpoints diverge.
    assert!(curve.y[1..CONTINUOUS_SAMPLES - 1].iter().all(|y| y.is_finite()));
}

#[test]
fn gamma_domain_scales_with_mean() {
    let catalog = Catalog::new();
    let values = ParamValues::new().with("k", 2.0).with("theta", 2.0);
    let curve = catalog.evaluate("Gamma", &values).unwrap();
    assert!(curve.x[0].abs() < f64::EPSILON);
    assert!((curve.x[curve.len() - 1] - 12.0).abs() < f64::EPSILON);
    assert!(curve.y[0].abs() < 1e-12);

    // Rises to the mode (k - 1)θ = 2, then falls.
    let mode = curve.nearest_index(2.0).unwrap();
    assert!(curve.y[..mode].windows(2).all(|w| w[0] <= w[1]));
    assert!(curve.y[mode + 1..].windows(2).all(|w| w[0] >= w[1]));
}

#[test]
fn log_normal_vanishes_at_origin() {
    let catalog = Catalog::new();
    let curve = catalog
        .evaluate("Log-normal", &defaults(&catalog, "Log-normal"))
        .unwrap();
    assert!(curve.y[0].abs() < f64::EPSILON);
    let upper = 4.0_f64.exp();
    assert!((curve.x[curve.len() - 1] - upper).abs() < 1e-9);
}

#[test]
fn weibull_domain_is_three_scales() {
    let catalog = Catalog::new();
    let values = ParamValues::new().with("k", 1.5).with("lambda", 4.0);
    let curve = catalog.evaluate("Weibull", &values).unwrap();
    assert!((curve.x[curve.len() - 1] - 12.0).abs() < 1e-12);
    assert!(curve.y.iter().all(|y| y.is_finite()));
}

#[test]
fn evaluation_is_deterministic() {
    let catalog = Catalog::new();
    for spec in catalog.iter() {
        let values = spec.default_values();
        assert_eq!(spec.evaluate(&values).unwrap(), spec.evaluate(&values).unwrap());
    }
}

#[test]
fn unknown_distribution_name() {
    let catalog = Catalog::new();
    assert!(matches!(
        catalog.evaluate("Cauchy", &ParamValues::new()),
        Err(Error::UnknownDistribution(name)) if name == "Cauchy"
    ));
}

#[test]
fn evaluate_checks_parameters_first() {
    let catalog = Catalog::new();
    let values = ParamValues::new().with("mu", 0.0).with("sigma", 50.0);
    assert!(matches!(
        catalog.evaluate("Normal", &values),
        Err(Error::OutOfBounds { .. })
    ));
    assert!(matches!(
        catalog.evaluate("Normal", &ParamValues::new()),
        Err(Error::MissingParameter(_))
    ));
}

#[test]
fn fixed_y_ranges() {
    let catalog = Catalog::new();
    let ranges: Vec<_> = DistributionKind::ALL
        .into_iter()
        .map(|kind| catalog.spec(kind).display().y_range)
        .collect();
    assert_eq!(
        ranges,
        [
            None,
            Some((0.0, 0.4)),
            Some((0.0, 1.0)),
            Some((0.0, 1.0)),
            Some((0.0, 3.0)),
            Some((0.0, 5.0)),
            None,
            None,
            None,
        ]
    );
}

#[test]
fn randomized_parameters_stay_finite_off_the_boundary() {
    let catalog = Catalog::new();
    let mut rng = fastrand::Rng::with_seed(42);
    for _ in 0..50 {
        for spec in catalog.iter() {
            let mut values = ParamValues::new();
            for param in spec.params() {
                let (low, high) = param.bounds.range();
                let raw = low + rng.f64() * (high - low);
                values.insert(param.name.clone(), param.snap(raw));
            }
            match spec.evaluate(&values) {
                Ok(curve) => {
                    let interior = &curve.y[1..curve.len().saturating_sub(1)];
                    assert!(
                        interior.iter().all(|y| y.is_finite() && *y >= 0.0),
                        "{} at {:?}",
                        spec.name(),
                        values
                    );
                }
                Err(e) => assert!(
                    spec.kind() == DistributionKind::Uniform && e.is_validation(),
                    "{} failed at {:?}: {e}",
                    spec.name(),
                    values
                ),
            }
        }
    }
}
