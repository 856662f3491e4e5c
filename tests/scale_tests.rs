use gpui_range_slider::{ConfigurationError, Scale};

#[test]
fn test_to_percent_endpoints() {
    for (min, max) in [(0.0, 100.0), (-50.0, 50.0), (0.25, 0.75), (1e6, 2e6)] {
        let scale = Scale::new(min, max).unwrap();
        assert_eq!(scale.to_percent(min), 0.0);
        assert_eq!(scale.to_percent(max), 100.0);
    }
}

#[test]
fn test_to_percent_midpoint() {
    let scale = Scale::new(20.0, 60.0).unwrap();
    assert_eq!(scale.range(), 40.0);
    assert_eq!(scale.to_percent(40.0), 50.0);
    assert_eq!(scale.to_percent(30.0), 25.0);
}

#[test]
fn test_to_percent_negative_domain() {
    let scale = Scale::new(-10.0, 10.0).unwrap();
    assert_eq!(scale.to_percent(-10.0), 0.0);
    assert_eq!(scale.to_percent(5.0), 75.0);
    assert_eq!(scale.to_percent(10.0), 100.0);
}

#[test]
fn test_zero_length_domain_is_rejected() {
    assert_eq!(
        Scale::new(5.0, 5.0),
        Err(ConfigurationError::InvalidDomain { min: 5.0, max: 5.0 })
    );
}

#[test]
fn test_inverted_and_degenerate_domains_are_rejected() {
    assert!(Scale::new(10.0, 0.0).is_err());
    assert!(Scale::new(f64::NAN, 1.0).is_err());
    assert!(Scale::new(0.0, f64::INFINITY).is_err());
    assert!(Scale::new(f64::MIN, f64::MAX).is_err());
}

#[test]
fn test_nice_ticks_cover_domain() {
    let scale = Scale::new(0.0, 1000.0).unwrap();
    let ticks = scale.nice_ticks(10);
    assert!(!ticks.is_empty());
    assert!(ticks.iter().all(|t| (0.0..=1000.0).contains(t)));
    assert!(ticks.windows(2).all(|w| w[0] < w[1]));
}
