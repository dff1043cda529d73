// Host-side tests for the easing curves.

use dotgrid_core::*;

const ALL: [Ease; 4] = [Ease::Linear, Ease::EaseIn, Ease::EaseOut, Ease::EaseInOut];

#[test]
fn every_curve_fixes_the_endpoints() {
    for kind in ALL {
        assert!(ease(kind, 0.0).abs() < 1e-6, "{kind:?} at 0");
        assert!((ease(kind, 1.0) - 1.0).abs() < 1e-6, "{kind:?} at 1");
    }
}

#[test]
fn known_midpoints() {
    assert!((ease(Ease::Linear, 0.3) - 0.3).abs() < 1e-6);
    assert!((ease(Ease::EaseIn, 0.5) - 0.125).abs() < 1e-6);
    assert!((ease(Ease::EaseOut, 0.5) - 0.875).abs() < 1e-6);
    assert!((ease(Ease::EaseInOut, 0.25) - 0.0625).abs() < 1e-6);
    assert!((ease(Ease::EaseInOut, 0.75) - 0.9375).abs() < 1e-6);
}

#[test]
fn ease_in_out_is_continuous_at_the_midpoint() {
    let below = ease(Ease::EaseInOut, 0.499_99);
    let above = ease(Ease::EaseInOut, 0.5);
    assert!((below - 0.5).abs() < 1e-3);
    assert!((above - 0.5).abs() < 1e-6);
}

#[test]
fn curves_are_monotone_and_stay_in_unit_range() {
    for kind in ALL {
        let mut prev = 0.0f32;
        for step in 0..=200 {
            let v = ease(kind, step as f32 / 200.0);
            assert!((0.0..=1.0 + 1e-6).contains(&v), "{kind:?} out of range: {v}");
            assert!(v + 1e-6 >= prev, "{kind:?} not monotone at step {step}");
            prev = v;
        }
    }
}

#[test]
fn names_match_the_config_vocabulary() {
    let parsed: Ease = serde_json::from_str("\"ease-in-out\"").unwrap();
    assert_eq!(parsed, Ease::EaseInOut);
    let parsed: Ease = serde_json::from_str("\"ease-out\"").unwrap();
    assert_eq!(parsed, Ease::EaseOut);
    assert_eq!(serde_json::to_string(&Ease::EaseIn).unwrap(), "\"ease-in\"");
    assert!(serde_json::from_str::<Ease>("\"bounce\"").is_err());
}
