// Host-side tests for the field samplers and the frame sweep.

use cymatics_core::*;
use std::f64::consts::PI;

#[test]
fn square_sample_matches_closed_form_at_centre() {
    let s = select_square_modes(440.0);
    let v = sample_square(0.5, 0.5, s.n, s.m, 0.0, 440.0);
    let expected = (PI * s.n as f64 * 0.5).sin() * (PI * s.m as f64 * 0.5).sin();
    assert_eq!(v, expected);
    // (10,10): sin(5 pi) is a node
    assert!(v.abs() < 1e-12);
}

#[test]
fn square_fundamental_peaks_at_centre() {
    assert!((sample_square(0.5, 0.5, 1, 1, 0.0, 440.0) - 1.0).abs() < 1e-12);
    assert!((sample_square(0.5, 0.5, 1, 1, 1.0 / 880.0, 440.0) + 1.0).abs() < 1e-9);
}

#[test]
fn square_edges_are_nodal() {
    for n in 1..=10 {
        for m in 1..=10 {
            assert!(sample_square(0.0, 0.37, n, m, 0.1, 440.0).abs() < 1e-12);
            assert!(sample_square(0.63, 0.0, n, m, 0.1, 440.0).abs() < 1e-12);
            assert!(sample_square(1.0, 0.37, n, m, 0.1, 440.0).abs() < 1e-12);
        }
    }
}

#[test]
fn square_sample_is_bounded_for_any_inputs() {
    let coords = [-3.7, -0.2, 0.0, 0.13, 0.5, 0.99, 1.0, 12.5];
    let times = [0.0, 0.001, 0.37, 10.0, 1234.5];
    for &x in &coords {
        for &y in &coords {
            for &t in &times {
                for &f in &[50.0, 440.0, 4000.0, -20.0] {
                    let v = sample_square(x, y, 7, 3, t, f);
                    assert!((-1.0..=1.0).contains(&v), "{v} at {x},{y},{t},{f}");
                }
            }
        }
    }
}

#[test]
fn oscillation_is_shared_temporal_term() {
    assert_eq!(oscillation(440.0, 0.0), 1.0);
    assert!((oscillation(440.0, 0.25 / 440.0)).abs() < 1e-12);
    let spatial = membrane_spatial(0.3, 1.0, 4, 0);
    let t = 0.0123;
    let v = sample_membrane(60.0, 50.0, 100.0, 100.0, 4, 0, t, 440.0);
    let (rho, theta) = membrane_polar(60.0, 50.0, 100.0, 100.0);
    assert!((rho - 0.2).abs() < 1e-12);
    assert_eq!(theta, 0.0);
    assert_eq!(v, membrane_spatial(rho, theta, 4, 0) * oscillation(440.0, t));
    assert!(spatial.is_finite());
}

#[test]
fn membrane_outside_disc_is_exactly_zero() {
    // 200x100 surface: radius 50 around (100, 50)
    for &(px, py) in &[(0.0, 0.0), (151.0, 50.0), (100.0, 100.5), (49.0, 50.0)] {
        assert_eq!(sample_membrane(px, py, 200.0, 100.0, 3, 2, 0.0, 440.0), 0.0);
    }
    assert_eq!(membrane_spatial(1.0 + 1e-9, 0.4, 3, 0), 0.0);
}

#[test]
fn membrane_rim_is_inside_and_approached_continuously() {
    let (w, h) = (100.0, 100.0);
    // rho == 1 exactly, on the +x axis
    let on_rim = sample_membrane(100.0, 50.0, w, h, 2, 0, 0.0, 440.0);
    assert_eq!(on_rim, bessel_j0(2.0 * PI));
    let just_inside = sample_membrane(100.0 - 1e-7, 50.0, w, h, 2, 0, 0.0, 440.0);
    assert!((on_rim - just_inside).abs() < 1e-6);
    let just_outside = sample_membrane(100.0 + 1e-7, 50.0, w, h, 2, 0, 0.0, 440.0);
    assert_eq!(just_outside, 0.0);
}

#[test]
fn membrane_centre_handles_zero_radius() {
    assert_eq!(sample_membrane(50.0, 50.0, 100.0, 100.0, 3, 0, 0.0, 440.0), 1.0);
    assert_eq!(sample_membrane(50.0, 50.0, 100.0, 100.0, 3, 2, 0.0, 440.0), 0.0);
    assert_eq!(membrane_spatial(0.0, 0.0, 5, 0), 1.0);
    assert_eq!(membrane_spatial(0.0, 0.0, 5, 1), 0.0);
}

#[test]
fn membrane_angular_mode_uses_j1_over_z() {
    let rho: f64 = 0.25;
    let theta: f64 = 0.7;
    let z = PI * 2.0 * rho;
    let expected = bessel_j1(z) * (3.0 * theta).sin() / z;
    assert_eq!(membrane_spatial(rho, theta, 2, 3), expected);
}

#[test]
fn membrane_is_bounded_over_a_grid() {
    let (w, h) = (64.0, 48.0);
    for mm in [(1, 0), (3, 2), (10, 7), (32, 21)] {
        for y in 0..48 {
            for x in 0..64 {
                let v = sample_membrane(x as f64, y as f64, w, h, mm.0, mm.1, 0.013, 440.0);
                assert!((-1.0..=1.0).contains(&v));
            }
        }
    }
}

#[test]
fn samplers_are_bit_identical_on_repeat() {
    let a = sample_square(0.123, 0.456, 3, 7, 0.789, 440.0);
    let b = sample_square(0.123, 0.456, 3, 7, 0.789, 440.0);
    assert_eq!(a.to_bits(), b.to_bits());
    let c = sample_membrane(17.0, 33.0, 80.0, 60.0, 4, 2, 0.5, 1000.0);
    let d = sample_membrane(17.0, 33.0, 80.0, 60.0, 4, 2, 0.5, 1000.0);
    assert_eq!(c.to_bits(), d.to_bits());
}

#[test]
fn frame_square_uses_normalized_pixel_coordinates() {
    let mut frame = FieldFrame::new(8, 4);
    let mut cache = ModeCache::new();
    let f = 0.054 * 5.0_f64.sqrt(); // plate mode (1,2)
    let used = frame.render(GeometryMode::SquarePlate, f, 0.0, &mut cache);
    assert_eq!(used, ModeIndices::Square(SquareModes { n: 1, m: 2 }));
    assert_eq!(frame.values().len(), 32);
    for y in 0..4 {
        for x in 0..8 {
            let expected = sample_square(x as f64 / 8.0, y as f64 / 4.0, 1, 2, 0.0, f);
            assert_eq!(frame.get(x, y), Some(expected));
        }
    }
    assert_eq!(frame.get(8, 0), None);
    assert_eq!(frame.get(0, 4), None);
}

#[test]
fn frame_membrane_uses_pixel_coordinates() {
    let mut frame = FieldFrame::new(10, 6);
    let mut cache = ModeCache::new();
    let used = frame.render(GeometryMode::CircularMembrane, 440.0, 0.01, &mut cache);
    let ModeIndices::Membrane(mm) = used else {
        panic!("expected membrane indices, got {used:?}");
    };
    for y in 0..6 {
        for x in 0..10 {
            let expected = sample_membrane(
                x as f64, y as f64, 10.0, 6.0, mm.radial, mm.angular, 0.01, 440.0,
            );
            assert_eq!(frame.get(x, y), Some(expected));
        }
    }
    // corners lie outside the inscribed circle
    assert_eq!(frame.get(0, 0), Some(0.0));
}

#[test]
fn frame_resize_and_empty_frames() {
    let mut frame = FieldFrame::new(0, 0);
    let mut cache = ModeCache::new();
    frame.render(GeometryMode::SquarePlate, 440.0, 0.0, &mut cache);
    assert!(frame.values().is_empty());
    frame.resize(3, 2);
    assert_eq!((frame.width(), frame.height()), (3, 2));
    assert_eq!(frame.values().len(), 6);
    frame.render(GeometryMode::CircularMembrane, 440.0, 0.0, &mut cache);
    frame.resize(2, 2);
    assert_eq!(frame.values().len(), 4);
    assert!(frame.values().iter().all(|v| *v == 0.0));
}
