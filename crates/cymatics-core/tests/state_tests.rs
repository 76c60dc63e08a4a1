// Host-side tests for the application state, geometry parsing and constants.

use cymatics_core::*;

#[test]
fn defaults_match_startup_values() {
    let app = AppState::new(3.0);
    assert_eq!(app.frequency(), DEFAULT_FREQ_HZ);
    assert_eq!(app.mode(), GeometryMode::SquarePlate);
    assert!(!app.is_playing());
    assert_eq!(app.elapsed(3.0), 0.0);
    assert_eq!(app.elapsed(4.5), 1.5);
}

#[test]
fn frequency_is_clamped_into_range() {
    let mut app = AppState::new(0.0);
    assert_eq!(app.set_frequency(10.0, 0.0), FREQ_MIN_HZ);
    assert_eq!(app.set_frequency(9000.0, 0.0), FREQ_MAX_HZ);
    assert_eq!(app.set_frequency(1234.5, 0.0), 1234.5);
    assert_eq!(app.nudge_frequency(-2000.0, 0.0), FREQ_MIN_HZ);
    assert_eq!(app.nudge_frequency(10.0, 0.0), 60.0);
}

#[test]
fn changes_restart_the_animation_clock() {
    let mut app = AppState::new(0.0);
    assert_eq!(app.elapsed(5.0), 5.0);
    app.set_frequency(500.0, 5.0);
    assert_eq!(app.elapsed(5.0), 0.0);
    assert_eq!(app.elapsed(6.0), 1.0);
    app.set_mode(GeometryMode::CircularMembrane, 7.0);
    assert_eq!(app.elapsed(7.25), 0.25);
    assert_eq!(app.toggle_mode(8.0), GeometryMode::SquarePlate);
    assert_eq!(app.elapsed(8.0), 0.0);
    // clock never runs backwards
    assert_eq!(app.elapsed(1.0), 0.0);
}

#[test]
fn starting_playback_restarts_clock_but_stopping_does_not() {
    let mut app = AppState::new(0.0);
    assert!(app.toggle_playing(2.0));
    assert_eq!(app.elapsed(3.0), 1.0);
    assert!(!app.toggle_playing(4.0));
    assert_eq!(app.elapsed(5.0), 3.0);
    app.set_playing(false, 6.0);
    assert_eq!(app.elapsed(6.0), 4.0);
}

#[test]
fn intensity_boost_decays_linearly_after_frequency_change() {
    let mut app = AppState::new(0.0);
    assert_eq!(app.intensity(0.0), INTENSITY_BASELINE);
    app.set_frequency(880.0, 10.0);
    assert_eq!(app.intensity(10.0), INTENSITY_BASELINE + INTENSITY_BOOST);
    let half = app.intensity(10.0 + INTENSITY_BOOST_SEC / 2.0);
    assert!((half - (INTENSITY_BASELINE + INTENSITY_BOOST / 2.0)).abs() < 1e-12);
    assert!((app.intensity(10.0 + INTENSITY_BOOST_SEC) - INTENSITY_BASELINE).abs() < 1e-12);
    assert_eq!(app.intensity(100.0), INTENSITY_BASELINE);

    // a second change restarts the boost instead of stacking
    app.set_frequency(900.0, 10.1);
    assert_eq!(app.intensity(10.1), INTENSITY_BASELINE + INTENSITY_BOOST);
}

#[test]
fn geometry_change_does_not_boost_intensity() {
    let mut app = AppState::new(0.0);
    app.set_mode(GeometryMode::CircularMembrane, 1.0);
    assert_eq!(app.intensity(1.0), INTENSITY_BASELINE);
}

#[test]
fn info_lines_describe_current_mode() {
    let mut app = AppState::new(0.0);
    let [freq, mode] = app.info_lines();
    assert_eq!(freq, "Frequency: 440 Hz");
    assert_eq!(mode, "Square Plate: Mode (10,10)");
    app.set_mode(GeometryMode::CircularMembrane, 0.0);
    let [_, mode] = app.info_lines();
    assert_eq!(mode, "Circular Membrane: Mode (10,7)");
    app.set_frequency(440.5, 0.0);
    let [freq, _] = app.info_lines();
    assert_eq!(freq, "Frequency: 440.5 Hz");
}

#[test]
fn render_frame_uses_elapsed_time() {
    let mut app = AppState::new(0.0);
    app.set_mode(GeometryMode::CircularMembrane, 1.0);
    let mut frame = FieldFrame::new(16, 16);
    let used = app.render_frame(&mut frame, 1.5);
    assert_eq!(used, app.modes());
    let mut expected = FieldFrame::new(16, 16);
    expected.render(
        GeometryMode::CircularMembrane,
        440.0,
        0.5,
        &mut ModeCache::new(),
    );
    assert_eq!(frame.values(), expected.values());
}

#[test]
fn geometry_parses_and_displays() {
    assert_eq!("square".parse(), Ok(GeometryMode::SquarePlate));
    assert_eq!(" Circular ".parse(), Ok(GeometryMode::CircularMembrane));
    assert_eq!("membrane".parse(), Ok(GeometryMode::CircularMembrane));
    assert_eq!(
        "hexagon".parse::<GeometryMode>(),
        Err(ParseGeometryError("hexagon".to_string()))
    );
    assert_eq!(GeometryMode::SquarePlate.to_string(), "square");
    assert_eq!(GeometryMode::CircularMembrane.to_string(), "circular");
    for mode in [GeometryMode::SquarePlate, GeometryMode::CircularMembrane] {
        assert_eq!(mode.to_string().parse(), Ok(mode));
        assert_eq!(mode.toggled().toggled(), mode);
    }
}

#[test]
fn frequency_text_is_validated_then_clamped() {
    assert_eq!(parse_frequency("440"), Ok(440.0));
    assert_eq!(parse_frequency(" 20 "), Ok(FREQ_MIN_HZ));
    assert_eq!(parse_frequency("1e5"), Ok(FREQ_MAX_HZ));
    assert_eq!(
        parse_frequency("abc"),
        Err(ParseFrequencyError::NotANumber("abc".to_string()))
    );
    assert_eq!(parse_frequency("0"), Err(ParseFrequencyError::OutOfDomain(0.0)));
    assert!(matches!(
        parse_frequency("inf"),
        Err(ParseFrequencyError::OutOfDomain(_))
    ));
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_are_within_reasonable_bounds() {
    assert!(FREQ_MIN_HZ > 0.0);
    assert!(FREQ_MIN_HZ < DEFAULT_FREQ_HZ && DEFAULT_FREQ_HZ < FREQ_MAX_HZ);
    assert!(FREQ_STEP_FINE_HZ < FREQ_STEP_HZ && FREQ_STEP_HZ < FREQ_STEP_COARSE_HZ);
    assert!(INTENSITY_BOOST_SEC > 0.0);
    assert!(INTENSITY_BOOST >= 0.0);
    assert!(TARGET_FPS > 0.0);
    assert!(FIELD_MAX_SIDE > 0);
    assert_eq!(canvas_side(1000.0, 800.0), 600.0);
    assert_eq!(canvas_side(400.0, 1000.0), 360.0);
}
