use cymatics_core::{FREQ_STEP_COARSE_HZ, FREQ_STEP_FINE_HZ, FREQ_STEP_HZ};
use winit::keyboard::{Key, NamedKey};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Action {
    NudgeFrequency(f64),
    ToggleGeometry,
    TogglePlayback,
    Quit,
}

/// Keyboard binding table. Shift switches arrow keys to fine steps.
pub fn action_for_key(key: &Key, shift: bool) -> Option<Action> {
    let arrow_step = if shift { FREQ_STEP_FINE_HZ } else { FREQ_STEP_HZ };
    match key {
        Key::Named(NamedKey::ArrowUp) | Key::Named(NamedKey::ArrowRight) => {
            Some(Action::NudgeFrequency(arrow_step))
        }
        Key::Named(NamedKey::ArrowDown) | Key::Named(NamedKey::ArrowLeft) => {
            Some(Action::NudgeFrequency(-arrow_step))
        }
        Key::Named(NamedKey::PageUp) => Some(Action::NudgeFrequency(FREQ_STEP_COARSE_HZ)),
        Key::Named(NamedKey::PageDown) => Some(Action::NudgeFrequency(-FREQ_STEP_COARSE_HZ)),
        Key::Named(NamedKey::Tab) => Some(Action::ToggleGeometry),
        Key::Named(NamedKey::Space) => Some(Action::TogglePlayback),
        Key::Named(NamedKey::Escape) => Some(Action::Quit),
        Key::Character(c) => match c.as_str() {
            "g" | "G" => Some(Action::ToggleGeometry),
            "p" | "P" => Some(Action::TogglePlayback),
            "q" | "Q" => Some(Action::Quit),
            _ => None,
        },
        _ => None,
    }
}
