use anyhow::Context;
use std::time::{Duration, Instant};
use winit::{
    event::*,
    event_loop::{ControlFlow, EventLoop},
    window::WindowBuilder,
};

use cymatics_core::{parse_frequency, AppState, FieldFrame, GeometryMode, TARGET_FPS};

mod audio;
mod gpu;
mod input;
mod palette;

use input::Action;

/// Startup options from positional arguments: `[FREQUENCY] [square|circular]`.
#[derive(Debug, Default, PartialEq)]
struct Options {
    frequency: Option<f64>,
    mode: Option<GeometryMode>,
}

fn parse_args<I: IntoIterator<Item = String>>(args: I) -> anyhow::Result<Options> {
    let mut opts = Options::default();
    for arg in args {
        if let Ok(mode) = arg.parse::<GeometryMode>() {
            opts.mode = Some(mode);
        } else {
            let f = parse_frequency(&arg).with_context(|| format!("invalid argument `{arg}`"))?;
            opts.frequency = Some(f);
        }
    }
    Ok(opts)
}

/// Host-side state for the window: the shared app state plus per-frame buffers.
struct Session {
    app: AppState,
    field: FieldFrame,
    pixels: Vec<[u8; 4]>,
    tone: Option<audio::ToneOutput>,
    start: Instant,
    title: String,
}

impl Session {
    fn now(&self) -> f64 {
        self.start.elapsed().as_secs_f64()
    }

    fn apply(&mut self, action: Action) -> bool {
        let now = self.now();
        match action {
            Action::NudgeFrequency(delta) => {
                let f = self.app.nudge_frequency(delta, now);
                log::info!("[input] frequency {f} Hz");
            }
            Action::ToggleGeometry => {
                let mode = self.app.toggle_mode(now);
                log::info!("[input] geometry {}", mode.label());
            }
            Action::TogglePlayback => {
                let playing = self.app.toggle_playing(now);
                if self.tone.is_none() && playing {
                    log::warn!("[audio] no output available; visualizing silently");
                }
                log::info!("[input] playback {}", if playing { "on" } else { "off" });
            }
            Action::Quit => return false,
        }
        self.sync_tone();
        true
    }

    fn sync_tone(&self) {
        if let Some(tone) = &self.tone {
            tone.update(self.app.frequency(), self.app.is_playing());
        }
    }

    fn render(&mut self, gpu: &mut gpu::GpuState) -> Result<(), wgpu::SurfaceError> {
        let now = self.now();
        let side = gpu.field_side();
        self.field.resize(side, side);
        self.app.render_frame(&mut self.field, now);
        palette::colorize_frame(&self.field, self.app.intensity(now), &mut self.pixels);

        let [freq_line, mode_line] = self.app.info_lines();
        let status = if self.app.is_playing() { "Stop" } else { "Play" };
        let title = format!("Cymatics | {freq_line} | {mode_line} | [Space] {status}");
        if title != self.title {
            gpu.window.set_title(&title);
            self.title = title;
        }
        gpu.render(&self.pixels)
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let opts = parse_args(std::env::args().skip(1))?;
    let start = Instant::now();
    let mut app = AppState::new(0.0);
    if let Some(f) = opts.frequency {
        app.set_frequency(f, 0.0);
    }
    if let Some(mode) = opts.mode {
        app.set_mode(mode, 0.0);
    }
    log::info!("[app] start {} Hz {}", app.frequency(), app.mode().label());

    let tone = match audio::start_tone(app.frequency()) {
        Ok(t) => Some(t),
        Err(e) => {
            log::warn!("[audio] disabled: {e:#}");
            None
        }
    };

    let event_loop = EventLoop::new().context("creating event loop")?;
    let window = WindowBuilder::new()
        .with_title("Cymatics")
        .with_inner_size(winit::dpi::LogicalSize::new(800.0, 800.0))
        .build(&event_loop)
        .context("creating window")?;

    let mut gpu = pollster::block_on(gpu::GpuState::new(&window))?;
    let side = gpu.field_side();
    let mut session = Session {
        app,
        field: FieldFrame::new(side, side),
        pixels: Vec::new(),
        tone,
        start,
        title: String::new(),
    };
    session.sync_tone();

    let frame_interval = Duration::from_secs_f64(1.0 / TARGET_FPS);
    let mut next_frame = Instant::now();
    let mut shift = false;

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent {
            event: WindowEvent::Resized(size),
            ..
        } => gpu.resize(size),
        Event::WindowEvent {
            event: WindowEvent::CloseRequested,
            ..
        } => elwt.exit(),
        Event::WindowEvent {
            event: WindowEvent::ModifiersChanged(mods),
            ..
        } => shift = mods.state().shift_key(),
        Event::WindowEvent {
            event: WindowEvent::KeyboardInput { event: key, .. },
            ..
        } => {
            if key.state != ElementState::Pressed {
                return;
            }
            if let Some(action) = input::action_for_key(&key.logical_key, shift) {
                if !session.apply(action) {
                    elwt.exit();
                }
            }
        }
        Event::AboutToWait => {
            let now = Instant::now();
            if now >= next_frame {
                match session.render(&mut gpu) {
                    Ok(()) => {}
                    Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                        gpu.reconfigure()
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => elwt.exit(),
                    Err(e) => log::warn!("[gpu] frame skipped: {e}"),
                }
                next_frame = now + frame_interval;
            }
            elwt.set_control_flow(ControlFlow::WaitUntil(next_frame));
        }
        _ => {}
    })?;
    Ok(())
}
