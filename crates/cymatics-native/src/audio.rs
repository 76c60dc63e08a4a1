// ---------------- Native audio (cpal) ----------------
//
// A single sine voice that follows the drive frequency. The render thread
// writes `ToneState`; the stream callback reads it once per buffer.

use anyhow::{anyhow, Context};
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::{FromSample, SizedSample};
use cymatics_core::{TONE_AMPLITUDE, TONE_ATTACK_SEC, TONE_GLIDE_SEC, TONE_RELEASE_SEC};
use std::f32::consts::TAU;
use std::sync::{Arc, Mutex};

#[derive(Clone, Copy, Debug)]
pub struct ToneState {
    pub frequency_hz: f32,
    pub gate: bool,
}

/// Sine oscillator with a linear attack/release envelope and a one-pole
/// frequency glide.
#[derive(Clone, Debug)]
pub struct ToneOscillator {
    sample_rate: f32,
    phase: f32,
    frequency_hz: f32,
    level: f32,
}

impl ToneOscillator {
    pub fn new(sample_rate: f32, frequency_hz: f32) -> Self {
        Self {
            sample_rate,
            phase: 0.0,
            frequency_hz,
            level: 0.0,
        }
    }

    pub fn level(&self) -> f32 {
        self.level
    }

    pub fn next_sample(&mut self, target: ToneState) -> f32 {
        let glide = 1.0 - (-1.0 / (TONE_GLIDE_SEC * self.sample_rate)).exp();
        self.frequency_hz += (target.frequency_hz - self.frequency_hz) * glide;

        if target.gate {
            self.level = (self.level + 1.0 / (TONE_ATTACK_SEC * self.sample_rate)).min(1.0);
        } else {
            self.level = (self.level - 1.0 / (TONE_RELEASE_SEC * self.sample_rate)).max(0.0);
        }
        if self.level == 0.0 {
            return 0.0;
        }

        let out = self.phase.sin() * self.level * TONE_AMPLITUDE;
        self.phase += TAU * self.frequency_hz / self.sample_rate;
        if self.phase > TAU {
            self.phase -= TAU;
        }
        out
    }
}

pub struct ToneOutput {
    shared: Arc<Mutex<ToneState>>,
    _stream: cpal::Stream,
}

impl ToneOutput {
    pub fn update(&self, frequency_hz: f64, gate: bool) {
        if let Ok(mut guard) = self.shared.lock() {
            guard.frequency_hz = frequency_hz as f32;
            guard.gate = gate;
        }
    }
}

pub fn start_tone(frequency_hz: f64) -> anyhow::Result<ToneOutput> {
    let host = cpal::default_host();
    let device = host
        .default_output_device()
        .ok_or_else(|| anyhow!("no default audio output device"))?;
    let config = device
        .default_output_config()
        .context("querying default output config")?;
    let sample_rate = config.sample_rate().0 as f32;
    let channels = config.channels() as usize;
    log::info!(
        "[audio] device={} rate={} channels={} format={:?}",
        device.name().unwrap_or_else(|_| "?".into()),
        sample_rate,
        channels,
        config.sample_format()
    );

    let shared = Arc::new(Mutex::new(ToneState {
        frequency_hz: frequency_hz as f32,
        gate: false,
    }));
    let osc = ToneOscillator::new(sample_rate, frequency_hz as f32);
    let stream_config: cpal::StreamConfig = config.clone().into();

    let stream = match config.sample_format() {
        cpal::SampleFormat::F32 => {
            build_stream::<f32>(&device, &stream_config, channels, Arc::clone(&shared), osc)
        }
        cpal::SampleFormat::I16 => {
            build_stream::<i16>(&device, &stream_config, channels, Arc::clone(&shared), osc)
        }
        cpal::SampleFormat::U16 => {
            build_stream::<u16>(&device, &stream_config, channels, Arc::clone(&shared), osc)
        }
        other => return Err(anyhow!("unsupported sample format {other:?}")),
    }
    .context("building output stream")?;

    stream.play().context("starting output stream")?;
    Ok(ToneOutput {
        shared,
        _stream: stream,
    })
}

fn build_stream<T>(
    device: &cpal::Device,
    config: &cpal::StreamConfig,
    channels: usize,
    shared: Arc<Mutex<ToneState>>,
    mut osc: ToneOscillator,
) -> Result<cpal::Stream, cpal::BuildStreamError>
where
    T: SizedSample + FromSample<f32>,
{
    device.build_output_stream(
        config,
        move |data: &mut [T], _| {
            let target = match shared.lock() {
                Ok(guard) => *guard,
                Err(poisoned) => *poisoned.into_inner(),
            };
            for frame in data.chunks_mut(channels.max(1)) {
                let v = T::from_sample(osc.next_sample(target));
                for sample in frame.iter_mut() {
                    *sample = v;
                }
            }
        },
        |err| log::warn!("audio stream error: {err}"),
        None,
    )
}
