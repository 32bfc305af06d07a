// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Rate-limited, auto-looping clip playback.
//!
//! The engine owns at most one open decoder. It never sleeps: each call to
//! [`PlaybackEngine::tick`] either decodes and emits one frame or reports how
//! long the caller should wait before ticking again. The UI drives it from
//! its repaint loop.
//!
//! ```text
//! Idle ──open(path)──▶ Active ──close()──▶ Idle
//!                      │  ▲
//!                      └──┘ tick(): wait, or emit a frame (rewinding at end of stream)
//! ```

use crate::error::{OpenError, PlaybackError};
use crate::io::media::{to_display, DecoderBackend, Frame, RawFrame, VideoDecoder};
use std::path::Path;
use std::time::{Duration, Instant};

/// Receives frames as they are emitted.
pub trait FrameSink {
    fn show_frame(&mut self, frame: Frame);
}

/// What the caller should do after a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// No clip is open; nothing to schedule.
    Idle,
    /// Too early for the next frame; tick again after this delay.
    Wait(Duration),
    /// A frame was emitted; tick again as soon as possible.
    Rendered,
}

/// Output raster and frame rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaybackConfig {
    pub frame_interval: Duration,
    pub width: u32,
    pub height: u32,
}

impl PlaybackConfig {
    pub fn new(fps: u32, width: u32, height: u32) -> Self {
        Self {
            frame_interval: Duration::from_secs(1) / fps.max(1),
            width,
            height,
        }
    }
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self::new(30, 854, 480)
    }
}

/// An open decoder and its timing state.
struct Session {
    decoder: Box<dyn VideoDecoder>,
    last_emit: Instant,
}

impl Session {
    /// Next frame, rewinding once if the stream has ended.
    fn next_frame(&mut self) -> Result<RawFrame, PlaybackError> {
        if let Some(raw) = self.decoder.read_frame().map_err(PlaybackError::Decode)? {
            return Ok(raw);
        }
        log::debug!("End of stream, looping");
        self.decoder.rewind().map_err(PlaybackError::Decode)?;
        self.decoder
            .read_frame()
            .map_err(PlaybackError::Decode)?
            .ok_or(PlaybackError::EmptyStream)
    }
}

enum State {
    Idle,
    Active(Session),
}

/// Plays one clip at a time on a fixed cadence.
pub struct PlaybackEngine {
    backend: Box<dyn DecoderBackend>,
    config: PlaybackConfig,
    state: State,
}

impl PlaybackEngine {
    pub fn new(backend: Box<dyn DecoderBackend>, config: PlaybackConfig) -> Self {
        Self {
            backend,
            config,
            state: State::Idle,
        }
    }

    /// Close any open clip, then open `path`. The engine stays idle on error.
    pub fn open(&mut self, path: &Path, now: Instant) -> Result<(), OpenError> {
        self.close();
        let decoder = self.backend.open(path)?;
        log::info!("Opened {}", path.display());
        self.state = State::Active(Session {
            decoder,
            last_emit: now,
        });
        Ok(())
    }

    /// Run one scheduling step.
    ///
    /// Frames are never dropped to catch up: when decoding is slower than
    /// the frame interval, playback simply runs slower than real time.
    pub fn tick(&mut self, now: Instant, sink: &mut dyn FrameSink) -> Result<Tick, PlaybackError> {
        let State::Active(session) = &mut self.state else {
            return Ok(Tick::Idle);
        };

        let elapsed = now.saturating_duration_since(session.last_emit);
        if elapsed < self.config.frame_interval {
            return Ok(Tick::Wait(self.config.frame_interval - elapsed));
        }

        let raw = session.next_frame()?;
        let frame = to_display(raw, self.config.width, self.config.height)?;
        sink.show_frame(frame);
        session.last_emit = now;
        Ok(Tick::Rendered)
    }

    /// Release the open decoder, if any.
    pub fn close(&mut self) {
        if let State::Active(mut session) = std::mem::replace(&mut self.state, State::Idle) {
            session.decoder.release();
            log::debug!("Closed playback session");
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self.state, State::Active(_))
    }
}

impl Drop for PlaybackEngine {
    fn drop(&mut self) {
        self.close();
    }
}
