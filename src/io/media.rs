// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Video decoding and frame conversion.
//!
//! Decoding goes through the [`DecoderBackend`] / [`VideoDecoder`] traits so
//! the playback engine does not depend on a particular video library. The
//! OpenCV backend is compiled in with the `video-opencv` feature.

use crate::error::{OpenError, PlaybackError};
use anyhow::Result;
use image::{imageops::FilterType, RgbImage};
use std::path::Path;

/// A decoded frame as delivered by the decoder, in BGR byte order.
#[derive(Debug, Clone)]
pub struct RawFrame {
    pub width: u32,
    pub height: u32,
    pub bgr: Vec<u8>,
}

/// A frame ready for display: RGB bytes at the output raster size.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub width: u32,
    pub height: u32,
    pub rgb: Vec<u8>,
}

/// An open decode resource for one video file.
pub trait VideoDecoder {
    /// Decode the next frame. `Ok(None)` signals end of stream.
    fn read_frame(&mut self) -> Result<Option<RawFrame>>;

    /// Seek back to the first frame.
    fn rewind(&mut self) -> Result<()>;

    /// Release the underlying resource. Further reads are not expected.
    fn release(&mut self);
}

/// Opens decode resources for video files.
pub trait DecoderBackend {
    fn open(&self, path: &Path) -> Result<Box<dyn VideoDecoder>, OpenError>;
}

/// Convert a BGR frame to RGB and rescale it to `width` x `height`.
pub fn to_display(raw: RawFrame, width: u32, height: u32) -> Result<Frame, PlaybackError> {
    let expected = raw.width as usize * raw.height as usize * 3;
    if raw.bgr.len() != expected {
        return Err(PlaybackError::Frame(format!(
            "{}x{} frame has {} bytes, expected {}",
            raw.width,
            raw.height,
            raw.bgr.len(),
            expected
        )));
    }

    let mut rgb = raw.bgr;
    for px in rgb.chunks_exact_mut(3) {
        px.swap(0, 2);
    }

    if raw.width == width && raw.height == height {
        return Ok(Frame { width, height, rgb });
    }

    let img = RgbImage::from_raw(raw.width, raw.height, rgb)
        .ok_or_else(|| PlaybackError::Frame("frame buffer too small".to_string()))?;
    let scaled = image::imageops::resize(&img, width, height, FilterType::Triangle);

    Ok(Frame {
        width,
        height,
        rgb: scaled.into_raw(),
    })
}

/// Backend used when no video library is compiled in.
pub struct UnsupportedBackend;

impl DecoderBackend for UnsupportedBackend {
    fn open(&self, path: &Path) -> Result<Box<dyn VideoDecoder>, OpenError> {
        Err(OpenError::new(
            path,
            "built without video support (enable the video-opencv feature)",
        ))
    }
}

/// The decoder backend selected at compile time.
pub fn default_backend() -> Box<dyn DecoderBackend> {
    #[cfg(feature = "video-opencv")]
    {
        Box::new(opencv_backend::OpenCvBackend)
    }
    #[cfg(not(feature = "video-opencv"))]
    {
        Box::new(UnsupportedBackend)
    }
}

#[cfg(feature = "video-opencv")]
mod opencv_backend {
    use super::{DecoderBackend, RawFrame, VideoDecoder};
    use crate::error::OpenError;
    use anyhow::{Context, Result};
    use opencv::{core::Mat, prelude::*, videoio};
    use std::path::Path;

    pub struct OpenCvBackend;

    impl DecoderBackend for OpenCvBackend {
        fn open(&self, path: &Path) -> Result<Box<dyn VideoDecoder>, OpenError> {
            let name = path
                .to_str()
                .ok_or_else(|| OpenError::new(path, "path is not valid UTF-8"))?;
            let cap = videoio::VideoCapture::from_file(name, videoio::CAP_ANY)
                .map_err(|e| OpenError::new(path, e.to_string()))?;
            let opened = cap
                .is_opened()
                .map_err(|e| OpenError::new(path, e.to_string()))?;
            if !opened {
                return Err(OpenError::new(path, "unsupported or corrupt video"));
            }
            Ok(Box::new(OpenCvDecoder { cap }))
        }
    }

    struct OpenCvDecoder {
        cap: videoio::VideoCapture,
    }

    impl VideoDecoder for OpenCvDecoder {
        fn read_frame(&mut self) -> Result<Option<RawFrame>> {
            let mut mat = Mat::default();
            // A failed grab is how OpenCV reports the end of the stream.
            if !self.cap.read(&mut mat)? || mat.empty() {
                return Ok(None);
            }
            if mat.channels() != 3 {
                anyhow::bail!("expected 3 channel frame, got {}", mat.channels());
            }
            let width = u32::try_from(mat.cols()).context("negative frame width")?;
            let height = u32::try_from(mat.rows()).context("negative frame height")?;
            let bgr = if mat.is_continuous() {
                mat.data_bytes()?.to_vec()
            } else {
                mat.try_clone()?.data_bytes()?.to_vec()
            };
            Ok(Some(RawFrame { width, height, bgr }))
        }

        fn rewind(&mut self) -> Result<()> {
            self.cap.set(videoio::CAP_PROP_POS_FRAMES, 0.0)?;
            Ok(())
        }

        fn release(&mut self) {
            if let Err(e) = self.cap.release() {
                log::warn!("Failed to release video capture: {}", e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid(width: u32, height: u32, bgr: [u8; 3]) -> RawFrame {
        RawFrame {
            width,
            height,
            bgr: bgr.repeat((width * height) as usize),
        }
    }

    #[test]
    fn test_bgr_to_rgb_same_size() {
        let frame = to_display(solid(2, 2, [1, 2, 3]), 2, 2).unwrap();
        assert_eq!(&frame.rgb[..3], &[3, 2, 1]);
        assert_eq!(frame.rgb.len(), 12);
    }

    #[test]
    fn test_rescales_to_output_raster() {
        let frame = to_display(solid(64, 36, [0, 0, 255]), 854, 480).unwrap();
        assert_eq!((frame.width, frame.height), (854, 480));
        assert_eq!(frame.rgb.len(), 854 * 480 * 3);
        assert!(frame.rgb[0] >= 250 && frame.rgb[2] <= 5);
    }

    #[test]
    fn test_short_buffer_is_rejected() {
        let raw = RawFrame {
            width: 4,
            height: 4,
            bgr: vec![0; 10],
        };
        assert!(matches!(to_display(raw, 854, 480), Err(PlaybackError::Frame(_))));
    }

    #[test]
    fn test_unsupported_backend_fails_open() {
        let err = UnsupportedBackend.open(Path::new("clip.mp4")).err().unwrap();
        assert_eq!(err.path, Path::new("clip.mp4"));
    }
}
