//! Frame dispatch: splitting the pixels of a frame across rayon workers.
//!
//! Every pixel is independent and written exactly once, so both strategies
//! produce bit-identical frames. They differ only in load balance.

use crate::error::{RenderError, RenderResult};
use crate::renderer::{FrameBuffer, PixelTracer, RenderConfig};
use lumen_core::Scene;
use lumen_math::Color;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::ops::Range;
use std::time::Instant;

/// How the pixels of a frame are split across workers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Partition {
    /// One contiguous run of pixels per worker, fixed up front
    #[default]
    Chunked,
    /// Row-sized tasks handed out by rayon's work stealing
    WorkStealing,
}

/// Split `num_pixels` into `workers` contiguous ranges in row-major order.
///
/// Every range gets `num_pixels / workers` pixels and the first
/// `num_pixels % workers` ranges get one extra. Ranges can be empty when
/// there are more workers than pixels.
pub fn partition_pixels(num_pixels: usize, workers: usize) -> Vec<Range<usize>> {
    if workers == 0 {
        return Vec::new();
    }

    let base = num_pixels / workers;
    let remainder = num_pixels % workers;

    let mut ranges = Vec::with_capacity(workers);
    let mut start = 0;
    for worker in 0..workers {
        let len = base + usize::from(worker < remainder);
        ranges.push(start..start + len);
        start += len;
    }

    ranges
}

/// Render a new frame of the scene as seen by its camera.
pub fn render_frame(
    scene: &Scene,
    config: &RenderConfig,
    width: u32,
    height: u32,
) -> RenderResult<FrameBuffer> {
    let mut frame = FrameBuffer::new(width, height);
    render_into(scene, config, &mut frame)?;
    Ok(frame)
}

/// Render into an existing frame buffer, overwriting every pixel.
///
/// The scene is validated first; an invalid scene leaves the buffer
/// untouched.
pub fn render_into(scene: &Scene, config: &RenderConfig, frame: &mut FrameBuffer) -> RenderResult<()> {
    if frame.width == 0 || frame.height == 0 {
        return Err(RenderError::EmptyFrame {
            width: frame.width,
            height: frame.height,
        });
    }

    let expected = frame.width as usize * frame.height as usize;
    if frame.pixels.len() != expected {
        return Err(RenderError::BufferSize {
            expected,
            actual: frame.pixels.len(),
        });
    }

    scene.validate()?;

    let start = Instant::now();
    let tracer = PixelTracer::new(scene, config, frame.width, frame.height);

    match config.partition {
        Partition::Chunked => {
            let workers = config.workers.unwrap_or_else(rayon::current_num_threads);
            if workers == 0 {
                return Err(RenderError::NoWorkers);
            }
            render_chunked(&tracer, &mut frame.pixels, workers);
        }
        Partition::WorkStealing => {
            render_work_stealing(&tracer, &mut frame.pixels, frame.width as usize);
        }
    }

    log::info!(
        "Rendered '{}' at {}x{} ({:?}, {} mode, shadows {}) in {:.2?}",
        scene.name,
        frame.width,
        frame.height,
        config.partition,
        config.lighting_mode,
        if config.shadows { "on" } else { "off" },
        start.elapsed()
    );

    Ok(())
}

/// One scoped task per contiguous chunk.
fn render_chunked(tracer: &PixelTracer<'_>, pixels: &mut [Color], workers: usize) {
    let ranges = partition_pixels(pixels.len(), workers);

    let mut rest = pixels;
    let mut chunks = Vec::with_capacity(ranges.len());
    for range in ranges {
        let (chunk, tail) = std::mem::take(&mut rest).split_at_mut(range.len());
        chunks.push((range.start, chunk));
        rest = tail;
    }

    rayon::scope(|s| {
        for (start, chunk) in chunks {
            s.spawn(move |_| {
                for (offset, pixel) in chunk.iter_mut().enumerate() {
                    *pixel = tracer.render_pixel(start + offset);
                }
            });
        }
    });
}

fn render_work_stealing(tracer: &PixelTracer<'_>, pixels: &mut [Color], width: usize) {
    pixels
        .par_chunks_mut(width)
        .enumerate()
        .for_each(|(row, row_pixels)| {
            let start = row * width;
            for (offset, pixel) in row_pixels.iter_mut().enumerate() {
                *pixel = tracer.render_pixel(start + offset);
            }
        });
}
