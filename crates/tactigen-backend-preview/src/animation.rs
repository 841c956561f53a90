//! Animated GIF previews.
//!
//! Each pattern iteration becomes one frame. Cells are upscaled to
//! `scale x scale` pixel blocks and drawn in gray: active cells at their
//! amplitude clamped to `[0, 255]`, inactive cells at the background level.
//! With `invert`, active cells are drawn at `255 - level` instead, which
//! pairs with a white background.

use std::borrow::Cow;
use std::io::Write;

use gif::{Encoder, Frame, Repeat};
use tactigen_spec::PreviewSettings;

use crate::error::{PreviewError, PreviewResult};
use crate::grid::AmplitudeGrid;

/// 256-entry grayscale palette: index `i` is `(i, i, i)`.
fn gray_palette() -> Vec<u8> {
    (0..=255u8).flat_map(|v| [v, v, v]).collect()
}

/// Frame delay in hundredths of a second.
pub fn frame_delay(fps: u16) -> u16 {
    100 / fps.max(1)
}

/// Gray level of one cell.
pub fn cell_level(cell: Option<i32>, settings: &PreviewSettings) -> u8 {
    match cell {
        None => settings.background,
        Some(amp) => {
            let level = amp.clamp(0, 255) as u8;
            if settings.invert {
                255 - level
            } else {
                level
            }
        }
    }
}

fn check_settings(settings: &PreviewSettings) -> PreviewResult<()> {
    if settings.fps == 0 || settings.fps > 100 {
        return Err(PreviewError::InvalidSettings(format!(
            "fps must be in 1..=100, got {}",
            settings.fps
        )));
    }
    if settings.scale == 0 {
        return Err(PreviewError::InvalidSettings("scale must be at least 1".into()));
    }
    Ok(())
}

/// Encodes the grid as an infinitely looping GIF.
pub fn encode_gif<W: Write>(
    grid: &AmplitudeGrid,
    settings: &PreviewSettings,
    writer: W,
) -> PreviewResult<()> {
    check_settings(settings)?;
    if grid.is_empty() {
        return Err(PreviewError::EmptyPattern);
    }

    let size = grid.grid();
    let scale = settings.scale as usize;
    let width_px = size.width as usize * scale;
    let height_px = size.height as usize * scale;
    let (width, height) = match (u16::try_from(width_px), u16::try_from(height_px)) {
        (Ok(w), Ok(h)) => (w, h),
        _ => {
            return Err(PreviewError::ImageTooLarge {
                width: width_px,
                height: height_px,
            })
        }
    };

    let palette = gray_palette();
    let mut encoder = Encoder::new(writer, width, height, &palette)?;
    encoder.set_repeat(Repeat::Infinite)?;

    let delay = frame_delay(settings.fps);
    let mut buffer = vec![0u8; width_px * height_px];
    for t in 0..grid.len() {
        let Some(cells) = grid.frame(t) else {
            break;
        };
        for (y, row_px) in buffer.chunks_mut(width_px).enumerate() {
            let row = y / scale;
            for (x, px) in row_px.iter_mut().enumerate() {
                let col = x / scale;
                *px = cell_level(cells[row * size.width as usize + col], settings);
            }
        }

        let frame = Frame {
            width,
            height,
            delay,
            buffer: Cow::Borrowed(&buffer),
            ..Frame::default()
        };
        encoder.write_frame(&frame)?;
    }

    tracing::debug!(frames = grid.len(), width, height, delay, "encoded GIF preview");
    Ok(())
}

/// Renders the grid to GIF bytes.
pub fn render_gif(grid: &AmplitudeGrid, settings: &PreviewSettings) -> PreviewResult<Vec<u8>> {
    let mut bytes = Vec::new();
    encode_gif(grid, settings, &mut bytes)?;
    Ok(bytes)
}
