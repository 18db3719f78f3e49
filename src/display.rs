use hex_color::HexColor;

/// Width (in pixels) of the progress bar frame buffer.
pub const DISPLAY_WIDTH: usize = 128;
/// Height (in pixels) of the progress bar frame buffer.
pub const DISPLAY_HEIGHT: usize = 16;

/// Number of columns covered by the elapsed part of the bar.
///
/// Progress outside `0.0..=1.0` (ended, negative or NaN timers) is clamped
/// for display only.
fn filled_columns(progress: f32) -> usize {
    if progress.is_nan() {
        return 0;
    }
    (progress.clamp(0.0, 1.0) * DISPLAY_WIDTH as f32).round() as usize
}

/// Draw a horizontal progress bar to a framebuffer.
///
/// # Arguments
///
/// * `target` - The frame of a [`pixels::Pixels`] buffer of
///   [`DISPLAY_WIDTH`] x [`DISPLAY_HEIGHT`] pixels.
/// * `progress` - The normalized progress of the timer.
/// * `foreground_color` - The color of the elapsed part.
/// * `background_color` - The color of the remaining part.
pub fn draw_progress(
    target: &mut [u8],
    progress: f32,
    foreground_color: HexColor,
    background_color: HexColor,
) {
    let filled = filled_columns(progress);

    for (i, pix) in target.chunks_exact_mut(4).enumerate() {
        let color = if i % DISPLAY_WIDTH < filled {
            let f = foreground_color;
            [f.r, f.g, f.b, f.a]
        } else {
            let b = background_color;
            [b.r, b.g, b.b, b.a]
        };
        pix.copy_from_slice(&color);
    }
}
