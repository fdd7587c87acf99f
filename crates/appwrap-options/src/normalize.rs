//! Platform alias folding and window dimension clamping.

use crate::options::{PartialOptions, WindowOptions};
use appwrap_core::Platform;

/// Canonicalize the platform and clamp the window size. Never fails.
#[must_use]
pub fn normalize(mut options: PartialOptions) -> PartialOptions {
    options.platform = fold_platform(options.platform);
    clamp_window(&mut options.window);
    options
}

fn fold_platform(platform: Platform) -> Platform {
    match platform {
        Platform::Other(name) => {
            let folded = Platform::from_alias(&name);
            if folded.is_known() {
                tracing::debug!("Platform alias '{}' folded to {}", name, folded);
            }
            folded
        }
        known => known,
    }
}

/// Clamp width and height to their maxima when set.
pub fn clamp_window(window: &mut WindowOptions) {
    if let Some(max_width) = window.max_width {
        if window.width > max_width {
            tracing::debug!("Clamping width {} to max {}", window.width, max_width);
            window.width = max_width;
        }
    }
    if let Some(max_height) = window.max_height {
        if window.height > max_height {
            tracing::debug!("Clamping height {} to max {}", window.height, max_height);
            window.height = max_height;
        }
    }
}
