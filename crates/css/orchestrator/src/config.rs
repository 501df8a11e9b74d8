//! Styler configuration.
//!
//! The viewport is the one piece of state every styling call depends on: it is
//! the containing block of parentless elements and the frame of absolutely
//! positioned ones. It is supplied here, programmatically or from the
//! environment, and validated when a [`Stylist`](crate::Stylist) is built.

use std::env;

use anyhow::{Result, ensure};
use css_values_units::Viewport;
use log::warn;

/// Default viewport width in pixels.
pub const DEFAULT_VIEWPORT_WIDTH: f32 = 1280.0;
/// Default viewport height in pixels.
pub const DEFAULT_VIEWPORT_HEIGHT: f32 = 720.0;

/// Runtime configuration for a [`Stylist`](crate::Stylist).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StylerConfig {
    /// Viewport width in pixels
    pub viewport_width: f32,
    /// Viewport height in pixels
    pub viewport_height: f32,
}

impl Default for StylerConfig {
    #[inline]
    fn default() -> Self {
        Self::new(DEFAULT_VIEWPORT_WIDTH, DEFAULT_VIEWPORT_HEIGHT)
    }
}

impl StylerConfig {
    #[inline]
    pub const fn new(viewport_width: f32, viewport_height: f32) -> Self {
        Self {
            viewport_width,
            viewport_height,
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Reads the following environment variables:
    /// - `STYLER_VIEWPORT_WIDTH`: viewport width in pixels (default: 1280)
    /// - `STYLER_VIEWPORT_HEIGHT`: viewport height in pixels (default: 720)
    ///
    /// Values that do not parse as numbers fall back to the default.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Same as [`Self::from_env`], reading variables through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            viewport_width: dimension(&lookup, "STYLER_VIEWPORT_WIDTH", DEFAULT_VIEWPORT_WIDTH),
            viewport_height: dimension(&lookup, "STYLER_VIEWPORT_HEIGHT", DEFAULT_VIEWPORT_HEIGHT),
        }
    }

    /// The validated viewport.
    ///
    /// # Errors
    /// Returns an error if either dimension is not a finite, positive number.
    pub fn viewport(&self) -> Result<Viewport> {
        ensure!(
            self.viewport_width.is_finite() && self.viewport_width > 0.0,
            "viewport width must be a positive number of pixels, got {}",
            self.viewport_width
        );
        ensure!(
            self.viewport_height.is_finite() && self.viewport_height > 0.0,
            "viewport height must be a positive number of pixels, got {}",
            self.viewport_height
        );
        Ok(Viewport::new(self.viewport_width, self.viewport_height))
    }
}

fn dimension(lookup: &impl Fn(&str) -> Option<String>, name: &str, default: f32) -> f32 {
    let Some(raw) = lookup(name) else {
        return default;
    };
    raw.trim().parse::<f32>().unwrap_or_else(|_| {
        warn!(target: "css::config", "ignoring {name}={raw:?}, using {default}");
        default
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_viewport_is_valid() {
        let viewport = StylerConfig::default().viewport();
        assert!(matches!(viewport, Ok(Viewport { width, height }) if width > 1279.0 && height > 719.0));
    }

    #[test]
    fn lookup_overrides_and_falls_back_per_variable() {
        let config = StylerConfig::from_lookup(|name| match name {
            "STYLER_VIEWPORT_WIDTH" => Some(" 1920 ".to_owned()),
            "STYLER_VIEWPORT_HEIGHT" => Some("tall".to_owned()),
            _ => None,
        });
        assert_eq!(config, StylerConfig::new(1920.0, DEFAULT_VIEWPORT_HEIGHT));

        let unset = StylerConfig::from_lookup(|_| None);
        assert_eq!(unset, StylerConfig::default());
    }

    #[test]
    fn degenerate_viewports_are_rejected() {
        for (width, height) in [(0.0, 720.0), (1280.0, -1.0), (f32::NAN, 720.0), (f32::INFINITY, 1.0)] {
            let viewport = StylerConfig::new(width, height).viewport();
            assert!(viewport.is_err_and(|error| error.to_string().contains("must be a positive")));
        }
    }
}
