use serde::{Deserialize, Serialize};

/// Packing specification for one mosaic run.
///
/// Key notes:
///   - `max_width`/`max_height` bound the composite canvas; part sizes are
///     clamped to these caps at construction
///   - `max_pixels` is a budget on the bounding-box area of the final mosaic
///   - the search tries `num_width_trials` candidate widths evenly spaced
///     between `min_width` and `max_width`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MosaicConfig {
    /// Maximum mosaic width in pixels.
    pub max_width: u32,
    /// Maximum mosaic height in pixels, shared by all trial widths.
    pub max_height: u32,
    /// Pixel budget: bounding-box width * height of the chosen arrangement
    /// must not exceed this.
    pub max_pixels: u64,
    /// Smallest candidate canvas width the search will try.
    pub min_width: u32,
    /// Number of evenly spaced trial widths between `min_width` and `max_width`.
    pub num_width_trials: u32,
    /// When true, failing to place every supplied image is a hard error.
    /// When false, the driver may set parts aside and report them as leftovers.
    #[serde(default)]
    pub take_all_images: bool,
    /// Evaluate trial widths in parallel when the "parallel" feature is enabled.
    #[serde(default)]
    pub parallel: bool,
}

impl Default for MosaicConfig {
    fn default() -> Self {
        Self {
            max_width: 4096,
            max_height: 4096,
            max_pixels: 16 * 1024 * 1024,
            min_width: 512,
            num_width_trials: 8,
            take_all_images: false,
            parallel: false,
        }
    }
}

impl MosaicConfig {
    /// Validates the specification parameters.
    ///
    /// Returns an error if:
    /// - Canvas dimensions are zero
    /// - The pixel budget is zero
    /// - `min_width` is zero or exceeds `max_width`
    /// - No trial widths are requested
    pub fn validate(&self) -> crate::error::Result<()> {
        use crate::error::MosaicError;

        if self.max_width == 0 || self.max_height == 0 {
            return Err(MosaicError::InvalidDimensions {
                width: self.max_width,
                height: self.max_height,
            });
        }

        if self.max_pixels == 0 {
            return Err(MosaicError::InvalidConfig(
                "max_pixels must be greater than zero".into(),
            ));
        }

        if self.min_width == 0 {
            return Err(MosaicError::InvalidConfig(
                "min_width must be greater than zero".into(),
            ));
        }

        if self.min_width > self.max_width {
            return Err(MosaicError::InvalidConfig(format!(
                "min_width ({}) exceeds max_width ({})",
                self.min_width, self.max_width
            )));
        }

        if self.num_width_trials == 0 {
            return Err(MosaicError::InvalidConfig(
                "num_width_trials must be at least 1".into(),
            ));
        }

        Ok(())
    }
}

/// Builder for `MosaicConfig` for ergonomic construction.
#[derive(Debug, Default, Clone)]
pub struct MosaicConfigBuilder {
    cfg: MosaicConfig,
}

impl MosaicConfigBuilder {
    pub fn new() -> Self {
        Self {
            cfg: MosaicConfig::default(),
        }
    }
    pub fn with_max_dimensions(mut self, w: u32, h: u32) -> Self {
        self.cfg.max_width = w;
        self.cfg.max_height = h;
        self
    }
    pub fn max_pixels(mut self, v: u64) -> Self {
        self.cfg.max_pixels = v;
        self
    }
    pub fn min_width(mut self, v: u32) -> Self {
        self.cfg.min_width = v;
        self
    }
    pub fn num_width_trials(mut self, v: u32) -> Self {
        self.cfg.num_width_trials = v;
        self
    }
    pub fn take_all_images(mut self, v: bool) -> Self {
        self.cfg.take_all_images = v;
        self
    }
    pub fn parallel(mut self, v: bool) -> Self {
        self.cfg.parallel = v;
        self
    }
    pub fn build(self) -> MosaicConfig {
        self.cfg
    }
}

impl MosaicConfig {
    /// Create a fluent builder for `MosaicConfig`.
    pub fn builder() -> MosaicConfigBuilder {
        MosaicConfigBuilder::new()
    }
}
