use crate::config::MosaicConfig;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle (pixels). `x,y` is top-left; `w,h` are sizes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

impl Rect {
    pub fn new(x: u32, y: u32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }
    /// Inclusive right edge coordinate (`x + w - 1`).
    pub fn right(&self) -> u32 {
        self.x + self.w.saturating_sub(1)
    }
    /// Inclusive bottom edge coordinate (`y + h - 1`).
    pub fn bottom(&self) -> u32 {
        self.y + self.h.saturating_sub(1)
    }
    /// Area in pixels.
    pub fn area(&self) -> u64 {
        (self.w as u64) * (self.h as u64)
    }
    /// Returns true if `self` and `other` share at least one pixel.
    /// Zero-sized rectangles never overlap anything.
    pub fn overlaps(&self, other: &Rect) -> bool {
        if self.w == 0 || self.h == 0 || other.w == 0 || other.h == 0 {
            return false;
        }
        let ax2 = self.x + self.w;
        let ay2 = self.y + self.h;
        let bx2 = other.x + other.w;
        let by2 = other.y + other.h;
        !(self.x >= bx2 || other.x >= ax2 || self.y >= by2 || other.y >= ay2)
    }
}

/// One source image's placement unit within a mosaic.
///
/// The intrinsic width/height are fixed at construction; only the x,y position
/// changes, and only once, when the winning arrangement commits its result.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Part {
    key: String,
    rect: Rect,
}

impl Part {
    /// Builds a part with the given intrinsic size, positioned at (0,0).
    pub fn new(key: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            key: key.into(),
            rect: Rect::new(0, 0, width, height),
        }
    }

    /// Builds a part from a source image's size, clamped to the canvas caps in
    /// `cfg`. A source larger than the cap is clipped, not rejected.
    pub fn from_source(key: impl Into<String>, width: u32, height: u32, cfg: &MosaicConfig) -> Self {
        Self::new(key, width.min(cfg.max_width), height.min(cfg.max_height))
    }

    /// User-specified key (e.g., filename or asset path). Lookup/debug only.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Current placement rectangle (width/height fixed, x/y set by commit).
    pub fn placement(&self) -> Rect {
        self.rect
    }

    pub fn width(&self) -> u32 {
        self.rect.w
    }

    pub fn height(&self) -> u32 {
        self.rect.h
    }

    // Only the arrangement commit step moves a part.
    pub(crate) fn set_position(&mut self, x: u32, y: u32) {
        self.rect.x = x;
        self.rect.y = y;
    }
}

/// A placed frame within the final mosaic.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MosaicFrame {
    /// Part key.
    pub key: String,
    /// Committed rectangle within the mosaic.
    pub rect: Rect,
}

/// Result of a successful packing run, consumed by the compositor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MosaicLayout {
    /// The candidate canvas width that won the search.
    pub trial_width: u32,
    /// Tight bounding-box width of all placed parts.
    pub width: u32,
    /// Tight bounding-box height of all placed parts.
    pub height: u32,
    /// `width * height`; never exceeds the configured pixel budget.
    pub pixels: u64,
    /// Placed parts in input order.
    pub frames: Vec<MosaicFrame>,
    /// Keys of parts set aside because no packing could include them
    /// (empty unless `take_all_images` is false).
    pub leftovers: Vec<String>,
}

/// Statistics about mosaic packing efficiency.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MosaicStats {
    /// Number of parts placed in the mosaic.
    pub num_parts: usize,
    /// Number of parts set aside as leftovers.
    pub num_leftovers: usize,
    /// Bounding-box area of the mosaic.
    pub mosaic_area: u64,
    /// Total area of all placed parts.
    pub used_part_area: u64,
    /// Occupancy ratio: used_part_area / mosaic_area (0.0 to 1.0).
    /// Higher is better (less wasted space).
    pub occupancy: f64,
}

impl MosaicLayout {
    /// Computes packing statistics for this layout.
    pub fn stats(&self) -> MosaicStats {
        let mosaic_area = self.pixels;
        let used_part_area: u64 = self.frames.iter().map(|f| f.rect.area()).sum();
        let occupancy = if mosaic_area > 0 {
            used_part_area as f64 / mosaic_area as f64
        } else {
            0.0
        };
        MosaicStats {
            num_parts: self.frames.len(),
            num_leftovers: self.leftovers.len(),
            mosaic_area,
            used_part_area,
            occupancy,
        }
    }
}

impl MosaicStats {
    /// Returns a human-readable summary of the statistics.
    pub fn summary(&self) -> String {
        format!(
            "Parts: {}, Leftovers: {}, Occupancy: {:.2}%, Mosaic Area: {} px², Used Area: {} px²",
            self.num_parts,
            self.num_leftovers,
            self.occupancy * 100.0,
            self.mosaic_area,
            self.used_part_area,
        )
    }

    /// Returns wasted space in pixels.
    pub fn wasted_area(&self) -> u64 {
        self.mosaic_area.saturating_sub(self.used_part_area)
    }
}
