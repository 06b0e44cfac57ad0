//! Core library for packing image parts into a single mosaic.
//!
//! - Algorithm: first-fit shelf placement evaluated across several candidate
//!   canvas widths; the cheapest feasible bounding box within the pixel budget
//!   wins, smallest width first on ties
//! - Driver: `pack_mosaic` takes parts and a `MosaicConfig` and commits the
//!   winning positions back onto them
//! - Data model is serde-serializable; a JSON export helper is provided for
//!   downstream compositors.
//!
//! Quick example:
//! ```
//! use mosaic_packer_core::prelude::*;
//!
//! # fn main() -> Result<(), mosaic_packer_core::MosaicError> {
//! let cfg = MosaicConfig::builder()
//!     .with_max_dimensions(64, 64)
//!     .max_pixels(4096)
//!     .min_width(16)
//!     .num_width_trials(4)
//!     .build();
//! let mut parts = vec![
//!     Part::from_source("play", 20, 10, &cfg),
//!     Part::from_source("stop", 20, 10, &cfg),
//! ];
//! let layout = pack_mosaic(&mut parts, &cfg)?;
//! assert!(layout.pixels <= 4096);
//! # Ok(()) }
//! ```

pub mod arrange;
pub mod config;
pub mod error;
pub mod export;
pub mod model;
pub mod search;

pub use arrange::*;
pub use config::*;
pub use error::*;
pub use export::*;
pub use model::*;
pub use search::*;

/// Convenience prelude for common types and functions.
/// Importing `mosaic_packer_core::prelude::*` brings the primary APIs into scope.
pub mod prelude {
    pub use crate::arrange::{ArrangeResult, Arrangement};
    pub use crate::config::{MosaicConfig, MosaicConfigBuilder};
    pub use crate::export::{layout_to_json, layout_to_json_string};
    pub use crate::model::{MosaicFrame, MosaicLayout, MosaicStats, Part, Rect};
    pub use crate::search::{pack_mosaic, pack_mosaic_sizes, trial_widths};
}
