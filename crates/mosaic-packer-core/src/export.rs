use crate::error::{MosaicError, Result};
use crate::model::MosaicLayout;
use serde_json::{Value, json};

/// Serialize a layout as a JSON object `{ frames, meta }` with frames keyed by
/// part name. This is the hand-off surface to the compositor; no image bytes.
pub fn layout_to_json(layout: &MosaicLayout) -> Value {
    let mut frames = serde_json::Map::new();
    for fr in &layout.frames {
        frames.insert(
            fr.key.clone(),
            json!({"x": fr.rect.x, "y": fr.rect.y, "w": fr.rect.w, "h": fr.rect.h}),
        );
    }
    json!({
        "frames": frames,
        "meta": {
            "app": "mosaic-packer",
            "version": env!("CARGO_PKG_VERSION"),
            "width": layout.width,
            "height": layout.height,
            "pixels": layout.pixels,
            "trialWidth": layout.trial_width,
            "leftovers": layout.leftovers,
        }
    })
}

/// Pretty-printed variant of [`layout_to_json`].
pub fn layout_to_json_string(layout: &MosaicLayout) -> Result<String> {
    serde_json::to_string_pretty(&layout_to_json(layout))
        .map_err(|e| MosaicError::Encode(e.to_string()))
}
