use crate::model::{Part, Rect};

/// Outcome of one trial-width arrangement.
///
/// Infeasibility is an expected, frequent outcome of the width search, so it is
/// a variant here rather than an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrangeResult {
    /// All parts placed; tight bounding box and its area.
    Fit { width: u32, height: u32, pixels: u64 },
    /// Not all parts fit within the trial width and shared maximum height.
    Infeasible,
}

impl ArrangeResult {
    /// Area cost in pixels, or `None` when infeasible.
    pub fn pixels(&self) -> Option<u64> {
        match self {
            ArrangeResult::Fit { pixels, .. } => Some(*pixels),
            ArrangeResult::Infeasible => None,
        }
    }

    pub fn is_fit(&self) -> bool {
        matches!(self, ArrangeResult::Fit { .. })
    }
}

/// One candidate placement of all parts within a fixed trial canvas width and a
/// shared maximum height.
///
/// The arrangement owns a private copy of every part's rectangle, indexed
/// identically to the input slice. Nothing is written back to the parts until
/// [`position_parts`](Arrangement::position_parts), so independent trial widths
/// can be evaluated concurrently.
pub struct Arrangement {
    max_height: u32,
    slots: Vec<Rect>,
    width_used: u32,
    height_used: u32,
    arranged: bool,
}

impl Arrangement {
    /// Copies each part's placement rectangle into an arrangement-owned buffer.
    /// No side effects on the input parts.
    pub fn new(max_height: u32, parts: &[Part]) -> Self {
        Self {
            max_height,
            slots: parts.iter().map(|p| p.placement()).collect(),
            width_used: 0,
            height_used: 0,
            arranged: false,
        }
    }

    /// Attempts to place every rectangle, in input order, with a first-fit
    /// shelf heuristic: left to right along the current row, wrapping down to
    /// the lowest blocking bottom edge when the row runs out of width.
    ///
    /// Each horizontal advance re-scans all previously placed rectangles, so a
    /// trial costs O(n²) comparisons in the worst case. Deterministic for
    /// identical inputs: there is no randomness and input order is preserved.
    pub fn arrange_within(&mut self, max_width: u32) -> ArrangeResult {
        self.arranged = false;
        for i in 0..self.slots.len() {
            let (w, h) = (self.slots[i].w, self.slots[i].h);
            if w > max_width {
                // Fail fast: no position can ever hold this part.
                return ArrangeResult::Infeasible;
            }
            let mut x = 0u32;
            let mut y = 0u32;
            // Lowest bottom edge among blockers met in the current row; the
            // target row after a wrap.
            let mut next_y = u32::MAX;
            loop {
                if y.saturating_add(h) > self.max_height {
                    return ArrangeResult::Infeasible;
                }
                if x.saturating_add(w) > max_width {
                    if next_y == u32::MAX || next_y <= y {
                        return ArrangeResult::Infeasible;
                    }
                    x = 0;
                    y = next_y;
                    next_y = u32::MAX;
                    continue;
                }
                let candidate = Rect::new(x, y, w, h);
                match self.slots[..i].iter().find(|r| r.overlaps(&candidate)) {
                    Some(blocker) => {
                        x = blocker.x + blocker.w;
                        let bottom = blocker.y + blocker.h;
                        if bottom > y && bottom < next_y {
                            next_y = bottom;
                        }
                    }
                    None => {
                        self.slots[i].x = x;
                        self.slots[i].y = y;
                        break;
                    }
                }
            }
        }

        let mut width_used = 0u32;
        let mut height_used = 0u32;
        for r in &self.slots {
            width_used = width_used.max(r.x + r.w);
            height_used = height_used.max(r.y + r.h);
        }
        self.width_used = width_used;
        self.height_used = height_used;
        self.arranged = true;
        ArrangeResult::Fit {
            width: width_used,
            height: height_used,
            pixels: (width_used as u64) * (height_used as u64),
        }
    }

    /// Copies the committed x,y of every slot back onto the externally owned
    /// parts. This is the only mutation an arrangement performs outside itself
    /// and it is only valid after a successful [`arrange_within`](Arrangement::arrange_within).
    pub fn position_parts(&self, parts: &mut [Part]) {
        debug_assert!(self.arranged, "position_parts called before a successful arrange_within");
        debug_assert_eq!(parts.len(), self.slots.len());
        for (part, slot) in parts.iter_mut().zip(self.slots.iter()) {
            part.set_position(slot.x, slot.y);
        }
    }

    /// Area cost of the last successful arrangement, or `None` if the last
    /// attempt was infeasible.
    pub fn cost_if_feasible(&self) -> Option<u64> {
        self.arranged
            .then(|| (self.width_used as u64) * (self.height_used as u64))
    }

    /// Tight bounding-box width of the last successful arrangement.
    pub fn width_used(&self) -> u32 {
        self.width_used
    }

    /// Tight bounding-box height of the last successful arrangement.
    pub fn height_used(&self) -> u32 {
        self.height_used
    }
}
