//=========================================================================
// Path Builder
//=========================================================================
//
// Computes the line segments drawn on the flattened map for one route.
//
// A destination whose wrap flag matches the travel direction is reached
// across the map seam. Such a path is drawn twice, shifted by one canvas
// width each way, so the line leaves one edge and re-enters the other:
//
// ```text
//   |        start ●───────────────────── (end + w)
//   |                                      |
//   (start - w) ───────────── ● end        |
//   0                                      w
// ```
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::DVec2;

//=== Internal Dependencies ===============================================

use super::route::Route;

//=== Segment =============================================================

/// A straight line between two canvas-pixel positions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: DVec2,
    pub end: DVec2,
}

impl Segment {
    pub const fn new(start: DVec2, end: DVec2) -> Self {
        Self { start, end }
    }

    /// Point reached after drawing `alpha` of the segment.
    pub fn lerp(&self, alpha: f64) -> DVec2 {
        self.start.lerp(self.end, alpha)
    }
}

//=== PathBuilder =========================================================

/// Builds map paths for routes on a canvas of fixed width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathBuilder {
    canvas_width: f64,
}

impl PathBuilder {
    /// Canvas width of the bundled world map.
    pub const DEFAULT_CANVAS_WIDTH: f64 = 1024.0;

    pub fn new(canvas_width: f64) -> Self {
        Self { canvas_width }
    }

    pub fn canvas_width(&self) -> f64 {
        self.canvas_width
    }

    /// Segments for `route`, in step insertion order.
    ///
    /// Every step of the source is joined to every step of the target.
    /// No source means nothing to draw.
    pub fn build(&self, route: &Route) -> Vec<Segment> {
        let (Some(source), Some(target)) = (&route.source, &route.target) else {
            return Vec::new();
        };

        let wraps = target.wrap.crossed_by(route.direction);
        let offset = f64::from(target.wrap.sign()) * self.canvas_width;

        let mut paths = Vec::with_capacity(source.steps.len() * target.steps.len() * 2);
        for &start in &source.steps {
            for &end in &target.steps {
                if wraps {
                    paths.push(Segment::new(DVec2::new(start.x - offset, start.y), end));
                    paths.push(Segment::new(start, DVec2::new(end.x + offset, end.y)));
                } else {
                    paths.push(Segment::new(start, end));
                }
            }
        }
        paths
    }
}

impl Default for PathBuilder {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CANVAS_WIDTH)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
