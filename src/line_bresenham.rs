//! Bresenham line interpolator.
//!
//! Steps through the discrete pixel positions of an arbitrary line segment.
//! Lines are classified once into four cases by two booleans — steep versus
//! shallow slope, and forward versus backward along x — then normalized so
//! a single decision-variable loop always walks its major axis in ascending
//! order. Each emitted position is mapped back through the case's inverse
//! transform, so the caller only ever sees buffer coordinates.
//!
//! The walk stops when the major coordinate reaches the transformed stop
//! value; the stop position itself is not emitted. Callers that need the
//! exact terminal pixel plot it themselves.

// ============================================================================
// LineCase — tagged coordinate transform
// ============================================================================

/// Line classification, selected once per segment.
///
/// `Shallow` lines walk x as the major axis; `Steep` lines have x and y
/// swapped during the walk. `*Backward` variants additionally negate the
/// major axis so it still ascends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineCase {
    Shallow,
    ShallowBackward,
    Steep,
    SteepBackward,
}

impl LineCase {
    fn classify(steep: bool, backward: bool) -> Self {
        match (steep, backward) {
            (false, false) => LineCase::Shallow,
            (false, true) => LineCase::ShallowBackward,
            (true, false) => LineCase::Steep,
            (true, true) => LineCase::SteepBackward,
        }
    }

    /// Map a normalized `(major, minor)` walk position back to buffer
    /// coordinates.
    #[inline]
    pub fn untransform(self, major: i64, minor: i64) -> (i64, i64) {
        match self {
            LineCase::Shallow => (major, minor),
            LineCase::ShallowBackward => (-major, minor),
            LineCase::Steep => (minor, major),
            LineCase::SteepBackward => (minor, -major),
        }
    }
}

// ============================================================================
// LineBresenhamInterpolator
// ============================================================================

/// Decision-variable walk over a line segment's pixel positions.
///
/// Emits positions from the start point up to, but not including, the stop
/// point's major-axis column. Arithmetic is i64 internally so extreme i32
/// endpoints cannot overflow the doubled deltas.
pub struct LineBresenhamInterpolator {
    case: LineCase,
    major: i64,
    minor: i64,
    stop_major: i64,
    minor_step: i64,
    dy2: i64,
    dy_minus_dx2: i64,
    decision: i64,
}

impl LineBresenhamInterpolator {
    pub fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        let (mut sx, mut sy) = (x1 as i64, y1 as i64);
        let (mut tx, mut ty) = (x2 as i64, y2 as i64);

        let mut abs_dx = (sx - tx).abs();
        let mut abs_dy = (sy - ty).abs();

        let steep = abs_dy > abs_dx;
        if steep {
            core::mem::swap(&mut sx, &mut sy);
            core::mem::swap(&mut tx, &mut ty);
            core::mem::swap(&mut abs_dx, &mut abs_dy);
        }

        let backward = sx > tx;
        if backward {
            sx = -sx;
            tx = -tx;
        }

        let dy2 = 2 * abs_dy;
        Self {
            case: LineCase::classify(steep, backward),
            major: sx,
            minor: sy,
            stop_major: tx,
            minor_step: if sy < ty { 1 } else { -1 },
            dy2,
            dy_minus_dx2: 2 * (abs_dy - abs_dx),
            decision: dy2 - abs_dx,
        }
    }

    /// The classification chosen for this segment.
    pub fn case(&self) -> LineCase {
        self.case
    }

    /// The next pixel position in buffer coordinates, or `None` once the
    /// stop column is reached.
    #[inline]
    pub fn next(&mut self) -> Option<(i32, i32)> {
        if self.major >= self.stop_major {
            return None;
        }
        let (x, y) = self.case.untransform(self.major, self.minor);

        self.major += 1;
        if self.decision < 0 {
            self.decision += self.dy2;
        } else {
            self.minor += self.minor_step;
            self.decision += self.dy_minus_dx2;
        }

        Some((x as i32, y as i32))
    }
}

// ============================================================================
// Tests
// ============================================================================
