//! Two segments intersection predicate.
//!
//! Plain `f64` arithmetic with exact comparisons against zero: no epsilon, so
//! configurations that are only nearly collinear are treated as general ones.

use common::Point;

/// Signed cross product `(p2 - p1) × (p3 - p1)`.
///
/// Positive when `p3` lies to the left of `p1 -> p2`, negative when to the
/// right, zero when the three points are collinear.
pub fn orientation(p1: Point, p2: Point, p3: Point) -> f64 {
    (p2.x - p1.x) * (p3.y - p1.y) - (p2.y - p1.y) * (p3.x - p1.x)
}

/// Returns `true` when segment `a b` intersects segment `c d`.
///
/// Proper crossings and overlapping collinear segments intersect. A touch
/// where some, but not all, of the orientations are zero (shared endpoint,
/// endpoint lying on the other segment) is reported as no intersection.
pub fn intersects(a: Point, b: Point, c: Point, d: Point) -> bool {
    let d1 = orientation(a, b, c);
    let d2 = orientation(a, b, d);
    let d3 = orientation(c, d, a);
    let d4 = orientation(c, d, b);

    if d1 * d2 < 0. && d3 * d4 < 0. {
        true
    } else if d1 == 0. && d2 == 0. && d3 == 0. && d4 == 0. {
        collinear_overlap(a, b, c, d)
    } else {
        false
    }
}

fn collinear_overlap(a: Point, b: Point, c: Point, d: Point) -> bool {
    within(a, c, b) || within(a, d, b) || within(c, a, d) || within(c, b, d)
}

// `p` inside the bounding box of `lo hi`
fn within(lo: Point, p: Point, hi: Point) -> bool {
    is_between(lo.x, p.x, hi.x) && is_between(lo.y, p.y, hi.y)
}

fn is_between(a: f64, b: f64, c: f64) -> bool {
    (a <= b && b <= c) || (c <= b && b <= a)
}
