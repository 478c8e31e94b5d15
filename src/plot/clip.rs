//! Polyline clipping to the visible chart rectangle.
//!
//! The chart backend draws coordinates outside the axis ranges over the
//! labels, so curves are cut to the rectangle first (Liang-Barsky per segment).

use std::ops::Range;

type Point = (f64, f64);

/// Visible part of a segment as parameters `t0 <= t1` along `p0 -> p1`
fn clip_segment(p0: Point, p1: Point, x: &Range<f64>, y: &Range<f64>) -> Option<(f64, f64)> {
    let dx = p1.0 - p0.0;
    let dy = p1.1 - p0.1;
    let mut t0 = 0.0_f64;
    let mut t1 = 1.0_f64;

    for (p, q) in [
        (-dx, p0.0 - x.start),
        (dx, x.end - p0.0),
        (-dy, p0.1 - y.start),
        (dy, y.end - p0.1),
    ] {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let r = q / p;
        if p < 0.0 {
            if r > t1 {
                return None;
            }
            t0 = t0.max(r);
        } else {
            if r < t0 {
                return None;
            }
            t1 = t1.min(r);
        }
    }
    Some((t0, t1))
}

fn at(p0: Point, p1: Point, t: f64) -> Point {
    if t == 0.0 {
        p0
    } else if t == 1.0 {
        p1
    } else {
        (p0.0 + t * (p1.0 - p0.0), p0.1 + t * (p1.1 - p0.1))
    }
}

fn inside(p: Point, x: &Range<f64>, y: &Range<f64>) -> bool {
    p.0 >= x.start && p.0 <= x.end && p.1 >= y.start && p.1 <= y.end
}

/// Split a polyline into the pieces that lie inside `x` x `y`
///
/// Non-finite points break the line.
pub fn clip_polyline(points: &[Point], x: &Range<f64>, y: &Range<f64>) -> Vec<Vec<Point>> {
    let finite = |p: &Point| p.0.is_finite() && p.1.is_finite();

    if points.len() == 1 {
        let p = points[0];
        return if finite(&p) && inside(p, x, y) {
            vec![vec![p]]
        } else {
            Vec::new()
        };
    }

    let mut pieces: Vec<Vec<Point>> = Vec::new();
    let mut current: Vec<Point> = Vec::new();

    for pair in points.windows(2) {
        let (p0, p1) = (pair[0], pair[1]);
        let visible = if finite(&p0) && finite(&p1) {
            clip_segment(p0, p1, x, y)
        } else {
            None
        };

        match visible {
            Some((t0, t1)) => {
                if t0 > 0.0 || current.is_empty() {
                    if current.len() > 1 {
                        pieces.push(std::mem::take(&mut current));
                    }
                    current.clear();
                    current.push(at(p0, p1, t0));
                }
                current.push(at(p0, p1, t1));
                if t1 < 1.0 {
                    pieces.push(std::mem::take(&mut current));
                }
            }
            None => {
                if current.len() > 1 {
                    pieces.push(std::mem::take(&mut current));
                }
                current.clear();
            }
        }
    }
    if current.len() > 1 {
        pieces.push(current);
    }
    pieces
}
