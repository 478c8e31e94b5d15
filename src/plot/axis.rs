//! Axis ranges: user limits and autoscaling.

use std::ops::Range;

/// Optional axis limits
///
/// `x = Some((min, None))` keeps the lower bound and uses the window's last
/// time as the upper one.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AxisLimits {
    pub x: Option<(f64, Option<f64>)>,
    pub y: Option<(f64, f64)>,
}

impl AxisLimits {
    pub fn resolve_x(&self, max_time: f64) -> Option<(f64, f64)> {
        self.x.map(|(lo, hi)| (lo, hi.unwrap_or(max_time)))
    }
}

/// Running min/max over finite values
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    pub min: f64,
    pub max: f64,
}

impl Extent {
    pub fn of(values: impl IntoIterator<Item = f64>) -> Option<Self> {
        values
            .into_iter()
            .filter(|v| v.is_finite())
            .fold(None, |acc: Option<Extent>, v| {
                Some(match acc {
                    None => Extent { min: v, max: v },
                    Some(e) => Extent {
                        min: e.min.min(v),
                        max: e.max.max(v),
                    },
                })
            })
    }

    pub fn union(a: Option<Self>, b: Option<Self>) -> Option<Self> {
        match (a, b) {
            (Some(a), Some(b)) => Some(Extent {
                min: a.min.min(b.min),
                max: a.max.max(b.max),
            }),
            (a, None) => a,
            (None, b) => b,
        }
    }
}

/// Margin added on both sides of autoscaled data, as a share of the span
const AUTO_MARGIN: f64 = 0.05;

/// Chart range from explicit limits or from the data extent
///
/// Always returns a non-empty, finite range.
pub fn chart_range(limits: Option<(f64, f64)>, data: Option<Extent>, margin: bool) -> Range<f64> {
    let (lo, hi) = match (limits, data) {
        (Some((lo, hi)), _) if lo.is_finite() && hi.is_finite() => (lo.min(hi), lo.max(hi)),
        (_, Some(e)) => {
            let pad = if margin {
                (e.max - e.min) * AUTO_MARGIN
            } else {
                0.0
            };
            (e.min - pad, e.max + pad)
        }
        _ => (0.0, 1.0),
    };
    widen(lo, hi)
}

fn widen(lo: f64, hi: f64) -> Range<f64> {
    if hi > lo {
        return lo..hi;
    }
    let pad = if lo == 0.0 { 1.0 } else { lo.abs() * 0.1 };
    (lo - pad)..(hi + pad)
}
