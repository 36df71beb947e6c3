use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::LinearScale;

pub const DEFAULT_TICK_COUNT: usize = 5;

/// One axis tick: a domain value and where it lands in output coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisTick {
    pub value: f64,
    pub position: f64,
}

/// Evenly spaced ticks across the scale domain, endpoints included.
///
/// `count` below two is raised to two so both domain bounds are always ticked.
#[must_use]
pub fn axis_ticks(scale: LinearScale, count: usize) -> SmallVec<[AxisTick; 8]> {
    let count = count.max(2);
    let (domain_min, domain_max) = scale.domain();
    let steps = (count - 1) as f64;

    (0..count)
        .map(|i| {
            let fraction = i as f64 / steps;
            let value = domain_min + fraction * (domain_max - domain_min);
            AxisTick {
                value,
                position: scale.map(value),
            }
        })
        .collect()
}
