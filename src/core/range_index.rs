use serde::{Deserialize, Serialize};

/// Sort direction of the array passed to [`bracket`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SearchOrder {
    #[default]
    Ascending,
    Descending,
}

impl SearchOrder {
    #[must_use]
    pub const fn sign(self) -> f64 {
        match self {
            Self::Ascending => 1.0,
            Self::Descending => -1.0,
        }
    }
}

/// Pair of adjacent indices enclosing a searched value.
///
/// `lower == -1` means the value lies before the first element and
/// `upper == len` means it lies past the last one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bracket {
    pub lower: isize,
    pub upper: isize,
}

impl Bracket {
    #[must_use]
    pub const fn new(lower: isize, upper: isize) -> Self {
        Self { lower, upper }
    }

    #[must_use]
    pub const fn is_exact(self) -> bool {
        self.lower == self.upper
    }

    #[must_use]
    pub const fn is_before_start(self) -> bool {
        self.lower < 0
    }

    #[must_use]
    pub const fn is_past_end(self, len: usize) -> bool {
        self.upper >= len as isize
    }
}

/// Finds the tightest bracket around `value` in a sorted slice.
///
/// Runs in `O(log n)`. Exact hits collapse both ends onto the matching index;
/// with duplicated values the lowest matching index wins.
#[must_use]
pub fn bracket(values: &[f64], value: f64, order: SearchOrder) -> Bracket {
    let sign = order.sign();
    if values.is_empty() || sign * value < sign * values[0] {
        return Bracket::new(-1, 0);
    }

    let mut left = 0_usize;
    let mut right = values.len() - 1;
    if sign * value > sign * values[right] {
        return Bracket::new(right as isize, right as isize + 1);
    }

    while right - left > 1 {
        let mid = left + ((right - left) >> 1);
        if sign * value <= sign * values[mid] {
            right = mid;
        } else {
            left = mid;
        }
    }

    if values[left] == value {
        right = left;
    } else if values[right] == value {
        left = right;
    }

    Bracket::new(left as isize, right as isize)
}

/// Resolves the axis index closest to `value`, preferring points that lie
/// inside `visible` when the nearest candidate sits outside it.
#[must_use]
pub fn nearest_index(axis: &[f64], value: f64, visible: (f64, f64)) -> Option<usize> {
    if axis.is_empty() {
        return None;
    }

    let found = bracket(axis, value, SearchOrder::Ascending);
    if found.is_before_start() {
        return Some(0);
    }
    if found.is_past_end(axis.len()) {
        return Some(axis.len() - 1);
    }

    let lower = found.lower as usize;
    let upper = found.upper as usize;
    let lower_distance = (value - axis[lower]).abs();
    let upper_distance = (value - axis[upper]).abs();
    let lower_visible = axis[lower] >= visible.0;
    let upper_visible = axis[upper] <= visible.1;

    let index = if lower_distance <= upper_distance {
        if lower_visible { lower } else { upper }
    } else if upper_visible {
        upper
    } else {
        lower
    };
    Some(index)
}
