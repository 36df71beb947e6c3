use indexmap::IndexSet;

pub const DEFAULT_MAX_VISIBLE_LABELS: usize = 6;

/// Selects which category labels to draw along a dense horizontal axis.
///
/// Every `ceil(n / max_visible)`-th index is kept, and the first and last
/// indices are always kept so both ends of the axis stay labeled. The result
/// iterates in ascending index order.
#[must_use]
pub fn thin_labels<T>(series: &[T], max_visible: usize) -> IndexSet<usize> {
    let len = series.len();
    let mut visible = IndexSet::new();
    if len == 0 {
        return visible;
    }

    let step = len.div_ceil(max_visible.max(1));
    for index in 0..len {
        if index == 0 || index == len - 1 || index % step == 0 {
            visible.insert(index);
        }
    }
    visible
}
