//! Consumer-side lane assignment for timeline items.
//!
//! The projector leaves every item in group 0. Renderers that want items not
//! to overlap visually call [`stack_items`], which sorts by start date and
//! puts each item into the lowest lane that is free over its whole span.

use jiff::civil::Date;

use crate::models::TimelineItem;

/// Sorts `items` by start date (stable) and assigns non-overlapping lanes.
///
/// Intervals are inclusive on both ends and point items occupy their single
/// day, so two items touching on the same day land in different lanes.
pub fn stack_items(mut items: Vec<TimelineItem>) -> Vec<TimelineItem> {
    items.sort_by_key(|item| item.start);

    // Last occupied day per lane. Items arrive sorted by start, so an item
    // fits a lane iff it starts after everything already placed there.
    let mut lanes: Vec<Date> = Vec::new();
    for item in &mut items {
        let last_day = item.last_day();
        let lane = match lanes.iter().position(|&busy_until| item.start > busy_until) {
            Some(lane) => {
                lanes[lane] = last_day;
                lane
            }
            None => {
                lanes.push(last_day);
                lanes.len() - 1
            }
        };
        item.group = u32::try_from(lane).unwrap_or(u32::MAX);
    }
    items
}

/// Number of lanes used by already-stacked items.
pub fn lane_count(items: &[TimelineItem]) -> usize {
    items
        .iter()
        .map(|item| item.group as usize + 1)
        .max()
        .unwrap_or(0)
}
