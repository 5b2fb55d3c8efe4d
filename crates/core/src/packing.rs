//! Packing state machine for trip checklists.
//!
//! A gear item attached to a trip is either [`PackState::Unpacked`] or
//! [`PackState::Packed`]. The `date_packed` column always travels with the
//! state: it is set exactly when the item is packed and cleared when it is
//! unpacked. [`toggle`] is the only transition.

use serde::Serialize;

use crate::types::Timestamp;

/// Packed state of one gear item on one trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PackState {
    Unpacked,
    Packed,
}

impl PackState {
    /// State newly attached gear starts in.
    pub const INITIAL: PackState = PackState::Unpacked;

    pub fn from_flag(is_packed: bool) -> Self {
        if is_packed {
            PackState::Packed
        } else {
            PackState::Unpacked
        }
    }

    pub fn is_packed(self) -> bool {
        self == PackState::Packed
    }

    pub fn toggled(self) -> Self {
        match self {
            PackState::Packed => PackState::Unpacked,
            PackState::Unpacked => PackState::Packed,
        }
    }

    /// The `date_packed` value that accompanies this state at time `now`.
    pub fn date_packed(self, now: Timestamp) -> Option<Timestamp> {
        match self {
            PackState::Packed => Some(now),
            PackState::Unpacked => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PackState::Packed => "packed",
            PackState::Unpacked => "unpacked",
        }
    }
}

/// New column values produced by a toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackTransition {
    pub state: PackState,
    pub date_packed: Option<Timestamp>,
}

/// Flip the packed flag, pairing the new state with its `date_packed`.
pub fn toggle(is_packed: bool, now: Timestamp) -> PackTransition {
    let state = PackState::from_flag(is_packed).toggled();
    PackTransition {
        state,
        date_packed: state.date_packed(now),
    }
}

/// `date_packed` is non-null iff `is_packed` is true.
pub fn is_consistent(is_packed: bool, date_packed: Option<Timestamp>) -> bool {
    is_packed == date_packed.is_some()
}

/// Confirmation shown after a toggle, e.g. `"Headlamp packed"`.
pub fn toggle_message(gear_name: &str, state: PackState) -> String {
    format!("{gear_name} {}", state.label())
}

// ---------------------------------------------------------------------------
// Summary
// ---------------------------------------------------------------------------

/// Progress of a trip checklist.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PackingSummary {
    pub item_count: usize,
    pub packed_count: usize,
    /// Sum of known weights; items without a weight count as zero.
    pub total_weight_grams: i64,
    pub packed_weight_grams: i64,
    /// Rounded down; 0 for an empty checklist.
    pub percent_packed: u8,
    /// True when the checklist is non-empty and every item is packed.
    pub is_complete: bool,
}

impl PackingSummary {
    /// Build a summary from `(is_packed, weight_grams)` pairs.
    pub fn from_items<I>(items: I) -> Self
    where
        I: IntoIterator<Item = (bool, Option<i32>)>,
    {
        let mut summary = PackingSummary::default();
        for (is_packed, weight) in items {
            let grams = i64::from(weight.unwrap_or(0));
            summary.item_count += 1;
            summary.total_weight_grams += grams;
            if is_packed {
                summary.packed_count += 1;
                summary.packed_weight_grams += grams;
            }
        }
        if summary.item_count > 0 {
            let percent = summary.packed_count * 100 / summary.item_count;
            summary.percent_packed = u8::try_from(percent).unwrap_or(100);
            summary.is_complete = summary.packed_count == summary.item_count;
        }
        summary
    }
}

/// Human-readable time since an item was packed.
pub fn packed_ago(date_packed: Timestamp, now: Timestamp) -> String {
    let elapsed = now.signed_duration_since(date_packed);
    let minutes = elapsed.num_minutes();
    if minutes < 1 {
        return "just now".to_string();
    }
    if minutes < 60 {
        return plural(minutes, "minute");
    }
    let hours = elapsed.num_hours();
    if hours < 24 {
        return plural(hours, "hour");
    }
    plural(elapsed.num_days(), "day")
}

fn plural(n: i64, unit: &str) -> String {
    if n == 1 {
        format!("1 {unit} ago")
    } else {
        format!("{n} {unit}s ago")
    }
}
