//! Order tracking progression.
//!
//! Four visible stages; `Pending` sits before the timeline and maps to
//! no stage at all.

use crate::checkout::OrderStatus;

/// Tracking stages in display order.
pub const TRACKING_STAGES: [OrderStatus; 4] = [
    OrderStatus::Confirmed,
    OrderStatus::Preparing,
    OrderStatus::OutForDelivery,
    OrderStatus::Delivered,
];

/// Position of a status on the tracking timeline.
///
/// Returns `None` for `Pending`, which never appears on the timeline.
pub fn stage_index(status: OrderStatus) -> Option<usize> {
    TRACKING_STAGES.iter().position(|s| *s == status)
}

/// Timeline progress as a percentage, for the tracking progress bar.
pub fn progress_percent(status: OrderStatus) -> u8 {
    match stage_index(status) {
        Some(idx) => (((idx + 1) * 100) / TRACKING_STAGES.len()) as u8,
        None => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_index() {
        assert_eq!(stage_index(OrderStatus::Pending), None);
        assert_eq!(stage_index(OrderStatus::Confirmed), Some(0));
        assert_eq!(stage_index(OrderStatus::Preparing), Some(1));
        assert_eq!(stage_index(OrderStatus::OutForDelivery), Some(2));
        assert_eq!(stage_index(OrderStatus::Delivered), Some(3));
    }

    #[test]
    fn test_progress_percent() {
        assert_eq!(progress_percent(OrderStatus::Pending), 0);
        assert_eq!(progress_percent(OrderStatus::Confirmed), 25);
        assert_eq!(progress_percent(OrderStatus::Preparing), 50);
        assert_eq!(progress_percent(OrderStatus::OutForDelivery), 75);
        assert_eq!(progress_percent(OrderStatus::Delivered), 100);
    }
}
