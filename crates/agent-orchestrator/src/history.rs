use std::collections::VecDeque;

use notification_service::Alert;

/// Max alerts retained; oldest are evicted first.
pub const HISTORY_CAPACITY: usize = 100;

/// Insertion-ordered, bounded alert history. The most recent alert is last.
#[derive(Debug, Default)]
pub struct AlertHistory {
    items: VecDeque<Alert>,
}

impl AlertHistory {
    pub fn new() -> Self {
        Self {
            items: VecDeque::with_capacity(HISTORY_CAPACITY),
        }
    }

    pub fn push(&mut self, alert: Alert) {
        if self.items.len() == HISTORY_CAPACITY {
            self.items.pop_front();
        }
        self.items.push_back(alert);
    }

    /// The last `limit` alerts in insertion order (oldest of the window
    /// first). `limit` is clamped to the current length.
    pub fn recent(&self, limit: usize) -> Vec<Alert> {
        let take = limit.min(self.items.len());
        self.items
            .iter()
            .skip(self.items.len() - take)
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
