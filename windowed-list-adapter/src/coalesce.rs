use windowed_list::ScrollEvent;

/// Keeps only the latest scroll notification.
///
/// Only the most recent offset affects the visible range, so bursts (inertial scrolling, wheel
/// acceleration) can be collapsed into one resolution per frame: push every event as it
/// arrives, take the survivor when the frame is drawn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollCoalescer {
    pending: Option<ScrollEvent>,
    dropped: u64,
}

impl ScrollCoalescer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: ScrollEvent) {
        if self.pending.replace(event).is_some() {
            self.dropped = self.dropped.saturating_add(1);
        }
    }

    pub fn take(&mut self) -> Option<ScrollEvent> {
        self.pending.take()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Number of superseded events since creation.
    pub fn dropped(&self) -> u64 {
        self.dropped
    }
}
