/// Raw UI events that can be kept from bubbling to ancestor listeners
pub trait StopPropagation {
    fn stop_propagation(&mut self);
}

/// Scroll direction for wheel and key events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    Up,
    Down,
}

/// A raw scroll event as seen by the component that received it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollEvent {
    pub direction: ScrollDirection,
    propagation_stopped: bool,
}

impl ScrollEvent {
    pub fn new(direction: ScrollDirection) -> Self {
        Self {
            direction,
            propagation_stopped: false,
        }
    }

    /// Whether ancestor listeners should still see this event
    pub fn is_propagation_stopped(&self) -> bool {
        self.propagation_stopped
    }
}

impl StopPropagation for ScrollEvent {
    fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }
}
