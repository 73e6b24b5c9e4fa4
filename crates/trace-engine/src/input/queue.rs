/// Input events a lesson understands.
/// Coordinates are in the same display space as the reference path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// A touch/click began at (x, y).
    PointerDown { x: f32, y: f32 },
    /// A touch/cursor moved to (x, y).
    PointerMove { x: f32, y: f32 },
    /// A touch/click ended at (x, y).
    PointerUp { x: f32, y: f32 },
    /// The pointer left the canvas or the gesture was cancelled.
    PointerCancel,
    /// The player pressed "clear".
    Clear,
}

impl InputEvent {
    /// True for events after which no stroke is in progress.
    pub fn ends_gesture(&self) -> bool {
        matches!(
            self,
            InputEvent::PointerUp { .. } | InputEvent::PointerCancel | InputEvent::Clear
        )
    }
}

/// Pointer events buffered between host callbacks and the lesson.
///
/// A `Clear` erases everything drawn so far, so pushing one discards the
/// events still waiting ahead of it.
#[derive(Debug, Default)]
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: InputEvent) {
        if event == InputEvent::Clear {
            self.events.clear();
        }
        self.events.push(event);
    }

    /// Take every pending event, leaving the queue empty.
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn iter(&self) -> impl Iterator<Item = &InputEvent> {
        self.events.iter()
    }

    /// True once the last pending event closes the current gesture.
    pub fn gesture_ended(&self) -> bool {
        self.events.last().is_some_and(InputEvent::ends_gesture)
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_drain() {
        let mut q = InputQueue::new();
        q.push(InputEvent::PointerDown { x: 10.0, y: 20.0 });
        q.push(InputEvent::PointerMove { x: 12.0, y: 20.0 });
        assert_eq!(q.len(), 2);
        let events = q.drain();
        assert_eq!(events[0], InputEvent::PointerDown { x: 10.0, y: 20.0 });
        assert!(q.is_empty());
    }

    #[test]
    fn clear_discards_pending_strokes() {
        let mut q = InputQueue::new();
        q.push(InputEvent::PointerDown { x: 10.0, y: 20.0 });
        q.push(InputEvent::PointerMove { x: 12.0, y: 20.0 });
        q.push(InputEvent::Clear);
        q.push(InputEvent::PointerDown { x: 1.0, y: 1.0 });
        assert_eq!(
            q.drain(),
            vec![InputEvent::Clear, InputEvent::PointerDown { x: 1.0, y: 1.0 }]
        );
    }

    #[test]
    fn gesture_ends_on_up_cancel_or_clear() {
        let mut q = InputQueue::new();
        assert!(!q.gesture_ended());
        q.push(InputEvent::PointerDown { x: 0.0, y: 0.0 });
        assert!(!q.gesture_ended());
        q.push(InputEvent::PointerUp { x: 0.0, y: 0.0 });
        assert!(q.gesture_ended());
        q.push(InputEvent::PointerDown { x: 0.0, y: 0.0 });
        q.push(InputEvent::PointerCancel);
        assert!(q.gesture_ended());
        q.push(InputEvent::Clear);
        assert!(q.gesture_ended());
    }

    #[test]
    fn iter_keeps_events() {
        let mut q = InputQueue::default();
        q.push(InputEvent::PointerMove { x: 1.0, y: 2.0 });
        q.push(InputEvent::PointerCancel);
        assert_eq!(q.iter().count(), 2);
        assert_eq!(q.len(), 2);
    }
}
