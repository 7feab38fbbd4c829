/// Key codes the scenes react to (DOM `keyCode` values).
pub mod keys {
    pub const ESCAPE: u32 = 27;
    pub const SPACE: u32 = 32;
}

/// Input event types the engine understands.
/// Generic — no scene-specific semantics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// A click landed on the canvas at viewport pixel (x, y).
    Click { x: f32, y: f32 },
    /// A key was released.
    KeyUp { key_code: u32 },
    /// The canvas was resized to (width, height) CSS pixels.
    Resize { width: f32, height: f32 },
    /// A custom event from the UI layer (play button, system picker, ...).
    /// `kind` identifies the event type; `a`, `b`, `c` carry arbitrary data.
    Custom { kind: u32, a: f32, b: f32, c: f32 },
}

/// A queue of input events.
/// JS pushes events between frames; the runner hands them to the scene once per tick.
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(32),
        }
    }

    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Drain all pending events. Returns a Vec and clears the queue.
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn iter(&self) -> impl Iterator<Item = &InputEvent> {
        self.events.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_drain() {
        let mut q = InputQueue::new();
        q.push(InputEvent::Click { x: 10.0, y: 20.0 });
        q.push(InputEvent::KeyUp { key_code: keys::SPACE });
        assert_eq!(q.len(), 2);
        let events = q.drain();
        assert_eq!(events.len(), 2);
        assert!(q.is_empty());
    }

    #[test]
    fn preserves_order() {
        let mut q = InputQueue::new();
        q.push(InputEvent::Click { x: 1.0, y: 2.0 });
        q.push(InputEvent::Custom { kind: 7, a: 1.5, b: 2.5, c: 3.5 });
        let kinds: Vec<_> = q.iter().copied().collect();
        assert_eq!(kinds[0], InputEvent::Click { x: 1.0, y: 2.0 });
        assert_eq!(kinds[1], InputEvent::Custom { kind: 7, a: 1.5, b: 2.5, c: 3.5 });
    }
}
