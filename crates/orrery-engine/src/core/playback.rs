/// Whether orbital advancement runs this frame.
/// Only the advancement step is gated; camera easing keeps running while paused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Playback {
    #[default]
    Playing,
    Paused,
}

impl Playback {
    pub fn is_playing(self) -> bool {
        self == Playback::Playing
    }

    pub fn toggle(&mut self) {
        *self = match *self {
            Playback::Playing => Playback::Paused,
            Playback::Paused => Playback::Playing,
        };
    }

    pub fn play(&mut self) {
        *self = Playback::Playing;
    }

    pub fn pause(&mut self) {
        *self = Playback::Paused;
    }

    /// Wire encoding for the shared header: 1.0 playing, 0.0 paused.
    pub fn encode(self) -> f32 {
        if self.is_playing() { 1.0 } else { 0.0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_state() {
        let mut p = Playback::default();
        assert!(p.is_playing());
        p.toggle();
        assert_eq!(p, Playback::Paused);
        p.toggle();
        assert_eq!(p, Playback::Playing);
    }

    #[test]
    fn play_is_idempotent() {
        let mut p = Playback::Paused;
        p.play();
        p.play();
        assert!(p.is_playing());
        assert_eq!(p.encode(), 1.0);
    }
}
