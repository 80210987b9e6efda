//! Rotating ring of team avatars.

/// Ring container edge, in px.
pub const RING_SIZE: f64 = 700.0;
pub const RING_RADIUS: f64 = 250.0;
pub const INACTIVE_SIZE: f64 = 170.0;
pub const ACTIVE_SIZE: f64 = 320.0;
/// 0.3° per frame at 60 fps.
pub const DEGREES_PER_SECOND: f64 = 18.0;
const DIMMED_OPACITY: f64 = 0.3;

#[derive(Debug, Clone, PartialEq)]
pub struct AvatarLayout {
    pub size: f64,
    pub top: f64,
    pub left: f64,
    pub opacity: f64,
    pub z_index: u32,
    pub focused: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TeamRing {
    len: usize,
    focused: Option<usize>,
    angle: f64,
    last_tick: Option<f64>,
}

impl TeamRing {
    pub fn new(len: usize) -> Self {
        Self {
            len,
            focused: None,
            angle: 0.0,
            last_tick: None,
        }
    }

    /// Current ring rotation in degrees, in `[0, 360)`.
    pub fn angle(&self) -> f64 {
        self.angle
    }

    pub fn focused(&self) -> Option<usize> {
        self.focused
    }

    pub fn is_rotating(&self) -> bool {
        self.focused.is_none()
    }

    /// Advances the rotation to the animation timestamp `now_ms`. The first
    /// tick after a pause only records the timestamp.
    pub fn tick(&mut self, now_ms: f64) {
        if !self.is_rotating() {
            self.last_tick = None;
            return;
        }
        if let Some(previous) = self.last_tick {
            let elapsed = (now_ms - previous).max(0.0);
            self.angle = (self.angle + elapsed / 1000.0 * DEGREES_PER_SECOND).rem_euclid(360.0);
        }
        self.last_tick = Some(now_ms);
    }

    /// Focuses `index`, or returns to rotation if it is already focused.
    pub fn toggle(&mut self, index: usize) {
        if index >= self.len {
            return;
        }
        if self.focused == Some(index) {
            self.focused = None;
        } else {
            self.focused = Some(index);
        }
        self.last_tick = None;
    }

    pub fn layout(&self, index: usize) -> AvatarLayout {
        let center = RING_SIZE / 2.0;
        let focused = self.focused == Some(index);

        if focused {
            return AvatarLayout {
                size: ACTIVE_SIZE,
                top: center - ACTIVE_SIZE / 2.0,
                left: center - ACTIVE_SIZE / 2.0,
                opacity: 1.0,
                z_index: 100,
                focused,
            };
        }

        let step = 360.0 / self.len.max(1) as f64;
        let radians = (step * index as f64).to_radians();
        AvatarLayout {
            size: INACTIVE_SIZE,
            top: center + RING_RADIUS * radians.sin() - INACTIVE_SIZE / 2.0,
            left: center + RING_RADIUS * radians.cos() - INACTIVE_SIZE / 2.0,
            opacity: if self.focused.is_some() { DIMMED_OPACITY } else { 1.0 },
            z_index: 10,
            focused,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(ring: &mut TeamRing, fps: u32) {
        let frame_ms = 1000.0 / fps as f64;
        ring.tick(0.0);
        for frame in 1..=fps {
            ring.tick(frame as f64 * frame_ms);
        }
    }

    #[test]
    fn speed_does_not_depend_on_frame_rate() {
        let mut fast = TeamRing::new(3);
        let mut slow = TeamRing::new(3);
        run(&mut fast, 120);
        run(&mut slow, 30);
        assert!((fast.angle() - DEGREES_PER_SECOND).abs() < 1e-6);
        assert!((fast.angle() - slow.angle()).abs() < 1e-6);
    }

    #[test]
    fn angle_wraps() {
        let mut ring = TeamRing::new(3);
        ring.tick(0.0);
        ring.tick(21_000.0);
        assert!((ring.angle() - 18.0).abs() < 1e-9);
    }

    #[test]
    fn focus_pauses_and_resumes_without_jump() {
        let mut ring = TeamRing::new(3);
        ring.tick(0.0);
        ring.tick(1000.0);
        let before = ring.angle();

        ring.toggle(1);
        assert_eq!(ring.focused(), Some(1));
        ring.tick(5000.0);
        assert_eq!(ring.angle(), before);

        ring.toggle(1);
        assert!(ring.is_rotating());
        ring.tick(9000.0);
        assert_eq!(ring.angle(), before);
        ring.tick(10_000.0);
        assert!((ring.angle() - before - DEGREES_PER_SECOND).abs() < 1e-9);
    }

    #[test]
    fn focus_is_exclusive() {
        let mut ring = TeamRing::new(3);
        ring.toggle(0);
        ring.toggle(2);
        assert_eq!(ring.focused(), Some(2));
        assert!(!ring.layout(0).focused);
        assert_eq!(ring.layout(0).opacity, 0.3);
        assert!(ring.layout(2).focused);

        ring.toggle(7);
        assert_eq!(ring.focused(), Some(2));
    }

    #[test]
    fn layout_positions() {
        let mut ring = TeamRing::new(3);
        let first = ring.layout(0);
        assert_eq!(first.size, INACTIVE_SIZE);
        assert!((first.left - (350.0 + 250.0 - 85.0)).abs() < 1e-9);
        assert!((first.top - (350.0 - 85.0)).abs() < 1e-9);
        assert_eq!(first.opacity, 1.0);

        ring.toggle(0);
        let centered = ring.layout(0);
        assert_eq!(centered.size, ACTIVE_SIZE);
        assert_eq!(centered.top, 190.0);
        assert_eq!(centered.left, 190.0);
        assert_eq!(centered.z_index, 100);
    }
}
