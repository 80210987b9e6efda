/// Auto-advance delay of the home page slider.
pub const AUTOPLAY_DELAY_MS: u32 = 4000;

/// Index of the visible item in a looping single-item carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slider {
    len: usize,
    index: usize,
}

impl Slider {
    pub fn new(len: usize) -> Self {
        Self { len, index: 0 }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_active(&self, index: usize) -> bool {
        !self.is_empty() && self.index == index
    }

    pub fn next(&mut self) {
        if !self.is_empty() {
            self.index = (self.index + 1) % self.len;
        }
    }

    pub fn prev(&mut self) {
        if !self.is_empty() {
            self.index = (self.index + self.len - 1) % self.len;
        }
    }

    pub fn go_to(&mut self, index: usize) {
        if index < self.len {
            self.index = index;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_both_ways() {
        let mut slider = Slider::new(3);
        slider.prev();
        assert_eq!(slider.index(), 2);
        slider.next();
        assert_eq!(slider.index(), 0);
        slider.next();
        slider.next();
        slider.next();
        assert_eq!(slider.index(), 0);
    }

    #[test]
    fn go_to_ignores_out_of_range() {
        let mut slider = Slider::new(4);
        slider.go_to(3);
        assert!(slider.is_active(3));
        slider.go_to(4);
        assert_eq!(slider.index(), 3);
    }

    #[test]
    fn empty_slider_is_inert() {
        let mut slider = Slider::new(0);
        slider.next();
        slider.prev();
        assert_eq!(slider.index(), 0);
        assert!(!slider.is_active(0));
    }
}
