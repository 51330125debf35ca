/// Position of a carousel over `len` items, wrapping at both ends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CarouselPosition {
    index: usize,
    len: usize,
}

impl CarouselPosition {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
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

    pub fn next(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
    }

    pub fn prev(&mut self) {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
    }

    /// Jump to `index`; out-of-range values are ignored
    pub fn go_to(&mut self, index: usize) {
        if index < self.len {
            self.index = index;
        }
    }

    /// CSS offset of the slide track, in percent of one slide
    pub fn track_offset_percent(&self) -> usize {
        self.index * 100
    }
}
