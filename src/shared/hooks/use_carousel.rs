use dioxus::prelude::*;

use crate::domain::models::CarouselPosition;
use crate::shared::logging::log_carousel_moved;

/// Carousel controls over a fixed number of slides
#[derive(Clone, Copy)]
pub struct Carousel {
    pub position: Signal<CarouselPosition>,
}

impl Carousel {
    pub fn index(&self) -> usize {
        self.position.read().index()
    }

    pub fn next(&mut self) {
        self.position.write().next();
        self.log_move();
    }

    pub fn prev(&mut self) {
        self.position.write().prev();
        self.log_move();
    }

    pub fn go_to(&mut self, index: usize) {
        self.position.write().go_to(index);
        self.log_move();
    }

    fn log_move(&self) {
        let position = self.position.peek();
        log_carousel_moved(position.index(), position.len());
    }
}

pub fn use_carousel(len: usize) -> Carousel {
    let position = use_signal(|| CarouselPosition::new(len));
    Carousel { position }
}
