use crate::view::CoverflowView;
use coverflow_core::{Carousel, Intent};
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

/// Shared handle to the live carousel and the DOM it drives.
///
/// Every event closure and the frame loop hold a clone. All calls run on the
/// browser's main thread, so a `RefCell` is enough.
#[derive(Clone)]
pub struct Widget {
    carousel: Rc<RefCell<Carousel>>,
    view: Rc<CoverflowView>,
    clock: Instant,
    live: Rc<Cell<bool>>,
}

impl Widget {
    pub fn new(carousel: Carousel, view: CoverflowView) -> Self {
        Self {
            carousel: Rc::new(RefCell::new(carousel)),
            view: Rc::new(view),
            clock: Instant::now(),
            live: Rc::new(Cell::new(true)),
        }
    }

    #[inline]
    fn elapsed(&self) -> Duration {
        self.clock.elapsed()
    }

    #[inline]
    pub fn view(&self) -> &CoverflowView {
        &self.view
    }

    #[inline]
    pub fn is_live(&self) -> bool {
        self.live.get()
    }

    /// Borrow the carousel, run `f`, then paint whatever it produced.
    /// Effects are applied before returning so a handler never leaves the
    /// DOM half updated.
    fn with_carousel(&self, f: impl FnOnce(&mut Carousel, Duration)) {
        if !self.is_live() {
            return;
        }
        let now = self.elapsed();
        let effects = {
            let mut carousel = self.carousel.borrow_mut();
            f(&mut *carousel, now);
            carousel.drain_effects()
        };
        if !effects.is_empty() {
            self.view.apply(&effects);
        }
    }

    pub fn start(&self) {
        self.with_carousel(|c, now| c.start(now));
    }

    pub fn dispatch(&self, intent: Intent) {
        self.with_carousel(|c, now| {
            c.handle_intent(intent, now);
        });
    }

    pub fn toggle_autoplay(&self) {
        self.with_carousel(|c, now| c.toggle_autoplay(now));
    }

    /// Called once per animation frame.
    pub fn frame(&self) {
        self.with_carousel(|c, now| c.advance(now));
    }

    pub fn teardown(&self) {
        if !self.live.replace(false) {
            return;
        }
        let mut carousel = self.carousel.borrow_mut();
        carousel.teardown();
        carousel.drain_effects();
    }
}
