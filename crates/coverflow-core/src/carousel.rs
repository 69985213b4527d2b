//! Selection state machine for the coverflow.
//!
//! A [`Carousel`] is either idle or settling after a transition. Accepted
//! intents move the selection, lay out every item synchronously, and arm a
//! settle timer; anything arriving before the timer fires is dropped. Visual
//! work is reported as [`Effect`]s for the front-end to apply.

use crate::error::{CoverflowError, Result};
use crate::intent::{Direction, Intent, Target};
use crate::layout::{compute_layout_with, ItemPlacement};
use crate::params::CoverflowParams;
use crate::timeline::{TaskHandle, Timeline};
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Transitioning,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Task {
    Settle,
    CaptionFadeIn,
    AutoplayTick,
}

/// Visual updates the front-end must apply, in order.
#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    /// New placement for every item.
    Layout(Vec<ItemPlacement>),
    /// Caption text now belongs to this index; its fade animation is cleared.
    Caption(usize),
    /// Re-run the caption fade-in animation.
    CaptionFadeIn,
    /// Settle window elapsed.
    Settled,
    /// Autoplay switched on or off.
    Autoplay(bool),
}

/// Result of feeding one intent to the controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Moved { from: usize, to: usize },
    /// Dropped because a transition is still settling.
    Busy,
    AlreadySelected,
    OutOfRange,
}

impl Outcome {
    #[inline]
    pub fn moved(self) -> bool {
        matches!(self, Outcome::Moved { .. })
    }
}

#[derive(Debug)]
pub struct Carousel {
    params: CoverflowParams,
    item_count: usize,
    current: usize,
    phase: Phase,
    now: Duration,
    timeline: Timeline<Task>,
    settle: Option<TaskHandle>,
    caption_fade: Option<TaskHandle>,
    autoplay: Option<TaskHandle>,
    effects: Vec<Effect>,
}

impl Carousel {
    pub fn new(item_count: usize, params: CoverflowParams) -> Result<Self> {
        if item_count == 0 {
            return Err(CoverflowError::Empty);
        }
        Ok(Self {
            params,
            item_count,
            current: 0,
            phase: Phase::Idle,
            now: Duration::ZERO,
            timeline: Timeline::new(),
            settle: None,
            caption_fade: None,
            autoplay: None,
            effects: Vec::new(),
        })
    }

    /// First paint: lays out the initial selection and arms the caption fade.
    /// The controller stays idle. Autoplay starts if configured.
    pub fn start(&mut self, now: Duration) {
        self.advance(now);
        log::info!(
            "[carousel] start items={} autoplay={}",
            self.item_count,
            self.params.autoplay_on_start
        );
        self.present(self.now);
        if self.params.autoplay_on_start {
            self.start_autoplay(self.now);
        } else {
            self.effects.push(Effect::Autoplay(false));
        }
    }

    /// Single entry point for every input source.
    pub fn handle_intent(&mut self, intent: Intent, now: Duration) -> Outcome {
        self.advance(now);
        if intent.is_manual() {
            self.stop_autoplay();
        }
        let outcome = match intent.target() {
            Target::Step(dir) => self.navigate(dir, self.now),
            Target::Index(i) => self.go_to_index(i, self.now),
        };
        if !outcome.moved() {
            log::debug!("[carousel] {:?} dropped: {:?}", intent, outcome);
        }
        outcome
    }

    pub fn navigate(&mut self, dir: Direction, now: Duration) -> Outcome {
        self.advance(now);
        if self.phase == Phase::Transitioning {
            return Outcome::Busy;
        }
        let n = self.item_count as isize;
        let next = (self.current as isize + dir.step()).rem_euclid(n) as usize;
        self.transition_to(next)
    }

    pub fn go_to_index(&mut self, target: usize, now: Duration) -> Outcome {
        self.advance(now);
        if target >= self.item_count {
            return Outcome::OutOfRange;
        }
        if target == self.current {
            return Outcome::AlreadySelected;
        }
        if self.phase == Phase::Transitioning {
            return Outcome::Busy;
        }
        self.transition_to(target)
    }

    pub fn start_autoplay(&mut self, now: Duration) {
        self.advance(now);
        if self.autoplay.is_some() {
            return;
        }
        let handle = self.timeline.schedule_every(
            self.now,
            self.params.autoplay_interval(),
            Task::AutoplayTick,
        );
        self.autoplay = Some(handle);
        self.effects.push(Effect::Autoplay(true));
        log::info!("[autoplay] on every {}ms", self.params.autoplay_interval_ms);
    }

    /// Safe to call when already stopped.
    pub fn stop_autoplay(&mut self) {
        if let Some(handle) = self.autoplay.take() {
            self.timeline.cancel(handle);
            self.effects.push(Effect::Autoplay(false));
            log::info!("[autoplay] off");
        }
    }

    pub fn toggle_autoplay(&mut self, now: Duration) {
        if self.autoplay.is_some() {
            self.stop_autoplay();
        } else {
            self.start_autoplay(now);
        }
    }

    /// Run every task due at or before `now`, in time order.
    pub fn advance(&mut self, now: Duration) {
        if now > self.now {
            self.now = now;
        }
        while let Some((at, task)) = self.timeline.pop_due(self.now) {
            match task {
                Task::Settle => {
                    self.settle = None;
                    self.phase = Phase::Idle;
                    self.effects.push(Effect::Settled);
                }
                Task::CaptionFadeIn => {
                    self.caption_fade = None;
                    self.effects.push(Effect::CaptionFadeIn);
                }
                Task::AutoplayTick => {
                    if self.phase == Phase::Idle {
                        let n = self.item_count;
                        self.transition_at((self.current + 1) % n, at);
                    } else {
                        log::debug!("[autoplay] tick dropped while settling");
                    }
                }
            }
        }
    }

    /// Cancel all pending work. The carousel keeps its selection but will
    /// not move again until a new intent arrives.
    pub fn teardown(&mut self) {
        let handles = [
            self.settle.take(),
            self.caption_fade.take(),
            self.autoplay.take(),
        ];
        for handle in handles.into_iter().flatten() {
            self.timeline.cancel(handle);
        }
        debug_assert!(self.timeline.is_empty());
        self.phase = Phase::Idle;
        log::info!("[carousel] teardown");
    }

    pub fn drain_effects(&mut self) -> Vec<Effect> {
        std::mem::take(&mut self.effects)
    }

    pub fn layout(&self) -> Vec<ItemPlacement> {
        compute_layout_with(&self.params.layout, self.current, self.item_count)
    }

    #[inline]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[inline]
    pub fn item_count(&self) -> usize {
        self.item_count
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[inline]
    pub fn is_transitioning(&self) -> bool {
        self.phase == Phase::Transitioning
    }

    #[inline]
    pub fn is_autoplaying(&self) -> bool {
        self.autoplay.is_some()
    }

    #[inline]
    pub fn params(&self) -> &CoverflowParams {
        &self.params
    }

    #[inline]
    pub fn pending_tasks(&self) -> usize {
        self.timeline.len()
    }

    fn transition_to(&mut self, target: usize) -> Outcome {
        self.transition_at(target, self.now)
    }

    fn transition_at(&mut self, target: usize, at: Duration) -> Outcome {
        let from = self.current;
        self.current = target;
        self.phase = Phase::Transitioning;
        self.settle = Some(
            self.timeline
                .schedule_once(at, self.params.settle(), Task::Settle),
        );
        self.present(at);
        log::debug!("[carousel] {} -> {}", from, target);
        Outcome::Moved { from, to: target }
    }

    fn present(&mut self, at: Duration) {
        let layout = self.layout();
        self.effects.push(Effect::Layout(layout));
        self.effects.push(Effect::Caption(self.current));
        if let Some(stale) = self.caption_fade.take() {
            self.timeline.cancel(stale);
        }
        self.caption_fade = Some(self.timeline.schedule_once(
            at,
            self.params.caption_fade_delay(),
            Task::CaptionFadeIn,
        ));
    }
}
