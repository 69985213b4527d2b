//! Inputs the controller understands.
//!
//! Keys, buttons, clicks, dots, swipes and autoplay ticks all reduce to an
//! [`Intent`], which resolves to either a step or an absolute index.

/// Step direction along the ring.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Prev,
    Next,
}

impl Direction {
    #[inline]
    pub fn step(self) -> isize {
        match self {
            Direction::Prev => -1,
            Direction::Next => 1,
        }
    }
}

/// Every input the controller understands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Intent {
    KeyLeft,
    KeyRight,
    PrevButton,
    NextButton,
    /// Click on the item with this index.
    Click(usize),
    /// Click on the position dot with this index.
    DotSelect(usize),
    Swipe(Direction),
    /// Autoplay advance.
    Tick,
}

impl Intent {
    /// Manual intents come from the user and always cancel autoplay.
    #[inline]
    pub fn is_manual(self) -> bool {
        !matches!(self, Intent::Tick)
    }

    /// What the intent asks for, as either a relative step or an absolute index.
    pub fn target(self) -> Target {
        match self {
            Intent::KeyLeft | Intent::PrevButton => Target::Step(Direction::Prev),
            Intent::KeyRight | Intent::NextButton | Intent::Tick => Target::Step(Direction::Next),
            Intent::Swipe(dir) => Target::Step(dir),
            Intent::Click(i) | Intent::DotSelect(i) => Target::Index(i),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Target {
    Step(Direction),
    Index(usize),
}
