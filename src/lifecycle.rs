/// Why the page is being hidden, read from a `pagehide` event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageExit {
    /// Frozen into the back/forward cache; the same instance may be shown again.
    Cached,
    Unloaded,
}

impl PageExit {
    #[inline]
    pub fn from_persisted(persisted: bool) -> Self {
        if persisted {
            PageExit::Cached
        } else {
            PageExit::Unloaded
        }
    }

    /// A cached page keeps its widget alive so it still responds after a
    /// back/forward navigation. Paused frames skip missed autoplay ticks.
    #[inline]
    pub fn tears_down(self) -> bool {
        self == PageExit::Unloaded
    }
}

/// Load state of an `<img>` at the moment its handlers are attached.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImageStatus {
    /// Still loading; `onload` or `onerror` will report.
    Pending,
    Loaded,
    /// Finished without decoding anything, so `onerror` already fired.
    Failed,
}

impl ImageStatus {
    #[inline]
    pub fn of(complete: bool, natural_width: u32) -> Self {
        match (complete, natural_width) {
            (false, _) => ImageStatus::Pending,
            (true, 0) => ImageStatus::Failed,
            (true, _) => ImageStatus::Loaded,
        }
    }
}
