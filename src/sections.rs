//! Works out which page section the navigation should highlight.

use thiserror::Error;

/// How a section decides that it is the one being read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Activation {
    /// Enough of the section is inside the (margin-shrunk) viewport.
    #[default]
    Threshold,
    /// The probe line crosses the section. Suits sections taller than the viewport,
    /// whose visible fraction never reaches the threshold.
    ProbeLine,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackerConfig {
    /// Minimum visible fraction of a `Threshold` section.
    pub threshold: f64,
    /// Fraction of the viewport height trimmed from the top and bottom.
    pub root_margin: f64,
    /// Position of the probe line as a fraction of the viewport height.
    pub probe_line: f64,
    /// Scroll offset in pixels past which the page counts as scrolled.
    pub scrolled_offset: f64,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            threshold: 0.3,
            root_margin: 0.1,
            probe_line: 0.3,
            scrolled_offset: 50.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    pub height: f64,
    pub scroll_y: f64,
}

/// A section's bounding box, relative to the top of the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionRect {
    pub top: f64,
    pub bottom: f64,
}

impl SectionRect {
    pub fn height(&self) -> f64 {
        (self.bottom - self.top).max(0.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavError {
    #[error("no section with id `{0}` in the document")]
    MissingTarget(String),
}

/// What a recompute changed; hosts only publish the parts that moved.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Observation {
    pub active_changed: bool,
    pub scrolled_changed: bool,
}

#[derive(Debug, Clone)]
struct Entry {
    id: String,
    activation: Activation,
}

#[derive(Debug, Clone)]
pub struct SectionTracker {
    sections: Vec<Entry>,
    config: TrackerConfig,
    active: String,
    scrolled: bool,
}

impl SectionTracker {
    /// Every id starts with `Activation::Threshold`; the first one is active.
    pub fn new<I, S>(ids: I, config: TrackerConfig) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let sections: Vec<Entry> = ids
            .into_iter()
            .map(|id| Entry {
                id: id.into(),
                activation: Activation::Threshold,
            })
            .collect();
        let active = sections.first().map(|e| e.id.clone()).unwrap_or_default();
        Self {
            sections,
            config,
            active,
            scrolled: false,
        }
    }

    pub fn with_activation(mut self, id: &str, activation: Activation) -> Self {
        if let Some(e) = self.sections.iter_mut().find(|e| e.id == id) {
            e.activation = activation;
        }
        self
    }

    pub fn active(&self) -> &str {
        &self.active
    }

    pub fn scrolled(&self) -> bool {
        self.scrolled
    }

    pub fn activation(&self, id: &str) -> Option<Activation> {
        self.sections
            .iter()
            .find(|e| e.id == id)
            .map(|e| e.activation)
    }

    /// Visible fraction of `rect` inside the viewport after trimming the root margin.
    pub fn intersection_ratio(&self, viewport: Viewport, rect: SectionRect) -> f64 {
        let height = rect.height();
        if height <= 0.0 {
            return 0.0;
        }
        let margin = viewport.height * self.config.root_margin;
        let root_top = margin;
        let root_bottom = viewport.height - margin;
        let visible = rect.bottom.min(root_bottom) - rect.top.max(root_top);
        (visible.max(0.0) / height).min(1.0)
    }

    fn qualifies(&self, activation: Activation, viewport: Viewport, rect: SectionRect) -> bool {
        match activation {
            Activation::Threshold => {
                let ratio = self.intersection_ratio(viewport, rect);
                ratio > 0.0 && ratio >= self.config.threshold
            }
            Activation::ProbeLine => {
                let line = viewport.height * self.config.probe_line;
                rect.top <= line && rect.bottom >= line
            }
        }
    }

    /// Recompute from fresh measurements.
    ///
    /// Measurements for unknown ids are ignored, and sections without a measurement
    /// cannot become active. When nothing qualifies the previous id is kept.
    pub fn observe<'a, I>(&mut self, viewport: Viewport, measurements: I) -> Observation
    where
        I: IntoIterator<Item = (&'a str, SectionRect)>,
    {
        let scrolled = viewport.scroll_y > self.config.scrolled_offset;
        let scrolled_changed = scrolled != self.scrolled;
        self.scrolled = scrolled;
        let unchanged = Observation {
            active_changed: false,
            scrolled_changed,
        };

        let mut best: Option<(usize, f64)> = None;
        for (id, rect) in measurements {
            let Some(pos) = self.sections.iter().position(|e| e.id == id) else {
                continue;
            };
            if !self.qualifies(self.sections[pos].activation, viewport, rect) {
                continue;
            }
            let better = match best {
                None => true,
                Some((bpos, btop)) => rect.top < btop || (rect.top == btop && pos < bpos),
            };
            if better {
                best = Some((pos, rect.top));
            }
        }

        let Some((pos, _)) = best else {
            return unchanged;
        };
        if self.sections[pos].id == self.active {
            return unchanged;
        }
        log::debug!("active section: {} -> {}", self.active, self.sections[pos].id);
        self.active = self.sections[pos].id.clone();
        Observation {
            active_changed: true,
            ..unchanged
        }
    }
}

/// Coalesces bursts of scroll/resize events into one recompute per frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameBatch {
    pending: bool,
}

impl FrameBatch {
    /// True if the caller has to schedule a frame; false if one is already queued.
    pub fn request(&mut self) -> bool {
        !std::mem::replace(&mut self.pending, true)
    }

    pub fn begin_frame(&mut self) {
        self.pending = false;
    }

    /// The frame request failed and will never run; let the next tick try again.
    pub fn abandon(&mut self) {
        if std::mem::take(&mut self.pending) {
            log::debug!("abandoned pending frame");
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }
}
