//! Numeric count-up for statistic elements.
//!
//! Each element carries a non-negative integer target. On first visibility
//! the element is deregistered and a [`CountUp`] starts; the host drives all
//! active count-ups from one display-refresh loop by calling
//! [`CountUpController::tick`] until [`CountUpController::is_animating`]
//! reports false.
//!
//! # Pacing
//!
//! [`Pacing::FrameBudget`] (default) adds `target / (duration / frame)` per
//! refresh, so the wall-clock length follows the real frame rate: longer in
//! throttled tabs, shorter on high-refresh displays. [`Pacing::Elapsed`]
//! interpolates on elapsed time instead and always finishes after
//! `duration`.
//!
//! # Invariants
//!
//! 1. Rendered values never decrease.
//! 2. Intermediate frames render `floor(current)`; the last frame renders the
//!    exact target.
//! 3. An element starts at most once.

use std::collections::{BTreeMap, BTreeSet};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use web_time::Instant;

use crate::config::CountUpConfig;
use crate::element::{ElementId, IntersectionEntry};
use crate::error::{Result, SiteError};
use crate::format::format_count;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pacing {
    #[default]
    FrameBudget,
    Elapsed,
}

/// Value to render for one refresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Frame {
    Running(u64),
    Final(u64),
}

impl Frame {
    #[inline]
    #[must_use]
    pub const fn value(self) -> u64 {
        match self {
            Self::Running(v) | Self::Final(v) => v,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_final(self) -> bool {
        matches!(self, Self::Final(_))
    }
}

/// Parse a target attribute.
///
/// Accepts a leading run of ASCII digits after optional whitespace and an
/// optional `+` (`"1500"`, `" 1500+ "`). Missing, negative, and non-numeric
/// values are errors; callers skip the element.
pub fn parse_target(raw: Option<&str>) -> Result<u64> {
    let Some(raw) = raw else {
        return Err(SiteError::InvalidCountTarget { raw: String::new() });
    };
    let trimmed = raw.trim_start();
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    unsigned[..end]
        .parse::<u64>()
        .map_err(|_| SiteError::InvalidCountTarget {
            raw: raw.to_string(),
        })
}

/// One running interpolation.
#[derive(Debug, Clone)]
pub struct CountUp {
    element: ElementId,
    target: u64,
    current: f64,
    increment: f64,
    started_at: Instant,
    duration: Duration,
    pacing: Pacing,
    finished: bool,
}

impl CountUp {
    #[must_use]
    pub fn new(element: ElementId, target: u64, config: &CountUpConfig, started_at: Instant) -> Self {
        Self {
            element,
            target,
            current: 0.0,
            increment: target as f64 / config.steps(),
            started_at,
            duration: config.duration(),
            pacing: config.pacing,
            finished: false,
        }
    }

    /// Advance one refresh.
    ///
    /// Once the final frame has been produced, later calls keep returning it.
    pub fn step(&mut self, now: Instant) -> Frame {
        if self.finished {
            return Frame::Final(self.target);
        }
        let target = self.target as f64;
        let still_running = match self.pacing {
            Pacing::FrameBudget => {
                self.current += self.increment;
                self.current < target
            }
            Pacing::Elapsed => {
                let elapsed = now.saturating_duration_since(self.started_at);
                let progress = elapsed.as_secs_f64() / self.duration.as_secs_f64();
                self.current = target * progress.min(1.0);
                progress < 1.0 && self.current < target
            }
        };
        if still_running {
            Frame::Running(self.current.floor() as u64)
        } else {
            self.current = target;
            self.finished = true;
            Frame::Final(self.target)
        }
    }

    #[inline]
    #[must_use]
    pub fn element(&self) -> ElementId {
        self.element
    }

    #[inline]
    #[must_use]
    pub fn increment(&self) -> f64 {
        self.increment
    }

    #[inline]
    #[must_use]
    pub fn current(&self) -> f64 {
        self.current
    }

    #[inline]
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

/// Text update for one element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Render {
    pub element: ElementId,
    pub text: String,
    pub done: bool,
}

#[derive(Debug)]
pub struct CountUpController {
    config: CountUpConfig,
    waiting: BTreeMap<ElementId, u64>,
    started: BTreeSet<ElementId>,
    active: Vec<CountUp>,
}

impl CountUpController {
    #[must_use]
    pub fn new(config: CountUpConfig) -> Self {
        Self {
            config,
            waiting: BTreeMap::new(),
            started: BTreeSet::new(),
            active: Vec::new(),
        }
    }

    /// Register an element with its raw target attribute.
    ///
    /// Returns whether the host should observe it. Invalid targets are
    /// skipped.
    pub fn register(&mut self, element: ElementId, raw_target: Option<&str>) -> bool {
        if self.started.contains(&element) || self.waiting.contains_key(&element) {
            return false;
        }
        match parse_target(raw_target) {
            Ok(target) => {
                self.waiting.insert(element, target);
                true
            }
            Err(err) => {
                tracing::debug!(%element, %err, "count-up element skipped");
                false
            }
        }
    }

    /// Start every waiting element that became visible.
    ///
    /// Returns the started ids; the host unobserves them immediately.
    pub fn on_intersections(&mut self, batch: &[IntersectionEntry], now: Instant) -> Vec<ElementId> {
        let mut started = Vec::new();
        for entry in batch.iter().filter(|e| e.is_intersecting) {
            let Some(target) = self.waiting.remove(&entry.element) else {
                continue;
            };
            self.started.insert(entry.element);
            self.active
                .push(CountUp::new(entry.element, target, &self.config, now));
            started.push(entry.element);
        }
        started
    }

    /// Advance every active count-up by one refresh.
    pub fn tick(&mut self, now: Instant) -> Vec<Render> {
        let mut renders = Vec::with_capacity(self.active.len());
        for count in &mut self.active {
            let frame = count.step(now);
            renders.push(Render {
                element: count.element(),
                text: format_count(frame.value(), self.config.separator, &self.config.suffix),
                done: frame.is_final(),
            });
        }
        self.active.retain(|c| !c.is_finished());
        renders
    }

    #[inline]
    #[must_use]
    pub fn is_animating(&self) -> bool {
        !self.active.is_empty()
    }

    #[must_use]
    pub fn waiting_count(&self) -> usize {
        self.waiting.len()
    }
}
