//! Scroll viewport over the rendered page.
//!
//! The page is laid out as a virtual document of rows; the viewport tracks
//! which row sits at the top of the screen. Programmatic jumps animate with a
//! cubic ease-out driven by [`Viewport::tick`]; manual scrolling is immediate
//! and cancels any animation in flight.

use std::time::{Duration, Instant};

/// How a programmatic scroll reaches its target row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollMode {
    /// Jump straight to the target.
    Instant,
    /// Ease toward the target over the configured duration.
    Smooth,
}

#[derive(Debug, Clone, Copy)]
struct ScrollAnim {
    from: u16,
    to: u16,
    start: Instant,
    duration: Duration,
}

impl ScrollAnim {
    /// Eased offset at `now` and whether the animation has landed.
    fn value_at(&self, now: Instant) -> (u16, bool) {
        let elapsed = now.saturating_duration_since(self.start);
        if elapsed >= self.duration {
            return (self.to, true);
        }
        let t = elapsed.as_secs_f32() / self.duration.as_secs_f32();
        let eased = ease_out_cubic(t);
        let from = f32::from(self.from);
        let to = f32::from(self.to);
        let value = (to - from).mul_add(eased, from);
        (value.round() as u16, false)
    }
}

/// Viewport state: offset, dimensions, and the optional scroll animation.
#[derive(Debug)]
pub struct Viewport {
    offset: u16,
    view_height: u16,
    content_height: u16,
    duration: Duration,
    anim: Option<ScrollAnim>,
}

impl Viewport {
    /// Create a viewport with the given smooth-scroll duration. Dimensions
    /// start at zero until the first [`Viewport::resize`].
    #[must_use]
    pub const fn new(duration: Duration) -> Self {
        Self {
            offset: 0,
            view_height: 0,
            content_height: 0,
            duration,
            anim: None,
        }
    }

    /// Top visible row of the document.
    #[must_use]
    pub const fn offset(&self) -> u16 {
        self.offset
    }

    #[must_use]
    pub const fn view_height(&self) -> u16 {
        self.view_height
    }

    #[must_use]
    pub const fn content_height(&self) -> u16 {
        self.content_height
    }

    /// Largest valid offset for the current dimensions.
    #[must_use]
    pub const fn max_offset(&self) -> u16 {
        self.content_height.saturating_sub(self.view_height)
    }

    /// Whether a smooth scroll is in flight.
    #[must_use]
    pub const fn is_animating(&self) -> bool {
        self.anim.is_some()
    }

    /// Row the viewport is heading toward (the current offset when idle).
    #[must_use]
    pub fn target(&self) -> u16 {
        self.anim.map_or(self.offset, |a| a.to)
    }

    /// Update dimensions after a terminal resize or relayout. Cancels any
    /// animation and clamps the offset into the new range.
    pub fn resize(&mut self, view_height: u16, content_height: u16) {
        self.view_height = view_height;
        self.content_height = content_height;
        self.anim = None;
        self.offset = self.offset.min(self.max_offset());
    }

    /// Scroll toward a document row. A smooth request while another is in
    /// flight supersedes it, easing on from wherever the viewport currently
    /// is rather than snapping back.
    pub fn scroll_to(&mut self, row: u16, mode: ScrollMode) {
        let target = row.min(self.max_offset());
        match mode {
            ScrollMode::Instant => {
                self.offset = target;
                self.anim = None;
            }
            ScrollMode::Smooth => {
                if target == self.offset || self.duration.is_zero() {
                    self.offset = target;
                    self.anim = None;
                } else {
                    self.anim = Some(ScrollAnim {
                        from: self.offset,
                        to: target,
                        start: Instant::now(),
                        duration: self.duration,
                    });
                }
            }
        }
    }

    /// Manual scroll by a signed number of rows. Cancels any animation.
    pub fn scroll_by(&mut self, delta: i32) {
        self.anim = None;
        let next = (i64::from(self.offset) + i64::from(delta))
            .clamp(0, i64::from(self.max_offset()));
        self.offset = next as u16;
    }

    /// Advance the animation to `now`. Returns true while still animating,
    /// so callers know another frame is needed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(anim) = self.anim else {
            return false;
        };
        let (value, done) = anim.value_at(now);
        self.offset = value.min(self.max_offset());
        if done {
            self.anim = None;
        }
        !done
    }
}

/// Cubic ease-out: fast start, gentle landing.
fn ease_out_cubic(t: f32) -> f32 {
    let u = 1.0 - t.clamp(0.0, 1.0);
    u.mul_add(-u * u, 1.0)
}
