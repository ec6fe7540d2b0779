use rand::Rng;
use rand::rngs::StdRng;

/// Source of uniform random indices for the shuffle.
///
/// The binary hands in a (possibly seeded) `StdRng`; tests substitute
/// scripted sequences to force specific orderings.
pub trait DrawIndex {
    /// Draw a uniform integer in `[0, upper]`.
    fn draw_index(&mut self, upper: usize) -> usize;
}

impl DrawIndex for StdRng {
    fn draw_index(&mut self, upper: usize) -> usize {
        self.random_range(0..=upper)
    }
}

/// Something the rotator can mark as the single visible panel.
pub trait Activate {
    fn set_active(&mut self, active: bool);
}

/// Recurring display-duration timer, owned by the caller.
///
/// Driven by frame time: `tick(dt)` accumulates elapsed seconds and reports
/// when the interval has been crossed. `stop` cancels the cadence until
/// `resume` is called; dropping the ticker tears it down for good.
pub struct Ticker {
    interval: f32,
    elapsed: f32,
    running: bool,
}

impl Ticker {
    fn new(interval: f32) -> Self {
        Self {
            interval,
            elapsed: 0.0,
            running: true,
        }
    }

    /// Advance the timer by `dt` seconds. Returns true each time the
    /// interval elapses; the overshoot carries over so the cadence does
    /// not drift.
    pub fn tick(&mut self, dt: f32) -> bool {
        if !self.running {
            return false;
        }
        self.elapsed += dt;
        if self.elapsed >= self.interval {
            self.elapsed -= self.interval;
            true
        } else {
            false
        }
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn resume(&mut self) {
        self.running = true;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }
}

/// Randomized single-panel-visible carousel over a fixed set of slides.
///
/// The collection is captured once, shuffled once, and never resized; the
/// only state transition afterward is `advance`.
pub struct Rotator<S> {
    slides: Vec<S>,
    current: usize,
}

impl<S: Activate> Rotator<S> {
    /// Shuffle `slides`, mark the first one active and hand back the
    /// rotator together with a running display ticker.
    ///
    /// An empty collection is the "nothing to do" case: no shuffle is
    /// performed, no ticker is created, `None` is returned.
    pub fn start(
        slides: Vec<S>,
        interval: f32,
        draw: &mut impl DrawIndex,
    ) -> Option<(Self, Ticker)> {
        if slides.is_empty() {
            return None;
        }
        let mut rotator = Self { slides, current: 0 };
        rotator.shuffle(draw);
        rotator.show(0);
        Some((rotator, Ticker::new(interval)))
    }

    /// Fisher-Yates: for i from N-1 down to 1, swap position i with a
    /// uniformly drawn j in [0, i]. Every ordering is equally likely given
    /// a uniform source.
    fn shuffle(&mut self, draw: &mut impl DrawIndex) {
        for i in (1..self.slides.len()).rev() {
            let j = draw.draw_index(i);
            self.slides.swap(i, j);
        }
    }

    /// Mark the slide at `index` active and every other slide inactive.
    pub fn show(&mut self, index: usize) {
        for (i, slide) in self.slides.iter_mut().enumerate() {
            slide.set_active(i == index);
        }
    }

    /// Move the cursor forward by one, wrapping after the last slide, and
    /// make the new current slide the visible one.
    pub fn advance(&mut self) {
        self.current = (self.current + 1) % self.slides.len();
        self.show(self.current);
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn slides(&self) -> &[S] {
        &self.slides
    }
}
