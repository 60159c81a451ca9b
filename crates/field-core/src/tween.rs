//! Eased scalar animation.
//!
//! [`Animated`] is a small deterministic state machine standing in for a
//! tweening scheduler: callers queue segments toward target values and then
//! `advance` it with an explicit clock in seconds. The simulator only ever
//! reads [`Animated::value`].

use std::collections::VecDeque;

/// Easing curves used by the pointer handlers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Ease {
    #[default]
    Linear,
    /// Cubic ease-out.
    Power2Out,
    /// Quartic ease-out.
    Power3Out,
    /// Cubic ease-in-out.
    Power2InOut,
}

impl Ease {
    /// Map normalized time to eased progress. `t` is clamped to [0, 1].
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Ease::Linear => t,
            Ease::Power2Out => 1.0 - (1.0 - t).powi(3),
            Ease::Power3Out => 1.0 - (1.0 - t).powi(4),
            Ease::Power2InOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) * 0.5
                }
            }
        }
    }
}

#[derive(Clone, Copy, Debug)]
struct Segment {
    target: f32,
    duration: f64,
    ease: Ease,
}

/// A scalar that eases toward queued targets over time.
#[derive(Clone, Debug, Default)]
pub struct Animated {
    value: f32,
    from: f32,
    started_at: f64,
    /// Clock of the latest `to` or `advance`.
    last_now: f64,
    queue: VecDeque<Segment>,
}

impl Animated {
    pub fn new(value: f32) -> Self {
        Self {
            value,
            from: value,
            started_at: 0.0,
            last_now: 0.0,
            queue: VecDeque::new(),
        }
    }

    #[inline]
    pub fn value(&self) -> f32 {
        self.value
    }

    /// Jump to `value`, cancelling anything in flight.
    pub fn set(&mut self, value: f32) {
        self.queue.clear();
        self.value = value;
        self.from = value;
    }

    /// Cancel in-flight segments, keeping the current value.
    pub fn kill(&mut self) {
        self.queue.clear();
        self.from = self.value;
    }

    /// Start easing from the current value toward `target`, replacing any
    /// queued segments.
    pub fn to(&mut self, target: f32, duration: f64, ease: Ease, now: f64) {
        self.kill();
        self.started_at = now;
        self.last_now = now;
        self.queue.push_back(Segment {
            target,
            duration,
            ease,
        });
    }

    /// Queue a segment that begins when the previous one completes. With
    /// nothing queued it starts from the current value at the last clock seen.
    pub fn then(&mut self, target: f32, duration: f64, ease: Ease) {
        if self.queue.is_empty() {
            self.from = self.value;
            self.started_at = self.last_now;
        }
        self.queue.push_back(Segment {
            target,
            duration,
            ease,
        });
    }

    pub fn is_animating(&self) -> bool {
        !self.queue.is_empty()
    }

    /// True while the active segment is heading above the current value.
    pub fn is_rising(&self) -> bool {
        self.queue
            .front()
            .map(|s| s.target > self.value)
            .unwrap_or(false)
    }

    /// Evaluate at `now`, popping completed segments.
    pub fn advance(&mut self, now: f64) -> f32 {
        self.last_now = now;
        while let Some(seg) = self.queue.front().copied() {
            let elapsed = now - self.started_at;
            let t = if seg.duration <= 0.0 {
                1.0
            } else {
                (elapsed / seg.duration).clamp(0.0, 1.0) as f32
            };
            if t >= 1.0 {
                self.value = seg.target;
                self.from = seg.target;
                self.started_at += seg.duration.max(0.0);
                self.queue.pop_front();
                continue;
            }
            self.value = self.from + (seg.target - self.from) * seg.ease.apply(t);
            break;
        }
        self.value
    }
}
