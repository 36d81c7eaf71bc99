//! Frame-stepped ease-out animation.
//!
//! Each tick closes a fixed fraction of the remaining distance, so motion starts
//! fast and decelerates into the target.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimatedValue {
    current: f64,
    target: f64,
    /// Fraction of the remaining distance covered per tick.
    speed: f64,
    /// Distance below which the value snaps onto the target.
    epsilon: f64,
}

impl AnimatedValue {
    pub fn new(initial: f64, speed: f64) -> Self {
        Self {
            current: initial,
            target: initial,
            speed: speed.clamp(0.05, 1.0),
            epsilon: 0.5,
        }
    }

    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon.abs();
        self
    }

    pub fn set_speed(&mut self, speed: f64) {
        self.speed = speed.clamp(0.05, 1.0);
    }

    pub fn set_target(&mut self, target: f64) {
        self.target = target;
    }

    /// Jump straight to `value` with no motion.
    pub fn snap_to(&mut self, value: f64) {
        self.current = value;
        self.target = value;
    }

    pub fn value(&self) -> f64 {
        self.current
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn is_animating(&self) -> bool {
        self.current != self.target
    }

    /// Advance one frame; returns whether the value moved.
    pub fn tick(&mut self) -> bool {
        if !self.is_animating() {
            return false;
        }
        let remaining = self.target - self.current;
        if remaining.abs() <= self.epsilon {
            self.current = self.target;
        } else {
            self.current += remaining * self.speed;
        }
        true
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/animation.rs"]
mod tests;
