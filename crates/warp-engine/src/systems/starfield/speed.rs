//! Shared speed multiplier, raised while the pointer is held down.

/// Speed multiplier with press/release ramping between two bounds.
///
/// By default a press or release takes effect immediately. With an
/// animated ramp the multiplier instead walks toward its target by
/// `step` on every [`tick`](Self::tick).
#[derive(Debug, Clone, PartialEq)]
pub struct SpeedRamp {
    value: f32,
    target: f32,
    /// Resting value the current press returns to.
    baseline: f32,
    held: bool,
    low: f32,
    high: f32,
    step: f32,
    animated: bool,
}

impl SpeedRamp {
    pub const DEFAULT_LOW: f32 = 2.0;
    pub const DEFAULT_HIGH: f32 = 4.0;
    pub const DEFAULT_STEP: f32 = 0.05;

    /// Instant ramp resting at `low`. Bounds are reordered if inverted.
    pub fn new(low: f32, high: f32) -> Self {
        let (low, high) = if low <= high { (low, high) } else { (high, low) };
        Self {
            value: low,
            target: low,
            baseline: low,
            held: false,
            low,
            high,
            step: Self::DEFAULT_STEP,
            animated: false,
        }
    }

    /// Spread each press/release over several ticks of `step` each.
    pub fn animated(mut self, step: f32) -> Self {
        self.step = step.abs();
        self.animated = self.step > 0.0;
        self
    }

    /// Start from `value` instead of the lower bound.
    pub fn with_value(mut self, value: f32) -> Self {
        self.value = value;
        self.target = value;
        self.baseline = value;
        self
    }

    /// Current multiplier.
    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn is_held(&self) -> bool {
        self.held
    }

    pub fn bounds(&self) -> (f32, f32) {
        (self.low, self.high)
    }

    /// Pointer pressed: ramp up to the upper bound.
    ///
    /// The baseline is where the ramp was heading, so a press during an
    /// animated ramp-down still rests at the old target on release. A
    /// repeated press while already held keeps the first baseline.
    pub fn press(&mut self) {
        if !self.held {
            self.baseline = self.target.clamp(self.low, self.high);
            self.held = true;
        }
        self.retarget(self.high);
    }

    /// Pointer released: ramp back to where the press started, or to the
    /// lower bound if no press is in progress.
    pub fn release(&mut self) {
        let rest = if self.held { self.baseline } else { self.low };
        self.held = false;
        self.retarget(rest);
    }

    /// Advance an animated ramp by one step. No-op for instant ramps.
    pub fn tick(&mut self) {
        if !self.animated || self.value == self.target {
            return;
        }
        let delta = self.target - self.value;
        if delta.abs() <= self.step {
            self.value = self.target;
        } else {
            self.value += self.step.copysign(delta);
        }
    }

    fn retarget(&mut self, target: f32) {
        self.target = target;
        if !self.animated {
            self.value = target;
        }
    }
}

impl Default for SpeedRamp {
    fn default() -> Self {
        Self::new(Self::DEFAULT_LOW, Self::DEFAULT_HIGH)
    }
}
