/// Configuration for spring physics animation
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringConfig {
    pub mass: f32,
    pub stiffness: f32,
    pub damping: f32,
}

impl SpringConfig {
    /// Slight overshoot, good for an indicator popping in
    pub const DEFAULT: Self = Self {
        mass: 1.0,
        stiffness: 180.0,
        damping: 11.0,
    };

    pub const BOUNCY: Self = Self {
        mass: 1.0,
        stiffness: 200.0,
        damping: 10.0,
    };

    pub const SNAPPY: Self = Self {
        mass: 1.0,
        stiffness: 250.0,
        damping: 14.0,
    };

    /// No overshoot
    pub const CRITICAL: Self = Self {
        mass: 1.0,
        stiffness: 200.0,
        damping: 28.284_271,
    };

    /// Damping ratio; below 1.0 the spring overshoots.
    pub fn damping_ratio(&self) -> f32 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Spring simulation moving from 0.0 towards 1.0
#[derive(Clone, Debug, Default)]
pub struct SpringState {
    pub position: f32,
    pub velocity: f32,
}

impl SpringState {
    /// Largest step integrated at once, for numerical stability
    const MAX_STEP_SECS: f32 = 1.0 / 120.0;

    pub fn new() -> Self {
        Self::default()
    }

    /// Advance by `dt_secs` using semi-implicit Euler in fixed sub-steps.
    /// Returns the new position, which may overshoot 1.0.
    pub fn step(&mut self, dt_secs: f32, config: &SpringConfig) -> f32 {
        let mut remaining = dt_secs.max(0.0);
        while remaining > 1e-6 {
            let dt = remaining.min(Self::MAX_STEP_SECS);
            let spring_force = -config.stiffness * (self.position - 1.0);
            let damping_force = -config.damping * self.velocity;
            let acceleration = (spring_force + damping_force) / config.mass;

            self.velocity += acceleration * dt;
            self.position += self.velocity * dt;
            remaining -= dt;
        }
        self.position
    }

    pub fn is_settled(&self, threshold: f32) -> bool {
        (self.position - 1.0).abs() < threshold && self.velocity.abs() < threshold
    }
}
