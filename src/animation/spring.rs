/// Configuration for spring physics animation
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringConfig {
    /// Mass of the spring (default: 1.0)
    pub mass: f32,
    /// Stiffness of the spring (default: 100.0)
    pub stiffness: f32,
    /// Damping coefficient (default: 10.0)
    pub damping: f32,
    /// Distance from the target below which the spring may come to rest
    pub rest_displacement: f32,
    /// Speed (units per second) below which the spring may come to rest
    pub rest_speed: f32,
}

impl SpringConfig {
    /// Default spring, slightly underdamped
    pub const DEFAULT: Self = Self {
        mass: 1.0,
        stiffness: 100.0,
        damping: 10.0,
        rest_displacement: 0.01,
        rest_speed: 2.0,
    };

    /// Spring used to snap the sheet between its rest positions
    pub const SHEET: Self = Self {
        damping: 15.0,
        ..Self::DEFAULT
    };

    /// Return a copy with a different damping coefficient
    pub fn with_damping(mut self, damping: f32) -> Self {
        self.damping = damping;
        self
    }
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Longest single integration step, in seconds
const MAX_STEP: f32 = 1.0 / 120.0;

/// State for spring physics simulation toward an absolute target.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringState {
    /// Current position
    pub position: f32,
    /// Current velocity in units per second
    pub velocity: f32,
    /// Position the spring is pulled toward
    pub target: f32,
}

impl SpringState {
    /// Create a spring at rest at `position`, pulled toward `target`
    pub fn new(position: f32, target: f32) -> Self {
        Self {
            position,
            velocity: 0.0,
            target,
        }
    }

    /// Point the spring at a new target, keeping position and velocity.
    pub fn retarget(&mut self, target: f32) {
        self.target = target;
    }

    /// Step the spring simulation forward by `dt` seconds.
    ///
    /// Long frames are split into sub-steps of at most 1/120 s so the
    /// semi-implicit Euler integration stays stable. Once the spring settles
    /// it snaps onto the target. Returns the new position.
    pub fn step(&mut self, dt: f32, config: &SpringConfig) -> f32 {
        let mut remaining = dt.max(0.0);

        while remaining > 1e-6 {
            let h = remaining.min(MAX_STEP);
            remaining -= h;

            // Spring force: F = -k * x
            let displacement = self.position - self.target;
            let spring_force = -config.stiffness * displacement;

            // Damping force: F = -c * v
            let damping_force = -config.damping * self.velocity;

            let acceleration = (spring_force + damping_force) / config.mass;

            self.velocity += acceleration * h;
            self.position += self.velocity * h;

            if self.is_settled(config) {
                self.position = self.target;
                self.velocity = 0.0;
                break;
            }
        }

        self.position
    }

    /// Check if the spring has settled (position near target, velocity near zero)
    pub fn is_settled(&self, config: &SpringConfig) -> bool {
        (self.position - self.target).abs() < config.rest_displacement
            && self.velocity.abs() < config.rest_speed
    }
}
