/// Closed interval [min, max]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Interval {
    pub min: f32,
    pub max: f32,
}

impl Interval {
    /// [0, 1], the domain of texture coordinates.
    pub const UNIT: Interval = Interval { min: 0.0, max: 1.0 };

    /// Maps x to the nearest value inside the interval.
    /// Unlike f32::clamp this does not panic when min > max, and NaN maps to min.
    pub fn clamp(&self, x: f32) -> f32 {
        if !(x >= self.min) {
            self.min
        } else if x > self.max {
            self.max
        } else {
            x
        }
    }
}
