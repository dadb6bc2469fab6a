use serde::{Deserialize, Serialize};

/// 2D Vector for physics calculations
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    pub fn length(&self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    pub fn length_squared(&self) -> f32 {
        self.x * self.x + self.y * self.y
    }

    pub fn dot(&self, other: Vec2) -> f32 {
        self.x * other.x + self.y * other.y
    }

    pub fn distance(&self, other: Vec2) -> f32 {
        (*self - other).length()
    }

    /// Express the vector in a frame rotated by `angle` radians.
    ///
    /// `x' = x·cos θ − y·sin θ`, `y' = x·sin θ + y·cos θ`
    #[inline]
    pub fn rotate(&self, angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self {
            x: self.x * cos - self.y * sin,
            y: self.x * sin + self.y * cos,
        }
    }
}

impl std::ops::Add for Vec2 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self { x: self.x + rhs.x, y: self.y + rhs.y }
    }
}

impl std::ops::AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl std::ops::Sub for Vec2 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self { x: self.x - rhs.x, y: self.y - rhs.y }
    }
}

impl std::ops::Mul<f32> for Vec2 {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self {
        Self { x: self.x * rhs, y: self.y * rhs }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, PI};

    fn close(a: Vec2, b: Vec2) -> bool {
        (a.x - b.x).abs() < 1e-4 && (a.y - b.y).abs() < 1e-4
    }

    #[test]
    fn quarter_turn_maps_x_to_y() {
        let v = Vec2::new(1.0, 0.0).rotate(FRAC_PI_2);
        assert!(close(v, Vec2::new(0.0, 1.0)), "{v:?}");
    }

    #[test]
    fn rotation_undone_by_negative_angle() {
        let samples = [
            Vec2::new(1.0, 0.0),
            Vec2::new(-2.5, 2.5),
            Vec2::new(0.3, -7.0),
            Vec2::new(0.0, 0.0),
        ];
        let mut angle = -2.0 * PI;
        while angle <= 2.0 * PI {
            for v in samples {
                let back = v.rotate(angle).rotate(-angle);
                assert!(close(back, v), "angle {angle}: {v:?} -> {back:?}");
            }
            angle += 0.37;
        }
    }

    #[test]
    fn rotation_preserves_length() {
        let v = Vec2::new(3.0, 4.0);
        assert!((v.rotate(1.234).length() - 5.0).abs() < 1e-4);
    }
}
