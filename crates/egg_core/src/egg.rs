//! Egg outline geometry and the progress-driven shell color.
//!
//! The curve is the classic algebraic egg:
//! `x = a·cos t`, `y = -(sqrt(b² - d²·cos² t) + d·sin t)·sin t`,
//! with `y` growing downwards so the narrow end points up on screen.

/// Fill used for the button once the egg is done.
pub const FINISHED_BUTTON_RGB: [u8; 3] = [61, 47, 76];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EggShape {
    pub a: f32,
    pub b: f32,
    pub d: f32,
}

impl Default for EggShape {
    fn default() -> Self {
        Self {
            a: 110.0,
            b: 150.0,
            d: 20.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EggBounds {
    pub min_x: f32,
    pub max_x: f32,
    pub min_y: f32,
    pub max_y: f32,
}

impl EggBounds {
    pub fn width(&self) -> f32 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f32 {
        self.max_y - self.min_y
    }
}

impl EggShape {
    pub fn point_at(&self, degrees: f32) -> [f32; 2] {
        let rad = degrees.to_radians();
        let (sin_t, cos_t) = rad.sin_cos();
        let x = self.a * cos_t;
        let radius = (self.b * self.b - self.d * self.d * cos_t * cos_t).sqrt();
        let y = -(radius + self.d * sin_t) * sin_t;
        [x, y]
    }

    /// Samples the closed outline from 0° to 360° inclusive, so the last point repeats the first.
    pub fn outline(&self, step_degrees: f32) -> Vec<[f32; 2]> {
        let step = if step_degrees > 0.0 { step_degrees } else { 1.0 };
        let samples = (360.0 / step).round() as usize;
        (0..=samples).map(|i| self.point_at(i as f32 * step)).collect()
    }

    pub fn bounds(&self) -> EggBounds {
        let outline = self.outline(1.0);
        let mut bounds = EggBounds {
            min_x: f32::INFINITY,
            max_x: f32::NEG_INFINITY,
            min_y: f32::INFINITY,
            max_y: f32::NEG_INFINITY,
        };
        for [x, y] in outline {
            bounds.min_x = bounds.min_x.min(x);
            bounds.max_x = bounds.max_x.max(x);
            bounds.min_y = bounds.min_y.min(y);
            bounds.max_y = bounds.max_y.max(y);
        }
        bounds
    }
}

/// Pale yellow at zero progress, deepening towards a warm red-brown as the egg cooks.
pub fn fill_color(progress: f32) -> [u8; 3] {
    let channel = |value: f32| value.clamp(0.0, 255.0) as u8;
    [
        255,
        channel(239.0 * (1.0 - progress)),
        channel(174.0 * (1.3 - progress)),
    ]
}
