use std::f64::consts::PI;

// Cosine interpolation between `a` and `b`.
// alpha = 0 gives `a`, alpha = 1 gives `b`, eased in between.
#[inline]
pub fn interpolate(a: f64, b: f64, alpha: f64) -> f64 {
    let prc = (1.0 - (alpha * PI).cos()) * 0.5;
    a * (1.0 - prc) + prc * b
}

#[inline]
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    value.max(min).min(max)
}

// RGB bytes to 0..1 floats, the layout the mesh color buffer uses
#[inline]
pub fn rgb_to_unit(rgb: [u8; 3]) -> [f32; 3] {
    [
        rgb[0] as f32 / 255.0,
        rgb[1] as f32 / 255.0,
        rgb[2] as f32 / 255.0,
    ]
}
