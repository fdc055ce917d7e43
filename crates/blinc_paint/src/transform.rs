//! 2D affine transforms and flat coordinate transformation

use crate::geometry::Point;

/// 2D affine transform from source space to pixel space
///
/// Held in `f64` so large source coordinates survive the translate that
/// brings them near the origin; results narrow to `f32` only at the canvas.
///
/// ```text
/// | a  c  e |
/// | b  d  f |
/// | 0  0  1 |
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transform2D {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub e: f64,
    pub f: f64,
}

impl Default for Transform2D {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform2D {
    pub const fn identity() -> Self {
        Self {
            a: 1.0,
            b: 0.0,
            c: 0.0,
            d: 1.0,
            e: 0.0,
            f: 0.0,
        }
    }

    pub fn translate(x: f64, y: f64) -> Self {
        Self {
            e: x,
            f: y,
            ..Self::identity()
        }
    }

    pub fn scale(sx: f64, sy: f64) -> Self {
        Self {
            a: sx,
            d: sy,
            ..Self::identity()
        }
    }

    pub fn scale_uniform(s: f64) -> Self {
        Self::scale(s, s)
    }

    pub fn rotate(angle: f64) -> Self {
        let cos = angle.cos();
        let sin = angle.sin();
        Self {
            a: cos,
            b: sin,
            c: -sin,
            d: cos,
            e: 0.0,
            f: 0.0,
        }
    }

    /// Compose two transforms. The result applies `other` first, then `self`.
    pub fn then(&self, other: &Transform2D) -> Transform2D {
        Transform2D {
            a: self.a * other.a + self.c * other.b,
            b: self.b * other.a + self.d * other.b,
            c: self.a * other.c + self.c * other.d,
            d: self.b * other.c + self.d * other.d,
            e: self.a * other.e + self.c * other.f + self.e,
            f: self.b * other.e + self.d * other.f + self.f,
        }
    }

    #[inline]
    pub fn apply(&self, x: f64, y: f64) -> (f64, f64) {
        (
            self.a * x + self.c * y + self.e,
            self.b * x + self.d * y + self.f,
        )
    }

    pub fn transform_point(&self, point: Point) -> Point {
        let (x, y) = self.apply(point.x, point.y);
        Point::new(x, y)
    }
}

/// Map a flat `[x0, y0, x1, y1, ...]` source buffer through `transform` into
/// the pixel buffer `dest`.
///
/// The transform runs in `f64`; each result is narrowed to `f32` as it is
/// written.
///
/// `dest` is cleared and refilled so callers can reuse its allocation across
/// frames. On return `dest.len() == source.len()`, and pair `i` of `dest` is
/// pair `i` of `source` transformed.
///
/// # Panics
///
/// If `source` has an odd length.
pub fn transform_coordinates(source: &[f64], transform: &Transform2D, dest: &mut Vec<f32>) {
    let pairs: &[[f64; 2]] = bytemuck::cast_slice(source);
    dest.clear();
    dest.reserve(source.len());
    for &[x, y] in pairs {
        let (px, py) = transform.apply(x, y);
        dest.push(px as f32);
        dest.push(py as f32);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transform_coordinates() {
        let source = [0.0, 0.0, 10.0, 0.0, 10.0, 10.0];
        let mut dest = vec![99.0; 32];
        let transform = Transform2D::translate(5.0, -5.0).then(&Transform2D::scale(2.0, 2.0));

        transform_coordinates(&source, &transform, &mut dest);
        assert_eq!(dest, vec![5.0, -5.0, 25.0, -5.0, 25.0, 15.0]);
    }

    #[test]
    fn test_transform_coordinates_reuses_buffer() {
        let mut dest = Vec::with_capacity(64);
        let ptr = dest.as_ptr();
        transform_coordinates(&[1.0, 2.0], &Transform2D::identity(), &mut dest);
        assert_eq!(dest, vec![1.0, 2.0]);
        assert_eq!(dest.as_ptr(), ptr);
    }

    #[test]
    fn test_transform_coordinates_keeps_world_scale_precision() {
        // 0.4 apart near the web mercator extent, 1 pixel per millimeter
        let source = [20_037_508.3, 0.0, 20_037_508.7, 0.0];
        let transform = Transform2D::scale_uniform(1000.0).then(&Transform2D::translate(-20_037_508.0, 0.0));
        let mut dest = Vec::new();

        transform_coordinates(&source, &transform, &mut dest);
        assert!((dest[0] - 300.0).abs() < 0.01, "{dest:?}");
        assert!((dest[2] - 700.0).abs() < 0.01, "{dest:?}");
    }

    #[test]
    fn test_rotation() {
        let p = Transform2D::rotate(std::f64::consts::FRAC_PI_2).transform_point(Point::new(1.0, 0.0));
        assert!(p.x.abs() < 1e-6);
        assert!((p.y - 1.0).abs() < 1e-6);
    }
}
