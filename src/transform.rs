/// A 2D affine transformation matrix.
///
/// Maps a point `(x, y)` to `(a*x + c*y + tx, b*x + d*y + ty)`, the same
/// layout used by most platform view hierarchies. Surfaces are scaled
/// around their own center, so no origin is stored here.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AffineTransform {
    pub a: f32,
    pub b: f32,
    pub c: f32,
    pub d: f32,
    pub tx: f32,
    pub ty: f32,
}

impl AffineTransform {
    /// Identity matrix (no transformation)
    pub const IDENTITY: Self = Self {
        a: 1.0,
        b: 0.0,
        c: 0.0,
        d: 1.0,
        tx: 0.0,
        ty: 0.0,
    };

    /// Create a uniform scale transform
    pub fn scale(s: f32) -> Self {
        Self {
            a: s,
            d: s,
            ..Self::IDENTITY
        }
    }

    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }
}

impl Default for AffineTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_identity() {
        assert!(AffineTransform::default().is_identity());
        assert!(!AffineTransform::scale(0.2).is_identity());
    }

    #[test]
    fn test_scale_is_uniform_without_translation() {
        let t = AffineTransform::scale(0.2);
        assert_eq!((t.a, t.d), (0.2, 0.2));
        assert_eq!((t.b, t.c, t.tx, t.ty), (0.0, 0.0, 0.0, 0.0));
        assert!(AffineTransform::scale(1.0).is_identity());
    }
}
