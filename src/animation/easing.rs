//! Easing curves

/// Maps linear progress in [0, 1] onto an eased progress in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    Linear,
    /// Fast start, gentle landing
    #[default]
    OutCubic,
    /// Gentle start, fast finish
    InCubic,
}

impl Easing {
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::OutCubic => 1.0 - (1.0 - t).powi(3),
            Self::InCubic => t * t * t,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints() {
        for easing in [Easing::Linear, Easing::OutCubic, Easing::InCubic] {
            assert_eq!(easing.apply(0.0), 0.0);
            assert_eq!(easing.apply(1.0), 1.0);
            assert_eq!(easing.apply(-2.0), 0.0);
            assert_eq!(easing.apply(3.0), 1.0);
        }
    }

    #[test]
    fn test_shapes() {
        assert_eq!(Easing::OutCubic.apply(0.5), 0.875);
        assert_eq!(Easing::InCubic.apply(0.5), 0.125);
        assert_eq!(Easing::Linear.apply(0.25), 0.25);
    }
}
