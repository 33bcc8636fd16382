//! Elevation-to-color banding.
//!
//! Three fixed RGB bands selected by strict height thresholds; no
//! interpolation between bands.

/// Elevation above which a vertex is in the high band.
pub const HIGH_THRESHOLD: f32 = 700.0;
/// Elevation above which a vertex is in the mid band (up to the high one).
pub const MID_THRESHOLD: f32 = 600.0;

/// Discrete color band for a vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Band {
    Low,
    Mid,
    High,
}

impl Band {
    /// RGB triple of this band.
    pub fn rgb(self) -> [f32; 3] {
        match self {
            Band::High => [0.6234234, 0.298, 0.1],
            Band::Mid => [0.723523, 0.4231253, 0.1],
            Band::Low => [0.8234235, 0.553462435, 0.3],
        }
    }

    /// RGBA with alpha fixed at 1.0, as uploaded to the color buffer.
    pub fn rgba(self) -> [f32; 4] {
        let [r, g, b] = self.rgb();
        [r, g, b, 1.0]
    }
}

/// Map an elevation to its band. Strict `>` at both thresholds: exactly 700
/// is mid, exactly 600 is low.
pub fn classify(height: f32) -> Band {
    if height > HIGH_THRESHOLD {
        Band::High
    } else if height > MID_THRESHOLD {
        Band::Mid
    } else {
        Band::Low
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strict_threshold_boundaries() {
        assert_eq!(classify(700.0001), Band::High);
        assert_eq!(classify(700.0), Band::Mid);
        assert_eq!(classify(600.0001), Band::Mid);
        assert_eq!(classify(600.0), Band::Low);
        assert_eq!(classify(0.0), Band::Low);
        assert_eq!(classify(-50.0), Band::Low);
    }

    #[test]
    fn test_rgba_alpha_fixed() {
        for band in [Band::Low, Band::Mid, Band::High] {
            let [r, g, b, a] = band.rgba();
            assert_eq!([r, g, b], band.rgb());
            assert_eq!(a, 1.0);
        }
    }
}
