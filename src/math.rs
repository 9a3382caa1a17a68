/// Ease-in ramp for camera zoom acceleration.
///
/// Clamps to 0 below the ramp and 1 above it. Inside the ramp this is the
/// 6x^2 - 5x^3 polynomial, which peaks above 1.0 around x = 0.8 before
/// settling back to 1, so zoom speed briefly exceeds the nominal maximum.
pub fn smoothstep(x: f32) -> f32 {
    if x <= 0.0 {
        0.0
    } else if x >= 1.0 {
        1.0
    } else {
        6.0 * x * x - 5.0 * x * x * x
    }
}

pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn smoothstep_clamps_below_ramp() {
        assert_eq!(smoothstep(0.0), 0.0);
        assert_eq!(smoothstep(-0.5), 0.0);
        assert_eq!(smoothstep(f32::MIN), 0.0);
    }

    #[test]
    fn smoothstep_clamps_above_ramp() {
        assert_eq!(smoothstep(1.0), 1.0);
        assert_eq!(smoothstep(2.0), 1.0);
        assert_eq!(smoothstep(1000.0), 1.0);
    }

    #[test]
    fn smoothstep_midpoint() {
        // 6(0.25) - 5(0.125) = 1.5 - 0.625
        assert!((smoothstep(0.5) - 0.875).abs() < 1e-6);
    }

    #[test]
    fn smoothstep_peaks_above_one_inside_ramp() {
        assert!((smoothstep(0.8) - 1.28).abs() < 1e-6);
        assert!(smoothstep(0.8) > 1.0, "ramp overshoots before settling");
    }

    #[test]
    fn smoothstep_rises_through_early_ramp() {
        let mut previous = 0.0;
        for step in 1..=8 {
            let value = smoothstep(step as f32 * 0.1);
            assert!(value > previous, "ramp should rise at x = {}", step as f32 * 0.1);
            previous = value;
        }
    }

    #[test]
    fn lerp_endpoints() {
        assert_eq!(lerp(0.0, 1.5, 0.0), 0.0);
        assert_eq!(lerp(0.0, 1.5, 1.0), 1.5);
    }

    #[test]
    fn lerp_partial() {
        assert!((lerp(0.0, 1.5, 0.875) - 1.3125).abs() < 1e-6);
        assert!((lerp(2.0, 4.0, 0.5) - 3.0).abs() < 1e-6);
    }
}
