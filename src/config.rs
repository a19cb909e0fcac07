//! Environment-driven defaults
//!
//! Each value is read once on first use and cached for the process lifetime.

use std::sync::OnceLock;

fn parse_env_usize(name: &str, default: usize) -> usize {
    std::env::var(name)
        .ok()
        .and_then(|v| v.trim().parse::<usize>().ok())
        .unwrap_or(default)
}

fn parse_env_f32(name: &str, default: f32) -> f32 {
    std::env::var(name)
        .ok()
        .and_then(|v| v.trim().parse::<f32>().ok())
        .filter(|v| v.is_finite() && *v > 0.0)
        .unwrap_or(default)
}

fn parse_env_bool_u8(name: &str, default: bool) -> bool {
    std::env::var(name)
        .ok()
        .and_then(|v| v.trim().parse::<u8>().ok())
        .map(|v| v != 0)
        .unwrap_or(default)
}

static DEBUG_ENABLED: OnceLock<bool> = OnceLock::new();

/// `QR_DEBUG` is set: tools log at debug level
pub fn debug_enabled() -> bool {
    *DEBUG_ENABLED.get_or_init(|| std::env::var("QR_DEBUG").is_ok())
}

static PARALLEL_MASKS: OnceLock<bool> = OnceLock::new();

/// Score the eight mask candidates on the rayon pool (`QR_PARALLEL_MASKS`)
pub fn parallel_masks() -> bool {
    *PARALLEL_MASKS.get_or_init(|| parse_env_bool_u8("QR_PARALLEL_MASKS", false))
}

static BADGE_SIZE_MM: OnceLock<f32> = OnceLock::new();

/// Printed symbol edge length in millimetres (`QR_BADGE_SIZE_MM`)
pub fn badge_size_mm() -> f32 {
    *BADGE_SIZE_MM.get_or_init(|| parse_env_f32("QR_BADGE_SIZE_MM", 20.0))
}

static PNG_SCALE: OnceLock<usize> = OnceLock::new();

/// Pixels per module for raster output (`QR_PNG_SCALE`)
pub fn png_scale() -> usize {
    *PNG_SCALE.get_or_init(|| parse_env_usize("QR_PNG_SCALE", 8).clamp(1, 64))
}

static QUIET_ZONE: OnceLock<usize> = OnceLock::new();

/// Light border in modules for raster and terminal output (`QR_QUIET_ZONE`)
pub fn quiet_zone() -> usize {
    *QUIET_ZONE.get_or_init(|| parse_env_usize("QR_QUIET_ZONE", 4).clamp(0, 16))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_vars_fall_back() {
        assert_eq!(parse_env_usize("QR_TEST_UNSET_USIZE", 7), 7);
        assert_eq!(parse_env_f32("QR_TEST_UNSET_F32", 1.5), 1.5);
        assert!(parse_env_bool_u8("QR_TEST_UNSET_BOOL", true));
    }

    #[test]
    fn test_defaults_are_in_range() {
        assert!((1..=64).contains(&png_scale()));
        assert!(quiet_zone() <= 16);
        assert!(badge_size_mm() > 0.0);
    }
}
