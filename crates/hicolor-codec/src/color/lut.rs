//! Channel scaling lookup tables
//!
//! The tables are generated at compile time by build.rs. Down-scaling picks
//! the nearest bucket; up-scaling picks a representative intensity that
//! down-scales back to the same bucket, so a quantized color is stable
//! under any number of further pack/unpack cycles.

// Include the generated tables from build.rs
include!(concat!(env!("OUT_DIR"), "/scale_lut.rs"));

/// Number of levels in a 5-bit channel.
pub const LEVELS_5: u8 = 32;
/// Number of levels in a 6-bit channel.
pub const LEVELS_6: u8 = 64;

/// Scale an 8-bit intensity down to a bucket index for a channel with
/// `levels` levels (32 or 64).
#[inline]
pub fn to_bucket(value: u8, levels: u8) -> u8 {
    debug_assert!(levels == LEVELS_5 || levels == LEVELS_6);
    if levels == LEVELS_6 {
        DOWN_6[value as usize]
    } else {
        DOWN_5[value as usize]
    }
}

/// Scale a bucket index back up to its representative 8-bit intensity.
///
/// Bucket indices past the last level are masked into range.
#[inline]
pub fn from_bucket(bucket: u8, levels: u8) -> u8 {
    debug_assert!(levels == LEVELS_5 || levels == LEVELS_6);
    if levels == LEVELS_6 {
        UP_6[(bucket & 0x3f) as usize]
    } else {
        UP_5[(bucket & 0x1f) as usize]
    }
}

/// Snap an 8-bit intensity to the nearest value the channel can store.
#[inline]
pub fn snap(value: u8, levels: u8) -> u8 {
    from_bucket(to_bucket(value, levels), levels)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_point_every_bucket() {
        for levels in [LEVELS_5, LEVELS_6] {
            for bucket in 0..levels {
                let value = from_bucket(bucket, levels);
                assert_eq!(
                    to_bucket(value, levels),
                    bucket,
                    "bucket {bucket} of {levels} is not a fixed point (representative {value})"
                );
            }
        }
    }

    #[test]
    fn test_endpoints() {
        for levels in [LEVELS_5, LEVELS_6] {
            assert_eq!(to_bucket(0, levels), 0);
            assert_eq!(to_bucket(255, levels), levels - 1);
            assert_eq!(from_bucket(0, levels), 0);
            assert_eq!(from_bucket(levels - 1, levels), 255);
        }
    }

    #[test]
    fn test_monotonicity() {
        for levels in [LEVELS_5, LEVELS_6] {
            for v in 1..=255u8 {
                assert!(to_bucket(v, levels) >= to_bucket(v - 1, levels));
            }
            for b in 1..levels {
                assert!(from_bucket(b, levels) > from_bucket(b - 1, levels));
            }
        }
    }

    #[test]
    fn test_nearest_bucket() {
        // Each intensity lands on the bucket whose representative is closest.
        for levels in [LEVELS_5, LEVELS_6] {
            for v in 0..=255u8 {
                let chosen = from_bucket(to_bucket(v, levels), levels) as i32;
                let err = (chosen - v as i32).abs();
                let step = 255.0 / (levels - 1) as f32;
                assert!(
                    err as f32 <= step / 2.0 + 0.5,
                    "{v} snapped to {chosen} with {levels} levels"
                );
            }
        }
    }

    #[test]
    fn test_snap_is_idempotent() {
        for levels in [LEVELS_5, LEVELS_6] {
            for v in 0..=255u8 {
                let once = snap(v, levels);
                assert_eq!(snap(once, levels), once);
            }
        }
    }
}
