//! Tests for block constants and query limits

#[cfg(test)]
mod tests {
    use bondwall::WallError;
    use bondwall::io::configuration::{
        DEFAULT_LOG_DIRECTIVE, DEFAULT_MAX_HEIGHT, DEFAULT_MAX_WIDTH_INCHES,
        LONG_BLOCK_HALF_UNITS, PROGRESS_BAR_WIDTH, PROGRESS_ROW_BATCH, QueryLimits,
        REFERENCE_HEIGHT, REFERENCE_WIDTH_INCHES, SHORT_BLOCK_HALF_UNITS,
    };
    use bondwall::spatial::Length;

    // Tests block constants are 3.0 and 4.5 inches
    // Verified by changing block constants
    #[test]
    fn test_block_lengths() {
        assert_eq!(SHORT_BLOCK_HALF_UNITS, 6);
        assert_eq!(LONG_BLOCK_HALF_UNITS, 9);
    }

    // Tests the reference panel is 48.0x10 and within default limits
    // Verified by shrinking the default width limit
    #[test]
    fn test_reference_panel() {
        assert!((REFERENCE_WIDTH_INCHES - 48.0).abs() < f64::EPSILON);
        assert_eq!(REFERENCE_HEIGHT, 10);
        assert!(REFERENCE_WIDTH_INCHES <= DEFAULT_MAX_WIDTH_INCHES);
        assert!(REFERENCE_HEIGHT <= DEFAULT_MAX_HEIGHT);
    }

    // Tests display settings
    // Verified by changing display constants
    #[test]
    fn test_display_settings() {
        assert_eq!(PROGRESS_BAR_WIDTH, 40);
        assert!(PROGRESS_ROW_BATCH > 0);
        assert_eq!(DEFAULT_LOG_DIRECTIVE, "warn");
    }

    // Tests default limits come from the constants
    // Verified by swapping the default limits
    #[test]
    fn test_default_limits() {
        let limits = QueryLimits::default();
        assert!((limits.max_width - DEFAULT_MAX_WIDTH_INCHES).abs() < f64::EPSILON);
        assert_eq!(limits.max_height, DEFAULT_MAX_HEIGHT);
    }

    // Tests the accepted width range is inclusive at both ends
    // Verified by using exclusive bounds
    #[test]
    fn test_validate_width_bounds() {
        let limits = QueryLimits::default();
        assert_eq!(
            limits.validate_width(3.0).unwrap(),
            Length::from_half_units(6)
        );
        assert_eq!(
            limits.validate_width(48.0).unwrap(),
            Length::from_half_units(96)
        );
        assert!(limits.validate_width(2.5).is_err());
        assert!(limits.validate_width(48.5).is_err());
    }

    // Tests widths must be multiples of 0.5
    // Verified by rounding the width
    #[test]
    fn test_validate_width_fraction() {
        let err = QueryLimits::default().validate_width(27.3).unwrap_err();
        assert!(matches!(
            err,
            WallError::InvalidParameter {
                parameter: "width",
                ..
            }
        ));
    }

    // Tests untileable widths inside the range still validate
    // Verified by rejecting untileable widths in the driver
    #[test]
    fn test_validate_width_accepts_untileable() {
        assert!(QueryLimits::default().validate_width(10.0).is_ok());
    }

    // Tests height must be between 1 and the limit
    // Verified by allowing zero height
    #[test]
    fn test_validate_height() {
        let limits = QueryLimits::default();
        assert_eq!(limits.validate_height(1).unwrap().get(), 1);
        assert_eq!(limits.validate_height(10).unwrap().get(), 10);
        assert!(limits.validate_height(0).is_err());
        let err = limits.validate_height(11).unwrap_err();
        assert!(err.to_string().contains("between 1 and 10"));
    }

    // Tests raised limits admit larger panels
    // Verified by ignoring the configured limits
    #[test]
    fn test_custom_limits() {
        let limits = QueryLimits {
            max_width: 60.0,
            max_height: 20,
        };
        assert!(limits.validate_width(60.0).is_ok());
        assert!(limits.validate_height(20).is_ok());
        assert!(limits.validate_height(21).is_err());
    }

    // Tests a malformed width limit rejects every query instead of none
    // Verified by comparing the raw width against the limit as a float
    #[test]
    fn test_malformed_width_limit() {
        for max_width in [f64::NAN, f64::INFINITY, -48.0, 0.0, 2.5, 47.3] {
            let limits = QueryLimits {
                max_width,
                max_height: DEFAULT_MAX_HEIGHT,
            };
            assert!(limits.width_ceiling().is_err(), "max width {max_width}");
            let err = limits.validate_width(27.0).unwrap_err();
            assert!(
                matches!(
                    err,
                    WallError::InvalidParameter {
                        parameter: "max-width",
                        ..
                    }
                ),
                "max width {max_width}"
            );
        }
    }

    // Tests the width ceiling is the configured limit in half units
    // Verified by truncating the limit to whole inches
    #[test]
    fn test_width_ceiling() {
        let limits = QueryLimits {
            max_width: 52.5,
            max_height: DEFAULT_MAX_HEIGHT,
        };
        assert_eq!(limits.width_ceiling().unwrap(), Length::from_half_units(105));
        assert!(limits.validate_width(52.5).is_ok());
        assert!(limits.validate_width(53.0).is_err());
    }
}
