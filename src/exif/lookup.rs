//! Fixed code → label tables for enumerated EXIF fields.
//!
//! Each table covers only the codes the standard defines; an unknown code
//! resolves to `None` and the field stays unpopulated, never a raw number.

pub(crate) fn exposure_mode(code: i64) -> Option<&'static str> {
    Some(match code {
        0 => "Auto",
        1 => "Manual",
        2 => "Auto bracket",
        _ => return None,
    })
}

pub(crate) fn white_balance(code: i64) -> Option<&'static str> {
    Some(match code {
        0 => "Auto",
        1 => "Manual",
        _ => return None,
    })
}

pub(crate) fn metering_mode(code: i64) -> Option<&'static str> {
    Some(match code {
        0 => "Unknown",
        1 => "Average",
        2 => "Center-weighted average",
        3 => "Spot",
        4 => "Multi-spot",
        5 => "Multi-segment",
        6 => "Partial",
        255 => "Other",
        _ => return None,
    })
}

pub(crate) fn exposure_program(code: i64) -> Option<&'static str> {
    Some(match code {
        0 => "Not Defined",
        1 => "Manual",
        2 => "Program AE",
        3 => "Aperture-priority AE",
        4 => "Shutter-priority AE",
        5 => "Creative (Slow speed)",
        6 => "Action (High speed)",
        7 => "Portrait",
        8 => "Landscape",
        9 => "Bulb",
        _ => return None,
    })
}

pub(crate) fn scene_capture_type(code: i64) -> Option<&'static str> {
    Some(match code {
        0 => "Standard",
        1 => "Landscape",
        2 => "Portrait",
        3 => "Night",
        _ => return None,
    })
}

pub(crate) fn gain_control(code: i64) -> Option<&'static str> {
    Some(match code {
        0 => "None",
        1 => "Low gain up",
        2 => "High gain up",
        3 => "Low gain down",
        4 => "High gain down",
        _ => return None,
    })
}

pub(crate) fn contrast(code: i64) -> Option<&'static str> {
    Some(match code {
        0 => "Normal",
        1 => "Low",
        2 => "High",
        _ => return None,
    })
}

pub(crate) fn saturation(code: i64) -> Option<&'static str> {
    Some(match code {
        0 => "Normal",
        1 => "Low",
        2 => "High",
        _ => return None,
    })
}

pub(crate) fn sharpness(code: i64) -> Option<&'static str> {
    Some(match code {
        0 => "Normal",
        1 => "Soft",
        2 => "Hard",
        _ => return None,
    })
}

pub(crate) fn focal_plane_resolution_unit(code: i64) -> Option<&'static str> {
    Some(match code {
        1 => "None",
        2 => "inches",
        3 => "cm",
        4 => "mm",
        5 => "μm",
        _ => return None,
    })
}

pub(crate) fn subject_distance_range(code: i64) -> Option<&'static str> {
    Some(match code {
        0 => "Unknown",
        1 => "Macro",
        2 => "Close",
        3 => "Distant",
        _ => return None,
    })
}

pub(crate) fn gps_differential(code: i64) -> Option<&'static str> {
    Some(match code {
        0 => "No correction",
        1 => "Differential corrected",
        _ => return None,
    })
}

pub(crate) fn photometric_interpretation(code: i64) -> Option<&'static str> {
    Some(match code {
        0 => "WhiteIsZero",
        1 => "BlackIsZero",
        2 => "RGB",
        3 => "RGB Palette",
        4 => "Transparency Mask",
        5 => "CMYK",
        6 => "YCbCr",
        8 => "CIELab",
        _ => return None,
    })
}

pub(crate) fn orientation(code: i64) -> Option<&'static str> {
    Some(match code {
        1 => "Normal",
        2 => "Flip horizontal",
        3 => "Rotate 180°",
        4 => "Flip vertical",
        5 => "Rotate 90° CCW, flip vertical",
        6 => "Rotate 90° CW",
        7 => "Rotate 90° CW, flip vertical",
        8 => "Rotate 90° CCW",
        _ => return None,
    })
}

pub(crate) fn planar_configuration(code: i64) -> Option<&'static str> {
    Some(match code {
        1 => "Chunky",
        2 => "Planar",
        _ => return None,
    })
}

pub(crate) fn ycbcr_positioning(code: i64) -> Option<&'static str> {
    Some(match code {
        1 => "Centered",
        2 => "Co-sited",
        _ => return None,
    })
}

pub(crate) fn file_source(code: i64) -> Option<&'static str> {
    Some(match code {
        1 => "Film scanner",
        2 => "Reflection print scanner",
        3 => "Digital camera",
        _ => return None,
    })
}

/// SceneType has a single defined code.
pub(crate) fn scene_type(code: i64) -> Option<&'static str> {
    (code == 1).then_some("Directly photographed")
}

pub(crate) fn custom_rendered(code: i64) -> Option<&'static str> {
    Some(match code {
        0 => "Normal",
        1 => "Custom",
        _ => return None,
    })
}

pub(crate) fn sensing_method(code: i64) -> Option<&'static str> {
    Some(match code {
        1 => "Not defined",
        2 => "One-chip color area",
        3 => "Two-chip color area",
        4 => "Three-chip color area",
        5 => "Color sequential area",
        7 => "Trilinear",
        8 => "Color sequential linear",
        _ => return None,
    })
}

pub(crate) fn color_space(code: i64) -> Option<&'static str> {
    Some(match code {
        1 => "sRGB",
        2 => "Adobe RGB",
        65535 => "Uncalibrated",
        _ => return None,
    })
}

pub(crate) fn compression(code: i64) -> Option<&'static str> {
    Some(match code {
        1 => "Uncompressed",
        6 => "JPEG (old-style)",
        7 => "JPEG",
        8 => "Adobe Deflate",
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orientation_covers_defined_codes_only() {
        assert_eq!(orientation(1), Some("Normal"));
        assert_eq!(orientation(6), Some("Rotate 90° CW"));
        assert_eq!(orientation(8), Some("Rotate 90° CCW"));
        assert_eq!(orientation(0), None);
        assert_eq!(orientation(99), None);
    }

    #[test]
    fn zero_codes_map_to_labels() {
        assert_eq!(contrast(0), Some("Normal"));
        assert_eq!(saturation(0), Some("Normal"));
        assert_eq!(gain_control(0), Some("None"));
        assert_eq!(metering_mode(0), Some("Unknown"));
        assert_eq!(gps_differential(0), Some("No correction"));
    }

    #[test]
    fn scene_type_is_single_valued() {
        assert_eq!(scene_type(1), Some("Directly photographed"));
        assert_eq!(scene_type(0), None);
        assert_eq!(scene_type(2), None);
    }

    #[test]
    fn color_space_includes_uncalibrated() {
        assert_eq!(color_space(1), Some("sRGB"));
        assert_eq!(color_space(65535), Some("Uncalibrated"));
        assert_eq!(color_space(3), None);
    }

    #[test]
    fn compression_labels() {
        assert_eq!(compression(6), Some("JPEG (old-style)"));
        assert_eq!(compression(7), Some("JPEG"));
        assert_eq!(compression(2), None);
    }
}
