use anyhow::Result;
use nom_exif::*;
use std::io::Cursor;

use super::tags::{RawTagMap, Tag, TagValue};

/// The external EXIF decode capability.
///
/// Implementations take raw image bytes and return whatever tags they could
/// extract. Media the decoder does not recognize, or images carrying no
/// EXIF segment, yield an EMPTY map rather than an error — callers treat
/// overall emptiness as "no EXIF data". `Err` is reserved for
/// decoder-infrastructure failure.
///
/// The normalizer depends only on [`RawTagMap`], so tests feed it synthetic
/// maps without ever touching a decoder.
pub trait ExifDecoder {
    fn decode(&self, bytes: &[u8]) -> Result<RawTagMap>;
}

/// Production decoder backed by the `nom-exif` parser.
#[derive(Debug, Default)]
pub struct NomExifDecoder;

impl NomExifDecoder {
    pub fn new() -> Self {
        Self
    }
}

// Main-image tags (IFD0 plus the Exif and GPS sub-IFDs), by EXIF tag code.
const MAIN_TAG_CODES: &[(Tag, u16)] = &[
    // Camera / device
    (Tag::Make, 0x010F),
    (Tag::Model, 0x0110),
    (Tag::Software, 0x0131),
    (Tag::HostComputer, 0x013C),
    (Tag::Artist, 0x013B),
    (Tag::Copyright, 0x8298),
    (Tag::CameraOwnerName, 0xA430),
    (Tag::BodySerialNumber, 0xA431),
    (Tag::LensSerialNumber, 0xA435),
    // Lens
    (Tag::LensMake, 0xA433),
    (Tag::LensModel, 0xA434),
    (Tag::LensInfo, 0xA432),
    (Tag::FocalLength, 0x920A),
    (Tag::FocalLengthIn35mmFormat, 0xA405),
    (Tag::MaxApertureValue, 0x9205),
    // Exposure
    (Tag::FNumber, 0x829D),
    (Tag::ExposureTime, 0x829A),
    (Tag::IsoSpeedRatings, 0x8827),
    (Tag::ExposureMode, 0xA402),
    (Tag::WhiteBalance, 0xA403),
    (Tag::Flash, 0x9209),
    (Tag::MeteringMode, 0x9207),
    (Tag::ExposureBiasValue, 0x9204),
    (Tag::ExposureProgram, 0x8822),
    (Tag::SceneCaptureType, 0xA406),
    (Tag::GainControl, 0xA407),
    (Tag::Contrast, 0xA408),
    (Tag::Saturation, 0xA409),
    (Tag::Sharpness, 0xA40A),
    (Tag::DigitalZoomRatio, 0xA404),
    (Tag::FocalPlaneXResolution, 0xA20E),
    (Tag::FocalPlaneYResolution, 0xA20F),
    (Tag::FocalPlaneResolutionUnit, 0xA210),
    (Tag::SubjectDistance, 0x9206),
    (Tag::SubjectArea, 0x9214),
    (Tag::SubjectDistanceRange, 0xA40C),
    // GPS (latitude/longitude come from the dedicated GPS parser below,
    // these are code-table fallbacks)
    (Tag::GpsLatitudeRef, 0x0001),
    (Tag::GpsLatitude, 0x0002),
    (Tag::GpsLongitudeRef, 0x0003),
    (Tag::GpsLongitude, 0x0004),
    (Tag::GpsAltitude, 0x0006),
    (Tag::GpsTimeStamp, 0x0007),
    (Tag::GpsSpeedRef, 0x000C),
    (Tag::GpsSpeed, 0x000D),
    (Tag::GpsTrackRef, 0x000E),
    (Tag::GpsTrack, 0x000F),
    (Tag::GpsImgDirectionRef, 0x0010),
    (Tag::GpsImgDirection, 0x0011),
    (Tag::GpsDestBearingRef, 0x0017),
    (Tag::GpsDestBearing, 0x0018),
    (Tag::GpsProcessingMethod, 0x001B),
    (Tag::GpsAreaInformation, 0x001C),
    (Tag::GpsDateStamp, 0x001D),
    (Tag::GpsDifferential, 0x001E),
    // Technical
    (Tag::ColorSpace, 0xA001),
    (Tag::XResolution, 0x011A),
    (Tag::BitsPerSample, 0x0102),
    (Tag::Compression, 0x0103),
    (Tag::PhotometricInterpretation, 0x0106),
    (Tag::Orientation, 0x0112),
    (Tag::PlanarConfiguration, 0x011C),
    (Tag::YCbCrCoefficients, 0x0211),
    (Tag::YCbCrPositioning, 0x0213),
    (Tag::ReferenceBlackWhite, 0x0214),
    (Tag::PixelXDimension, 0xA002),
    (Tag::PixelYDimension, 0xA003),
    (Tag::CompressedBitsPerPixel, 0x9102),
    (Tag::FileSource, 0xA300),
    (Tag::SceneType, 0xA301),
    (Tag::CustomRendered, 0xA401),
    (Tag::ExifVersion, 0x9000),
    (Tag::FlashpixVersion, 0xA000),
    (Tag::ComponentsConfiguration, 0x9101),
    (Tag::MakerNote, 0x927C),
    (Tag::UserComment, 0x9286),
    (Tag::RelatedSoundFile, 0xA004),
    (Tag::ImageUniqueId, 0xA420),
    (Tag::SensingMethod, 0xA217),
    (Tag::CfaPattern, 0xA302),
    (Tag::SpectralSensitivity, 0x8824),
    (Tag::Oecf, 0x8828),
    (Tag::SpatialFrequencyResponse, 0xA20C),
    (Tag::Noise, 0xA20D),
    (Tag::SubjectLocation, 0xA214),
    (Tag::ExposureIndex, 0xA215),
    // Dates
    (Tag::DateTime, 0x0132),
    (Tag::DateTimeOriginal, 0x9003),
    (Tag::DateTimeDigitized, 0x9004),
];

// Thumbnail IFD (IFD1) tags.
const THUMBNAIL_TAG_CODES: &[(Tag, u16)] = &[
    (Tag::ThumbnailCompression, 0x0103),
    (Tag::ThumbnailXResolution, 0x011A),
    (Tag::ThumbnailYResolution, 0x011B),
    (Tag::ThumbnailResolutionUnit, 0x0128),
    (Tag::ThumbnailJpegInterchangeFormat, 0x0201),
    (Tag::ThumbnailJpegInterchangeFormatLength, 0x0202),
];

impl ExifDecoder for NomExifDecoder {
    fn decode(&self, bytes: &[u8]) -> Result<RawTagMap> {
        let mut tags = RawTagMap::new();

        let mut parser = MediaParser::new();
        let ms = match MediaSource::seekable(Cursor::new(bytes.to_vec())) {
            Ok(ms) => ms,
            Err(e) => {
                log::debug!("Unrecognized media format: {e}");
                return Ok(tags);
            }
        };

        let iter: ExifIter = match parser.parse(ms) {
            Ok(iter) => iter,
            Err(e) => {
                log::debug!("No EXIF data found: {e}");
                return Ok(tags);
            }
        };

        // Parse GPS info before converting to Exif (consumes the iterator)
        let gps_info = iter.parse_gps_info().ok().flatten();
        let exif: Exif = iter.into();

        for &(tag, code) in MAIN_TAG_CODES {
            if let Some(value) = exif.get_by_ifd_tag_code(0, code) {
                if let Some(converted) = entry_to_value(value) {
                    tags.insert(tag, converted);
                }
            }
        }
        for &(tag, code) in THUMBNAIL_TAG_CODES {
            if let Some(value) = exif.get_by_ifd_tag_code(1, code) {
                if let Some(converted) = entry_to_value(value) {
                    tags.insert(tag, converted);
                }
            }
        }

        // nom-exif's GPS parser handles rational alignment; prefer it over
        // the raw coordinate entries.
        if let Some(gps) = gps_info {
            tags.insert(Tag::GpsLatitude, TagValue::Numbers(latlng_parts(&gps.latitude)));
            tags.insert(Tag::GpsLatitudeRef, TagValue::Text(gps.latitude_ref.to_string()));
            tags.insert(Tag::GpsLongitude, TagValue::Numbers(latlng_parts(&gps.longitude)));
            tags.insert(Tag::GpsLongitudeRef, TagValue::Text(gps.longitude_ref.to_string()));
        }

        Ok(tags)
    }
}

/// Split a nom-exif LatLng (3 URationals: deg, min, sec) into a numeric
/// triple for the normalizer.
fn latlng_parts(latlng: &LatLng) -> Vec<f64> {
    vec![
        latlng.0.0 as f64 / latlng.0.1 as f64,
        latlng.1.0 as f64 / latlng.1.1 as f64,
        latlng.2.0 as f64 / latlng.2.1 as f64,
    ]
}

/// Convert an EntryValue to a tag value via its display form.
///
/// Going through the string form keeps this independent of the library's
/// value-variant set: scalars and rationals become numbers, numeric lists
/// become sequences, everything else stays text.
fn entry_to_value(value: &EntryValue) -> Option<TagValue> {
    parse_display(&value.to_string())
}

fn parse_display(raw: &str) -> Option<TagValue> {
    let s = raw.trim().trim_matches('"').trim();
    if s.is_empty() {
        return None;
    }
    if let Some(n) = parse_scalar(s) {
        return Some(TagValue::Number(n));
    }
    if let Some(ns) = parse_sequence(s) {
        return Some(TagValue::Numbers(ns));
    }
    Some(TagValue::Text(s.to_string()))
}

/// Parse `"250"`, `"2.5"`, `"1/250"`, or `"1/250 (0.004)"` as a number.
fn parse_scalar(s: &str) -> Option<f64> {
    let s = match s.find(" (") {
        Some(i) => &s[..i],
        None => s,
    };
    if let Ok(n) = s.parse::<f64>() {
        return n.is_finite().then_some(n);
    }
    let (numerator, denominator) = s.split_once('/')?;
    let numerator: f64 = numerator.trim().parse().ok()?;
    let denominator: f64 = denominator.trim().parse().ok()?;
    if denominator == 0.0 {
        return None;
    }
    Some(numerator / denominator)
}

/// Parse `"[8, 8, 8]"` or `"40/1, 26/1, 46/1"` as a numeric sequence.
fn parse_sequence(s: &str) -> Option<Vec<f64>> {
    let inner = s
        .strip_prefix('[')
        .and_then(|t| t.strip_suffix(']'))
        .unwrap_or(s);
    if !inner.contains(',') {
        return None;
    }
    let parts: Vec<&str> = inner.split(',').map(str::trim).collect();
    if parts.len() < 2 {
        return None;
    }
    parts.iter().map(|p| parse_scalar(p)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_parsing() {
        assert_eq!(parse_scalar("250"), Some(250.0));
        assert_eq!(parse_scalar("2.5"), Some(2.5));
        assert_eq!(parse_scalar("-0.33"), Some(-0.33));
        assert_eq!(parse_scalar("1/250"), Some(0.004));
        assert_eq!(parse_scalar("1/250 (0.004)"), Some(0.004));
        assert_eq!(parse_scalar("1/0"), None);
        assert_eq!(parse_scalar("Canon"), None);
    }

    #[test]
    fn sequence_parsing() {
        assert_eq!(parse_sequence("[8, 8, 8]"), Some(vec![8.0, 8.0, 8.0]));
        assert_eq!(
            parse_sequence("40/1, 26/1, 46/1"),
            Some(vec![40.0, 26.0, 46.0])
        );
        assert_eq!(parse_sequence("Canon, Inc."), None);
        assert_eq!(parse_sequence("250"), None);
    }

    #[test]
    fn display_parsing_shapes() {
        assert_eq!(parse_display("  EOS R5  "), Some(TagValue::Text("EOS R5".to_string())));
        assert_eq!(parse_display("\"Canon\""), Some(TagValue::Text("Canon".to_string())));
        assert_eq!(parse_display("100"), Some(TagValue::Number(100.0)));
        assert_eq!(parse_display(""), None);
        assert_eq!(parse_display("   "), None);
        // Date strings stay text
        assert_eq!(
            parse_display("2023:06:01 10:00:00"),
            Some(TagValue::Text("2023:06:01 10:00:00".to_string()))
        );
    }

    #[test]
    fn garbage_bytes_decode_to_empty_map() {
        let decoder = NomExifDecoder::new();
        let tags = decoder.decode(b"definitely not an image").unwrap();
        assert!(tags.is_empty());

        let tags = decoder.decode(&[]).unwrap();
        assert!(tags.is_empty());
    }
}
