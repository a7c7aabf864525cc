use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The EXIF/TIFF/GPS tags the normalizer knows how to interpret.
///
/// This is a closed enumeration: decoders map whatever they find onto these
/// names and drop the rest. Variant names follow the standard tag names
/// (see [`Tag::name`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tag {
    // Camera / device
    Make,
    Model,
    Software,
    SerialNumber,
    FirmwareVersion,
    BodySerialNumber,
    LensSerialNumber,
    HostComputer,
    Artist,
    Copyright,
    CameraOwnerName,

    // Lens
    LensMake,
    LensModel,
    LensInfo,
    FocalLength,
    FocalLengthIn35mmFormat,
    MaxApertureValue,
    MinFocalLength,
    MaxFocalLength,

    // Exposure
    FNumber,
    ExposureTime,
    IsoSpeedRatings,
    Iso,
    ExposureMode,
    WhiteBalance,
    Flash,
    MeteringMode,
    ExposureBiasValue,
    ExposureProgram,
    SceneCaptureType,
    GainControl,
    Contrast,
    Saturation,
    Sharpness,
    DigitalZoomRatio,
    FocalPlaneXResolution,
    FocalPlaneYResolution,
    FocalPlaneResolutionUnit,
    SubjectDistance,
    SubjectArea,
    SubjectDistanceRange,

    // GPS
    GpsLatitude,
    GpsLatitudeRef,
    GpsLongitude,
    GpsLongitudeRef,
    GpsAltitude,
    GpsTimeStamp,
    GpsDateStamp,
    GpsProcessingMethod,
    GpsAreaInformation,
    GpsDifferential,
    GpsImgDirection,
    GpsImgDirectionRef,
    GpsDestBearing,
    GpsDestBearingRef,
    GpsSpeed,
    GpsSpeedRef,
    GpsTrack,
    GpsTrackRef,

    // Technical
    ColorSpace,
    XResolution,
    BitsPerSample,
    Compression,
    PhotometricInterpretation,
    Orientation,
    PlanarConfiguration,
    YCbCrCoefficients,
    YCbCrPositioning,
    ReferenceBlackWhite,
    PixelXDimension,
    PixelYDimension,
    CompressedBitsPerPixel,
    FileSource,
    SceneType,
    CustomRendered,
    ExifVersion,
    FlashpixVersion,
    ComponentsConfiguration,
    MakerNote,
    UserComment,
    RelatedSoundFile,
    ImageUniqueId,
    SensingMethod,
    CfaPattern,
    SpectralSensitivity,
    Oecf,
    SpatialFrequencyResponse,
    Noise,
    SubjectLocation,
    ExposureIndex,
    InteroperabilityIndex,
    InteroperabilityVersion,

    // Dates and dimensions
    DateTime,
    DateTimeOriginal,
    DateTimeDigitized,
    ExifImageWidth,
    ExifImageHeight,

    // Thumbnail IFD
    ThumbnailCompression,
    ThumbnailXResolution,
    ThumbnailYResolution,
    ThumbnailResolutionUnit,
    ThumbnailJpegInterchangeFormat,
    ThumbnailJpegInterchangeFormatLength,
}

impl Tag {
    /// The canonical EXIF tag name.
    pub fn name(&self) -> &'static str {
        match self {
            Tag::Make => "Make",
            Tag::Model => "Model",
            Tag::Software => "Software",
            Tag::SerialNumber => "SerialNumber",
            Tag::FirmwareVersion => "FirmwareVersion",
            Tag::BodySerialNumber => "BodySerialNumber",
            Tag::LensSerialNumber => "LensSerialNumber",
            Tag::HostComputer => "HostComputer",
            Tag::Artist => "Artist",
            Tag::Copyright => "Copyright",
            Tag::CameraOwnerName => "CameraOwnerName",
            Tag::LensMake => "LensMake",
            Tag::LensModel => "LensModel",
            Tag::LensInfo => "LensInfo",
            Tag::FocalLength => "FocalLength",
            Tag::FocalLengthIn35mmFormat => "FocalLengthIn35mmFormat",
            Tag::MaxApertureValue => "MaxApertureValue",
            Tag::MinFocalLength => "MinFocalLength",
            Tag::MaxFocalLength => "MaxFocalLength",
            Tag::FNumber => "FNumber",
            Tag::ExposureTime => "ExposureTime",
            Tag::IsoSpeedRatings => "ISOSpeedRatings",
            Tag::Iso => "ISO",
            Tag::ExposureMode => "ExposureMode",
            Tag::WhiteBalance => "WhiteBalance",
            Tag::Flash => "Flash",
            Tag::MeteringMode => "MeteringMode",
            Tag::ExposureBiasValue => "ExposureBiasValue",
            Tag::ExposureProgram => "ExposureProgram",
            Tag::SceneCaptureType => "SceneCaptureType",
            Tag::GainControl => "GainControl",
            Tag::Contrast => "Contrast",
            Tag::Saturation => "Saturation",
            Tag::Sharpness => "Sharpness",
            Tag::DigitalZoomRatio => "DigitalZoomRatio",
            Tag::FocalPlaneXResolution => "FocalPlaneXResolution",
            Tag::FocalPlaneYResolution => "FocalPlaneYResolution",
            Tag::FocalPlaneResolutionUnit => "FocalPlaneResolutionUnit",
            Tag::SubjectDistance => "SubjectDistance",
            Tag::SubjectArea => "SubjectArea",
            Tag::SubjectDistanceRange => "SubjectDistanceRange",
            Tag::GpsLatitude => "GPSLatitude",
            Tag::GpsLatitudeRef => "GPSLatitudeRef",
            Tag::GpsLongitude => "GPSLongitude",
            Tag::GpsLongitudeRef => "GPSLongitudeRef",
            Tag::GpsAltitude => "GPSAltitude",
            Tag::GpsTimeStamp => "GPSTimeStamp",
            Tag::GpsDateStamp => "GPSDateStamp",
            Tag::GpsProcessingMethod => "GPSProcessingMethod",
            Tag::GpsAreaInformation => "GPSAreaInformation",
            Tag::GpsDifferential => "GPSDifferential",
            Tag::GpsImgDirection => "GPSImgDirection",
            Tag::GpsImgDirectionRef => "GPSImgDirectionRef",
            Tag::GpsDestBearing => "GPSDestBearing",
            Tag::GpsDestBearingRef => "GPSDestBearingRef",
            Tag::GpsSpeed => "GPSSpeed",
            Tag::GpsSpeedRef => "GPSSpeedRef",
            Tag::GpsTrack => "GPSTrack",
            Tag::GpsTrackRef => "GPSTrackRef",
            Tag::ColorSpace => "ColorSpace",
            Tag::XResolution => "XResolution",
            Tag::BitsPerSample => "BitsPerSample",
            Tag::Compression => "Compression",
            Tag::PhotometricInterpretation => "PhotometricInterpretation",
            Tag::Orientation => "Orientation",
            Tag::PlanarConfiguration => "PlanarConfiguration",
            Tag::YCbCrCoefficients => "YCbCrCoefficients",
            Tag::YCbCrPositioning => "YCbCrPositioning",
            Tag::ReferenceBlackWhite => "ReferenceBlackWhite",
            Tag::PixelXDimension => "PixelXDimension",
            Tag::PixelYDimension => "PixelYDimension",
            Tag::CompressedBitsPerPixel => "CompressedBitsPerPixel",
            Tag::FileSource => "FileSource",
            Tag::SceneType => "SceneType",
            Tag::CustomRendered => "CustomRendered",
            Tag::ExifVersion => "ExifVersion",
            Tag::FlashpixVersion => "FlashpixVersion",
            Tag::ComponentsConfiguration => "ComponentsConfiguration",
            Tag::MakerNote => "MakerNote",
            Tag::UserComment => "UserComment",
            Tag::RelatedSoundFile => "RelatedSoundFile",
            Tag::ImageUniqueId => "ImageUniqueID",
            Tag::SensingMethod => "SensingMethod",
            Tag::CfaPattern => "CFAPattern",
            Tag::SpectralSensitivity => "SpectralSensitivity",
            Tag::Oecf => "OECF",
            Tag::SpatialFrequencyResponse => "SpatialFrequencyResponse",
            Tag::Noise => "Noise",
            Tag::SubjectLocation => "SubjectLocation",
            Tag::ExposureIndex => "ExposureIndex",
            Tag::InteroperabilityIndex => "InteroperabilityIndex",
            Tag::InteroperabilityVersion => "InteroperabilityVersion",
            Tag::DateTime => "DateTime",
            Tag::DateTimeOriginal => "DateTimeOriginal",
            Tag::DateTimeDigitized => "DateTimeDigitized",
            Tag::ExifImageWidth => "ExifImageWidth",
            Tag::ExifImageHeight => "ExifImageHeight",
            Tag::ThumbnailCompression => "ThumbnailCompression",
            Tag::ThumbnailXResolution => "ThumbnailXResolution",
            Tag::ThumbnailYResolution => "ThumbnailYResolution",
            Tag::ThumbnailResolutionUnit => "ThumbnailResolutionUnit",
            Tag::ThumbnailJpegInterchangeFormat => "ThumbnailJPEGInterchangeFormat",
            Tag::ThumbnailJpegInterchangeFormatLength => "ThumbnailJPEGInterchangeFormatLength",
        }
    }
}

/// A raw decoded tag value.
///
/// EXIF values reach us in three shapes: a single number (rationals already
/// reduced to floats), a text string, or an ordered numeric sequence (GPS
/// coordinate triples, timestamps, matrix coefficients).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TagValue {
    Number(f64),
    Text(String),
    Numbers(Vec<f64>),
}

impl TagValue {
    /// The value as a single number, if it has that shape.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            TagValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// The value as text, if it has that shape.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            TagValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// The value as a numeric sequence, if it has that shape.
    pub fn as_numbers(&self) -> Option<&[f64]> {
        match self {
            TagValue::Numbers(ns) => Some(ns),
            _ => None,
        }
    }

    /// Stringify the value as-is: numbers without a trailing `.0`,
    /// sequences joined with `", "`.
    pub fn display(&self) -> String {
        match self {
            TagValue::Number(n) => format!("{n}"),
            TagValue::Text(s) => s.clone(),
            TagValue::Numbers(ns) => ns
                .iter()
                .map(|n| format!("{n}"))
                .collect::<Vec<_>>()
                .join(", "),
        }
    }
}

impl From<f64> for TagValue {
    fn from(n: f64) -> Self {
        TagValue::Number(n)
    }
}

impl From<&str> for TagValue {
    fn from(s: &str) -> Self {
        TagValue::Text(s.to_string())
    }
}

impl From<String> for TagValue {
    fn from(s: String) -> Self {
        TagValue::Text(s)
    }
}

impl From<Vec<f64>> for TagValue {
    fn from(ns: Vec<f64>) -> Self {
        TagValue::Numbers(ns)
    }
}

/// The raw tag mapping produced by a decoder, consumed by the normalizer.
///
/// Any tag may be absent. The shape-checked accessors return `Some` only
/// when the tag is present with the requested shape — a value of `0` is a
/// legitimate populated value and is never conflated with "absent".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawTagMap {
    entries: HashMap<Tag, TagValue>,
}

impl RawTagMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, tag: Tag, value: impl Into<TagValue>) {
        self.entries.insert(tag, value.into());
    }

    pub fn get(&self, tag: Tag) -> Option<&TagValue> {
        self.entries.get(&tag)
    }

    pub fn contains(&self, tag: Tag) -> bool {
        self.entries.contains_key(&tag)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// The tag's value as a single number.
    pub fn number(&self, tag: Tag) -> Option<f64> {
        self.get(tag).and_then(TagValue::as_number)
    }

    /// The tag's value as text.
    pub fn text(&self, tag: Tag) -> Option<&str> {
        self.get(tag).and_then(TagValue::as_text)
    }

    /// The tag's value as a numeric sequence.
    pub fn numbers(&self, tag: Tag) -> Option<&[f64]> {
        self.get(tag).and_then(TagValue::as_numbers)
    }

    /// The tag's value stringified as-is, whatever its shape.
    pub fn display(&self, tag: Tag) -> Option<String> {
        self.get(tag).map(TagValue::display)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_are_shape_strict() {
        let mut tags = RawTagMap::new();
        tags.insert(Tag::Iso, 100.0);
        tags.insert(Tag::Make, "Canon");
        tags.insert(Tag::GpsLatitude, vec![40.0, 26.0, 46.0]);

        assert_eq!(tags.number(Tag::Iso), Some(100.0));
        assert_eq!(tags.text(Tag::Iso), None);
        assert_eq!(tags.text(Tag::Make), Some("Canon"));
        assert_eq!(tags.number(Tag::Make), None);
        assert_eq!(tags.numbers(Tag::GpsLatitude), Some(&[40.0, 26.0, 46.0][..]));
        assert_eq!(tags.number(Tag::GpsLatitude), None);
    }

    #[test]
    fn zero_is_a_populated_value() {
        let mut tags = RawTagMap::new();
        tags.insert(Tag::Contrast, 0.0);
        tags.insert(Tag::ExposureBiasValue, 0.0);

        assert_eq!(tags.number(Tag::Contrast), Some(0.0));
        assert_eq!(tags.number(Tag::ExposureBiasValue), Some(0.0));
        assert_eq!(tags.number(Tag::Sharpness), None);
    }

    #[test]
    fn display_trims_integral_floats() {
        assert_eq!(TagValue::Number(250.0).display(), "250");
        assert_eq!(TagValue::Number(2.5).display(), "2.5");
        assert_eq!(TagValue::Number(-0.33).display(), "-0.33");
    }

    #[test]
    fn display_joins_sequences() {
        let v = TagValue::Numbers(vec![0.299, 0.587, 0.114]);
        assert_eq!(v.display(), "0.299, 0.587, 0.114");
        let v = TagValue::Numbers(vec![1.0, 2.0]);
        assert_eq!(v.display(), "1, 2");
    }

    #[test]
    fn missing_tags_are_absent() {
        let tags = RawTagMap::new();
        assert!(tags.is_empty());
        assert_eq!(tags.get(Tag::Make), None);
        assert_eq!(tags.display(Tag::Orientation), None);
    }
}
