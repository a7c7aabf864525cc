use serde::{Deserialize, Serialize};

use super::lookup;
use super::tags::{RawTagMap, Tag, TagValue};

/// Structured metadata for one image, partitioned into the categories the
/// presentation layer shows.
///
/// Every field is optional: a field is populated if and only if its source
/// tag (or composite of tags, for GPS) was present and decoded to an
/// interpretable value. The normalizer never fabricates values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExifMetadata {
    pub camera: CameraInfo,
    pub lens: LensInfo,
    pub exposure: ExposureInfo,
    pub location: LocationInfo,
    pub technical: TechnicalInfo,
    /// Present only when the image embeds a thumbnail IFD.
    pub thumbnail: Option<ThumbnailInfo>,
    pub date_time: Option<String>,
    pub date_time_original: Option<String>,
    pub date_time_digitized: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

impl ExifMetadata {
    /// True when no field in any category is populated — the caller-side
    /// "this image carries no EXIF metadata" test.
    pub fn is_empty(&self) -> bool {
        self.camera.entries().is_empty()
            && self.lens.entries().is_empty()
            && self.exposure.entries().is_empty()
            && self.location.entries().is_empty()
            && self.technical.entries().is_empty()
            && self.thumbnail.is_none()
            && self.date_time.is_none()
            && self.date_time_original.is_none()
            && self.date_time_digitized.is_none()
            && self.width.is_none()
            && self.height.is_none()
    }
}

/// Camera body and firmware identification.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CameraInfo {
    pub make: Option<String>,
    pub model: Option<String>,
    pub software: Option<String>,
    pub serial_number: Option<String>,
    pub firmware_version: Option<String>,
    pub body_serial_number: Option<String>,
    pub lens_serial_number: Option<String>,
}

impl CameraInfo {
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        let mut entries = Vec::new();
        push(&mut entries, "make", &self.make);
        push(&mut entries, "model", &self.model);
        push(&mut entries, "software", &self.software);
        push(&mut entries, "serialNumber", &self.serial_number);
        push(&mut entries, "firmwareVersion", &self.firmware_version);
        push(&mut entries, "bodySerialNumber", &self.body_serial_number);
        push(&mut entries, "lensSerialNumber", &self.lens_serial_number);
        entries
    }
}

/// Lens identification and optics.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LensInfo {
    pub model: Option<String>,
    pub focal_length: Option<String>,
    pub focal_length_in_35mm: Option<String>,
    pub max_aperture: Option<String>,
    pub min_focal_length: Option<String>,
    pub max_focal_length: Option<String>,
    pub lens_info: Option<String>,
}

impl LensInfo {
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        let mut entries = Vec::new();
        push(&mut entries, "model", &self.model);
        push(&mut entries, "focalLength", &self.focal_length);
        push(&mut entries, "focalLengthIn35mm", &self.focal_length_in_35mm);
        push(&mut entries, "maxAperture", &self.max_aperture);
        push(&mut entries, "minFocalLength", &self.min_focal_length);
        push(&mut entries, "maxFocalLength", &self.max_focal_length);
        push(&mut entries, "lensInfo", &self.lens_info);
        entries
    }
}

/// Exposure settings at capture time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExposureInfo {
    pub aperture: Option<String>,
    pub shutter_speed: Option<String>,
    pub iso: Option<String>,
    pub exposure_mode: Option<String>,
    pub white_balance: Option<String>,
    pub flash: Option<String>,
    pub metering_mode: Option<String>,
    pub exposure_bias: Option<String>,
    pub exposure_program: Option<String>,
    pub scene_capture_type: Option<String>,
    pub gain_control: Option<String>,
    pub contrast: Option<String>,
    pub saturation: Option<String>,
    pub sharpness: Option<String>,
    pub digital_zoom_ratio: Option<String>,
    pub focal_plane_x_resolution: Option<String>,
    pub focal_plane_y_resolution: Option<String>,
    pub focal_plane_resolution_unit: Option<String>,
    pub subject_distance: Option<String>,
    pub subject_area: Option<String>,
    pub subject_distance_range: Option<String>,
}

impl ExposureInfo {
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        let mut entries = Vec::new();
        push(&mut entries, "aperture", &self.aperture);
        push(&mut entries, "shutterSpeed", &self.shutter_speed);
        push(&mut entries, "iso", &self.iso);
        push(&mut entries, "exposureMode", &self.exposure_mode);
        push(&mut entries, "whiteBalance", &self.white_balance);
        push(&mut entries, "flash", &self.flash);
        push(&mut entries, "meteringMode", &self.metering_mode);
        push(&mut entries, "exposureBias", &self.exposure_bias);
        push(&mut entries, "exposureProgram", &self.exposure_program);
        push(&mut entries, "sceneCaptureType", &self.scene_capture_type);
        push(&mut entries, "gainControl", &self.gain_control);
        push(&mut entries, "contrast", &self.contrast);
        push(&mut entries, "saturation", &self.saturation);
        push(&mut entries, "sharpness", &self.sharpness);
        push(&mut entries, "digitalZoomRatio", &self.digital_zoom_ratio);
        push(&mut entries, "focalPlaneXResolution", &self.focal_plane_x_resolution);
        push(&mut entries, "focalPlaneYResolution", &self.focal_plane_y_resolution);
        push(&mut entries, "focalPlaneResolutionUnit", &self.focal_plane_resolution_unit);
        push(&mut entries, "subjectDistance", &self.subject_distance);
        push(&mut entries, "subjectArea", &self.subject_area);
        push(&mut entries, "subjectDistanceRange", &self.subject_distance_range);
        entries
    }
}

/// GPS-derived location data.
///
/// `latitude`/`longitude` are signed decimal degrees and are populated only
/// as a pair, together with the combined human-readable `coordinates`
/// string.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LocationInfo {
    pub coordinates: Option<String>,
    pub altitude: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub gps_time_stamp: Option<String>,
    pub gps_date_stamp: Option<String>,
    pub gps_processing_method: Option<String>,
    pub gps_area_information: Option<String>,
    pub gps_differential: Option<String>,
    pub gps_img_direction: Option<String>,
    pub gps_img_direction_ref: Option<String>,
    pub gps_dest_bearing: Option<String>,
    pub gps_dest_bearing_ref: Option<String>,
    pub gps_speed: Option<String>,
    pub gps_speed_ref: Option<String>,
    pub gps_track: Option<String>,
    pub gps_track_ref: Option<String>,
}

impl LocationInfo {
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        let mut entries = Vec::new();
        push(&mut entries, "coordinates", &self.coordinates);
        push(&mut entries, "altitude", &self.altitude);
        if let Some(lat) = self.latitude {
            entries.push(("latitude", format!("{lat}")));
        }
        if let Some(lon) = self.longitude {
            entries.push(("longitude", format!("{lon}")));
        }
        push(&mut entries, "gpsTimeStamp", &self.gps_time_stamp);
        push(&mut entries, "gpsDateStamp", &self.gps_date_stamp);
        push(&mut entries, "gpsProcessingMethod", &self.gps_processing_method);
        push(&mut entries, "gpsAreaInformation", &self.gps_area_information);
        push(&mut entries, "gpsDifferential", &self.gps_differential);
        push(&mut entries, "gpsImgDirection", &self.gps_img_direction);
        push(&mut entries, "gpsImgDirectionRef", &self.gps_img_direction_ref);
        push(&mut entries, "gpsDestBearing", &self.gps_dest_bearing);
        push(&mut entries, "gpsDestBearingRef", &self.gps_dest_bearing_ref);
        push(&mut entries, "gpsSpeed", &self.gps_speed);
        push(&mut entries, "gpsSpeedRef", &self.gps_speed_ref);
        push(&mut entries, "gpsTrack", &self.gps_track);
        push(&mut entries, "gpsTrackRef", &self.gps_track_ref);
        entries
    }
}

/// File-level and sensor-level technical details.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TechnicalInfo {
    pub color_space: Option<String>,
    pub resolution: Option<String>,
    pub bit_depth: Option<String>,
    pub compression: Option<String>,
    pub photometric_interpretation: Option<String>,
    pub orientation: Option<String>,
    pub planar_configuration: Option<String>,
    pub ycbcr_coefficients: Option<String>,
    pub ycbcr_positioning: Option<String>,
    pub reference_black_white: Option<String>,
    pub pixel_x_dimension: Option<String>,
    pub pixel_y_dimension: Option<String>,
    pub compressed_bits_per_pixel: Option<String>,
    pub file_source: Option<String>,
    pub scene_type: Option<String>,
    pub custom_rendered: Option<String>,
    pub exif_version: Option<String>,
    pub flashpix_version: Option<String>,
    pub components_configuration: Option<String>,
    pub maker_note: Option<String>,
    pub user_comment: Option<String>,
    pub related_sound_file: Option<String>,
    pub image_unique_id: Option<String>,
    pub camera_owner_name: Option<String>,
    pub lens_make: Option<String>,
    pub copyright: Option<String>,
    pub artist: Option<String>,
    pub host_computer: Option<String>,
    pub sensing_method: Option<String>,
    pub cfa_pattern: Option<String>,
    pub spectral_sensitivity: Option<String>,
    pub oecf: Option<String>,
    pub spatial_frequency_response: Option<String>,
    pub noise: Option<String>,
    pub subject_location: Option<String>,
    pub exposure_index: Option<String>,
    pub interoperability_index: Option<String>,
    pub interoperability_version: Option<String>,
}

impl TechnicalInfo {
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        let mut entries = Vec::new();
        push(&mut entries, "colorSpace", &self.color_space);
        push(&mut entries, "resolution", &self.resolution);
        push(&mut entries, "bitDepth", &self.bit_depth);
        push(&mut entries, "compression", &self.compression);
        push(&mut entries, "photometricInterpretation", &self.photometric_interpretation);
        push(&mut entries, "orientation", &self.orientation);
        push(&mut entries, "planarConfiguration", &self.planar_configuration);
        push(&mut entries, "yCbCrCoefficients", &self.ycbcr_coefficients);
        push(&mut entries, "yCbCrPositioning", &self.ycbcr_positioning);
        push(&mut entries, "referenceBlackWhite", &self.reference_black_white);
        push(&mut entries, "pixelXDimension", &self.pixel_x_dimension);
        push(&mut entries, "pixelYDimension", &self.pixel_y_dimension);
        push(&mut entries, "compressedBitsPerPixel", &self.compressed_bits_per_pixel);
        push(&mut entries, "fileSource", &self.file_source);
        push(&mut entries, "sceneType", &self.scene_type);
        push(&mut entries, "customRendered", &self.custom_rendered);
        push(&mut entries, "exifVersion", &self.exif_version);
        push(&mut entries, "flashpixVersion", &self.flashpix_version);
        push(&mut entries, "componentsConfiguration", &self.components_configuration);
        push(&mut entries, "makerNote", &self.maker_note);
        push(&mut entries, "userComment", &self.user_comment);
        push(&mut entries, "relatedSoundFile", &self.related_sound_file);
        push(&mut entries, "imageUniqueID", &self.image_unique_id);
        push(&mut entries, "cameraOwnerName", &self.camera_owner_name);
        push(&mut entries, "lensMake", &self.lens_make);
        push(&mut entries, "copyright", &self.copyright);
        push(&mut entries, "artist", &self.artist);
        push(&mut entries, "hostComputer", &self.host_computer);
        push(&mut entries, "sensingMethod", &self.sensing_method);
        push(&mut entries, "cfaPattern", &self.cfa_pattern);
        push(&mut entries, "spectralSensitivity", &self.spectral_sensitivity);
        push(&mut entries, "oecf", &self.oecf);
        push(&mut entries, "spatialFrequencyResponse", &self.spatial_frequency_response);
        push(&mut entries, "noise", &self.noise);
        push(&mut entries, "subjectLocation", &self.subject_location);
        push(&mut entries, "exposureIndex", &self.exposure_index);
        push(&mut entries, "interoperabilityIndex", &self.interoperability_index);
        push(&mut entries, "interoperabilityVersion", &self.interoperability_version);
        entries
    }
}

/// Thumbnail IFD fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ThumbnailInfo {
    pub compression: Option<String>,
    pub x_resolution: Option<String>,
    pub y_resolution: Option<String>,
    pub resolution_unit: Option<String>,
    pub jpeg_interchange_format: Option<String>,
    pub jpeg_interchange_format_length: Option<String>,
}

impl ThumbnailInfo {
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        let mut entries = Vec::new();
        push(&mut entries, "compression", &self.compression);
        push(&mut entries, "xResolution", &self.x_resolution);
        push(&mut entries, "yResolution", &self.y_resolution);
        push(&mut entries, "resolutionUnit", &self.resolution_unit);
        push(&mut entries, "jpegInterchangeFormat", &self.jpeg_interchange_format);
        push(&mut entries, "jpegInterchangeFormatLength", &self.jpeg_interchange_format_length);
        entries
    }
}

fn push(entries: &mut Vec<(&'static str, String)>, key: &'static str, value: &Option<String>) {
    if let Some(v) = value {
        entries.push((key, v.clone()));
    }
}

/// Normalize a raw decoded tag mapping into structured metadata.
///
/// Total over its input: missing or uninterpretable tags leave the
/// corresponding field unpopulated, they never abort normalization of the
/// rest. An empty mapping yields an empty record ([`ExifMetadata::is_empty`]).
pub fn normalize(tags: &RawTagMap) -> ExifMetadata {
    ExifMetadata {
        camera: normalize_camera(tags),
        lens: normalize_lens(tags),
        exposure: normalize_exposure(tags),
        location: normalize_location(tags),
        technical: normalize_technical(tags),
        thumbnail: normalize_thumbnail(tags),
        date_time: tags.display(Tag::DateTime),
        date_time_original: tags.display(Tag::DateTimeOriginal),
        date_time_digitized: tags.display(Tag::DateTimeDigitized),
        width: dimension(tags, Tag::PixelXDimension, Tag::ExifImageWidth),
        height: dimension(tags, Tag::PixelYDimension, Tag::ExifImageHeight),
    }
}

fn normalize_camera(tags: &RawTagMap) -> CameraInfo {
    CameraInfo {
        make: tags.display(Tag::Make),
        model: tags.display(Tag::Model),
        software: tags.display(Tag::Software),
        serial_number: tags.display(Tag::SerialNumber),
        firmware_version: tags.display(Tag::FirmwareVersion),
        body_serial_number: tags.display(Tag::BodySerialNumber),
        lens_serial_number: tags.display(Tag::LensSerialNumber),
    }
}

fn normalize_lens(tags: &RawTagMap) -> LensInfo {
    LensInfo {
        model: tags.display(Tag::LensModel),
        focal_length: with_suffix(tags, Tag::FocalLength, "mm"),
        focal_length_in_35mm: with_suffix(tags, Tag::FocalLengthIn35mmFormat, "mm"),
        max_aperture: f_number(tags, Tag::MaxApertureValue),
        min_focal_length: with_suffix(tags, Tag::MinFocalLength, "mm"),
        max_focal_length: with_suffix(tags, Tag::MaxFocalLength, "mm"),
        lens_info: tags.display(Tag::LensInfo),
    }
}

fn normalize_exposure(tags: &RawTagMap) -> ExposureInfo {
    ExposureInfo {
        aperture: f_number(tags, Tag::FNumber),
        shutter_speed: tags.number(Tag::ExposureTime).and_then(format_shutter_speed),
        iso: tags
            .display(Tag::IsoSpeedRatings)
            .or_else(|| tags.display(Tag::Iso)),
        exposure_mode: enum_label(tags, Tag::ExposureMode, lookup::exposure_mode),
        white_balance: enum_label(tags, Tag::WhiteBalance, lookup::white_balance),
        flash: flash_label(tags.number(Tag::Flash)),
        metering_mode: enum_label(tags, Tag::MeteringMode, lookup::metering_mode),
        exposure_bias: with_suffix(tags, Tag::ExposureBiasValue, " EV"),
        exposure_program: enum_label(tags, Tag::ExposureProgram, lookup::exposure_program),
        scene_capture_type: enum_label(tags, Tag::SceneCaptureType, lookup::scene_capture_type),
        gain_control: enum_label(tags, Tag::GainControl, lookup::gain_control),
        contrast: enum_label(tags, Tag::Contrast, lookup::contrast),
        saturation: enum_label(tags, Tag::Saturation, lookup::saturation),
        sharpness: enum_label(tags, Tag::Sharpness, lookup::sharpness),
        digital_zoom_ratio: with_suffix(tags, Tag::DigitalZoomRatio, "x"),
        focal_plane_x_resolution: tags.display(Tag::FocalPlaneXResolution),
        focal_plane_y_resolution: tags.display(Tag::FocalPlaneYResolution),
        focal_plane_resolution_unit: enum_label(
            tags,
            Tag::FocalPlaneResolutionUnit,
            lookup::focal_plane_resolution_unit,
        ),
        subject_distance: with_suffix(tags, Tag::SubjectDistance, "m"),
        subject_area: tags.display(Tag::SubjectArea),
        subject_distance_range: enum_label(
            tags,
            Tag::SubjectDistanceRange,
            lookup::subject_distance_range,
        ),
    }
}

fn normalize_location(tags: &RawTagMap) -> LocationInfo {
    let mut location = LocationInfo {
        altitude: tags
            .number(Tag::GpsAltitude)
            .map(|v| format!("{v}m above sea level")),
        gps_time_stamp: tags.numbers(Tag::GpsTimeStamp).and_then(format_gps_time),
        gps_date_stamp: tags.display(Tag::GpsDateStamp),
        gps_processing_method: tags.display(Tag::GpsProcessingMethod),
        gps_area_information: tags.display(Tag::GpsAreaInformation),
        gps_differential: enum_label(tags, Tag::GpsDifferential, lookup::gps_differential),
        gps_img_direction: with_suffix(tags, Tag::GpsImgDirection, "°"),
        gps_img_direction_ref: tags.display(Tag::GpsImgDirectionRef),
        gps_dest_bearing: with_suffix(tags, Tag::GpsDestBearing, "°"),
        gps_dest_bearing_ref: tags.display(Tag::GpsDestBearingRef),
        gps_speed: tags.number(Tag::GpsSpeed).map(|v| format!("{v}")),
        gps_speed_ref: tags.display(Tag::GpsSpeedRef),
        gps_track: with_suffix(tags, Tag::GpsTrack, "°"),
        gps_track_ref: tags.display(Tag::GpsTrackRef),
        ..Default::default()
    };

    let lat_ref = tags.text(Tag::GpsLatitudeRef);
    let lon_ref = tags.text(Tag::GpsLongitudeRef);
    let lat = resolve_coordinate(tags.get(Tag::GpsLatitude), lat_ref);
    let lon = resolve_coordinate(tags.get(Tag::GpsLongitude), lon_ref);

    // Latitude and longitude populate only as a pair.
    if let (Some(lat), Some(lon)) = (lat, lon) {
        location.latitude = Some(lat);
        location.longitude = Some(lon);
        location.coordinates = Some(format_coordinates(lat, lat_ref, lon, lon_ref));
    }

    location
}

fn normalize_technical(tags: &RawTagMap) -> TechnicalInfo {
    TechnicalInfo {
        color_space: enum_label(tags, Tag::ColorSpace, lookup::color_space),
        resolution: tags.display(Tag::XResolution).map(|v| format!("{v} DPI")),
        bit_depth: tags
            .display(Tag::BitsPerSample)
            .map(|v| format!("{v} bits per channel")),
        compression: enum_label(tags, Tag::Compression, lookup::compression),
        photometric_interpretation: enum_label(
            tags,
            Tag::PhotometricInterpretation,
            lookup::photometric_interpretation,
        ),
        orientation: enum_label(tags, Tag::Orientation, lookup::orientation),
        planar_configuration: enum_label(
            tags,
            Tag::PlanarConfiguration,
            lookup::planar_configuration,
        ),
        ycbcr_coefficients: tags.display(Tag::YCbCrCoefficients),
        ycbcr_positioning: enum_label(tags, Tag::YCbCrPositioning, lookup::ycbcr_positioning),
        reference_black_white: tags.display(Tag::ReferenceBlackWhite),
        pixel_x_dimension: tags.display(Tag::PixelXDimension),
        pixel_y_dimension: tags.display(Tag::PixelYDimension),
        compressed_bits_per_pixel: tags.display(Tag::CompressedBitsPerPixel),
        file_source: enum_label(tags, Tag::FileSource, lookup::file_source),
        scene_type: enum_label(tags, Tag::SceneType, lookup::scene_type),
        custom_rendered: enum_label(tags, Tag::CustomRendered, lookup::custom_rendered),
        exif_version: tags.display(Tag::ExifVersion),
        flashpix_version: tags.display(Tag::FlashpixVersion),
        components_configuration: tags.display(Tag::ComponentsConfiguration),
        // Raw maker-note content is never surfaced, only its presence.
        maker_note: tags.get(Tag::MakerNote).map(|_| "Present".to_string()),
        user_comment: tags.display(Tag::UserComment),
        related_sound_file: tags.display(Tag::RelatedSoundFile),
        image_unique_id: tags.display(Tag::ImageUniqueId),
        camera_owner_name: tags.display(Tag::CameraOwnerName),
        lens_make: tags.display(Tag::LensMake),
        copyright: tags.display(Tag::Copyright),
        artist: tags.display(Tag::Artist),
        host_computer: tags.display(Tag::HostComputer),
        sensing_method: enum_label(tags, Tag::SensingMethod, lookup::sensing_method),
        cfa_pattern: tags.display(Tag::CfaPattern),
        spectral_sensitivity: tags.display(Tag::SpectralSensitivity),
        oecf: tags.display(Tag::Oecf),
        spatial_frequency_response: tags.display(Tag::SpatialFrequencyResponse),
        noise: tags.display(Tag::Noise),
        subject_location: tags.display(Tag::SubjectLocation),
        exposure_index: tags.display(Tag::ExposureIndex),
        interoperability_index: tags.display(Tag::InteroperabilityIndex),
        interoperability_version: tags.display(Tag::InteroperabilityVersion),
    }
}

fn normalize_thumbnail(tags: &RawTagMap) -> Option<ThumbnailInfo> {
    let thumbnail = ThumbnailInfo {
        compression: tags.display(Tag::ThumbnailCompression),
        x_resolution: tags.display(Tag::ThumbnailXResolution),
        y_resolution: tags.display(Tag::ThumbnailYResolution),
        resolution_unit: tags.display(Tag::ThumbnailResolutionUnit),
        jpeg_interchange_format: tags.display(Tag::ThumbnailJpegInterchangeFormat),
        jpeg_interchange_format_length: tags.display(Tag::ThumbnailJpegInterchangeFormatLength),
    };
    if thumbnail.entries().is_empty() {
        None
    } else {
        Some(thumbnail)
    }
}

/// Exposure time in seconds to a conventional shutter-speed string:
/// `2` → `"2s"`, `0.004` → `"1/250s"`. Non-positive values are not
/// interpretable.
fn format_shutter_speed(seconds: f64) -> Option<String> {
    if seconds >= 1.0 {
        Some(format!("{seconds}s"))
    } else if seconds > 0.0 {
        Some(format!("1/{}s", (1.0 / seconds).round()))
    } else {
        None
    }
}

fn f_number(tags: &RawTagMap, tag: Tag) -> Option<String> {
    tags.number(tag).map(|v| format!("f/{v}"))
}

fn with_suffix(tags: &RawTagMap, tag: Tag, suffix: &str) -> Option<String> {
    tags.number(tag).map(|v| format!("{v}{suffix}"))
}

/// Look up an enumerated code in its label table. Fractional or unknown
/// codes leave the field unpopulated.
fn enum_label(
    tags: &RawTagMap,
    tag: Tag,
    table: fn(i64) -> Option<&'static str>,
) -> Option<String> {
    let code = tags.number(tag)?;
    if !code.is_finite() || code.fract() != 0.0 {
        return None;
    }
    table(code as i64).map(str::to_string)
}

/// Flash is a bit field; bit 0 says whether the flash fired.
fn flash_label(value: Option<f64>) -> Option<String> {
    let bits = value? as i64;
    let label = if bits & 0x01 != 0 {
        "Flash fired"
    } else {
        "No flash"
    };
    Some(label.to_string())
}

/// A GPS coordinate given either as a degrees/minutes/seconds triple or an
/// already-decimal value, with an optional hemisphere reference letter.
/// `S`/`W` flip the sign.
fn resolve_coordinate(value: Option<&TagValue>, reference: Option<&str>) -> Option<f64> {
    let decimal = match value? {
        TagValue::Numbers(dms) => {
            if dms.len() < 3 {
                return None;
            }
            dms[0] + dms[1] / 60.0 + dms[2] / 3600.0
        }
        TagValue::Number(decimal) => *decimal,
        TagValue::Text(_) => return None,
    };
    if !decimal.is_finite() {
        return None;
    }
    if matches!(reference, Some("S") | Some("W")) {
        Some(-decimal)
    } else {
        Some(decimal)
    }
}

fn format_coordinates(lat: f64, lat_ref: Option<&str>, lon: f64, lon_ref: Option<&str>) -> String {
    let lat_letter = lat_ref.unwrap_or(if lat >= 0.0 { "N" } else { "S" });
    let lon_letter = lon_ref.unwrap_or(if lon >= 0.0 { "E" } else { "W" });
    format!(
        "{:.4}°{}, {:.4}°{}",
        lat.abs(),
        lat_letter,
        lon.abs(),
        lon_letter
    )
}

/// Hours/minutes/seconds triple to zero-padded `HH:MM:SS`, seconds floored.
fn format_gps_time(time: &[f64]) -> Option<String> {
    if time.len() < 3 {
        return None;
    }
    Some(format!(
        "{:02}:{:02}:{:02}",
        time[0] as i64,
        time[1] as i64,
        time[2].floor() as i64
    ))
}

fn dimension(tags: &RawTagMap, primary: Tag, fallback: Tag) -> Option<u32> {
    tags.number(primary)
        .or_else(|| tags.number(fallback))
        .and_then(|v| (v.is_finite() && v >= 0.0).then(|| v as u32))
}
