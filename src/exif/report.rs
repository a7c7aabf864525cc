//! Plain-text metadata report generation.
//!
//! The report is a single multi-line string: a fixed header, optional
//! date/dimension lines, then one block per non-empty category. It is
//! regenerated on demand and never persisted by the library.

use chrono::{DateTime, Local};
use std::fmt::Write as _;
use std::path::Path;

use super::normalize::ExifMetadata;

/// Render a human-readable text report for one image's metadata.
///
/// The `Generated:` header line carries the current local time; everything
/// else is a pure function of the record and the filename.
pub fn render_report(metadata: &ExifMetadata, filename: &str) -> String {
    render_report_at(metadata, filename, Local::now())
}

fn render_report_at(metadata: &ExifMetadata, filename: &str, generated: DateTime<Local>) -> String {
    let sections: [(&str, Vec<(&'static str, String)>); 6] = [
        ("Camera Information", metadata.camera.entries()),
        ("Lens Information", metadata.lens.entries()),
        ("Exposure Settings", metadata.exposure.entries()),
        ("Location Data", metadata.location.entries()),
        ("Technical Details", metadata.technical.entries()),
        (
            "Thumbnail Information",
            metadata
                .thumbnail
                .as_ref()
                .map(|t| t.entries())
                .unwrap_or_default(),
        ),
    ];

    let mut report = String::new();
    report.push_str("EXIF Metadata Report\n");
    report.push_str("========================\n");
    let _ = writeln!(report, "File: {filename}");
    let _ = writeln!(report, "Generated: {}", generated.format("%Y-%m-%d %H:%M:%S"));
    report.push('\n');

    if let Some(date) = metadata
        .date_time_original
        .as_deref()
        .or(metadata.date_time.as_deref())
    {
        let _ = writeln!(report, "Date Taken: {date}");
    }
    if let Some(date) = metadata.date_time_digitized.as_deref() {
        let _ = writeln!(report, "Date Digitized: {date}");
    }
    if let (Some(width), Some(height)) = (metadata.width, metadata.height) {
        let _ = writeln!(report, "Dimensions: {width} × {height}");
    }
    report.push('\n');

    for (title, entries) in sections {
        if entries.is_empty() {
            continue;
        }
        let _ = writeln!(report, "{title}");
        let _ = writeln!(report, "{}", "-".repeat(title.len()));
        for (key, value) in entries {
            let _ = writeln!(report, "{}: {value}", humanize_label(key));
        }
        report.push('\n');
    }

    report
}

/// Expand a camelCase field key into a display label: a space before each
/// internal capital, first letter capitalized. `dateTimeOriginal` becomes
/// `Date Time Original`.
pub fn humanize_label(key: &str) -> String {
    let mut label = String::with_capacity(key.len() + 4);
    for (i, ch) in key.chars().enumerate() {
        if i == 0 {
            label.extend(ch.to_uppercase());
        } else if ch.is_ascii_uppercase() {
            label.push(' ');
            label.push(ch);
        } else {
            label.push(ch);
        }
    }
    label
}

/// Suggested report filename for an image: `exif-report-<stem>.txt`.
pub fn report_filename(image_filename: &str) -> String {
    let stem = Path::new(image_filename)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(image_filename);
    format!("exif-report-{stem}.txt")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exif::normalize::{normalize, ExifMetadata};
    use crate::exif::tags::{RawTagMap, Tag};
    use chrono::TimeZone;

    fn fixed_time() -> chrono::DateTime<Local> {
        Local.with_ymd_and_hms(2024, 3, 15, 12, 30, 45).unwrap()
    }

    #[test]
    fn single_field_report() {
        let mut metadata = ExifMetadata::default();
        metadata.camera.make = Some("Canon".to_string());

        let report = render_report_at(&metadata, "photo.jpg", fixed_time());
        let expected = "EXIF Metadata Report\n\
                        ========================\n\
                        File: photo.jpg\n\
                        Generated: 2024-03-15 12:30:45\n\
                        \n\
                        \n\
                        Camera Information\n\
                        ------------------\n\
                        Make: Canon\n\
                        \n";
        assert_eq!(report, expected);
    }

    #[test]
    fn empty_categories_are_omitted() {
        let mut metadata = ExifMetadata::default();
        metadata.exposure.iso = Some("100".to_string());

        let report = render_report(&metadata, "img.jpg");
        assert!(report.contains("Exposure Settings"));
        assert!(!report.contains("Camera Information"));
        assert!(!report.contains("Lens Information"));
        assert!(!report.contains("Location Data"));
        assert!(!report.contains("Technical Details"));
        assert!(!report.contains("Thumbnail Information"));
    }

    #[test]
    fn underline_matches_title_length() {
        let mut metadata = ExifMetadata::default();
        metadata.lens.model = Some("EF 50mm".to_string());

        let report = render_report(&metadata, "img.jpg");
        assert!(report.contains("Lens Information\n----------------\n"));
    }

    #[test]
    fn date_taken_prefers_original() {
        let mut metadata = ExifMetadata::default();
        metadata.date_time = Some("2023:06:01 10:00:00".to_string());
        metadata.date_time_original = Some("2023:05:31 18:22:10".to_string());
        metadata.date_time_digitized = Some("2023:05:31 18:22:11".to_string());

        let report = render_report(&metadata, "img.jpg");
        assert!(report.contains("Date Taken: 2023:05:31 18:22:10"));
        assert!(report.contains("Date Digitized: 2023:05:31 18:22:11"));
        assert!(!report.contains("2023:06:01 10:00:00"));
    }

    #[test]
    fn date_taken_falls_back_to_date_time() {
        let mut metadata = ExifMetadata::default();
        metadata.date_time = Some("2023:06:01 10:00:00".to_string());

        let report = render_report(&metadata, "img.jpg");
        assert!(report.contains("Date Taken: 2023:06:01 10:00:00"));
    }

    #[test]
    fn dimensions_line_requires_both() {
        let mut metadata = ExifMetadata::default();
        metadata.width = Some(4000);
        metadata.height = Some(3000);
        let report = render_report(&metadata, "img.jpg");
        assert!(report.contains("Dimensions: 4000 × 3000"));

        let mut metadata = ExifMetadata::default();
        metadata.width = Some(4000);
        let report = render_report(&metadata, "img.jpg");
        assert!(!report.contains("Dimensions"));
    }

    #[test]
    fn fields_render_in_declared_order() {
        let mut map = RawTagMap::new();
        map.insert(Tag::Make, "Canon");
        map.insert(Tag::Model, "EOS R5");
        map.insert(Tag::FNumber, 1.8);
        map.insert(Tag::ExposureTime, 0.004);
        let metadata = normalize(&map);

        let report = render_report(&metadata, "img.jpg");
        let make_at = report.find("Make: Canon").unwrap();
        let model_at = report.find("Model: EOS R5").unwrap();
        let aperture_at = report.find("Aperture: f/1.8").unwrap();
        let shutter_at = report.find("Shutter Speed: 1/250s").unwrap();
        assert!(make_at < model_at);
        assert!(model_at < aperture_at);
        assert!(aperture_at < shutter_at);
    }

    #[test]
    fn humanize_label_rule() {
        assert_eq!(humanize_label("make"), "Make");
        assert_eq!(humanize_label("dateTimeOriginal"), "Date Time Original");
        assert_eq!(humanize_label("shutterSpeed"), "Shutter Speed");
        assert_eq!(humanize_label("iso"), "Iso");
        assert_eq!(humanize_label("gpsTimeStamp"), "Gps Time Stamp");
        assert_eq!(humanize_label("imageUniqueID"), "Image Unique I D");
        assert_eq!(humanize_label("focalLengthIn35mm"), "Focal Length In35mm");
    }

    #[test]
    fn report_filename_strips_extension() {
        assert_eq!(report_filename("photo.jpg"), "exif-report-photo.txt");
        assert_eq!(report_filename("IMG_0042.HEIC"), "exif-report-IMG_0042.txt");
        assert_eq!(report_filename("no-extension"), "exif-report-no-extension.txt");
        assert_eq!(report_filename("archive.tar.gz"), "exif-report-archive.tar.txt");
    }

    #[test]
    fn location_block_includes_pair_and_coordinates() {
        let mut map = RawTagMap::new();
        map.insert(Tag::GpsLatitude, vec![40.0, 26.0, 46.0]);
        map.insert(Tag::GpsLatitudeRef, "N");
        map.insert(Tag::GpsLongitude, vec![73.0, 58.0, 0.0]);
        map.insert(Tag::GpsLongitudeRef, "W");
        let metadata = normalize(&map);

        let report = render_report(&metadata, "img.jpg");
        assert!(report.contains("Location Data"));
        assert!(report.contains("Coordinates: 40.4461°N, 73.9667°W"));
        assert!(report.contains("Latitude: 40.4461"));
        assert!(report.contains("Longitude: -73.96"));
    }
}
