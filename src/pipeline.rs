use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::exif::{normalize, render_report, report_filename, ExifDecoder, ExifMetadata};

/// Image extensions the decoder understands.
const IMAGE_EXTENSIONS: &[&str] = &[
    "jpg", "jpeg",
    "png", "webp",
    "tif", "tiff",
    "heic", "heif",
    "avif",
    // RAW formats carry a standard EXIF block
    "cr3", "cr2", "dng", "nef", "arw", "raf", "orf", "rw2", "pef", "srw",
];

/// The result of inspecting a single image.
///
/// `metadata` is `None` when the image carried no EXIF data (or the format
/// was not recognized) — that is not an error. `error` is set only for
/// infrastructure failures such as an unreadable file.
#[derive(Debug)]
pub struct ProcessResult {
    pub path: PathBuf,
    pub metadata: Option<ExifMetadata>,
    pub error: Option<String>,
}

/// Collect supported image files from the given paths.
///
/// Accepts a mix of file paths and directory paths. Directories are walked
/// recursively (following symlinks); only files with supported image
/// extensions are included.
pub fn collect_images(paths: &[PathBuf]) -> Vec<PathBuf> {
    let mut images = Vec::new();

    for path in paths {
        if path.is_file() {
            if is_supported_image(path) {
                images.push(path.clone());
            } else {
                log::warn!("Skipping unsupported file: {}", path.display());
            }
        } else if path.is_dir() {
            for entry in WalkDir::new(path)
                .follow_links(true)
                .into_iter()
                .filter_map(|e| e.ok())
            {
                let p = entry.path();
                if p.is_file() && is_supported_image(p) {
                    images.push(p.to_path_buf());
                }
            }
        } else {
            log::warn!("Path does not exist: {}", path.display());
        }
    }

    images
}

/// Check if a file has a supported image extension.
fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| IMAGE_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

/// Inspect a single image: read its bytes, decode the raw tag mapping, and
/// normalize it into structured metadata.
///
/// One image at a time; each invocation is independent and stateless. An
/// empty tag mapping is reported as `metadata: None` — the "no EXIF data"
/// outcome — rather than an error.
pub fn process_image(path: &Path, decoder: &dyn ExifDecoder) -> ProcessResult {
    let mut result = ProcessResult {
        path: path.to_path_buf(),
        metadata: None,
        error: None,
    };

    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            result.error = Some(format!("Failed to read file: {e}"));
            return result;
        }
    };

    let tags = match decoder.decode(&bytes) {
        Ok(tags) => tags,
        Err(e) => {
            log::warn!("Decoder failed on {}: {e}", path.display());
            return result;
        }
    };

    if tags.is_empty() {
        log::debug!("No EXIF data found in {}", path.display());
        return result;
    }

    result.metadata = Some(normalize(&tags));
    result
}

/// Render the text report for a processed image and write it as
/// `exif-report-<stem>.txt`, next to the image or into `dir`.
///
/// Returns the path written. Errors if the image had no metadata.
pub fn write_report(result: &ProcessResult, dir: Option<&Path>) -> Result<PathBuf> {
    let metadata = result
        .metadata
        .as_ref()
        .context("Image has no EXIF metadata to report")?;

    let filename = result
        .path
        .file_name()
        .and_then(|n| n.to_str())
        .context("Image path has no filename")?;

    let report = render_report(metadata, filename);

    let report_path = dir
        .unwrap_or_else(|| result.path.parent().unwrap_or(Path::new(".")))
        .join(report_filename(filename));

    std::fs::write(&report_path, report)
        .with_context(|| format!("Failed to write report to {}", report_path.display()))?;
    log::info!("Report written: {}", report_path.display());

    Ok(report_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exif::{NomExifDecoder, RawTagMap, Tag};
    use std::fs;
    use tempfile::TempDir;

    struct FixtureDecoder(RawTagMap);

    impl ExifDecoder for FixtureDecoder {
        fn decode(&self, _bytes: &[u8]) -> Result<RawTagMap> {
            Ok(self.0.clone())
        }
    }

    // ── is_supported_image ───────────────────────────────────────────

    #[test]
    fn supported_image_extensions() {
        assert!(is_supported_image(Path::new("photo.jpg")));
        assert!(is_supported_image(Path::new("photo.JPEG")));
        assert!(is_supported_image(Path::new("photo.png")));
        assert!(is_supported_image(Path::new("photo.webp")));
        assert!(is_supported_image(Path::new("photo.tif")));
        assert!(is_supported_image(Path::new("photo.heic")));
        assert!(is_supported_image(Path::new("photo.cr3")));
        assert!(is_supported_image(Path::new("photo.dng")));
    }

    #[test]
    fn unsupported_image_extensions() {
        assert!(!is_supported_image(Path::new("doc.pdf")));
        assert!(!is_supported_image(Path::new("video.mp4")));
        assert!(!is_supported_image(Path::new("readme.txt")));
        assert!(!is_supported_image(Path::new("noext")));
    }

    // ── collect_images ───────────────────────────────────────────────

    #[test]
    fn collect_images_single_file() {
        let dir = TempDir::new().unwrap();
        let jpg = dir.path().join("test.jpg");
        fs::write(&jpg, b"fake").unwrap();

        let images = collect_images(&[jpg.clone()]);
        assert_eq!(images.len(), 1);
        assert_eq!(images[0], jpg);
    }

    #[test]
    fn collect_images_skips_unsupported() {
        let dir = TempDir::new().unwrap();
        let txt = dir.path().join("readme.txt");
        fs::write(&txt, b"hello").unwrap();

        let images = collect_images(&[txt]);
        assert!(images.is_empty());
    }

    #[test]
    fn collect_images_directory_recursive() {
        let dir = TempDir::new().unwrap();
        let sub = dir.path().join("sub");
        fs::create_dir(&sub).unwrap();

        fs::write(dir.path().join("a.jpg"), b"fake").unwrap();
        fs::write(sub.join("b.png"), b"fake").unwrap();
        fs::write(sub.join("c.txt"), b"fake").unwrap();

        let images = collect_images(&[dir.path().to_path_buf()]);
        assert_eq!(images.len(), 2);
    }

    #[test]
    fn collect_images_empty_dir() {
        let dir = TempDir::new().unwrap();
        let images = collect_images(&[dir.path().to_path_buf()]);
        assert!(images.is_empty());
    }

    #[test]
    fn collect_images_nonexistent_path() {
        let images = collect_images(&[PathBuf::from("/nonexistent/path")]);
        assert!(images.is_empty());
    }

    #[test]
    fn collect_images_mixed_files_and_dirs() {
        let dir = TempDir::new().unwrap();
        let jpg = dir.path().join("photo.jpg");
        let sub = dir.path().join("folder");
        fs::create_dir(&sub).unwrap();
        fs::write(&jpg, b"fake").unwrap();
        fs::write(sub.join("deep.heic"), b"fake").unwrap();

        let images = collect_images(&[jpg.clone(), sub]);
        assert_eq!(images.len(), 2);
    }

    // ── process_image ────────────────────────────────────────────────

    #[test]
    fn process_image_without_exif_yields_no_metadata() {
        let dir = TempDir::new().unwrap();
        let jpg = dir.path().join("plain.jpg");
        fs::write(&jpg, b"not really a jpeg").unwrap();

        let result = process_image(&jpg, &NomExifDecoder::new());
        assert!(result.metadata.is_none());
        assert!(result.error.is_none());
    }

    #[test]
    fn process_image_unreadable_file_is_an_error() {
        let result = process_image(Path::new("/nonexistent/img.jpg"), &NomExifDecoder::new());
        assert!(result.metadata.is_none());
        assert!(result.error.is_some());
    }

    #[test]
    fn process_image_normalizes_decoded_tags() {
        let dir = TempDir::new().unwrap();
        let jpg = dir.path().join("shot.jpg");
        fs::write(&jpg, b"fake").unwrap();

        let mut tags = RawTagMap::new();
        tags.insert(Tag::Make, "Canon");
        tags.insert(Tag::ExposureTime, 0.004);
        let result = process_image(&jpg, &FixtureDecoder(tags));

        let metadata = result.metadata.unwrap();
        assert_eq!(metadata.camera.make.as_deref(), Some("Canon"));
        assert_eq!(metadata.exposure.shutter_speed.as_deref(), Some("1/250s"));
    }

    // ── write_report ─────────────────────────────────────────────────

    #[test]
    fn write_report_next_to_image() {
        let dir = TempDir::new().unwrap();
        let jpg = dir.path().join("shot.jpg");
        fs::write(&jpg, b"fake").unwrap();

        let mut tags = RawTagMap::new();
        tags.insert(Tag::Make, "Canon");
        let result = process_image(&jpg, &FixtureDecoder(tags));

        let report_path = write_report(&result, None).unwrap();
        assert_eq!(report_path, dir.path().join("exif-report-shot.txt"));
        let contents = fs::read_to_string(&report_path).unwrap();
        assert!(contents.contains("EXIF Metadata Report"));
        assert!(contents.contains("File: shot.jpg"));
        assert!(contents.contains("Make: Canon"));
    }

    #[test]
    fn write_report_into_directory() {
        let dir = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        let jpg = dir.path().join("shot.jpg");
        fs::write(&jpg, b"fake").unwrap();

        let mut tags = RawTagMap::new();
        tags.insert(Tag::Model, "EOS R5");
        let result = process_image(&jpg, &FixtureDecoder(tags));

        let report_path = write_report(&result, Some(out.path())).unwrap();
        assert_eq!(report_path, out.path().join("exif-report-shot.txt"));
    }

    #[test]
    fn write_report_requires_metadata() {
        let result = ProcessResult {
            path: PathBuf::from("img.jpg"),
            metadata: None,
            error: None,
        };
        assert!(write_report(&result, None).is_err());
    }
}
