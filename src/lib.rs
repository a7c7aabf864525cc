//! # exifscope
//!
//! EXIF metadata inspector — decode embedded image tags, normalize them
//! into a structured, categorized record, and render a plain-text report.
//!
//! The heavy lifting of TIFF/EXIF binary parsing is delegated to the
//! `nom-exif` library behind the [`exif::ExifDecoder`] capability. What
//! this crate owns is the normalization and presentation layer: mapping the
//! decoder's loosely typed tag bag into six fixed categories (camera, lens,
//! exposure, location, technical, thumbnail) with unit conversion,
//! enumerated-code labels, and GPS coordinate reconstruction.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use exifscope::exif::{render_report, NomExifDecoder};
//! use exifscope::pipeline;
//! use std::path::Path;
//!
//! fn main() -> anyhow::Result<()> {
//!     let decoder = NomExifDecoder::new();
//!     let result = pipeline::process_image(Path::new("photo.jpg"), &decoder);
//!
//!     match result.metadata {
//!         Some(metadata) => {
//!             println!("Camera: {:?}", metadata.camera.model);
//!             println!("{}", render_report(&metadata, "photo.jpg"));
//!         }
//!         None => println!("No EXIF data found"),
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Lower-Level Usage
//!
//! The normalizer is a pure function over a raw tag mapping, so it works
//! directly on synthetic input:
//!
//! ```rust
//! use exifscope::exif::{normalize, RawTagMap, Tag};
//!
//! let mut tags = RawTagMap::new();
//! tags.insert(Tag::Make, "Canon");
//! tags.insert(Tag::ExposureTime, 0.004);
//! tags.insert(Tag::Orientation, 6.0);
//!
//! let metadata = normalize(&tags);
//! assert_eq!(metadata.camera.make.as_deref(), Some("Canon"));
//! assert_eq!(metadata.exposure.shutter_speed.as_deref(), Some("1/250s"));
//! assert_eq!(metadata.technical.orientation.as_deref(), Some("Rotate 90° CW"));
//! ```
//!
//! ## Modules
//!
//! - [`exif`] — tag model, decoder capability, normalizer, report generator
//! - [`pipeline`] — file collection and the per-image inspect flow

pub mod exif;
pub mod pipeline;
