//! EXIF tag decoding, normalization, and report generation.
//!
//! The flow is: raw image bytes → [`ExifDecoder`] → [`RawTagMap`] →
//! [`normalize`] → [`ExifMetadata`] → [`render_report`].
//!
//! The decoder is an injected capability: everything downstream of it is a
//! pure function over the raw tag mapping, so the normalizer and report
//! generator are tested with synthetic fixtures and never touch an image.

mod decoder;
mod lookup;
mod normalize;
mod report;
mod tags;

pub use decoder::{ExifDecoder, NomExifDecoder};
pub use normalize::{
    normalize, CameraInfo, ExifMetadata, ExposureInfo, LensInfo, LocationInfo, TechnicalInfo,
    ThumbnailInfo,
};
pub use report::{humanize_label, render_report, report_filename};
pub use tags::{RawTagMap, Tag, TagValue};
