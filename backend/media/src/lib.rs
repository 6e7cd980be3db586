//! Image acquisition for the solver.
//!
//! Downloads a captcha image over HTTP(S), enforces a size cap, and validates
//! that the body actually decodes as an image before it is handed to a
//! recognition provider.

pub mod fetch;
pub mod sniff;

pub use fetch::{parse_url, ImageFetcher};
pub use reqwest::Url;
pub use sniff::sniff_image;
