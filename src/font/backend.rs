/// A [`FontSource`](crate::font::FontSource) over font files parsed with 'ttf-parser'
#[cfg(feature="ttfparser-fontparser")]
pub mod ttf_parser;
