//! HTTP semantic header fields and content negotiation.
//!
//! The crate parses and renders the RFC 7231/7232 negotiation and
//! precondition fields (`Accept`, `Accept-Charset`, `Accept-Encoding`,
//! `Accept-Language`, `If-Match`, `If-None-Match`) and selects which of a
//! server's available representations best satisfies a request. Everything
//! is pure and synchronous; no state is shared between calls.
//!
//! ```
//! use http_conneg::{Accept, HeaderCodec, MediaType, negotiate_media_type};
//!
//! let available = [MediaType::new("text", "html"), MediaType::new("application", "json")];
//! let accept = Accept::parse("application/*;q=0.9, text/plain").expect("valid header");
//! assert_eq!(
//!     negotiate_media_type(&available, &accept),
//!     Some(&MediaType::new("application", "json"))
//! );
//! ```

mod codec;
mod errors;
pub mod grammar;
mod headers;
mod negotiate;
mod precondition;
pub mod qvalue;
mod specificity;

pub use codec::HeaderCodec;
pub use errors::GrammarError;
pub use headers::{
    Accept, AcceptCharset, AcceptEncoding, AcceptLanguage, Charset, CharsetItem, Encoding,
    EncodingItem, EntityTag, IfMatch, IfNoneMatch, LanguageItem, LanguageTag, MediaRange,
    MediaRangeItem, MediaType,
};
pub use negotiate::{
    negotiate_charset, negotiate_encoding, negotiate_language, negotiate_media_type,
};
pub use qvalue::Weight;
pub use specificity::Specificity;
