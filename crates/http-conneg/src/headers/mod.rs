//! Structured parsers for the negotiation and precondition fields.

mod accept;
mod accept_charset;
mod accept_encoding;
mod accept_language;
mod entity_tag;

pub use accept::{Accept, MediaRange, MediaRangeItem, MediaType};
pub use accept_charset::{AcceptCharset, Charset, CharsetItem};
pub use accept_encoding::{AcceptEncoding, Encoding, EncodingItem};
pub use accept_language::{AcceptLanguage, LanguageItem, LanguageTag};
pub use entity_tag::{EntityTag, IfMatch, IfNoneMatch};
