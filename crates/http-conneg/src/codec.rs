//! Converting header values between wire text and structured form.

use crate::errors::GrammarError;
use crate::qvalue::Weight;

/// A header whose value can be parsed from and rendered back to wire text.
///
/// Implementations uphold `parse(render(x)) == Some(x)` for every value their
/// parser can produce.
///
/// # Examples
/// ```
/// use http_conneg::{AcceptEncoding, HeaderCodec};
///
/// let header = AcceptEncoding::parse("gzip;q=1.000, identity ; q=0.5, *;q=0")
///     .expect("valid header");
/// assert_eq!(header.render(), "gzip;q=1,identity;q=0.5,*;q=0");
/// assert_eq!(AcceptEncoding::parse(&header.render()), Some(header));
/// ```
pub trait HeaderCodec: Sized {
    /// Canonical field name, e.g. `Accept-Encoding`.
    const NAME: &'static str;

    /// Parse a raw field value, keeping the grammar diagnostic.
    ///
    /// # Errors
    /// Returns [`GrammarError`] when `raw` does not match the field's grammar.
    fn decode(raw: &str) -> Result<Self, GrammarError>;

    /// Append the wire form of `self` to `out`.
    fn encode(&self, out: &mut String);

    /// Parse a raw field value; malformed input yields `None`.
    ///
    /// This layer does not distinguish a malformed field from a missing one.
    fn parse(raw: &str) -> Option<Self> {
        Self::decode(raw)
            .inspect_err(|err| log::debug!("rejecting {} value {raw:?}: {err}", Self::NAME))
            .ok()
    }

    /// Render `self` as a field value.
    fn render(&self) -> String {
        let mut out = String::new();
        self.encode(&mut out);
        out
    }
}

/// Append `;q=<weight>` when a weight is present.
pub(crate) fn push_weight(out: &mut String, weight: Option<Weight>) {
    if let Some(weight) = weight {
        out.push_str(";q=");
        out.push_str(&weight.to_string());
    }
}

/// Append `items` separated by `,`.
pub(crate) fn push_list<T>(out: &mut String, items: &[T], mut push_item: impl FnMut(&mut String, &T)) {
    for (index, item) in items.iter().enumerate() {
        if index > 0 {
            out.push(',');
        }
        push_item(out, item);
    }
}

/// Append `value` wrapped in double quotes.
pub(crate) fn push_quoted(out: &mut String, value: &str) {
    out.push('"');
    out.push_str(value);
    out.push('"');
}
