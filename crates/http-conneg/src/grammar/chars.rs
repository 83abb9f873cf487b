//! Character classes from RFC 5234 Appendix B.1 and RFC 7230 §3.2.6.

/// `ALPHA = %x41-5A / %x61-7A`
#[must_use]
pub const fn is_alpha(b: u8) -> bool {
    b.is_ascii_alphabetic()
}

/// `DIGIT = %x30-39`
#[must_use]
pub const fn is_digit(b: u8) -> bool {
    b.is_ascii_digit()
}

/// `WSP = SP / HTAB`
#[must_use]
pub const fn is_wsp(b: u8) -> bool {
    matches!(b, b' ' | b'\t')
}

/// `tchar`, the characters allowed inside a `token`.
///
/// # Examples
/// ```
/// use http_conneg::grammar::is_tchar;
/// assert!(is_tchar(b'~'));
/// assert!(!is_tchar(b'/'));
/// ```
#[must_use]
pub const fn is_tchar(b: u8) -> bool {
    is_alpha(b)
        || is_digit(b)
        || matches!(
            b,
            b'!' | b'#'
                | b'$'
                | b'%'
                | b'&'
                | b'\''
                | b'*'
                | b'+'
                | b'-'
                | b'.'
                | b'^'
                | b'_'
                | b'`'
                | b'|'
                | b'~'
        )
}
