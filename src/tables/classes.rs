// src/tables/classes.rs
// Per-byte membership predicates for the RFC 3261 productions we table.
// All of these are `const fn` so `lookup` can bake the same rules in at
// compile time.

#[inline]
pub const fn is_alphanum(b: u8) -> bool {
    matches!(b, b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9')
}

/// ```notrust
/// token = 1*(alphanum / "-" / "." / "!" / "%" / "*" / "_" / "+" / "`" / "'" / "~")
/// ```
#[inline]
pub const fn is_token(b: u8) -> bool {
    is_alphanum(b)
        || matches!(b, b'!' | b'%' | b'\'' | b'*' | b'+' | b'-' | b'.' | b'_' | b'`' | b'~')
}

// reserved / unreserved / escaped, flattened to the bytes they can contain
#[inline]
const fn is_uri_mark(b: u8) -> bool {
    matches!(
        b,
        b'!' | b'$'
            | b'%'
            | b'&'
            | b'\''
            | b'('
            | b')'
            | b'*'
            | b'+'
            | b','
            | b'-'
            | b'.'
            | b'/'
            | b':'
            | b';'
            | b'='
            | b'?'
            | b'@'
            | b'_'
            | b'~'
    )
}

/// Bytes that may appear anywhere in a Request-URI (SIP-URI, SIPS-URI or
/// absoluteURI). Structure is left to the parser.
#[inline]
pub const fn is_request_uri(b: u8) -> bool {
    is_alphanum(b) || is_uri_mark(b)
}

/// ```notrust
/// Reason-Phrase = *(reserved / unreserved / escaped
///                 / UTF8-NONASCII / UTF8-CONT / SP / HTAB)
/// ```
///
/// Of the non-ASCII range only 0xFF is admitted.
#[inline]
pub const fn is_reason_phrase(b: u8) -> bool {
    is_alphanum(b) || is_uri_mark(b) || b == 0xFF || matches!(b, b' ' | b'\t')
}

/// `UTF8-NONASCII` lead byte of a 2..=6 byte sequence.
///
/// Only the lead byte is checked. Continuation bytes are classified on their
/// own by [`is_utf8_cont`], so a run of the wrong length still passes; callers
/// needing strict UTF-8 must count continuations themselves.
#[inline]
pub const fn is_utf8_nonascii(b: u8) -> bool {
    matches!(b, 0xC0..=0xDF | 0xE0..=0xEF | 0xF0..=0xF7 | 0xF8..=0xFB | 0xFC..=0xFD)
}

#[inline]
pub const fn is_utf8_cont(b: u8) -> bool {
    matches!(b, 0x80..=0xBF)
}

/// `TEXT-UTF8char = %x21-7E / UTF8-NONASCII`
#[inline]
pub const fn is_text_utf8_char(b: u8) -> bool {
    matches!(b, 0x21..=0x7E) || is_utf8_nonascii(b)
}

/// The bytes of `LWS = [*WSP CRLF] 1*WSP`. Folding is not checked here; a
/// lone CR or LF passes.
#[inline]
pub const fn is_lws(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\r' | b'\n')
}

/// ```notrust
/// header-value = *(TEXT-UTF8char / UTF8-CONT / LWS)
/// ```
///
/// NUL, BEL and DEL are also accepted. The grammar does not clearly allow
/// them; they are kept so existing traffic keeps parsing.
#[inline]
pub const fn is_header_value(b: u8) -> bool {
    is_text_utf8_char(b) || is_utf8_cont(b) || is_lws(b) || matches!(b, 0x00 | 0x07 | 0x7F)
}
