use memchr::memchr;

/// Percent-decodes one captured value. Invalid UTF-8 after decoding keeps the
/// raw text so a bad escape cannot fail a match.
pub fn decode_component(value: &str) -> String {
    if memchr(b'%', value.as_bytes()).is_none() {
        return value.to_string();
    }

    match urlencoding::decode(value) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => {
            tracing::event!(tracing::Level::TRACE, value = %value, "percent-decoding produced invalid utf-8");
            value.to_string()
        }
    }
}

pub fn encode_component(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

/// URI-level encoding for a splat: reserved characters such as `/`, `?`, `&`
/// and `=` pass through, only characters never valid in a URI are escaped.
pub fn encode_splat(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut buf = [0u8; 4];
    for ch in value.chars() {
        if ch.is_ascii_alphanumeric() || URI_RESERVED.contains(ch) {
            out.push(ch);
        } else {
            out.push_str(&urlencoding::encode(ch.encode_utf8(&mut buf)));
        }
    }
    out
}

const URI_RESERVED: &str = "-_.!~*'();/?:@&=+$,#";

/// Collapses runs of `/` into one.
pub(crate) fn collapse_duplicate_slashes(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    let mut prev_was_slash = false;
    for ch in input.chars() {
        if ch == '/' {
            if !prev_was_slash {
                output.push(ch);
                prev_was_slash = true;
            }
        } else {
            output.push(ch);
            prev_was_slash = false;
        }
    }
    output
}
