//! Form encoding.
//!
//! Every value goes through `url::form_urlencoded`, so `&`, `=` and spaces
//! inside a value cannot break the pair structure.

use url::form_urlencoded;

/// Encode ordered pairs into a form body / query string.
pub fn encode_pairs<'a, I>(pairs: I) -> String
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    form_urlencoded::Serializer::new(String::new())
        .extend_pairs(pairs)
        .finish()
}

/// Decode a raw query string and encode it again.
///
/// Returns `None` when the query carries no pairs. The output is
/// semantically equal to the input but its escaping may differ
/// (`%20` becomes `+`, unescaped reserved characters get escaped).
pub fn reencode_query(raw: &str) -> Option<String> {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    let mut count = 0usize;
    for (key, value) in form_urlencoded::parse(raw.as_bytes()) {
        serializer.append_pair(&key, &value);
        count += 1;
    }
    if count == 0 {
        None
    } else {
        Some(serializer.finish())
    }
}
