use std::collections::HashMap;

/// Attribute map of an open tag. Keys are lower case.
pub type Attributes = HashMap<String, String>;

/// Parse one `key=value` token from an open-tag body.
///
/// Accepts `key=value`, `key="value"` and `key='value'`. The key is the
/// trimmed, lower-cased text before the first `=`. One leading quote is
/// stripped from the value, which then runs up to the next quote character.
///
/// Returns `None` for tokens without `=`, with an empty key, or with an empty
/// value.
pub fn parse_attribute(token: &str) -> Option<(String, String)> {
    let (raw_key, raw_value) = token.split_once('=')?;

    let key = raw_key.trim();
    if key.is_empty() {
        return None;
    }

    let unquoted = raw_value.strip_prefix(['"', '\'']).unwrap_or(raw_value);
    let value = match unquoted.find(['"', '\'']) {
        Some(end) => &unquoted[..end],
        None => unquoted,
    };
    if value.is_empty() {
        return None;
    }

    Some((key.to_lowercase(), value.to_string()))
}

/// Fold the attribute tokens of a tag body into `attrs`.
///
/// Returns the number of tokens that were skipped as malformed. Empty tokens
/// produced by repeated spaces are not counted.
pub fn extend_attributes<'a, I>(attrs: &mut Attributes, tokens: I) -> usize
where
    I: IntoIterator<Item = &'a str>,
{
    let mut skipped = 0;
    for token in tokens {
        if token.is_empty() {
            continue;
        }
        match parse_attribute(token) {
            Some((key, value)) => {
                attrs.insert(key, value);
            }
            None => {
                log::trace!("skipping malformed attribute token {:?}", token);
                skipped += 1;
            }
        }
    }
    skipped
}
