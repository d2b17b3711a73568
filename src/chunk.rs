use std::num::NonZeroUsize;

/// Splits `text` into pieces of at most `max_chars` characters, in order.
///
/// A piece ends after the last whitespace that fits when there is one, so
/// words are only cut when a single word is longer than `max_chars`.
/// Concatenating the pieces gives back `text`.
pub fn chunk_message(text: &str, max_chars: NonZeroUsize) -> Vec<String> {
    let max = max_chars.get();
    let mut chunks = Vec::new();
    let mut rest = text;

    while !rest.is_empty() {
        let hard = match rest.char_indices().nth(max) {
            Some((i, _)) => i,
            None => {
                chunks.push(rest.to_string());
                break;
            }
        };
        let cut = rest[..hard]
            .char_indices()
            .rev()
            .find(|(_, c)| c.is_whitespace())
            .map_or(hard, |(i, c)| i + c.len_utf8());
        chunks.push(rest[..cut].to_string());
        rest = &rest[cut..];
    }

    chunks
}
