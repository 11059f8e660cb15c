//! Splits answer text into request-sized pieces.
//!
//! The translate endpoint only speaks short strings, so text is cut at sentence punctuation
//! first, then at whitespace, and only as a last resort in the middle of a word. Neighbouring
//! pieces are packed back together while they fit, to keep the number of requests low.

/// Longest chunk (in characters) the service accepts in one request.
pub const MAX_CHUNK_CHARS: usize = 100;

/// Split `text` into chunks of at most `max_chars` characters.
///
/// Chunks are trimmed and never consist solely of punctuation. An empty result means there is
/// nothing to speak.
#[must_use]
pub fn split_text(text: &str, max_chars: usize) -> Vec<String> {
    let max_chars = max_chars.max(1);
    let mut pieces = Vec::new();
    for sentence in sentences(text) {
        if is_only_punctuation(sentence) {
            continue;
        }
        minimize(sentence, max_chars, &mut pieces);
    }

    let mut chunks: Vec<String> = Vec::new();
    for piece in pieces {
        match chunks.last_mut() {
            Some(last) if last.chars().count() + 1 + piece.chars().count() <= max_chars => {
                last.push(' ');
                last.push_str(piece);
            }
            _ => chunks.push(piece.to_string()),
        }
    }
    chunks
}

/// Cuts after sentence punctuation. ASCII marks only count when followed by whitespace, so
/// `1.5` and `e.g.x` stay whole.
fn sentences(text: &str) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();
    while let Some((idx, ch)) = chars.next() {
        let end = idx + ch.len_utf8();
        let boundary = match ch {
            '\n' | '،' | '؟' | '۔' | '。' | '？' | '！' | '，' | '；' | '：' => true,
            '.' | '?' | '!' | ';' | ':' | ',' => {
                chars.peek().is_none_or(|(_, next)| next.is_whitespace())
            }
            _ => false,
        };
        if boundary {
            pieces.push(&text[start..end]);
            start = end;
        }
    }
    if start < text.len() {
        pieces.push(&text[start..]);
    }
    pieces
}

fn is_only_punctuation(text: &str) -> bool {
    text.chars()
        .all(|c| c.is_whitespace() || c.is_ascii_punctuation() || is_wide_punctuation(c))
}

const fn is_wide_punctuation(c: char) -> bool {
    matches!(
        c,
        '،' | '؟' | '۔' | '。' | '？' | '！' | '，' | '；' | '：' | '“' | '”' | '‘' | '’' | '…'
    )
}

fn minimize<'a>(text: &'a str, max_chars: usize, out: &mut Vec<&'a str>) {
    let mut rest = text.trim();
    while rest.chars().count() > max_chars {
        let limit = rest
            .char_indices()
            .nth(max_chars)
            .map_or(rest.len(), |(idx, _)| idx);
        let cut = rest[..limit]
            .rfind(char::is_whitespace)
            .filter(|&idx| idx > 0)
            .unwrap_or(limit);
        out.push(rest[..cut].trim_end());
        rest = rest[cut..].trim_start();
    }
    if !rest.is_empty() {
        out.push(rest);
    }
}
