//! Chunking helpers.

/// Packs whitespace-separated words into chunks of at most `max_chars` characters.
///
/// A single word longer than `max_chars` is split on character boundaries. `max_chars == 0` is
/// treated as 1.
pub fn chunk_by_chars(text: &str, max_chars: usize) -> Vec<String> {
    let max_chars = max_chars.max(1);
    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut current_len = 0usize;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();

        if word_len > max_chars {
            if !current.is_empty() {
                chunks.push(std::mem::take(&mut current));
                current_len = 0;
            }
            let chars: Vec<char> = word.chars().collect();
            for piece in chars.chunks(max_chars) {
                chunks.push(piece.iter().collect());
            }
            continue;
        }

        let needed = if current.is_empty() { word_len } else { word_len + 1 };
        if current_len + needed > max_chars {
            chunks.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if !current.is_empty() {
            current.push(' ');
            current_len += 1;
        }
        current.push_str(word);
        current_len += word_len;
    }

    if !current.is_empty() {
        chunks.push(current);
    }
    chunks
}

/// Groups ordered segments into at most `max_chunks` contiguous chunks of near-equal size.
///
/// Blank segments are dropped; order is preserved.
pub fn group_segments(segments: &[String], max_chunks: usize) -> Vec<String> {
    let segments: Vec<&str> = segments
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect();
    if segments.is_empty() {
        return Vec::new();
    }

    let max_chunks = max_chunks.max(1);
    let per_chunk = segments.len().div_ceil(max_chunks);
    segments
        .chunks(per_chunk)
        .map(|group| group.join(" "))
        .collect()
}
