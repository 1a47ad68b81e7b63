//! Text chunking for TTS processing.

/// Default maximum chunk size in characters.
pub const DEFAULT_MAX_CHARS: usize = 4000;

/// Split text into chunks on word boundaries.
///
/// Words are accumulated greedily: a word joins the current chunk when
/// the chunk, a separating space, and the word together fit within
/// `max_chars`. A word longer than `max_chars` becomes its own chunk
/// rather than being cut mid-word.
///
/// # Arguments
/// * `text` - The text to chunk
/// * `max_chars` - Maximum chunk size in characters; expected to be at
///   least 1 (the CLI enforces this)
///
/// # Returns
/// Non-empty chunks in input order. Joining them with single spaces
/// reproduces the input's words; only whitespace is normalized.
pub fn chunk_text(text: &str, max_chars: usize) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current = word.to_string();
        } else if current.len() + word.len() + 1 <= max_chars {
            current.push(' ');
            current.push_str(word);
        } else {
            chunks.push(current);
            current = word.to_string();
        }
    }

    if !current.is_empty() {
        chunks.push(current);
    }

    chunks
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_chunk_short_text() {
        let chunks = chunk_text("Hello world", 4000);
        assert_eq!(chunks, vec!["Hello world"]);
    }

    #[test]
    fn test_chunk_on_word_boundaries() {
        let chunks = chunk_text("one two three four five", 12);
        assert_eq!(chunks, vec!["one two", "three four", "five"]);
    }

    #[test]
    fn test_chunk_empty_text() {
        let chunks = chunk_text("", 4000);
        assert!(chunks.is_empty());
    }

    #[test]
    fn test_chunk_whitespace_only() {
        let chunks = chunk_text("   \n\n \t  ", 4000);
        assert!(chunks.is_empty());
    }

    #[test]
    fn test_chunk_normalizes_whitespace() {
        let chunks = chunk_text("one\n\ntwo\tthree   four", 4000);
        assert_eq!(chunks, vec!["one two three four"]);
    }

    #[test]
    fn test_overlong_word_gets_own_chunk() {
        let long_word = "a".repeat(50);
        let text = format!("short {} tail", long_word);
        let chunks = chunk_text(&text, 10);
        assert_eq!(chunks, vec!["short".to_string(), long_word, "tail".to_string()]);
    }

    #[test]
    fn test_overlong_word_alone() {
        let long_word = "b".repeat(30);
        let chunks = chunk_text(&long_word, 10);
        assert_eq!(chunks, vec![long_word]);
    }

    #[test]
    fn test_exact_fit_boundary() {
        // "abcd efgh" is 9 chars: fits at max 9, splits at max 8
        assert_eq!(chunk_text("abcd efgh", 9), vec!["abcd efgh"]);
        assert_eq!(chunk_text("abcd efgh", 8), vec!["abcd", "efgh"]);
    }

    proptest! {
        #[test]
        fn prop_chunks_reconstruct_input_words(
            words in prop::collection::vec("[a-zA-Z0-9]{1,12}", 0..100),
            max_chars in 1usize..200,
        ) {
            let text = words.join(" ");
            let chunks = chunk_text(&text, max_chars);
            prop_assert_eq!(chunks.join(" "), text);
        }

        #[test]
        fn prop_chunks_respect_max_or_are_single_words(
            words in prop::collection::vec("[a-z]{1,30}", 0..100),
            max_chars in 1usize..50,
        ) {
            let text = words.join(" ");
            for chunk in chunk_text(&text, max_chars) {
                prop_assert!(!chunk.is_empty());
                prop_assert!(
                    chunk.len() <= max_chars || !chunk.contains(' '),
                    "chunk too long and not a single word: {:?}",
                    chunk
                );
            }
        }
    }
}
