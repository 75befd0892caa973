use regex::Regex;
use std::sync::LazyLock;

/// Sentence ends: western punctuation followed by whitespace, or CJK full stops
static SENTENCE_END: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[.!?]+\s+|[。！？]+").expect("sentence pattern is valid")
});

fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Split text into batches of at most `max_chars` characters.
///
/// Batches break after sentence-ending punctuation where possible, then on
/// whitespace, and only split inside a word when the word alone is too long.
pub fn split_into_batches(text: &str, max_chars: usize) -> Vec<String> {
    let text = text.trim();
    if char_len(text) <= max_chars {
        return vec![text.to_string()];
    }

    let mut sentences = Vec::new();
    let mut last_end = 0;
    for mat in SENTENCE_END.find_iter(text) {
        sentences.push(&text[last_end..mat.end()]);
        last_end = mat.end();
    }
    if last_end < text.len() {
        sentences.push(&text[last_end..]);
    }

    let mut batches = Vec::new();
    let mut current_batch = String::new();

    for sentence in sentences {
        let sentence_len = char_len(sentence);

        if sentence_len > max_chars {
            push_batch(&mut batches, &mut current_batch);
            batches.extend(split_on_words(sentence, max_chars));
            continue;
        }

        if !current_batch.is_empty() && char_len(&current_batch) + sentence_len > max_chars {
            push_batch(&mut batches, &mut current_batch);
        }

        current_batch.push_str(sentence);
    }

    push_batch(&mut batches, &mut current_batch);

    batches
}

fn push_batch(batches: &mut Vec<String>, current_batch: &mut String) {
    let trimmed = current_batch.trim();
    if !trimmed.is_empty() {
        batches.push(trimmed.to_string());
    }
    current_batch.clear();
}

fn split_on_words(sentence: &str, max_chars: usize) -> Vec<String> {
    let mut batches = Vec::new();
    let mut current_batch = String::new();

    for word in sentence.split_whitespace() {
        let word_len = char_len(word);

        if word_len > max_chars {
            push_batch(&mut batches, &mut current_batch);
            let chars: Vec<char> = word.chars().collect();
            for chunk in chars.chunks(max_chars) {
                batches.push(chunk.iter().collect());
            }
            continue;
        }

        let separator = usize::from(!current_batch.is_empty());
        if char_len(&current_batch) + separator + word_len > max_chars {
            push_batch(&mut batches, &mut current_batch);
        }

        if !current_batch.is_empty() {
            current_batch.push(' ');
        }
        current_batch.push_str(word);
    }

    push_batch(&mut batches, &mut current_batch);

    batches
}
