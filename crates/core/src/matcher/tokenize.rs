//! Word tokenization and contiguous-run containment.

/// Lowercase `text` and split it on every run of non-word characters.
///
/// A word character is any Unicode alphanumeric or `_`. Empty tokens are dropped.
///
/// Combining marks and connector punctuation other than `_` are separators, so
/// a decomposed accent (`e` + U+0301) splits the word. Numeric symbols such as
/// `²` count as word characters.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !is_word_char(c))
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// True if `needle` appears in `haystack` as consecutive elements, in order.
///
/// An empty needle is contained in everything.
pub fn contains_run<T: PartialEq>(haystack: &[T], needle: &[T]) -> bool {
    if needle.is_empty() {
        return true;
    }
    haystack.windows(needle.len()).any(|window| window == needle)
}

/// True if some run of `run_len` consecutive `quote` tokens occurs
/// contiguously in `message`.
///
/// A quote shorter than `run_len` never matches.
pub fn shares_run<T: PartialEq>(quote: &[T], message: &[T], run_len: usize) -> bool {
    if run_len == 0 {
        return true;
    }
    quote
        .windows(run_len)
        .any(|window| contains_run(message, window))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(text: &str) -> Vec<String> {
        tokenize(text)
    }

    #[test]
    fn test_tokenize_lowercases_and_splits_punctuation() {
        assert_eq!(
            tokenize("Hello, World! It's--fine..."),
            vec!["hello", "world", "it", "s", "fine"]
        );
    }

    #[test]
    fn test_tokenize_keeps_underscores_and_digits() {
        assert_eq!(tokenize("snake_case 42x"), vec!["snake_case", "42x"]);
    }

    #[test]
    fn test_tokenize_unicode_letters() {
        assert_eq!(tokenize("Ça VA, señor"), vec!["ça", "va", "señor"]);
    }

    #[test]
    fn test_tokenize_combining_mark_splits_word() {
        assert_eq!(tokenize("cafe\u{301} noir"), vec!["cafe", "noir"]);
        assert_eq!(tokenize("caf\u{e9} noir"), vec!["caf\u{e9}", "noir"]);
    }

    #[test]
    fn test_tokenize_numeric_symbols_are_word_chars() {
        assert_eq!(tokenize("x\u{b2} plus y"), vec!["x\u{b2}", "plus", "y"]);
    }

    #[test]
    fn test_tokenize_empty_and_symbols_only() {
        assert!(tokenize("").is_empty());
        assert!(tokenize(" ?! -- ").is_empty());
    }

    #[test]
    fn test_contains_run() {
        let hay = ["a", "b", "c", "d"];
        assert!(contains_run(&hay, &["b", "c"]));
        assert!(contains_run(&hay, &["a", "b", "c", "d"]));
        assert!(!contains_run(&hay, &["b", "d"]));
        assert!(!contains_run(&hay, &["c", "b"]));
        assert!(!contains_run(&hay, &["a", "b", "c", "d", "e"]));
        assert!(contains_run(&hay, &[]));
    }

    #[test]
    fn test_shares_run_two_words() {
        let quote = words("to be or not to be");
        assert!(shares_run(&quote, &words("he said not to be honest"), 2));
    }

    #[test]
    fn test_shares_run_rejects_reordered_words() {
        let quote = words("to be or not to be");
        assert!(!shares_run(&quote, &words("not or be to"), 2));
    }

    #[test]
    fn test_shares_run_any_real_bigram_counts() {
        // "be or" is a genuine bigram of the quote.
        let quote = words("to be or not to be");
        assert!(shares_run(&quote, &words("be or not"), 2));
    }

    #[test]
    fn test_shares_run_quote_shorter_than_run() {
        let quote = words("hello");
        assert!(!shares_run(&quote, &words("hello there"), 2));
    }

    #[test]
    fn test_shares_run_message_shorter_than_run() {
        let quote = words("the quick brown fox");
        assert!(!shares_run(&quote, &words("quick"), 2));
    }

    #[test]
    fn test_shares_run_single_word() {
        let quote = words("the quick brown fox");
        assert!(shares_run(&quote, &words("what a FOX"), 1));
    }
}
