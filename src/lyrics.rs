//! Lyric text tokenization
//!
//! Words are the non-empty whitespace-separated tokens of the text, numbered
//! left to right across every line starting from 0. The counter runs across
//! the whole text, it does not restart per line. Loading and exporting both
//! go through [`tokenize`] so the numbering always agrees.

/// A word of the loaded lyrics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    pub index: usize,
    pub text: String,
}

/// One line of lyrics. A blank (or whitespace-only) line has no words.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LyricLine {
    pub words: Vec<Word>,
}

impl LyricLine {
    pub fn is_blank(&self) -> bool {
        self.words.is_empty()
    }
}

/// Split text into lines of indexed words.
///
/// Lines are split the way [`str::lines`] does, so `\r\n` endings work and a
/// trailing newline does not produce an extra empty line.
pub fn tokenize(text: &str) -> Vec<LyricLine> {
    let mut next_index = 0;
    text.lines()
        .map(|line| LyricLine {
            words: line
                .split_whitespace()
                .map(|token| {
                    let word = Word {
                        index: next_index,
                        text: token.to_string(),
                    };
                    next_index += 1;
                    word
                })
                .collect(),
        })
        .collect()
}

/// All words of `text` in index order.
pub fn words(text: &str) -> Vec<Word> {
    tokenize(text).into_iter().flat_map(|line| line.words).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(words: &[Word]) -> Vec<&str> {
        words.iter().map(|w| w.text.as_str()).collect()
    }

    #[test]
    fn test_indices_run_across_lines() {
        let words = words("Amazing grace\nhow sweet\n\nthe sound");
        assert_eq!(texts(&words), ["Amazing", "grace", "how", "sweet", "the", "sound"]);
        for (i, word) in words.iter().enumerate() {
            assert_eq!(word.index, i);
        }
    }

    #[test]
    fn test_blank_lines_are_kept() {
        let lines = tokenize("one\n   \n\ntwo three");
        assert_eq!(lines.len(), 4);
        assert!(!lines[0].is_blank());
        assert!(lines[1].is_blank());
        assert!(lines[2].is_blank());
        assert_eq!(lines[3].words[0].index, 1);
        assert_eq!(lines[3].words[1].index, 2);
    }

    #[test]
    fn test_whitespace_runs_collapse() {
        let words = words("  hello \t  world  ");
        assert_eq!(texts(&words), ["hello", "world"]);
    }

    #[test]
    fn test_crlf_and_trailing_newline() {
        let lines = tokenize("a b\r\nc\r\n");
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1].words[0].text, "c");
    }

    #[test]
    fn test_empty_text() {
        assert!(tokenize("").is_empty());
        assert!(words("").is_empty());
    }
}
