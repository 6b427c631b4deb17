use unicode_normalization::UnicodeNormalization;

pub trait Preprocessor {
    // Default input preprocessor
    fn process(&self, text: &str) -> String {
        let text = text.trim();

        if text.is_empty() {
            return String::new();
        }

        // Dictionary data is stored NFC
        text.nfc().collect()
    }

    /// Same as `process` but keeps line structure, only trailing whitespace per line is dropped
    fn process_lines(&self, text: &str) -> String {
        text.nfc()
            .collect::<String>()
            .lines()
            .map(str::trim_end)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

pub struct DefaultPreprocessor;
impl Preprocessor for DefaultPreprocessor {}
