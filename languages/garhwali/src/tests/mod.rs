use crate::dictionary::{Category, GarhwaliDictionary, GarhwaliEntry};
use crate::engine::TranslationEngine;

mod engine_tests;

fn basic_entries() -> Vec<GarhwaliEntry> {
    vec![
        GarhwaliEntry::new("Namaste", "नमस्ते", "Hello", Category::Noun),
        GarhwaliEntry::new("Shukriya", "धन्यवाद", "Thank you", Category::Noun),
        GarhwaliEntry::new("Khaana", "खाना", "Food", Category::Noun),
        GarhwaliEntry::new("Khaana khana", "खाना खाना", "To eat food", Category::Phrase),
    ]
}

fn song_entries() -> Vec<GarhwaliEntry> {
    vec![
        GarhwaliEntry::new("ghar", "घर", "home", Category::Noun),
        GarhwaliEntry::new("jaanu", "जाना", "to go", Category::Verb),
        GarhwaliEntry::new("chha", "है", "is", Category::Verb),
        GarhwaliEntry::new("पाणी", "पानी", "water", Category::Noun),
        GarhwaliEntry::new("ghar jaanu chha", "घर जा रहा है", "is going home", Category::Phrase),
        GarhwaliEntry::new("ghar jaanu", "घर जाना", "going home", Category::SongPhrase),
    ]
}

fn engine(entries: Vec<GarhwaliEntry>) -> TranslationEngine {
    TranslationEngine::new(GarhwaliDictionary::from_entries(entries))
}
