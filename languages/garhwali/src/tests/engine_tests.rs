use seva_core::language::LanguageProcessor;
use seva_core::types::{TargetLanguage, TranslationMetadata};
use seva_translator::{TranslateError, Translator};

use super::{basic_entries, engine};
use crate::dictionary::{Category, GarhwaliDictionary, GarhwaliEntry};
use crate::engine::TranslationEngine;

#[test]
fn test_translate_known_words() {
    let mut engine = engine(basic_entries());
    let result = engine.translate_text("Namaste Shukriya", TargetLanguage::English);

    assert_eq!(result.translation, "Hello Thank you");
    assert_eq!(result.metadata, TranslationMetadata::new(2, 2, 0));
    assert_eq!(result.metadata.translation_rate, 1.0);
}

#[test]
fn test_translate_to_hindi() {
    let mut engine = engine(basic_entries());
    let result = engine.translate_text("Namaste Shukriya", TargetLanguage::Hindi);
    assert_eq!(result.translation, "नमस्ते धन्यवाद");
}

#[test]
fn test_phrase_takes_precedence_over_words() {
    let mut engine = engine(basic_entries());
    let result = engine.translate_text("Khaana khana", TargetLanguage::English);

    assert_eq!(result.translation, "To eat food");
    assert_eq!(result.metadata.total_words, 1);
    assert_eq!(result.metadata.translated_words, 1);

    let single = engine.translate_text("Khaana", TargetLanguage::English);
    assert_eq!(single.translation, "Food");
}

#[test]
fn test_untranslated_words_are_bracketed() {
    let mut engine = engine(basic_entries());
    let result = engine.translate_text("Namaste UnknownWord Shukriya", TargetLanguage::English);

    assert!(result.translation.contains("[UnknownWord]"));
    assert_eq!(result.translation, "Hello [UnknownWord] Thank you");
    assert_eq!(result.metadata.total_words, 3);
    assert_eq!(result.metadata.untranslated_words, 1);
    assert!((result.metadata.translation_rate - 2.0 / 3.0).abs() < 1e-9);
}

#[test]
fn test_lookup_is_case_insensitive() {
    let mut engine = engine(basic_entries());
    let result = engine.translate_text("NAMASTE shukriya", TargetLanguage::English);

    assert_eq!(result.translation, "Hello Thank you");
    assert_eq!(engine.find_word_in_dict("namaste").unwrap().word, "Namaste");
    assert_eq!(engine.find_phrase_in_dict("KHAANA KHANA").unwrap().english_meaning, "To eat food");
    assert!(engine.find_phrase_in_dict("Namaste").is_none());
}

#[test]
fn test_find_phrases_in_text() {
    let engine = engine(basic_entries());
    assert_eq!(
        engine.find_phrases_in_text("aaj KHAANA KHANA hai"),
        vec!["Khaana khana".to_string()]
    );
    assert!(engine.find_phrases_in_text("Namaste").is_empty());
}

#[test]
fn test_empty_input() {
    let mut engine = engine(basic_entries());

    for text in ["", "   \n\t"] {
        let result = engine.translate_text(text, TargetLanguage::English);
        assert_eq!(result.translation, "");
        assert_eq!(result.metadata.total_words, 0);
        assert_eq!(result.metadata.translation_rate, 0.0);
    }
}

#[test]
fn test_mark_untranslated_words() {
    let engine = engine(basic_entries());
    let marked = engine.mark_untranslated_words("Namaste UnknownWord Shukriya");

    assert_eq!(marked.marked_text, "Namaste [UnknownWord] Shukriya");
    assert_eq!(marked.untranslated_words, vec!["UnknownWord".to_string()]);
}

#[test]
fn test_mark_untranslated_words_are_distinct() {
    let engine = engine(basic_entries());
    let marked = engine.mark_untranslated_words("foo Namaste bar foo Khaana khana");

    assert_eq!(marked.marked_text, "[foo] Namaste [bar] [foo] Khaana khana");
    assert_eq!(marked.untranslated_words, vec!["foo".to_string(), "bar".to_string()]);
}

#[test]
fn test_cache_lifecycle() {
    let mut engine = engine(basic_entries());
    assert_eq!(engine.cache_size(), 0);

    let first = engine.translate_text("Namaste", TargetLanguage::English);
    let second = engine.translate_text("Namaste", TargetLanguage::English);
    assert_eq!(first, second);
    assert_eq!(engine.cache_size(), 1);
    assert_eq!(engine.cache_stats().hits, 1);

    engine.translate_text("Namaste", TargetLanguage::Hindi);
    assert_eq!(engine.cache_size(), 2);

    engine.clear_cache();
    assert_eq!(engine.cache_size(), 0);
}

#[test]
fn test_translation_metadata() {
    let mut engine = engine(basic_entries());
    let metadata = engine.translation_metadata("Namaste nobody", TargetLanguage::Hindi);

    assert_eq!(metadata.total_words, 2);
    assert_eq!(metadata.translated_words, 1);
    assert_eq!(metadata.translation_rate, 0.5);
}

#[test]
fn test_dictionary_stats() {
    let engine = engine(basic_entries());
    let stats = engine.dictionary_stats();

    assert_eq!(stats.total_entries, 4);
    assert_eq!(stats.categories.get("noun"), Some(&3));
    assert_eq!(stats.categories.get("phrase"), Some(&1));
}

#[test]
fn test_duplicate_words_last_one_wins() {
    let mut engine = engine(vec![
        GarhwaliEntry::new("ghar", "घर", "house", Category::Noun),
        GarhwaliEntry::new("Ghar", "घर", "home", Category::Noun),
    ]);

    assert_eq!(engine.translate_text("ghar", TargetLanguage::English).translation, "home");
}

#[test]
fn test_empty_dictionary() {
    let mut engine = TranslationEngine::new(GarhwaliDictionary::new());
    let result = engine.translate_text("Namaste", TargetLanguage::English);

    assert_eq!(result.translation, "[Namaste]");
    assert_eq!(result.metadata.translation_rate, 0.0);
}

#[test]
fn test_embedded_engine() {
    let mut engine = TranslationEngine::with_embedded().unwrap();
    let result = engine.translate_text("Namaste Shukriya", TargetLanguage::English);
    assert_eq!(result.translation, "Hello Thank you");

    let result = engine.translate_text("म्यरु घौर", TargetLanguage::English);
    assert_eq!(result.translation, "my home");
    assert_eq!(result.metadata.total_words, 1);
}

#[test]
fn test_translator_trait() {
    let mut engine = engine(basic_entries());
    let translation = engine.translate("Namaste foo foo", TargetLanguage::English).unwrap();

    assert_eq!(translation.text, "Hello [foo] [foo]");
    assert_eq!(translation.from, "gbm");
    assert_eq!(translation.to, TargetLanguage::English);
    assert_eq!(translation.untranslated, vec!["foo".to_string()]);
    assert_eq!(translation.metadata.untranslated_words, 2);

    let pairs = engine.supported_languages();
    assert_eq!(
        pairs,
        vec![
            ("gbm".to_string(), "hi".to_string()),
            ("gbm".to_string(), "en".to_string()),
        ]
    );
    assert_eq!(engine.metadata().entry_count, 4);
}

#[test]
fn test_translate_to_by_name() {
    let mut engine = engine(basic_entries());

    let translation = engine.translate_to("Namaste", "hi").unwrap();
    assert_eq!(translation.text, "नमस्ते");

    let err = engine.translate_to("Namaste", "klingon").unwrap_err();
    assert!(matches!(err, TranslateError::InvalidArgument(_)));
}

#[test]
fn test_language_processor() {
    let engine = engine(basic_entries());
    assert_eq!(engine.language_code(), "gbm");

    let tokens = LanguageProcessor::tokenize(&engine, "Khaana khana Namaste");
    assert_eq!(tokens.len(), 2);

    let phrase = engine.lookup(&tokens[0]).unwrap();
    assert_eq!(phrase.term, "Khaana khana");
    assert_eq!(phrase.english_meaning, "To eat food");
    assert_eq!(phrase.meaning(TargetLanguage::Hindi), "खाना खाना");
    assert_eq!(phrase.metadata.get("category").map(String::as_str), Some("phrase"));

    let word = engine.lookup(&tokens[1]).unwrap();
    assert_eq!(word.hindi_meaning, "नमस्ते");
}
