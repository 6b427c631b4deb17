use std::io::Write;

use seva_core::language::LanguageProcessor;
use seva_core::types::{TargetLanguage, TranslationMode};
use seva_lang_garhwali::song::{line_count, word_count};
use seva_lang_garhwali::{
    DictionaryStats, SongMetadata, TranslationEngine, ValidationReport, validate_json,
};
use seva_translator::Translator;

/// Which rendering of a song to print
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum SongOutput {
    Hindi,
    English,
    Both,
}

pub fn translate(
    engine: &mut TranslationEngine,
    text: &str,
    to: TargetLanguage,
    json: bool,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let translation = engine.translate(text, to)?;

    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&translation)?)?;
    } else {
        writeln!(out, "{}", translation.text)?;
    }

    tracing::info!(
        "{}/{} tokens translated ({:.0}%)",
        translation.metadata.translated_words,
        translation.metadata.total_words,
        translation.metadata.translation_rate * 100.0
    );
    Ok(())
}

pub fn mark(engine: &TranslationEngine, text: &str, json: bool, out: &mut impl Write) -> anyhow::Result<()> {
    let marked = engine.mark_untranslated_words(text);

    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&marked)?)?;
        return Ok(());
    }

    writeln!(out, "{}", marked.marked_text)?;
    if !marked.untranslated_words.is_empty() {
        writeln!(out, "Untranslated: {}", marked.untranslated_words.join(", "))?;
    }
    Ok(())
}

/// One line per token: surface, Hindi, English, category
///
/// Known phrases found anywhere in the text are listed after the tokens.
pub fn lookup(engine: &TranslationEngine, text: &str, json: bool, out: &mut impl Write) -> anyhow::Result<()> {
    let tokens = engine.tokenize(text);
    let phrases = engine.find_phrases_in_text(text);

    if json {
        let results: Vec<_> = tokens
            .iter()
            .map(|token| {
                serde_json::json!({
                    "token": token,
                    "entry": engine.lookup(token),
                })
            })
            .collect();
        let value = serde_json::json!({
            "tokens": results,
            "phrases": phrases,
        });
        writeln!(out, "{}", serde_json::to_string_pretty(&value)?)?;
        return Ok(());
    }

    for token in &tokens {
        match engine.lookup(token) {
            Some(found) => {
                let category = found.metadata.get("category").map_or("", String::as_str);
                writeln!(
                    out,
                    "{}\t{}\t{}\t{}",
                    token.surface, found.hindi_meaning, found.english_meaning, category
                )?;
            }
            None => writeln!(out, "{}\t[not found]", token.surface)?,
        }
    }

    if !phrases.is_empty() {
        writeln!(out, "Phrases: {}", phrases.join(", "))?;
    }
    Ok(())
}

pub struct SongRequest<'a> {
    pub lyrics: &'a str,
    pub mode: TranslationMode,
    pub output: SongOutput,
    pub metadata: &'a SongMetadata,
}

pub fn song(engine: &TranslationEngine, request: SongRequest<'_>, out: &mut impl Write) -> anyhow::Result<()> {
    let SongRequest {
        lyrics,
        mode,
        output,
        metadata,
    } = request;

    tracing::info!(
        "Translating {} lines, {} words in {} mode",
        line_count(lyrics),
        word_count(lyrics),
        mode
    );

    let song = engine.translate_lyrics(lyrics, mode);
    let text = match output {
        SongOutput::Hindi => song.plain_text(TargetLanguage::Hindi, metadata, mode),
        SongOutput::English => song.plain_text(TargetLanguage::English, metadata, mode),
        SongOutput::Both => song.both_text(metadata, mode),
    };
    writeln!(out, "{text}")?;

    if !song.untranslated_words.is_empty() {
        tracing::warn!(
            "{} untranslated word(s): {}",
            song.untranslated_words.len(),
            song.untranslated_words.join(", ")
        );
    }
    Ok(())
}

pub fn stats(stats: &DictionaryStats, json: bool, out: &mut impl Write) -> anyhow::Result<()> {
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(stats)?)?;
        return Ok(());
    }

    let mut categories: Vec<_> = stats.categories.iter().collect();
    categories.sort_by(|a, b| b.1.cmp(a.1));

    writeln!(out, "Total entries: {}", stats.total_entries)?;
    for (category, count) in categories {
        writeln!(out, "  {category}: {count}")?;
    }
    Ok(())
}

/// Validate a dictionary source, `Ok(false)` when it has errors
///
/// Bad entries are reported alongside the rest; only input that isn't a JSON
/// array is an `Err`.
pub fn validate(json: &str, source: &str, out: &mut impl Write) -> anyhow::Result<bool> {
    let report = validate_json(json)?;
    write_report(&report, source, out)?;
    Ok(report.is_valid())
}

fn write_report(report: &ValidationReport, source: &str, out: &mut impl Write) -> anyhow::Result<()> {
    writeln!(out, "Validating {source}")?;
    writeln!(out, "Total entries: {}", report.total_entries)?;

    writeln!(out, "Categories:")?;
    for (category, count) in report.categories_by_count() {
        writeln!(out, "  {category}: {count}")?;
    }

    if !report.warnings.is_empty() {
        writeln!(out, "Warnings ({}):", report.warnings.len())?;
        for warning in &report.warnings {
            writeln!(out, "  {warning}")?;
        }
    }

    if report.is_valid() {
        writeln!(out, "Dictionary is valid")?;
    } else {
        writeln!(out, "Errors ({}):", report.errors.len())?;
        for error in &report.errors {
            writeln!(out, "  {error}")?;
        }
    }
    Ok(())
}
