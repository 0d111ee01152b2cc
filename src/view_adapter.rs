use serde_json::{json, Value};
use crate::memorization_engine::{
    content::Library,
    models::{DisplayFormat, NextAction, Surah, WordOption},
    progress::ProgressStore,
    session::QuizSession,
    trainer::Trainer,
};

/// Dialog title and button label for a pending action.
fn action_labels(action: &NextAction) -> (&'static str, &'static str) {
    match action {
        NextAction::IncreaseDifficulty { .. } => ("Ayah Completed!", "Increase Difficulty"),
        NextAction::AdvanceVerse { .. }       => ("Ayah Mastered!", "Next Ayah"),
        NextAction::SurahComplete             => ("Surah Completed!", "Finish"),
    }
}

/// Picker entry as sent to the client: no source position, which would
/// give the answer away.
fn public_option(o: &WordOption) -> Value {
    json!({ "word": o.word, "translation": o.translation })
}

/// Words, picker and counters of one quiz session.
///
/// Picker options carry only `word` and `translation`; answers are checked
/// back through [`Trainer::choose`] by position in the list.
pub fn session_view(session: &QuizSession, format: DisplayFormat) -> Value {
    let stats = session.stats();
    json!({
        "sessionId": session.id(),
        "ayahId": session.ayah().id,
        "difficulty": session.difficulty().level(),
        "displayFormat": format,
        "words": session.render(format),
        "progress": session.progress(),
        "picker": session.selected().map(|index| json!({
            "index": index,
            "options": session.options().iter().map(public_option).collect::<Vec<_>>(),
        })),
        "stats": {
            "correct": stats.correct,
            "incorrect": stats.incorrect,
            "hints": stats.hints,
            "accuracy": stats.accuracy(),
        }
    })
}

/// Full learning-screen state: header, current session and any pending dialog.
pub fn trainer_view(trainer: &Trainer) -> Value {
    let surah = trainer.surah();
    let dialog = trainer.pending_action().map(|action| {
        let (title, button) = action_labels(&action);
        json!({
            "title": title,
            "message": action.to_string(),
            "button": button,
            "action": action,
        })
    });
    json!({
        "surah": {
            "id": surah.id,
            "name": surah.name,
            "nameArabic": surah.name_arabic,
        },
        "ayahLabel": format!("Ayah {} of {}", trainer.verse_index() + 1, surah.number_of_ayahs),
        "session": session_view(trainer.session(), trainer.display_format()),
        "dialog": dialog,
        "finished": trainer.is_finished(),
    })
}

/// Surah list with the overall percentage for each.
pub fn surah_list_view(library: &Library, store: &ProgressStore) -> Value {
    let items: Vec<Value> = library
        .surahs()
        .iter()
        .map(|s| json!({
            "id": s.id,
            "name": s.name,
            "nameArabic": s.name_arabic,
            "numberOfAyahs": s.number_of_ayahs,
            "progressPercent": store.overall_percent(s),
        }))
        .collect();
    Value::Array(items)
}

/// Per-ayah breakdown for one surah.
pub fn surah_progress_view(surah: &Surah, store: &ProgressStore) -> Value {
    let record = store.read_progress(&surah.id);
    let ayahs: Vec<Value> = surah
        .ayahs
        .iter()
        .enumerate()
        .map(|(i, a)| json!({
            "id": a.id,
            "arabic": a.arabic,
            "english": a.english,
            "status": store.ayah_status(&surah.id, i),
        }))
        .collect();
    json!({
        "surahId": surah.id,
        "overallPercent": store.overall_percent(surah),
        "record": record,
        "ayahs": ayahs,
    })
}
