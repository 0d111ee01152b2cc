//! Scripted walk through Al-Ikhlas.
//!
//! Run with: `cargo run --example demo`
//! (set `RUST_LOG=debug` to see the engine's state transitions)
//!
//! 1. **Surah list** — the JSON the selection screen would render.
//! 2. **One round** — difficulty 6 on the first ayah: a wrong pick, a hint,
//!    then the right answers, printing the words after every step.
//! 3. **Progression** — an automatic learner plays every remaining round
//!    until the surah is complete, printing each pending action.

use hifz_drill::{
    surah_list_view, surah_progress_view, trainer_view, Difficulty, DisplayFormat, Library,
    ProgressStore, Resolution, SessionRequest, Trainer,
};

/// Print the verse with blanks as `____`, wrong picks as `_?_`.
fn print_words(trainer: &Trainer) {
    let line: Vec<String> = trainer
        .render()
        .into_iter()
        .map(|h| match (h.text, h.resolution) {
            (Some(text), _)                => text,
            (None, Resolution::Incorrect)  => "_?_".to_string(),
            (None, _)                      => "____".to_string(),
        })
        .collect();
    let p = trainer.progress();
    println!("  {}   [{}/{}]", line.join(" "), p.completed_count, p.total_blanks);
}

/// Answer every open blank correctly.
fn solve(trainer: &mut Trainer, store: &mut ProgressStore) {
    let open: Vec<usize> = trainer.session().words().iter()
        .filter(|w| w.is_open())
        .map(|w| w.index)
        .collect();
    for index in open {
        let answer = trainer.session().ayah().words[index].arabic.clone();
        let Some(options) = trainer.tap(index) else { continue };
        let Some(choice) = options.iter().position(|o| o.word == answer) else { continue };
        if let Err(e) = trainer.choose(store, choice) {
            eprintln!("  error: {e}");
        }
    }
}

fn main() {
    pretty_env_logger::init();

    let library = Library::builtin();
    let mut store = ProgressStore::new();

    // ── Surah list ───────────────────────────────────────────────────────────
    println!();
    println!("══ Surahs ══");
    println!("{:#}", surah_list_view(&library, &store));

    // ── One round ────────────────────────────────────────────────────────────
    println!();
    println!("══ Al-Ikhlas, ayah 1, difficulty 6 (English) ══");
    println!();
    let mut trainer = match Trainer::start(&library, &mut store, SessionRequest {
        difficulty: Difficulty::new(6),
        display_format: DisplayFormat::English,
        rng_seed: Some(112),
        ..SessionRequest::new("112")
    }) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("cannot start: {e}");
            return;
        }
    };
    print_words(&trainer);

    let first = trainer.session().words().iter().find(|w| w.is_open()).map(|w| w.index);
    if let Some(index) = first {
        let answer = trainer.session().ayah().words[index].arabic.clone();
        let options = trainer.tap(index).map(|o| o.to_vec()).unwrap_or_default();
        println!("  Picker for word {}:", index + 1);
        for (i, o) in options.iter().enumerate() {
            println!("    [{i}] {}  ({})", o.word, o.translation);
        }
        if let Some(wrong) = options.iter().position(|o| o.word != answer) {
            if let Ok(Some(fb)) = trainer.choose(&mut store, wrong) {
                println!("  Picked [{wrong}]: correct = {}", fb.is_correct);
            }
        }
        print_words(&trainer);
        trainer.tap(index);
        if let Some(gloss) = trainer.hint() {
            println!("  Hint: {gloss}");
        }
        trainer.close_picker();
    }

    solve(&mut trainer, &mut store);
    print_words(&trainer);
    println!();
    println!("{:#}", trainer_view(&trainer));

    // ── Progression ──────────────────────────────────────────────────────────
    println!();
    println!("══ Playing Al-Ikhlas to the end ══");
    println!();
    trainer.set_display_format(DisplayFormat::Arabic);
    while !trainer.is_finished() {
        solve(&mut trainer, &mut store);
        let Some(action) = trainer.pending_action() else {
            eprintln!("  round did not complete");
            break;
        };
        println!("  ayah {} @ {:>7}  →  {action}",
            trainer.verse_index() + 1, trainer.difficulty().to_string());
        if let Err(e) = trainer.continue_round(&mut store) {
            eprintln!("  error: {e}");
            break;
        }
    }

    println!();
    if let Ok(surah) = library.surah("112") {
        println!("{:#}", surah_progress_view(surah, &store));
    }
}
