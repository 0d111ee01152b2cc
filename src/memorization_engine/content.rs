//! Immutable surah collection shared by every learning round.
//!
//! A [`Library`] is built once (from the bundled surahs or from JSON) and only
//! read afterwards. Construction checks the content invariants the quiz
//! relies on: every ayah has at least one word and `numberOfAyahs` matches the
//! ayah list.

use std::collections::HashSet;

use log::debug;

use crate::error::{DrillError, Result};
use crate::memorization_engine::models::{Ayah, Surah, Word};

#[derive(Debug, Clone)]
pub struct Library {
    surahs: Vec<Surah>,
}

impl Library {
    /// Validate and wrap a surah collection.
    pub fn from_surahs(surahs: Vec<Surah>) -> Result<Self> {
        let mut ids = HashSet::new();
        for surah in &surahs {
            validate(surah)?;
            if !ids.insert(surah.id.as_str()) {
                return Err(invalid(surah, "duplicate surah id"));
            }
        }
        debug!("loaded {} surahs", surahs.len());
        Ok(Library { surahs })
    }

    /// Parse a JSON array of surahs (camelCase keys, as produced by `serde_json`).
    pub fn from_json_str(json: &str) -> Result<Self> {
        let surahs: Vec<Surah> = serde_json::from_str(json)?;
        Self::from_surahs(surahs)
    }

    /// Al-Fatihah and Al-Ikhlas with word-by-word glosses.
    pub fn builtin() -> Self {
        Library { surahs: vec![al_fatihah(), al_ikhlas()] }
    }

    pub fn surahs(&self) -> &[Surah] {
        &self.surahs
    }

    pub fn surah(&self, id: &str) -> Result<&Surah> {
        self.surahs
            .iter()
            .find(|s| s.id == id)
            .ok_or_else(|| DrillError::SurahNotFound { id: id.to_string() })
    }

    /// Ayah at 0-based `index` within surah `id`.
    pub fn ayah(&self, id: &str, index: usize) -> Result<&Ayah> {
        let surah = self.surah(id)?;
        surah.ayahs.get(index).ok_or(DrillError::VerseOutOfRange {
            index,
            len: surah.ayahs.len(),
        })
    }
}

fn invalid(surah: &Surah, reason: impl Into<String>) -> DrillError {
    DrillError::InvalidContent { surah: surah.id.clone(), reason: reason.into() }
}

fn validate(surah: &Surah) -> Result<()> {
    if surah.ayahs.is_empty() {
        return Err(invalid(surah, "no ayahs"));
    }
    if surah.number_of_ayahs != surah.ayahs.len() {
        return Err(invalid(
            surah,
            format!("numberOfAyahs is {} but {} ayahs are listed", surah.number_of_ayahs, surah.ayahs.len()),
        ));
    }
    if let Some(empty) = surah.ayahs.iter().find(|a| a.words.is_empty()) {
        return Err(invalid(surah, format!("ayah {} has no words", empty.id)));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Bundled content
// ---------------------------------------------------------------------------

fn ayah(id: u32, arabic: &str, english: &str, words: &[(&str, &str)]) -> Ayah {
    Ayah {
        id,
        arabic: arabic.to_string(),
        english: english.to_string(),
        words: words.iter().map(|&(ar, en)| Word::new(ar, en)).collect(),
    }
}

fn surah(id: &str, name: &str, name_arabic: &str, ayahs: Vec<Ayah>) -> Surah {
    Surah {
        id: id.to_string(),
        name: name.to_string(),
        name_arabic: name_arabic.to_string(),
        number_of_ayahs: ayahs.len(),
        ayahs,
    }
}

fn al_fatihah() -> Surah {
    surah("1", "Al-Fatihah", "الفاتحة", vec![
        ayah(1,
            "بِسْمِ اللَّهِ الرَّحْمَٰنِ الرَّحِيمِ",
            "In the name of Allah, the Entirely Merciful, the Especially Merciful",
            &[
                ("بِسْمِ", "In the name"),
                ("اللَّهِ", "of Allah"),
                ("الرَّحْمَٰنِ", "the Entirely Merciful"),
                ("الرَّحِيمِ", "the Especially Merciful"),
            ]),
        ayah(2,
            "الْحَمْدُ لِلَّهِ رَبِّ الْعَالَمِينَ",
            "All praise is due to Allah, Lord of the worlds",
            &[
                ("الْحَمْدُ", "All praise"),
                ("لِلَّهِ", "is due to Allah"),
                ("رَبِّ", "Lord"),
                ("الْعَالَمِينَ", "of the worlds"),
            ]),
        ayah(3,
            "الرَّحْمَٰنِ الرَّحِيمِ",
            "The Entirely Merciful, the Especially Merciful",
            &[
                ("الرَّحْمَٰنِ", "The Entirely Merciful"),
                ("الرَّحِيمِ", "the Especially Merciful"),
            ]),
        ayah(4,
            "مَالِكِ يَوْمِ الدِّينِ",
            "Sovereign of the Day of Recompense",
            &[
                ("مَالِكِ", "Sovereign"),
                ("يَوْمِ", "of the Day"),
                ("الدِّينِ", "of Recompense"),
            ]),
        ayah(5,
            "إِيَّاكَ نَعْبُدُ وَإِيَّاكَ نَسْتَعِينُ",
            "It is You we worship and You we ask for help",
            &[
                ("إِيَّاكَ", "It is You"),
                ("نَعْبُدُ", "we worship"),
                ("وَإِيَّاكَ", "and You"),
                ("نَسْتَعِينُ", "we ask for help"),
            ]),
        ayah(6,
            "اهْدِنَا الصِّرَاطَ الْمُسْتَقِيمَ",
            "Guide us to the straight path",
            &[
                ("اهْدِنَا", "Guide us"),
                ("الصِّرَاطَ", "to the path"),
                ("الْمُسْتَقِيمَ", "the straight"),
            ]),
        ayah(7,
            "صِرَاطَ الَّذِينَ أَنْعَمْتَ عَلَيْهِمْ غَيْرِ الْمَغْضُوبِ عَلَيْهِمْ وَلَا الضَّالِّينَ",
            "The path of those upon whom You have bestowed favor, not of those who have evoked [Your] anger or of those who are astray",
            &[
                ("صِرَاطَ", "The path"),
                ("الَّذِينَ", "of those"),
                ("أَنْعَمْتَ", "You have bestowed favor"),
                ("عَلَيْهِمْ", "upon them"),
                ("غَيْرِ", "not"),
                ("الْمَغْضُوبِ", "of those who have evoked [Your] anger"),
                ("عَلَيْهِمْ", "upon them"),
                ("وَلَا", "nor of"),
                ("الضَّالِّينَ", "those who are astray"),
            ]),
    ])
}

fn al_ikhlas() -> Surah {
    surah("112", "Al-Ikhlas", "الإخلاص", vec![
        ayah(1,
            "قُلْ هُوَ اللَّهُ أَحَدٌ",
            "Say, \"He is Allah, [who is] One",
            &[
                ("قُلْ", "Say"),
                ("هُوَ", "He is"),
                ("اللَّهُ", "Allah"),
                ("أَحَدٌ", "[who is] One"),
            ]),
        ayah(2,
            "اللَّهُ الصَّمَدُ",
            "Allah, the Eternal Refuge",
            &[
                ("اللَّهُ", "Allah"),
                ("الصَّمَدُ", "the Eternal Refuge"),
            ]),
        ayah(3,
            "لَمْ يَلِدْ وَلَمْ يُولَدْ",
            "He neither begets nor is born",
            &[
                ("لَمْ", "He neither"),
                ("يَلِدْ", "begets"),
                ("وَلَمْ", "nor"),
                ("يُولَدْ", "is born"),
            ]),
        ayah(4,
            "وَلَمْ يَكُن لَّهُ كُفُوًا أَحَدٌ",
            "Nor is there to Him any equivalent",
            &[
                ("وَلَمْ", "Nor"),
                ("يَكُن", "is there"),
                ("لَّهُ", "to Him"),
                ("كُفُوًا", "any equivalent"),
                ("أَحَدٌ", "anyone"),
            ]),
    ])
}
