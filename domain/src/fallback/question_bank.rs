//! Built-in question banks.
//!
//! Served verbatim when every provider fails and used as the padding source
//! for short provider responses.

use crate::core::locale::Locale;
use crate::quiz::{OPTIONS_PER_QUESTION, QUESTIONS_PER_SET, Question, QuestionSet};
use std::sync::LazyLock;

type BankEntry = (&'static str, [&'static str; OPTIONS_PER_QUESTION]);

const EN: [BankEntry; QUESTIONS_PER_SET] = [
    (
        "🐛 What's your debugging approach?",
        ["Console.log everything", "Step through with debugger", "Google the error", "Ask ChatGPT"],
    ),
    (
        "🚀 How do you handle tight deadlines?",
        ["Work overtime", "Cut features", "Technical debt is fine", "Negotiate timeline"],
    ),
    (
        "📚 New framework just dropped. Your reaction?",
        ["Must try immediately", "Wait for community feedback", "If it ain't broke...", "Read the docs first"],
    ),
    (
        "🔧 Your favorite part of development?",
        ["Writing clean code", "Solving complex problems", "Building user interfaces", "Optimizing performance"],
    ),
    (
        "👥 Code reviews make you...",
        ["Excited to learn", "Defensive", "Indifferent", "Want to help others"],
    ),
    (
        "🎯 What motivates you most?",
        ["User impact", "Technical challenges", "Team collaboration", "Personal growth"],
    ),
    (
        "🏗️ Your approach to architecture?",
        ["Plan everything upfront", "Evolve as needed", "Follow patterns", "Keep it simple"],
    ),
    (
        "⚡ When production breaks...",
        ["Stay calm and debug", "Panic slightly", "Rollback immediately", "Call the team"],
    ),
];

const ID: [BankEntry; QUESTIONS_PER_SET] = [
    (
        "🐛 Apa pendekatan debugging Anda?",
        ["Console.log semua", "Step through dengan debugger", "Google errornya", "Tanya ChatGPT"],
    ),
    (
        "🚀 Bagaimana Anda menangani deadline ketat?",
        ["Kerja lembur", "Potong fitur", "Technical debt gak apa-apa", "Negosiasi timeline"],
    ),
    (
        "📚 Framework baru keluar. Reaksi Anda?",
        ["Harus coba sekarang juga", "Tunggu feedback komunitas", "Kalau gak rusak...", "Baca docs dulu"],
    ),
    (
        "🔧 Bagian favorit dari development?",
        ["Nulis clean code", "Solve masalah kompleks", "Bikin user interface", "Optimasi performa"],
    ),
    (
        "👥 Code review bikin Anda...",
        ["Excited buat belajar", "Defensif", "Cuek aja", "Pengen bantu orang lain"],
    ),
    (
        "🎯 Apa yang paling memotivasi Anda?",
        ["Impact ke user", "Tantangan teknis", "Kolaborasi tim", "Personal growth"],
    ),
    (
        "🏗️ Pendekatan Anda ke arsitektur?",
        ["Plan semua di depan", "Evolve sesuai kebutuhan", "Ikuti pattern", "Keep it simple"],
    ),
    (
        "⚡ Ketika produksi error...",
        ["Tetap tenang dan debug", "Panik sedikit", "Rollback langsung", "Panggil tim"],
    ),
];

static EN_BANK: LazyLock<QuestionSet> = LazyLock::new(|| build(EN));
static ID_BANK: LazyLock<QuestionSet> = LazyLock::new(|| build(ID));

fn build(entries: [BankEntry; QUESTIONS_PER_SET]) -> QuestionSet {
    QuestionSet::from_array(entries.map(|(text, options)| Question::from_static(text, options)))
}

/// The locale's complete fallback question set
pub fn question_bank(locale: Locale) -> &'static QuestionSet {
    match locale {
        Locale::En => &EN_BANK,
        Locale::Id => &ID_BANK,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banks_are_complete() {
        for locale in Locale::ALL {
            let bank = question_bank(locale);
            assert_eq!(bank.len(), QUESTIONS_PER_SET);
            assert!(bank.iter().all(|q| q.options().len() == OPTIONS_PER_QUESTION));
        }
    }

    #[test]
    fn test_english_bank_first_question() {
        let first = &question_bank(Locale::En).questions()[0];
        assert_eq!(first.text(), "🐛 What's your debugging approach?");
        assert_eq!(
            first.options(),
            &["Console.log everything", "Step through with debugger", "Google the error", "Ask ChatGPT"]
        );
    }

    #[test]
    fn test_indonesian_bank_first_question() {
        let first = &question_bank(Locale::Id).questions()[0];
        assert_eq!(first.text(), "🐛 Apa pendekatan debugging Anda?");
    }

    #[test]
    fn test_bank_round_trips_through_validation() {
        let bank = question_bank(Locale::En).clone();
        assert_eq!(QuestionSet::try_new(bank.clone().into_questions()).unwrap(), bank);
    }
}
