//! Fallback content: served when every provider has failed.
//!
//! Nothing here can fail. Question requests get the locale's static bank;
//! analysis requests get the best keyword match from a candidate catalog,
//! or the locale's generic profile when no catalog could be generated.

pub mod matcher;
pub mod question_bank;

use crate::core::locale::Locale;
use crate::profile::PersonalityProfile;
use std::sync::LazyLock;

pub use matcher::{DESCRIPTION_KEYWORDS, KeywordWeight, score_profile, select_best_match};
pub use question_bank::question_bank;

static GENERIC_EN: LazyLock<PersonalityProfile> = LazyLock::new(|| {
    PersonalityProfile::from_static(
        "Developer Type",
        "A versatile developer who adapts to whatever the codebase needs. You balance shipping with craftsmanship and pick tools by what works.",
        ["Software Engineer", "Full-Stack Developer", "Backend Engineer"],
        "It works on my machine, and I know why.",
    )
});

static GENERIC_ID: LazyLock<PersonalityProfile> = LazyLock::new(|| {
    PersonalityProfile::from_static(
        "Tipe Developer",
        "Developer serba bisa yang menyesuaikan diri dengan kebutuhan codebase. Anda menyeimbangkan kecepatan rilis dengan kualitas dan memilih tools yang terbukti berhasil.",
        ["Software Engineer", "Full-Stack Developer", "Backend Engineer"],
        "Di laptop saya jalan, dan saya tahu kenapa.",
    )
});

/// The locale's hard-coded profile, used when no candidate catalog exists
pub fn generic_profile(locale: Locale) -> &'static PersonalityProfile {
    match locale {
        Locale::En => &GENERIC_EN,
        Locale::Id => &GENERIC_ID,
    }
}

/// Choose the fallback profile for the given lowercased answer text
pub fn select_profile(
    candidates: &[PersonalityProfile],
    answer_text: &str,
    locale: Locale,
) -> PersonalityProfile {
    select_best_match(candidates, answer_text)
        .unwrap_or_else(|| generic_profile(locale))
        .clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::{MAX_SUITABLE_ROLES, MIN_SUITABLE_ROLES};

    #[test]
    fn test_generic_profiles_satisfy_invariants() {
        for locale in Locale::ALL {
            let profile = generic_profile(locale);
            let roles = profile.suitable_roles().len();
            assert!((MIN_SUITABLE_ROLES..=MAX_SUITABLE_ROLES).contains(&roles));
            assert!(!profile.quote().is_empty());
        }
        assert_eq!(generic_profile(Locale::En).personality_type(), "Developer Type");
        assert_eq!(generic_profile(Locale::Id).personality_type(), "Tipe Developer");
    }

    #[test]
    fn test_select_profile_without_candidates_is_generic() {
        let profile = select_profile(&[], "stay calm and debug", Locale::Id);
        assert_eq!(&profile, generic_profile(Locale::Id));
    }

    #[test]
    fn test_select_profile_prefers_candidate() {
        let candidate = PersonalityProfile::try_new(
            "The Debug Detective",
            "Hunts every bug",
            ["QA Engineer", "SRE", "Backend Engineer"],
            "Found it.",
        )
        .unwrap();
        let profile = select_profile(std::slice::from_ref(&candidate), "anything", Locale::En);
        assert_eq!(profile, candidate);
    }
}
