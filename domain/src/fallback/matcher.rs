//! Deterministic keyword matcher for candidate profiles.
//!
//! Scores are additive and never leave this module; only the winning
//! profile is exposed.

use crate::profile::PersonalityProfile;

/// A keyword that scores when it appears in both the answers and the
/// candidate's description
#[derive(Debug, Clone, Copy)]
pub struct KeywordWeight {
    pub keyword: &'static str,
    pub weight: u32,
}

/// Description keywords, in evaluation order
pub const DESCRIPTION_KEYWORDS: [KeywordWeight; 8] = [
    KeywordWeight { keyword: "debug", weight: 2 },
    KeywordWeight { keyword: "framework", weight: 2 },
    KeywordWeight { keyword: "team", weight: 2 },
    KeywordWeight { keyword: "optim", weight: 1 },
    KeywordWeight { keyword: "simple", weight: 1 },
    KeywordWeight { keyword: "growth", weight: 1 },
    KeywordWeight { keyword: "review", weight: 1 },
    KeywordWeight { keyword: "deadline", weight: 1 },
];

/// Bonus when the answers mention the type name itself
pub const TYPE_NAME_WEIGHT: u32 = 2;

/// Bonus per suitable role mentioned in the answers
pub const ROLE_WEIGHT: u32 = 1;

/// Score one candidate against lowercased answer text
pub fn score_profile(profile: &PersonalityProfile, answer_text: &str) -> u32 {
    let mut score = 0;

    if answer_text.contains(&profile.personality_type().to_lowercase()) {
        score += TYPE_NAME_WEIGHT;
    }

    let description = profile.description().to_lowercase();
    score += DESCRIPTION_KEYWORDS
        .iter()
        .filter(|k| answer_text.contains(k.keyword) && description.contains(k.keyword))
        .map(|k| k.weight)
        .sum::<u32>();

    score += profile
        .suitable_roles()
        .iter()
        .filter(|role| answer_text.contains(&role.to_lowercase()))
        .count() as u32
        * ROLE_WEIGHT;

    score
}

/// Pick the highest-scoring candidate; ties keep the earliest.
///
/// Returns `None` only for an empty candidate list.
pub fn select_best_match<'a>(
    candidates: &'a [PersonalityProfile],
    answer_text: &str,
) -> Option<&'a PersonalityProfile> {
    let mut best: Option<(&PersonalityProfile, u32)> = None;
    for candidate in candidates {
        let score = score_profile(candidate, answer_text);
        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((candidate, score)),
        }
    }
    best.map(|(profile, _)| profile)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROLES: [&str; 3] = ["Role One", "Role Two", "Role Three"];

    fn profile(name: &str, description: &str, roles: [&str; 3]) -> PersonalityProfile {
        PersonalityProfile::try_new(name, description, roles, "quote").unwrap()
    }

    #[test]
    fn test_description_keyword_requires_both_sides() {
        let debugger = profile("The Sleuth", "Loves to debug", ROLES);
        assert_eq!(score_profile(&debugger, "step through with debugger"), 2);
        assert_eq!(score_profile(&debugger, "read the docs first"), 0);
    }

    #[test]
    fn test_type_name_and_roles_score() {
        let lead = profile("Team Player", "Works with others", ["tech lead", "scrum master", "qa"]);
        // type name +2, "team" absent from description, "qa" role +1
        assert_eq!(score_profile(&lead, "call the team player, then qa"), 3);
    }

    #[test]
    fn test_keyword_matches_substring() {
        let optimizer = profile("The Tuner", "Optimizing everything", ROLES);
        assert_eq!(score_profile(&optimizer, "optimizing performance"), 1);
    }

    #[test]
    fn test_debug_answers_select_debug_description() {
        let candidates = vec![
            profile("The Sleuth", "A relentless debugger", ROLES),
            profile("The Shipper", "Ships features fast", ROLES),
        ];
        let best = select_best_match(&candidates, "stay calm and debug").unwrap();
        assert_eq!(best.personality_type(), "The Sleuth");

        let reversed = vec![candidates[1].clone(), candidates[0].clone()];
        let best = select_best_match(&reversed, "stay calm and debug").unwrap();
        assert_eq!(best.personality_type(), "The Sleuth");
    }

    #[test]
    fn test_ties_keep_earliest() {
        let candidates = vec![
            profile("First", "Nothing relevant", ROLES),
            profile("Second", "Also nothing", ROLES),
        ];
        let best = select_best_match(&candidates, "keep it simple").unwrap();
        assert_eq!(best.personality_type(), "First");
    }

    #[test]
    fn test_empty_candidates() {
        assert!(select_best_match(&[], "anything").is_none());
    }
}
