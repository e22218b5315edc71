//! Protocol/context fit: how well the candidate matches the user's goal.
//!
//! Blends the external vector-search relevance with keyword overlap between
//! the goal text and the protocol's name/category/benefits prose, plus a
//! flat boost when the active app module names the protocol's category.

use attune_core::models::ProtocolCandidate;

/// Weight of the vector-search relevance in the blend.
const RELEVANCE_WEIGHT: f64 = 0.6;
/// Weight of the goal keyword overlap in the blend.
const OVERLAP_WEIGHT: f64 = 0.4;
/// Goal tokens shorter than this are noise words and skipped.
const MIN_TOKEN_LEN: usize = 4;
/// Flat boost when the active app module names the protocol's category.
const MODULE_MATCH_BONUS: f64 = 0.1;

fn module_matches(module: &str, category: &str) -> bool {
    let module = module.to_lowercase();
    let category = category.to_lowercase();
    !module.is_empty() && (category.contains(&module) || module.contains(&category))
}

pub fn calculate(user_goal: &str, module: Option<&str>, protocol: &ProtocolCandidate) -> f64 {
    let haystack = format!(
        "{} {} {}",
        protocol.name, protocol.category, protocol.benefits
    )
    .to_lowercase();

    let tokens: Vec<String> = user_goal
        .to_lowercase()
        .split_whitespace()
        .filter(|t| t.len() >= MIN_TOKEN_LEN)
        .map(str::to_string)
        .collect();

    // Without a usable goal, the vector relevance is all we have.
    let base = if tokens.is_empty() {
        protocol.relevance.clamp(0.0, 1.0)
    } else {
        let hits = tokens.iter().filter(|t| haystack.contains(t.as_str())).count();
        let overlap = hits as f64 / tokens.len() as f64;
        (RELEVANCE_WEIGHT * protocol.relevance + OVERLAP_WEIGHT * overlap).clamp(0.0, 1.0)
    };

    match module {
        Some(m) if module_matches(m, &protocol.category) => {
            (base + MODULE_MATCH_BONUS).min(1.0)
        }
        _ => base,
    }
}
