//! Constants and pure rules of the outfit recommendation pipeline.

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Mood used when the request leaves it out.
pub const DEFAULT_MOOD: &str = "Daily";

/// Weather handed to the AI when the caller did not resolve one.
pub const DEFAULT_WEATHER: &str = "Sunny, 20°C";

/// Place label used for history titles when the place is blank.
pub const DEFAULT_PLACE_LABEL: &str = "Daily";

/// Provenance marker for outfits picked by the random fallback.
pub const FALLBACK_REASON: &str = "random fallback — AI unavailable or conditions unmet";

/// Reason kept for an accepted AI pick that came back without one.
pub const DEFAULT_AI_REASON: &str = "Recommended by AI stylist";

/// Maximum number of wardrobe items shown to the AI in a single prompt.
pub const AI_CANDIDATE_LIMIT: usize = 30;

/// Message returned when no outfit can be formed.
pub const INSUFFICIENT_WARDROBE_MESSAGE: &str =
    "Your wardrobe needs at least one top and one bottom for this season before we can recommend an outfit";

/// Default number of history entries returned by a listing.
pub const DEFAULT_HISTORY_LIMIT: i64 = 10;

/// Upper bound on history entries returned by a listing.
pub const MAX_HISTORY_LIMIT: i64 = 50;

/// Number of items returned by the "recently added" wardrobe view.
pub const RECENT_ITEMS_LIMIT: i64 = 5;

// ---------------------------------------------------------------------------
// Request defaults
// ---------------------------------------------------------------------------

/// Resolve the mood, falling back to [`DEFAULT_MOOD`] when absent or blank.
pub fn resolve_mood(mood: Option<&str>) -> String {
    non_blank(mood).unwrap_or(DEFAULT_MOOD).to_string()
}

/// Resolve the weather, falling back to [`DEFAULT_WEATHER`] when absent or blank.
pub fn resolve_weather(weather: Option<&str>) -> String {
    non_blank(weather).unwrap_or(DEFAULT_WEATHER).to_string()
}

/// Resolve the AI reason, falling back to [`DEFAULT_AI_REASON`].
pub fn resolve_ai_reason(reason: Option<&str>) -> String {
    non_blank(reason).unwrap_or(DEFAULT_AI_REASON).to_string()
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

// ---------------------------------------------------------------------------
// History presentation
// ---------------------------------------------------------------------------

/// Display title for a history entry, e.g. `"Today's Campus look"`.
pub fn history_title(place: Option<&str>) -> String {
    let place = non_blank(place).unwrap_or(DEFAULT_PLACE_LABEL);
    format!("Today's {place} look")
}

/// Clamp a user-provided history limit to `[1, MAX_HISTORY_LIMIT]`.
pub fn clamp_history_limit(limit: Option<i64>) -> i64 {
    limit
        .unwrap_or(DEFAULT_HISTORY_LIMIT)
        .max(1)
        .min(MAX_HISTORY_LIMIT)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
