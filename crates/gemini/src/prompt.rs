//! Stylist prompt construction.
//!
//! Candidates are serialized as a compact JSON array of
//! `{id, category, season}` to keep the prompt small; display metadata
//! (names, brands, colors) is not sent.

use fittim_core::types::DbId;
use fittim_core::wardrobe::{Category, Season};
use serde::Serialize;

/// One wardrobe item as shown to the model.
#[derive(Debug, Clone, Serialize)]
pub struct CandidateItem {
    pub id: DbId,
    pub category: Category,
    pub season: Season,
}

/// Situation the outfit is for.
#[derive(Debug, Clone)]
pub struct PromptContext<'a> {
    pub place: &'a str,
    pub mood: &'a str,
    pub season: Season,
    pub weather: &'a str,
}

/// Build the stylist prompt for `candidates` in `context`.
pub fn build_prompt(
    candidates: &[CandidateItem],
    context: &PromptContext<'_>,
) -> Result<String, serde_json::Error> {
    let items_json = serde_json::to_string(candidates)?;

    Ok(format!(
        "You are a minimalist fashion stylist for people in their twenties.\n\
         From the [Wardrobe] below, put together the outfit that best suits \
         [Situation: {place}, {mood}, {season}, Weather: {weather}].\n\
         \n\
         [Response rules]\n\
         1. Respond ONLY with the JSON object below. Do not use Markdown code blocks.\n\
         2. Use only ids that appear in the [Wardrobe]; topId must be a TOP, \
         bottomId a BOTTOM, outerId an OUTER.\n\
         3. In the `reason` field, explain in 1-2 sentences why this outfit fits.\n\
         \n\
         [JSON format]\n\
         {{\n\
         \x20 \"topId\": (integer),\n\
         \x20 \"bottomId\": (integer),\n\
         \x20 \"outerId\": (integer or null),\n\
         \x20 \"shoesId\": (integer or null),\n\
         \x20 \"reason\": \"why this outfit was recommended\"\n\
         }}\n\
         \n\
         [Wardrobe]\n\
         {items_json}\n",
        place = context.place,
        mood = context.mood,
        season = context.season,
        weather = context.weather,
    ))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
