#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use fittim_core::types::DbId;
use fittim_core::wardrobe::Season;
use fittim_db::models::fit_history::{CreateFitHistory, FitHistory, FitHistorySummaryRow};
use fittim_db::models::wardrobe_item::WardrobeItem;
use fittim_gemini::{CandidateItem, GeminiError, PromptContext, RecommendationResult};
use fittim_pipeline::{
    FallbackSelector, HistoryStore, OutfitAdvisor, PipelineError, Recommender, WardrobeSource,
};

pub const USER_ID: DbId = 1;

/// Build a wardrobe item created `age_minutes` before a fixed instant.
pub fn item(id: DbId, category: &str, season: &str, age_minutes: i64) -> WardrobeItem {
    let base = Utc.with_ymd_and_hms(2025, 6, 1, 9, 0, 0).unwrap();
    let created_at = base - chrono::Duration::minutes(age_minutes);
    WardrobeItem {
        id,
        user_id: USER_ID,
        category_name: category.to_string(),
        season_name: season.to_string(),
        image_url: Some(format!("https://img.example.com/{id}.jpg")),
        name: None,
        brand: None,
        colors: Vec::new(),
        created_at,
        updated_at: created_at,
    }
}

// ---------------------------------------------------------------------------
// Wardrobe
// ---------------------------------------------------------------------------

/// In-memory wardrobe for a single known user. Returns every item regardless
/// of season and counts reads.
pub struct MemoryWardrobe {
    items: Vec<WardrobeItem>,
    pub reads: AtomicUsize,
}

impl MemoryWardrobe {
    pub fn new(items: Vec<WardrobeItem>) -> Self {
        Self {
            items,
            reads: AtomicUsize::new(0),
        }
    }

    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl WardrobeSource for MemoryWardrobe {
    async fn user_exists(&self, user_id: DbId) -> Result<bool, PipelineError> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        Ok(user_id == USER_ID)
    }

    async fn items_for_season(
        &self,
        user_id: DbId,
        _season: Season,
    ) -> Result<Vec<WardrobeItem>, PipelineError> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .items
            .iter()
            .filter(|item| item.user_id == user_id)
            .cloned()
            .collect())
    }
}

// ---------------------------------------------------------------------------
// History
// ---------------------------------------------------------------------------

/// In-memory history. Knows the wardrobe's image URLs so summaries can
/// resolve their representative image.
pub struct MemoryHistory {
    rows: Mutex<Vec<FitHistory>>,
    images: HashMap<DbId, String>,
}

impl MemoryHistory {
    pub fn with_images(items: &[WardrobeItem]) -> Self {
        Self {
            rows: Mutex::new(Vec::new()),
            images: items
                .iter()
                .filter_map(|item| Some((item.id, item.image_url.clone()?)))
                .collect(),
        }
    }

    pub fn rows(&self) -> Vec<FitHistory> {
        self.rows.lock().unwrap().clone()
    }
}

#[async_trait]
impl HistoryStore for MemoryHistory {
    async fn append(&self, entry: CreateFitHistory) -> Result<FitHistory, PipelineError> {
        let mut rows = self.rows.lock().unwrap();
        let id = rows.len() as DbId + 1;
        let created_at = Utc.with_ymd_and_hms(2025, 6, 1, 10, 0, 0).unwrap()
            + chrono::Duration::seconds(id);
        let row = FitHistory {
            id,
            user_id: entry.user_id,
            top_id: entry.top_id,
            bottom_id: entry.bottom_id,
            outer_id: entry.outer_id,
            place: entry.place,
            mood: entry.mood,
            season: entry.season,
            reason: entry.reason,
            created_at,
        };
        rows.push(row.clone());
        Ok(row)
    }

    async fn list_recent(&self, user_id: DbId, limit: i64) -> Result<Vec<FitHistory>, PipelineError> {
        let rows = self.rows.lock().unwrap();
        Ok(rows
            .iter()
            .rev()
            .filter(|row| row.user_id == user_id)
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn list_summaries(
        &self,
        user_id: DbId,
        limit: i64,
    ) -> Result<Vec<FitHistorySummaryRow>, PipelineError> {
        let rows = self.list_recent(user_id, limit).await?;
        Ok(rows
            .into_iter()
            .map(|row| FitHistorySummaryRow {
                image_url: self
                    .images
                    .get(&row.outer_id.unwrap_or(row.top_id))
                    .cloned(),
                id: row.id,
                place: row.place,
                mood: row.mood,
                season: row.season,
                reason: row.reason,
                created_at: row.created_at,
            })
            .collect())
    }
}

// ---------------------------------------------------------------------------
// Advisors
// ---------------------------------------------------------------------------

/// What a [`ScriptedAdvisor`] does when asked.
pub enum Script {
    Answer(RecommendationResult),
    Fail,
    Malformed,
    Hang,
}

/// Advisor with a fixed behaviour. Records the candidates it was shown.
pub struct ScriptedAdvisor {
    script: Script,
    calls: AtomicUsize,
    pub seen: Mutex<Vec<Vec<CandidateItem>>>,
}

impl ScriptedAdvisor {
    pub fn new(script: Script) -> Self {
        Self {
            script,
            calls: AtomicUsize::new(0),
            seen: Mutex::new(Vec::new()),
        }
    }

    pub fn answering(top: DbId, bottom: DbId, outer: Option<DbId>, reason: &str) -> Self {
        Self::new(Script::Answer(RecommendationResult {
            top_id: Some(top),
            bottom_id: Some(bottom),
            outer_id: outer,
            shoes_id: None,
            reason: Some(reason.to_string()),
        }))
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl OutfitAdvisor for ScriptedAdvisor {
    async fn propose(
        &self,
        candidates: &[CandidateItem],
        _context: &PromptContext<'_>,
    ) -> Result<RecommendationResult, GeminiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.seen.lock().unwrap().push(candidates.to_vec());
        match &self.script {
            Script::Answer(result) => Ok(result.clone()),
            Script::Fail => Err(GeminiError::ApiError {
                status: 503,
                body: "model overloaded".to_string(),
            }),
            Script::Malformed => Err(GeminiError::Parse(
                serde_json::from_str::<RecommendationResult>("I suggest the blue shirt")
                    .unwrap_err(),
            )),
            Script::Hang => {
                tokio::time::sleep(Duration::from_secs(30)).await;
                Err(GeminiError::EmptyResponse)
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Harness
// ---------------------------------------------------------------------------

pub struct Harness {
    pub wardrobe: Arc<MemoryWardrobe>,
    pub history: Arc<MemoryHistory>,
    pub advisor: Arc<ScriptedAdvisor>,
    pub recommender: Recommender,
}

pub fn harness(items: Vec<WardrobeItem>, advisor: ScriptedAdvisor) -> Harness {
    harness_with_timeout(items, advisor, Duration::from_secs(2))
}

pub fn harness_with_timeout(
    items: Vec<WardrobeItem>,
    advisor: ScriptedAdvisor,
    ai_timeout: Duration,
) -> Harness {
    let history = Arc::new(MemoryHistory::with_images(&items));
    let wardrobe = Arc::new(MemoryWardrobe::new(items));
    let advisor = Arc::new(advisor);
    let recommender = Recommender::new(
        wardrobe.clone(),
        history.clone(),
        advisor.clone(),
        FallbackSelector::seeded(17),
        ai_timeout,
    );
    Harness {
        wardrobe,
        history,
        advisor,
        recommender,
    }
}
