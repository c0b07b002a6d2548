use crate::entitys::article_entity::ArticleInfo;
use chrono::{Duration, Utc};
use common::{MemoryRepository, RepoResult, Repository, apply_limit, sort_newest_first};
use log::info;

#[derive(Debug)]
pub struct ArticleService {
    pub dao: MemoryRepository<ArticleInfo>,
}

impl ArticleService {
    pub fn new() -> Self {
        Self { dao: MemoryRepository::new("article") }
    }

    pub async fn add(&self, article: ArticleInfo) -> RepoResult<ArticleInfo> {
        self.dao.insert(article).await
    }

    /// Newest first, truncated to `limit` when positive.
    pub async fn list(&self, limit: Option<i64>) -> RepoResult<Vec<ArticleInfo>> {
        let mut rows = self.dao.query_all().await?;
        sort_newest_first(&mut rows, |a| a.published_at);
        Ok(apply_limit(rows, limit))
    }

    pub async fn find_by_id(&self, id: i64) -> RepoResult<Option<ArticleInfo>> {
        self.dao.find_by_id(id).await
    }

    /// Loads the built-in articles.
    pub async fn seed_defaults(&self) -> RepoResult<usize> {
        let seeds = default_articles();
        let count = seeds.len();
        for article in seeds {
            self.add(article).await?;
        }
        info!("seeded {} blog articles", count);
        Ok(count)
    }
}

impl Default for ArticleService {
    fn default() -> Self {
        Self::new()
    }
}

fn default_articles() -> Vec<ArticleInfo> {
    let today = Utc::now();
    let article = |days_ago: i64, title: &str, category: &str, summary: &str, content: &str| ArticleInfo {
        id: 0,
        title: title.to_string(),
        summary: summary.to_string(),
        content: content.to_string(),
        author: "Editorial team".to_string(),
        category: category.to_string(),
        image_url: None,
        published_at: today - Duration::days(days_ago),
    };
    vec![
        article(
            30,
            "Building a balanced plate",
            "nutrition",
            "Half vegetables, a quarter protein, a quarter whole grains.",
            "A balanced plate keeps portions in check without counting every calorie. Fill half of the plate with vegetables, \
             a quarter with lean protein and the rest with whole grains, then add a small amount of healthy fat.",
        ),
        article(
            14,
            "Hydration and weight management",
            "lifestyle",
            "Why water intake matters more than most clients think.",
            "Thirst is often mistaken for hunger. Most adults need around 30-35 ml of water per kilogram of body weight per day, \
             more in hot weather or on training days.",
        ),
        article(
            3,
            "Reading body composition results",
            "measurement",
            "Weight alone hides the difference between fat and muscle.",
            "Track body fat percentage and waist circumference next to weight. A stable weight with a shrinking waist usually \
             means the plan is working.",
        ),
    ]
}
