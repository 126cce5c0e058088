use rust_decimal_macros::dec;
use thiserror::Error;
use tokio::sync::RwLock;

use crate::models::{Asset, AssetFilter, AssetQuestionAnswer, Contribution, Goal, Question};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("{0}")]
    NotFound(String),
}

/// Insertion-ordered records of one entity type.
///
/// Identifiers are not unique: replacement hits the first match, "latest"
/// lookups the last.
#[derive(Debug, Clone)]
pub struct Collection<T> {
    records: Vec<T>,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
        }
    }
}

impl<T: Clone> Collection<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: Vec<T>) -> Self {
        Self { records }
    }

    pub fn append(&mut self, record: T) -> T {
        self.records.push(record.clone());
        record
    }

    pub fn list_all(&self) -> Vec<T> {
        self.records.clone()
    }

    pub fn list(&self, filter: impl Fn(&T) -> bool) -> Vec<T> {
        self.records.iter().filter(|r| filter(*r)).cloned().collect()
    }

    pub fn find_latest(&self, key: impl Fn(&T) -> bool) -> Option<T> {
        self.records.iter().rev().find(|r| key(*r)).cloned()
    }

    /// Swaps `record` in for the first match. The collection is untouched on a miss.
    pub fn replace_first(
        &mut self,
        key: impl Fn(&T) -> bool,
        record: T,
        missing: impl FnOnce() -> String,
    ) -> Result<T, StoreError> {
        match self.records.iter().position(|r| key(r)) {
            Some(index) => {
                self.records[index] = record.clone();
                Ok(record)
            }
            None => Err(StoreError::NotFound(missing())),
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[derive(Debug, Default)]
struct Collections {
    assets: Collection<Asset>,
    contributions: Collection<Contribution>,
    goals: Collection<Goal>,
    questions: Collection<Question>,
    answers: Collection<AssetQuestionAnswer>,
}

/// In-memory store for every entity. All collections sit behind one lock,
/// and each method takes it exactly once.
#[derive(Debug, Default)]
pub struct Store {
    inner: RwLock<Collections>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_assets(assets: Vec<Asset>) -> Self {
        Self {
            inner: RwLock::new(Collections {
                assets: Collection::from_records(assets),
                ..Collections::default()
            }),
        }
    }

    pub fn with_demo_assets() -> Self {
        Self::with_assets(demo_assets())
    }

    // Assets

    pub async fn add_asset(&self, asset: Asset) -> Asset {
        self.inner.write().await.assets.append(asset)
    }

    pub async fn list_assets(&self, filter: &AssetFilter) -> Vec<Asset> {
        self.inner.read().await.assets.list(|a| filter.matches(a))
    }

    pub async fn assets_snapshot(&self) -> Vec<Asset> {
        self.inner.read().await.assets.list_all()
    }

    pub async fn replace_asset_by_id(&self, id: i64, asset: Asset) -> Result<Asset, StoreError> {
        self.inner.write().await.assets.replace_first(
            |a| a.id == Some(id),
            asset,
            || format!("asset {} not found", id),
        )
    }

    pub async fn replace_asset_by_ticker(&self, asset: Asset) -> Result<Asset, StoreError> {
        let ticker = asset.ticker.clone();
        self.inner.write().await.assets.replace_first(
            |a| a.ticker == ticker,
            asset,
            || format!("asset {} not found", ticker),
        )
    }

    // Contributions

    pub async fn add_contribution(&self, contribution: Contribution) -> Contribution {
        self.inner.write().await.contributions.append(contribution)
    }

    pub async fn latest_contribution(&self, user_id: i64) -> Option<Contribution> {
        self.inner
            .read()
            .await
            .contributions
            .find_latest(|c| c.user_id == user_id)
    }

    // Goals

    pub async fn add_goal(&self, goal: Goal) -> Goal {
        self.inner.write().await.goals.append(goal)
    }

    pub async fn goals_for_user(&self, user_id: i64) -> Vec<Goal> {
        self.inner.read().await.goals.list(|g| g.user_id == user_id)
    }

    // Questions

    pub async fn add_question(&self, question: Question) -> Question {
        self.inner.write().await.questions.append(question)
    }

    pub async fn questions(&self) -> Vec<Question> {
        self.inner.read().await.questions.list_all()
    }

    // Answers

    pub async fn add_answer(&self, answer: AssetQuestionAnswer) -> AssetQuestionAnswer {
        self.inner.write().await.answers.append(answer)
    }

    pub async fn answers_for_asset(&self, asset_id: i64) -> Vec<AssetQuestionAnswer> {
        self.inner
            .read()
            .await
            .answers
            .list(|a| a.asset_id == asset_id)
    }
}

/// Starter holdings loaded when `SEED_DEMO_ASSETS` is on.
pub fn demo_assets() -> Vec<Asset> {
    vec![
        Asset {
            id: Some(1),
            asset_type: "Fundos Imobiliários".to_string(),
            ticker: "XPML11".to_string(),
            price: dec!(100.95),
            percentage: dec!(3.97),
            score: 6,
            quantity: 50,
        },
        Asset {
            id: Some(2),
            asset_type: "Fundos Imobiliários".to_string(),
            ticker: "HFOF11".to_string(),
            price: dec!(54.50),
            percentage: dec!(2.67),
            score: 4,
            quantity: 30,
        },
        Asset {
            id: Some(3),
            asset_type: "Ações Nacionais".to_string(),
            ticker: "ITUB4".to_string(),
            price: dec!(31.64),
            percentage: dec!(1.83),
            score: 13,
            quantity: 200,
        },
    ]
}
