//! Data sources for ranking rows.
//!
//! The endpoints are polymorphic over two backends with one contract: the
//! live SQLite store and the in-process fixture store used by offline mode.
//! Both return the same row shapes; dispatch is a plain enum match.

use sqlx::SqlitePool;

mod fixture;
mod live;

pub use fixture::FixtureStore;
pub use live::{connect_readonly, LiveStore};

/// One employee's profile row: display name, optional role title, and the
/// resolved-ticket count for the current month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileRow {
    pub name: String,
    pub role: Option<String>,
    pub count: i64,
}

/// One leaderboard/history row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreRow {
    pub name: String,
    pub count: i64,
}

/// Storage backend selected once at startup from configuration.
#[derive(Clone)]
pub enum Store {
    Live(LiveStore),
    Fixture(FixtureStore),
}

impl Store {
    pub fn live(pool: SqlitePool) -> Self {
        Store::Live(LiveStore::new(pool))
    }

    pub fn fixture() -> Self {
        Store::Fixture(FixtureStore::new())
    }

    /// Look up one employee with their current-month count. `None` when the
    /// employee id is unknown, in either backend.
    pub async fn profile(&self, employee_id: i64) -> Result<Option<ProfileRow>, sqlx::Error> {
        match self {
            Store::Live(live) => live.profile(employee_id).await,
            Store::Fixture(fixture) => Ok(fixture.profile(employee_id)),
        }
    }

    /// Current-month counts for the given roster, sorted by count descending
    /// (stable on ties).
    pub async fn leaderboard(&self, team: &[i64]) -> Result<Vec<ScoreRow>, sqlx::Error> {
        match self {
            Store::Live(live) => live.leaderboard(team).await,
            Store::Fixture(fixture) => Ok(fixture.leaderboard()),
        }
    }

    /// Counts for an explicit year/month, sorted by count descending.
    /// Parameter validation happens at the endpoint, before this is called.
    pub async fn history(
        &self,
        year: i32,
        month: u32,
        team: &[i64],
    ) -> Result<Vec<ScoreRow>, sqlx::Error> {
        match self {
            Store::Live(live) => live.history(year, month, team).await,
            Store::Fixture(fixture) => Ok(fixture.history()),
        }
    }
}
