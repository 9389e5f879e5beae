//! Live SQLite-backed store.
//!
//! Expected schema (owned by the external ticketing system, not by this
//! service):
//!
//! - `employees(id INTEGER PRIMARY KEY, name TEXT NOT NULL, role_id INTEGER)`
//! - `roles(id INTEGER PRIMARY KEY, title TEXT NOT NULL)`
//! - `tickets(id INTEGER PRIMARY KEY, assignee_id INTEGER NOT NULL,
//!    status INTEGER NOT NULL, resolved_at TEXT)` with ISO-8601 dates.
//!
//! All externally supplied values (employee id, team ids, year, month) are
//! bound parameters; roster `IN` lists are built as placeholder strings with
//! one bind per id.

use anyhow::{Context, Result};
use chrono::{Datelike, Local, NaiveDate};
use sqlx::SqlitePool;

use super::{ProfileRow, ScoreRow};

/// Ticket status code meaning "resolved".
const STATUS_RESOLVED: i64 = 3;

/// Connect with SQLite read-only mode. This service never writes; `mode=ro`
/// makes that a property of the connection rather than a convention.
pub async fn connect_readonly(database_url: &str) -> Result<SqlitePool> {
    let url = if database_url.contains('?') {
        format!("{}&mode=ro", database_url)
    } else {
        format!("{}?mode=ro", database_url)
    };

    SqlitePool::connect(&url)
        .await
        .with_context(|| format!("failed to connect read-only to {}", database_url))
}

/// Store backed by the external ticketing database.
#[derive(Clone)]
pub struct LiveStore {
    pool: SqlitePool,
}

impl LiveStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn profile(&self, employee_id: i64) -> Result<Option<ProfileRow>, sqlx::Error> {
        // Role reference data is joined for the profile view only. The
        // ticket join is LEFT so an employee with zero resolutions this
        // month still resolves with count 0.
        let row = sqlx::query_as::<_, (String, Option<String>, i64)>(
            "SELECT e.name, r.title, COUNT(t.id)
             FROM employees e
             LEFT JOIN roles r ON e.role_id = r.id
             LEFT JOIN tickets t ON t.assignee_id = e.id
                 AND t.status = ?
                 AND t.resolved_at >= ?
             WHERE e.id = ?
             GROUP BY e.id, e.name, r.title",
        )
        .bind(STATUS_RESOLVED)
        .bind(month_start_param())
        .bind(employee_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|(name, role, count)| ProfileRow { name, role, count }))
    }

    pub async fn leaderboard(&self, team: &[i64]) -> Result<Vec<ScoreRow>, sqlx::Error> {
        if team.is_empty() {
            return Ok(Vec::new());
        }

        let sql = format!(
            "SELECT e.name, COUNT(t.id) AS score
             FROM employees e
             LEFT JOIN tickets t ON t.assignee_id = e.id
                 AND t.status = ?
                 AND t.resolved_at >= ?
             WHERE e.id IN ({})
             GROUP BY e.id, e.name
             ORDER BY score DESC, e.id ASC",
            placeholders(team.len())
        );

        let mut query = sqlx::query_as::<_, (String, i64)>(&sql)
            .bind(STATUS_RESOLVED)
            .bind(month_start_param());
        for &id in team {
            query = query.bind(id);
        }

        let rows = query.fetch_all(&self.pool).await?;
        Ok(rows
            .into_iter()
            .map(|(name, count)| ScoreRow { name, count })
            .collect())
    }

    pub async fn history(
        &self,
        year: i32,
        month: u32,
        team: &[i64],
    ) -> Result<Vec<ScoreRow>, sqlx::Error> {
        if team.is_empty() {
            return Ok(Vec::new());
        }

        // Inner join here: history only lists employees who resolved
        // something in that month.
        let sql = format!(
            "SELECT e.name, COUNT(t.id) AS score
             FROM employees e
             JOIN tickets t ON t.assignee_id = e.id
             WHERE t.status = ?
               AND CAST(strftime('%Y', t.resolved_at) AS INTEGER) = ?
               AND CAST(strftime('%m', t.resolved_at) AS INTEGER) = ?
               AND e.id IN ({})
             GROUP BY e.id, e.name
             ORDER BY score DESC, e.id ASC",
            placeholders(team.len())
        );

        let mut query = sqlx::query_as::<_, (String, i64)>(&sql)
            .bind(STATUS_RESOLVED)
            .bind(year)
            .bind(month as i64);
        for &id in team {
            query = query.bind(id);
        }

        let rows = query.fetch_all(&self.pool).await?;
        Ok(rows
            .into_iter()
            .map(|(name, count)| ScoreRow { name, count })
            .collect())
    }
}

/// `?,?,...,?` list for a roster `IN` clause.
fn placeholders(n: usize) -> String {
    vec!["?"; n].join(",")
}

/// First day of the current calendar month, as an ISO date string suitable
/// for comparison against `resolved_at`.
fn month_start_param() -> String {
    let today = Local::now().date_naive();
    let start = NaiveDate::from_ymd_opt(today.year(), today.month(), 1).unwrap_or(today);
    start.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_list_matches_roster_size() {
        assert_eq!(placeholders(1), "?");
        assert_eq!(placeholders(3), "?,?,?");
    }

    #[test]
    fn month_start_is_day_one() {
        let param = month_start_param();
        assert!(param.ends_with("-01"), "got {}", param);
        assert_eq!(param.len(), "2026-08-01".len());
    }
}
