//! Fixture store for offline mode.
//!
//! Static sample rows for local UI development, no database required. The
//! roster deliberately covers the interesting classifier cases: a count far
//! past the top boundary, mid-range tiers, a tied pair, and a negative count
//! (which must classify as unranked, never error).

use super::{ProfileRow, ScoreRow};

/// (id, name, role, current-month count)
const FIXTURE_TEAM: &[(i64, &str, Option<&str>, i64)] = &[
    (20269, "Vitor Supremo", Some("ANALISTA DE SISTEMAS SR"), 929_300),
    (19515, "Maria Dev", None, 120),
    (18676, "Pedro Moser", None, 65),
    (13424, "Teste Quatro", None, 65),
    (16329, "Adrian Humilde", None, -5000),
];

/// (name, count) for an arbitrary past month.
const FIXTURE_HISTORY: &[(&str, i64)] = &[
    ("Lenda Passada", 300),
    ("Antigo Campeao", 250),
    ("Veterano", 180),
];

/// In-process store serving the fixtures above.
#[derive(Clone, Default)]
pub struct FixtureStore;

impl FixtureStore {
    pub fn new() -> Self {
        Self
    }

    /// Unknown ids miss here too, so offline mode exercises the same
    /// not-found path as the live store.
    pub fn profile(&self, employee_id: i64) -> Option<ProfileRow> {
        FIXTURE_TEAM
            .iter()
            .find(|(id, _, _, _)| *id == employee_id)
            .map(|&(_, name, role, count)| ProfileRow {
                name: name.to_string(),
                role: role.map(str::to_string),
                count,
            })
    }

    pub fn leaderboard(&self) -> Vec<ScoreRow> {
        let mut rows: Vec<ScoreRow> = FIXTURE_TEAM
            .iter()
            .map(|&(_, name, _, count)| ScoreRow {
                name: name.to_string(),
                count,
            })
            .collect();
        // Stable sort keeps fixture order on ties.
        rows.sort_by(|a, b| b.count.cmp(&a.count));
        rows
    }

    pub fn history(&self) -> Vec<ScoreRow> {
        FIXTURE_HISTORY
            .iter()
            .map(|&(name, count)| ScoreRow {
                name: name.to_string(),
                count,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_hits_known_id_and_misses_unknown() {
        let store = FixtureStore::new();

        let profile = store.profile(20269).expect("fixture id should resolve");
        assert_eq!(profile.name, "Vitor Supremo");
        assert_eq!(profile.role.as_deref(), Some("ANALISTA DE SISTEMAS SR"));
        assert_eq!(profile.count, 929_300);

        assert!(store.profile(99999).is_none());
    }

    #[test]
    fn leaderboard_is_sorted_descending_and_keeps_negative_counts() {
        let rows = FixtureStore::new().leaderboard();
        assert_eq!(rows.len(), FIXTURE_TEAM.len());
        assert!(rows.windows(2).all(|w| w[0].count >= w[1].count));

        let last = rows.last().unwrap();
        assert_eq!(last.name, "Adrian Humilde");
        assert_eq!(last.count, -5000);
    }

    #[test]
    fn leaderboard_ties_keep_fixture_order() {
        let rows = FixtureStore::new().leaderboard();

        // Pedro and Teste are tied at 65; Pedro comes first in the fixture
        // table and must stay ahead after sorting.
        let pedro = rows.iter().position(|r| r.name == "Pedro Moser").unwrap();
        let teste = rows.iter().position(|r| r.name == "Teste Quatro").unwrap();
        assert_eq!(rows[pedro].count, rows[teste].count);
        assert!(pedro < teste);
    }

    #[test]
    fn history_is_sorted_descending() {
        let rows = FixtureStore::new().history();
        assert_eq!(rows.len(), 3);
        assert!(rows.windows(2).all(|w| w[0].count >= w[1].count));
    }
}
