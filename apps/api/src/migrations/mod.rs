// Schema evolution as explicit forward/backward DDL statement lists.
//
// The two lists are deliberately independent: a revert is whatever the
// migration author wrote, never something inferred from the forward path.
// That keeps intentional asymmetries visible (the trigram migration installs
// the pg_trgm extension but its backward list leaves it in place).

mod add_gamification_columns;
mod add_trigram_search_indices;
mod create_core_tables;
pub mod runner;

pub use add_gamification_columns::ADD_GAMIFICATION_COLUMNS;
pub use add_trigram_search_indices::ADD_TRIGRAM_SEARCH_INDICES;
pub use create_core_tables::CREATE_CORE_TABLES;

/// One schema change. `id` is embedded at the front of `name` and determines
/// execution order; the runner applies `forward` (and reverts `backward`)
/// inside a single transaction per migration.
pub struct Migration {
    pub id: i64,
    pub name: &'static str,
    pub forward: &'static [&'static str],
    pub backward: &'static [&'static str],
}

/// Every known migration, in execution order.
pub fn all() -> &'static [Migration] {
    const ALL: &[Migration] = &[
        CREATE_CORE_TABLES,
        ADD_TRIGRAM_SEARCH_INDICES,
        ADD_GAMIFICATION_COLUMNS,
    ];
    ALL
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_ids_are_strictly_increasing() {
        let ids: Vec<i64> = all().iter().map(|m| m.id).collect();
        assert!(ids.windows(2).all(|w| w[0] < w[1]), "ids not ordered: {ids:?}");
    }

    #[test]
    fn test_names_embed_their_id() {
        for migration in all() {
            assert!(
                migration.name.starts_with(&migration.id.to_string()),
                "{} does not start with {}",
                migration.name,
                migration.id
            );
        }
    }

    #[test]
    fn test_every_migration_is_reversible() {
        for migration in all() {
            assert!(!migration.forward.is_empty(), "{} has no forward", migration.name);
            assert!(!migration.backward.is_empty(), "{} has no backward", migration.name);
        }
    }

    #[test]
    fn test_trigram_backward_never_drops_the_shared_extension() {
        for statement in ADD_TRIGRAM_SEARCH_INDICES.backward {
            assert!(
                !statement.contains("EXTENSION"),
                "backward list must leave pg_trgm installed: {statement}"
            );
        }
    }

    #[test]
    fn test_trigram_indices_drop_in_reverse_creation_order() {
        let created: Vec<&str> = ADD_TRIGRAM_SEARCH_INDICES
            .forward
            .iter()
            .filter(|s| s.contains("CREATE INDEX"))
            .map(|s| index_name(s))
            .collect();
        let dropped: Vec<&str> = ADD_TRIGRAM_SEARCH_INDICES
            .backward
            .iter()
            .map(|s| index_name(s))
            .collect();

        let mut reversed = created.clone();
        reversed.reverse();
        assert_eq!(dropped, reversed);
    }

    #[test]
    fn test_gamification_forward_is_guarded_for_reapplication() {
        for statement in ADD_GAMIFICATION_COLUMNS.forward {
            assert!(
                statement.contains("IF NOT EXISTS"),
                "unguarded statement would fail on re-run: {statement}"
            );
        }
    }

    #[test]
    fn test_gamification_backward_drops_comment_columns_before_user_columns() {
        let tables: Vec<&str> = ADD_GAMIFICATION_COLUMNS
            .backward
            .iter()
            .map(|s| {
                if s.contains("comments") {
                    "comments"
                } else {
                    "users"
                }
            })
            .collect();
        assert_eq!(tables, ["comments", "comments", "users", "users"]);
    }

    #[test]
    fn test_core_tables_drop_in_reverse_dependency_order() {
        let dropped: Vec<&str> = CREATE_CORE_TABLES
            .backward
            .iter()
            .map(|s| s.rsplit(' ').next().unwrap())
            .collect();
        assert_eq!(dropped, ["comments", "users", "idioms"]);
    }

    /// Pulls the index identifier out of a CREATE/DROP INDEX statement.
    fn index_name(statement: &str) -> &str {
        statement
            .split_whitespace()
            .skip_while(|w| *w != "EXISTS")
            .nth(1)
            .unwrap_or_else(|| panic!("no index name in: {statement}"))
    }
}
