//! Per-kind entity appliers
//!
//! An applier materializes approved change records into live domain rows. All
//! methods run against the moderation transaction's connection; nothing here
//! commits. Dispatch goes through the closed [`EntityKind`] enum so call
//! sites never branch on strings.

use async_trait::async_trait;
use sqlx::PgConnection;

use skillbase_core::entities::ResourceDraft;
use skillbase_core::traits::RepoResult;
use skillbase_core::value_objects::{EntityKind, Id};

use crate::repositories::map_db_error;

mod career_advice;
mod skill;

pub use career_advice::CareerAdviceApplier;
pub use skill::SkillApplier;

/// Applies approved changes of one entity kind to its live tables
#[async_trait]
pub trait KindApplier: Send + Sync {
    /// Insert a minimal row from the bundle's seed value, returning its id
    async fn create(&self, conn: &mut PgConnection, seed_value: &str) -> RepoResult<Id>;

    /// Overwrite one allow-listed column of one existing row
    async fn patch_field(
        &self,
        conn: &mut PgConnection,
        id: Id,
        field: &str,
        value: &str,
    ) -> RepoResult<()>;

    /// Upsert the tag by name and associate it with the entity
    async fn attach_tag(&self, conn: &mut PgConnection, id: Id, name: &str) -> RepoResult<()>;

    /// Insert an approved resource owned by the entity
    async fn attach_resource(
        &self,
        conn: &mut PgConnection,
        id: Id,
        draft: &ResourceDraft,
    ) -> RepoResult<()>;
}

/// Look up the applier for an entity kind
#[must_use]
pub fn applier_for(kind: EntityKind) -> &'static dyn KindApplier {
    match kind {
        EntityKind::Skill => &SkillApplier,
        EntityKind::CareerAdvice => &CareerAdviceApplier,
    }
}

/// Insert or fetch a tag row by its unique name, returning the tag id.
///
/// The no-op `DO UPDATE` makes `RETURNING` yield the existing row's id on
/// conflict, so one round trip covers both cases.
async fn upsert_tag(conn: &mut PgConnection, name: &str) -> RepoResult<i64> {
    sqlx::query_scalar::<_, i64>(
        r"
        INSERT INTO tags (name)
        VALUES ($1)
        ON CONFLICT (name) DO UPDATE SET name = EXCLUDED.name
        RETURNING id
        ",
    )
    .bind(name)
    .fetch_one(conn)
    .await
    .map_err(map_db_error)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_applier_dispatch_covers_all_kinds() {
        for kind in EntityKind::ALL {
            // Dispatch is total; a new kind without an applier fails to compile
            let _ = applier_for(kind);
        }
    }
}
