//! Moderation service
//!
//! Admin review of the staging queue. Approval runs as one transaction:
//! the record (and, for bundles, its whole batch) is read with `FOR UPDATE`,
//! applied to the live tables, and marked approved before the commit. Any
//! failure rolls everything back and the records stay pending.

use tracing::{info, instrument};

use skillbase_core::entities::{ChangeRecord, ChangeStatus, ResourceDraft};
use skillbase_core::error::DomainError;
use skillbase_core::traits::PendingFilter;
use skillbase_core::value_objects::Id;
use skillbase_db::{applier_for, changes_tx};

use crate::dto::{
    ApprovalResponse, ChangeRecordResponse, ModerationRequest, PendingQueueQuery,
    RejectionResponse,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Moderation service
pub struct ModerationService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ModerationService<'a> {
    /// Create a new ModerationService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Approve a pending change and materialize it into the domain tables.
    ///
    /// Returns the new entity's id when the record was a bundle.
    #[instrument(skip(self, request))]
    pub async fn approve(
        &self,
        change_id: Id,
        request: ModerationRequest,
    ) -> ServiceResult<ApprovalResponse> {
        self.authorize(Id::new(request.actor_id)).await?;

        let mut tx = self
            .ctx
            .pool()
            .begin()
            .await
            .map_err(|e| DomainError::Store(e.to_string()))?;

        // The locking read serializes racing approvals: the loser blocks
        // here until the winner commits, then observes a terminal status.
        let record = changes_tx::find_for_update(&mut tx, change_id)
            .await?
            .ok_or(DomainError::ChangeNotFound(change_id))?;
        if record.status != ChangeStatus::Pending {
            return Err(DomainError::InvalidState {
                id: change_id,
                status: record.status,
            }
            .into());
        }

        let new_entity_id = if record.is_edit() {
            self.apply_edit(&mut tx, &record).await?;
            None
        } else {
            Some(self.apply_bundle(&mut tx, &record).await?)
        };

        tx.commit()
            .await
            .map_err(|e| DomainError::Store(e.to_string()))?;

        info!(
            change_id = %change_id,
            actor_id = request.actor_id,
            new_entity_id = ?new_entity_id,
            "Change approved"
        );

        Ok(ApprovalResponse {
            change_id: change_id.into_inner(),
            new_entity_id: new_entity_id.map(Id::into_inner),
        })
    }

    /// Reject a pending change. The live tables are never touched.
    #[instrument(skip(self, request))]
    pub async fn reject(
        &self,
        change_id: Id,
        request: ModerationRequest,
    ) -> ServiceResult<RejectionResponse> {
        self.authorize(Id::new(request.actor_id)).await?;

        let record = self
            .ctx
            .change_repo()
            .find_by_id(change_id)
            .await?
            .ok_or(DomainError::ChangeNotFound(change_id))?;
        if record.status != ChangeStatus::Pending {
            return Err(DomainError::InvalidState {
                id: change_id,
                status: record.status,
            }
            .into());
        }

        if !self.ctx.change_repo().mark_rejected(change_id).await? {
            // Lost a race with another reviewer between the read and the write
            let status = self
                .ctx
                .change_repo()
                .find_by_id(change_id)
                .await?
                .map_or(ChangeStatus::Rejected, |r| r.status);
            return Err(DomainError::InvalidState {
                id: change_id,
                status,
            }
            .into());
        }

        info!(change_id = %change_id, actor_id = request.actor_id, "Change rejected");

        Ok(RejectionResponse {
            change_id: change_id.into_inner(),
        })
    }

    /// List the pending review queue
    #[instrument(skip(self))]
    pub async fn list_pending(
        &self,
        query: PendingQueueQuery,
    ) -> ServiceResult<Vec<ChangeRecordResponse>> {
        let filter = PendingFilter {
            kind: query.kind,
            entity_id: query.entity_id.map(Id::new),
            include_new: query.include_new,
        };
        let records = self.ctx.change_repo().list_pending(&filter).await?;
        Ok(records.into_iter().map(ChangeRecordResponse::from).collect())
    }

    /// Require the actor to exist and hold the admin role
    async fn authorize(&self, actor_id: Id) -> ServiceResult<()> {
        let actor = self
            .ctx
            .user_repo()
            .find_by_id(actor_id)
            .await?
            .ok_or(DomainError::UserNotFound(actor_id))?;
        if !actor.role.is_admin() {
            return Err(DomainError::forbidden("moderation requires the admin role").into());
        }
        Ok(())
    }

    async fn apply_edit(
        &self,
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        record: &ChangeRecord,
    ) -> ServiceResult<()> {
        let entity_id = record
            .entity_id
            .ok_or_else(|| ServiceError::internal("edit record without an entity id"))?;
        let applier = applier_for(record.entity_kind);
        applier
            .patch_field(tx, entity_id, &record.field_name, &record.proposed_value)
            .await?;
        changes_tx::mark_approved(tx, record.id).await?;
        Ok(())
    }

    /// Materialize a whole bundle from any of its records, returning the new
    /// entity's id
    async fn apply_bundle(
        &self,
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        record: &ChangeRecord,
    ) -> ServiceResult<Id> {
        let batch_id = record
            .batch_id
            .ok_or_else(|| ServiceError::internal("bundle record without a batch id"))?;

        // The approved record is pending, so it is part of the locked batch
        let batch = changes_tx::lock_batch(tx, batch_id).await?;
        let seed = batch
            .iter()
            .find(|r| r.is_seed())
            .ok_or_else(|| DomainError::validation("bundle has no seed-field record"))?;

        let applier = applier_for(record.entity_kind);
        let new_id = applier.create(tx, &seed.proposed_value).await?;
        let seed_id = seed.id;

        for rec in &batch {
            if rec.id != seed_id {
                if rec.is_tag() {
                    applier.attach_tag(tx, new_id, &rec.proposed_value).await?;
                } else if rec.is_resource() {
                    let draft = ResourceDraft::from_stored(&rec.proposed_value).map_err(|e| {
                        DomainError::validation(format!("malformed resource draft: {e}"))
                    })?;
                    applier.attach_resource(tx, new_id, &draft).await?;
                } else {
                    applier
                        .patch_field(tx, new_id, &rec.field_name, &rec.proposed_value)
                        .await?;
                }
            }
            changes_tx::mark_approved(tx, rec.id).await?;
        }

        Ok(new_id)
    }
}
