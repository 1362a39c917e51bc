//! Proposal service
//!
//! Members submit changes here; nothing in this service touches the live
//! domain tables. Every free-text value passes the content screener before
//! any record is staged, so a rejection writes nothing at all.

use tracing::{info, instrument};
use uuid::Uuid;

use skillbase_core::entities::{NewChange, ResourceDraft, TAG_FIELD};
use skillbase_core::error::DomainError;
use skillbase_core::value_objects::Id;

use crate::dto::{ProposalAcceptedResponse, SubmitEditRequest, SubmitEntityRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Proposal service
pub struct ProposalService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ProposalService<'a> {
    /// Create a new ProposalService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Stage a single-field edit of an existing entity
    #[instrument(skip(self, request))]
    pub async fn submit_edit(
        &self,
        request: SubmitEditRequest,
    ) -> ServiceResult<ProposalAcceptedResponse> {
        let kind = request.entity_kind;
        let field = kind
            .resolve_field(&request.field_name)
            .ok_or_else(|| DomainError::UnknownField {
                kind,
                field: request.field_name.clone(),
            })?;

        self.screen(field, &request.proposed_value).await?;

        let change = NewChange::edit(
            kind,
            Id::new(request.entity_id),
            field,
            request.proposed_value,
            request.current_value,
            Id::new(request.proposer_id),
        );
        let change_id = self.ctx.change_repo().stage(&change).await?;

        info!(
            change_id = %change_id,
            kind = %kind,
            entity_id = request.entity_id,
            field,
            "Edit proposal staged"
        );

        Ok(ProposalAcceptedResponse {
            change_id: change_id.into_inner(),
        })
    }

    /// Stage a new-entity bundle: scalar fields, tags, and resources sharing
    /// one batch id. Returns the seed record's id.
    #[instrument(skip(self, request))]
    pub async fn submit_new_entity(
        &self,
        request: SubmitEntityRequest,
    ) -> ServiceResult<ProposalAcceptedResponse> {
        let kind = request.entity_kind;
        let proposer = Id::new(request.proposer_id);

        if !request.resources.is_empty() && !kind.owns_resources() {
            return Err(ServiceError::validation(format!(
                "{kind} entities do not own resources"
            )));
        }

        // Resolve every field name before screening anything
        let mut seed_value: Option<String> = None;
        let mut fields: Vec<(&'static str, String)> = Vec::new();
        for (name, value) in request.fields {
            let column = kind.resolve_field(&name).ok_or_else(|| DomainError::UnknownField {
                kind,
                field: name.clone(),
            })?;
            if column == kind.seed_field() {
                seed_value = Some(value);
            } else {
                fields.push((column, value));
            }
        }
        let seed_value = seed_value.ok_or_else(|| {
            ServiceError::validation(format!(
                "a new {kind} submission must include its '{}' field",
                kind.seed_field()
            ))
        })?;

        let tags: Vec<String> = request
            .tags
            .into_iter()
            .map(|t| t.trim().to_string())
            .collect();
        if tags.iter().any(String::is_empty) {
            return Err(ServiceError::validation("tag names must not be blank"));
        }

        // All-or-nothing content gate: scan every value before any insert
        self.screen(kind.seed_field(), &seed_value).await?;
        for (column, value) in &fields {
            self.screen(column, value).await?;
        }
        for tag in &tags {
            self.screen(TAG_FIELD, tag).await?;
        }
        for resource in &request.resources {
            self.screen("resource title", &resource.title).await?;
            self.screen("resource description", &resource.description).await?;
        }

        let batch_id = Uuid::new_v4();
        // Seed record first, so the first assigned id identifies the bundle
        let mut changes = vec![NewChange::bundle_field(
            kind,
            kind.seed_field(),
            seed_value,
            proposer,
            batch_id,
        )];
        for (column, value) in fields {
            changes.push(NewChange::bundle_field(kind, column, value, proposer, batch_id));
        }
        for tag in tags {
            changes.push(NewChange::bundle_tag(kind, tag, proposer, batch_id));
        }
        for resource in request.resources {
            let draft = ResourceDraft::from(resource);
            let stored = draft
                .to_stored()
                .map_err(|e| ServiceError::internal(format!("failed to encode resource draft: {e}")))?;
            changes.push(NewChange::bundle_resource(kind, stored, proposer, batch_id));
        }

        let staged = changes.len();
        let ids = self.ctx.change_repo().stage_bundle(&changes).await?;
        let seed_id = ids
            .first()
            .copied()
            .ok_or_else(|| ServiceError::internal("bundle staged no records"))?;

        info!(
            seed_change_id = %seed_id,
            kind = %kind,
            batch_id = %batch_id,
            staged,
            "New-entity proposal staged"
        );

        Ok(ProposalAcceptedResponse {
            change_id: seed_id.into_inner(),
        })
    }

    async fn screen(&self, field: &str, value: &str) -> ServiceResult<()> {
        if self.ctx.screener().scan(value).await? {
            return Err(DomainError::ContentRejected {
                field: field.to_string(),
            }
            .into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;

    use skillbase_core::entities::{CareerAdvice, ChangeRecord, Resource, Skill, User};
    use skillbase_core::traits::{
        CatalogRepository, ChangeRecordRepository, PendingFilter, RepoResult, UserRepository,
    };
    use skillbase_core::value_objects::EntityKind;

    use crate::dto::ResourceDraftRequest;
    use crate::services::screen::TermListScreener;

    #[derive(Default)]
    struct RecordingChangeRepo {
        staged: Mutex<Vec<NewChange>>,
    }

    #[async_trait]
    impl ChangeRecordRepository for RecordingChangeRepo {
        async fn find_by_id(&self, _id: Id) -> RepoResult<Option<ChangeRecord>> {
            Ok(None)
        }

        async fn stage(&self, change: &NewChange) -> RepoResult<Id> {
            let mut staged = self.staged.lock().unwrap();
            staged.push(change.clone());
            Ok(Id::new(staged.len() as i64))
        }

        async fn stage_bundle(&self, changes: &[NewChange]) -> RepoResult<Vec<Id>> {
            let mut staged = self.staged.lock().unwrap();
            let mut ids = Vec::with_capacity(changes.len());
            for change in changes {
                staged.push(change.clone());
                ids.push(Id::new(staged.len() as i64));
            }
            Ok(ids)
        }

        async fn list_pending(&self, _filter: &PendingFilter) -> RepoResult<Vec<ChangeRecord>> {
            Ok(Vec::new())
        }

        async fn mark_rejected(&self, _id: Id) -> RepoResult<bool> {
            Ok(false)
        }
    }

    struct NoUsers;

    #[async_trait]
    impl UserRepository for NoUsers {
        async fn find_by_id(&self, _id: Id) -> RepoResult<Option<User>> {
            Ok(None)
        }
    }

    struct EmptyCatalog;

    #[async_trait]
    impl CatalogRepository for EmptyCatalog {
        async fn list_skills(&self) -> RepoResult<Vec<Skill>> {
            Ok(Vec::new())
        }
        async fn list_skill_resources(&self, _skill_id: Id) -> RepoResult<Vec<Resource>> {
            Ok(Vec::new())
        }
        async fn list_resources_for_skills(&self, _skill_ids: &[Id]) -> RepoResult<Vec<Resource>> {
            Ok(Vec::new())
        }
        async fn list_published_advice(&self) -> RepoResult<Vec<CareerAdvice>> {
            Ok(Vec::new())
        }
        async fn search_skills(&self, _query: &str, _limit: i64) -> RepoResult<Vec<Skill>> {
            Ok(Vec::new())
        }
        async fn search_advice(&self, _query: &str, _limit: i64) -> RepoResult<Vec<CareerAdvice>> {
            Ok(Vec::new())
        }
    }

    fn test_context(repo: Arc<RecordingChangeRepo>) -> ServiceContext {
        // connect_lazy never touches the network; the proposal tests stay
        // entirely on the mocks
        let pool = skillbase_db::PgPool::connect_lazy("postgres://localhost/unused").unwrap();
        ServiceContext::new(
            pool,
            repo,
            Arc::new(NoUsers),
            Arc::new(EmptyCatalog),
            Arc::new(TermListScreener::new(["spam"])),
        )
    }

    fn edit_request(field: &str, value: &str) -> SubmitEditRequest {
        SubmitEditRequest {
            entity_kind: EntityKind::Skill,
            entity_id: 7,
            field_name: field.to_string(),
            proposed_value: value.to_string(),
            current_value: None,
            proposer_id: 3,
        }
    }

    #[tokio::test]
    async fn test_submit_edit_stages_pending_record() {
        let repo = Arc::new(RecordingChangeRepo::default());
        let ctx = test_context(repo.clone());
        let service = ProposalService::new(&ctx);

        let response = service
            .submit_edit(edit_request("description", "A better description"))
            .await
            .unwrap();
        assert_eq!(response.change_id, 1);

        let staged = repo.staged.lock().unwrap();
        assert_eq!(staged.len(), 1);
        assert_eq!(staged[0].field_name, "description");
        assert!(!staged[0].is_new_entity);
        assert_eq!(staged[0].entity_id, Some(Id::new(7)));
    }

    #[tokio::test]
    async fn test_screener_rejection_stages_nothing() {
        let repo = Arc::new(RecordingChangeRepo::default());
        let ctx = test_context(repo.clone());
        let service = ProposalService::new(&ctx);

        let err = service
            .submit_edit(edit_request("description", "free SPAM here"))
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), 422);
        assert!(repo.staged.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_unknown_field_is_rejected() {
        let repo = Arc::new(RecordingChangeRepo::default());
        let ctx = test_context(repo.clone());
        let service = ProposalService::new(&ctx);

        let err = service
            .submit_edit(edit_request("industry", "Finance"))
            .await
            .unwrap_err();
        assert_eq!(err.error_code(), "UNKNOWN_FIELD");
        assert!(repo.staged.lock().unwrap().is_empty());
    }

    fn entity_request(kind: EntityKind, fields: &[(&str, &str)]) -> SubmitEntityRequest {
        SubmitEntityRequest {
            entity_kind: kind,
            fields: fields
                .iter()
                .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
                .collect::<HashMap<_, _>>(),
            tags: Vec::new(),
            resources: Vec::new(),
            proposer_id: 3,
        }
    }

    #[tokio::test]
    async fn test_bundle_requires_seed_field() {
        let repo = Arc::new(RecordingChangeRepo::default());
        let ctx = test_context(repo.clone());
        let service = ProposalService::new(&ctx);

        let err = service
            .submit_new_entity(entity_request(
                EntityKind::Skill,
                &[("description", "no name given")],
            ))
            .await
            .unwrap_err();
        assert_eq!(err.error_code(), "VALIDATION_ERROR");
        assert!(repo.staged.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_bundle_stages_seed_first_with_shared_batch() {
        let repo = Arc::new(RecordingChangeRepo::default());
        let ctx = test_context(repo.clone());
        let service = ProposalService::new(&ctx);

        let mut request = entity_request(
            EntityKind::Skill,
            &[("name", "Rust"), ("category", "languages")],
        );
        request.tags = vec!["systems".to_string()];
        request.resources = vec![ResourceDraftRequest {
            title: "The Book".to_string(),
            description: String::new(),
            resource_type: "book".to_string(),
            url: "https://doc.rust-lang.org/book/".to_string(),
            is_paid: false,
        }];

        let response = service.submit_new_entity(request).await.unwrap();
        assert_eq!(response.change_id, 1);

        let staged = repo.staged.lock().unwrap();
        assert_eq!(staged.len(), 4);
        assert_eq!(staged[0].field_name, "name");
        assert!(staged.iter().all(|c| c.is_new_entity));
        assert!(staged.iter().all(|c| c.batch_id == staged[0].batch_id));
        assert!(staged.iter().any(|c| c.field_name == TAG_FIELD));
        let resource = staged.iter().find(|c| c.field_name == "resource").unwrap();
        assert!(ResourceDraft::from_stored(&resource.proposed_value).is_ok());
    }

    #[tokio::test]
    async fn test_flagged_tag_sinks_whole_bundle() {
        let repo = Arc::new(RecordingChangeRepo::default());
        let ctx = test_context(repo.clone());
        let service = ProposalService::new(&ctx);

        let mut request = entity_request(EntityKind::Skill, &[("name", "Rust")]);
        request.tags = vec!["spam".to_string()];

        let err = service.submit_new_entity(request).await.unwrap_err();
        assert_eq!(err.status_code(), 422);
        assert!(repo.staged.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_advice_bundle_refuses_resources() {
        let repo = Arc::new(RecordingChangeRepo::default());
        let ctx = test_context(repo.clone());
        let service = ProposalService::new(&ctx);

        let mut request = entity_request(EntityKind::CareerAdvice, &[("title", "Switching teams")]);
        request.resources = vec![ResourceDraftRequest {
            title: "t".to_string(),
            description: String::new(),
            resource_type: "video".to_string(),
            url: "https://example.com".to_string(),
            is_paid: false,
        }];

        let err = service.submit_new_entity(request).await.unwrap_err();
        assert_eq!(err.error_code(), "VALIDATION_ERROR");
        assert!(repo.staged.lock().unwrap().is_empty());
    }
}
