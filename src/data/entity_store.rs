//! Uniform persistence surface for file-owning entities.
//!
//! `EntityService` is generic over the entity kind. This trait gives it the per-kind row
//! operations it needs while file references are handled uniformly through
//! `FileRefRepository`.

use async_trait::async_trait;
use sea_orm::ConnectionTrait;

use crate::{
    data::{
        championship::ChampionshipRepository, file_ref::FileRefRepository,
        participant::ParticipantRepository, stage::StageRepository,
    },
    error::AppError,
    model::{
        championship::{Championship, CreateChampionshipParam},
        file::FileRef,
        participant::{CreateJudgeParam, CreatePilotParam, Judge, Pilot},
        stage::{CreateStageParam, Stage},
        EntityKind,
    },
};

/// Row operations of an entity that owns attached files.
#[async_trait]
pub trait EntityStore: Sized + Send + Sync {
    /// Fields needed to insert a row.
    type Param: Send;

    /// Kind recorded in `file_refs.parent_type` and used to pick the bucket.
    const KIND: EntityKind;

    fn id(&self) -> i32;

    fn files(&self) -> &[FileRef];

    fn set_files(&mut self, files: Vec<FileRef>);

    /// Inserts the entity row. Files are inserted separately by the caller.
    async fn insert<C: ConnectionTrait>(db: &C, param: Self::Param) -> Result<Self, AppError>;

    /// Loads the entity row without files.
    async fn find<C: ConnectionTrait>(db: &C, id: i32) -> Result<Option<Self>, AppError>;

    /// Deletes the entity row, returning whether it existed.
    async fn remove<C: ConnectionTrait>(db: &C, id: i32) -> Result<bool, AppError>;

    /// File-owning rows removed along with this one by the database cascade.
    ///
    /// Their file references have no foreign key and must be deleted explicitly.
    async fn dependents<C: ConnectionTrait>(
        _db: &C,
        _id: i32,
    ) -> Result<Vec<(EntityKind, i32)>, AppError> {
        Ok(Vec::new())
    }
}

/// Loads an entity together with its files in attachment order.
///
/// # Returns
/// - `Ok(Some(K))` - Entity found, files attached
/// - `Ok(None)` - No entity with that id
/// - `Err(AppError)` - Database error during either query
pub async fn find_with_files<K: EntityStore, C: ConnectionTrait>(
    db: &C,
    id: i32,
) -> Result<Option<K>, AppError> {
    let Some(mut entity) = K::find(db, id).await? else {
        return Ok(None);
    };

    let files = FileRefRepository::new(db).get_by_parent(K::KIND, id).await?;
    entity.set_files(files);

    Ok(Some(entity))
}

/// Attaches files to a list of entities with a single query.
pub async fn attach_files<K: EntityStore, C: ConnectionTrait>(
    db: &C,
    mut entities: Vec<K>,
) -> Result<Vec<K>, AppError> {
    let ids: Vec<i32> = entities.iter().map(EntityStore::id).collect();
    let mut files = FileRefRepository::new(db)
        .get_by_parents(K::KIND, &ids)
        .await?;

    for entity in entities.iter_mut() {
        if let Some(entity_files) = files.remove(&entity.id()) {
            entity.set_files(entity_files);
        }
    }

    Ok(entities)
}

/// Judge and pilot owners registered on the given stages.
async fn participants_of<C: ConnectionTrait>(
    db: &C,
    stage_ids: &[i32],
) -> Result<Vec<(EntityKind, i32)>, AppError> {
    let (judge_ids, pilot_ids) = ParticipantRepository::new(db)
        .get_ids_by_stages(stage_ids)
        .await?;

    Ok(judge_ids
        .into_iter()
        .map(|id| (EntityKind::Judge, id))
        .chain(pilot_ids.into_iter().map(|id| (EntityKind::Pilot, id)))
        .collect())
}

#[async_trait]
impl EntityStore for Championship {
    type Param = CreateChampionshipParam;
    const KIND: EntityKind = EntityKind::Championship;

    fn id(&self) -> i32 {
        self.id
    }

    fn files(&self) -> &[FileRef] {
        &self.files
    }

    fn set_files(&mut self, files: Vec<FileRef>) {
        self.files = files;
    }

    async fn insert<C: ConnectionTrait>(db: &C, param: Self::Param) -> Result<Self, AppError> {
        Ok(ChampionshipRepository::new(db).create(param).await?)
    }

    async fn find<C: ConnectionTrait>(db: &C, id: i32) -> Result<Option<Self>, AppError> {
        Ok(ChampionshipRepository::new(db).find_by_id(id).await?)
    }

    async fn remove<C: ConnectionTrait>(db: &C, id: i32) -> Result<bool, AppError> {
        Ok(ChampionshipRepository::new(db).delete(id).await?)
    }

    async fn dependents<C: ConnectionTrait>(
        db: &C,
        id: i32,
    ) -> Result<Vec<(EntityKind, i32)>, AppError> {
        let stage_ids = StageRepository::new(db).get_ids_by_championship(id).await?;
        let mut owners = participants_of(db, &stage_ids).await?;
        owners.extend(stage_ids.into_iter().map(|id| (EntityKind::Stage, id)));

        Ok(owners)
    }
}

#[async_trait]
impl EntityStore for Stage {
    type Param = CreateStageParam;
    const KIND: EntityKind = EntityKind::Stage;

    fn id(&self) -> i32 {
        self.id
    }

    fn files(&self) -> &[FileRef] {
        &self.files
    }

    fn set_files(&mut self, files: Vec<FileRef>) {
        self.files = files;
    }

    async fn insert<C: ConnectionTrait>(db: &C, param: Self::Param) -> Result<Self, AppError> {
        Ok(StageRepository::new(db).create(param).await?)
    }

    async fn find<C: ConnectionTrait>(db: &C, id: i32) -> Result<Option<Self>, AppError> {
        Ok(StageRepository::new(db).find_by_id(id).await?)
    }

    async fn remove<C: ConnectionTrait>(db: &C, id: i32) -> Result<bool, AppError> {
        Ok(StageRepository::new(db).delete(id).await?)
    }

    async fn dependents<C: ConnectionTrait>(
        db: &C,
        id: i32,
    ) -> Result<Vec<(EntityKind, i32)>, AppError> {
        participants_of(db, &[id]).await
    }
}

#[async_trait]
impl EntityStore for Judge {
    type Param = CreateJudgeParam;
    const KIND: EntityKind = EntityKind::Judge;

    fn id(&self) -> i32 {
        self.base.id
    }

    fn files(&self) -> &[FileRef] {
        &self.base.files
    }

    fn set_files(&mut self, files: Vec<FileRef>) {
        self.base.files = files;
    }

    async fn insert<C: ConnectionTrait>(db: &C, param: Self::Param) -> Result<Self, AppError> {
        ParticipantRepository::new(db).create_judge(param).await
    }

    async fn find<C: ConnectionTrait>(db: &C, id: i32) -> Result<Option<Self>, AppError> {
        ParticipantRepository::new(db).find_judge(id).await
    }

    async fn remove<C: ConnectionTrait>(db: &C, id: i32) -> Result<bool, AppError> {
        ParticipantRepository::new(db).delete_judge(id).await
    }
}

#[async_trait]
impl EntityStore for Pilot {
    type Param = CreatePilotParam;
    const KIND: EntityKind = EntityKind::Pilot;

    fn id(&self) -> i32 {
        self.base.id
    }

    fn files(&self) -> &[FileRef] {
        &self.base.files
    }

    fn set_files(&mut self, files: Vec<FileRef>) {
        self.base.files = files;
    }

    async fn insert<C: ConnectionTrait>(db: &C, param: Self::Param) -> Result<Self, AppError> {
        ParticipantRepository::new(db).create_pilot(param).await
    }

    async fn find<C: ConnectionTrait>(db: &C, id: i32) -> Result<Option<Self>, AppError> {
        ParticipantRepository::new(db).find_pilot(id).await
    }

    async fn remove<C: ConnectionTrait>(db: &C, id: i32) -> Result<bool, AppError> {
        ParticipantRepository::new(db).delete_pilot(id).await
    }
}
