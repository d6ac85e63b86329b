use crate::db::sqlite_service::SqliteService;
use crate::types::error::AppError;
use crate::types::person::{Person, PersonPatch, RPersonCreate, RPersonUpdate};
use crate::utils::uid;
use chrono::Utc;
use entity::person::{ActiveModel as PersonActive, Column, Entity as PersonEntity, Model as PersonModel};
use entity::team;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter, Set,
    TransactionTrait,
};

/// Redraw budget for the uid mint loop. The keyspace only holds
/// `uid::KEYSPACE` codes, so as the table fills every draw starts to
/// collide; failing after a bounded number of misses beats spinning forever.
const UID_MINT_ATTEMPTS: u32 = 64;

/// What a partial update ended up doing.
#[derive(Debug, PartialEq, Eq)]
pub enum UpdateOutcome {
    Updated,
    Unchanged,
}

impl SqliteService {
    pub async fn person_exists_by_uid(&self, uid: &str) -> Result<bool, AppError> {
        Ok(PersonEntity::find()
            .filter(Column::Uid.eq(uid))
            .count(&self.db)
            .await?
            > 0)
    }

    /// Draws candidate uids until one misses the table. The existence check
    /// does not reserve the code; the unique index on `person.uid` rejects
    /// the loser of a concurrent race at insert time.
    pub async fn mint_uid(&self) -> Result<String, AppError> {
        for _ in 0..UID_MINT_ATTEMPTS {
            let candidate = uid::mint();
            if !self.person_exists_by_uid(&candidate).await? {
                return Ok(candidate);
            }
        }
        Err(AppError::Internal(format!(
            "no free uid after {} draws (keyspace is {} codes)",
            UID_MINT_ATTEMPTS,
            uid::KEYSPACE
        )))
    }

    pub async fn create_person(&self, payload: RPersonCreate) -> Result<Person, AppError> {
        let new_uid = self.mint_uid().await?;
        let now = Utc::now();
        let txn = self.db.begin().await?;

        PersonEntity::insert(PersonActive {
            uid: Set(new_uid.clone()),
            name: Set(payload.name),
            age: Set(payload.age),
            team_id: Set((payload.team_id != 0).then_some(payload.team_id)),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        })
        .exec(&txn)
        .await?;

        txn.commit().await?;
        Ok(Person::from_row(self.get_person_by_uid(&new_uid).await?))
    }

    pub async fn get_person_by_uid(&self, uid: &str) -> Result<PersonModel, AppError> {
        Ok(PersonEntity::find()
            .filter(Column::Uid.eq(uid))
            .one(&self.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("Person does not exist".into()))?)
    }

    pub async fn list_people(&self) -> Result<Vec<PersonModel>, AppError> {
        Ok(PersonEntity::find().all(&self.db).await?)
    }

    /// Left-joins people to their teams and collapses the rows into nested
    /// projections. The optional filter narrows to one team's members; the
    /// reshaping itself does not depend on it.
    pub async fn list_people_with_teams(
        &self,
        team_filter: Option<i32>,
    ) -> Result<Vec<Person>, AppError> {
        let mut finder = PersonEntity::find().find_also_related(team::Entity);
        if let Some(team_id) = team_filter {
            finder = finder.filter(Column::TeamId.eq(team_id));
        }
        Ok(Person::assemble(finder.all(&self.db).await?))
    }

    /// Applies only the fields the resolver picked; an empty patch is a
    /// benign no-op that never touches storage.
    pub async fn update_person_fields(
        &self,
        uid: &str,
        proposed: RPersonUpdate,
    ) -> Result<UpdateOutcome, AppError> {
        let current = self.get_person_by_uid(uid).await?;
        let patch = PersonPatch::resolve(&current, &proposed);
        if patch.is_empty() {
            return Ok(UpdateOutcome::Unchanged);
        }

        let mut am: PersonActive = current.into();
        if let Some(name) = patch.name {
            am.name = Set(name);
        }
        if let Some(age) = patch.age {
            am.age = Set(age);
        }
        if let Some(team_id) = patch.team_id {
            am.team_id = Set(Some(team_id));
        }
        am.updated_at = Set(Utc::now());
        am.update(&self.db).await?;
        Ok(UpdateOutcome::Updated)
    }

    /// Idempotent: deleting a uid that never existed (or was already
    /// deleted) is still a success.
    pub async fn delete_person_by_uid(&self, uid: &str) -> Result<(), AppError> {
        PersonEntity::delete_many()
            .filter(Column::Uid.eq(uid))
            .exec(&self.db)
            .await?;
        Ok(())
    }
}
