use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum Person {
    Table,
    Id,
    Uid,
    Name,
    Age,
    TeamId,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Team {
    Table,
    Id,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.create_table(
            Table::create()
                .table(Person::Table)
                .col(
                    ColumnDef::new(Person::Id)
                        .integer()
                        .not_null()
                        .auto_increment()
                        .primary_key()
                )
                .col(ColumnDef::new(Person::Uid).string().not_null())
                .col(ColumnDef::new(Person::Name).string().not_null())
                .col(ColumnDef::new(Person::Age).integer().not_null())
                .col(ColumnDef::new(Person::TeamId).integer().null())
                .col(ColumnDef::new(Person::CreatedAt).timestamp_with_time_zone().not_null())
                .col(ColumnDef::new(Person::UpdatedAt).timestamp_with_time_zone().not_null())
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_person_team")
                        .from(Person::Table, Person::TeamId)
                        .to(Team::Table, Team::Id)
                        .on_delete(ForeignKeyAction::SetNull)
                        .on_update(ForeignKeyAction::Cascade)
                )
                .to_owned(),
        ).await?;

        // The uid is the external handle; the generator's existence check is
        // only advisory, this index is what actually enforces uniqueness.
        m.create_index(
            Index::create()
                .name("idx_person_uid")
                .table(Person::Table)
                .col(Person::Uid)
                .unique()
                .to_owned(),
        ).await?;

        m.create_index(
            Index::create()
                .name("idx_person_team")
                .table(Person::Table)
                .col(Person::TeamId)
                .to_owned(),
        ).await?;

        Ok(())
    }

    async fn down(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.drop_table(Table::drop().table(Person::Table).if_exists().to_owned()).await?;
        Ok(())
    }
}
