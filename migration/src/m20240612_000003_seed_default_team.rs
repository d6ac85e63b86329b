use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, m: &SchemaManager) -> Result<(), DbErr> {
        // Conventional home for people without a team. Safe to run against a
        // database that already carries the row.
        m.get_connection().execute_unprepared(
            r#"
            INSERT INTO team (id, name, created_at, updated_at)
            VALUES (1, 'Single', CURRENT_TIMESTAMP, CURRENT_TIMESTAMP)
            ON CONFLICT (id) DO NOTHING;
            "#,
        ).await?;
        Ok(())
    }

    async fn down(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.get_connection().execute_unprepared(
            r#"DELETE FROM team WHERE id = 1 AND name = 'Single';"#,
        ).await?;
        Ok(())
    }
}
