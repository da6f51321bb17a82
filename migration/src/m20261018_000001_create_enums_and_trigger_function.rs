use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        db.execute_unprepared(
            r#"
            CREATE TYPE skill_category AS ENUM ('frontend', 'backend', 'ai_ml', 'tools', 'other');
            "#,
        )
        .await?;

        db.execute_unprepared(
            r#"
            CREATE TYPE skill_level AS ENUM ('beginner', 'intermediate', 'advanced', 'expert');
            "#,
        )
        .await?;

        // Shared by every content table's updated_at trigger
        db.execute_unprepared(
            r#"
            CREATE OR REPLACE FUNCTION update_updated_at_column()
            RETURNS TRIGGER AS $$
            BEGIN
                NEW.updated_at = CURRENT_TIMESTAMP;
                RETURN NEW;
            END;
            $$ language 'plpgsql';
            "#,
        )
        .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        db.execute_unprepared("DROP FUNCTION IF EXISTS update_updated_at_column();")
            .await?;
        db.execute_unprepared("DROP TYPE IF EXISTS skill_level;")
            .await?;
        db.execute_unprepared("DROP TYPE IF EXISTS skill_category;")
            .await?;

        Ok(())
    }
}
