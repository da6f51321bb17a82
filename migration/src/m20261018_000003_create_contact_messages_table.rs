use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ContactMessages::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ContactMessages::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(ContactMessages::Name).text().not_null())
                    .col(ColumnDef::new(ContactMessages::Email).text().not_null())
                    .col(ColumnDef::new(ContactMessages::Subject).text())
                    .col(ColumnDef::new(ContactMessages::Message).text().not_null())
                    .col(
                        ColumnDef::new(ContactMessages::IsRead)
                            .boolean()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(ContactMessages::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Inbox is read newest first
        manager
            .create_index(
                Index::create()
                    .table(ContactMessages::Table)
                    .name("idx_contact_messages_created_at")
                    .col(ContactMessages::CreatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ContactMessages::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum ContactMessages {
    Table,
    Id,
    Name,
    Email,
    Subject,
    Message,
    IsRead,
    CreatedAt,
}
