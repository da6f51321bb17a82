use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

const CONTENT_TABLES: [&str; 8] = [
    "profiles",
    "projects",
    "experiences",
    "skills",
    "education",
    "certifications",
    "volunteering",
    "contacts",
];

fn id_column<T: IntoIden>(col: T) -> ColumnDef {
    ColumnDef::new(col)
        .uuid()
        .not_null()
        .primary_key()
        .default(Expr::cust("gen_random_uuid()"))
        .to_owned()
}

fn timestamp_column<T: IntoIden>(col: T) -> ColumnDef {
    ColumnDef::new(col)
        .timestamp_with_time_zone()
        .not_null()
        .default(Expr::current_timestamp())
        .to_owned()
}

fn sort_order_column<T: IntoIden>(col: T) -> ColumnDef {
    ColumnDef::new(col).integer().default(0).to_owned()
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // profiles
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(Profiles::Table)
                    .if_not_exists()
                    .col(id_column(Profiles::Id))
                    .col(ColumnDef::new(Profiles::Name).text().not_null())
                    .col(ColumnDef::new(Profiles::Title).text().not_null())
                    .col(ColumnDef::new(Profiles::Bio).text())
                    .col(ColumnDef::new(Profiles::Email).text())
                    .col(ColumnDef::new(Profiles::Phone).text())
                    .col(ColumnDef::new(Profiles::Location).text())
                    .col(ColumnDef::new(Profiles::AvatarUrl).text())
                    .col(ColumnDef::new(Profiles::BannerUrl).text())
                    .col(timestamp_column(Profiles::CreatedAt))
                    .col(timestamp_column(Profiles::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // projects
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(Projects::Table)
                    .if_not_exists()
                    .col(id_column(Projects::Id))
                    .col(ColumnDef::new(Projects::Title).text().not_null())
                    .col(ColumnDef::new(Projects::Description).text())
                    .col(ColumnDef::new(Projects::Technologies).array(ColumnType::Text))
                    .col(ColumnDef::new(Projects::GithubUrl).text())
                    .col(ColumnDef::new(Projects::LiveUrl).text())
                    .col(ColumnDef::new(Projects::ImageUrl).text())
                    .col(ColumnDef::new(Projects::IsFeatured).boolean().default(false))
                    .col(sort_order_column(Projects::SortOrder))
                    .col(timestamp_column(Projects::CreatedAt))
                    .col(timestamp_column(Projects::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // experiences
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(Experiences::Table)
                    .if_not_exists()
                    .col(id_column(Experiences::Id))
                    .col(ColumnDef::new(Experiences::Title).text().not_null())
                    .col(ColumnDef::new(Experiences::Company).text().not_null())
                    .col(ColumnDef::new(Experiences::Location).text())
                    .col(ColumnDef::new(Experiences::StartDate).date().not_null())
                    .col(ColumnDef::new(Experiences::EndDate).date())
                    .col(ColumnDef::new(Experiences::IsCurrent).boolean().default(false))
                    .col(ColumnDef::new(Experiences::Description).text())
                    .col(ColumnDef::new(Experiences::Technologies).array(ColumnType::Text))
                    .col(sort_order_column(Experiences::SortOrder))
                    .col(timestamp_column(Experiences::CreatedAt))
                    .col(timestamp_column(Experiences::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // skills
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(Skills::Table)
                    .if_not_exists()
                    .col(id_column(Skills::Id))
                    .col(ColumnDef::new(Skills::Name).text().not_null())
                    .col(
                        ColumnDef::new(Skills::Category)
                            .custom(Alias::new("skill_category"))
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Skills::Level)
                            .custom(Alias::new("skill_level"))
                            .not_null(),
                    )
                    .col(ColumnDef::new(Skills::IconUrl).text())
                    .col(sort_order_column(Skills::SortOrder))
                    .col(timestamp_column(Skills::CreatedAt))
                    .col(timestamp_column(Skills::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // education
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(Education::Table)
                    .if_not_exists()
                    .col(id_column(Education::Id))
                    .col(ColumnDef::new(Education::Degree).text().not_null())
                    .col(ColumnDef::new(Education::Institution).text().not_null())
                    .col(ColumnDef::new(Education::Location).text())
                    .col(ColumnDef::new(Education::Gpa).text())
                    .col(ColumnDef::new(Education::StartYear).integer())
                    .col(ColumnDef::new(Education::EndYear).integer())
                    .col(ColumnDef::new(Education::IsCurrent).boolean().default(false))
                    .col(ColumnDef::new(Education::Description).text())
                    .col(sort_order_column(Education::SortOrder))
                    .col(timestamp_column(Education::CreatedAt))
                    .col(timestamp_column(Education::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // certifications
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(Certifications::Table)
                    .if_not_exists()
                    .col(id_column(Certifications::Id))
                    .col(ColumnDef::new(Certifications::Title).text().not_null())
                    .col(ColumnDef::new(Certifications::Issuer).text().not_null())
                    .col(ColumnDef::new(Certifications::IssueDate).date())
                    .col(ColumnDef::new(Certifications::ExpiryDate).date())
                    .col(ColumnDef::new(Certifications::CredentialUrl).text())
                    .col(ColumnDef::new(Certifications::ImageUrl).text())
                    .col(sort_order_column(Certifications::SortOrder))
                    .col(timestamp_column(Certifications::CreatedAt))
                    .col(timestamp_column(Certifications::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // volunteering
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(Volunteering::Table)
                    .if_not_exists()
                    .col(id_column(Volunteering::Id))
                    .col(ColumnDef::new(Volunteering::Title).text().not_null())
                    .col(ColumnDef::new(Volunteering::Organization).text().not_null())
                    .col(ColumnDef::new(Volunteering::Location).text())
                    .col(ColumnDef::new(Volunteering::StartDate).date().not_null())
                    .col(ColumnDef::new(Volunteering::EndDate).date())
                    .col(ColumnDef::new(Volunteering::IsCurrent).boolean().default(false))
                    .col(ColumnDef::new(Volunteering::Description).text())
                    .col(sort_order_column(Volunteering::SortOrder))
                    .col(timestamp_column(Volunteering::CreatedAt))
                    .col(timestamp_column(Volunteering::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // contacts
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(Contacts::Table)
                    .if_not_exists()
                    .col(id_column(Contacts::Id))
                    .col(ColumnDef::new(Contacts::Label).text().not_null())
                    .col(ColumnDef::new(Contacts::Value).text().not_null())
                    .col(ColumnDef::new(Contacts::Type).text().not_null())
                    .col(ColumnDef::new(Contacts::Icon).text())
                    .col(ColumnDef::new(Contacts::IsPublic).boolean().default(true))
                    .col(ColumnDef::new(Contacts::IsPrimary).boolean().default(false))
                    .col(sort_order_column(Contacts::SortOrder))
                    .col(timestamp_column(Contacts::CreatedAt))
                    .col(timestamp_column(Contacts::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // updated_at triggers
        // =====================================================
        for table in CONTENT_TABLES {
            manager
                .get_connection()
                .execute_unprepared(&format!(
                    r#"
                    CREATE TRIGGER update_{table}_updated_at
                    BEFORE UPDATE ON {table}
                    FOR EACH ROW
                    EXECUTE FUNCTION update_updated_at_column();
                    "#
                ))
                .await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for table in CONTENT_TABLES.iter().rev() {
            manager
                .get_connection()
                .execute_unprepared(&format!(
                    "DROP TRIGGER IF EXISTS update_{table}_updated_at ON {table};"
                ))
                .await?;
            manager
                .drop_table(Table::drop().table(Alias::new(*table)).if_exists().to_owned())
                .await?;
        }

        Ok(())
    }
}

#[derive(Iden)]
enum Profiles {
    Table,
    Id,
    Name,
    Title,
    Bio,
    Email,
    Phone,
    Location,
    AvatarUrl,
    BannerUrl,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Projects {
    Table,
    Id,
    Title,
    Description,
    Technologies,
    GithubUrl,
    LiveUrl,
    ImageUrl,
    IsFeatured,
    SortOrder,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Experiences {
    Table,
    Id,
    Title,
    Company,
    Location,
    StartDate,
    EndDate,
    IsCurrent,
    Description,
    Technologies,
    SortOrder,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Skills {
    Table,
    Id,
    Name,
    Category,
    Level,
    IconUrl,
    SortOrder,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Education {
    Table,
    Id,
    Degree,
    Institution,
    Location,
    Gpa,
    StartYear,
    EndYear,
    IsCurrent,
    Description,
    SortOrder,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Certifications {
    Table,
    Id,
    Title,
    Issuer,
    IssueDate,
    ExpiryDate,
    CredentialUrl,
    ImageUrl,
    SortOrder,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Volunteering {
    Table,
    Id,
    Title,
    Organization,
    Location,
    StartDate,
    EndDate,
    IsCurrent,
    Description,
    SortOrder,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Contacts {
    Table,
    Id,
    Label,
    Value,
    Type,
    Icon,
    IsPublic,
    IsPrimary,
    SortOrder,
    CreatedAt,
    UpdatedAt,
}
