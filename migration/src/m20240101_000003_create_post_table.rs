use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Post::Table)
                    .col(
                        ColumnDef::new(Post::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key()
                    )
                    .col(
                        ColumnDef::new(Post::Title)
                            .string()
                            .not_null()
                    )
                    .col(
                        ColumnDef::new(Post::Summary)
                            .string()
                            .not_null()
                    )
                    .col(
                        ColumnDef::new(Post::Body)
                            .text()
                            .not_null()
                    )
                    .col(
                        ColumnDef::new(Post::Slug)
                            .string()
                            .not_null()
                    )
                    .col(
                        ColumnDef::new(Post::CategoryId)
                            .integer()
                            .not_null()
                    )
                    .col(
                        ColumnDef::new(Post::AuthorId)
                            .uuid()
                            .not_null()
                    )
                    .col(
                        ColumnDef::new(Post::CreateDate)
                            .timestamp_with_time_zone()
                            .not_null()
                    )
                    .col(
                        ColumnDef::new(Post::LastUpdateDate)
                            .timestamp_with_time_zone()
                            .not_null()
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_post_category")
                            .from(Post::Table, Post::CategoryId)
                            .to(Category::Table, Category::Id)
                            .on_update(ForeignKeyAction::Cascade)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_post_author")
                            .from(Post::Table, Post::AuthorId)
                            .to(User::Table, User::Id)
                            .on_update(ForeignKeyAction::Cascade)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned()
            )
            .await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .table(Post::Table)
                    .if_exists()
                    .to_owned(),
            )
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Post {
    Table,
    Id,
    Title,
    Summary,
    Body,
    Slug,
    CategoryId,
    AuthorId,
    CreateDate,
    LastUpdateDate,
}

#[derive(DeriveIden)]
enum Category {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum User {
    Table,
    Id,
}
