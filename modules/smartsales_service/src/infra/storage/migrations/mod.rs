//! Database migrations for the SmartSales service

use sea_orm_migration::prelude::*;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_options::Migration),
            Box::new(m20250301_000002_create_terms::Migration),
            Box::new(m20250301_000003_create_posts::Migration),
        ]
    }
}

mod m20250301_000001_create_options {
    use super::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20250301_000001_create_options"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Options::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Options::OptionName)
                                .string()
                                .not_null()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Options::OptionValue).json().not_null())
                        .col(
                            ColumnDef::new(Options::UpdatedAt)
                                .timestamp_with_time_zone()
                                .not_null()
                                .default(Expr::current_timestamp()),
                        )
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Options::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum Options {
        Table,
        OptionName,
        OptionValue,
        UpdatedAt,
    }
}

mod m20250301_000002_create_terms {
    use super::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20250301_000002_create_terms"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Terms::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Terms::TermId)
                                .big_integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Terms::Taxonomy).string().not_null())
                        .col(ColumnDef::new(Terms::Name).string().not_null())
                        .col(ColumnDef::new(Terms::Slug).string().not_null())
                        .col(
                            ColumnDef::new(Terms::Description)
                                .text()
                                .not_null()
                                .default(""),
                        )
                        .col(
                            ColumnDef::new(Terms::Parent)
                                .big_integer()
                                .not_null()
                                .default(0),
                        )
                        .col(
                            ColumnDef::new(Terms::Count)
                                .big_integer()
                                .not_null()
                                .default(0),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name("idx_terms_taxonomy_slug")
                        .table(Terms::Table)
                        .col(Terms::Taxonomy)
                        .col(Terms::Slug)
                        .unique()
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name("idx_terms_parent")
                        .table(Terms::Table)
                        .col(Terms::Parent)
                        .to_owned(),
                )
                .await?;

            Ok(())
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Terms::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum Terms {
        Table,
        TermId,
        Taxonomy,
        Name,
        Slug,
        Description,
        Parent,
        Count,
    }
}

mod m20250301_000003_create_posts {
    use super::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20250301_000003_create_posts"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Posts::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Posts::Id)
                                .big_integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Posts::PostType).string().not_null())
                        .col(ColumnDef::new(Posts::PostStatus).string().not_null())
                        .col(
                            ColumnDef::new(Posts::Title)
                                .string()
                                .not_null()
                                .default(""),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name("idx_posts_type_status")
                        .table(Posts::Table)
                        .col(Posts::PostType)
                        .col(Posts::PostStatus)
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Posts::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum Posts {
        Table,
        Id,
        PostType,
        PostStatus,
        Title,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_migration_names_are_distinct() {
        let names: Vec<String> = Migrator::migrations()
            .iter()
            .map(|m| m.name().to_string())
            .collect();
        let distinct: HashSet<&String> = names.iter().collect();

        assert_eq!(distinct.len(), names.len());
        assert_eq!(names[0], "m20250301_000001_create_options");
    }
}
