//! SeaORM entities for database tables

/// Key-value option table
pub mod option {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
    #[sea_orm(table_name = "options")]
    pub struct Model {
        #[sea_orm(primary_key, auto_increment = false)]
        pub option_name: String,

        /// Option value as JSON
        pub option_value: Json,

        pub updated_at: DateTimeUtc,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {}

    impl ActiveModelBehavior for ActiveModel {}
}

/// Taxonomy terms; one row per term and taxonomy
pub mod term {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
    #[sea_orm(table_name = "terms")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub term_id: i64,

        /// Taxonomy the term belongs to, e.g. `product_cat`
        pub taxonomy: String,

        pub name: String,

        pub slug: String,

        pub description: String,

        /// Parent term id, 0 for root terms
        pub parent: i64,

        /// Number of objects assigned to the term
        pub count: i64,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {}

    impl ActiveModelBehavior for ActiveModel {}
}

/// Catalog posts (products, outlets)
pub mod post {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
    #[sea_orm(table_name = "posts")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i64,

        pub post_type: String,

        pub post_status: String,

        pub title: String,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {}

    impl ActiveModelBehavior for ActiveModel {}
}
