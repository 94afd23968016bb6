pub mod bill_query_postgres;
pub mod bill_repository_postgres;
pub mod sea_orm_entity;

pub use bill_query_postgres::BillQueryPostgres;
pub use bill_repository_postgres::BillRepositoryPostgres;
