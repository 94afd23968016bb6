pub mod appointment_query_postgres;
pub mod appointment_repository_postgres;
pub mod sea_orm_entity;

pub use appointment_query_postgres::AppointmentQueryPostgres;
pub use appointment_repository_postgres::AppointmentRepositoryPostgres;
