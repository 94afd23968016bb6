pub mod bill_query;
pub mod bill_repository;

pub use bill_query::{BillQuery, BillQueryError};
pub use bill_repository::{BillRepository, BillRepositoryError, NewBill};
