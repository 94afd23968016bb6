pub mod create_bill;
pub mod patient_bills;

pub use create_bill::{create_bill_handler, CreateBillRequest};
pub use patient_bills::{patient_bills_handler, pay_bill_handler};
