mod create_bill;
mod list_patient_bills;
mod pay_bill;

pub use create_bill::{CreateBillCommand, CreateBillCommandError, CreateBillError, CreateBillUseCase};
pub use list_patient_bills::{ListPatientBillsError, ListPatientBillsUseCase};
pub use pay_bill::{PayBillError, PayBillUseCase};
