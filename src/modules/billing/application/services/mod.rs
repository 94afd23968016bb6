mod create_bill_service;
mod list_patient_bills_service;
mod pay_bill_service;

pub use create_bill_service::CreateBillService;
pub use list_patient_bills_service::ListPatientBillsService;
pub use pay_bill_service::PayBillService;
