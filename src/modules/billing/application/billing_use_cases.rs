use std::sync::Arc;

use crate::billing::application::ports::incoming::use_cases::{
    CreateBillUseCase, ListPatientBillsUseCase, PayBillUseCase,
};

#[derive(Clone)]
pub struct BillingUseCases {
    pub list_for_patient: Arc<dyn ListPatientBillsUseCase + Send + Sync>,
    pub pay: Arc<dyn PayBillUseCase + Send + Sync>,
    pub create: Arc<dyn CreateBillUseCase + Send + Sync>,
}
