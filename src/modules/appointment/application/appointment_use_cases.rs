use std::sync::Arc;

use crate::appointment::application::orchestrator::appointment_booking::AppointmentBookingOrchestrator;
use crate::appointment::application::ports::incoming::use_cases::{
    CancelAppointmentUseCase, CloseAppointmentUseCase, DoctorAttendanceUseCase,
    DoctorPatientsUseCase, GetAvailableSlotsUseCase, ListDoctorAppointmentsUseCase,
    ListPatientAppointmentsUseCase, SubmitFeedbackUseCase, TodayAppointmentsUseCase,
};

#[derive(Clone)]
pub struct AppointmentUseCases {
    pub book: Arc<AppointmentBookingOrchestrator>,
    pub available_slots: Arc<dyn GetAvailableSlotsUseCase + Send + Sync>,
    pub list_for_patient: Arc<dyn ListPatientAppointmentsUseCase + Send + Sync>,
    pub list_for_doctor: Arc<dyn ListDoctorAppointmentsUseCase + Send + Sync>,
    pub today: Arc<dyn TodayAppointmentsUseCase + Send + Sync>,
    pub cancel: Arc<dyn CancelAppointmentUseCase + Send + Sync>,
    pub feedback: Arc<dyn SubmitFeedbackUseCase + Send + Sync>,
    pub close: Arc<dyn CloseAppointmentUseCase + Send + Sync>,
    pub attendance: Arc<dyn DoctorAttendanceUseCase + Send + Sync>,
    pub patients: Arc<dyn DoctorPatientsUseCase + Send + Sync>,
}
