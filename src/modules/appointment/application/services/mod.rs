mod available_slots_service;
mod book_appointment_service;
mod cancel_appointment_service;
mod close_appointment_service;
mod doctor_overview_service;
mod list_appointments_service;
mod submit_feedback_service;

pub use available_slots_service::GetAvailableSlotsService;
pub use book_appointment_service::BookAppointmentService;
pub use cancel_appointment_service::CancelAppointmentService;
pub use close_appointment_service::CloseAppointmentService;
pub use doctor_overview_service::{DoctorAttendanceService, DoctorPatientsService};
pub use list_appointments_service::{
    ListDoctorAppointmentsService, ListPatientAppointmentsService, TodayAppointmentsService,
};
pub use submit_feedback_service::SubmitFeedbackService;
