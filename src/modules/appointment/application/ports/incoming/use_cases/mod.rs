mod available_slots;
mod book_appointment;
mod cancel_appointment;
mod close_appointment;
mod doctor_overview;
mod list_appointments;
mod submit_feedback;

pub use available_slots::{AvailableSlotsError, GetAvailableSlotsUseCase};
pub use book_appointment::{BookAppointmentCommand, BookAppointmentError, BookAppointmentUseCase};
pub use cancel_appointment::{CancelAppointmentError, CancelAppointmentUseCase};
pub use close_appointment::{
    CloseAppointmentCommand, CloseAppointmentCommandError, CloseAppointmentError,
    CloseAppointmentUseCase, ClosedAppointment,
};
pub use doctor_overview::{
    Attendance, DoctorAttendanceUseCase, DoctorOverviewError, DoctorPatientsUseCase,
};
pub use list_appointments::{
    ListAppointmentsError, ListDoctorAppointmentsUseCase, ListPatientAppointmentsUseCase,
    TodayAppointmentsUseCase,
};
pub use submit_feedback::{SubmitFeedbackError, SubmitFeedbackUseCase};
