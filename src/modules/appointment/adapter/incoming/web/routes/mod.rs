pub mod book_appointment;
pub mod doctor_desk;
pub mod list_appointments;
pub mod manage_appointment;

pub use book_appointment::{
    available_slots_handler, book_appointment_handler, AvailableSlotsQuery,
    AvailableSlotsResponse, BookAppointmentRequest,
};
pub use doctor_desk::{
    attendance_handler, close_appointment_handler, doctor_patients_handler,
    CloseAppointmentRequest,
};
pub use list_appointments::{
    doctor_appointments_handler, my_doctor_appointments_handler,
    my_patient_appointments_handler, patient_appointments_handler, today_appointments_handler,
};
pub use manage_appointment::{cancel_appointment_handler, submit_feedback_handler, FeedbackRequest};
