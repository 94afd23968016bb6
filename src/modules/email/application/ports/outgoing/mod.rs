pub mod email_sender;
pub mod hospital_notifier;

pub use email_sender::EmailSender;
pub use hospital_notifier::{AppointmentConfirmation, HospitalNotifier, NotificationError};
