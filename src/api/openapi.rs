use crate::api::schemas::{ErrorDetail, ErrorResponse, MessageResponse};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

use crate::admin::adapter::incoming::web::routes::{CreateDoctorRequest, CreateUserRequest};
use crate::admin::application::domain::entities::{
    DoctorWithStats, DoctorWorkload, HospitalStats, PatientDetail,
};
use crate::appointment::adapter::incoming::web::routes::{
    AvailableSlotsResponse, BookAppointmentRequest, CloseAppointmentRequest, FeedbackRequest,
};
use crate::appointment::application::domain::entities::{
    Appointment, AppointmentStatus, AppointmentView, DoctorPatient, Feedback,
};
use crate::appointment::application::ports::incoming::use_cases::{Attendance, ClosedAppointment};
use crate::auth::adapter::incoming::web::routes::{
    AdminLoginRequestDto, LoginRequestDto, LogoutRequestDto, RefreshTokenRequestDto,
    ResetPasswordRequest, SendOtpRequest, SignupRequest, VerifyOtpRequest,
};
use crate::auth::application::domain::entities::{Role, UserProfile, UserSummary};
use crate::auth::application::ports::incoming::use_cases::{AuthSession, RefreshedToken};
use crate::billing::adapter::incoming::web::routes::CreateBillRequest;
use crate::billing::application::domain::entities::{Bill, BillStatus, BillView};
use crate::directory::application::domain::entities::{DoctorContact, DoctorListing};
use crate::medical_record::adapter::incoming::web::routes::AddMedicalRecordRequest;
use crate::medical_record::application::domain::entities::{MedicalRecord, MedicalRecordView};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Hospital Management API",
        version = "1.0.0",
        description = "Patients, doctors, appointments, medical records and billing",
        contact(
            name = "API Support",
            email = "support@example.com"
        )
    ),
    paths(
        // Auth endpoints
        crate::auth::adapter::incoming::web::routes::signup::signup_handler,
        crate::auth::adapter::incoming::web::routes::login::login_handler,
        crate::auth::adapter::incoming::web::routes::login::admin_login_handler,
        crate::auth::adapter::incoming::web::routes::password_reset::send_otp_handler,
        crate::auth::adapter::incoming::web::routes::password_reset::verify_otp_handler,
        crate::auth::adapter::incoming::web::routes::password_reset::reset_password_handler,
        crate::auth::adapter::incoming::web::routes::refresh_token::refresh_token_handler,
        crate::auth::adapter::incoming::web::routes::logout::logout_handler,
        crate::auth::adapter::incoming::web::routes::me::me_handler,

        // Appointment endpoints
        crate::appointment::adapter::incoming::web::routes::book_appointment::available_slots_handler,
        crate::appointment::adapter::incoming::web::routes::book_appointment::book_appointment_handler,
        crate::appointment::adapter::incoming::web::routes::list_appointments::patient_appointments_handler,
        crate::appointment::adapter::incoming::web::routes::list_appointments::doctor_appointments_handler,
        crate::appointment::adapter::incoming::web::routes::list_appointments::my_patient_appointments_handler,
        crate::appointment::adapter::incoming::web::routes::list_appointments::my_doctor_appointments_handler,
        crate::appointment::adapter::incoming::web::routes::list_appointments::today_appointments_handler,
        crate::appointment::adapter::incoming::web::routes::manage_appointment::cancel_appointment_handler,
        crate::appointment::adapter::incoming::web::routes::manage_appointment::submit_feedback_handler,
        crate::appointment::adapter::incoming::web::routes::doctor_desk::close_appointment_handler,
        crate::appointment::adapter::incoming::web::routes::doctor_desk::attendance_handler,
        crate::appointment::adapter::incoming::web::routes::doctor_desk::doctor_patients_handler,

        // Medical record endpoints
        crate::medical_record::adapter::incoming::web::routes::medical_history::medical_history_handler,
        crate::medical_record::adapter::incoming::web::routes::medical_history::my_medical_records_handler,
        crate::medical_record::adapter::incoming::web::routes::add_medical_record::add_medical_record_handler,

        // Billing endpoints
        crate::billing::adapter::incoming::web::routes::patient_bills::patient_bills_handler,
        crate::billing::adapter::incoming::web::routes::patient_bills::pay_bill_handler,
        crate::billing::adapter::incoming::web::routes::create_bill::create_bill_handler,

        // Admin endpoints
        crate::admin::adapter::incoming::web::routes::stats::stats_handler,
        crate::admin::adapter::incoming::web::routes::users::list_users_handler,
        crate::admin::adapter::incoming::web::routes::users::create_user_handler,
        crate::admin::adapter::incoming::web::routes::users::delete_user_handler,
        crate::admin::adapter::incoming::web::routes::doctors::list_doctors_handler,
        crate::admin::adapter::incoming::web::routes::doctors::create_doctor_handler,
        crate::admin::adapter::incoming::web::routes::doctors::delete_doctor_handler,
        crate::admin::adapter::incoming::web::routes::patients::list_patients_handler,
        crate::admin::adapter::incoming::web::routes::patients::patient_detail_handler,
        crate::admin::adapter::incoming::web::routes::patients::delete_patient_handler,
        crate::admin::adapter::incoming::web::routes::all_appointments::all_appointments_handler,

        // Directory endpoints
        crate::directory::adapter::incoming::web::routes::doctors::public_doctors_handler,
        crate::directory::adapter::incoming::web::routes::doctors::doctor_contacts_handler,
    ),
    components(
        schemas(
            // Response wrappers
            ErrorResponse,
            ErrorDetail,
            MessageResponse,

            // Auth
            Role,
            UserProfile,
            UserSummary,
            AuthSession,
            RefreshedToken,
            SignupRequest,
            LoginRequestDto,
            AdminLoginRequestDto,
            SendOtpRequest,
            VerifyOtpRequest,
            ResetPasswordRequest,
            RefreshTokenRequestDto,
            LogoutRequestDto,

            // Appointments
            AppointmentStatus,
            Feedback,
            Appointment,
            AppointmentView,
            DoctorPatient,
            Attendance,
            ClosedAppointment,
            BookAppointmentRequest,
            AvailableSlotsResponse,
            FeedbackRequest,
            CloseAppointmentRequest,

            // Medical records
            MedicalRecord,
            MedicalRecordView,
            AddMedicalRecordRequest,

            // Billing
            BillStatus,
            Bill,
            BillView,
            CreateBillRequest,

            // Admin
            HospitalStats,
            DoctorWorkload,
            DoctorWithStats,
            PatientDetail,
            CreateUserRequest,
            CreateDoctorRequest,

            // Directory
            DoctorListing,
            DoctorContact
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Sign-up, login and password reset"),
        (name = "appointments", description = "Slot lookup, booking and appointment lifecycle"),
        (name = "patient", description = "Endpoints for the signed-in patient"),
        (name = "patients", description = "Per-patient records and bills"),
        (name = "doctor", description = "Doctor desk: schedule, attendance and patients"),
        (name = "billing", description = "Bills and payments"),
        (name = "admin", description = "Hospital administration"),
        (name = "directory", description = "Doctor directory"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Access token from /api/auth/login"))
                        .build(),
                ),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_route_is_documented() {
        let doc = ApiDoc::openapi();

        for path in [
            "/api/auth/login",
            "/api/appointments/book",
            "/api/patients/{id}/medical-history",
            "/api/patients/bills/{id}/pay",
            "/api/admin/stats",
            "/api/users/doctors",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {}", path);
        }
    }

    #[test]
    fn bearer_scheme_registered() {
        let doc = ApiDoc::openapi();
        let components = doc.components.expect("components");

        assert!(components.security_schemes.contains_key("bearer_auth"));
    }
}
