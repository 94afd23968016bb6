use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use crate::admin::application::domain::entities::{DoctorWithStats, HospitalStats, PatientDetail};
use crate::admin::application::ports::incoming::use_cases::{
    AllAppointmentsError, AllAppointmentsUseCase, DeleteUserError, DeleteUserUseCase,
    DoctorStatsError, HospitalStatsError, HospitalStatsUseCase, ListDoctorsWithStatsUseCase,
    ListUsersError, ListUsersUseCase, PatientDetailError, PatientDetailUseCase,
};
use crate::appointment::application::domain::entities::{
    Appointment, AppointmentView, DoctorPatient, Feedback,
};
use crate::appointment::application::ports::incoming::use_cases::{
    Attendance, AvailableSlotsError, BookAppointmentCommand, BookAppointmentError,
    BookAppointmentUseCase, CancelAppointmentError, CancelAppointmentUseCase,
    CloseAppointmentCommand, CloseAppointmentError, CloseAppointmentUseCase, ClosedAppointment,
    DoctorAttendanceUseCase, DoctorOverviewError, DoctorPatientsUseCase, GetAvailableSlotsUseCase,
    ListAppointmentsError, ListDoctorAppointmentsUseCase, ListPatientAppointmentsUseCase,
    SubmitFeedbackError, SubmitFeedbackUseCase, TodayAppointmentsUseCase,
};
use crate::auth::application::domain::entities::{Actor, Role, UserId, UserProfile};
use crate::auth::application::ports::incoming::use_cases::{
    AuthSession, CreateUserCommand, CreateUserError, CreateUserUseCase, FetchProfileError,
    FetchProfileUseCase, LoginCommand, LoginError, LoginUserUseCase, LogoutCommand, LogoutError,
    LogoutUseCase, RefreshTokenCommand, RefreshTokenError, RefreshTokenUseCase, RefreshedToken,
    ResetPasswordCommand, ResetPasswordError, ResetPasswordUseCase, SendOtpError, SendOtpUseCase,
    VerifyOtpError, VerifyOtpUseCase,
};
use crate::billing::application::domain::entities::{Bill, BillView};
use crate::billing::application::ports::incoming::use_cases::{
    CreateBillCommand, CreateBillError, CreateBillUseCase, ListPatientBillsError,
    ListPatientBillsUseCase, PayBillError, PayBillUseCase,
};
use crate::directory::application::domain::entities::DoctorListing;
use crate::directory::application::ports::incoming::use_cases::{
    ListDoctorsError, ListDoctorsUseCase,
};
use crate::medical_record::application::domain::entities::MedicalRecordView;
use crate::medical_record::application::ports::incoming::use_cases::{
    AddMedicalRecordCommand, AddMedicalRecordError, AddMedicalRecordUseCase,
    GetMedicalHistoryError, GetMedicalHistoryUseCase,
};

// ──────────────────────────────────────────────────────────
// Auth
// ──────────────────────────────────────────────────────────

#[derive(Default, Clone)]
pub struct StubLoginUseCase;

#[async_trait]
impl LoginUserUseCase for StubLoginUseCase {
    async fn execute(&self, _command: LoginCommand) -> Result<AuthSession, LoginError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubCreateUserUseCase;

#[async_trait]
impl CreateUserUseCase for StubCreateUserUseCase {
    async fn execute(&self, _command: CreateUserCommand) -> Result<UserProfile, CreateUserError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubSendOtpUseCase;

#[async_trait]
impl SendOtpUseCase for StubSendOtpUseCase {
    async fn execute(&self, _username: &str) -> Result<(), SendOtpError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubVerifyOtpUseCase;

#[async_trait]
impl VerifyOtpUseCase for StubVerifyOtpUseCase {
    async fn execute(&self, _username: &str, _otp: &str) -> Result<(), VerifyOtpError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubResetPasswordUseCase;

#[async_trait]
impl ResetPasswordUseCase for StubResetPasswordUseCase {
    async fn execute(&self, _command: ResetPasswordCommand) -> Result<(), ResetPasswordError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubRefreshTokenUseCase;

#[async_trait]
impl RefreshTokenUseCase for StubRefreshTokenUseCase {
    async fn execute(
        &self,
        _command: RefreshTokenCommand,
    ) -> Result<RefreshedToken, RefreshTokenError> {
        unimplemented!()
    }
}

#[derive(Default, Clone)]
pub struct StubLogoutUseCase;

#[async_trait]
impl LogoutUseCase for StubLogoutUseCase {
    async fn execute(&self, _command: LogoutCommand) -> Result<(), LogoutError> {
        Ok(())
    }
}

#[derive(Default, Clone)]
pub struct StubFetchProfileUseCase;

#[async_trait]
impl FetchProfileUseCase for StubFetchProfileUseCase {
    async fn execute(&self, _user_id: UserId) -> Result<UserProfile, FetchProfileError> {
        Err(FetchProfileError::UserNotFound)
    }
}

// ──────────────────────────────────────────────────────────
// Appointments
// ──────────────────────────────────────────────────────────

#[derive(Default, Clone)]
pub struct StubBookAppointmentUseCase;

#[async_trait]
impl BookAppointmentUseCase for StubBookAppointmentUseCase {
    async fn execute(
        &self,
        _command: BookAppointmentCommand,
    ) -> Result<AppointmentView, BookAppointmentError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubAvailableSlotsUseCase;

#[async_trait]
impl GetAvailableSlotsUseCase for StubAvailableSlotsUseCase {
    async fn execute(
        &self,
        _doctor_id: UserId,
        _day: NaiveDate,
    ) -> Result<Vec<DateTime<Utc>>, AvailableSlotsError> {
        Ok(vec![])
    }
}

#[derive(Default, Clone)]
pub struct StubListPatientAppointmentsUseCase;

#[async_trait]
impl ListPatientAppointmentsUseCase for StubListPatientAppointmentsUseCase {
    async fn execute(
        &self,
        _actor: Actor,
        _patient_id: UserId,
    ) -> Result<Vec<AppointmentView>, ListAppointmentsError> {
        Ok(vec![])
    }
}

#[derive(Default, Clone)]
pub struct StubListDoctorAppointmentsUseCase;

#[async_trait]
impl ListDoctorAppointmentsUseCase for StubListDoctorAppointmentsUseCase {
    async fn execute(
        &self,
        _actor: Actor,
        _doctor_id: UserId,
    ) -> Result<Vec<AppointmentView>, ListAppointmentsError> {
        Ok(vec![])
    }
}

#[derive(Default, Clone)]
pub struct StubTodayAppointmentsUseCase;

#[async_trait]
impl TodayAppointmentsUseCase for StubTodayAppointmentsUseCase {
    async fn execute(
        &self,
        _doctor_id: UserId,
    ) -> Result<Vec<AppointmentView>, ListAppointmentsError> {
        Ok(vec![])
    }
}

#[derive(Default, Clone)]
pub struct StubCancelAppointmentUseCase;

#[async_trait]
impl CancelAppointmentUseCase for StubCancelAppointmentUseCase {
    async fn execute(
        &self,
        _patient_id: UserId,
        _appointment_id: Uuid,
    ) -> Result<Appointment, CancelAppointmentError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubSubmitFeedbackUseCase;

#[async_trait]
impl SubmitFeedbackUseCase for StubSubmitFeedbackUseCase {
    async fn execute(
        &self,
        _patient_id: UserId,
        _appointment_id: Uuid,
        _feedback: Feedback,
    ) -> Result<Appointment, SubmitFeedbackError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubCloseAppointmentUseCase;

#[async_trait]
impl CloseAppointmentUseCase for StubCloseAppointmentUseCase {
    async fn execute(
        &self,
        _doctor_id: UserId,
        _command: CloseAppointmentCommand,
    ) -> Result<ClosedAppointment, CloseAppointmentError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubDoctorAttendanceUseCase;

#[async_trait]
impl DoctorAttendanceUseCase for StubDoctorAttendanceUseCase {
    async fn execute(&self, _doctor_id: UserId) -> Result<Attendance, DoctorOverviewError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubDoctorPatientsUseCase;

#[async_trait]
impl DoctorPatientsUseCase for StubDoctorPatientsUseCase {
    async fn execute(&self, _doctor_id: UserId) -> Result<Vec<DoctorPatient>, DoctorOverviewError> {
        Ok(vec![])
    }
}

// ──────────────────────────────────────────────────────────
// Medical records
// ──────────────────────────────────────────────────────────

#[derive(Default, Clone)]
pub struct StubMedicalHistoryUseCase;

#[async_trait]
impl GetMedicalHistoryUseCase for StubMedicalHistoryUseCase {
    async fn execute(
        &self,
        _actor: Actor,
        _patient_id: UserId,
    ) -> Result<Vec<MedicalRecordView>, GetMedicalHistoryError> {
        Ok(vec![])
    }
}

#[derive(Default, Clone)]
pub struct StubAddMedicalRecordUseCase;

#[async_trait]
impl AddMedicalRecordUseCase for StubAddMedicalRecordUseCase {
    async fn execute(
        &self,
        _doctor_id: UserId,
        _patient_id: UserId,
        _command: AddMedicalRecordCommand,
    ) -> Result<MedicalRecordView, AddMedicalRecordError> {
        unimplemented!("Not used in this test")
    }
}

// ──────────────────────────────────────────────────────────
// Billing
// ──────────────────────────────────────────────────────────

#[derive(Default, Clone)]
pub struct StubListPatientBillsUseCase;

#[async_trait]
impl ListPatientBillsUseCase for StubListPatientBillsUseCase {
    async fn execute(
        &self,
        _actor: Actor,
        _patient_id: UserId,
    ) -> Result<Vec<BillView>, ListPatientBillsError> {
        Ok(vec![])
    }
}

#[derive(Default, Clone)]
pub struct StubPayBillUseCase;

#[async_trait]
impl PayBillUseCase for StubPayBillUseCase {
    async fn execute(&self, _patient_id: UserId, _bill_id: Uuid) -> Result<Bill, PayBillError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubCreateBillUseCase;

#[async_trait]
impl CreateBillUseCase for StubCreateBillUseCase {
    async fn execute(&self, _command: CreateBillCommand) -> Result<Bill, CreateBillError> {
        unimplemented!("Not used in this test")
    }
}

// ──────────────────────────────────────────────────────────
// Admin
// ──────────────────────────────────────────────────────────

#[derive(Default, Clone)]
pub struct StubHospitalStatsUseCase;

#[async_trait]
impl HospitalStatsUseCase for StubHospitalStatsUseCase {
    async fn execute(&self) -> Result<HospitalStats, HospitalStatsError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubListUsersUseCase;

#[async_trait]
impl ListUsersUseCase for StubListUsersUseCase {
    async fn execute(&self, _role: Option<Role>) -> Result<Vec<UserProfile>, ListUsersError> {
        Ok(vec![])
    }
}

#[derive(Default, Clone)]
pub struct StubDeleteUserUseCase;

#[async_trait]
impl DeleteUserUseCase for StubDeleteUserUseCase {
    async fn execute(&self, _user_id: UserId, _role: Option<Role>) -> Result<(), DeleteUserError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubDoctorStatsUseCase;

#[async_trait]
impl ListDoctorsWithStatsUseCase for StubDoctorStatsUseCase {
    async fn execute(&self) -> Result<Vec<DoctorWithStats>, DoctorStatsError> {
        Ok(vec![])
    }
}

#[derive(Default, Clone)]
pub struct StubPatientDetailUseCase;

#[async_trait]
impl PatientDetailUseCase for StubPatientDetailUseCase {
    async fn execute(&self, _patient_id: UserId) -> Result<PatientDetail, PatientDetailError> {
        Err(PatientDetailError::NotFound)
    }
}

#[derive(Default, Clone)]
pub struct StubAllAppointmentsUseCase;

#[async_trait]
impl AllAppointmentsUseCase for StubAllAppointmentsUseCase {
    async fn execute(&self) -> Result<Vec<AppointmentView>, AllAppointmentsError> {
        Ok(vec![])
    }
}

// ──────────────────────────────────────────────────────────
// Directory
// ──────────────────────────────────────────────────────────

#[derive(Default, Clone)]
pub struct StubListDoctorsUseCase;

#[async_trait]
impl ListDoctorsUseCase for StubListDoctorsUseCase {
    async fn execute(&self) -> Result<Vec<DoctorListing>, ListDoctorsError> {
        Ok(vec![])
    }
}
