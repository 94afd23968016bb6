use actix_web::web;
use std::sync::Arc;
use uuid::Uuid;

use crate::admin::application::admin_use_cases::AdminUseCases;
use crate::admin::application::ports::incoming::use_cases::{
    AllAppointmentsUseCase, DeleteUserUseCase, HospitalStatsUseCase, ListDoctorsWithStatsUseCase,
    ListUsersUseCase, PatientDetailUseCase,
};
use crate::appointment::application::appointment_use_cases::AppointmentUseCases;
use crate::appointment::application::domain::slot_policy::SlotPolicy;
use crate::appointment::application::orchestrator::appointment_booking::AppointmentBookingOrchestrator;
use crate::appointment::application::ports::incoming::use_cases::{
    CancelAppointmentUseCase, CloseAppointmentUseCase, DoctorAttendanceUseCase,
    DoctorPatientsUseCase, GetAvailableSlotsUseCase, ListDoctorAppointmentsUseCase,
    ListPatientAppointmentsUseCase, SubmitFeedbackUseCase, TodayAppointmentsUseCase,
};
use crate::auth::application::auth_use_cases::AuthUseCases;
use crate::auth::application::orchestrator::patient_signup::PatientSignupOrchestrator;
use crate::auth::application::ports::incoming::use_cases::{
    CreateUserUseCase, FetchProfileUseCase, LoginUserUseCase, LogoutUseCase, RefreshTokenUseCase,
    ResetPasswordUseCase, SendOtpUseCase, VerifyOtpUseCase,
};
use crate::billing::application::billing_use_cases::BillingUseCases;
use crate::billing::application::ports::incoming::use_cases::{
    CreateBillUseCase, ListPatientBillsUseCase, PayBillUseCase,
};
use crate::directory::application::directory_use_cases::DirectoryUseCases;
use crate::directory::application::ports::incoming::use_cases::ListDoctorsUseCase;
use crate::medical_record::application::medical_record_use_cases::MedicalRecordUseCases;
use crate::medical_record::application::ports::incoming::use_cases::{
    AddMedicalRecordUseCase, GetMedicalHistoryUseCase,
};
use crate::tests::support::auth_helper::StubTokenProvider;
use crate::tests::support::fakes::RecordingNotifier;
use crate::tests::support::stubs::*;
use crate::AppState;

/// Assembles an `AppState` whose use cases are stubs unless replaced.
pub struct TestAppStateBuilder {
    auth: AuthUseCases,
    appointment: AppointmentUseCases,
    medical_record: MedicalRecordUseCases,
    billing: BillingUseCases,
    admin: AdminUseCases,
    directory: DirectoryUseCases,
}

pub fn default_test_signup_orchestrator() -> Arc<PatientSignupOrchestrator> {
    Arc::new(PatientSignupOrchestrator::new(
        Arc::new(StubCreateUserUseCase),
        Arc::new(StubTokenProvider::patient(Uuid::new_v4())),
    ))
}

pub fn default_test_booking_orchestrator() -> Arc<AppointmentBookingOrchestrator> {
    Arc::new(AppointmentBookingOrchestrator::new(
        Arc::new(StubBookAppointmentUseCase),
        Arc::new(RecordingNotifier::default()),
        SlotPolicy::default(),
    ))
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            auth: AuthUseCases {
                login: Arc::new(StubLoginUseCase),
                signup: default_test_signup_orchestrator(),
                send_otp: Arc::new(StubSendOtpUseCase),
                verify_otp: Arc::new(StubVerifyOtpUseCase),
                reset_password: Arc::new(StubResetPasswordUseCase),
                refresh_token: Arc::new(StubRefreshTokenUseCase),
                logout: Arc::new(StubLogoutUseCase),
                fetch_profile: Arc::new(StubFetchProfileUseCase),
                create_user: Arc::new(StubCreateUserUseCase),
            },
            appointment: AppointmentUseCases {
                book: default_test_booking_orchestrator(),
                available_slots: Arc::new(StubAvailableSlotsUseCase),
                list_for_patient: Arc::new(StubListPatientAppointmentsUseCase),
                list_for_doctor: Arc::new(StubListDoctorAppointmentsUseCase),
                today: Arc::new(StubTodayAppointmentsUseCase),
                cancel: Arc::new(StubCancelAppointmentUseCase),
                feedback: Arc::new(StubSubmitFeedbackUseCase),
                close: Arc::new(StubCloseAppointmentUseCase),
                attendance: Arc::new(StubDoctorAttendanceUseCase),
                patients: Arc::new(StubDoctorPatientsUseCase),
            },
            medical_record: MedicalRecordUseCases {
                history: Arc::new(StubMedicalHistoryUseCase),
                add: Arc::new(StubAddMedicalRecordUseCase),
            },
            billing: BillingUseCases {
                list_for_patient: Arc::new(StubListPatientBillsUseCase),
                pay: Arc::new(StubPayBillUseCase),
                create: Arc::new(StubCreateBillUseCase),
            },
            admin: AdminUseCases {
                stats: Arc::new(StubHospitalStatsUseCase),
                list_users: Arc::new(StubListUsersUseCase),
                delete_user: Arc::new(StubDeleteUserUseCase),
                doctors: Arc::new(StubDoctorStatsUseCase),
                patient_detail: Arc::new(StubPatientDetailUseCase),
                all_appointments: Arc::new(StubAllAppointmentsUseCase),
            },
            directory: DirectoryUseCases {
                doctors: Arc::new(StubListDoctorsUseCase),
            },
        }
    }
}

impl TestAppStateBuilder {
    // Auth

    pub fn with_login(mut self, uc: impl LoginUserUseCase + Send + Sync + 'static) -> Self {
        self.auth.login = Arc::new(uc);
        self
    }

    pub fn with_signup(mut self, orchestrator: Arc<PatientSignupOrchestrator>) -> Self {
        self.auth.signup = orchestrator;
        self
    }

    pub fn with_send_otp(mut self, uc: impl SendOtpUseCase + Send + Sync + 'static) -> Self {
        self.auth.send_otp = Arc::new(uc);
        self
    }

    pub fn with_verify_otp(mut self, uc: impl VerifyOtpUseCase + Send + Sync + 'static) -> Self {
        self.auth.verify_otp = Arc::new(uc);
        self
    }

    pub fn with_reset_password(
        mut self,
        uc: impl ResetPasswordUseCase + Send + Sync + 'static,
    ) -> Self {
        self.auth.reset_password = Arc::new(uc);
        self
    }

    pub fn with_refresh_token(
        mut self,
        uc: impl RefreshTokenUseCase + Send + Sync + 'static,
    ) -> Self {
        self.auth.refresh_token = Arc::new(uc);
        self
    }

    pub fn with_logout(mut self, uc: impl LogoutUseCase + Send + Sync + 'static) -> Self {
        self.auth.logout = Arc::new(uc);
        self
    }

    pub fn with_fetch_profile(
        mut self,
        uc: impl FetchProfileUseCase + Send + Sync + 'static,
    ) -> Self {
        self.auth.fetch_profile = Arc::new(uc);
        self
    }

    pub fn with_create_user(mut self, uc: impl CreateUserUseCase + Send + Sync + 'static) -> Self {
        self.auth.create_user = Arc::new(uc);
        self
    }

    // Appointments

    pub fn with_book_appointment(
        mut self,
        orchestrator: Arc<AppointmentBookingOrchestrator>,
    ) -> Self {
        self.appointment.book = orchestrator;
        self
    }

    pub fn with_available_slots(
        mut self,
        uc: impl GetAvailableSlotsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.appointment.available_slots = Arc::new(uc);
        self
    }

    pub fn with_list_patient_appointments(
        mut self,
        uc: impl ListPatientAppointmentsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.appointment.list_for_patient = Arc::new(uc);
        self
    }

    pub fn with_list_doctor_appointments(
        mut self,
        uc: impl ListDoctorAppointmentsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.appointment.list_for_doctor = Arc::new(uc);
        self
    }

    pub fn with_today_appointments(
        mut self,
        uc: impl TodayAppointmentsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.appointment.today = Arc::new(uc);
        self
    }

    pub fn with_cancel_appointment(
        mut self,
        uc: impl CancelAppointmentUseCase + Send + Sync + 'static,
    ) -> Self {
        self.appointment.cancel = Arc::new(uc);
        self
    }

    pub fn with_submit_feedback(
        mut self,
        uc: impl SubmitFeedbackUseCase + Send + Sync + 'static,
    ) -> Self {
        self.appointment.feedback = Arc::new(uc);
        self
    }

    pub fn with_close_appointment(
        mut self,
        uc: impl CloseAppointmentUseCase + Send + Sync + 'static,
    ) -> Self {
        self.appointment.close = Arc::new(uc);
        self
    }

    pub fn with_doctor_attendance(
        mut self,
        uc: impl DoctorAttendanceUseCase + Send + Sync + 'static,
    ) -> Self {
        self.appointment.attendance = Arc::new(uc);
        self
    }

    pub fn with_doctor_patients(
        mut self,
        uc: impl DoctorPatientsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.appointment.patients = Arc::new(uc);
        self
    }

    // Medical records

    pub fn with_medical_history(
        mut self,
        uc: impl GetMedicalHistoryUseCase + Send + Sync + 'static,
    ) -> Self {
        self.medical_record.history = Arc::new(uc);
        self
    }

    pub fn with_add_medical_record(
        mut self,
        uc: impl AddMedicalRecordUseCase + Send + Sync + 'static,
    ) -> Self {
        self.medical_record.add = Arc::new(uc);
        self
    }

    // Billing

    pub fn with_list_patient_bills(
        mut self,
        uc: impl ListPatientBillsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.billing.list_for_patient = Arc::new(uc);
        self
    }

    pub fn with_pay_bill(mut self, uc: impl PayBillUseCase + Send + Sync + 'static) -> Self {
        self.billing.pay = Arc::new(uc);
        self
    }

    pub fn with_create_bill(mut self, uc: impl CreateBillUseCase + Send + Sync + 'static) -> Self {
        self.billing.create = Arc::new(uc);
        self
    }

    // Admin

    pub fn with_hospital_stats(
        mut self,
        uc: impl HospitalStatsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.admin.stats = Arc::new(uc);
        self
    }

    pub fn with_list_users(mut self, uc: impl ListUsersUseCase + Send + Sync + 'static) -> Self {
        self.admin.list_users = Arc::new(uc);
        self
    }

    pub fn with_delete_user(mut self, uc: impl DeleteUserUseCase + Send + Sync + 'static) -> Self {
        self.admin.delete_user = Arc::new(uc);
        self
    }

    pub fn with_doctor_stats(
        mut self,
        uc: impl ListDoctorsWithStatsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.admin.doctors = Arc::new(uc);
        self
    }

    pub fn with_patient_detail(
        mut self,
        uc: impl PatientDetailUseCase + Send + Sync + 'static,
    ) -> Self {
        self.admin.patient_detail = Arc::new(uc);
        self
    }

    pub fn with_all_appointments(
        mut self,
        uc: impl AllAppointmentsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.admin.all_appointments = Arc::new(uc);
        self
    }

    // Directory

    pub fn with_list_doctors(mut self, uc: impl ListDoctorsUseCase + Send + Sync + 'static) -> Self {
        self.directory.doctors = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            auth: self.auth,
            appointment: self.appointment,
            medical_record: self.medical_record,
            billing: self.billing,
            admin: self.admin,
            directory: self.directory,
        })
    }
}
