pub mod api;
pub mod health;
pub mod modules;
pub mod shared;

pub use modules::{admin, appointment, auth, billing, directory, email, medical_record};

use crate::admin::application::admin_use_cases::AdminUseCases;
use crate::admin::application::services::{
    AllAppointmentsService, DeleteUserService, DoctorStatsService, HospitalStatsService,
    ListUsersService, PatientDetailService,
};
use crate::api::openapi::ApiDoc;
use crate::appointment::adapter::outgoing::{
    AppointmentQueryPostgres, AppointmentRepositoryPostgres,
};
use crate::appointment::application::appointment_use_cases::AppointmentUseCases;
use crate::appointment::application::domain::slot_policy::SlotPolicy;
use crate::appointment::application::orchestrator::appointment_booking::AppointmentBookingOrchestrator;
use crate::appointment::application::ports::outgoing::AppointmentQuery;
use crate::appointment::application::services::{
    BookAppointmentService, CancelAppointmentService, CloseAppointmentService,
    DoctorAttendanceService, DoctorPatientsService, GetAvailableSlotsService,
    ListDoctorAppointmentsService, ListPatientAppointmentsService, SubmitFeedbackService,
    TodayAppointmentsService,
};
use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::adapter::outgoing::security::{Argon2Hasher, BcryptHasher, LegacyAwareHasher};
use crate::auth::adapter::outgoing::{
    RedisTokenRepository, UserQueryPostgres, UserRepositoryPostgres,
};
use crate::auth::application::auth_use_cases::AuthUseCases;
use crate::auth::application::domain::otp::OtpPolicy;
use crate::auth::application::orchestrator::patient_signup::PatientSignupOrchestrator;
use crate::auth::application::ports::incoming::use_cases::CreateUserUseCase;
use crate::auth::application::ports::outgoing::{
    PasswordHasher, TokenProvider, UserQuery, UserRepository,
};
use crate::auth::application::services::{
    CreateUserService, FetchProfileService, LoginUserService, LogoutService, RefreshTokenService,
    ResetPasswordService, SendOtpService, VerifyOtpService,
};
use crate::billing::adapter::outgoing::{BillQueryPostgres, BillRepositoryPostgres};
use crate::billing::application::billing_use_cases::BillingUseCases;
use crate::billing::application::services::{
    CreateBillService, ListPatientBillsService, PayBillService,
};
use crate::directory::application::directory_use_cases::DirectoryUseCases;
use crate::directory::application::services::ListDoctorsService;
use crate::email::adapter::outgoing::SmtpEmailSender;
use crate::email::application::services::HospitalEmailService;
use crate::medical_record::adapter::outgoing::{
    MedicalRecordQueryPostgres, MedicalRecordRepositoryPostgres,
};
use crate::medical_record::application::medical_record_use_cases::MedicalRecordUseCases;
use crate::medical_record::application::ports::outgoing::MedicalRecordQuery;
use crate::medical_record::application::services::{
    AddMedicalRecordService, GetMedicalHistoryService,
};
use crate::shared::api::{custom_json_config, custom_query_config};

use actix_web::{web, App, HttpServer};
use deadpool_redis::{Config, Runtime};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database};
use std::env;
use std::sync::Arc;
use std::time::Duration;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub auth: AuthUseCases,
    pub appointment: AppointmentUseCases,
    pub medical_record: MedicalRecordUseCases,
    pub billing: BillingUseCases,
    pub admin: AdminUseCases,
    pub directory: DirectoryUseCases,
}

fn startup_error(message: impl Into<String>) -> std::io::Error {
    std::io::Error::other(message.into())
}

fn required_env(key: &str) -> std::io::Result<String> {
    env::var(key).map_err(|_| startup_error(format!("{key} is not set in .env file")))
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Redis TLS goes through rustls
    if rustls::crypto::ring::default_provider()
        .install_default()
        .is_err()
    {
        warn!("A rustls crypto provider was already installed");
    }

    // Environment variable loading
    let rust_env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // Try .env.{environment} first, then fall back to .env
    let env_file = format!(".env.{}", rust_env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let db_url = required_env("DATABASE_URL")?;
    let host = required_env("HOST")?;
    let port = required_env("PORT")?;
    let redis_url = required_env("REDIS_URL")?;
    let hospital_name =
        env::var("HOSPITAL_NAME").unwrap_or_else(|_| "Hospital Management System".to_string());

    let server_url = format!("{host}:{port}");
    info!(%server_url, env = %rust_env, "Server configuration loaded");

    // Database connection
    let mut opt = ConnectOptions::new(db_url);
    opt.max_connections(50)
        .min_connections(5)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .map_err(|e| startup_error(format!("Failed to connect to database: {e}")))?;

    if env::var("RUN_MIGRATIONS").as_deref() == Ok("true") {
        info!("Running pending migrations");
        Migrator::up(&conn, None)
            .await
            .map_err(|e| startup_error(format!("Migration failed: {e}")))?;
    }

    let db_arc = Arc::new(conn);

    // Redis connection
    let redis_pool = Config::from_url(&redis_url)
        .create_pool(Some(Runtime::Tokio1))
        .map_err(|e| startup_error(format!("Failed to create Redis pool: {e}")))?;

    let redis_arc = Arc::new(redis_pool);

    // Outgoing adapters
    let user_query = UserQueryPostgres::new(Arc::clone(&db_arc));
    let user_repo = UserRepositoryPostgres::new(Arc::clone(&db_arc));
    let appointment_query = AppointmentQueryPostgres::new(Arc::clone(&db_arc));
    let appointment_repo = AppointmentRepositoryPostgres::new(Arc::clone(&db_arc));
    let record_query = MedicalRecordQueryPostgres::new(Arc::clone(&db_arc));
    let record_repo = MedicalRecordRepositoryPostgres::new(Arc::clone(&db_arc));
    let bill_query = BillQueryPostgres::new(Arc::clone(&db_arc));
    let bill_repo = BillRepositoryPostgres::new(Arc::clone(&db_arc));
    let token_repo = RedisTokenRepository::new(Arc::clone(&redis_arc));

    // Cross-module read ports
    let users: Arc<dyn UserQuery> = Arc::new(user_query.clone());
    let user_writer: Arc<dyn UserRepository> = Arc::new(user_repo.clone());
    let appointments: Arc<dyn AppointmentQuery> = Arc::new(appointment_query.clone());
    let records: Arc<dyn MedicalRecordQuery> = Arc::new(record_query.clone());

    let jwt_config = JwtConfig::from_env().map_err(startup_error)?;
    let jwt_service = Arc::new(JwtTokenService::new(jwt_config));

    let argon2 = Argon2Hasher::from_env().map_err(startup_error)?;
    let hasher: Arc<dyn PasswordHasher> =
        Arc::new(LegacyAwareHasher::new(argon2, BcryptHasher::new()));

    let smtp_sender = SmtpEmailSender::from_env().map_err(startup_error)?;
    let email_service = Arc::new(HospitalEmailService::new(
        Arc::new(smtp_sender),
        &hospital_name,
    ));

    let slot_policy = SlotPolicy::from_env();

    // Auth
    let create_user: Arc<dyn CreateUserUseCase + Send + Sync> =
        Arc::new(CreateUserService::new(user_repo.clone(), hasher.clone()));

    let auth = AuthUseCases {
        login: Arc::new(LoginUserService::new(
            user_query.clone(),
            hasher.clone(),
            jwt_service.clone(),
        )),
        signup: Arc::new(PatientSignupOrchestrator::new(
            create_user.clone(),
            jwt_service.clone(),
        )),
        send_otp: Arc::new(SendOtpService::new(
            user_query.clone(),
            user_repo.clone(),
            email_service.clone(),
            OtpPolicy::from_env(),
        )),
        verify_otp: Arc::new(VerifyOtpService::new(user_query.clone())),
        reset_password: Arc::new(ResetPasswordService::new(
            user_query.clone(),
            user_repo.clone(),
            hasher,
        )),
        refresh_token: Arc::new(RefreshTokenService::new(
            token_repo.clone(),
            jwt_service.clone(),
        )),
        logout: Arc::new(LogoutService::new(token_repo, jwt_service.clone())),
        fetch_profile: Arc::new(FetchProfileService::new(user_query)),
        create_user,
    };

    // Appointments
    let book_appointment = Arc::new(BookAppointmentService::new(
        appointment_query.clone(),
        appointment_repo.clone(),
        users.clone(),
        slot_policy,
    ));

    let appointment = AppointmentUseCases {
        book: Arc::new(AppointmentBookingOrchestrator::new(
            book_appointment,
            email_service,
            slot_policy,
        )),
        available_slots: Arc::new(GetAvailableSlotsService::new(
            appointment_query.clone(),
            slot_policy,
        )),
        list_for_patient: Arc::new(ListPatientAppointmentsService::new(
            appointment_query.clone(),
            users.clone(),
        )),
        list_for_doctor: Arc::new(ListDoctorAppointmentsService::new(
            appointment_query.clone(),
            users.clone(),
        )),
        today: Arc::new(TodayAppointmentsService::new(
            appointment_query.clone(),
            users.clone(),
            slot_policy,
        )),
        cancel: Arc::new(CancelAppointmentService::new(
            appointment_query.clone(),
            appointment_repo.clone(),
        )),
        feedback: Arc::new(SubmitFeedbackService::new(
            appointment_query.clone(),
            appointment_repo.clone(),
        )),
        close: Arc::new(CloseAppointmentService::new(
            appointment_query.clone(),
            appointment_repo,
        )),
        attendance: Arc::new(DoctorAttendanceService::new(appointment_query.clone())),
        patients: Arc::new(DoctorPatientsService::new(appointment_query, users.clone())),
    };

    // Medical records
    let medical_record = MedicalRecordUseCases {
        history: Arc::new(GetMedicalHistoryService::new(record_query, users.clone())),
        add: Arc::new(AddMedicalRecordService::new(record_repo, users.clone())),
    };

    // Billing
    let billing = BillingUseCases {
        list_for_patient: Arc::new(ListPatientBillsService::new(
            bill_query.clone(),
            bill_repo.clone(),
            appointments.clone(),
            users.clone(),
        )),
        pay: Arc::new(PayBillService::new(bill_query, bill_repo.clone())),
        create: Arc::new(CreateBillService::new(bill_repo, appointments.clone())),
    };

    // Admin
    let admin = AdminUseCases {
        stats: Arc::new(HospitalStatsService::new(
            users.clone(),
            appointments.clone(),
        )),
        list_users: Arc::new(ListUsersService::new(users.clone())),
        delete_user: Arc::new(DeleteUserService::new(
            users.clone(),
            user_writer,
            appointments.clone(),
        )),
        doctors: Arc::new(DoctorStatsService::new(
            users.clone(),
            appointments.clone(),
            slot_policy,
        )),
        patient_detail: Arc::new(PatientDetailService::new(
            users.clone(),
            appointments.clone(),
            records,
        )),
        all_appointments: Arc::new(AllAppointmentsService::new(appointments, users.clone())),
    };

    let directory = DirectoryUseCases {
        doctors: Arc::new(ListDoctorsService::new(users)),
    };

    let state = AppState {
        auth,
        appointment,
        medical_record,
        billing,
        admin,
        directory,
    };

    let token_provider_arc: Arc<dyn TokenProvider + Send + Sync> = jwt_service;
    let openapi = ApiDoc::openapi();

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider_arc)))
            .app_data(web::Data::new(Arc::clone(&db_arc)))
            .app_data(web::Data::new(Arc::clone(&redis_arc)))
            .app_data(custom_json_config())
            .app_data(custom_query_config())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", openapi.clone()),
            )
            .configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    use crate::admin::adapter::incoming::web::routes as admin_routes;
    use crate::appointment::adapter::incoming::web::routes as appointment_routes;
    use crate::auth::adapter::incoming::web::routes as auth_routes;
    use crate::billing::adapter::incoming::web::routes as billing_routes;
    use crate::directory::adapter::incoming::web::routes as directory_routes;
    use crate::medical_record::adapter::incoming::web::routes as record_routes;

    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Auth
    cfg.service(auth_routes::signup_handler);
    cfg.service(auth_routes::login_handler);
    cfg.service(auth_routes::admin_login_handler);
    cfg.service(auth_routes::send_otp_handler);
    cfg.service(auth_routes::verify_otp_handler);
    cfg.service(auth_routes::reset_password_handler);
    cfg.service(auth_routes::refresh_token_handler);
    cfg.service(auth_routes::logout_handler);
    cfg.service(auth_routes::me_handler);
    // Appointments
    cfg.service(appointment_routes::available_slots_handler);
    cfg.service(appointment_routes::book_appointment_handler);
    cfg.service(appointment_routes::patient_appointments_handler);
    cfg.service(appointment_routes::doctor_appointments_handler);
    cfg.service(appointment_routes::my_patient_appointments_handler);
    cfg.service(appointment_routes::today_appointments_handler);
    cfg.service(appointment_routes::my_doctor_appointments_handler);
    cfg.service(appointment_routes::cancel_appointment_handler);
    cfg.service(appointment_routes::submit_feedback_handler);
    cfg.service(appointment_routes::close_appointment_handler);
    cfg.service(appointment_routes::attendance_handler);
    cfg.service(appointment_routes::doctor_patients_handler);
    // Medical records
    cfg.service(record_routes::medical_history_handler);
    cfg.service(record_routes::add_medical_record_handler);
    cfg.service(record_routes::my_medical_records_handler);
    // Billing
    cfg.service(billing_routes::patient_bills_handler);
    cfg.service(billing_routes::pay_bill_handler);
    cfg.service(billing_routes::create_bill_handler);
    // Admin
    cfg.service(admin_routes::stats_handler);
    cfg.service(admin_routes::list_users_handler);
    cfg.service(admin_routes::create_user_handler);
    cfg.service(admin_routes::delete_user_handler);
    cfg.service(admin_routes::list_doctors_handler);
    cfg.service(admin_routes::create_doctor_handler);
    cfg.service(admin_routes::delete_doctor_handler);
    cfg.service(admin_routes::list_patients_handler);
    cfg.service(admin_routes::patient_detail_handler);
    cfg.service(admin_routes::delete_patient_handler);
    cfg.service(admin_routes::all_appointments_handler);
    // Directory
    cfg.service(directory_routes::public_doctors_handler);
    cfg.service(directory_routes::doctor_contacts_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
