//! In-memory implementations of outgoing ports shared by service tests.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use crate::appointment::application::domain::entities::{
    Appointment, AppointmentStatus, Feedback,
};
use crate::appointment::application::ports::outgoing::{
    AppointmentQuery, AppointmentQueryError, AppointmentRepository, AppointmentRepositoryError,
    NewAppointment,
};
use crate::auth::application::domain::entities::{Role, UserId, UserProfile};
use crate::auth::application::ports::outgoing::{
    CreateUserData, HashError, PasswordHasher, TokenRepository, TokenRepositoryError, UserQuery,
    UserQueryError, UserQueryResult, UserRepository, UserRepositoryError,
};
use crate::billing::application::domain::entities::{Bill, BillStatus};
use crate::billing::application::ports::outgoing::{
    BillQuery, BillQueryError, BillRepository, BillRepositoryError, NewBill,
};
use crate::email::application::ports::outgoing::{
    AppointmentConfirmation, HospitalNotifier, NotificationError,
};
use crate::medical_record::application::domain::entities::{MedicalRecord, NewMedicalRecord};
use crate::medical_record::application::ports::outgoing::{
    MedicalRecordQuery, MedicalRecordQueryError, MedicalRecordRepository,
    MedicalRecordRepositoryError,
};

// ──────────────────────────────────────────────────────────
// Users
// ──────────────────────────────────────────────────────────

pub fn user_fixture(username: &str, role: Role) -> UserQueryResult {
    UserQueryResult {
        id: Uuid::new_v4(),
        username: username.to_string(),
        email: format!("{}@example.com", username),
        password_hash: "hashed:secret1".to_string(),
        role,
        name: format!("{} name", username),
        phone: Some("555-0100".to_string()),
        specialization: (role == Role::Doctor).then(|| "Cardiology".to_string()),
        experience_years: (role == Role::Doctor).then_some(8),
        otp: None,
        otp_expires_at: None,
        created_at: Utc::now(),
    }
}

/// Users table backed by a vector. Implements both the query and the
/// repository side so a service sees its own writes.
#[derive(Clone, Default)]
pub struct InMemoryUsers {
    rows: Arc<Mutex<Vec<UserQueryResult>>>,
    failing: bool,
}

impl InMemoryUsers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(users: Vec<UserQueryResult>) -> Self {
        Self {
            rows: Arc::new(Mutex::new(users)),
            failing: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            rows: Arc::default(),
            failing: true,
        }
    }

    pub fn get(&self, id: Uuid) -> Option<UserQueryResult> {
        self.rows.lock().unwrap().iter().find(|u| u.id == id).cloned()
    }

    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    fn check(&self) -> Result<(), String> {
        if self.failing {
            Err("connection lost".to_string())
        } else {
            Ok(())
        }
    }

    fn find(&self, pred: impl Fn(&UserQueryResult) -> bool) -> Option<UserQueryResult> {
        self.rows.lock().unwrap().iter().find(|u| pred(u)).cloned()
    }
}

#[async_trait]
impl UserQuery for InMemoryUsers {
    async fn find_by_id(&self, user_id: UserId) -> Result<Option<UserQueryResult>, UserQueryError> {
        self.check().map_err(UserQueryError::DatabaseError)?;
        Ok(self.find(|u| u.id == user_id.value()))
    }

    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<UserQueryResult>, UserQueryError> {
        self.check().map_err(UserQueryError::DatabaseError)?;
        Ok(self.find(|u| u.username == username))
    }

    async fn find_by_username_and_role(
        &self,
        username: &str,
        role: Role,
    ) -> Result<Option<UserQueryResult>, UserQueryError> {
        self.check().map_err(UserQueryError::DatabaseError)?;
        Ok(self.find(|u| u.username == username && u.role == role))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<UserQueryResult>, UserQueryError> {
        self.check().map_err(UserQueryError::DatabaseError)?;
        Ok(self.find(|u| u.email == email))
    }

    async fn list_users(&self, role: Option<Role>) -> Result<Vec<UserQueryResult>, UserQueryError> {
        self.check().map_err(UserQueryError::DatabaseError)?;
        let mut users: Vec<_> = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|u| role.map_or(true, |r| u.role == r))
            .cloned()
            .collect();
        users.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(users)
    }

    async fn find_many(&self, ids: Vec<Uuid>) -> Result<Vec<UserQueryResult>, UserQueryError> {
        self.check().map_err(UserQueryError::DatabaseError)?;
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|u| ids.contains(&u.id))
            .cloned()
            .collect())
    }

    async fn count_by_role(&self, role: Role) -> Result<u64, UserQueryError> {
        self.check().map_err(UserQueryError::DatabaseError)?;
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|u| u.role == role)
            .count() as u64)
    }
}

#[async_trait]
impl UserRepository for InMemoryUsers {
    async fn create_user(&self, data: CreateUserData) -> Result<UserProfile, UserRepositoryError> {
        self.check().map_err(UserRepositoryError::DatabaseError)?;

        let mut rows = self.rows.lock().unwrap();
        if rows.iter().any(|u| u.username == data.username) {
            return Err(UserRepositoryError::UsernameAlreadyExists);
        }
        if rows.iter().any(|u| u.email == data.email) {
            return Err(UserRepositoryError::EmailAlreadyExists);
        }

        let row = UserQueryResult {
            id: Uuid::new_v4(),
            username: data.username,
            email: data.email,
            password_hash: data.password_hash,
            role: data.role,
            name: data.name,
            phone: data.phone,
            specialization: data.specialization,
            experience_years: data.experience_years,
            otp: None,
            otp_expires_at: None,
            created_at: Utc::now(),
        };
        let profile = row.to_profile();
        rows.push(row);
        Ok(profile)
    }

    async fn set_otp(
        &self,
        user_id: UserId,
        otp: String,
        expires_at: DateTime<Utc>,
    ) -> Result<(), UserRepositoryError> {
        self.check().map_err(UserRepositoryError::DatabaseError)?;
        let mut rows = self.rows.lock().unwrap();
        let user = rows
            .iter_mut()
            .find(|u| u.id == user_id.value())
            .ok_or(UserRepositoryError::UserNotFound)?;
        user.otp = Some(otp);
        user.otp_expires_at = Some(expires_at);
        Ok(())
    }

    async fn update_password(
        &self,
        user_id: UserId,
        password_hash: String,
    ) -> Result<(), UserRepositoryError> {
        self.check().map_err(UserRepositoryError::DatabaseError)?;
        let mut rows = self.rows.lock().unwrap();
        let user = rows
            .iter_mut()
            .find(|u| u.id == user_id.value())
            .ok_or(UserRepositoryError::UserNotFound)?;
        user.password_hash = password_hash;
        user.otp = None;
        user.otp_expires_at = None;
        Ok(())
    }

    async fn delete_user(&self, user_id: UserId) -> Result<(), UserRepositoryError> {
        self.check().map_err(UserRepositoryError::DatabaseError)?;
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|u| u.id != user_id.value());
        if rows.len() == before {
            return Err(UserRepositoryError::UserNotFound);
        }
        Ok(())
    }
}

// ──────────────────────────────────────────────────────────
// Password hashing
// ──────────────────────────────────────────────────────────

/// Reversible "hash" so assertions can read what was stored.
#[derive(Debug, Clone, Default)]
pub struct PlainHasher {
    pub failing: bool,
}

#[async_trait]
impl PasswordHasher for PlainHasher {
    async fn hash_password(&self, password: &str) -> Result<String, HashError> {
        if self.failing {
            return Err(HashError::HashFailed);
        }
        Ok(format!("hashed:{}", password))
    }

    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError> {
        if self.failing {
            return Err(HashError::VerifyFailed);
        }
        Ok(hash == format!("hashed:{}", password))
    }
}

// ──────────────────────────────────────────────────────────
// Token blacklist
// ──────────────────────────────────────────────────────────

#[derive(Clone, Default)]
pub struct InMemoryTokenRepository {
    pub revoked: Arc<Mutex<HashSet<String>>>,
    pub failing: bool,
}

impl InMemoryTokenRepository {
    pub fn failing() -> Self {
        Self {
            revoked: Arc::default(),
            failing: true,
        }
    }
}

#[async_trait]
impl TokenRepository for InMemoryTokenRepository {
    async fn blacklist_token(
        &self,
        token_hash: String,
        _user_id: Uuid,
        _expires_at: DateTime<Utc>,
    ) -> Result<(), TokenRepositoryError> {
        if self.failing {
            return Err(TokenRepositoryError::DatabaseError("redis down".to_string()));
        }
        self.revoked.lock().unwrap().insert(token_hash);
        Ok(())
    }

    async fn is_token_blacklisted(&self, token_hash: &str) -> Result<bool, TokenRepositoryError> {
        if self.failing {
            return Err(TokenRepositoryError::DatabaseError("redis down".to_string()));
        }
        Ok(self.revoked.lock().unwrap().contains(token_hash))
    }
}

// ──────────────────────────────────────────────────────────
// Notifications
// ──────────────────────────────────────────────────────────

#[derive(Clone, Default)]
pub struct RecordingNotifier {
    pub otps: Arc<Mutex<Vec<(String, String)>>>,
    pub confirmations: Arc<Mutex<Vec<AppointmentConfirmation>>>,
    pub failing: bool,
}

impl RecordingNotifier {
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }
}

#[async_trait]
impl HospitalNotifier for RecordingNotifier {
    async fn send_password_reset_otp(
        &self,
        to: &str,
        _name: &str,
        otp: &str,
        _ttl_minutes: i64,
    ) -> Result<(), NotificationError> {
        if self.failing {
            return Err(NotificationError::EmailSendingFailed("smtp down".to_string()));
        }
        self.otps
            .lock()
            .unwrap()
            .push((to.to_string(), otp.to_string()));
        Ok(())
    }

    async fn send_appointment_confirmation(
        &self,
        confirmation: &AppointmentConfirmation,
    ) -> Result<(), NotificationError> {
        if self.failing {
            return Err(NotificationError::EmailSendingFailed("smtp down".to_string()));
        }
        self.confirmations
            .lock()
            .unwrap()
            .push(confirmation.clone());
        Ok(())
    }
}

// ──────────────────────────────────────────────────────────
// Appointments
// ──────────────────────────────────────────────────────────

pub fn appointment_fixture(
    patient_id: Uuid,
    doctor_id: Uuid,
    date: DateTime<Utc>,
    status: AppointmentStatus,
) -> Appointment {
    let now = Utc::now();
    Appointment {
        id: Uuid::new_v4(),
        patient_id,
        doctor_id,
        date,
        status,
        feedback: None,
        created_at: now,
        updated_at: now,
    }
}

fn to_record(id: Uuid, record: NewMedicalRecord) -> MedicalRecord {
    MedicalRecord {
        id,
        patient_id: record.patient_id,
        doctor_id: record.doctor_id,
        appointment_id: record.appointment_id,
        date: record.date,
        diagnosis: record.diagnosis,
        symptoms: record.symptoms,
        medications: record.medications,
        notes: record.notes,
        created_at: Utc::now(),
    }
}

/// Appointments table plus the medical records written when one is closed.
/// Enforces the one-live-appointment-per-slot index on insert.
#[derive(Clone, Default)]
pub struct InMemoryAppointments {
    rows: Arc<Mutex<Vec<Appointment>>>,
    pub records: Arc<Mutex<Vec<MedicalRecord>>>,
    failing: bool,
}

impl InMemoryAppointments {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(rows: Vec<Appointment>) -> Self {
        Self {
            rows: Arc::new(Mutex::new(rows)),
            ..Self::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    pub fn get(&self, id: Uuid) -> Option<Appointment> {
        self.rows.lock().unwrap().iter().find(|a| a.id == id).cloned()
    }

    pub fn all(&self) -> Vec<Appointment> {
        self.rows.lock().unwrap().clone()
    }

    fn check(&self) -> Result<(), String> {
        if self.failing {
            Err("connection lost".to_string())
        } else {
            Ok(())
        }
    }

    fn select(&self, pred: impl Fn(&Appointment) -> bool) -> Vec<Appointment> {
        self.rows
            .lock()
            .unwrap()
            .iter()
            .filter(|a| pred(a))
            .cloned()
            .collect()
    }

    fn modify(
        &self,
        id: Uuid,
        change: impl FnOnce(&mut Appointment),
    ) -> Result<Appointment, AppointmentRepositoryError> {
        self.check().map_err(AppointmentRepositoryError::DatabaseError)?;
        let mut rows = self.rows.lock().unwrap();
        let appt = rows
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or(AppointmentRepositoryError::NotFound)?;
        change(appt);
        appt.updated_at = Utc::now();
        Ok(appt.clone())
    }

    /// Moves an open appointment to `status`, like the guarded SQL update.
    fn transition(
        &self,
        id: Uuid,
        status: AppointmentStatus,
    ) -> Result<Appointment, AppointmentRepositoryError> {
        self.check().map_err(AppointmentRepositoryError::DatabaseError)?;
        let current = self.get(id).ok_or(AppointmentRepositoryError::NotFound)?;
        if !current.status.is_open() {
            return Err(AppointmentRepositoryError::InvalidStatus(current.status));
        }
        self.modify(id, |a| a.status = status)
    }
}

#[async_trait]
impl AppointmentQuery for InMemoryAppointments {
    async fn find_by_id(
        &self,
        appointment_id: Uuid,
    ) -> Result<Option<Appointment>, AppointmentQueryError> {
        self.check().map_err(AppointmentQueryError::DatabaseError)?;
        Ok(self.get(appointment_id))
    }

    async fn list_for_patient(
        &self,
        patient_id: Uuid,
    ) -> Result<Vec<Appointment>, AppointmentQueryError> {
        self.check().map_err(AppointmentQueryError::DatabaseError)?;
        let mut rows = self.select(|a| a.patient_id == patient_id);
        rows.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(rows)
    }

    async fn list_for_doctor(
        &self,
        doctor_id: Uuid,
    ) -> Result<Vec<Appointment>, AppointmentQueryError> {
        self.check().map_err(AppointmentQueryError::DatabaseError)?;
        let mut rows = self.select(|a| a.doctor_id == doctor_id);
        rows.sort_by_key(|a| a.date);
        Ok(rows)
    }

    async fn list_for_doctor_between(
        &self,
        doctor_id: Uuid,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<Appointment>, AppointmentQueryError> {
        self.check().map_err(AppointmentQueryError::DatabaseError)?;
        let mut rows = self.select(|a| {
            a.doctor_id == doctor_id
                && a.status != AppointmentStatus::Cancelled
                && a.date >= from
                && a.date < to
        });
        rows.sort_by_key(|a| a.date);
        Ok(rows)
    }

    async fn list_all(&self) -> Result<Vec<Appointment>, AppointmentQueryError> {
        self.check().map_err(AppointmentQueryError::DatabaseError)?;
        let mut rows = self.all();
        rows.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(rows)
    }

    async fn list_with_status(
        &self,
        statuses: &[AppointmentStatus],
    ) -> Result<Vec<Appointment>, AppointmentQueryError> {
        self.check().map_err(AppointmentQueryError::DatabaseError)?;
        Ok(self.select(|a| statuses.contains(&a.status)))
    }

    async fn count_for_doctor(
        &self,
        doctor_id: Uuid,
        statuses: &[AppointmentStatus],
    ) -> Result<u64, AppointmentQueryError> {
        self.check().map_err(AppointmentQueryError::DatabaseError)?;
        Ok(self
            .select(|a| {
                a.doctor_id == doctor_id && (statuses.is_empty() || statuses.contains(&a.status))
            })
            .len() as u64)
    }

    async fn count_for_patient(&self, patient_id: Uuid) -> Result<u64, AppointmentQueryError> {
        self.check().map_err(AppointmentQueryError::DatabaseError)?;
        Ok(self.select(|a| a.patient_id == patient_id).len() as u64)
    }

    async fn count_all(&self) -> Result<u64, AppointmentQueryError> {
        self.check().map_err(AppointmentQueryError::DatabaseError)?;
        Ok(self.rows.lock().unwrap().len() as u64)
    }
}

#[async_trait]
impl AppointmentRepository for InMemoryAppointments {
    async fn insert(&self, data: NewAppointment) -> Result<Appointment, AppointmentRepositoryError> {
        self.check().map_err(AppointmentRepositoryError::DatabaseError)?;
        let mut rows = self.rows.lock().unwrap();
        let taken = rows.iter().any(|a| {
            a.doctor_id == data.doctor_id
                && a.date == data.date
                && a.status != AppointmentStatus::Cancelled
        });
        if taken {
            return Err(AppointmentRepositoryError::SlotTaken);
        }

        let appt = appointment_fixture(data.patient_id, data.doctor_id, data.date, data.status);
        rows.push(appt.clone());
        Ok(appt)
    }

    async fn cancel(&self, appointment_id: Uuid) -> Result<Appointment, AppointmentRepositoryError> {
        self.transition(appointment_id, AppointmentStatus::Cancelled)
    }

    async fn set_feedback(
        &self,
        appointment_id: Uuid,
        feedback: Feedback,
    ) -> Result<Appointment, AppointmentRepositoryError> {
        self.modify(appointment_id, |a| a.feedback = Some(feedback))
    }

    async fn complete_with_record(
        &self,
        appointment_id: Uuid,
        record: NewMedicalRecord,
    ) -> Result<(Appointment, MedicalRecord), AppointmentRepositoryError> {
        let appt = self.transition(appointment_id, AppointmentStatus::Completed)?;
        let record = to_record(Uuid::new_v4(), record);
        self.records.lock().unwrap().push(record.clone());
        Ok((appt, record))
    }
}

// ──────────────────────────────────────────────────────────
// Medical records
// ──────────────────────────────────────────────────────────

pub fn record_fixture(patient_id: Uuid, doctor_id: Uuid, date: DateTime<Utc>) -> MedicalRecord {
    to_record(
        Uuid::new_v4(),
        NewMedicalRecord {
            patient_id,
            doctor_id,
            appointment_id: None,
            date,
            diagnosis: "Common cold".to_string(),
            symptoms: Some("Sneezing".to_string()),
            medications: vec!["Rest".to_string()],
            notes: None,
        },
    )
}

#[derive(Clone, Default)]
pub struct InMemoryMedicalRecords {
    rows: Arc<Mutex<Vec<MedicalRecord>>>,
    failing: bool,
}

impl InMemoryMedicalRecords {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(rows: Vec<MedicalRecord>) -> Self {
        Self {
            rows: Arc::new(Mutex::new(rows)),
            failing: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            rows: Arc::default(),
            failing: true,
        }
    }

    pub fn all(&self) -> Vec<MedicalRecord> {
        self.rows.lock().unwrap().clone()
    }
}

#[async_trait]
impl MedicalRecordQuery for InMemoryMedicalRecords {
    async fn list_for_patient(
        &self,
        patient_id: Uuid,
    ) -> Result<Vec<MedicalRecord>, MedicalRecordQueryError> {
        if self.failing {
            return Err(MedicalRecordQueryError::DatabaseError("connection lost".into()));
        }
        let mut rows: Vec<_> = self
            .all()
            .into_iter()
            .filter(|r| r.patient_id == patient_id)
            .collect();
        rows.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(rows)
    }

    async fn count_for_patient(&self, patient_id: Uuid) -> Result<u64, MedicalRecordQueryError> {
        if self.failing {
            return Err(MedicalRecordQueryError::DatabaseError("connection lost".into()));
        }
        Ok(self.all().iter().filter(|r| r.patient_id == patient_id).count() as u64)
    }
}

#[async_trait]
impl MedicalRecordRepository for InMemoryMedicalRecords {
    async fn insert(
        &self,
        record: NewMedicalRecord,
    ) -> Result<MedicalRecord, MedicalRecordRepositoryError> {
        if self.failing {
            return Err(MedicalRecordRepositoryError::DatabaseError("connection lost".into()));
        }
        let record = to_record(Uuid::new_v4(), record);
        self.rows.lock().unwrap().push(record.clone());
        Ok(record)
    }
}

// ──────────────────────────────────────────────────────────
// Bills
// ──────────────────────────────────────────────────────────

pub fn bill_fixture(
    patient_id: Uuid,
    appointment_id: Uuid,
    status: BillStatus,
    due_date: DateTime<Utc>,
) -> Bill {
    let now = Utc::now();
    Bill {
        id: Uuid::new_v4(),
        patient_id,
        appointment_id,
        description: "Consultation".to_string(),
        amount_cents: 15_000,
        status,
        due_date,
        paid_at: None,
        created_at: now,
        updated_at: now,
    }
}

#[derive(Clone, Default)]
pub struct InMemoryBills {
    rows: Arc<Mutex<Vec<Bill>>>,
    failing: bool,
}

impl InMemoryBills {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(rows: Vec<Bill>) -> Self {
        Self {
            rows: Arc::new(Mutex::new(rows)),
            failing: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            rows: Arc::default(),
            failing: true,
        }
    }

    pub fn get(&self, id: Uuid) -> Option<Bill> {
        self.rows.lock().unwrap().iter().find(|b| b.id == id).cloned()
    }

    pub fn all(&self) -> Vec<Bill> {
        self.rows.lock().unwrap().clone()
    }

    fn check(&self) -> Result<(), String> {
        if self.failing {
            Err("connection lost".to_string())
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl BillQuery for InMemoryBills {
    async fn find_by_id(&self, bill_id: Uuid) -> Result<Option<Bill>, BillQueryError> {
        self.check().map_err(BillQueryError::DatabaseError)?;
        Ok(self.get(bill_id))
    }

    async fn list_for_patient(&self, patient_id: Uuid) -> Result<Vec<Bill>, BillQueryError> {
        self.check().map_err(BillQueryError::DatabaseError)?;
        let mut rows: Vec<_> = self
            .all()
            .into_iter()
            .filter(|b| b.patient_id == patient_id)
            .collect();
        rows.sort_by(|a, b| b.due_date.cmp(&a.due_date));
        Ok(rows)
    }
}

#[async_trait]
impl BillRepository for InMemoryBills {
    async fn insert(&self, data: NewBill) -> Result<Bill, BillRepositoryError> {
        self.check().map_err(BillRepositoryError::DatabaseError)?;
        let mut bill = bill_fixture(
            data.patient_id,
            data.appointment_id,
            BillStatus::Pending,
            data.due_date,
        );
        bill.description = data.description;
        bill.amount_cents = data.amount_cents;
        self.rows.lock().unwrap().push(bill.clone());
        Ok(bill)
    }

    async fn mark_overdue(&self, bill_ids: Vec<Uuid>) -> Result<u64, BillRepositoryError> {
        self.check().map_err(BillRepositoryError::DatabaseError)?;
        let mut changed = 0;
        for bill in self.rows.lock().unwrap().iter_mut() {
            if bill_ids.contains(&bill.id) && bill.status == BillStatus::Pending {
                bill.status = BillStatus::Overdue;
                changed += 1;
            }
        }
        Ok(changed)
    }

    async fn mark_paid(
        &self,
        bill_id: Uuid,
        paid_at: DateTime<Utc>,
    ) -> Result<Bill, BillRepositoryError> {
        self.check().map_err(BillRepositoryError::DatabaseError)?;
        let mut rows = self.rows.lock().unwrap();
        let bill = rows
            .iter_mut()
            .find(|b| b.id == bill_id)
            .ok_or(BillRepositoryError::NotFound)?;
        if bill.status == BillStatus::Paid {
            return Err(BillRepositoryError::AlreadyPaid);
        }
        bill.status = BillStatus::Paid;
        bill.paid_at = Some(paid_at);
        Ok(bill.clone())
    }
}
