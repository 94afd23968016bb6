pub mod patient_signup;
