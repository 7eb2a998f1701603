use chrono::NaiveDate;

/// A participant profile, keyed by a unique registration code.
#[derive(Debug, Default, PartialEq, Clone)]
pub struct Registration {
    pub id: Option<i32>,
    pub name: String,
    pub email: String,
    pub password: String,
    pub date_of_registration: NaiveDate,
    pub code: String,
}

/// Example-based filter. `None` fields are ignored, set fields match
/// case-insensitively as substrings.
#[derive(Debug, Default, PartialEq, Clone)]
pub struct RegistrationFilter {
    pub name: Option<String>,
    pub email: Option<String>,
    pub code: Option<String>,
}
