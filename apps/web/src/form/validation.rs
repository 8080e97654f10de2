use std::collections::BTreeMap;

use crate::form::Field;
use crate::models::job::Job;

pub const CST_NAME_REQUIRED: &str = "Customer name is required";
pub const PROBLEM_STATEMENT_REQUIRED: &str = "Problem statement is required";
pub const TITLE_REQUIRED: &str = "Job title is required";
pub const YEARS_NOT_POSITIVE: &str = "Years of experience must be positive";
pub const YEARS_NOT_A_NUMBER: &str = "Years of experience must be a number";

/// Field-level error messages, keyed and ordered by field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationErrors(BTreeMap<Field, String>);

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    fn insert(&mut self, field: Field, message: &str) {
        self.0.insert(field, message.to_string());
    }
}

/// Validates a draft job.
///
/// Required (non-blank after trim): `cst_name`, `client_problem_statement`,
/// `title`. `years_experience` must be >= 0. `years_is_number` is false when
/// the raw input could not be coerced to a number.
pub fn validate_job(job: &Job, years_is_number: bool) -> ValidationErrors {
    let mut errors = ValidationErrors::default();

    if job.cst_name.trim().is_empty() {
        errors.insert(Field::CstName, CST_NAME_REQUIRED);
    }

    if job.client_problem_statement.trim().is_empty() {
        errors.insert(Field::ClientProblemStatement, PROBLEM_STATEMENT_REQUIRED);
    }

    if job.title.trim().is_empty() {
        errors.insert(Field::Title, TITLE_REQUIRED);
    }

    if !years_is_number {
        errors.insert(Field::YearsExperience, YEARS_NOT_A_NUMBER);
    } else if job.years_experience < 0 {
        errors.insert(Field::YearsExperience, YEARS_NOT_POSITIVE);
    }

    errors
}
