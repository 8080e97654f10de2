//! Job form: the draft `Job`, per-field updates, and the view handed to the
//! page template.

pub mod validation;

use tracing::debug;

use crate::form::validation::{validate_job, ValidationErrors};
use crate::models::job::Job;

const SUBMIT_LABEL: &str = "Find Matching Candidates";
const SUBMIT_LABEL_LOADING: &str = "Matching...";

/// The editable fields of a `Job`, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    CstName,
    Title,
    ClientProblemStatement,
    Industry,
    Location,
    RequiredSkills,
    YearsExperience,
}

impl Field {
    pub const ALL: [Field; 7] = [
        Field::CstName,
        Field::Title,
        Field::ClientProblemStatement,
        Field::Industry,
        Field::Location,
        Field::RequiredSkills,
        Field::YearsExperience,
    ];

    /// Form/wire name, identical to the `Job` JSON key.
    pub fn name(self) -> &'static str {
        match self {
            Field::CstName => "cst_name",
            Field::Title => "title",
            Field::ClientProblemStatement => "client_problem_statement",
            Field::Industry => "industry",
            Field::Location => "location",
            Field::RequiredSkills => "required_skills",
            Field::YearsExperience => "years_experience",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::CstName => "Customer Name",
            Field::Title => "Job Title",
            Field::ClientProblemStatement => "Problem Statement",
            Field::Industry => "Industry",
            Field::Location => "Location",
            Field::RequiredSkills => "Required Skills",
            Field::YearsExperience => "Years of Experience",
        }
    }

    pub fn from_name(name: &str) -> Option<Field> {
        Field::ALL.into_iter().find(|f| f.name() == name)
    }

    fn rows(self) -> Option<u8> {
        match self {
            Field::ClientProblemStatement => Some(4),
            Field::RequiredSkills => Some(3),
            _ => None,
        }
    }

    fn placeholder(self) -> Option<&'static str> {
        match self {
            Field::RequiredSkills => Some("Enter required skills separated by commas"),
            _ => None,
        }
    }
}

/// Coerces raw years input the way a browser number input does:
/// blank is 0, positive fractions truncate, anything else is not a number.
/// Negative input always stays negative (`-0.5` becomes `-1`) so validation
/// still rejects it.
pub fn coerce_years(raw: &str) -> Option<i64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Some(0);
    }

    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() && value < 0.0 => Some(value.floor() as i64),
        Ok(value) if value.is_finite() => Some(value.trunc() as i64),
        _ => None,
    }
}

/// Draft job plus the errors from the last submit attempt.
#[derive(Debug, Clone, Default)]
pub struct JobForm {
    draft: Job,
    /// Raw years input that failed coercion; kept so it can be shown back.
    years_raw: Option<String>,
    errors: ValidationErrors,
}

impl JobForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &Job {
        &self.draft
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// Updates exactly one field of the draft.
    pub fn set_field(&mut self, field: Field, value: &str) {
        let draft = &mut self.draft;
        match field {
            Field::CstName => draft.cst_name = value.to_string(),
            Field::Title => draft.title = value.to_string(),
            Field::ClientProblemStatement => draft.client_problem_statement = value.to_string(),
            Field::Industry => draft.industry = value.to_string(),
            Field::Location => draft.location = value.to_string(),
            Field::RequiredSkills => draft.required_skills = value.to_string(),
            Field::YearsExperience => match coerce_years(value) {
                Some(years) => {
                    draft.years_experience = years;
                    self.years_raw = None;
                }
                None => {
                    draft.years_experience = 0;
                    self.years_raw = Some(value.to_string());
                }
            },
        }
    }

    /// Updates a field by its form name. Unknown names are ignored.
    pub fn set_field_by_name(&mut self, name: &str, value: &str) {
        match Field::from_name(name) {
            Some(field) => self.set_field(field, value),
            None => debug!(field = name, "Ignoring unknown form field"),
        }
    }

    /// Re-validates the draft. Returns the job to submit when there are no
    /// errors; the draft itself is left as-is either way.
    pub fn submit(&mut self) -> Option<Job> {
        self.errors = validate_job(&self.draft, self.years_raw.is_none());
        if self.errors.is_empty() {
            Some(self.draft.clone())
        } else {
            None
        }
    }

    fn value_of(&self, field: Field) -> String {
        let draft = &self.draft;
        match field {
            Field::CstName => draft.cst_name.clone(),
            Field::Title => draft.title.clone(),
            Field::ClientProblemStatement => draft.client_problem_statement.clone(),
            Field::Industry => draft.industry.clone(),
            Field::Location => draft.location.clone(),
            Field::RequiredSkills => draft.required_skills.clone(),
            Field::YearsExperience => self
                .years_raw
                .clone()
                .unwrap_or_else(|| draft.years_experience.to_string()),
        }
    }

    pub fn view(&self, loading: bool) -> FormView {
        let fields = Field::ALL
            .into_iter()
            .map(|field| FieldView {
                name: field.name(),
                label: field.label(),
                value: self.value_of(field),
                error: self.errors.get(field).map(str::to_string),
                rows: field.rows(),
                placeholder: field.placeholder(),
                numeric: field == Field::YearsExperience,
            })
            .collect();

        FormView {
            fields,
            disabled: loading,
            submit_label: if loading {
                SUBMIT_LABEL_LOADING
            } else {
                SUBMIT_LABEL
            },
        }
    }
}

/// Template-facing snapshot of the form.
#[derive(Debug, Clone)]
pub struct FormView {
    pub fields: Vec<FieldView>,
    pub disabled: bool,
    pub submit_label: &'static str,
}

#[derive(Debug, Clone)]
pub struct FieldView {
    pub name: &'static str,
    pub label: &'static str,
    pub value: String,
    pub error: Option<String>,
    /// Set for multiline inputs.
    pub rows: Option<u8>,
    pub placeholder: Option<&'static str>,
    /// Number input with `min=0` and a "years" suffix.
    pub numeric: bool,
}

#[cfg(test)]
mod tests {
    use super::validation::{CST_NAME_REQUIRED, YEARS_NOT_A_NUMBER, YEARS_NOT_POSITIVE};
    use super::*;

    fn filled_form() -> JobForm {
        let mut form = JobForm::new();
        form.set_field(Field::CstName, "Acme");
        form.set_field(Field::ClientProblemStatement, "need a backend engineer");
        form.set_field(Field::Title, "Backend Engineer");
        form.set_field(Field::YearsExperience, "3");
        form
    }

    #[test]
    fn test_new_form_has_blank_draft() {
        let form = JobForm::new();
        assert_eq!(form.draft(), &Job::default());
        assert!(form.errors().is_empty());
    }

    #[test]
    fn test_set_field_updates_only_that_field() {
        let mut form = JobForm::new();
        form.set_field(Field::Industry, "Tech");

        let expected = Job {
            industry: "Tech".to_string(),
            ..Job::default()
        };
        assert_eq!(form.draft(), &expected);
    }

    #[test]
    fn test_text_fields_are_not_coerced() {
        let mut form = JobForm::new();
        form.set_field(Field::RequiredSkills, "Rust, Tokio, 5");
        assert_eq!(form.draft().required_skills, "Rust, Tokio, 5");
    }

    #[test]
    fn test_coerce_years() {
        assert_eq!(coerce_years(""), Some(0));
        assert_eq!(coerce_years("  "), Some(0));
        assert_eq!(coerce_years("3"), Some(3));
        assert_eq!(coerce_years(" 12 "), Some(12));
        assert_eq!(coerce_years("2.9"), Some(2));
        assert_eq!(coerce_years("-1"), Some(-1));
        assert_eq!(coerce_years("-0.5"), Some(-1));
        assert_eq!(coerce_years("-0.9"), Some(-1));
        assert_eq!(coerce_years("-2.5"), Some(-3));
        assert_eq!(coerce_years("abc"), None);
        assert_eq!(coerce_years("inf"), None);
    }

    #[test]
    fn test_set_field_by_name() {
        let mut form = JobForm::new();
        form.set_field_by_name("client_problem_statement", "Scale the pipeline");
        form.set_field_by_name("years_experience", "7");
        form.set_field_by_name("not_a_field", "ignored");

        assert_eq!(form.draft().client_problem_statement, "Scale the pipeline");
        assert_eq!(form.draft().years_experience, 7);
    }

    #[test]
    fn test_submit_valid_returns_draft_and_keeps_it() {
        let mut form = filled_form();

        let job = form.submit().expect("valid form submits");

        assert_eq!(job.cst_name, "Acme");
        assert_eq!(job.years_experience, 3);
        assert_eq!(form.draft(), &job);
        assert!(form.errors().is_empty());
    }

    #[test]
    fn test_submit_invalid_is_suppressed_with_errors() {
        let mut form = filled_form();
        form.set_field(Field::CstName, "   ");

        assert!(form.submit().is_none());
        assert_eq!(form.errors().get(Field::CstName), Some(CST_NAME_REQUIRED));
    }

    #[test]
    fn test_negative_fraction_years_blocks_submit() {
        for raw in ["-0.5", "-0.9", "-0.01"] {
            let mut form = filled_form();
            form.set_field(Field::YearsExperience, raw);

            assert!(form.submit().is_none(), "input {raw:?}");
            assert_eq!(
                form.errors().get(Field::YearsExperience),
                Some(YEARS_NOT_POSITIVE)
            );
        }
    }

    #[test]
    fn test_errors_recomputed_on_each_submit() {
        let mut form = filled_form();
        form.set_field(Field::YearsExperience, "-2");
        assert!(form.submit().is_none());
        assert_eq!(
            form.errors().get(Field::YearsExperience),
            Some(YEARS_NOT_POSITIVE)
        );

        form.set_field(Field::YearsExperience, "2");
        assert!(form.submit().is_some());
        assert!(form.errors().is_empty());
    }

    #[test]
    fn test_non_numeric_years_is_shown_back_with_error() {
        let mut form = filled_form();
        form.set_field(Field::YearsExperience, "lots");

        assert!(form.submit().is_none());
        assert_eq!(
            form.errors().get(Field::YearsExperience),
            Some(YEARS_NOT_A_NUMBER)
        );

        let view = form.view(false);
        let years = view
            .fields
            .iter()
            .find(|f| f.name == "years_experience")
            .unwrap();
        assert_eq!(years.value, "lots");
        assert_eq!(years.error.as_deref(), Some(YEARS_NOT_A_NUMBER));
    }

    #[test]
    fn test_view_lists_fields_in_order_with_input_kinds() {
        let view = JobForm::new().view(false);

        let names: Vec<&str> = view.fields.iter().map(|f| f.name).collect();
        assert_eq!(
            names,
            vec![
                "cst_name",
                "title",
                "client_problem_statement",
                "industry",
                "location",
                "required_skills",
                "years_experience",
            ]
        );
        assert_eq!(view.fields[2].rows, Some(4));
        assert_eq!(view.fields[5].rows, Some(3));
        assert!(view.fields[5].placeholder.is_some());
        assert!(view.fields[6].numeric);
        assert_eq!(view.fields[6].value, "0");
        assert!(!view.disabled);
        assert_eq!(view.submit_label, "Find Matching Candidates");
    }

    #[test]
    fn test_view_while_loading_is_disabled() {
        let view = filled_form().view(true);
        assert!(view.disabled);
        assert_eq!(view.submit_label, "Matching...");
    }
}
