use serde::{Deserialize, Serialize};

/// A job requisition as submitted to the matching service.
///
/// `required_skills` is free text (comma separated by convention) and is
/// forwarded verbatim; nothing here parses it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub cst_name: String,
    pub client_problem_statement: String,
    pub title: String,
    pub location: String,
    pub industry: String,
    pub required_skills: String,
    pub years_experience: i64,
}

/// Request body for `POST /match`.
#[derive(Debug, Serialize)]
pub struct MatchRequest<'a> {
    pub job: &'a Job,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_job_is_blank() {
        let job = Job::default();
        assert!(job.cst_name.is_empty());
        assert!(job.title.is_empty());
        assert_eq!(job.years_experience, 0);
    }

    #[test]
    fn test_match_request_wraps_job() {
        let job = Job {
            cst_name: "Acme".to_string(),
            client_problem_statement: "need a backend engineer".to_string(),
            title: "Backend Engineer".to_string(),
            years_experience: 3,
            ..Job::default()
        };

        let body = serde_json::to_value(MatchRequest { job: &job }).unwrap();

        assert_eq!(
            body,
            json!({
                "job": {
                    "cst_name": "Acme",
                    "client_problem_statement": "need a backend engineer",
                    "title": "Backend Engineer",
                    "location": "",
                    "industry": "",
                    "required_skills": "",
                    "years_experience": 3
                }
            })
        );
    }
}
