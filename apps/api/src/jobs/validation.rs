use serde::Deserialize;

use crate::errors::AppError;
use crate::models::job::{JobFields, JobStatus};

/// Raw create/update body. Every field is optional here so that a missing
/// field is reported as a validation failure instead of an extractor rejection.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobInput {
    pub job_title: Option<String>,
    pub company_name: Option<String>,
    pub application_link: Option<String>,
    pub status: Option<String>,
}

/// Checks that all four mutable fields are present and non-blank, and that
/// `status` names a known state.
pub fn validate_job_input(input: JobInput) -> Result<JobFields, AppError> {
    let (Some(job_title), Some(company_name), Some(application_link), Some(status)) = (
        present(input.job_title),
        present(input.company_name),
        present(input.application_link),
        present(input.status),
    ) else {
        return Err(AppError::Validation("Missing required fields".to_string()));
    };

    let status = status.parse::<JobStatus>().map_err(AppError::Validation)?;

    Ok(JobFields {
        job_title,
        company_name,
        application_link,
        status,
    })
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_input() -> JobInput {
        JobInput {
            job_title: Some("Engineer".to_string()),
            company_name: Some("Acme".to_string()),
            application_link: Some("https://acme.example/job/1".to_string()),
            status: Some("Applied".to_string()),
        }
    }

    #[test]
    fn test_complete_input_passes() {
        let fields = validate_job_input(full_input()).unwrap();
        assert_eq!(fields.job_title, "Engineer");
        assert_eq!(fields.status, JobStatus::Applied);
    }

    #[test]
    fn test_missing_field_fails() {
        let input = JobInput {
            company_name: None,
            ..full_input()
        };
        let err = validate_job_input(input).unwrap_err();
        assert!(matches!(err, AppError::Validation(msg) if msg == "Missing required fields"));
    }

    #[test]
    fn test_blank_field_fails() {
        let input = JobInput {
            job_title: Some("   ".to_string()),
            ..full_input()
        };
        assert!(matches!(
            validate_job_input(input),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_unknown_status_fails() {
        let input = JobInput {
            status: Some("Ghosted".to_string()),
            ..full_input()
        };
        let err = validate_job_input(input).unwrap_err();
        assert!(matches!(err, AppError::Validation(msg) if msg.contains("Ghosted")));
    }

    #[test]
    fn test_deserializes_camel_case_body() {
        let input: JobInput = serde_json::from_str(
            r#"{"jobTitle": "Engineer", "companyName": "Acme", "applicationLink": "https://acme.example", "status": "Offer"}"#,
        )
        .unwrap();
        let fields = validate_job_input(input).unwrap();
        assert_eq!(fields.status, JobStatus::Offer);
        assert_eq!(fields.application_link, "https://acme.example");
    }
}
