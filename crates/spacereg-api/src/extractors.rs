//! # Request Extraction & Validation
//!
//! Serde rejections become 400s. Values that parse but break a range rule
//! become 422s naming the field, via [`spacereg_engine::Validate`].

use axum::extract::rejection::JsonRejection;
use axum::Json;

use spacereg_engine::Validate;

use crate::error::AppError;

/// Unwrap a JSON body, turning a rejection into [`AppError::MalformedBody`].
pub fn extract_json<T>(result: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    result
        .map(|Json(v)| v)
        .map_err(|err| AppError::MalformedBody(err.body_text()))
}

/// [`extract_json`], then [`Validate::validate`].
pub fn extract_validated_json<T: Validate>(
    result: Result<Json<T>, JsonRejection>,
) -> Result<T, AppError> {
    let value = extract_json(result)?;
    value.validate()?;
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use spacereg_engine::{AssessmentAnswers, GuidelineAssessmentInput};

    #[test]
    fn valid_body_passes_through() {
        let answers = AssessmentAnswers {
            selected_jurisdictions: vec!["FR".into()],
            ..AssessmentAnswers::default()
        };
        let extracted = extract_validated_json(Ok(Json(answers.clone()))).unwrap();
        assert_eq!(extracted, answers);
    }

    #[test]
    fn out_of_range_profile_is_invalid_field() {
        let mut input = GuidelineAssessmentInput::default();
        input.profile.inclination_deg = Some(200.0);
        match extract_validated_json(Ok(Json(input))) {
            Err(AppError::InvalidField(e)) => assert_eq!(e.field, "profile.inclinationDeg"),
            other => panic!("expected InvalidField, got: {other:?}"),
        }
    }
}
