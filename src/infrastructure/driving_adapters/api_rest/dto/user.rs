//! User DTOs
//!
//! Data transfer objects for user API endpoints.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::{Validate, ValidationError};

use crate::domain::models::user::{CreateUserData, UpdateUserData, User};
use crate::shared::errors::{FieldError, UseCaseError};

const NAME_MIN_LENGTH: usize = 2;

fn validation_error(code: &'static str, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(message.into());
    error
}

fn body_error(message: impl Into<String>) -> UseCaseError {
    UseCaseError::Validation(vec![FieldError::new("body", message)])
}

/// Reads a number without a fractional part, so `30.0` counts as `30`
fn whole_number(value: &Value) -> Option<f64> {
    value.as_f64().filter(|n| n.fract() == 0.0)
}

/// Reads an age that fits the stored integer column
#[allow(clippy::cast_possible_truncation)]
fn age_from_value(value: &Value) -> Option<i32> {
    value.as_i64().and_then(|n| i32::try_from(n).ok()).or_else(|| {
        whole_number(value)
            .filter(|n| (f64::from(i32::MIN)..=f64::from(i32::MAX)).contains(n))
            .map(|n| n as i32)
    })
}

/// Validates that a name is a string of at least two characters
fn validate_name(value: &Value) -> Result<(), ValidationError> {
    let Some(name) = value.as_str() else {
        return Err(validation_error("type", "Name must be a string"));
    };
    if name.chars().count() < NAME_MIN_LENGTH {
        return Err(validation_error("length", "Name must be at least 2 characters long"));
    }
    Ok(())
}

/// Validates that an age is a whole number
fn validate_age(value: &Value) -> Result<(), ValidationError> {
    if !value.is_number() {
        return Err(validation_error("type", "Age must be a number"));
    }
    if whole_number(value).is_none() {
        return Err(validation_error("integer", "Age must be an integer"));
    }
    if age_from_value(value).is_none() {
        return Err(validation_error("range", "Age is out of range"));
    }
    Ok(())
}

/// DTO for creating a new user
///
/// Fields are kept as raw JSON so a wrong type is reported per field instead
/// of failing deserialization of the whole body.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateUserDto {
    #[validate(required(message = "Name is required"))]
    #[validate(custom(function = "validate_name"))]
    pub name: Option<Value>,

    #[validate(required(message = "Age is required"))]
    #[validate(custom(function = "validate_age"))]
    pub age: Option<Value>,
}

impl CreateUserDto {
    /// Reads a create payload from a raw JSON body
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Validation` on field `body` unless the body is a JSON object.
    pub fn from_body(body: Value) -> Result<Self, UseCaseError> {
        if !body.is_object() {
            return Err(body_error("Request body must be a JSON object"));
        }
        serde_json::from_value(body).map_err(|e| body_error(e.to_string()))
    }
}

impl TryFrom<CreateUserDto> for CreateUserData {
    type Error = UseCaseError;

    fn try_from(dto: CreateUserDto) -> Result<Self, Self::Error> {
        let name = dto.name.as_ref().and_then(Value::as_str);
        let age = dto.age.as_ref().and_then(age_from_value);

        match (name, age) {
            (Some(name), Some(age)) => Ok(Self {
                name: name.to_string(),
                age,
            }),
            _ => Err(dto
                .validate()
                .map_or_else(UseCaseError::from, |()| body_error("Invalid user payload"))),
        }
    }
}

/// DTO for updating a user (PUT). Only provided fields are changed; no
/// constraint is checked beyond the JSON types.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateUserDto {
    pub name: Option<String>,
    pub age: Option<i32>,
}

impl From<UpdateUserDto> for UpdateUserData {
    fn from(dto: UpdateUserDto) -> Self {
        Self {
            name: dto.name,
            age: dto.age,
        }
    }
}

/// User response DTO
#[derive(Debug, Clone, Serialize)]
pub struct UserResponseDto {
    pub id: String,
    pub name: String,
    pub age: i32,
}

impl From<User> for UserResponseDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id().to_string(),
            name: user.name().to_string(),
            age: user.age(),
        }
    }
}
