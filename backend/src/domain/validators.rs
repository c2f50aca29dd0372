//! Field-level checks run before a client is written.
//!
//! A validator is any `Fn(&T) -> Result<(), ValidationError>` or a type
//! implementing [`Validator`]. Validators run in order and the first failure
//! stops the rest.

use thiserror::Error;

use super::models::Client;

pub const MIN_AGE: i32 = 7;
pub const MAX_AGE: i32 = 30;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Email address cannot be empty.")]
    EmptyEmail,

    #[error("The Client Age limit is not respected! Age must be between {min} and {max}.")]
    AgeOutOfRange { age: i32, min: i32, max: i32 },

    #[error("{0}")]
    Rejected(String),
}

pub trait Validator<T>: Send + Sync {
    fn validate(&self, entity: &T) -> Result<(), ValidationError>;
}

impl<T, F> Validator<T> for F
where
    F: Fn(&T) -> Result<(), ValidationError> + Send + Sync,
{
    fn validate(&self, entity: &T) -> Result<(), ValidationError> {
        self(entity)
    }
}

/// Rejects an empty email. Format is not checked.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmailValidator;

impl Validator<Client> for EmailValidator {
    fn validate(&self, client: &Client) -> Result<(), ValidationError> {
        if client.email.is_empty() {
            return Err(ValidationError::EmptyEmail);
        }
        Ok(())
    }
}

/// Accepts ages in `min_age..=max_age`
#[derive(Debug, Clone, Copy)]
pub struct ClientAgeValidator {
    min_age: i32,
    max_age: i32,
}

impl ClientAgeValidator {
    pub fn new(min_age: i32, max_age: i32) -> Self {
        Self { min_age, max_age }
    }
}

impl Default for ClientAgeValidator {
    fn default() -> Self {
        Self::new(MIN_AGE, MAX_AGE)
    }
}

impl Validator<Client> for ClientAgeValidator {
    fn validate(&self, client: &Client) -> Result<(), ValidationError> {
        if client.age < self.min_age || client.age > self.max_age {
            return Err(ValidationError::AgeOutOfRange {
                age: client.age,
                min: self.min_age,
                max: self.max_age,
            });
        }
        Ok(())
    }
}

/// The email check followed by the age check over `min_age..=max_age`
pub fn client_validators(min_age: i32, max_age: i32) -> Vec<Box<dyn Validator<Client>>> {
    vec![
        Box::new(EmailValidator),
        Box::new(ClientAgeValidator::new(min_age, max_age)),
    ]
}

/// Runs `validators` in order, stopping at the first failure
pub fn validate_all<T>(validators: &[Box<dyn Validator<T>>], entity: &T) -> Result<(), ValidationError> {
    validators.iter().try_for_each(|v| v.validate(entity))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client_aged(age: i32) -> Client {
        Client::new("Ana", "ana@example.com", "0712345678", "Str. Lunga 1", age)
    }

    #[test]
    fn test_age_bounds_are_inclusive() {
        let validator = ClientAgeValidator::default();
        assert!(validator.validate(&client_aged(7)).is_ok());
        assert!(validator.validate(&client_aged(30)).is_ok());
        assert_eq!(
            validator.validate(&client_aged(6)),
            Err(ValidationError::AgeOutOfRange { age: 6, min: 7, max: 30 })
        );
        assert!(validator.validate(&client_aged(31)).is_err());
    }

    #[test]
    fn test_empty_email_is_rejected() {
        let mut client = client_aged(20);
        client.email.clear();
        assert_eq!(EmailValidator.validate(&client), Err(ValidationError::EmptyEmail));
    }

    #[test]
    fn test_email_format_is_not_checked() {
        let mut client = client_aged(20);
        client.email = "not-an-email".to_string();
        assert!(EmailValidator.validate(&client).is_ok());
    }

    #[test]
    fn test_first_failure_short_circuits() {
        let mut client = client_aged(99);
        client.email.clear();

        let err = validate_all(&client_validators(MIN_AGE, MAX_AGE), &client).unwrap_err();
        assert_eq!(err, ValidationError::EmptyEmail);
    }

    #[test]
    fn test_closures_are_validators() {
        let mut validators = client_validators(MIN_AGE, MAX_AGE);
        validators.push(Box::new(|c: &Client| {
            if c.phone.is_empty() {
                Err(ValidationError::Rejected("Phone number cannot be empty.".to_string()))
            } else {
                Ok(())
            }
        }));

        let mut client = client_aged(20);
        assert!(validate_all(&validators, &client).is_ok());

        client.phone.clear();
        assert_eq!(
            validate_all(&validators, &client).unwrap_err().to_string(),
            "Phone number cannot be empty."
        );
    }

    #[test]
    fn test_age_message() {
        let err = ClientAgeValidator::default().validate(&client_aged(31)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "The Client Age limit is not respected! Age must be between 7 and 30."
        );
    }
}
