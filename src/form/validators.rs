use regex::Regex;

pub type ValidationError = String;
pub type Validator = Box<dyn Fn(&str) -> Result<(), ValidationError> + Send + Sync>;

/// Run a list of validators against `value`, returning the first error.
pub fn run_validators(validators: &[Validator], value: &str) -> Result<(), ValidationError> {
    for validator in validators {
        validator(value)?;
    }
    Ok(())
}

pub fn required(message: impl Into<String>) -> Validator {
    let message = message.into();
    Box::new(move |value: &str| {
        if value.trim().is_empty() {
            Err(message.clone())
        } else {
            Ok(())
        }
    })
}

pub fn min_length(min: usize, message: impl Into<String>) -> Validator {
    let message = message.into();
    Box::new(move |value: &str| {
        if value.chars().count() < min {
            Err(message.clone())
        } else {
            Ok(())
        }
    })
}

pub fn email(message: impl Into<String>) -> Validator {
    let message = message.into();
    let re = Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
        .expect("Invalid regex pattern");
    Box::new(move |value: &str| {
        if re.is_match(value) {
            Ok(())
        } else {
            Err(message.clone())
        }
    })
}
