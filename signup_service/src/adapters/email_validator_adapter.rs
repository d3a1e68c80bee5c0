use presentation::protocols::EmailValidator;
use validator::validate_email;

pub struct EmailValidatorAdapter;

impl EmailValidator for EmailValidatorAdapter {
    fn is_valid(&self, email: &str) -> anyhow::Result<bool> {
        Ok(validate_email(email))
    }
}
