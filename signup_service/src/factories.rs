use crate::adapters::{BcryptAdapter, EmailValidatorAdapter};
use crate::settings::Settings;
use presentation::controllers::signup::SignupController;
use presentation::decorators::log::LogControllerDecorator;
use std::sync::Arc;
use use_cases::add_account::{AddAccountRepository, DbAddAccount};

pub fn make_signup_controller(
    settings: &Settings,
    repository: Arc<dyn AddAccountRepository>,
) -> LogControllerDecorator<SignupController> {
    let hasher = Arc::new(BcryptAdapter::new(settings.hashing.cost));
    let add_account = Arc::new(DbAddAccount::new(hasher, repository));
    let signup_controller = SignupController::new(Arc::new(EmailValidatorAdapter), add_account);

    LogControllerDecorator::new(signup_controller)
}
