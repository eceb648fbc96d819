use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::user::errors::UserError;
use crate::domain::user::model::User;
use crate::domain::user::password;
use crate::domain::user::repository::UserRepository;
use crate::domain::user::use_cases::login::{LoginParams, LoginUseCase};

/// Unknown email and wrong password produce the same error, so the
/// endpoint never confirms which accounts exist.
pub struct LoginUseCaseImpl {
    pub repository: Arc<dyn UserRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl LoginUseCase for LoginUseCaseImpl {
    async fn execute(&self, params: LoginParams) -> Result<User, UserError> {
        let email = params.email.trim().to_lowercase();
        let user = self
            .repository
            .find_by_email(&email)
            .await?
            .ok_or(UserError::InvalidCredentials)?;

        if !password::verify_password(&params.password, &user.password_hash) {
            self.logger
                .warn(&format!("Failed login attempt for {}", email));
            return Err(UserError::InvalidCredentials);
        }
        Ok(user)
    }
}
