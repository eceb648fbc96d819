use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::user::errors::UserError;
use crate::domain::user::model::User;
use crate::domain::user::password;
use crate::domain::user::repository::UserRepository;
use crate::domain::user::use_cases::register::{RegisterUserParams, RegisterUserUseCase};

const MIN_PASSWORD_LEN: usize = 8;

pub struct RegisterUserUseCaseImpl {
    pub repository: Arc<dyn UserRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RegisterUserUseCase for RegisterUserUseCaseImpl {
    async fn execute(&self, params: RegisterUserParams) -> Result<User, UserError> {
        if params.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(UserError::PasswordTooShort);
        }

        let email = params.email.trim().to_lowercase();
        if self.repository.find_by_email(&email).await?.is_some() {
            return Err(UserError::EmailTaken);
        }

        let user = User::new(email, password::hash_password(&params.password))?;
        self.repository.save(&user).await?;

        self.logger
            .info(&format!("Account registered: {}", user.id));
        Ok(user)
    }
}
