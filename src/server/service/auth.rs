//! Email and password authentication.
//!
//! Sign-up creates a `user` account, or an `admin` account when the request carries the
//! bootstrap code logged at startup. Sign-in checks credentials and returns the user to
//! store in the session.

use sea_orm::DatabaseConnection;

use crate::{
    model::user::{SignInDto, SignUpDto},
    server::{
        data::user::UserRepository,
        error::{
            auth::AuthError,
            service::{ConflictRule, ServiceError},
            AppError,
        },
        model::user::{CreateUserParams, Role, User},
        service::admin::code::AdminCodeService,
        util::{
            password::{hash_password, verify_password},
            validate::validate_input,
        },
    },
};

pub const USER_CONFLICTS: &[ConflictRule] = &[ConflictRule::new(
    "user.email",
    "email",
    "An account with this email already exists",
)];

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    admin_codes: &'a AdminCodeService,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection, admin_codes: &'a AdminCodeService) -> Self {
        Self { db, admin_codes }
    }

    /// Creates an account from a sign-up form.
    ///
    /// A supplied admin code is reserved before the account is created, so concurrent
    /// sign-ups cannot both use it. A failed insert hands the code back.
    ///
    /// # Returns
    /// - `Ok(User)` - The created account
    /// - `Err(AppError::Service(Validation))` - Invalid input or wrong admin code
    /// - `Err(AppError::Service(Conflict))` - Email already registered
    pub async fn sign_up(&self, dto: SignUpDto) -> Result<User, AppError> {
        validate_input(&dto, SignUpDto::FIELDS)?;

        let reserved = match dto.admin_code.as_deref() {
            Some(code) => Some(self.admin_codes.reserve(code).await.ok_or_else(|| {
                ServiceError::validation("admin_code", "Admin code is invalid or has expired")
            })?),
            None => None,
        };
        let role = if reserved.is_some() {
            Role::Admin
        } else {
            Role::User
        };

        let created = self.create_account(dto, role).await;
        match (created, reserved) {
            (Ok(user), Some(_)) => {
                tracing::info!("Created admin account {} using the admin code", user.id);
                Ok(user)
            }
            (Ok(user), None) => Ok(user),
            (Err(e), Some(reserved)) => {
                self.admin_codes.restore(reserved).await;
                Err(e)
            }
            (Err(e), None) => Err(e),
        }
    }

    async fn create_account(&self, dto: SignUpDto, role: Role) -> Result<User, AppError> {
        let password_hash = hash_password(&dto.password.unwrap_or_default())?;
        let user = UserRepository::new(self.db)
            .create(CreateUserParams {
                email: dto.email.unwrap_or_default().to_lowercase(),
                name: dto.name.unwrap_or_default(),
                password_hash,
                role,
            })
            .await
            .map_err(|e| ServiceError::classify(e, USER_CONFLICTS))?;

        Ok(user)
    }

    /// Checks an email and password pair.
    ///
    /// Unknown emails and wrong passwords both yield `AuthError::InvalidCredentials`.
    pub async fn sign_in(&self, dto: SignInDto) -> Result<User, AppError> {
        validate_input(&dto, SignInDto::FIELDS)?;

        let email = dto.email.unwrap_or_default();
        let Some((user, hash)) = UserRepository::new(self.db)
            .find_credentials(&email)
            .await?
        else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(&dto.password.unwrap_or_default(), &hash)? {
            return Err(AuthError::InvalidCredentials.into());
        }

        Ok(user)
    }
}
