//! Admin code service for managing temporary verification codes.
//!
//! This module provides the `AdminCodeService` for generating and validating one-time-use
//! admin verification codes. A code is logged at startup when no admin account exists and
//! grants the admin role to the sign-up that supplies it. Codes live in memory for ten
//! minutes and are invalidated after use or expiration.

use rand::Rng;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

/// Time-to-live for admin codes in seconds.
pub const ADMIN_CODE_TTL_SECONDS: u64 = 600;

/// Stored admin code with expiration timestamp.
///
/// Represents a temporary admin verification code that expires after a fixed duration.
/// Used internally by AdminCodeService to track code validity and expiration state.
#[derive(Clone)]
struct AdminCode {
    /// The verification code string.
    code: String,
    /// Timestamp when this code expires.
    expires_at: Instant,
}

impl AdminCode {
    /// Creates a new admin code expiring after `ttl`.
    ///
    /// # Arguments
    /// - `code` - The verification code string
    /// - `ttl` - How long the code stays valid
    fn new(code: String, ttl: Duration) -> Self {
        Self {
            code,
            expires_at: Instant::now() + ttl,
        }
    }

    /// Checks if the admin code has expired.
    ///
    /// Compares the current time against the expiration timestamp.
    ///
    /// # Returns
    /// - `true` - Code has expired
    /// - `false` - Code is still valid
    fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }

    /// Checks if the provided input matches this admin code.
    ///
    /// Performs an exact string comparison between the stored code and input.
    ///
    /// # Arguments
    /// - `input` - The code string to compare against
    ///
    /// # Returns
    /// - `true` - Input matches the stored code
    /// - `false` - Input does not match
    fn matches(&self, input: &str) -> bool {
        self.code == input
    }
}

/// Service for managing temporary admin codes used for initial admin user setup.
///
/// The admin code is generated once on server startup if no admin user exists, stored in
/// memory, and invalidated after successful use or expiration. Clones share the same code.
#[derive(Clone)]
pub struct AdminCodeService {
    /// The currently active admin code, if any.
    code: Arc<RwLock<Option<AdminCode>>>,
    ttl: Duration,
}

/// An admin code taken out of `AdminCodeService` by a successful `reserve`.
///
/// Dropping it consumes the code for good.
pub struct ReservedAdminCode(AdminCode);

impl AdminCodeService {
    /// Creates a new AdminCodeService instance.
    ///
    /// Initializes the service with no active admin code. Codes must be explicitly
    /// generated via the `generate` method.
    ///
    /// # Returns
    /// - `AdminCodeService` - New service instance with no active code
    pub fn new() -> Self {
        Self::with_ttl(Duration::from_secs(ADMIN_CODE_TTL_SECONDS))
    }

    /// Creates a service whose codes expire after `ttl`.
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            code: Arc::new(RwLock::new(None)),
            ttl,
        }
    }

    /// Generates a new random admin code and stores it.
    ///
    /// Creates a cryptographically secure random 32-character alphanumeric string
    /// and stores it in memory. Any previously generated code is replaced. The code
    /// can be reserved once using `reserve`.
    ///
    /// # Returns
    /// - `String` - The generated 32-character admin verification code
    pub async fn generate(&self) -> String {
        let code_string = Self::generate_random_code();
        let admin_code = AdminCode::new(code_string.clone(), self.ttl);
        *self.code.write().await = Some(admin_code);
        code_string
    }

    /// Checks the provided code without consuming it.
    ///
    /// # Returns
    /// - `true` - Code matches and has not expired
    /// - `false` - Code doesn't match, is expired, or no code exists
    #[cfg(test)]
    pub async fn matches(&self, input_code: &str) -> bool {
        let code = self.code.read().await;

        code.as_ref()
            .is_some_and(|stored| !stored.is_expired() && stored.matches(input_code))
    }

    /// Takes the stored code out of the service if `input_code` matches it.
    ///
    /// The check and the removal happen under one write lock, so of several concurrent
    /// callers with the same code only one gets a reservation. Expired codes are dropped
    /// and fail. Hand the reservation back with `restore` if the guarded work fails.
    ///
    /// # Arguments
    /// - `input_code` - The code string to validate
    ///
    /// # Returns
    /// - `Some(ReservedAdminCode)` - Code matched and is no longer usable by anyone else
    /// - `None` - Code doesn't match, is expired, or no code exists
    pub async fn reserve(&self, input_code: &str) -> Option<ReservedAdminCode> {
        let mut code = self.code.write().await;

        let stored = code.as_ref()?;
        if stored.is_expired() {
            *code = None;
            return None;
        }
        if !stored.matches(input_code) {
            return None;
        }

        code.take().map(ReservedAdminCode)
    }

    /// Puts a reserved code back so it can be used again.
    ///
    /// Ignored when a newer code has been generated meanwhile or the reserved code has
    /// expired.
    pub async fn restore(&self, reserved: ReservedAdminCode) {
        let mut code = self.code.write().await;

        if code.is_none() && !reserved.0.is_expired() {
            *code = Some(reserved.0);
        }
    }

    /// Generates a cryptographically secure random alphanumeric code.
    ///
    /// Creates a 32-character string using uppercase letters, lowercase letters,
    /// and digits (0-9). Uses the system's random number generator for security.
    ///
    /// # Returns
    /// - `String` - A 32-character random alphanumeric string
    fn generate_random_code() -> String {
        const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ\
                                 abcdefghijklmnopqrstuvwxyz\
                                 0123456789";
        const CODE_LENGTH: usize = 32;

        let mut rng = rand::rng();

        (0..CODE_LENGTH)
            .map(|_| {
                let idx = rng.random_range(0..CHARSET.len());
                CHARSET[idx] as char
            })
            .collect()
    }

    /// Checks if an admin code currently exists and is valid (not expired).
    ///
    /// Verifies that a code is stored and has not expired. Automatically cleans up
    /// expired codes by invalidating them. Used in tests to verify code state.
    ///
    /// # Returns
    /// - `true` - A valid, non-expired code is stored
    /// - `false` - No code exists or the stored code has expired
    #[cfg(test)]
    pub async fn has_valid_code(&self) -> bool {
        let mut code = self.code.write().await;

        if let Some(stored_code) = code.as_ref() {
            if stored_code.is_expired() {
                // Clean up expired code
                *code = None;
                return false;
            }
            return true;
        }

        false
    }

    /// Invalidates the current admin code if one exists.
    ///
    /// Removes the stored admin code, preventing it from being validated.
    /// Used in tests to reset the service state between test cases.
    #[cfg(test)]
    pub async fn invalidate(&self) {
        *self.code.write().await = None;
    }
}

impl Default for AdminCodeService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::sleep;

    /// Tests generating a new admin code.
    ///
    /// Verifies that generating a code creates a 32-character string and stores
    /// it as a valid code in the service.
    ///
    /// Expected: Ok with 32-character code and valid code state
    #[tokio::test]
    async fn test_generate_code() {
        let service = AdminCodeService::new();
        assert!(!service.has_valid_code().await);

        let code = service.generate().await;
        assert_eq!(code.len(), 32);
        assert!(service.has_valid_code().await);
    }

    /// Tests validating a correct admin code.
    ///
    /// Verifies that validating with the correct code returns true and automatically
    /// consumes the code, preventing reuse.
    ///
    /// Expected: Ok with successful validation and consumed code
    #[tokio::test]
    async fn test_validate_correct_code() {
        let service = AdminCodeService::new();
        let code = service.generate().await;

        assert!(service.reserve(&code).await.is_some());
        // Code should be consumed after validation
        assert!(!service.has_valid_code().await);
    }

    /// Tests validating an incorrect admin code.
    ///
    /// Verifies that validating with an incorrect code returns false and preserves
    /// the stored code for future validation attempts.
    ///
    /// Expected: Ok with failed validation and code still valid
    #[tokio::test]
    async fn test_validate_incorrect_code() {
        let service = AdminCodeService::new();
        service.generate().await;

        assert!(!service.reserve("wrong_code").await.is_some());
        // Code should still exist after failed validation
        assert!(service.has_valid_code().await);
    }

    /// Tests validating when no code exists.
    ///
    /// Verifies that validation fails gracefully when no code has been generated.
    ///
    /// Expected: Ok with failed validation
    #[tokio::test]
    async fn test_validate_without_code() {
        let service = AdminCodeService::new();
        assert!(!service.reserve("any_code").await.is_some());
    }

    /// Tests manual code invalidation.
    ///
    /// Verifies that calling invalidate removes the stored code.
    ///
    /// Expected: Ok with code removed
    #[tokio::test]
    async fn test_invalidate_code() {
        let service = AdminCodeService::new();
        service.generate().await;
        assert!(service.has_valid_code().await);

        service.invalidate().await;
        assert!(!service.has_valid_code().await);
    }

    /// Tests that admin codes cannot be reused.
    ///
    /// Verifies that after successful validation, the same code cannot be used again.
    ///
    /// Expected: Ok with first validation succeeding and second failing
    #[tokio::test]
    async fn test_code_cannot_be_reused() {
        let service = AdminCodeService::new();
        let code = service.generate().await;

        assert!(service.reserve(&code).await.is_some());
        // Trying to use the same code again should fail
        assert!(!service.reserve(&code).await.is_some());
    }

    /// Tests that matching does not consume the code.
    ///
    /// Expected: matches twice, then reserve succeeds once
    #[tokio::test]
    async fn test_matches_does_not_consume() {
        let service = AdminCodeService::new();
        let code = service.generate().await;

        assert!(service.matches(&code).await);
        assert!(service.matches(&code).await);
        assert!(!service.matches("wrong_code").await);
        assert!(service.reserve(&code).await.is_some());
        assert!(!service.matches(&code).await);
    }

    /// Tests that a restored reservation makes the code usable again.
    ///
    /// Expected: reserve succeeds, a second reserve fails, after restore it succeeds
    #[tokio::test]
    async fn test_restore_returns_code() {
        let service = AdminCodeService::new();
        let code = service.generate().await;

        let reserved = service.reserve(&code).await.unwrap();
        assert!(service.reserve(&code).await.is_none());

        service.restore(reserved).await;
        assert!(service.matches(&code).await);
        assert!(service.reserve(&code).await.is_some());
    }

    /// Tests that restoring does not overwrite a newer code.
    ///
    /// Expected: the regenerated code stays, the restored one is dropped
    #[tokio::test]
    async fn test_restore_keeps_newer_code() {
        let service = AdminCodeService::new();
        let old = service.generate().await;
        let reserved = service.reserve(&old).await.unwrap();
        let new = service.generate().await;

        service.restore(reserved).await;

        assert!(service.matches(&new).await);
        assert!(!service.matches(&old).await);
    }

    /// Tests that admin codes expire after TTL.
    ///
    /// Verifies that codes become invalid after the TTL and are automatically
    /// cleaned up when checked or validated.
    ///
    /// Expected: Ok with code valid initially and expired after TTL
    #[tokio::test]
    async fn test_code_expires_after_ttl() {
        let service = AdminCodeService::with_ttl(Duration::from_millis(50));
        let code = service.generate().await;

        // Code should be valid initially
        assert!(service.has_valid_code().await);

        sleep(Duration::from_millis(80)).await;

        // Code should be expired and automatically invalidated
        assert!(!service.has_valid_code().await);
        assert!(!service.reserve(&code).await.is_some());
    }

    /// Tests that expired code validation fails.
    ///
    /// Verifies that attempting to validate an expired code returns false.
    ///
    /// Expected: Ok with validation failing for expired code
    #[tokio::test]
    async fn test_expired_code_validation_fails() {
        let service = AdminCodeService::with_ttl(Duration::from_millis(50));
        let code = service.generate().await;

        sleep(Duration::from_millis(80)).await;

        assert!(!service.matches(&code).await);

        // Expired code should fail validation
        assert!(!service.reserve(&code).await.is_some());
    }
}
