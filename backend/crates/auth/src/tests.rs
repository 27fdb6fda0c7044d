//! Use case tests against the in-memory store

#[cfg(test)]
mod flow_tests {
    use std::sync::Arc;

    use chrono::Utc;

    use crate::application::{
        CheckSessionUseCase, LookupUserUseCase, SignInInput, SignInUseCase, SignOutUseCase,
        SignUpInput, SignUpUseCase,
    };
    use crate::domain::entity::credential::Credential;
    use crate::domain::repository::{AuthSessionRepository, UserRepository};
    use crate::domain::value_object::{client_info::ClientInfo, session_token::SessionToken};
    use crate::{AuthConfig, AuthError, MemoryAuthRepository};

    const PASSWORD: &str = "MySecure#Pass2024";

    struct Harness {
        store: Arc<MemoryAuthRepository>,
        config: Arc<AuthConfig>,
    }

    impl Harness {
        fn new() -> Self {
            Self {
                store: Arc::new(MemoryAuthRepository::new()),
                config: Arc::new(AuthConfig::with_random_secret()),
            }
        }

        fn sign_up(&self) -> SignUpUseCase<MemoryAuthRepository, MemoryAuthRepository> {
            SignUpUseCase::new(self.store.clone(), self.store.clone(), self.config.clone())
        }

        fn sign_in(
            &self,
        ) -> SignInUseCase<MemoryAuthRepository, MemoryAuthRepository, MemoryAuthRepository>
        {
            SignInUseCase::new(
                self.store.clone(),
                self.store.clone(),
                self.store.clone(),
                self.config.clone(),
            )
        }

        fn check(&self) -> CheckSessionUseCase<MemoryAuthRepository, MemoryAuthRepository> {
            CheckSessionUseCase::new(self.store.clone(), self.store.clone(), self.config.clone())
        }

        fn sign_out(&self) -> SignOutUseCase<MemoryAuthRepository> {
            SignOutUseCase::new(self.store.clone(), self.config.clone())
        }

        async fn register(&self, email: &str) -> String {
            self.sign_up()
                .execute(
                    SignUpInput {
                        email: email.to_string(),
                        password: PASSWORD.to_string(),
                    },
                    ClientInfo::default(),
                )
                .await
                .unwrap()
                .session_token
                .into_string()
        }

        async fn attempt(&self, email: &str, password: &str) -> Result<String, AuthError> {
            self.sign_in()
                .execute(
                    SignInInput {
                        email: email.to_string(),
                        password: password.to_string(),
                    },
                    ClientInfo::default(),
                )
                .await
                .map(|auth| auth.session_token.into_string())
        }
    }

    #[tokio::test]
    async fn test_sign_up_then_sign_in_then_sign_out() {
        let h = Harness::new();
        let signup_token = h.register("Alice@Example.com").await;

        let user = h.check().execute(&signup_token).await.unwrap();
        assert_eq!(user.email.as_str(), "alice@example.com");

        let signin_token = h.attempt("alice@example.com", PASSWORD).await.unwrap();
        assert_ne!(signin_token, signup_token);
        let same = h.check().execute(&signin_token).await.unwrap();
        assert_eq!(same.public_id, user.public_id);
        assert!(same.last_login_at.is_some());

        assert!(h.sign_out().execute(&signin_token).await.unwrap());
        assert!(matches!(
            h.check().execute(&signin_token).await,
            Err(AuthError::SessionInvalid)
        ));
        // Other sessions survive
        assert!(h.check().execute(&signup_token).await.is_ok());
    }

    #[tokio::test]
    async fn test_duplicate_email_rejected() {
        let h = Harness::new();
        h.register("bob@example.com").await;

        let result = h
            .sign_up()
            .execute(
                SignUpInput {
                    email: " BOB@example.com ".to_string(),
                    password: PASSWORD.to_string(),
                },
                ClientInfo::default(),
            )
            .await;
        assert!(matches!(result, Err(AuthError::EmailTaken)));
    }

    #[tokio::test]
    async fn test_sign_up_validation() {
        let h = Harness::new();
        let weak = h
            .sign_up()
            .execute(
                SignUpInput {
                    email: "carol@example.com".to_string(),
                    password: "short".to_string(),
                },
                ClientInfo::default(),
            )
            .await;
        assert!(matches!(weak, Err(AuthError::PasswordValidation(_))));

        let bad_email = h
            .sign_up()
            .execute(
                SignUpInput {
                    email: "not-an-email".to_string(),
                    password: PASSWORD.to_string(),
                },
                ClientInfo::default(),
            )
            .await;
        assert!(matches!(bad_email, Err(AuthError::InvalidEmail(_))));
    }

    #[tokio::test]
    async fn test_sign_in_failures_are_indistinguishable() {
        let h = Harness::new();
        h.register("dave@example.com").await;

        for (email, password) in [
            ("dave@example.com", "secret"),
            ("nobody@example.com", PASSWORD),
            ("garbage", PASSWORD),
        ] {
            assert!(matches!(
                h.attempt(email, password).await,
                Err(AuthError::InvalidCredentials)
            ));
        }
    }

    #[tokio::test]
    async fn test_lockout_after_repeated_failures() {
        let h = Harness::new();
        h.register("erin@example.com").await;

        for _ in 0..Credential::MAX_LOGIN_FAILURES {
            assert!(matches!(
                h.attempt("erin@example.com", "wrong-password").await,
                Err(AuthError::InvalidCredentials)
            ));
        }
        // Even the right password is refused while locked
        assert!(matches!(
            h.attempt("erin@example.com", PASSWORD).await,
            Err(AuthError::AccountLocked)
        ));
    }

    #[tokio::test]
    async fn test_success_resets_failure_count() {
        let h = Harness::new();
        h.register("frank@example.com").await;

        for _ in 0..Credential::MAX_LOGIN_FAILURES - 1 {
            let _ = h.attempt("frank@example.com", "wrong-password").await;
        }
        h.attempt("frank@example.com", PASSWORD).await.unwrap();
        for _ in 0..Credential::MAX_LOGIN_FAILURES - 1 {
            let _ = h.attempt("frank@example.com", "wrong-password").await;
        }
        assert!(h.attempt("frank@example.com", PASSWORD).await.is_ok());
    }

    #[tokio::test]
    async fn test_tampered_token_rejected() {
        let h = Harness::new();
        let token = h.register("grace@example.com").await;
        let (id, _) = token.split_once('.').unwrap();
        let forged = format!("{id}.AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA");

        assert!(matches!(
            h.check().execute(&forged).await,
            Err(AuthError::SessionInvalid)
        ));
        assert!(!h.sign_out().execute(&forged).await.unwrap());
        assert!(h.check().execute(&token).await.is_ok());
    }

    #[tokio::test]
    async fn test_expired_session_removed() {
        let h = Harness::new();
        let token = h.register("heidi@example.com").await;
        let session_id = SessionToken::verify(&token, &h.config.session_secret).unwrap();

        let mut session = AuthSessionRepository::find_by_id(&*h.store, &session_id)
            .await
            .unwrap()
            .unwrap();
        session.expires_at_ms = Utc::now().timestamp_millis() - 1;
        AuthSessionRepository::update(&*h.store, &session)
            .await
            .unwrap();

        assert!(matches!(
            h.check().execute(&token).await,
            Err(AuthError::SessionInvalid)
        ));
        assert!(
            AuthSessionRepository::find_by_id(&*h.store, &session_id)
                .await
                .unwrap()
                .is_none()
        );
    }

    #[tokio::test]
    async fn test_cleanup_expired_sessions() {
        let h = Harness::new();
        let live = h.register("ivan@example.com").await;
        let stale = h.attempt("ivan@example.com", PASSWORD).await.unwrap();

        let stale_id = SessionToken::verify(&stale, &h.config.session_secret).unwrap();
        let mut session = AuthSessionRepository::find_by_id(&*h.store, &stale_id)
            .await
            .unwrap()
            .unwrap();
        session.expires_at_ms = 0;
        AuthSessionRepository::update(&*h.store, &session)
            .await
            .unwrap();

        assert_eq!(h.store.cleanup_expired().await.unwrap(), 1);
        assert!(h.check().execute(&live).await.is_ok());
    }

    #[tokio::test]
    async fn test_session_of_deleted_user_invalid() {
        let h = Harness::new();
        let token = h.register("judy@example.com").await;
        let other = MemoryAuthRepository::new();
        let check = CheckSessionUseCase::new(Arc::new(other), h.store.clone(), h.config.clone());

        assert!(matches!(
            check.execute(&token).await,
            Err(AuthError::SessionInvalid)
        ));
        // Sanity: the user is still in the real store
        assert!(
            UserRepository::exists_by_email(
                &*h.store,
                &crate::models::email::Email::new("judy@example.com").unwrap()
            )
            .await
            .unwrap()
        );
    }

    #[tokio::test]
    async fn test_lookup_by_email() {
        let h = Harness::new();
        h.register("kim@example.com").await;
        let lookup = LookupUserUseCase::new(h.store.clone());

        let found = lookup.by_email("KIM@example.com").await.unwrap().unwrap();
        assert_eq!(found.email.as_str(), "kim@example.com");
        assert!(lookup.by_email("nobody@example.com").await.unwrap().is_none());
        assert!(lookup.by_email("not an email").await.unwrap().is_none());
    }
}
