//! Use-case tests against the in-memory repository

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::{
    CheckSessionUseCase, RegisterInput, RegisterUseCase, SignInInput, SignInUseCase,
    SignOutUseCase, token,
};
use crate::domain::entity::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{Email, FederatedIdentity, UserName};
use crate::error::AuthError;
use crate::infra::memory::InMemoryAuthRepository;
use platform::password::HashParams;

fn test_config() -> Arc<AuthConfig> {
    let mut config = AuthConfig::with_random_secret();
    config.hash_params = HashParams {
        memory_kib: 1024,
        iterations: 1,
        parallelism: 1,
    };
    Arc::new(config)
}

fn register_use_case(
    repo: &InMemoryAuthRepository,
    config: &Arc<AuthConfig>,
) -> RegisterUseCase<InMemoryAuthRepository, InMemoryAuthRepository> {
    let repo = Arc::new(repo.clone());
    RegisterUseCase::new(repo.clone(), repo, config.clone())
}

fn sign_in_use_case(
    repo: &InMemoryAuthRepository,
    config: &Arc<AuthConfig>,
) -> SignInUseCase<InMemoryAuthRepository, InMemoryAuthRepository, InMemoryAuthRepository> {
    let repo = Arc::new(repo.clone());
    SignInUseCase::new(repo.clone(), repo.clone(), repo, config.clone())
}

mod register {
    use super::*;

    #[tokio::test]
    async fn test_register_then_login() {
        let repo = InMemoryAuthRepository::new();
        let config = test_config();

        let output = register_use_case(&repo, &config)
            .execute(RegisterInput {
                user_name: "alice".into(),
                password: "Secr3t!pass".into(),
            })
            .await
            .unwrap();

        // Registration signs the user in
        assert!(!output.session_token.is_empty());

        let signed_in = sign_in_use_case(&repo, &config)
            .execute(SignInInput {
                user_name: "alice".into(),
                password: "Secr3t!pass".into(),
            })
            .await
            .unwrap();

        assert_eq!(signed_in.public_id, output.public_id);
    }

    #[tokio::test]
    async fn test_duplicate_registration_rejected() {
        let repo = InMemoryAuthRepository::new();
        let config = test_config();
        let use_case = register_use_case(&repo, &config);

        use_case
            .execute(RegisterInput {
                user_name: "alice".into(),
                password: "Secr3t!pass".into(),
            })
            .await
            .unwrap();

        // Same canonical name, different case
        let result = use_case
            .execute(RegisterInput {
                user_name: "ALICE".into(),
                password: "Other!pass99".into(),
            })
            .await;

        assert!(matches!(result, Err(AuthError::DuplicateIdentity)));
    }

    #[tokio::test]
    async fn test_rejects_policy_violations() {
        let repo = InMemoryAuthRepository::new();
        let config = test_config();
        let use_case = register_use_case(&repo, &config);

        let bad_name = use_case
            .execute(RegisterInput {
                user_name: "a".into(),
                password: "Secr3t!pass".into(),
            })
            .await;
        assert!(matches!(bad_name, Err(AuthError::Validation(_))));

        let bad_password = use_case
            .execute(RegisterInput {
                user_name: "alice".into(),
                password: "short".into(),
            })
            .await;
        assert!(matches!(bad_password, Err(AuthError::Validation(_))));
    }
}

mod sign_in {
    use super::*;

    #[tokio::test]
    async fn test_failures_are_uniform() {
        let repo = InMemoryAuthRepository::new();
        let config = test_config();

        register_use_case(&repo, &config)
            .execute(RegisterInput {
                user_name: "alice".into(),
                password: "Secr3t!pass".into(),
            })
            .await
            .unwrap();

        let use_case = sign_in_use_case(&repo, &config);

        // Unknown user, wrong password, and malformed username all fail
        // with the same error variant
        let unknown = use_case
            .execute(SignInInput {
                user_name: "bob".into(),
                password: "Secr3t!pass".into(),
            })
            .await;
        let wrong_password = use_case
            .execute(SignInInput {
                user_name: "alice".into(),
                password: "WrongPass123".into(),
            })
            .await;
        let malformed = use_case
            .execute(SignInInput {
                user_name: "!!".into(),
                password: "Secr3t!pass".into(),
            })
            .await;

        assert!(matches!(unknown, Err(AuthError::InvalidCredentials)));
        assert!(matches!(wrong_password, Err(AuthError::InvalidCredentials)));
        assert!(matches!(malformed, Err(AuthError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_federated_account_cannot_password_login() {
        let repo = InMemoryAuthRepository::new();
        let config = test_config();

        let user = User::new_federated(
            UserName::new("carol").unwrap(),
            Some(Email::new("carol@example.com").unwrap()),
            FederatedIdentity::google("113290"),
        );
        repo.create_federated(&user).await.unwrap();

        let result = sign_in_use_case(&repo, &config)
            .execute(SignInInput {
                user_name: "carol".into(),
                password: "AnyPassword1!".into(),
            })
            .await;

        assert!(matches!(result, Err(AuthError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_login_records_timestamp() {
        let repo = InMemoryAuthRepository::new();
        let config = test_config();

        register_use_case(&repo, &config)
            .execute(RegisterInput {
                user_name: "alice".into(),
                password: "Secr3t!pass".into(),
            })
            .await
            .unwrap();

        sign_in_use_case(&repo, &config)
            .execute(SignInInput {
                user_name: "alice".into(),
                password: "Secr3t!pass".into(),
            })
            .await
            .unwrap();

        let user = repo
            .find_by_user_name(&UserName::new("alice").unwrap())
            .await
            .unwrap()
            .unwrap();
        assert!(user.last_login_at.is_some());
    }
}

mod federated {
    use super::*;
    use crate::application::GoogleAuthUseCase;

    fn google_use_case(
        repo: &InMemoryAuthRepository,
        config: &Arc<AuthConfig>,
    ) -> GoogleAuthUseCase<InMemoryAuthRepository, InMemoryAuthRepository, InMemoryAuthRepository>
    {
        let repo = Arc::new(repo.clone());
        GoogleAuthUseCase::new(repo.clone(), repo.clone(), repo, config.clone())
    }

    #[tokio::test]
    async fn test_repeat_identity_resolves_same_user() {
        let repo = InMemoryAuthRepository::new();
        let config = test_config();
        let use_case = google_use_case(&repo, &config);

        let identity = FederatedIdentity::google("108256733304");
        let email = Some(Email::new("dana@example.com").unwrap());

        let first = use_case
            .find_or_create(identity.clone(), email.clone())
            .await
            .unwrap();
        let second = use_case.find_or_create(identity, email).await.unwrap();

        assert_eq!(first.user_id, second.user_id);
        assert!(second.last_login_at.is_some());
    }

    #[tokio::test]
    async fn test_taken_username_gets_suffix() {
        let repo = InMemoryAuthRepository::new();
        let config = test_config();

        register_use_case(&repo, &config)
            .execute(RegisterInput {
                user_name: "dana".into(),
                password: "Secr3t!pass".into(),
            })
            .await
            .unwrap();

        let user = google_use_case(&repo, &config)
            .find_or_create(
                FederatedIdentity::google("108256733304"),
                Some(Email::new("dana@example.com").unwrap()),
            )
            .await
            .unwrap();

        assert!(user.user_name.canonical().starts_with("dana"));
        assert_ne!(user.user_name.canonical(), "dana");
    }
}

mod sessions {
    use super::*;

    use crate::domain::entity::Session;
    use crate::domain::repository::SessionRepository;
    use crate::domain::value_object::PublicId;
    use chrono::Duration;
    use kernel::id::UserId;

    #[tokio::test]
    async fn test_token_resolves_to_principal() {
        let repo = InMemoryAuthRepository::new();
        let config = test_config();

        let output = register_use_case(&repo, &config)
            .execute(RegisterInput {
                user_name: "alice".into(),
                password: "Secr3t!pass".into(),
            })
            .await
            .unwrap();

        let check = CheckSessionUseCase::new(
            Arc::new(repo.clone()),
            Arc::new(repo.clone()),
            config.clone(),
        );
        let current = check.execute(&output.session_token).await.unwrap();
        assert_eq!(current.public_id.to_string(), output.public_id);
    }

    #[tokio::test]
    async fn test_tampered_token_rejected() {
        let repo = InMemoryAuthRepository::new();
        let config = test_config();

        let output = register_use_case(&repo, &config)
            .execute(RegisterInput {
                user_name: "alice".into(),
                password: "Secr3t!pass".into(),
            })
            .await
            .unwrap();

        let check = CheckSessionUseCase::new(
            Arc::new(repo.clone()),
            Arc::new(repo.clone()),
            config.clone(),
        );

        // Valid session ID re-signed with the wrong secret
        let session_id = token::parse(&output.session_token, &config.session_secret).unwrap();
        let forged = token::issue(session_id, b"wrong_secret_wrong_secret_wrong!");

        let result = check.execute(&forged).await;
        assert!(matches!(result, Err(AuthError::SessionInvalid)));
        assert!(!check.is_valid("garbage").await);
    }

    #[tokio::test]
    async fn test_session_for_missing_user_rejected() {
        let repo = InMemoryAuthRepository::new();
        let config = test_config();

        // Session row whose user record does not exist
        let session = Session::new(UserId::new(), PublicId::new(), Duration::hours(12));
        repo.create(&session).await.unwrap();
        let cookie_token = token::issue(session.session_id, &config.session_secret);

        let check = CheckSessionUseCase::new(
            Arc::new(repo.clone()),
            Arc::new(repo.clone()),
            config.clone(),
        );
        let result = check.execute(&cookie_token).await;
        assert!(matches!(result, Err(AuthError::SessionInvalid)));
    }

    #[tokio::test]
    async fn test_sign_out_invalidates_and_is_idempotent() {
        let repo = InMemoryAuthRepository::new();
        let config = test_config();

        let output = register_use_case(&repo, &config)
            .execute(RegisterInput {
                user_name: "alice".into(),
                password: "Secr3t!pass".into(),
            })
            .await
            .unwrap();

        let sign_out = SignOutUseCase::new(Arc::new(repo.clone()), config.clone());
        sign_out.execute(&output.session_token).await.unwrap();
        // Terminating twice is a no-op, not an error
        sign_out.execute(&output.session_token).await.unwrap();
        // Garbage tokens sign out successfully too
        sign_out.execute("not-a-token").await.unwrap();

        let check = CheckSessionUseCase::new(
            Arc::new(repo.clone()),
            Arc::new(repo.clone()),
            config.clone(),
        );
        assert!(!check.is_valid(&output.session_token).await);
    }
}
