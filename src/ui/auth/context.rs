//! Auth context for managing user authentication state
//!
//! This module provides a reactive authentication context that:
//! - Stores the current user
//! - Handles login, logout and registration
//! - Restores the session from localStorage after hydration

use leptos::prelude::*;

use crate::core::{ApiError, AuthResponse, User};
use crate::ui::api::{self, LoginRequest, RegisterRequest};
use crate::ui::session;

const LOGIN_FALLBACK: &str = "Erro ao fazer login";
const REGISTER_FALLBACK: &str = "Erro ao criar conta";

/// Authentication state
#[derive(Debug, Clone, PartialEq, Default)]
pub enum AuthState {
    /// Initial state, checking localStorage
    #[default]
    Loading,
    /// User is not authenticated
    Unauthenticated,
    /// User is authenticated
    Authenticated(User),
}

/// Auth context providing authentication state and actions
#[derive(Clone, Copy)]
pub struct AuthContext {
    /// Current authentication state
    pub state: RwSignal<AuthState>,
    /// Loading state for login/register
    pub loading: RwSignal<bool>,
    /// Error message from last operation
    pub error: RwSignal<Option<String>>,
}

impl AuthContext {
    /// Check if user is authenticated
    pub fn is_authenticated(&self) -> bool {
        matches!(self.state.get(), AuthState::Authenticated(_))
    }

    /// Get current user (if authenticated)
    pub fn user(&self) -> Option<User> {
        match self.state.get() {
            AuthState::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    /// Clear error message
    pub fn clear_error(&self) {
        self.error.set(None);
    }

    /// Login with email and password
    pub async fn login(&self, email: String, password: String) -> Result<User, String> {
        self.begin();
        let request = LoginRequest { email, password };
        self.finish(api::login(&request).await, LOGIN_FALLBACK)
    }

    /// Create an account and sign in with it
    pub async fn register(
        &self,
        nome: String,
        email: String,
        password: String,
        telefone: Option<String>,
    ) -> Result<User, String> {
        self.begin();
        let request = RegisterRequest {
            nome,
            email,
            password,
            telefone,
        };
        self.finish(api::register(&request).await, REGISTER_FALLBACK)
    }

    fn finish(
        &self,
        response: Result<AuthResponse, ApiError>,
        fallback: &str,
    ) -> Result<User, String> {
        self.loading.set(false);

        match response {
            Ok(AuthResponse { access_token, user }) => {
                if let Err(e) = session::save_session(&access_token, &user) {
                    leptos::logging::warn!("Failed to persist session: {}", e);
                }
                self.error.set(None);
                self.state.set(AuthState::Authenticated(user.clone()));
                Ok(user)
            }
            Err(e) => {
                leptos::logging::error!("Authentication failed: {}", e);
                let message = e.user_message(fallback);
                self.error.set(Some(message.clone()));
                Err(message)
            }
        }
    }

    fn begin(&self) {
        self.loading.set(true);
        self.error.set(None);
    }

    /// Logout the current user
    pub fn logout(&self) {
        session::clear_session();
        self.error.set(None);
        self.state.set(AuthState::Unauthenticated);
    }

    /// Drop the session when the API says the token is no longer valid
    pub fn handle_api_error(&self, error: &ApiError) {
        if error.is_unauthorized() {
            leptos::logging::warn!("Session rejected by the API, signing out");
            self.logout();
        }
    }
}

/// Provide auth context to the component tree
pub fn provide_auth_context() -> AuthContext {
    // Loading on both server and client so protected routes never redirect during SSR
    let state = RwSignal::new(AuthState::Loading);
    let loading = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let ctx = AuthContext {
        state,
        loading,
        error,
    };

    // Restore the session after hydration (client-side only)
    #[cfg(not(feature = "ssr"))]
    Effect::new(move |_| match session::load_session() {
        Some((_token, user)) => state.set(AuthState::Authenticated(user)),
        None => {
            session::clear_session();
            state.set(AuthState::Unauthenticated);
        }
    });

    provide_context(ctx);
    ctx
}

/// Get auth context from the component tree
pub fn use_auth_context() -> AuthContext {
    expect_context::<AuthContext>()
}
