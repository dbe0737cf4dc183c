//! Authentication UI module
//!
//! This module provides authentication-related components and context
//! for the Pujante frontend.

mod context;
mod login_form;
mod protected;
mod register_form;
mod user_menu;

pub use context::{AuthContext, AuthState, provide_auth_context, use_auth_context};
pub use login_form::LoginForm;
pub use protected::ProtectedRoute;
pub use register_form::RegisterForm;
pub use user_menu::{UserAvatar, UserMenu};
