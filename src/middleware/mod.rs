//! Request gate and authentication extractor.
//!
//! # Authentication Flow
//!
//! 1. Client sends `Authorization: Bearer <token>` (the `Bearer ` prefix is optional)
//! 2. [`auth::authenticate`] verifies the token and, in `store` trust mode,
//!    re-loads the user it names
//! 3. The verified claims are stored in the request extensions as [`auth::AuthUser`]
//! 4. Handlers take `AuthUser` as an argument to read the caller's identity
//!
//! # Example
//!
//! ```ignore
//! use crate::middleware::auth::{AuthUser, authenticate};
//!
//! let protected = Router::new()
//!     .route("/me", get(|user: AuthUser| async move { user.email().to_string() }))
//!     .route_layer(middleware::from_fn_with_state(state.clone(), authenticate));
//! ```

pub mod auth;
