//! Access control stages for a request pipeline.
//!
//! Both stages only read the identity already attached to the request and
//! either forward it untouched or end the pipeline with the context's
//! unauthorized response. Put authentication before role checks:
//!
//! ```ignore
//! let service = ServiceBuilder::new()
//!     .layer(RequireAuthenticationLayer)
//!     .layer(RequireRoleLayer::new([Role::Administrator]))
//!     .service(handler);
//! ```

pub mod require_authentication;
pub mod require_role;
