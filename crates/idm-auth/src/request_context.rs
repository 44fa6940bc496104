use idm_core::{Tenant, User};

/// What the access control gate needs from the surrounding request.
///
/// Resolving the identity and tenant from request state happens before the
/// gate runs; implementations only expose the result.
pub trait RequestContext {
    type Response;

    /// The resolved identity, if the request carries one
    fn user(&self) -> Option<&User>;

    /// The tenant the request was resolved against
    fn tenant(&self) -> Option<&Tenant>;

    /// Response that ends the pipeline without reaching the handler
    fn unauthorized(&self) -> Self::Response;
}
