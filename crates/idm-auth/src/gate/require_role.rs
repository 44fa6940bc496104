use crate::RequestContext;

use idm_core::Role;

use std::sync::Arc;
use std::task::{Context, Poll};

use futures::future::{self, Either, Ready};
use log::warn;
use tower::{Layer, Service};

/// Rejects requests whose identity's role is not one of `roles`.
///
/// Membership is exact: listing `Member` does not admit administrators.
/// A request without an identity is rejected too.
#[derive(Debug, Clone)]
pub struct RequireRoleLayer {
    roles: Arc<[Role]>,
}

impl RequireRoleLayer {
    pub fn new(roles: impl IntoIterator<Item = Role>) -> Self {
        Self {
            roles: roles.into_iter().collect(),
        }
    }

    pub fn roles(&self) -> &[Role] {
        &self.roles
    }
}

impl<S> Layer<S> for RequireRoleLayer {
    type Service = RequireRole<S>;

    fn layer(&self, inner: S) -> Self::Service {
        RequireRole {
            inner,
            roles: Arc::clone(&self.roles),
        }
    }
}

#[derive(Debug, Clone)]
pub struct RequireRole<S> {
    inner: S,
    roles: Arc<[Role]>,
}

impl<S> RequireRole<S> {
    fn permits(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }
}

impl<S, C> Service<C> for RequireRole<S>
where
    S: Service<C>,
    C: RequestContext<Response = S::Response>,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = Either<Ready<Result<S::Response, S::Error>>, S::Future>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, ctx: C) -> Self::Future {
        let permitted = ctx.user().is_some_and(|user| self.permits(user.role));

        if !permitted {
            warn!(
                "[tenant={}] Rejected request: user={:?} role={:?} not in {:?}",
                ctx.tenant().map(|t| t.id).unwrap_or_default(),
                ctx.user().map(|u| u.id),
                ctx.user().map(|u| u.role),
                self.roles
            );
            return Either::Left(future::ok(ctx.unauthorized()));
        }

        Either::Right(self.inner.call(ctx))
    }
}
