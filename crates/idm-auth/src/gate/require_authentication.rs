use crate::RequestContext;

use std::task::{Context, Poll};

use futures::future::{self, Either, Ready};
use log::warn;
use tower::{Layer, Service};

/// Rejects requests that carry no resolved identity.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequireAuthenticationLayer;

impl<S> Layer<S> for RequireAuthenticationLayer {
    type Service = RequireAuthentication<S>;

    fn layer(&self, inner: S) -> Self::Service {
        RequireAuthentication { inner }
    }
}

#[derive(Debug, Clone)]
pub struct RequireAuthentication<S> {
    inner: S,
}

impl<S, C> Service<C> for RequireAuthentication<S>
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
        if ctx.user().is_none() {
            warn!(
                "[tenant={}] Rejected unauthenticated request",
                ctx.tenant().map(|t| t.id).unwrap_or_default()
            );
            return Either::Left(future::ok(ctx.unauthorized()));
        }

        Either::Right(self.inner.call(ctx))
    }
}
