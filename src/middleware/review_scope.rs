use crate::helpers::ErrorResponse;
use actix_web::{
    body::EitherBody,
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    http::StatusCode,
    Error, HttpMessage,
};
use futures_util::future::LocalBoxFuture;
use std::future::{ready, Ready};

pub const INVALID_REVIEW_ID: &str = "잘못된 요청입니다.";

/// Id of the parent review, parsed from the `{review_id}` path segment of the comment scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReviewId(pub i32);

pub fn parse_review_id(segment: Option<&str>) -> Option<ReviewId> {
    segment
        .and_then(|s| s.parse::<i32>().ok())
        .filter(|id| *id > 0)
        .map(ReviewId)
}

/// Wraps the comment scope. Rejects requests whose `review_id` is missing or not a positive
/// integer, otherwise stores the parsed [`ReviewId`] in the request extensions.
pub struct ReviewScope;

impl<S, B> Transform<S, ServiceRequest> for ReviewScope
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = ReviewScopeMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(ReviewScopeMiddleware { service }))
    }
}

pub struct ReviewScopeMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for ReviewScopeMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let review_id = match parse_review_id(req.match_info().get("review_id")) {
            Some(review_id) => review_id,
            None => {
                tracing::debug!("Rejected review scope path: {}", req.path());
                let response = req
                    .error_response(ErrorResponse::new(StatusCode::BAD_REQUEST, INVALID_REVIEW_ID))
                    .map_into_right_body();
                return Box::pin(async move { Ok(response) });
            }
        };

        req.extensions_mut().insert(review_id);

        let fut = self.service.call(req);
        Box::pin(async move { fut.await.map(ServiceResponse::map_into_left_body) })
    }
}
