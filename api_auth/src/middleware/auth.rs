use std::{future::Future, pin::Pin, sync::Arc};

use actix_web::{
    Error, HttpMessage,
    dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready},
};
use futures::future::{Ready, ok};

use common::{
    error::{AppError, Res},
    jwt::JwtClaims,
};

/// Guard for routes that require a signed-in user. The extractor further up
/// the stack has already validated the session token; this middleware only
/// decides whether the request may proceed.
pub struct AuthMiddleware {}

impl AuthMiddleware {
    pub fn new() -> Self {
        Self {}
    }
}

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: actix_web::body::MessageBody + 'static,
{
    type Response = ServiceResponse<actix_web::body::BoxBody>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ok(AuthMiddlewareService {
            service: Arc::new(service),
        })
    }
}

pub struct AuthMiddlewareService<S> {
    service: Arc<S>,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: actix_web::body::MessageBody + 'static,
{
    type Response = ServiceResponse<actix_web::body::BoxBody>;
    type Error = Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>>>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        // no claims entry means no token was presented at all
        let claims = {
            let extensions = req.extensions();
            match extensions.get::<Res<JwtClaims>>() {
                Some(Ok(claims)) => Ok(claims.clone()),
                Some(Err(_)) => Err(AppError::Forbidden("token not valid!".to_string())),
                None => Err(AppError::Unauthorized(
                    "You are not Authenticated.".to_string(),
                )),
            }
        };

        let srv = Arc::clone(&self.service);

        Box::pin(async move {
            match claims {
                Ok(claims) => {
                    // re-insert bare claims so handlers can use web::ReqData<JwtClaims>
                    req.extensions_mut().insert(claims);
                    srv.call(req).await.map(|res| res.map_into_boxed_body())
                }
                Err(err) => Ok(req.into_response(err.to_http_response().map_into_boxed_body())),
            }
        })
    }
}
