use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    Error,
};
use futures_util::future::LocalBoxFuture;
use std::future::{ready, Ready};
use std::rc::Rc;

/// Middleware logging every error a handler or extractor produced
///
/// Actix turns handler errors into responses before they reach here, so the
/// error is read back from the response.
pub struct ErrorHandler;

impl<S, B> Transform<S, ServiceRequest> for ErrorHandler
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = ErrorHandlerMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(ErrorHandlerMiddleware {
            service: Rc::new(service),
        }))
    }
}

pub struct ErrorHandlerMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for ErrorHandlerMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();

        Box::pin(async move {
            let method = req.method().clone();
            let path = req.path().to_string();
            let result = service.call(req).await;

            match &result {
                Ok(res) => {
                    if let Some(err) = res.response().error() {
                        let status = res.status();
                        if status.is_server_error() {
                            tracing::error!(%method, %path, %status, "Request error: {}", err);
                        } else {
                            tracing::warn!(%method, %path, %status, "Request rejected: {}", err);
                        }
                    }
                }
                Err(err) => {
                    tracing::error!(%method, %path, "Request error: {:?}", err);
                }
            }

            result
        })
    }
}
