use actix_session::{Session, SessionExt};
use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};
use std::future::{ready, Ready};

// the request-scoped session an extension is handed, wrapped so extensions
// get a strongly typed API instead of raw string keys.
// Nothing is written unless an extension asks to, so a handler that only
// extracts it leaves the response without a Set-Cookie header.
pub struct TypedSession(#[allow(dead_code)] Session);

// an actix_web extractor, so handlers can take a TypedSession argument
impl FromRequest for TypedSession {
    // "We return the same error returned by the
    // implementation of `FromRequest` for `Session`".
    type Error = <Session as FromRequest>::Error;
    // no I/O happens here, so wrap the value in `Ready` - a `Future` that
    // resolves the first time it's polled by the executor.
    type Future = Ready<Result<TypedSession, Self::Error>>;
    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(Ok(TypedSession(req.get_session())))
    }
}
