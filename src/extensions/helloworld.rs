use crate::database::Database;
use crate::extensions::ServerExtension;
use crate::session_state::TypedSession;
use actix_web::http::header::ContentType;
use actix_web::{web, HttpResponse};

/// Greets a node by id: `GET /helloworld/{node_id}`, `HEAD` alike.
#[derive(Clone, Debug)]
pub struct HelloWorldResource {
    // where a real extension would look the node up, through
    // `self.database.pool()` - never queried here
    #[allow(dead_code)]
    database: Database,
}

impl HelloWorldResource {
    pub const NAME: &'static str = "helloworld";

    pub fn new(database: Database) -> Self {
        Self { database }
    }

    pub fn hello(&self, node_id: i64) -> HttpResponse {
        greeting(node_id)
    }
}

impl ServerExtension for HelloWorldResource {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn configure(&self, cfg: &mut web::ServiceConfig) {
        cfg.app_data(web::Data::new(self.clone()))
            // a non-numeric or out of range id never reaches `hello`:
            // web::Path<i64> answers 404 itself.
            // method routes live on the resource, so any other method gets 405
            .service(
                web::resource("/helloworld/{node_id}")
                    .route(web::get().to(hello))
                    // actix drops the body of a HEAD response on the wire
                    .route(web::head().to(hello)),
            );
    }
}

// Http GET Handler #############################################################

// the session is extracted where a real extension would read it, but never written
#[tracing::instrument(name = "Greet a node", skip(resource, _session))]
async fn hello(
    node_id: web::Path<i64>,
    resource: web::Data<HelloWorldResource>,
    _session: TypedSession,
) -> HttpResponse {
    resource.hello(node_id.into_inner())
}

/// 200, `text/plain`, `Hello World, nodeId=<node_id>`.
pub fn greeting(node_id: i64) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::plaintext())
        .body(format!("Hello World, nodeId={}", node_id))
}
