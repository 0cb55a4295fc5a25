use crate::server::ServerRouter;

mod posts;

pub fn routes() -> ServerRouter {
    posts::routes()
}
