use std::convert::Infallible;
use std::sync::Arc;
use warp::Filter;

use crate::config::Config;
use crate::vendor::ChatCompletion;

pub type Context = Arc<AppContext>;

/// Everything a handler needs, built once in `main`.
pub struct AppContext {
    pub config: Config,
    pub chat: Arc<dyn ChatCompletion>,
}

pub fn create_context(config: Config, chat: Arc<dyn ChatCompletion>) -> Context {
    Arc::new(AppContext { config, chat })
}

pub fn with_context(
    ctx: Context,
) -> impl Filter<Extract = (Context,), Error = Infallible> + Clone {
    warp::any().map(move || ctx.clone())
}
