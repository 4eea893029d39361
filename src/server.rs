use anyhow::{Context as _, Result};
use std::net::SocketAddr;
use tracing::info;
use warp::Filter;

use crate::context::Context;
use crate::error::handle_rejection;
use crate::{chat, generate_image, index, upload_image, uploads};

pub fn routes(
    ctx: Context,
) -> impl Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone {
    let cors = warp::cors()
        .allow_any_origin()
        .allow_methods(vec!["GET", "POST"])
        .allow_header("content-type");

    index!()
        .or(chat!(ctx.clone()))
        .or(generate_image!())
        .or(upload_image!(ctx.clone()))
        .or(uploads!(ctx))
        .recover(handle_rejection)
        .with(cors)
        .with(warp::trace::request())
}

pub async fn serve(ctx: Context) -> Result<()> {
    let upload_dir = ctx.config.upload_dir.clone();
    tokio::fs::create_dir_all(&upload_dir)
        .await
        .with_context(|| format!("failed to create upload dir {}", upload_dir.display()))?;

    let addr = SocketAddr::from(([0, 0, 0, 0], ctx.config.port));
    info!(%addr, model = %ctx.config.model_id(), upload_dir = %upload_dir.display(), "listening");

    warp::serve(routes(ctx)).run(addr).await;
    Ok(())
}
