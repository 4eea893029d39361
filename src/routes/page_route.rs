use warp::filters::BoxedFilter;
use warp::Filter;

pub fn index() -> BoxedFilter<()> {
    warp::path::end().and(warp::get()).boxed()
}
