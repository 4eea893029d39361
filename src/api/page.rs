#[macro_export]
macro_rules! index {
    () => {
        $crate::routes::page_route::index().map($crate::handlers::page_handler::index)
    };
}
