pub mod routes {
    pub mod impact;
}

mod services {
    pub(crate) mod impact;
}

mod dtos {
    pub(crate) mod impact;
}

/// Public aggregation routes, mounted directly under `/api` without a scope
/// prefix of their own.
pub fn mount_impact() -> impl actix_web::dev::HttpServiceFactory {
    (
        routes::impact::get_impact_data,
        routes::impact::get_leaderboard_data,
    )
}
