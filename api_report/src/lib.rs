use actix_web::web;

pub mod routes {
    pub mod report;
}

mod services {
    pub(crate) mod report;
}

mod dtos {
    pub(crate) mod report;
}

pub fn mount_report() -> actix_web::Scope {
    web::scope("/report")
        .service(routes::report::post_create_report)
        .service(routes::report::get_reports)
        .service(routes::report::patch_update_report)
        .service(routes::report::get_recent_report)
}
