use actix_web::web;

pub mod routes {
    pub mod user;
}

mod services {
    pub(crate) mod notification;
    pub(crate) mod reward;
}

mod dtos {
    pub(crate) mod user;
}

pub fn mount_user() -> actix_web::Scope {
    web::scope("/user")
        .service(routes::user::post_set_reward)
        .service(routes::user::patch_redeem_reward)
        .service(routes::user::redeem_all_rewards)
        .service(routes::user::get_transactions_reward)
        .service(routes::user::patch_mark_notification_read)
}
