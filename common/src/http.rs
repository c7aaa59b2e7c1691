use actix_web::{HttpResponse, Responder};
use serde::Serialize;

use crate::error::Res;

pub struct Success;
impl Success {
    pub fn created<T: Serialize>(body: T) -> Res<impl Responder> {
        Result::Ok(HttpResponse::Created().json(body))
    }
    pub fn ok<T: Serialize>(body: T) -> Res<impl Responder> {
        Result::Ok(HttpResponse::Ok().json(body))
    }
    pub fn created_text(body: &'static str) -> Res<impl Responder> {
        Result::Ok(HttpResponse::Created().body(body))
    }
    pub fn ok_text(body: &'static str) -> Res<impl Responder> {
        Result::Ok(HttpResponse::Ok().body(body))
    }
}
