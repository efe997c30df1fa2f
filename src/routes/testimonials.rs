use axum::{routing::get, Json, Router};
use lazy_static::lazy_static;
use utoipa::ToSchema;

/// A customer testimonial shown on the landing page.
#[derive(Debug, Clone, serde::Serialize, ToSchema)]
pub struct Testimonial {
    name: String,
    text: String,
}

// Static content, never mutated at runtime.
lazy_static! {
    static ref TESTIMONIALS: Vec<Testimonial> = vec![
        Testimonial {
            name: "Sara A.".into(),
            text: "خدمة ممتازة وسهلة الاستخدام!".into(),
        },
        Testimonial {
            name: "Omar M.".into(),
            text: "حققت نتائج رائعة خلال أيام.".into(),
        },
        Testimonial {
            name: "Lina S.".into(),
            text: "دعم محترف وتجربة سلسة.".into(),
        },
    ];
}

/// Create a router to serve the testimonial list.
pub fn create_router() -> Router {
    Router::new().route("/", get(list))
}

/// The ordered list of landing-page testimonials.
#[tracing::instrument]
#[utoipa::path(
    get,
    path = "/api/testimonials",
    responses((status = OK, description = "Ordered testimonial list", body = [Testimonial]))
)]
pub(crate) async fn list() -> Json<&'static [Testimonial]> {
    Json(TESTIMONIALS.as_slice())
}
