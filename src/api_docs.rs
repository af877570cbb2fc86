use crate::api;
use crate::domain::{Acronym, User};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        api::health::health_check,
        api::acronyms::create_acronym,
        api::acronyms::list_acronyms,
        api::acronyms::get_acronym,
        api::acronyms::update_acronym,
        api::acronyms::delete_acronym,
        api::acronyms::search_acronyms,
        api::acronyms::first_acronym,
        api::acronyms::sorted_acronyms,
        api::acronyms::get_acronym_user,
        api::users::create_user,
        api::users::list_users,
        api::users::get_user,
        api::users::update_user,
        api::users::delete_user,
        api::users::get_user_acronyms,
    ),
    components(schemas(Acronym, User)),
    tags(
        (name = "acronyms", description = "Acronyms and their expansions"),
        (name = "users", description = "Users owning acronyms")
    )
)]
pub struct ApiDoc;
