use expertdb_core::envelope::Envelope;
use expertdb_core::models::user::UserInput;
use expertdb_core::models::{PaginatedResponse, User};
use expertdb_core::types::DbId;

use crate::client::ApiClient;
use crate::request::RequestDescriptor;

impl ApiClient {
    /// `GET /users?page=&limit=&<filters>`
    pub async fn get_users(
        &self,
        page: u32,
        limit: u32,
        filters: &[(&str, &str)],
    ) -> Envelope<PaginatedResponse<User>> {
        self.request(
            RequestDescriptor::get("/users")
                .params(filters.iter().copied())
                .param("page", page)
                .param("limit", limit),
        )
        .await
    }

    /// `GET /users/{id}`
    pub async fn get_user_by_id(&self, id: DbId) -> Envelope<User> {
        self.request(RequestDescriptor::get(format!("/users/{id}")))
            .await
    }

    /// `POST /users`
    pub async fn create_user(&self, user: &UserInput) -> Envelope<User> {
        self.request(RequestDescriptor::post("/users").json(user))
            .await
    }

    /// `PUT /users/{id}`
    pub async fn update_user(&self, id: DbId, user: &UserInput) -> Envelope<User> {
        self.request(RequestDescriptor::put(format!("/users/{id}")).json(user))
            .await
    }

    /// `DELETE /users/{id}`
    pub async fn delete_user(&self, id: DbId) -> Envelope<()> {
        self.request(RequestDescriptor::delete(format!("/users/{id}")))
            .await
    }
}
