//! Planner and manager assignments of users to phase applications.

use expertdb_core::envelope::Envelope;
use expertdb_core::models::assignment::{
    AssignmentRequest, AssignmentResponse, RemovalResponse, UserAssignments,
};
use expertdb_core::types::DbId;

use crate::client::ApiClient;
use crate::request::RequestDescriptor;

impl ApiClient {
    /// `POST /users/{user_id}/planner-assignments`
    pub async fn assign_planner_applications(
        &self,
        user_id: DbId,
        application_ids: &[DbId],
    ) -> Envelope<AssignmentResponse> {
        self.request(assignment(
            RequestDescriptor::post(format!("/users/{user_id}/planner-assignments")),
            application_ids,
        ))
        .await
    }

    /// `POST /users/{user_id}/manager-assignments`
    pub async fn assign_manager_applications(
        &self,
        user_id: DbId,
        application_ids: &[DbId],
    ) -> Envelope<AssignmentResponse> {
        self.request(assignment(
            RequestDescriptor::post(format!("/users/{user_id}/manager-assignments")),
            application_ids,
        ))
        .await
    }

    /// `DELETE /users/{user_id}/planner-assignments`
    pub async fn remove_planner_assignments(
        &self,
        user_id: DbId,
        application_ids: &[DbId],
    ) -> Envelope<RemovalResponse> {
        self.request(assignment(
            RequestDescriptor::delete(format!("/users/{user_id}/planner-assignments")),
            application_ids,
        ))
        .await
    }

    /// `DELETE /users/{user_id}/manager-assignments`
    pub async fn remove_manager_assignments(
        &self,
        user_id: DbId,
        application_ids: &[DbId],
    ) -> Envelope<RemovalResponse> {
        self.request(assignment(
            RequestDescriptor::delete(format!("/users/{user_id}/manager-assignments")),
            application_ids,
        ))
        .await
    }

    /// `GET /users/{user_id}/assignments`
    pub async fn get_user_assignments(&self, user_id: DbId) -> Envelope<UserAssignments> {
        self.request(RequestDescriptor::get(format!("/users/{user_id}/assignments")))
            .await
    }
}

fn assignment(request: RequestDescriptor, application_ids: &[DbId]) -> RequestDescriptor {
    request.json(&AssignmentRequest {
        application_ids: application_ids.to_vec(),
    })
}
