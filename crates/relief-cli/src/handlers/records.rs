//! CRUD handlers for the relief resources.

use relief_api::{ApiClient, HttpBackend};
use relief_core::Resource;
use serde_json::Value;
use tracing::debug;

use super::form_payload;
use crate::error::CliError;

pub async fn list<B: HttpBackend>(
    client: &ApiClient<B>,
    resource: Resource,
) -> Result<Value, CliError> {
    debug!(%resource, "listing records");
    Ok(client.resource(resource).get_all().await?)
}

pub async fn get<B: HttpBackend>(
    client: &ApiClient<B>,
    resource: Resource,
    id: &str,
) -> Result<Value, CliError> {
    Ok(client.resource(resource).get_by_id(id).await?)
}

pub async fn create<B: HttpBackend>(
    client: &ApiClient<B>,
    resource: Resource,
    form: &str,
) -> Result<Value, CliError> {
    let payload = form_payload(form)?;
    Ok(client.resource(resource).create(&payload).await?)
}

pub async fn update<B: HttpBackend>(
    client: &ApiClient<B>,
    resource: Resource,
    id: &str,
    form: &str,
) -> Result<Value, CliError> {
    let payload = form_payload(form)?;
    Ok(client.resource(resource).update(id, &payload).await?)
}

pub async fn delete<B: HttpBackend>(
    client: &ApiClient<B>,
    resource: Resource,
    id: &str,
) -> Result<Value, CliError> {
    Ok(client.resource(resource).delete(id).await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::testing::client;
    use relief_api::Method;
    use serde_json::json;

    #[tokio::test]
    async fn test_update_sends_form_as_put() {
        let (client, requests) = client(200, r#"{"id":42,"name":"Jane"}"#);

        let value = update(&client, Resource::Victims, "42", "name=Jane&phone=")
            .await
            .unwrap();

        assert_eq!(value, json!({"id": 42, "name": "Jane"}));
        let requests = requests.lock().unwrap();
        assert_eq!(requests[0].method, Method::Put);
        assert_eq!(requests[0].url.path(), "/api/victims/42");
        let body: Value = serde_json::from_slice(requests[0].body.as_ref().unwrap()).unwrap();
        assert_eq!(body, json!({"name": "Jane", "phone": null}));
    }

    #[tokio::test]
    async fn test_delete_not_found_is_api_error() {
        let (client, _) = client(404, r#"{"message":"not found"}"#);

        let err = delete(&client, Resource::ReliefCamps, "7").await.unwrap_err();

        assert_eq!(err.to_string(), "not found");
        assert_eq!(err.exit_code(), 1);
    }

    #[tokio::test]
    async fn test_list_uses_collection_endpoint() {
        let (client, requests) = client(200, r#"{"success":true,"data":[]}"#);

        let value = tokio_test::assert_ok!(list(&client, Resource::Inventory).await);

        assert_eq!(value["data"], json!([]));
        assert_eq!(requests.lock().unwrap()[0].url.path(), "/api/inventory");
    }

    #[tokio::test]
    async fn test_create_rejects_empty_form_without_request() {
        let (client, requests) = client(200, "{}");

        let err = create(&client, Resource::Volunteers, "").await.unwrap_err();

        assert_eq!(err.exit_code(), 2);
        assert!(requests.lock().unwrap().is_empty());
    }
}
