//! Contact form handler.

use relief_api::{ApiClient, HttpBackend};
use serde_json::Value;

use super::form_payload;
use crate::error::CliError;

pub async fn submit<B: HttpBackend>(client: &ApiClient<B>, form: &str) -> Result<Value, CliError> {
    let payload = form_payload(form)?;
    Ok(client.contact().submit(&payload).await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::testing::client;
    use relief_api::Method;

    #[tokio::test]
    async fn test_submit_posts_to_contact() {
        let (client, requests) = client(200, r#"{"success":true,"message":"Thanks"}"#);

        let value = submit(&client, "name=Asha&email=asha%40example.org&message=Need+water")
            .await
            .unwrap();

        assert_eq!(value["message"], "Thanks");
        let requests = requests.lock().unwrap();
        assert_eq!(requests[0].method, Method::Post);
        assert_eq!(requests[0].url.path(), "/api/contact");
    }
}
