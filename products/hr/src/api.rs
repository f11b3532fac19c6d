use std::future::Future;

use platform_api::{ApiError, ApiResult, Endpoint, JsonTransport, TransportSettings};

use crate::{record::EmployeeRecord, wire};

/// The two calls the employee API supports.
pub trait EmployeeApi: Send + Sync {
    fn create(&self, record: &EmployeeRecord) -> impl Future<Output = ApiResult<()>> + Send;

    fn list(&self) -> impl Future<Output = ApiResult<Vec<EmployeeRecord>>> + Send;
}

/// [`EmployeeApi`] over HTTP: POST and GET against the same endpoint.
#[derive(Clone, Debug)]
pub struct HttpEmployeeApi {
    transport: JsonTransport,
}

impl HttpEmployeeApi {
    pub fn new(endpoint: Endpoint, settings: &TransportSettings) -> ApiResult<Self> {
        Ok(Self {
            transport: JsonTransport::new(endpoint, settings)?,
        })
    }

    pub fn endpoint(&self) -> &Endpoint {
        self.transport.endpoint()
    }
}

impl EmployeeApi for HttpEmployeeApi {
    async fn create(&self, record: &EmployeeRecord) -> ApiResult<()> {
        let body = wire::encode_record(record).map_err(ApiError::Encode)?;
        self.transport.post_json(body).await
    }

    async fn list(&self) -> ApiResult<Vec<EmployeeRecord>> {
        let body = self.transport.get_json().await?;
        wire::decode_records(&body).map_err(ApiError::Decode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{body_json, method, path},
    };

    fn api_for(server: &MockServer) -> HttpEmployeeApi {
        let endpoint = Endpoint::parse(&format!("{}/v1", server.uri())).unwrap();
        HttpEmployeeApi::new(endpoint, &TransportSettings::default()).unwrap()
    }

    #[tokio::test]
    async fn create_posts_the_record() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1"))
            .and(body_json(json!({
                "employeeId": "1",
                "name": "Ana",
                "email": "a@x.com",
                "address": "Rd 1",
                "phone": "555"
            })))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let record = EmployeeRecord {
            employee_id: "1".into(),
            name: "Ana".into(),
            email: "a@x.com".into(),
            address: "Rd 1".into(),
            phone: "555".into(),
        };
        api_for(&server).create(&record).await.unwrap();
    }

    #[tokio::test]
    async fn malformed_list_is_a_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{\"items\":[]}"))
            .mount(&server)
            .await;

        let err = api_for(&server).list().await.unwrap_err();
        assert_eq!(err.code(), "DECODE");
    }
}
