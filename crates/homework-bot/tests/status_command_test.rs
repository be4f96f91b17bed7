//! `/status` replies against a mocked homework API.

use homework_bot::handlers::{status_reply, STATUS_FAILURE};
use homework_bot::PracticumClient;
use homework_models::NO_NEW_STATUSES;
use serde_json::json;
use url::Url;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const ENDPOINT_PATH: &str = "/api/user_api/homework_statuses/";

async fn serve(body: ResponseTemplate) -> (MockServer, PracticumClient) {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(ENDPOINT_PATH))
        .and(query_param("from_date", "1700000000"))
        .respond_with(body)
        .mount(&server)
        .await;

    let endpoint = Url::parse(&format!("{}{}", server.uri(), ENDPOINT_PATH)).unwrap();
    let client = PracticumClient::new(endpoint, "test-token");
    (server, client)
}

#[tokio::test]
async fn test_reply_with_latest_status() {
    let (_server, client) = serve(ResponseTemplate::new(200).set_body_json(json!({
        "homeworks": [
            {
                "homework_name": "hw2",
                "status": "rejected",
                "lesson_name": "Спринт 2",
                "reviewer_comment": "Добавь тесты"
            },
            { "homework_name": "hw1", "status": "approved" }
        ],
        "current_date": 1700000100
    })))
    .await;

    let reply = status_reply(&client, 1_700_000_000).await;
    assert_eq!(
        reply,
        "Изменился статус проверки работы \"hw2\" для урока \"Спринт 2\": \
         Работа проверена: у ревьюера есть замечания.\nКомментарий ревьюера: Добавь тесты"
    );
}

#[tokio::test]
async fn test_reply_when_nothing_changed() {
    let (_server, client) = serve(
        ResponseTemplate::new(200).set_body_json(json!({ "homeworks": [], "current_date": 1700000100 })),
    )
    .await;

    assert_eq!(status_reply(&client, 1_700_000_000).await, NO_NEW_STATUSES);
}

#[tokio::test]
async fn test_reply_on_api_error() {
    let (_server, client) = serve(ResponseTemplate::new(401)).await;
    assert_eq!(status_reply(&client, 1_700_000_000).await, STATUS_FAILURE);
}

#[tokio::test]
async fn test_reply_on_unknown_status() {
    let (_server, client) = serve(ResponseTemplate::new(200).set_body_json(json!({
        "homeworks": [{ "homework_name": "hw1", "status": "bogus" }]
    })))
    .await;

    assert_eq!(status_reply(&client, 1_700_000_000).await, STATUS_FAILURE);
}

#[tokio::test]
async fn test_reply_on_schema_error() {
    let (_server, client) =
        serve(ResponseTemplate::new(200).set_body_json(json!({ "homeworks": null }))).await;

    assert_eq!(status_reply(&client, 1_700_000_000).await, STATUS_FAILURE);
}
