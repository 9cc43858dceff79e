use crate::helpers::{spawn_app, spawn_app_with};
use helloworld_extension::configuration::ExtensionSettings;
use reqwest::header::{CONTENT_TYPE, SET_COOKIE};

// checks:
// the greeting is exposed at /helloworld/{node_id} behind GET;
// it always answers 200 text/plain, with the node id echoed back;
// ids that aren't 64-bit integers never reach it.
#[tokio::test]
async fn helloworld_greets_the_node() {
    let app = spawn_app().await;

    let test_cases = vec![
        ("42", "Hello World, nodeId=42"),
        ("0", "Hello World, nodeId=0"),
        ("-7", "Hello World, nodeId=-7"),
        ("9223372036854775807", "Hello World, nodeId=9223372036854775807"),
        ("-9223372036854775808", "Hello World, nodeId=-9223372036854775808"),
    ];

    for (node_id, expected_body) in test_cases {
        let response = app.get_helloworld(node_id).await;

        assert_eq!(
            200,
            response.status().as_u16(),
            "The greeting did not return 200 OK for nodeId={}.",
            node_id
        );
        let content_type = response.headers().get(CONTENT_TYPE).unwrap();
        assert!(content_type.to_str().unwrap().starts_with("text/plain"));
        assert_eq!(expected_body, response.text().await.unwrap());
    }
}

#[tokio::test]
async fn helloworld_renders_ids_in_canonical_decimal() {
    let app = spawn_app().await;

    // the routing layer parses the id, so the echo is the number, not the text
    let response = app.get_helloworld("007").await;

    assert_eq!(200, response.status().as_u16());
    assert_eq!("Hello World, nodeId=7", response.text().await.unwrap());
}

#[tokio::test]
async fn helloworld_returns_a_404_when_the_node_id_is_not_an_integer() {
    let app = spawn_app().await;

    let test_cases = vec![
        ("abc", "not a number"),
        ("4.2", "a decimal"),
        ("9223372036854775808", "one past the largest 64-bit integer"),
        ("", "missing"),
    ];

    for (invalid_node_id, description) in test_cases {
        let response = app.get_helloworld(invalid_node_id).await;

        assert_eq!(
            404,
            response.status().as_u16(),
            "The API did not fail with 404 Not Found when the node id was {}.",
            description
        );
    }
}

#[tokio::test]
async fn helloworld_refuses_methods_other_than_get_and_head() {
    let app = spawn_app().await;
    let url = format!("{}/helloworld/42", &app.address);

    let test_cases = vec![
        (app.api_client.post(&url), "POST"),
        (app.api_client.put(&url), "PUT"),
        (app.api_client.delete(&url), "DELETE"),
    ];

    for (request, method) in test_cases {
        let response = request.send().await.expect("Failed to execute request.");

        assert_eq!(
            405,
            response.status().as_u16(),
            "The API did not fail with 405 Method Not Allowed for {}.",
            method
        );
    }
}

#[tokio::test]
async fn helloworld_answers_head_without_a_body() {
    let app = spawn_app().await;

    let response = app
        .api_client
        .head(&format!("{}/helloworld/42", &app.address))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(200, response.status().as_u16());
    assert_eq!("", response.text().await.unwrap());
}

#[tokio::test]
async fn helloworld_is_idempotent() {
    let app = spawn_app().await;

    let first = app.get_helloworld("42").await.bytes().await.unwrap();
    let second = app.get_helloworld("42").await.bytes().await.unwrap();

    assert_eq!(first, second);
}

// the database in spawn_app is unreachable and no session cookie comes back:
// the greeting doesn't touch either collaborator
#[tokio::test]
async fn helloworld_does_not_touch_its_collaborators() {
    let app = spawn_app().await;

    let response = app.get_helloworld("42").await;

    assert_eq!(200, response.status().as_u16());
    assert!(response.headers().get(SET_COOKIE).is_none());
}

#[tokio::test]
async fn helloworld_can_be_mounted_under_a_prefix() {
    let app = spawn_app_with(|c| {
        c.extensions = vec![ExtensionSettings {
            name: "helloworld".to_string(),
            mount_point: "/examples/unmanaged".to_string(),
        }];
    })
    .await;

    let response = app.get("/examples/unmanaged/helloworld/42").await;
    assert_eq!(200, response.status().as_u16());
    assert_eq!("Hello World, nodeId=42", response.text().await.unwrap());

    // not at the root any more
    let response = app.get_helloworld("42").await;
    assert_eq!(404, response.status().as_u16());
}

#[tokio::test]
async fn an_unknown_extension_stops_the_server_from_building() {
    let mut configuration = helloworld_extension::configuration::get_configuration()
        .expect("Failed to read configuration.");
    configuration.application.port = 0;
    configuration.extensions.push(ExtensionSettings {
        name: "goodbyeworld".to_string(),
        mount_point: "/goodbye".to_string(),
    });

    let result = helloworld_extension::startup::Application::build(configuration).await;

    assert!(result.is_err());
}
