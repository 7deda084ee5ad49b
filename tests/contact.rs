use axum::http::StatusCode;
use tower::ServiceExt;

mod helpers;

const JANE: &[(&str, &str)] = &[
    ("name", "Jane"),
    ("email", "jane@x.com"),
    ("subject", "Hi"),
    ("message", "Hello"),
];

#[tokio::test]
async fn test_contact_form_success_clears_fields() -> anyhow::Result<()> {
    let mut server = mockito::Server::new_async().await;
    let relay = server
        .mock("POST", "/submit")
        .with_status(200)
        .create_async()
        .await;

    let app = helpers::setup_app(helpers::test_config(format!("{}/submit", server.url())))?;
    let response = app
        .oneshot(helpers::form_request("/contact", JANE)?)
        .await?;

    assert_eq!(response.status(), StatusCode::OK);
    let html = helpers::body_string(response).await?;

    assert!(html.contains("toast-success"));
    assert!(html.contains("Message Sent"));
    assert!(html.contains("Thank you for your message!"));
    assert!(html.contains(r#"name="name" value="""#));
    assert!(!html.contains("jane@x.com"));
    relay.assert_async().await;

    Ok(())
}

#[tokio::test]
async fn test_contact_form_relay_failure_keeps_fields() -> anyhow::Result<()> {
    let mut server = mockito::Server::new_async().await;
    let _relay = server
        .mock("POST", "/submit")
        .with_status(500)
        .with_body("quota exceeded")
        .create_async()
        .await;

    let app = helpers::setup_app(helpers::test_config(format!("{}/submit", server.url())))?;
    let response = app
        .oneshot(helpers::form_request("/contact", JANE)?)
        .await?;

    let html = helpers::body_string(response).await?;

    assert!(html.contains("toast-error"));
    assert!(html.contains("There was an error sending your message. Please try again."));
    assert!(html.contains(r#"value="jane@x.com""#));
    assert!(html.contains(">Hello</textarea>"));
    assert!(!html.contains("quota exceeded"));

    Ok(())
}

#[tokio::test]
async fn test_contact_form_missing_field_never_reaches_relay() -> anyhow::Result<()> {
    let mut server = mockito::Server::new_async().await;
    let relay = server
        .mock("POST", "/submit")
        .expect(0)
        .create_async()
        .await;

    let app = helpers::setup_app(helpers::test_config(format!("{}/submit", server.url())))?;
    let response = app
        .oneshot(helpers::form_request(
            "/contact",
            &[("email", "jane@x.com"), ("subject", "Hi"), ("message", "Hello")],
        )?)
        .await?;

    assert_eq!(response.status(), StatusCode::OK);
    let html = helpers::body_string(response).await?;

    assert!(html.contains("All fields are required"));
    assert!(html.contains(r#"value="jane@x.com""#));
    relay.assert_async().await;

    Ok(())
}

#[tokio::test]
async fn test_contact_form_escapes_echoed_fields() -> anyhow::Result<()> {
    let app = helpers::setup_app(helpers::test_config("http://127.0.0.1:1/submit"))?;
    let response = app
        .oneshot(helpers::form_request(
            "/contact",
            &[
                ("name", "<script>alert(1)</script>"),
                ("email", "jane@x.com"),
                ("subject", "Hi"),
                ("message", "Hello"),
            ],
        )?)
        .await?;

    let html = helpers::body_string(response).await?;

    assert!(html.contains("toast-error"));
    assert!(!html.contains("<script>alert(1)</script>"));
    assert!(html.contains("&#60;script&#62;alert(1)&#60;/script&#62;"));

    Ok(())
}
