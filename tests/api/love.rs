use greeter::configuration::Service;

use crate::helpers::{message_of, spawn_app};

#[tokio::test]
async fn root_returns_the_love_greeting() {
    let app = spawn_app(Service::Love).await;

    let response = app.get("/").await;

    assert_eq!(200, response.status().as_u16());
    assert_eq!(message_of(response).await, "I Love Andresinho 101%");
}

#[tokio::test]
async fn repeated_requests_return_identical_bodies() {
    let app = spawn_app(Service::Love).await;

    let mut bodies = Vec::new();
    for _ in 0..3 {
        bodies.push(app.get("/").await.bytes().await.unwrap());
    }

    assert!(bodies.windows(2).all(|pair| pair[0] == pair[1]));
}
