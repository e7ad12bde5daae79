use greeter::configuration::{Service, get_configuration};
use greeter::startup::Application;
use greeter::telemetry::{get_subscriber, init_subscriber};
use std::sync::LazyLock;

// Ensure that the `tracing` stack is only initialised once using `LazyLock`
static TRACING: LazyLock<()> = LazyLock::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();
    // We cannot assign the output of `get_subscriber` to a variable based on the
    // value `TEST_LOG` because the sink is part of the type returned by
    // `get_subscriber`, therefore they are not the same type.
    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::stdout);
        init_subscriber(subscriber).expect("Failed to initialise telemetry.");
    } else {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::sink);
        init_subscriber(subscriber).expect("Failed to initialise telemetry.");
    };
});

pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
}

impl TestApp {
    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.api_client
            .get(format!("{}{}", &self.address, path))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn get_from_origin(&self, path: &str, origin: &str) -> reqwest::Response {
        self.api_client
            .get(format!("{}{}", &self.address, path))
            .header("Origin", origin)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn preflight(&self, path: &str, origin: &str) -> reqwest::Response {
        self.api_client
            .request(
                reqwest::Method::OPTIONS,
                format!("{}{}", &self.address, path),
            )
            .header("Origin", origin)
            .header("Access-Control-Request-Method", "GET")
            .header("Access-Control-Request-Headers", "content-type")
            .send()
            .await
            .expect("Failed to execute request.")
    }
}

/// Launch the given service in the background on a random port.
pub async fn spawn_app(service: Service) -> TestApp {
    LazyLock::force(&TRACING);

    let configuration = {
        let mut c = get_configuration().expect("Failed to read configuration.");
        // Use a random OS port
        c.application.port = 0;
        c.application.host = "127.0.0.1".to_string();
        c.application.service = service;
        c
    };

    let application = Application::build(configuration)
        .await
        .expect("Failed to build application.");
    let application_port = application.port();
    let _ = tokio::spawn(application.run_until_stopped());

    TestApp {
        address: format!("http://127.0.0.1:{}", application_port),
        api_client: reqwest::Client::new(),
    }
}

/// Read a greeting body, asserting that `message` is its only key.
pub async fn message_of(response: reqwest::Response) -> String {
    let body: serde_json::Value = response.json().await.expect("Body is not JSON.");
    let object = body.as_object().expect("Body is not a JSON object.");
    assert_eq!(object.len(), 1, "Unexpected keys in {}.", body);
    object["message"]
        .as_str()
        .expect("`message` is not a string.")
        .to_string()
}
