use std::env;

use dotenvy::dotenv;
use serde_json::Value;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use url::Url;

use query_builder_client::{ActionRequest, Client, DisconnectedClient, Settings};

const DEFAULT_CLUSTER_URL: &str = "http://localhost:9200";
const SETTINGS_PREFIX: &str = "QBC_";

fn main() {
    dotenv().ok();

    // enable logging to console
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "query_builder_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // the cluster is never contacted, the url only anchors the printed endpoint
    let cluster_url = Url::parse(
        &env::var("CLUSTER_URL").unwrap_or_else(|_| DEFAULT_CLUSTER_URL.to_string()),
    )
    .expect("Invalid CLUSTER_URL");

    let settings = Settings::from_env(SETTINGS_PREFIX);
    tracing::info!("Loaded {} setting(s)", settings.len());
    let client = DisconnectedClient::new().with_settings(settings);

    let indices: Vec<String> = env::var("INDEX")
        .map(|raw| {
            raw.split(',')
                .map(str::trim)
                .filter(|index| !index.is_empty())
                .map(String::from)
                .collect()
        })
        .unwrap_or_default();

    let query: Value = match env::var("QUERY") {
        Ok(raw) => serde_json::from_str(&raw).expect("QUERY is not valid JSON"),
        Err(_) => serde_json::json!({ "match_all": {} }),
    };

    let mut builder = client.prepare_search(indices).with_query(query);

    // optionally page through results
    if let Ok(from) = env::var("FROM") {
        builder = builder.with_from(from.parse().expect("Invalid FROM"));
    }
    if let Ok(size) = env::var("SIZE") {
        builder = builder.with_size(size.parse().expect("Invalid SIZE"));
    }

    // optionally bound the search time on the cluster side
    if let Ok(timeout) = env::var("SEARCH_TIMEOUT") {
        builder = builder
            .with_timeout(humantime::parse_duration(&timeout).expect("Invalid SEARCH_TIMEOUT"));
    }

    let request = builder.request();
    let endpoint = request
        .endpoint(&cluster_url)
        .expect("CLUSTER_URL cannot be used as a base");
    tracing::info!("Built search request for {}", endpoint);

    println!("{} {}", request.method(), endpoint);
    println!("{}", builder);

    client.close().expect("Could not close client");
}
