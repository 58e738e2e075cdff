//! Wires a toy in-process connector into the wrapper and lists nodes.
//!
//! A real deployment implements [`Connector`] over the native Smelter
//! client; the wrapper itself never performs transport work.

use serde_json::json;
use smelter_client::{
    AuthRejected, ClientOptions, ClientWrapper, Connector, Credential, OperationFuture,
    OperationRegistry, Params, StaticCredential,
};

struct DemoConnector;

struct DemoClient {
    nodes: Vec<serde_json::Value>,
}

impl Connector for DemoConnector {
    type Client = DemoClient;

    async fn connect(
        &self,
        _endpoint: &str,
        credential: &Credential,
    ) -> Result<DemoClient, AuthRejected> {
        if credential.expose().is_empty() {
            return Err(AuthRejected::new("empty token"));
        }
        Ok(DemoClient {
            nodes: vec![
                json!({"uuid": "7d443b0e", "name": "rack1-blade04", "power_state": "power on"}),
                json!({"uuid": "91f02c8a", "name": "rack1-blade05", "power_state": "power off"}),
            ],
        })
    }
}

fn node_list(client: &DemoClient, _params: Params) -> OperationFuture<'_> {
    Box::pin(async move { Ok(serde_json::Value::Array(client.nodes.clone())) })
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let operations = OperationRegistry::new().register("node.list", node_list);

    let wrapper = ClientWrapper::new(
        "https://smelter.internal:6385",
        DemoConnector,
        StaticCredential::new("demo-token"),
        operations,
    )
    .with_options(ClientOptions {
        retry_interval_ms: 500,
    });

    let nodes = wrapper.call("node.list", 3, Params::default()).await?;
    println!("{nodes}");

    Ok(())
}
