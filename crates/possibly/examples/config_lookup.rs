use possibly::maybe;
use serde_json::json;

fn main() {
    let config = maybe(json!({
        "server": { "host": "0.0.0.0", "port": 8080 },
        "tls": null,
        "replicas": [{ "region": "eu" }, { "region": "" }]
    }));

    // Present all the way down.
    let port = config.get("server").get("port").get_or(&json!(80)).clone();

    // Null, empty and missing levels all fall back.
    let cert = config.get("tls").get("cert").get_or(&json!("self-signed")).clone();
    let region = config.get("replicas").get(1).get("region").get_or(&json!("default")).clone();
    let backup = config.get("replicas").get(9).get("region");

    println!("port: {}", port);
    println!("cert: {}", cert);
    println!("second region: {}", region);
    println!("ninth region: {}", backup);
}
