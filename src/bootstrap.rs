use serde_json::json;

use crate::sink::TagManagerQueue;

pub const START_EVENT: &str = "mtm.Start";
pub const START_TIME_KEY: &str = "mtm.startTime";

/// Attaches the tag manager container: makes sure the queue exists and
/// records the startup marker. The container script itself is not fetched.
pub fn install_container(queue: &TagManagerQueue, container_url: &str, started_at_ms: u64) {
    queue.create_if_absent();
    queue.push_value(json!({ START_TIME_KEY: started_at_ms, "event": START_EVENT }));
    log::info!("tag manager container attached: {container_url}");
}
