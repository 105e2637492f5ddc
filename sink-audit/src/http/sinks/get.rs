use reqwest_middleware::{ClientWithMiddleware as Client, RequestBuilder};

use crate::http::Escape;

pub fn build(base_url: &str, client: &Client, project_id: &str, sink_name: &str) -> RequestBuilder {
    let url = format!("{}/projects/{}/sinks/{}", base_url, project_id.escape(), sink_name.escape());
    client.get(url)
}
