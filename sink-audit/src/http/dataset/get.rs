use reqwest_middleware::{ClientWithMiddleware as Client, RequestBuilder};

use crate::http::Escape;

pub fn build(base_url: &str, client: &Client, project_id: &str, dataset_id: &str) -> RequestBuilder {
    let url = format!(
        "{}/projects/{}/datasets/{}",
        base_url,
        project_id.escape(),
        dataset_id.escape()
    );
    client.get(url)
}
