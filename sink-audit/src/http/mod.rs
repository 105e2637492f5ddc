use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

pub mod api_client;
pub mod bigquery_client;
pub mod buckets;
pub mod dataset;
pub mod error;
pub mod iam;
pub mod logging_client;
pub mod pubsub_client;
pub mod sinks;
pub mod storage_client;
pub mod topics;

pub(crate) trait Escape {
    fn escape(&self) -> String;
}

impl Escape for str {
    fn escape(&self) -> String {
        utf8_percent_encode(self, ENCODE_SET).to_string()
    }
}

impl Escape for String {
    fn escape(&self) -> String {
        self.as_str().escape()
    }
}

const ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC.remove(b'*').remove(b'-').remove(b'.').remove(b'_');
