use serde::{Deserialize, Serialize};

// Identifiable defines common traits that can be shared by persistent objects
pub trait Identifiable : Sync + Send {
    fn id(&self) -> String;
    fn version(&self) -> i64;
}

// Configuration abstracts config options for the catalog service
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub(crate) struct Configuration {
    pub environment: String,
    // PUT creates the record when the isbn is unknown
    pub put_upsert: bool,
    pub page_size: usize,
}

impl Configuration {
    pub fn new(environment: &str) -> Self {
        Configuration {
            environment: environment.to_string(),
            put_upsert: true,
            page_size: 500,
        }
    }
}
