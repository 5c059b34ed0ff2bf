use serde::Deserialize;

/// Every Flickr response carries `stat`.
#[derive(Debug, Deserialize)]
pub struct Stat {
    pub stat: String,
}

impl Stat {
    pub fn is_fail(&self) -> bool {
        self.stat == "fail"
    }
}

/// Body of a `stat: "fail"` response.
#[derive(Debug, Deserialize)]
pub struct ApiStatus {
    pub stat: String,
    pub code: Option<u32>,
    pub message: Option<String>,
}
