use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Tag {
    #[serde(rename = "_content")]
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct HotTags {
    pub tag: Vec<Tag>,
}

/// Response of `flickr.tags.getHotList`.
///
/// `count` is taken as sent; it is not checked against `hottags.tag`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Tags {
    pub period: String,
    pub count: usize,
    pub hottags: HotTags,
    pub stat: String,
}

impl Tags {
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.hottags.tag.iter().map(|tag| tag.name.as_str())
    }

    pub fn is_ok(&self) -> bool {
        self.stat == "ok"
    }
}
