use serde::{Deserialize, Serialize};

use super::de::{bool_from_int, deserialize_number_unconditionally};

/// A single photo record as returned by `flickr.photos.search`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Image {
    #[serde(deserialize_with = "deserialize_number_unconditionally")]
    pub id: u64,
    pub owner: String,
    pub secret: String,
    pub server: String,
    pub farm: u32,
    pub title: String,
    #[serde(rename = "ispublic", deserialize_with = "bool_from_int")]
    pub is_public: bool,
    #[serde(rename = "isfriend", deserialize_with = "bool_from_int")]
    pub is_friend: bool,
    #[serde(rename = "isfamily", deserialize_with = "bool_from_int")]
    pub is_family: bool,
}

impl Image {
    pub fn url(&self, size: PhotoSize) -> String {
        match size.suffix() {
            Some(suffix) => format!(
                "https://live.staticflickr.com/{}/{}_{}_{}.jpg",
                self.server, self.id, self.secret, suffix
            ),
            None => format!(
                "https://live.staticflickr.com/{}/{}_{}.jpg",
                self.server, self.id, self.secret
            ),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PhotoSize {
    Square,
    Thumbnail,
    Small,
    #[default]
    Medium,
    Medium640,
    Large,
}

impl PhotoSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Square => "s",
            Self::Thumbnail => "t",
            Self::Small => "m",
            Self::Medium => "-",
            Self::Medium640 => "z",
            Self::Large => "b",
        }
    }

    fn suffix(&self) -> Option<&'static str> {
        match self {
            Self::Medium => None,
            other => Some(other.as_str()),
        }
    }
}

impl std::str::FromStr for PhotoSize {
    type Err = ();
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "s" => Ok(Self::Square),
            "t" => Ok(Self::Thumbnail),
            "m" => Ok(Self::Small),
            "-" => Ok(Self::Medium),
            "z" => Ok(Self::Medium640),
            "b" => Ok(Self::Large),
            _ => Err(()),
        }
    }
}

impl std::fmt::Display for PhotoSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
