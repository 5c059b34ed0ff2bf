use serde::{Deserialize, Serialize};

use super::{de::deserialize_number_unconditionally, image::Image};

#[derive(Debug, Deserialize)]
pub struct PhotoPage {
    pub page: u32,
    pub pages: u32,
    pub perpage: u32,
    #[serde(deserialize_with = "deserialize_number_unconditionally")]
    pub total: u64,
    pub photo: Vec<Image>,
}

/// Response of `flickr.photos.search`.
#[derive(Debug, Deserialize)]
pub struct PhotoSearch {
    pub photos: PhotoPage,
    pub stat: String,
}

impl PhotoSearch {
    pub fn is_ok(&self) -> bool {
        self.stat == "ok"
    }
}

/// A query together with the images it produced, in ranking order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ImageSearchResults {
    pub search_string: String,
    pub search_results: Vec<Image>,
}

impl ImageSearchResults {
    pub fn new(search_string: impl Into<String>, search_results: Vec<Image>) -> Self {
        Self {
            search_string: search_string.into(),
            search_results,
        }
    }

    pub fn from_page(search_string: impl Into<String>, search: PhotoSearch) -> Self {
        Self::new(search_string, search.photos.photo)
    }

    pub fn len(&self) -> usize {
        self.search_results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.search_results.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn page() -> serde_json::Value {
        json!({
            "photos": {
                "page": 1,
                "pages": 1204,
                "perpage": 2,
                "total": "2407",
                "photo": [
                    {
                        "id": "53116532217", "owner": "12037949754@N01",
                        "secret": "a1b2c3d4e5", "server": "65535", "farm": 66,
                        "title": "first", "ispublic": 1, "isfriend": 0, "isfamily": 0
                    },
                    {
                        "id": 53115000001u64, "owner": "8817283@N04",
                        "secret": "ffee001122", "server": "65535", "farm": 66,
                        "title": "second", "ispublic": 1, "isfriend": 0, "isfamily": 1
                    }
                ]
            },
            "stat": "ok"
        })
    }

    #[test]
    fn empty_query_and_results() {
        let results = ImageSearchResults::new("", vec![]);
        assert_eq!(results.search_string, "");
        assert!(results.search_results.is_empty());
        assert!(results.is_empty());
        assert_eq!(results.len(), 0);
    }

    #[test]
    fn from_page_keeps_ranking_order() {
        let search: PhotoSearch = serde_json::from_value(page()).unwrap();
        assert_eq!(search.photos.total, 2407);
        assert_eq!(search.photos.pages, 1204);
        assert!(search.is_ok());

        let results = ImageSearchResults::from_page("harbour", search);
        assert_eq!(results.search_string, "harbour");
        let titles: Vec<_> = results
            .search_results
            .iter()
            .map(|image| image.title.as_str())
            .collect();
        assert_eq!(titles, ["first", "second"]);
        assert!(results.search_results[1].is_family);
    }

    #[test]
    fn one_bad_photo_fails_the_page() {
        let mut payload = page();
        payload["photos"]["photo"][1]["farm"] = json!("sixty-six");
        assert!(serde_json::from_value::<PhotoSearch>(payload).is_err());
    }

    #[test]
    fn serializes_with_field_names() {
        let results = ImageSearchResults::new("fog", vec![]);
        assert_eq!(
            serde_json::to_value(&results).unwrap(),
            json!({ "search_string": "fog", "search_results": [] })
        );
    }
}
