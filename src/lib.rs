pub mod api;
pub mod util;

pub use api::{
    decode::{decode, decode_json, decode_reader},
    error::{ApiError, DecodeError, DecodeErrorKind},
    image::{Image, PhotoSize},
    search::{ImageSearchResults, PhotoSearch},
    tags::{HotTags, Tag, Tags},
};
