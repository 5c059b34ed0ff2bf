use std::io::Read;

use log::debug;
use serde::de::DeserializeOwned;

use super::{
    common::{ApiStatus, Stat},
    error::{ApiError, DecodeError},
};

pub fn decode_json<T>(payload: &[u8]) -> Result<T, DecodeError>
where
    T: DeserializeOwned,
{
    Ok(serde_json::from_slice(payload)?)
}

pub fn decode_reader<T, R>(reader: R) -> Result<T, DecodeError>
where
    T: DeserializeOwned,
    R: Read,
{
    Ok(serde_json::from_reader(reader)?)
}

/* Decode a Flickr response, surfacing stat="fail" before touching T */
pub fn decode<T>(payload: &[u8]) -> Result<T, ApiError>
where
    T: DeserializeOwned,
{
    let status: Stat = decode_json(payload)?;

    if status.is_fail() {
        let status: ApiStatus = decode_json(payload)?;
        debug!("api reported failure: {:?}", status);
        return Err(ApiError::Failed {
            code: status.code,
            message: status.message.unwrap_or_default(),
        });
    }

    let value = decode_json(payload)?;
    debug!("decoded {} byte payload, stat={}", payload.len(), status.stat);
    Ok(value)
}
