//! Dynamically-typed call boundary.
//!
//! Hosts that hand over loosely typed values (JSON from a scripting layer,
//! an RPC body, ...) go through here. Text input is a JSON string, binary
//! input is an array of byte values, and options are an object with the
//! optional fields `width`, `height`, `dpi` and `loadFonts`. Results go back
//! out through [`DecodedImage::to_json`](crate::DecodedImage::to_json).

use serde::Deserialize;
use serde_json::Value;

use crate::{DecodeOptions, DecodedImage, Decoder, Error, Result, SvgEngine};

const MISSING_ARGUMENT: &str = "SVG decode requires at least one argument";
const BAD_INPUT: &str = "SVG input must be string or buffer";
const BAD_OPTIONS: &str = "Options must be an object";

/// Decode a positional argument list `[svg, options?]`
pub fn decode_args(args: &[Value]) -> Result<DecodedImage> {
    decode_args_with(&Decoder::new(), args)
}

pub fn decode_args_with<E: SvgEngine>(decoder: &Decoder<E>, args: &[Value]) -> Result<DecodedImage> {
    let (svg, rest) = args
        .split_first()
        .ok_or_else(|| Error::InvalidInput(MISSING_ARGUMENT.to_string()))?;
    decode_value_with(decoder, svg, rest.first())
}

/// Decode `svg` with optional `options`, both as loosely typed values
pub fn decode_value(svg: &Value, options: Option<&Value>) -> Result<DecodedImage> {
    decode_value_with(&Decoder::new(), svg, options)
}

pub fn decode_value_with<E: SvgEngine>(
    decoder: &Decoder<E>,
    svg: &Value,
    options: Option<&Value>,
) -> Result<DecodedImage> {
    enum Payload<'a> {
        Text(&'a str),
        Bytes(Vec<u8>),
    }

    let payload = match svg {
        Value::String(s) => Payload::Text(s.as_str()),
        Value::Array(items) => Payload::Bytes(byte_array(items)?),
        _ => return Err(Error::InvalidInput(BAD_INPUT.to_string())),
    };
    let options = parse_options(options)?;

    match payload {
        Payload::Text(s) => decoder.decode(s, &options),
        Payload::Bytes(b) => decoder.decode(&b, &options),
    }
}

/// Read an options value. Only an absent value means all defaults; a present
/// value must be an object (`null` included in the rejection).
pub fn parse_options(options: Option<&Value>) -> Result<DecodeOptions> {
    match options {
        None => Ok(DecodeOptions::default()),
        Some(v @ Value::Object(_)) => DecodeOptions::deserialize(v)
            .map_err(|e| Error::InvalidInput(format!("Invalid options: {}", e))),
        Some(_) => Err(Error::InvalidInput(BAD_OPTIONS.to_string())),
    }
}

fn byte_array(items: &[Value]) -> Result<Vec<u8>> {
    items
        .iter()
        .map(|v| {
            v.as_u64()
                .and_then(|n| u8::try_from(n).ok())
                .ok_or_else(|| Error::InvalidInput(BAD_INPUT.to_string()))
        })
        .collect()
}
