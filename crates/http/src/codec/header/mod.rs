//! Header block processing for message preambles
//!
//! # Components
//!
//! - [`parse_header_list`]: Decodes `Name: Value` lines into a [`HeaderMap`](crate::protocol::HeaderMap)
//!   - Case-insensitive names, duplicates appended in order
//!   - Name and value validation against injection
//!   - Header count limit enforcement
//!
//! - [`HeaderEncoder`]: Encodes request and response heads back to bytes
//!   - CRLF-delimited output the decoders accept unchanged

mod header_decoder;
mod header_encoder;

pub(crate) use header_decoder::decode_header_list;
pub use header_decoder::parse_header_list;
pub use header_encoder::HeaderEncoder;
