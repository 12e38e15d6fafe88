/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/
/// Access token and hashkey models
pub mod auth;
/// Request builder and raw HTTP dispatch
pub mod http;
/// Cursor pagination and continuation markers
pub mod pagination;
/// Request payloads, one per broker operation
pub mod requests;
/// Typed responses and the response normalizer
pub mod responses;
/// Alias tables between semantic and wire field names
pub mod schema;
/// Field level validation rules
pub mod validation;
