//! Assistant-response parser
//!
//! Normalizes the assistant's wire payload — a single record, an array of
//! records, or a conversational record — into either a chat message or a
//! fully-validated directive batch. Validation is all-or-nothing: one bad
//! record rejects the whole batch so half an assistant's intent is never
//! applied silently.

use crate::directive::Directive;
use crate::error::DirectiveError;
use plancraft_document::{labels, FieldPath};
use serde::Deserialize;
use serde_json::Value;

/// Which response pipeline the caller selected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseMode {
    /// Field-update directives expected
    Command,
    /// Conversational reply expected
    Chat,
}

/// Normalized assistant response
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedResponse {
    /// Conversational reply; no document change
    Chat(String),
    /// Validated directive batch
    Directives(Vec<Directive>),
}

/// Raw directive record as it arrives on the wire
///
/// All members optional at this stage; presence is enforced by validation,
/// not by deserialization, so a missing member reports as
/// [`DirectiveError::MissingDirectiveField`] rather than a decode failure.
#[derive(Debug, Deserialize)]
struct RawRecord {
    field: Option<String>,
    value: Option<String>,
    chat: Option<String>,
}

/// Parse a decoded wire payload in the given mode
///
/// # Errors
/// - [`DirectiveError::MalformedResponse`] if the payload is not decodable
///   or has the wrong shape for the mode
/// - [`DirectiveError::MissingDirectiveField`] if any command record lacks a
///   required member (whole batch rejected)
/// - [`DirectiveError::InvalidPath`] if any record addresses an unknown
///   path (whole batch rejected)
pub fn parse(payload: &str, mode: ParseMode) -> Result<ParsedResponse, DirectiveError> {
    let value: Value =
        serde_json::from_str(payload).map_err(|_| DirectiveError::MalformedResponse)?;

    match mode {
        ParseMode::Chat => parse_chat(&value),
        ParseMode::Command => parse_command(value),
    }
}

fn parse_chat(value: &Value) -> Result<ParsedResponse, DirectiveError> {
    let response = value
        .as_object()
        .and_then(|obj| obj.get("response"))
        .and_then(Value::as_str)
        .ok_or(DirectiveError::MalformedResponse)?;
    Ok(ParsedResponse::Chat(response.to_string()))
}

fn parse_command(value: Value) -> Result<ParsedResponse, DirectiveError> {
    // Single record or array of records; anything else is malformed
    let records: Vec<Value> = match value {
        Value::Array(items) => items,
        obj @ Value::Object(_) => vec![obj],
        _ => return Err(DirectiveError::MalformedResponse),
    };

    if records.is_empty() {
        return Err(DirectiveError::MalformedResponse);
    }

    let mut directives = Vec::with_capacity(records.len());
    for record in records {
        let raw: RawRecord =
            serde_json::from_value(record).map_err(|_| DirectiveError::MalformedResponse)?;
        directives.push(validate_record(raw)?);
    }

    Ok(ParsedResponse::Directives(directives))
}

fn validate_record(raw: RawRecord) -> Result<Directive, DirectiveError> {
    let field = raw
        .field
        .filter(|f| !f.is_empty())
        .ok_or(DirectiveError::MissingDirectiveField)?;
    let value = raw
        .value
        .filter(|v| !v.is_empty())
        .ok_or(DirectiveError::MissingDirectiveField)?;
    let note = raw.chat.ok_or(DirectiveError::MissingDirectiveField)?;

    let path: FieldPath = field.parse().map_err(|source| DirectiveError::InvalidPath {
        path: field.clone(),
        source,
    })?;

    // Canonicalization never rejects; unmapped labels pass through
    let value = labels::canonicalize_for(&path, &value);

    Ok(Directive::new(path, value, note))
}
