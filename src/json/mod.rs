//! Purpose: Internal JSON boundary for decoding the source document and rendering outputs.
//! Exports: `parse` (decode helpers), `pretty` (4-space, ASCII-only writer).
//! Role: Single seam so pipeline stages avoid ad hoc serde_json calls.
//! Invariants: Helper APIs stay small and deterministic (no hidden global state).

pub(crate) mod parse;
pub(crate) mod pretty;
