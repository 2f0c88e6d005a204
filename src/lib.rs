//! Workspace-level integration tests for fibseq. See `tests/`.
