//! Unit tests for the realtime module.
