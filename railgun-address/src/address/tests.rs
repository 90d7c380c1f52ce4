//! Tests for the 0zk address codec.
