//! Unit tests for the session lifecycle

mod sweeper_tests;
