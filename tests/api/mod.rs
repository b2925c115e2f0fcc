//! REST API endpoint tests

mod conversation_tests;
