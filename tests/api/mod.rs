//! API integration tests for the taskboard application.

pub mod health_tests;
pub mod scenario_tests;
pub mod task_query_tests;
