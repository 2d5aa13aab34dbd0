/// Entity round trips against a live database
pub mod crud_tests;
