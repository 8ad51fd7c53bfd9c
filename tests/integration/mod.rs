mod common;
mod provisioning_tests;
