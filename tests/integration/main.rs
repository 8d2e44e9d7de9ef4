//! End-to-end tests driving the full router over the in-memory store.

mod helpers;

mod auth_test;
mod payment_show_test;
mod payment_store_test;
mod payment_update_test;
