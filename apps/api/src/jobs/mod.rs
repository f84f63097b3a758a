// Job search: remote client, response normalization, per-role orchestration.
// All calls to the job listing service go through client::JobSearch.

pub mod client;
pub mod handlers;
pub mod models;
pub mod recommend;
