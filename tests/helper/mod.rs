#![allow(dead_code, unused_imports)]

pub mod fixture;
pub mod index;

pub use fixture::{Project, simple_index_body};
pub use index::{mock_project_page, mock_project_page_async};
