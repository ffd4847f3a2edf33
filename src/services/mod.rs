pub mod link_service;
pub mod page_store;

pub use link_service::LinkRewriter;
pub use page_store::PageStore;
