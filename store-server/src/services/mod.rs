//! Services Module

pub mod feed;

pub use feed::SyncFeed;
