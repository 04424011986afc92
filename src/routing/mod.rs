//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming Request (method, path)
//!     → axum route table (posts.rs)
//!     → /posts/{id} only: post_ctx stores PostId in request extensions
//!     → handler → Forwarder
//! ```
//!
//! | Method | Path          | Handler       |
//! |--------|---------------|---------------|
//! | GET    | `/posts`      | `list_posts`  |
//! | POST   | `/posts`      | `create_post` |
//! | GET    | `/posts/{id}` | `get_post`    |
//! | PUT    | `/posts/{id}` | `update_post` |
//! | DELETE | `/posts/{id}` | `delete_post` |
//!
//! # Design Decisions
//! - Routes built once at startup, immutable at runtime
//! - `id` is any non-empty path segment; no format checks

pub mod posts;

pub use posts::{post_ctx, posts_router, PostId};
