//! State shared across all request handlers.

use std::sync::Arc;

use domains::TokenIssuer;
use services::{CommentService, HeartService, ImageService, MemberService, PostService};

#[derive(Clone)]
pub struct AppState {
    pub members: Arc<MemberService>,
    pub posts: Arc<PostService>,
    pub comments: Arc<CommentService>,
    pub hearts: Arc<HeartService>,
    pub images: Arc<ImageService>,
    pub tokens: Arc<dyn TokenIssuer>,
}
