//! Database models for all content tables.
//!
//! Models are read-only: the website never writes content, except for the
//! article view counter.

mod article;
mod award;
mod blog_category;
mod career;
mod legal;
mod service;
mod stat;
mod team_member;
mod testimonial;

pub use article::Article;
pub use award::Award;
pub use blog_category::BlogCategory;
pub use career::Career;
pub use legal::Legal;
pub use service::Service;
pub use stat::Stat;
pub use team_member::TeamMember;
pub use testimonial::Testimonial;
