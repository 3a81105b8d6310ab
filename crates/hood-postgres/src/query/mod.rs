//! Repositories for every content area of the website.
//!
//! Each repository is a trait implemented for [`PgConnection`], so any
//! pooled connection can run the queries. Every operation returns a
//! [`PgResult`]; store failures surface as typed errors instead of a
//! default value paired with a flag.
//!
//! [`PgConnection`]: crate::PgConnection
//! [`PgResult`]: crate::PgResult

mod article;
mod award;
mod career;
mod legal;
mod service;
mod stat;
mod team_member;
mod testimonial;

pub use article::ArticleRepository;
pub use award::AwardRepository;
pub use career::CareerRepository;
pub use legal::LegalRepository;
pub use service::ServiceRepository;
pub use stat::StatRepository;
pub use team_member::TeamRepository;
pub use testimonial::TestimonialRepository;
