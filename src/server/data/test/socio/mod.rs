use crate::server::data::socio::MemberRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod find_by_number;
mod get_all;
