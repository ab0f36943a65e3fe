use crate::server::{data::cobranza::DueRepository, model::billing::{Month, MonthRange, Semester}};
use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find_with_member;
mod get_all_with_member;
mod get_existing_months;
mod update_payment;
