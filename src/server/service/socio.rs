use sea_orm::DatabaseConnection;

use crate::server::{data::socio::MemberRepository, error::AppError, model::socio::Member};

pub struct MemberService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MemberService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists every member ordered by member number
    pub async fn list(&self) -> Result<Vec<Member>, AppError> {
        let members = MemberRepository::new(self.db).get_all().await?;

        members
            .into_iter()
            .map(Member::from_entity)
            .collect::<Result<Vec<_>, _>>()
            .map_err(Into::into)
    }
}
