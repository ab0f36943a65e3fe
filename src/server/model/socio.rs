//! Member domain model.

use crate::{
    model::socio::MemberDto,
    server::{error::internal::InternalError, model::billing::PlanType},
};

/// Club member with the plan that decides how dues are grouped.
#[derive(Debug, Clone, PartialEq)]
pub struct Member {
    pub number: i32,
    pub first_name: String,
    pub last_name: Option<String>,
    pub plan: PlanType,
}

impl Member {
    /// Converts an entity model to a member domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Member)` - The converted member
    /// - `Err(InternalError::UnknownPlanType)` - Stored `tipo_pago` is not a known plan
    pub fn from_entity(entity: entity::socio::Model) -> Result<Self, InternalError> {
        let plan = entity
            .tipo_pago
            .parse::<PlanType>()
            .map_err(|e| InternalError::UnknownPlanType {
                nro_socio: entity.nro_socio,
                value: e.0,
            })?;

        Ok(Self {
            number: entity.nro_socio,
            first_name: entity.nombre,
            last_name: entity.apellido,
            plan,
        })
    }

    pub fn into_dto(self) -> MemberDto {
        MemberDto {
            nro_socio: self.number,
            nombre: self.first_name,
            apellido: self.last_name,
            tipo_pago: self.plan.to_string(),
        }
    }
}
