//! Due record domain models and parameters.
//!
//! Provides the domain model for monthly due records, the joined view used by listings,
//! and the parameter/result types of the payment reconciliation and charge generation
//! operations. DTO validation lives in the `from_dto` constructors so services only ever
//! receive well-formed input.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;

use crate::{
    model::cobranza::{
        CreateDuesDto, CreatedDuesDto, DueDto, DueWithMemberDto, IntOrText, UpdateDueDto,
        UpdatedDuesDto,
    },
    server::{
        error::{internal::InternalError, AppError},
        model::{
            billing::{MonthRange, Period},
            socio::Member,
        },
        util::parse::{parse_payment_date, parse_period, parse_positive_int},
    },
};

/// Charge and payment state of one member for one month.
#[derive(Debug, Clone, PartialEq)]
pub struct DueRecord {
    pub id: i32,
    pub member_number: i32,
    pub month: i32,
    pub year: i32,
    pub amount: Decimal,
    pub paid: bool,
    pub payment_date: Option<DateTime<Utc>>,
}

impl DueRecord {
    pub fn from_entity(entity: entity::cobranza::Model) -> Self {
        Self {
            id: entity.id,
            member_number: entity.nro_socio,
            month: entity.mes,
            year: entity.anio,
            amount: entity.monto,
            paid: entity.pago,
            payment_date: entity.fecha_pago,
        }
    }

    pub fn into_dto(self) -> DueDto {
        DueDto {
            id: self.id,
            nro_socio: self.member_number,
            mes: self.month,
            anio: self.year,
            monto: self.amount,
            pago: self.paid,
            fecha_pago: self.payment_date,
        }
    }
}

/// Due record together with the member it belongs to.
#[derive(Debug, Clone, PartialEq)]
pub struct DueWithMember {
    pub due: DueRecord,
    pub member: Member,
}

impl DueWithMember {
    /// Converts a joined row at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(DueWithMember)` - Both sides of the join were present and valid
    /// - `Err(InternalError::MissingMember)` - The join produced no member row
    /// - `Err(InternalError::UnknownPlanType)` - The member's plan is not recognised
    pub fn from_entity(
        due: entity::cobranza::Model,
        member: Option<entity::socio::Model>,
    ) -> Result<Self, InternalError> {
        let member = member.ok_or(InternalError::MissingMember {
            due_id: due.id,
            nro_socio: due.nro_socio,
        })?;

        Ok(Self {
            due: DueRecord::from_entity(due),
            member: Member::from_entity(member)?,
        })
    }

    pub fn into_dto(self) -> DueWithMemberDto {
        DueWithMemberDto {
            id: self.due.id,
            mes: self.due.month,
            anio: self.due.year,
            fecha_pago: self.due.payment_date,
            pago: self.due.paid,
            monto: self.due.amount,
            nro_socio: self.member.number,
            nombre: self.member.first_name,
            apellido: self.member.last_name,
            tipo_pago: self.member.plan.to_string(),
        }
    }
}

/// Parameters for registering a payment on a due record and its billing group.
#[derive(Debug, Clone, PartialEq)]
pub struct ApplyPaymentParams {
    pub id: i32,
    pub paid: bool,
    pub payment_date: Option<DateTime<Utc>>,
    pub amount: Option<Decimal>,
}

impl ApplyPaymentParams {
    /// Validates the request body of a payment update.
    ///
    /// # Returns
    /// - `Ok(ApplyPaymentParams)` - Validated parameters
    /// - `Err(AppError::BadRequest)` - `pago` missing or not a boolean, or an unparseable date
    pub fn from_dto(id: i32, dto: UpdateDueDto) -> Result<Self, AppError> {
        let paid = dto
            .pago
            .as_ref()
            .and_then(serde_json::Value::as_bool)
            .ok_or_else(|| AppError::BadRequest("pago debe ser true o false".to_string()))?;

        let payment_date = match dto.fecha_pago.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(value) => Some(parse_payment_date(value)?),
        };

        Ok(Self {
            id,
            paid,
            payment_date,
            amount: dto.monto,
        })
    }

    /// Values written to every record of the group.
    ///
    /// A paid update without a date is stamped with `now`; an amount that was not
    /// supplied is written as zero.
    pub fn resolved_values(&self, now: DateTime<Utc>) -> (Option<DateTime<Utc>>, Decimal) {
        let payment_date = match (self.payment_date, self.paid) {
            (Some(date), _) => Some(date),
            (None, true) => Some(now),
            (None, false) => None,
        };

        (payment_date, self.amount.unwrap_or(Decimal::ZERO))
    }
}

/// Result of a payment update: the group range and the records now in it.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentUpdate {
    pub range: MonthRange,
    pub updated_count: u64,
    pub records: Vec<DueRecord>,
}

impl PaymentUpdate {
    pub fn into_dto(self) -> UpdatedDuesDto {
        UpdatedDuesDto {
            message: format!(
                "Actualizado correctamente ({} mes(es) modificados)",
                self.updated_count
            ),
            count: self.updated_count,
            data: self.records.into_iter().map(DueRecord::into_dto).collect(),
        }
    }
}

/// Parameters for generating missing dues.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerateDuesParams {
    /// Restrict generation to one member; `None` processes every member.
    pub member_number: Option<i32>,
    /// Explicit period; `None` derives it from each member's plan and the current date.
    pub period: Option<Period>,
    pub year: i32,
}

impl GenerateDuesParams {
    /// Validates the request body of a generation request.
    ///
    /// `nro_socio` and `anio` are required positive integers. An absent or empty `mes`
    /// means the period is derived from the plan.
    ///
    /// # Returns
    /// - `Ok(GenerateDuesParams)` - Validated parameters
    /// - `Err(AppError::BadRequest)` - Missing fields, non-numeric values or invalid period
    pub fn from_dto(dto: CreateDuesDto) -> Result<Self, AppError> {
        let (Some(member_number), Some(year)) = (dto.nro_socio.as_ref(), dto.anio.as_ref()) else {
            return Err(AppError::BadRequest(
                "Faltan datos obligatorios: nro_socio y anio".to_string(),
            ));
        };

        let member_number = parse_positive_int(member_number, "nro_socio")?;
        let year = parse_positive_int(year, "anio")?;

        let period = match dto.mes {
            None => None,
            Some(IntOrText::Text(ref text)) if text.trim().is_empty() => None,
            Some(ref value) => Some(parse_period(value)?),
        };

        Ok(Self {
            member_number: Some(member_number),
            period,
            year,
        })
    }

    /// Parameters of the monthly closing run: every member, period derived from `today`.
    pub fn monthly_closing(today: NaiveDate) -> Self {
        use chrono::Datelike;

        Self {
            member_number: None,
            period: None,
            year: today.year(),
        }
    }
}

/// Records created by one generation run.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GeneratedDues {
    pub created: Vec<DueRecord>,
}

impl GeneratedDues {
    pub fn months_processed(&self) -> u64 {
        self.created.len() as u64
    }

    pub fn into_dto(self) -> CreatedDuesDto {
        CreatedDuesDto {
            message: "Cobranza procesada correctamente".to_string(),
            meses_procesados: self.months_processed(),
            data: self.created.into_iter().map(DueRecord::into_dto).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::{
        model::billing::{Month, Semester},
        util::parse::start_of_day,
    };

    fn update_dto(pago: serde_json::Value) -> UpdateDueDto {
        UpdateDueDto {
            pago: Some(pago),
            ..Default::default()
        }
    }

    #[test]
    fn payment_requires_boolean_flag() {
        for pago in [serde_json::json!("true"), serde_json::json!(1), serde_json::Value::Null] {
            let result = ApplyPaymentParams::from_dto(1, update_dto(pago));
            assert!(matches!(result, Err(AppError::BadRequest(_))));
        }

        let missing = ApplyPaymentParams::from_dto(1, UpdateDueDto::default());
        assert!(matches!(missing, Err(AppError::BadRequest(_))));
    }

    #[test]
    fn payment_accepts_date_only_and_timestamp() {
        let mut dto = update_dto(serde_json::json!(true));
        dto.fecha_pago = Some("2024-03-10".to_string());
        let params = ApplyPaymentParams::from_dto(7, dto).unwrap();
        assert_eq!(
            params.payment_date,
            Some(start_of_day(NaiveDate::from_ymd_opt(2024, 3, 10).unwrap()))
        );

        let mut dto = update_dto(serde_json::json!(true));
        dto.fecha_pago = Some("2024-03-10T15:30:00-03:00".to_string());
        let params = ApplyPaymentParams::from_dto(7, dto).unwrap();
        assert_eq!(
            params.payment_date.map(|d| d.to_rfc3339()),
            Some("2024-03-10T18:30:00+00:00".to_string())
        );

        let mut dto = update_dto(serde_json::json!(true));
        dto.fecha_pago = Some("ayer".to_string());
        assert!(matches!(
            ApplyPaymentParams::from_dto(7, dto),
            Err(AppError::BadRequest(_))
        ));
    }

    #[test]
    fn resolved_values_default_date_and_amount() {
        let now = Utc::now();

        let paid = ApplyPaymentParams {
            id: 1,
            paid: true,
            payment_date: None,
            amount: None,
        };
        assert_eq!(paid.resolved_values(now), (Some(now), Decimal::ZERO));

        let unpaid = ApplyPaymentParams {
            paid: false,
            amount: Some(Decimal::new(150, 0)),
            ..paid
        };
        assert_eq!(unpaid.resolved_values(now), (None, Decimal::new(150, 0)));
    }

    #[test]
    fn generation_requires_member_and_year() {
        let dto = CreateDuesDto {
            nro_socio: Some(IntOrText::Int(42)),
            mes: None,
            anio: None,
        };
        assert!(matches!(
            GenerateDuesParams::from_dto(dto),
            Err(AppError::BadRequest(_))
        ));
    }

    #[test]
    fn generation_accepts_numbers_and_numeric_strings() {
        let dto = CreateDuesDto {
            nro_socio: Some(IntOrText::Text("42".to_string())),
            mes: Some(IntOrText::Text("S2".to_string())),
            anio: Some(IntOrText::Int(2024)),
        };
        let params = GenerateDuesParams::from_dto(dto).unwrap();
        assert_eq!(params.member_number, Some(42));
        assert_eq!(params.year, 2024);
        assert_eq!(params.period, Some(Period::Semester(Semester::Second)));

        let dto = CreateDuesDto {
            nro_socio: Some(IntOrText::Int(42)),
            mes: Some(IntOrText::Int(3)),
            anio: Some(IntOrText::Text("2024".to_string())),
        };
        let params = GenerateDuesParams::from_dto(dto).unwrap();
        assert_eq!(params.period, Some(Period::Month(Month::new(3).unwrap())));
    }

    #[test]
    fn generation_rejects_invalid_period() {
        for mes in [IntOrText::Int(13), IntOrText::Int(0), IntOrText::Text("S3".to_string())] {
            let dto = CreateDuesDto {
                nro_socio: Some(IntOrText::Int(42)),
                mes: Some(mes),
                anio: Some(IntOrText::Int(2024)),
            };
            assert!(matches!(
                GenerateDuesParams::from_dto(dto),
                Err(AppError::BadRequest(_))
            ));
        }
    }

    #[test]
    fn monthly_closing_targets_all_members() {
        let params =
            GenerateDuesParams::monthly_closing(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
        assert_eq!(params.member_number, None);
        assert_eq!(params.period, None);
        assert_eq!(params.year, 2025);
    }
}
