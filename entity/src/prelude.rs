pub use super::cobranza::Entity as Cobranza;
pub use super::socio::Entity as Socio;
