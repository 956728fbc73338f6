use chrono::{DateTime, NaiveDateTime, Utc};
use rust_decimal::Decimal;
use serde::{de, Deserialize, Deserializer, Serialize};
use sqlx::postgres::PgRow;
use sqlx::Row;

use crate::entity::{Dominio, Origen};
use crate::utils::parse_timestamp;

// Deposit row as stored in the `depositos` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deposito {
    pub id: i64,
    pub nombre: String,
    pub monto: Decimal,
    pub moneda: String,
    pub origen: Option<String>,
    pub dominio: Option<String>,
    pub mensaje: String,
    pub canal: String,
    pub hash: String,
    #[serde(deserialize_with = "deserialize_creado_en")]
    pub creado_en: DateTime<Utc>,
}

// Offset-less timestamps are read as UTC rather than failing the whole response
fn deserialize_creado_en<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    parse_timestamp(&value)
        .ok_or_else(|| de::Error::custom(format!("invalid creado_en timestamp: {}", value)))
}

// Accepts both `timestamptz` and `timestamp` columns for `creado_en`
impl<'r> sqlx::FromRow<'r, PgRow> for Deposito {
    fn from_row(row: &'r PgRow) -> Result<Self, sqlx::Error> {
        let creado_en = match row.try_get::<DateTime<Utc>, _>("creado_en") {
            Ok(timestamp) => timestamp,
            Err(_) => row.try_get::<NaiveDateTime, _>("creado_en")?.and_utc(),
        };

        Ok(Self {
            id: row.try_get("id")?,
            nombre: row.try_get("nombre")?,
            monto: row.try_get("monto")?,
            moneda: row.try_get("moneda")?,
            origen: row.try_get("origen")?,
            dominio: row.try_get("dominio")?,
            mensaje: row.try_get("mensaje")?,
            canal: row.try_get("canal")?,
            hash: row.try_get("hash")?,
            creado_en,
        })
    }
}

impl Deposito {
    pub fn dominio_kind(&self) -> Option<Dominio> {
        self.dominio.as_deref().map(Dominio::parse)
    }

    pub fn origen_kind(&self) -> Option<Origen> {
        self.origen.as_deref().map(Origen::parse)
    }

    // Amount prefixed by the currency, e.g. "S/ 100.00"
    pub fn format_monto(&self) -> String {
        format!("{} {}", self.moneda, crate::utils::format_amount(self.monto))
    }

    /// Case-insensitive substring match against sender name or message.
    /// `needle` must already be lowercased.
    pub fn matches_query(&self, needle: &str) -> bool {
        self.nombre.to_lowercase().contains(needle) || self.mensaje.to_lowercase().contains(needle)
    }
}

/// Insert shape. Ids and timestamps are assigned by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewDeposito {
    pub nombre: String,
    pub monto: Decimal,
    pub moneda: String,
    pub origen: Option<String>,
    pub dominio: Option<String>,
    pub mensaje: String,
    pub canal: String,
    pub hash: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DepositoUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nombre: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monto: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub moneda: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origen: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dominio: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mensaje: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub canal: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,
}
