use serde::{Deserialize, Serialize};

use crate::prefecture;

/// Payload of `GET /postcodes/{code}.json`. Every field may be null.
///
/// See <https://postcode.teraren.com/doc/redoc#schema/Postcode>.
#[derive(Debug, Default, Deserialize)]
pub struct RawAddress {
    pub jis: Option<String>,
    pub old: Option<String>,
    pub prefecture: Option<String>,
    pub prefecture_kana: Option<String>,
    pub prefecture_roman: Option<String>,
    pub city: Option<String>,
    pub city_kana: Option<String>,
    pub city_roman: Option<String>,
    pub suburb: Option<String>,
    pub suburb_kana: Option<String>,
    pub suburb_roman: Option<String>,
    pub street_address: Option<String>,
    pub office: Option<String>,
    pub office_kana: Option<String>,
    pub office_roman: Option<String>,
    pub is_separated_suburb: Option<bool>,
    pub is_koaza: Option<bool>,
    pub is_chome: Option<bool>,
    pub is_include_area: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    /// 全国地方公共団体コード
    pub jis: String,
    /// 旧郵便番号 (3 or 5 digits)
    pub old: String,
    pub prefecture: String,
    pub prefecture_kana: String,
    pub prefecture_roman: String,
    pub city: String,
    pub city_kana: String,
    pub city_roman: String,
    pub suburb: String,
    pub suburb_kana: String,
    pub suburb_roman: String,
    /// 小字名、丁目、番地等
    pub street_address: String,
    /// 大口事業所名
    pub office: String,
    pub office_kana: String,
    pub office_roman: String,
    pub is_separated_suburb: bool,
    pub is_koaza: bool,
    pub is_chome: bool,
    pub is_include_area: bool,

    /// Index into [`prefecture::PREFECTURES`], `-1` when the name is unknown.
    pub prefecture_id: i32,
    /// city, suburb, street_address and office joined by spaces.
    pub address: String,
    /// `address` prefixed by the prefecture.
    #[serde(rename = "fullAddress")]
    pub full_address: String,
}

impl Address {
    pub fn prefecture_name(&self) -> Option<&'static str> {
        prefecture::name(self.prefecture_id)
    }
}

impl From<RawAddress> for Address {
    /// Null strings become empty and null flags become `false`, then the derived
    /// fields are computed from the normalized values.
    fn from(raw: RawAddress) -> Self {
        let prefecture = raw.prefecture.unwrap_or_default();
        let city = raw.city.unwrap_or_default();
        let suburb = raw.suburb.unwrap_or_default();
        let street_address = raw.street_address.unwrap_or_default();
        let office = raw.office.unwrap_or_default();

        let address = join_non_empty(&[&city, &suburb, &street_address, &office]);
        let full_address =
            join_non_empty(&[&prefecture, &city, &suburb, &street_address, &office]);

        Address {
            jis: raw.jis.unwrap_or_default(),
            old: raw.old.unwrap_or_default(),
            prefecture_id: prefecture::index_of(&prefecture),
            prefecture,
            prefecture_kana: raw.prefecture_kana.unwrap_or_default(),
            prefecture_roman: raw.prefecture_roman.unwrap_or_default(),
            city,
            city_kana: raw.city_kana.unwrap_or_default(),
            city_roman: raw.city_roman.unwrap_or_default(),
            suburb,
            suburb_kana: raw.suburb_kana.unwrap_or_default(),
            suburb_roman: raw.suburb_roman.unwrap_or_default(),
            street_address,
            office,
            office_kana: raw.office_kana.unwrap_or_default(),
            office_roman: raw.office_roman.unwrap_or_default(),
            is_separated_suburb: raw.is_separated_suburb.unwrap_or_default(),
            is_koaza: raw.is_koaza.unwrap_or_default(),
            is_chome: raw.is_chome.unwrap_or_default(),
            is_include_area: raw.is_include_area.unwrap_or_default(),
            address,
            full_address,
        }
    }
}

fn join_non_empty(parts: &[&str]) -> String {
    parts
        .iter()
        .filter(|p| !p.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
}
