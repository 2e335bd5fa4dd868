//! Country-to-region classification.
//!
//! A [`RegionMap`] turns country names into coarse geographic regions.
//! Lookups never fail: countries the map does not know about fall into the
//! reserved [`OTHER_REGION`] bucket, which is the designed behavior for
//! datasets containing typos or countries outside the curated set.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Bucket for countries absent from the map.
pub const OTHER_REGION: &str = "その他";

/// Curated country/region pairs backing [`default_region_map`].
static DEFAULT_REGIONS: &[(&str, &str)] = &[
    // アジア
    ("日本", "アジア"),
    ("中国", "アジア"),
    ("韓国", "アジア"),
    ("インド", "アジア"),
    ("タイ", "アジア"),
    ("ベトナム", "アジア"),
    ("インドネシア", "アジア"),
    ("マレーシア", "アジア"),
    ("シンガポール", "アジア"),
    ("フィリピン", "アジア"),
    // ヨーロッパ
    ("ドイツ", "ヨーロッパ"),
    ("フランス", "ヨーロッパ"),
    ("イギリス", "ヨーロッパ"),
    ("イタリア", "ヨーロッパ"),
    ("スペイン", "ヨーロッパ"),
    ("オランダ", "ヨーロッパ"),
    ("スイス", "ヨーロッパ"),
    ("スウェーデン", "ヨーロッパ"),
    ("ノルウェー", "ヨーロッパ"),
    ("ロシア", "ヨーロッパ"),
    // アフリカ
    ("エジプト", "アフリカ"),
    ("ケニア", "アフリカ"),
    ("南アフリカ", "アフリカ"),
    ("モロッコ", "アフリカ"),
    ("ナイジェリア", "アフリカ"),
    ("エチオピア", "アフリカ"),
    ("ガーナ", "アフリカ"),
    ("タンザニア", "アフリカ"),
    ("アルジェリア", "アフリカ"),
    ("チュニジア", "アフリカ"),
    // 北アメリカ
    ("アメリカ", "北アメリカ"),
    ("カナダ", "北アメリカ"),
    ("メキシコ", "北アメリカ"),
    ("キューバ", "北アメリカ"),
    ("パナマ", "北アメリカ"),
    ("ジャマイカ", "北アメリカ"),
    ("コスタリカ", "北アメリカ"),
    ("グアテマラ", "北アメリカ"),
    // 南アメリカ
    ("ブラジル", "南アメリカ"),
    ("アルゼンチン", "南アメリカ"),
    ("コロンビア", "南アメリカ"),
    ("チリ", "南アメリカ"),
    ("ペルー", "南アメリカ"),
    ("ベネズエラ", "南アメリカ"),
    ("エクアドル", "南アメリカ"),
    ("ボリビア", "南アメリカ"),
    // オセアニア
    ("オーストラリア", "オセアニア"),
    ("ニュージーランド", "オセアニア"),
    ("フィジー", "オセアニア"),
    ("パプアニューギニア", "オセアニア"),
    ("ソロモン諸島", "オセアニア"),
    ("バヌアツ", "オセアニア"),
    ("サモア", "オセアニア"),
];

static DEFAULT_REGION_MAP: Lazy<RegionMap> =
    Lazy::new(|| RegionMap::from_pairs(DEFAULT_REGIONS.iter().copied()));

/// The built-in country/region map.
///
/// Built once on first use and shared by reference; callers that need an
/// owned copy (e.g. to hold alongside a loaded override) can clone it.
pub fn default_region_map() -> &'static RegionMap {
    &DEFAULT_REGION_MAP
}

/// Immutable lookup table from country name to region name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionMap {
    map: BTreeMap<String, String>,
}

impl RegionMap {
    /// Build a map from country/region pairs. Later duplicates win.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            map: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Region for a country, or [`OTHER_REGION`] when the country is unmapped.
    ///
    /// Country names are matched by exact string equality; no normalization
    /// or case folding is applied.
    pub fn classify(&self, country: &str) -> &str {
        self.map
            .get(country)
            .map(String::as_str)
            .unwrap_or(OTHER_REGION)
    }

    /// Number of mapped countries.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// True if no countries are mapped.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
