use std::fmt;

use serde::de::{Deserializer, MapAccess, Visitor};
use serde::Deserialize;

#[derive(Deserialize)]
pub(crate) struct OverviewEnvelope {
    pub(crate) stock_market: StockMarketNode,
    pub(crate) crypto_market: CryptoMarketNode,
}

#[derive(Deserialize)]
pub(crate) struct StockMarketNode {
    #[serde(default)]
    pub(crate) indices: OrderedItems,
    pub(crate) avg_trend: Option<f64>,
}

#[derive(Deserialize)]
pub(crate) struct CryptoMarketNode {
    #[serde(default)]
    pub(crate) coins: OrderedItems,
    pub(crate) avg_trend: Option<f64>,
}

#[derive(Deserialize)]
pub(crate) struct ItemNode {
    pub(crate) current_price: Option<PriceNode>,
    pub(crate) percentage_change: Option<f64>,
}

/// Prices normally arrive preformatted (`"$5021.84"`) but a bare number is accepted too.
#[derive(Deserialize)]
#[serde(untagged)]
pub(crate) enum PriceNode {
    Text(String),
    Number(f64),
}

impl PriceNode {
    pub(crate) fn into_string(self) -> String {
        match self {
            Self::Text(s) => s,
            Self::Number(n) => format!("${n:.2}"),
        }
    }
}

/// A JSON object kept in document order (serde_json's default map is sorted).
#[derive(Default)]
pub(crate) struct OrderedItems(pub(crate) Vec<(String, ItemNode)>);

impl<'de> Deserialize<'de> for OrderedItems {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ItemsVisitor;

        impl<'de> Visitor<'de> for ItemsVisitor {
            type Value = OrderedItems;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of instrument name to price and change")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut items = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((name, item)) = map.next_entry::<String, ItemNode>()? {
                    items.push((name, item));
                }
                Ok(OrderedItems(items))
            }
        }

        deserializer.deserialize_map(ItemsVisitor)
    }
}
