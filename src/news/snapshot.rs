//! Fixed article sets returned when every live news source has failed.

use chrono::{DateTime, Duration, Utc};

use super::NewsFeed;
use super::model::{Article, ArticleSentiment};

/// One canned article; `age_ms` is subtracted from "now" when the snapshot is materialized.
pub struct SnapshotEntry {
    pub title: &'static str,
    pub source: &'static str,
    pub age_ms: i64,
    pub url: &'static str,
    pub label: &'static str,
    pub score: f64,
    pub analysis: &'static str,
}

pub static BUSINESS_SNAPSHOT: [SnapshotEntry; 6] = [
    SnapshotEntry {
        title: "Apple Reports Record Quarterly Revenue Despite Market Challenges",
        source: "Financial Times",
        age_ms: 3_600_000,
        url: "https://example.com/apple-quarterly-revenue",
        label: "positive",
        score: 0.85,
        analysis: "Strong performance in a challenging economic environment. Investors remain optimistic about future growth.",
    },
    SnapshotEntry {
        title: "Tesla Delivers More Cars Than Expected in Q2",
        source: "Bloomberg",
        age_ms: 7_200_000,
        url: "https://example.com/tesla-delivers",
        label: "positive",
        score: 0.78,
        analysis: "Tesla continues to overcome supply chain challenges, indicating strong demand for electric vehicles.",
    },
    SnapshotEntry {
        title: "Fed Signals Interest Rate Hike in Effort to Combat Inflation",
        source: "Wall Street Journal",
        age_ms: 10_800_000,
        url: "https://example.com/fed-rate-hike",
        label: "neutral",
        score: 0.52,
        analysis: "Expected move by the Federal Reserve as it continues to battle persistent inflation. Markets had largely priced in this decision.",
    },
    SnapshotEntry {
        title: "Microsoft Acquires AI Startup for $2 Billion",
        source: "CNBC",
        age_ms: 14_400_000,
        url: "https://example.com/microsoft-acquisition",
        label: "positive",
        score: 0.81,
        analysis: "Strategic acquisition to strengthen Microsoft's AI capabilities amid increasing competition in the sector.",
    },
    SnapshotEntry {
        title: "Global Supply Chain Issues Expected to Persist Through 2023",
        source: "Reuters",
        age_ms: 18_000_000,
        url: "https://example.com/supply-chain-issues",
        label: "negative",
        score: 0.67,
        analysis: "Ongoing challenges for manufacturers and retailers. Companies with robust logistics networks are better positioned to navigate these disruptions.",
    },
    SnapshotEntry {
        title: "Amazon Announces New Fulfillment Centers, Creating 10,000 Jobs",
        source: "Business Insider",
        age_ms: 21_600_000,
        url: "https://example.com/amazon-expansion",
        label: "positive",
        score: 0.89,
        analysis: "Significant expansion of Amazon's logistics network, highlighting confidence in continued e-commerce growth.",
    },
];

pub static CRYPTO_SNAPSHOT: [SnapshotEntry; 6] = [
    SnapshotEntry {
        title: "Bitcoin Surges Past $60,000 as Institutional Adoption Grows",
        source: "CoinDesk",
        age_ms: 2_800_000,
        url: "https://example.com/bitcoin-surge",
        label: "positive",
        score: 0.91,
        analysis: "Increased institutional investment and limited supply continue to drive Bitcoin's price appreciation.",
    },
    SnapshotEntry {
        title: "Ethereum Completes Major Network Upgrade, Improving Scalability",
        source: "The Block",
        age_ms: 5_200_000,
        url: "https://example.com/ethereum-upgrade",
        label: "positive",
        score: 0.87,
        analysis: "Significant technical milestone that addresses Ethereum's scaling challenges and potentially reduces transaction fees.",
    },
    SnapshotEntry {
        title: "Regulatory Concerns Grow as Cryptocurrency Market Expands",
        source: "Financial Times",
        age_ms: 9_100_000,
        url: "https://example.com/crypto-regulation",
        label: "neutral",
        score: 0.48,
        analysis: "Increased regulatory scrutiny is expected as cryptocurrencies become more mainstream. Clear regulations could actually benefit the industry long-term.",
    },
    SnapshotEntry {
        title: "Binance Faces Probe from Financial Regulators",
        source: "Bloomberg",
        age_ms: 12_500_000,
        url: "https://example.com/binance-probe",
        label: "negative",
        score: 0.71,
        analysis: "Regulatory challenges for one of the world's largest cryptocurrency exchanges. This could impact market liquidity in the short term.",
    },
    SnapshotEntry {
        title: "Major Bank Launches Cryptocurrency Custody Service for Institutional Clients",
        source: "Reuters",
        age_ms: 16_700_000,
        url: "https://example.com/bank-crypto-custody",
        label: "positive",
        score: 0.82,
        analysis: "Notable step in the integration of cryptocurrencies into traditional financial infrastructure, potentially lowering barriers to institutional adoption.",
    },
    SnapshotEntry {
        title: "NFT Market Shows Signs of Cooling After Record-Breaking Quarter",
        source: "CNBC",
        age_ms: 19_900_000,
        url: "https://example.com/nft-market-cooling",
        label: "neutral",
        score: 0.54,
        analysis: "Normalization of the NFT market after period of extraordinary growth. Focus is shifting to projects with clear utility and long-term value.",
    },
];

/// The canned entries for `feed`.
pub fn entries(feed: NewsFeed) -> &'static [SnapshotEntry] {
    match feed {
        NewsFeed::Business => &BUSINESS_SNAPSHOT,
        NewsFeed::Crypto => &CRYPTO_SNAPSHOT,
    }
}

/// Materializes the snapshot for `feed`, timestamping each article relative to `now`.
pub fn snapshot_at(feed: NewsFeed, now: DateTime<Utc>) -> Vec<Article> {
    entries(feed)
        .iter()
        .map(|e| Article {
            title: e.title.to_string(),
            original_title: None,
            source: Some(e.source.to_string()),
            published_at: Some(now - Duration::milliseconds(e.age_ms)),
            url: Some(e.url.to_string()),
            sentiment: Some(ArticleSentiment {
                label: Some(e.label.to_string()),
                confidence: None,
                score: Some(e.score),
            }),
            analysis: Some(e.analysis.to_string()),
        })
        .collect()
}

/// [`snapshot_at`] with the current time.
pub fn snapshot(feed: NewsFeed) -> Vec<Article> {
    snapshot_at(feed, Utc::now())
}
