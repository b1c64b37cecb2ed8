use serde::Deserialize;

use crate::core::Signal;
use crate::strategy::model::IndicatorValue;

#[derive(Deserialize)]
pub(crate) struct StrategyEnvelope {
    pub(crate) technical_indicators: Option<IndicatorsNode>,
    pub(crate) articles: Option<Vec<ArticleNode>>,
    pub(crate) sentiment_data: Option<SentimentDataNode>,
    pub(crate) positive_sentiment: Option<f64>,
    pub(crate) negative_sentiment: Option<f64>,
    pub(crate) final_signal: Option<Signal>,
    pub(crate) error: Option<String>,
}

#[derive(Deserialize)]
pub(crate) struct SentimentDataNode {
    pub(crate) articles: Option<Vec<ArticleNode>>,
}

#[derive(Deserialize)]
pub(crate) struct IndicatorsNode {
    #[serde(rename = "RSI")]
    pub(crate) rsi: Option<IndicatorValue>,
    #[serde(rename = "MA_50")]
    pub(crate) ma_50: Option<IndicatorValue>,
    #[serde(rename = "MA_20")]
    pub(crate) ma_20: Option<IndicatorValue>,
    #[serde(rename = "Volume")]
    pub(crate) volume: Option<IndicatorValue>,
}

#[derive(Deserialize)]
pub(crate) struct ArticleNode {
    pub(crate) title: Option<String>,
    pub(crate) gpt_analysis: Option<String>,
}
